//! Integration tests for configuration management

use campus_analytics::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.scraper.base_url.is_empty(),
        "Default base_url should not be empty"
    );
    assert!(config.scraper.pages > 0, "Default pages should be positive");
    assert!(
        !config.paths.raw_dir.is_empty(),
        "Default raw_dir should not be empty"
    );
    assert!(
        !config.paths.cleaned_dir.is_empty(),
        "Default cleaned_dir should not be empty"
    );
    assert!(
        !config.paths.charts_dir.is_empty(),
        "Default charts_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[scraper]
base_url = "https://books.example.com"
pages = 3
retries = 2
timeout_secs = 5

[paths]
raw_dir = "./raw"
cleaned_dir = "./cleaned"
charts_dir = "./charts"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.scraper.base_url, "https://books.example.com");
    assert_eq!(config.scraper.pages, 3);
    assert_eq!(config.scraper.retries, 2);
    assert_eq!(config.scraper.timeout_secs, 5);
    assert_eq!(config.paths.raw_dir, "./raw");
    assert_eq!(config.paths.cleaned_dir, "./cleaned");
    assert_eq!(config.paths.charts_dir, "./charts");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[scraper]

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.scraper.base_url, ""); // Default empty
    assert_eq!(config.scraper.pages, 0); // Default zero
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CAMPUS_ANALYTICS/test.log"

[scraper]

[paths]
raw_dir = "$CAMPUS_ANALYTICS/data/raw"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("campusanalytics"));
    assert!(!config.logging.file.contains("$CAMPUS_ANALYTICS"));
    assert!(config.paths.raw_dir.contains("campusanalytics"));
    assert!(!config.paths.raw_dir.contains("$CAMPUS_ANALYTICS"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    let level = config.get("level");
    assert!(level.is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("pages", "7").expect("Failed to set pages");
    assert_eq!(config.scraper.pages, 7);

    config
        .set("base_url", "https://mirror.example.com")
        .expect("Failed to set base_url");
    assert_eq!(config.scraper.base_url, "https://mirror.example.com");
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("pages", "many").is_err());
    assert!(config.set("timeout_secs", "-1").is_err());
    assert!(config.set("no_such_key", "x").is_err());
}

#[test]
fn test_config_kebab_key_aliases() {
    let mut config = Config::from_defaults();

    config
        .set("base-url", "https://alias.example.com")
        .expect("kebab alias should work");
    assert_eq!(
        config.get("base_url").unwrap(),
        "https://alias.example.com"
    );

    config
        .set("charts-dir", "/tmp/charts")
        .expect("kebab alias should work");
    assert_eq!(config.get("charts_dir").unwrap(), "/tmp/charts");
}

#[test]
fn test_config_unset_restores_default() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.set("pages", "99").expect("Failed to set pages");
    assert_eq!(config.scraper.pages, 99);

    config
        .unset("pages", &defaults)
        .expect("Failed to unset pages");
    assert_eq!(config.scraper.pages, defaults.scraper.pages);

    assert!(config.unset("no_such_key", &defaults).is_err());
}

#[test]
fn test_merge_defaults_fills_missing() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"

[scraper]

[paths]
"#,
    )
    .expect("Failed to parse TOML");

    let changed = config.merge_defaults(&defaults);
    assert!(changed, "merge should report filled fields");

    // Explicitly-set field is kept, empty ones are filled from defaults
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.scraper.base_url, defaults.scraper.base_url);
    assert_eq!(config.scraper.pages, defaults.scraper.pages);
    assert_eq!(config.paths.charts_dir, defaults.paths.charts_dir);

    // A second merge has nothing left to do
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let original_pages = config.scraper.pages;

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        base_url: Some("https://override.example.com".to_string()),
        charts_dir: Some("/tmp/override-charts".to_string()),
        ..Default::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.scraper.base_url, "https://override.example.com");
    assert_eq!(config.paths.charts_dir, "/tmp/override-charts");
    // Untouched fields keep their values
    assert_eq!(config.scraper.pages, original_pages);
}

#[test]
fn test_config_display_lists_all_sections() {
    let config = Config::from_defaults();
    let rendered = config.to_string();

    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[scraper]"));
    assert!(rendered.contains("[paths]"));
    assert!(rendered.contains("base_url"));
    assert!(rendered.contains("charts_dir"));
}
