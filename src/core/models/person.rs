//! Shared contact-info value type
//!
//! Every role record (student, faculty, staff) embeds a `ContactInfo` rather
//! than inheriting from a base class. Identity fields (`name`, `id`) are
//! fixed at construction; email and phone can be replaced through
//! [`ContactInfo::update_contact`].

use regex::Regex;
use std::sync::LazyLock;

/// Email pattern: local part, `@`, domain, dot, TLD.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("invalid email pattern"));

/// Minimum accepted phone number length (digits).
const MIN_PHONE_DIGITS: usize = 9;

/// Validated contact record shared by all university roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    /// Full name
    pub name: String,
    /// Person identifier (e.g., "PS001")
    pub id: String,
    /// Email address, validated at construction
    pub email: String,
    /// Phone number, digits only, validated at construction
    pub phone: String,
}

impl ContactInfo {
    /// Create a validated contact record
    ///
    /// # Errors
    /// Returns an error when the email does not match `local@domain.tld` or
    /// the phone is not all-digit with at least 9 characters.
    pub fn new(name: &str, id: &str, email: &str, phone: &str) -> Result<Self, String> {
        validate_email(email)?;
        validate_phone(phone)?;

        Ok(Self {
            name: name.to_string(),
            id: id.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        })
    }

    /// Update contact fields, overwriting only non-empty replacements
    ///
    /// Passing `None` (or an empty string) for either field leaves the
    /// current value in place.
    pub fn update_contact(&mut self, email: Option<&str>, phone: Option<&str>) {
        if let Some(email) = email {
            if !email.is_empty() {
                self.email = email.to_string();
            }
        }
        if let Some(phone) = phone {
            if !phone.is_empty() {
                self.phone = phone.to_string();
            }
        }
    }

    /// Render the base multi-line summary (Name/ID/Email/Phone)
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "Name: {}\nID: {}\nEmail: {}\nPhone: {}",
            self.name, self.id, self.email, self.phone
        )
    }
}

/// Validate an email address against the accepted pattern
///
/// # Errors
/// Returns an error describing the rejected value.
pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(format!("Invalid email address: '{email}'"))
    }
}

/// Validate a phone number: digits only, length >= 9
///
/// # Errors
/// Returns an error describing the rejected value.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.len() >= MIN_PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!(
            "Invalid phone number: '{phone}' (digits only, at least {MIN_PHONE_DIGITS})"
        ))
    }
}

/// Validate a date string in `YYYY-MM-DD` form
///
/// # Errors
/// Returns an error when the value does not parse as a calendar date.
pub fn validate_date(date: &str) -> Result<(), String> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| format!("Invalid date: '{date}' (expected YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_contact() {
        let contact = ContactInfo::new("Test", "P999", "t@nibm.lk", "0700000000")
            .expect("valid contact should construct");

        assert_eq!(contact.name, "Test");
        assert_eq!(contact.id, "P999");
        assert_eq!(contact.email, "t@nibm.lk");
        assert_eq!(contact.phone, "0700000000");
    }

    #[test]
    fn test_rejects_bad_email() {
        assert!(ContactInfo::new("Test", "P999", "tnibm.lk", "0700000000").is_err());
        assert!(ContactInfo::new("Test", "P999", "t@nibm", "0700000000").is_err());
        assert!(ContactInfo::new("Test", "P999", "", "0700000000").is_err());
    }

    #[test]
    fn test_rejects_bad_phone() {
        // Non-digit character
        assert!(ContactInfo::new("Test", "P999", "t@nibm.lk", "07000000@").is_err());
        // Too short
        assert!(ContactInfo::new("Test", "P999", "t@nibm.lk", "07000000").is_err());
    }

    #[test]
    fn test_update_contact_skips_empty() {
        let mut contact = ContactInfo::new("Test", "P999", "t@nibm.lk", "0700000000").unwrap();

        contact.update_contact(Some("new@nibm.lk"), None);
        assert_eq!(contact.email, "new@nibm.lk");
        assert_eq!(contact.phone, "0700000000");

        contact.update_contact(Some(""), Some("0711111111"));
        assert_eq!(contact.email, "new@nibm.lk");
        assert_eq!(contact.phone, "0711111111");
    }

    #[test]
    fn test_info_lines() {
        let contact = ContactInfo::new("Test", "P999", "t@nibm.lk", "0700000000").unwrap();
        let info = contact.info();

        assert_eq!(
            info,
            "Name: Test\nID: P999\nEmail: t@nibm.lk\nPhone: 0700000000"
        );
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-10-01").is_ok());
        assert!(validate_date("202510-01").is_err());
        assert!(validate_date("2025-13-01").is_err());
    }
}
