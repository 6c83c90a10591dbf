//! Minimal CSV support for the pipeline stages
//!
//! Quote- and CRLF-tolerant parsing, quoting on write, and the UTF-8
//! byte-order marker the pipeline's tables carry (files are consumed by
//! spreadsheet tools that expect it).

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// UTF-8 byte-order marker written at the start of every output file
const BOM: &str = "\u{feff}";

/// Parse CSV text into rows of fields
///
/// Handles quoted fields, doubled-quote escapes, and CRLF line endings.
/// Empty lines are skipped.
#[must_use]
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Quote a field when it contains a separator, quote, or line break
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render header + rows as CSV text with a leading BOM
#[must_use]
pub fn to_csv_string(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::from(BOM);
    let _ = writeln!(
        out,
        "{}",
        header
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(",")
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{}",
            row.iter()
                .map(|cell| escape_field(cell))
                .collect::<Vec<_>>()
                .join(",")
        );
    }
    out
}

/// Write header + rows to a CSV file, creating parent directories
///
/// # Errors
/// Returns an error when the directory cannot be created or the file cannot
/// be written.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    header: &[&str],
    rows: &[Vec<String>],
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_csv_string(header, rows))?;
    Ok(())
}

/// Read a CSV file into (header, rows)
///
/// # Errors
/// Returns an error when the file cannot be read or is empty.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<String>, Vec<Vec<String>>), Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;

    let mut rows = parse_rows(&content);
    if rows.is_empty() {
        return Err(format!("{} is empty", path.display()).into());
    }

    let header = rows.remove(0);
    Ok((header, rows))
}
