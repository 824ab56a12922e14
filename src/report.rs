//! Formatting of the static city table for the `rows` command.
//!
//! Pure functions: (rows, OutputFormat) → String.
//! No I/O, no side effects.

use crate::config::OutputFormat;
use crate::data::{COLUMNS, CityRow};

/// Format rows for output.
///
/// # Errors
///
/// Only the JSON format can fail, if serialization does.
pub fn format_rows(rows: &[CityRow], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(rows)),
        OutputFormat::Json => serde_json::to_string_pretty(rows),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

/// Left-aligned columns sized to their widest cell.
fn format_human(rows: &[CityRow]) -> String {
    let mut widths = COLUMNS.map(|c| c.title.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS.map(|c| c.title), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&rule.join(" "));
    out.push('\n');
    for row in rows {
        push_line(&mut out, &row.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" ").trim_end());
    out.push('\n');
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CITY_ROWS;

    #[test]
    fn human_format_has_header_and_every_row() {
        let output = format_rows(&CITY_ROWS, OutputFormat::Human).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), CITY_ROWS.len() + 2);
        assert!(lines[0].starts_with("Rank City"));
        assert!(lines[2].starts_with("1    Tokyo"));
        assert!(output.contains("Ho Chi Minh City"));
    }

    #[test]
    fn human_columns_line_up() {
        let output = format_rows(&CITY_ROWS[..3], OutputFormat::Human).unwrap();
        let city_col: Vec<usize> = output
            .lines()
            .skip(2)
            .map(|l| l.find(|c: char| c.is_uppercase()).unwrap())
            .collect();
        // City names start in the same column on every row.
        assert!(city_col.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn human_format_empty_rows() {
        let output = format_rows(&[], OutputFormat::Human).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Population"));
    }

    #[test]
    fn json_format_is_array_of_rows() {
        let output = format_rows(&CITY_ROWS, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 100);
        assert_eq!(rows[0]["rank"], "1");
        assert_eq!(rows[0]["city"], "Tokyo");
        assert_eq!(rows[0]["country"], "Japan");
        assert_eq!(rows[0]["population"], "37,274,000");
    }

    #[test]
    fn json_format_empty_rows() {
        let output = format_rows(&[], OutputFormat::Json).unwrap();
        assert_eq!(output, "[]");
    }
}
