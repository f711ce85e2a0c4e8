//! Console output rendering
//!
//! The formatter renders command results either as a two-column table or as
//! raw text. The accent color is an explicit construction parameter, not a
//! process-wide constant.

use colored::{Color, Colorize};
use std::io::{self, Write};

/// Renders command results to an output stream
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    accent: Color,
}

impl OutputFormatter {
    /// Create a formatter with the given accent color
    pub fn new(accent: Color) -> Self {
        OutputFormatter { accent }
    }

    /// Create a formatter from a color name (unknown names fall back to
    /// the terminal default handling in `colored`)
    pub fn from_color_name(name: &str) -> Self {
        OutputFormatter {
            accent: Color::from(name),
        }
    }

    /// Apply the accent style to a piece of text
    pub fn accent(&self, text: &str) -> String {
        text.color(self.accent).to_string()
    }

    /// Render label/value rows as a two-column table, values accented
    pub fn render_table<W: Write>(&self, w: &mut W, rows: &[(String, String)]) -> io::Result<()> {
        let label_width = rows
            .iter()
            .map(|(label, _)| label.len())
            .chain(std::iter::once("Property".len()))
            .max()
            .unwrap_or(0);

        writeln!(w, "{:<width$}  {}", "Property", "Value", width = label_width)?;
        writeln!(w, "{:<width$}  {}", "-".repeat(label_width), "-----", width = label_width)?;

        for (label, value) in rows {
            // Pad on the plain text so ANSI escapes don't skew the column.
            let padding = label_width.saturating_sub(label.len());
            writeln!(w, "{}{}  {}", label, " ".repeat(padding), self.accent(value))?;
        }

        Ok(())
    }

    /// Emit text verbatim, followed by a newline
    pub fn render_raw<W: Write>(&self, w: &mut W, text: &str) -> io::Result<()> {
        writeln!(w, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_formatter() -> OutputFormatter {
        colored::control::set_override(false);
        OutputFormatter::new(Color::Cyan)
    }

    #[test]
    fn test_render_raw() {
        let formatter = plain_formatter();
        let mut out = Vec::new();
        formatter.render_raw(&mut out, "{\"country\":\"US\"}").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"country\":\"US\"}\n");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let formatter = plain_formatter();
        let mut out = Vec::new();
        let rows = vec![
            ("country".to_string(), "US".to_string()),
            ("ip".to_string(), "8.8.8.8".to_string()),
        ];
        formatter.render_table(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Property"));
        assert_eq!(lines[2], "country   US");
        assert_eq!(lines[3], "ip        8.8.8.8");
    }

    #[test]
    fn test_render_table_empty() {
        let formatter = plain_formatter();
        let mut out = Vec::new();
        formatter.render_table(&mut out, &[]).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Header only
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_from_color_name() {
        colored::control::set_override(false);
        let formatter = OutputFormatter::from_color_name("magenta");
        assert_eq!(formatter.accent("x"), "x");
    }
}
