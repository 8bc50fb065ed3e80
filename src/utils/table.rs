//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            min_width: 0,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: separator.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Display width of every column: header, cells and minimum.
    pub fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain([UnicodeWidthStr::width(col.header.as_str()), col.min_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.render_styled(|_, _| None)
    }

    /// Render with an optional ANSI color per (row, column) cell.
    /// Widths are computed on the plain text, so colors never break alignment.
    pub fn render_styled<F>(&self, style: F) -> String
    where
        F: Fn(usize, usize) -> Option<&'static str>,
    {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        let sep = self.separator.chars().next().unwrap_or('-');
        out.push_str(&sep.to_string().repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            for (c, w) in widths.iter().enumerate() {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                let padded = pad(cell, *w);
                match style(r, c) {
                    Some(color) => out.push_str(&format!("{color}{padded}{RESET}")),
                    None => out.push_str(&padded),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_widest_cell() {
        let mut t = Table::new(vec![Column::new("Name"), Column::new("St")], "-");
        t.add_row(vec!["Aziz".into(), "Working".into()]);
        t.add_row(vec!["Ulugʻbek".into(), "-".into()]);

        assert_eq!(t.widths(), vec![8, 7]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name     St      ");
        assert_eq!(lines[1], "-".repeat(16));
        assert_eq!(lines[2], "Aziz     Working ");
    }

    #[test]
    fn styled_cells_keep_alignment() {
        let mut t = Table::new(vec![Column::new("A")], "=");
        t.add_row(vec!["x".into()]);
        let out = t.render_styled(|_, _| Some("\x1b[32m"));
        assert!(out.contains("\x1b[32mx\x1b[0m "));
        assert!(out.contains("=\n"));
    }
}
