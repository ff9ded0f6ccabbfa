//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{display_width, pad_right, wrap_value};

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column widths grow to fit the header; cell text beyond `width` wraps.
    pub fn with_headers(headers: &[&str], width: usize) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: width.max(display_width(h)),
                })
                .collect(),
        )
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows; a wrapped cell continues on the following lines
        for row in &self.rows {
            let cells: Vec<Vec<String>> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let text = row.get(i).map(String::as_str).unwrap_or("");
                    if display_width(text) <= col.width {
                        vec![text.to_string()]
                    } else {
                        wrap_value(text, col.width)
                    }
                })
                .collect();

            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                for (i, col) in self.columns.iter().enumerate() {
                    let text = cells[i].get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&pad_right(text, col.width));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
