//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, width: usize, align: Align) -> Self {
        Self {
            header: header.to_string(),
            width,
            align,
        }
    }

    fn cell(&self, value: &str) -> String {
        match self.align {
            Align::Left => pad_right(value, self.width),
            Align::Right => pad_left(value, self.width),
        }
    }
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

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table; each line is passed through `decorate` with its
    /// row index after padding, so escape codes never disturb alignment.
    pub fn render_with<F>(&self, decorate: F) -> String
    where
        F: Fn(usize, String) -> String,
    {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|col| col.cell(&col.header))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        // Rows
        for (idx, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| col.cell(row.get(i).map(String::as_str).unwrap_or("")))
                .collect();
            out.push_str(&decorate(idx, cells.join(" ").trim_end().to_string()));
            out.push('\n');
        }

        out
    }
}
