//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.chars().count(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<(Vec<String>, Option<&'static str>)>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns so that every cell fits.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.push(row, None);
    }

    /// Same as `add_row`, the whole line is wrapped in `color` (ANSI).
    pub fn add_row_colored(&mut self, row: Vec<String>, color: &'static str) {
        self.push(row, Some(color));
    }

    fn push(&mut self, row: Vec<String>, color: Option<&'static str>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(cell.chars().count());
        }
        self.rows.push((row, color));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&format!("{} ", "-".repeat(col.width)));
        }
        out.push('\n');

        for (row, color) in &self.rows {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            match color {
                Some(c) => out.push_str(&super::colors::paint(line.trim_end(), c)),
                None => out.push_str(line.trim_end()),
            }
            out.push('\n');
        }

        out
    }
}
