//! Markdown table grid: a rectangular cell grid rendered as GFM table syntax.
//!
//! Row 0 is the header. The grid is rectangular at all times and never
//! shrinks below one header row, one data row, and one column; mutations
//! that would violate either invariant are refused without touching the
//! grid.
//!
//! # Example
//!
//! ```rust
//! use mdconv_core::TableGrid;
//!
//! let mut grid = TableGrid::new(2);
//! grid.set_cell(0, 0, "Name").unwrap();
//! grid.set_cell(0, 1, "Role").unwrap();
//! grid.set_cell(1, 0, "Ada").unwrap();
//! grid.set_cell(1, 1, "Engineer").unwrap();
//!
//! let markdown = grid.to_markdown();
//! assert!(markdown.starts_with("| Name"));
//! ```

use crate::{MdconvError, Result};

/// Column width floor so the separator row is always a valid `---`.
const MIN_COLUMN_WIDTH: usize = 3;

/// A rectangular grid of cells where row 0 is the table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl Default for TableGrid {
    /// The 3x3 starter grid shown when the table tool opens.
    fn default() -> Self {
        Self {
            rows: vec![
                vec!["Header 1".into(), "Header 2".into(), "Header 3".into()],
                vec!["Cell 1".into(), "Cell 2".into(), "Cell 3".into()],
                vec!["Cell 4".into(), "Cell 5".into(), "Cell 6".into()],
            ],
        }
    }
}

impl TableGrid {
    /// Creates an empty grid with one header row, one data row, and the
    /// given number of columns (at least one).
    pub fn new(columns: usize) -> Self {
        let columns = columns.max(1);
        Self { rows: vec![vec![String::new(); columns]; 2] }
    }

    /// Builds a grid from existing rows, validating the shape invariants.
    ///
    /// Fails when there are fewer than two rows, no columns, or ragged row
    /// lengths.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.len() < 2 {
            return Err(MdconvError::TableMinRows);
        }
        let columns = rows[0].len();
        if columns == 0 {
            return Err(MdconvError::TableMinColumns);
        }
        if rows.iter().any(|row| row.len() != columns) {
            return Err(MdconvError::Conversion("table rows must all have the same column count".to_string()));
        }
        Ok(Self { rows })
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Read access to a cell.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column)).map(String::as_str)
    }

    /// Appends an empty data row.
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.column_count()]);
    }

    /// Appends an empty column to every row.
    pub fn add_column(&mut self) {
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Deletes a row.
    ///
    /// Refused (grid unchanged) when the grid would drop below a header row
    /// plus one data row, or when the index is out of range.
    pub fn delete_row(&mut self, index: usize) -> Result<()> {
        if self.rows.len() <= 2 {
            return Err(MdconvError::TableMinRows);
        }
        if index >= self.rows.len() {
            return Err(MdconvError::Conversion(format!("row index {} out of range", index)));
        }
        self.rows.remove(index);
        Ok(())
    }

    /// Deletes a column from every row.
    ///
    /// Refused (grid unchanged) when it is the last column or the index is
    /// out of range.
    pub fn delete_column(&mut self, index: usize) -> Result<()> {
        if self.column_count() <= 1 {
            return Err(MdconvError::TableMinColumns);
        }
        if index >= self.column_count() {
            return Err(MdconvError::Conversion(format!("column index {} out of range", index)));
        }
        for row in &mut self.rows {
            row.remove(index);
        }
        Ok(())
    }

    /// Replaces a cell's value.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<()> {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = value.into();
                Ok(())
            }
            None => Err(MdconvError::Conversion(format!("cell ({}, {}) out of range", row, column))),
        }
    }

    /// Renders the grid as a GFM pipe table.
    ///
    /// Each column is padded to the width of its longest cell (minimum 3 so
    /// the separator row is valid), producing aligned rows that render in
    /// any GFM-compliant viewer.
    pub fn to_markdown(&self) -> String {
        let widths: Vec<usize> = (0..self.column_count())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN_WIDTH)
            })
            .collect();

        let mut markdown = String::new();
        markdown.push_str(&render_row(&self.rows[0], &widths));
        markdown.push('\n');
        markdown.push('|');
        for width in &widths {
            markdown.push_str(&format!(" {} |", "-".repeat(*width)));
        }
        markdown.push('\n');

        for row in &self.rows[1..] {
            markdown.push_str(&render_row(row, &widths));
            markdown.push('\n');
        }

        markdown.trim().to_string()
    }
}

/// Renders one `| a | b |` row with cells right-padded to their column width.
fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut row = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width.saturating_sub(cell.chars().count());
        row.push_str(&format!(" {}{} |", cell, " ".repeat(padding)));
    }
    row
}
