#![forbid(unsafe_code)]

//! Cell values and table models.
//!
//! A model is a read-only rectangular grid. Dimensions are fixed at
//! construction and `value` must return stable values across repeated
//! calls for the same coordinate.

use std::fmt;

use crate::{Result, TableError};

/// A raw cell value, before any formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellValue {
    /// No content; formats to zero lines.
    #[default]
    Empty,
    /// Single- or multi-line text (embedded `'\n'` allowed).
    Text(String),
    /// Pre-split lines.
    Lines(Vec<String>),
    /// Ordered key/value entries; displays as `key=value` lines.
    Map(Vec<(String, String)>),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Lines(lines) => f.write_str(&lines.join("\n")),
            Self::Map(entries) => {
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<(String, String)>> for CellValue {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self::Map(entries)
    }
}

impl CellValue {
    /// Build a value from anything displayable.
    pub fn of(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }
}

/// Read-only rectangular grid of cell values.
///
/// Implementations must return stable values: repeated `value(r, c)`
/// calls for the same coordinate observe the same content.
pub trait TableModel: Send + Sync {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Value at `(row, column)`; both must be in range.
    fn value(&self, row: usize, column: usize) -> &CellValue;
}

/// Model backed by a rectangular two-dimensional vector.
#[derive(Debug, Clone, Default)]
pub struct GridTableModel {
    cells: Vec<Vec<CellValue>>,
    columns: usize,
}

impl GridTableModel {
    /// Build from rows of cells. Every row must have the same length as
    /// the first; a mismatch is a [`TableError::RaggedModel`].
    pub fn from_rows(cells: Vec<Vec<CellValue>>) -> Result<Self> {
        let columns = cells.first().map_or(0, Vec::len);
        for (row, r) in cells.iter().enumerate() {
            if r.len() != columns {
                return Err(TableError::RaggedModel {
                    row,
                    expected: columns,
                    found: r.len(),
                });
            }
        }
        Ok(Self { cells, columns })
    }
}

impl TableModel for GridTableModel {
    fn row_count(&self) -> usize {
        self.cells.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn value(&self, row: usize, column: usize) -> &CellValue {
        &self.cells[row][column]
    }
}

/// Model projecting a declared header row (index 0) over record rows.
#[derive(Debug, Clone)]
pub struct RecordTableModel {
    headers: Vec<CellValue>,
    records: Vec<Vec<CellValue>>,
}

impl RecordTableModel {
    /// Build from a header and record rows. Every record must have one
    /// cell per header.
    pub fn new(headers: Vec<CellValue>, records: Vec<Vec<CellValue>>) -> Result<Self> {
        let columns = headers.len();
        for (row, r) in records.iter().enumerate() {
            if r.len() != columns {
                return Err(TableError::RaggedModel {
                    // Data rows sit below the header row.
                    row: row + 1,
                    expected: columns,
                    found: r.len(),
                });
            }
        }
        Ok(Self { headers, records })
    }
}

impl TableModel for RecordTableModel {
    fn row_count(&self) -> usize {
        self.records.len() + 1
    }

    fn column_count(&self) -> usize {
        self.headers.len()
    }

    fn value(&self, row: usize, column: usize) -> &CellValue {
        if row == 0 {
            &self.headers[column]
        } else {
            &self.records[row - 1][column]
        }
    }
}

/// Streaming model construction: rows are opened and filled value by
/// value, then frozen into a [`GridTableModel`].
///
/// ```
/// use termtable::TableModelBuilder;
///
/// let model = TableModelBuilder::new()
///     .add_row().add_value("a").add_value("b")
///     .add_row().add_value("c").add_value("d")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableModelBuilder {
    rows: Vec<Vec<CellValue>>,
}

impl TableModelBuilder {
    /// Start with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new row.
    pub fn add_row(mut self) -> Self {
        self.rows.push(Vec::new());
        self
    }

    /// Append a value to the current row; opens the first row if none
    /// exists yet.
    pub fn add_value(mut self, value: impl Into<CellValue>) -> Self {
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        if let Some(row) = self.rows.last_mut() {
            row.push(value.into());
        }
        self
    }

    /// Freeze into a model, validating rectangularity.
    pub fn build(self) -> Result<GridTableModel> {
        GridTableModel::from_rows(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- CellValue ---

    #[test]
    fn display_empty_is_empty() {
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn display_map_as_key_value_lines() {
        let v = CellValue::Map(vec![
            ("k".into(), "v".into()),
            ("key".into(), "value".into()),
        ]);
        assert_eq!(v.to_string(), "k=v\nkey=value");
    }

    #[test]
    fn display_lines_joined_by_newline() {
        let v = CellValue::Lines(vec!["a".into(), "b".into()]);
        assert_eq!(v.to_string(), "a\nb");
    }

    #[test]
    fn of_accepts_displayable() {
        assert_eq!(CellValue::of(42), CellValue::Text("42".into()));
    }

    // --- GridTableModel ---

    #[test]
    fn grid_dimensions() {
        let m = GridTableModel::from_rows(vec![
            vec!["a".into(), "b".into()],
            vec!["c".into(), "d".into()],
        ])
        .unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 2);
        assert_eq!(m.value(1, 0), &CellValue::Text("c".into()));
    }

    #[test]
    fn grid_rejects_ragged_rows() {
        let err = GridTableModel::from_rows(vec![
            vec!["a".into(), "b".into()],
            vec!["c".into()],
        ])
        .unwrap_err();
        match err {
            TableError::RaggedModel {
                row,
                expected,
                found,
            } => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("expected RaggedModel, got {other:?}"),
        }
    }

    #[test]
    fn empty_grid_is_zero_by_zero() {
        let m = GridTableModel::from_rows(vec![]).unwrap();
        assert_eq!(m.row_count(), 0);
        assert_eq!(m.column_count(), 0);
    }

    // --- RecordTableModel ---

    #[test]
    fn header_row_is_index_zero() {
        let m = RecordTableModel::new(
            vec!["name".into(), "value".into()],
            vec![vec!["foo".into(), "42".into()]],
        )
        .unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.value(0, 0), &CellValue::Text("name".into()));
        assert_eq!(m.value(1, 1), &CellValue::Text("42".into()));
    }

    #[test]
    fn record_model_rejects_short_record() {
        let err = RecordTableModel::new(
            vec!["a".into(), "b".into()],
            vec![vec!["only".into()]],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::RaggedModel { row: 1, .. }));
    }

    // --- TableModelBuilder ---

    #[test]
    fn builder_accumulates_rows() {
        let m = TableModelBuilder::new()
            .add_row()
            .add_value("a")
            .add_value("b")
            .add_row()
            .add_value("c")
            .add_value("d")
            .build()
            .unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.value(1, 1), &CellValue::Text("d".into()));
    }

    #[test]
    fn builder_opens_first_row_implicitly() {
        let m = TableModelBuilder::new().add_value("x").build().unwrap();
        assert_eq!(m.row_count(), 1);
        assert_eq!(m.column_count(), 1);
    }

    #[test]
    fn builder_rejects_ragged_rows() {
        let err = TableModelBuilder::new()
            .add_row()
            .add_value("a")
            .add_row()
            .add_value("b")
            .add_value("c")
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::RaggedModel { row: 1, .. }));
    }
}
