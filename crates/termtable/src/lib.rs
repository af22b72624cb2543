#![forbid(unsafe_code)]

//! Terminal table rendering.
//!
//! A [`Table`] is built around a [`TableModel`] holding raw cell values.
//! Rendering is customised spreadsheet-style, by registering rules that
//! apply selectively to cells via a [`CellMatcher`]:
//!
//! 1. [`Formatter`]s derive character data out of raw values;
//! 2. [`SizeConstraints`] decide how much column real estate each cell
//!    would like;
//! 3. [`TextWrapper`]s split cell text once column widths are solved;
//! 4. [`AlignmentStrategy`]s pad the wrapped text into exact
//!    width-by-height blocks.
//!
//! Borders are layered rectangles of [`BorderStyle`] strokes; corner
//! glyphs are inferred from the strokes that meet there.
//!
//! # Example
//! ```
//! use termtable::{GridTableModel, Table, BorderMatch, BorderStyle};
//!
//! let model = GridTableModel::from_rows(vec![
//!     vec!["a".into(), "b".into()],
//!     vec!["c".into(), "d".into()],
//! ]).unwrap();
//!
//! let table = Table::new(model)
//!     .with_border(0, 0, 2, 2, BorderMatch::OUTLINE, BorderStyle::Thin)
//!     .unwrap();
//!
//! let out = table.render(20).unwrap();
//! assert!(out.starts_with('┌'));
//! ```

use std::fmt;

pub mod align;
pub mod border;
pub mod format;
pub mod matcher;
pub mod model;
pub mod size;
pub mod table;
pub mod wrap;

pub use align::{Aligned, AlignmentStrategy, HorizontalAlign, VerticalAlign};
pub use border::{BorderMatch, BorderSpecification, BorderStyle};
pub use format::{DefaultFormatter, Formatter};
pub use matcher::CellMatcher;
pub use model::{CellValue, GridTableModel, RecordTableModel, TableModel, TableModelBuilder};
pub use size::{AbsoluteWidth, AutoSize, Extent, NoWrap, SizeConstraints};
pub use table::Table;
pub use termtable_text::{CharWidth, CodePointWidth, TerminalWidth};
pub use wrap::{DelimiterTextWrapper, KeyValueTextWrapper, TextWrapper};

// --- Errors ---------------------------------------------------------------

/// Errors surfaced at registration or render time.
#[derive(Debug)]
pub enum TableError {
    /// A border rectangle does not fit the model's dimensions.
    Dimension {
        /// Offending rectangle as registered.
        top: usize,
        /// Left column of the rectangle.
        left: usize,
        /// Bottom boundary of the rectangle.
        bottom: usize,
        /// Right boundary of the rectangle.
        right: usize,
        /// Model row count.
        rows: usize,
        /// Model column count.
        columns: usize,
    },
    /// A model row does not match the declared column count.
    RaggedModel {
        /// Index of the offending row.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A user-supplied strategy broke its output contract.
    ContractViolation {
        /// Row of the cell being processed.
        row: usize,
        /// Column of the cell being processed.
        column: usize,
        /// What the strategy got wrong.
        detail: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension {
                top,
                left,
                bottom,
                right,
                rows,
                columns,
            } => write!(
                f,
                "border rectangle ({top}, {left})..({bottom}, {right}) does not fit \
                 a {rows}x{columns} model"
            ),
            Self::RaggedModel {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, model declares {expected} columns"
            ),
            Self::ContractViolation {
                row,
                column,
                detail,
            } => write!(f, "strategy contract violated at cell ({row}, {column}): {detail}"),
        }
    }
}

impl std::error::Error for TableError {}

/// Standard result type for termtable APIs.
pub type Result<T> = std::result::Result<T, TableError>;
