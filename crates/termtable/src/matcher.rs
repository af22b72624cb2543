#![forbid(unsafe_code)]

//! Cell selection predicates.
//!
//! Every pipeline rule carries a matcher deciding which cells it applies
//! to. Matchers are plain predicates over `(row, column, model)`; the
//! built-ins cover the common selections and [`CellMatcher::predicate`]
//! is the escape hatch for everything else.

use std::fmt;
use std::ops::Range;

use crate::model::{CellValue, TableModel};

/// Predicate over a cell coordinate within a model.
pub struct CellMatcher {
    inner: Box<dyn Fn(usize, usize, &dyn TableModel) -> bool + Send + Sync>,
}

impl CellMatcher {
    /// Matches every cell.
    pub fn table() -> Self {
        Self::predicate(|_, _, _| true)
    }

    /// Matches every cell of one row.
    pub fn row(row: usize) -> Self {
        Self::predicate(move |r, _, _| r == row)
    }

    /// Matches every cell of one column.
    pub fn column(column: usize) -> Self {
        Self::predicate(move |_, c, _| c == column)
    }

    /// Matches a single cell.
    pub fn cell(row: usize, column: usize) -> Self {
        Self::predicate(move |r, c, _| r == row && c == column)
    }

    /// Matches every cell whose row falls in `range`.
    pub fn rows(range: Range<usize>) -> Self {
        Self::predicate(move |r, _, _| range.contains(&r))
    }

    /// Matches every cell whose column falls in `range`.
    pub fn columns(range: Range<usize>) -> Self {
        Self::predicate(move |_, c, _| range.contains(&c))
    }

    /// Matches cells whose value satisfies `pred`.
    pub fn value(pred: impl Fn(&CellValue) -> bool + Send + Sync + 'static) -> Self {
        Self::predicate(move |r, c, model| pred(model.value(r, c)))
    }

    /// Arbitrary predicate over `(row, column, model)`.
    pub fn predicate(
        f: impl Fn(usize, usize, &dyn TableModel) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { inner: Box::new(f) }
    }

    /// Whether this matcher selects `(row, column)` in `model`.
    pub fn matches(&self, row: usize, column: usize, model: &dyn TableModel) -> bool {
        (self.inner)(row, column, model)
    }
}

impl fmt::Debug for CellMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellMatcher")
    }
}
