#![forbid(unsafe_code)]

//! Cell formatting: raw value to pre-wrap lines.

use crate::model::CellValue;

/// Converts a raw cell value into an ordered sequence of pre-wrap lines.
///
/// Output lines must not contain `'\n'`; interior spaces are preserved
/// downstream.
pub trait Formatter: Send + Sync {
    /// Lines for `value`. An empty value yields an empty vector.
    fn format(&self, value: &CellValue) -> Vec<String>;
}

/// Default formatter: the value's textual representation, split on `'\n'`.
///
/// `Map` values display as `key=value` entries, so they naturally become
/// one line per entry here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn format(&self, value: &CellValue) -> Vec<String> {
        let text = value.to_string();
        if text.is_empty() {
            return Vec::new();
        }
        text.split('\n').map(String::from).collect()
    }
}

/// Adapter enforcing the formatter output contract (no `'\n'` in any
/// line). Every registered formatter goes through this; violations are
/// reported with the offending cell coordinate by the renderer.
pub(crate) struct AssertingFormatter {
    inner: Box<dyn Formatter>,
}

impl AssertingFormatter {
    pub(crate) fn new(inner: Box<dyn Formatter>) -> Self {
        Self { inner }
    }

    pub(crate) fn format_checked(
        &self,
        value: &CellValue,
    ) -> std::result::Result<Vec<String>, String> {
        let lines = self.inner.format(value);
        for (i, line) in lines.iter().enumerate() {
            if line.contains('\n') {
                return Err(format!("formatter emitted '\\n' inside line {i}"));
            }
        }
        Ok(lines)
    }
}
