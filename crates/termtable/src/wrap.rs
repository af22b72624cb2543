#![forbid(unsafe_code)]

//! Text wrapping: pre-wrap lines to exact-width lines.

use termtable_text::{CharWidth, CodePointWidth, line_width, pad_to_width, wrap_line};

/// Splits a cell's pre-wrap lines into lines of exactly `width` cells.
///
/// The contract is strict: every output line measures exactly `width`.
/// Alignment later redistributes padding but never changes the width.
pub trait TextWrapper: Send + Sync {
    /// Wrapped lines for the cell.
    fn wrap(&self, lines: &[String], width: usize) -> Vec<String>;
}

/// Default wrapper: greedy break on ASCII space, hard break for tokens
/// wider than the column, right-pad to exact width.
///
/// Each pre-wrap line is wrapped independently, so line breaks the
/// formatter produced (e.g. from embedded newlines) are preserved.
#[derive(Debug)]
pub struct DelimiterTextWrapper {
    measure: Box<dyn CharWidth>,
}

impl DelimiterTextWrapper {
    /// Delimiter wrapping with a custom width measure.
    pub fn with_measure(measure: impl CharWidth + 'static) -> Self {
        Self {
            measure: Box::new(measure),
        }
    }
}

impl Default for DelimiterTextWrapper {
    fn default() -> Self {
        Self::with_measure(CodePointWidth)
    }
}

impl TextWrapper for DelimiterTextWrapper {
    fn wrap(&self, lines: &[String], width: usize) -> Vec<String> {
        let mut out = Vec::new();
        for line in lines {
            for wrapped in wrap_line(line, width, &*self.measure) {
                out.push(pad_to_width(&wrapped, width, &*self.measure));
            }
        }
        out
    }
}

/// Wrapper for `key=value` cells: pads keys so the `=` column lines up
/// across the cell's entries, then applies delimiter wrapping per entry.
///
/// Lines without a `=` are wrapped unchanged.
#[derive(Debug)]
pub struct KeyValueTextWrapper {
    measure: Box<dyn CharWidth>,
}

impl KeyValueTextWrapper {
    /// Key/value wrapping with a custom width measure.
    pub fn with_measure(measure: impl CharWidth + 'static) -> Self {
        Self {
            measure: Box::new(measure),
        }
    }
}

impl Default for KeyValueTextWrapper {
    fn default() -> Self {
        Self::with_measure(CodePointWidth)
    }
}

impl TextWrapper for KeyValueTextWrapper {
    fn wrap(&self, lines: &[String], width: usize) -> Vec<String> {
        let key_width = lines
            .iter()
            .filter_map(|l| l.split_once('='))
            .map(|(k, _)| line_width(&*self.measure, k))
            .max()
            .unwrap_or(0);

        let mut out = Vec::new();
        for line in lines {
            let aligned = match line.split_once('=') {
                Some((key, value)) => {
                    let mut s = pad_to_width(key, key_width, &*self.measure);
                    s.push('=');
                    s.push_str(value);
                    s
                }
                None => line.clone(),
            };
            for wrapped in wrap_line(&aligned, width, &*self.measure) {
                out.push(pad_to_width(&wrapped, width, &*self.measure));
            }
        }
        out
    }
}

/// Adapter enforcing the wrapper output contract: no `'\n'`, every line
/// exactly the requested width under the engine's measure.
pub(crate) struct AssertingTextWrapper {
    inner: Box<dyn TextWrapper>,
}

impl AssertingTextWrapper {
    pub(crate) fn new(inner: Box<dyn TextWrapper>) -> Self {
        Self { inner }
    }

    pub(crate) fn wrap_checked(
        &self,
        lines: &[String],
        width: usize,
        measure: &dyn CharWidth,
    ) -> std::result::Result<Vec<String>, String> {
        let wrapped = self.inner.wrap(lines, width);
        for (i, line) in wrapped.iter().enumerate() {
            if line.contains('\n') {
                return Err(format!("wrapper emitted '\\n' inside line {i}"));
            }
            let w = line_width(measure, line);
            if w != width {
                return Err(format!("wrapper line {i} has width {w}, expected {width}"));
            }
        }
        Ok(wrapped)
    }
}
