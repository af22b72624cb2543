#![forbid(unsafe_code)]

//! Width measurement and line-level text primitives for terminal tables.
//!
//! This crate holds the pieces of table rendering that only care about a
//! single line of text:
//! - [`CharWidth`] - pluggable per-code-point width measurement
//! - [`wrap_line`] - greedy delimiter wrapping with hard-break fallback
//! - [`pad_to_width`] - exact-width space padding
//!
//! # Example
//! ```
//! use termtable_text::{wrap_line, pad_to_width, CodePointWidth};
//!
//! let measure = CodePointWidth;
//! let lines = wrap_line("abc def ghi", 7, &measure);
//! assert_eq!(lines, vec!["abc def", "ghi"]);
//!
//! let padded = pad_to_width("ghi", 7, &measure);
//! assert_eq!(padded, "ghi    ");
//! ```

pub mod width;
pub mod wrap;

pub use width::{CharWidth, CodePointWidth, TerminalWidth, line_width};
pub use wrap::{hard_break, pad_to_width, wrap_line};
