#![forbid(unsafe_code)]

//! Alignment: wrapped lines to exact width-by-height cell blocks.
//!
//! Wrapped lines already have the cell's exact width; horizontal
//! aligners only redistribute the trailing padding the wrapper added.
//! Vertical aligners insert blank lines to reach the cell height.

/// Pads a cell's wrapped lines into a block of exactly `height` lines of
/// exactly `width` cells.
pub trait AlignmentStrategy: Send + Sync {
    /// Aligned block for the cell.
    fn align(&self, lines: Vec<String>, width: usize, height: usize) -> Vec<String>;
}

/// Horizontal placement within the cell width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Content flush left (default).
    #[default]
    Left,
    /// Content flush right.
    Right,
    /// Content centred; an odd surplus space goes to the right.
    Center,
}

/// Vertical placement within the cell height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Content at the top (default).
    #[default]
    Top,
    /// Content centred; an odd surplus line goes below.
    Middle,
    /// Content at the bottom.
    Bottom,
}

impl HorizontalAlign {
    /// Move the trailing pad of one line to the configured side. The
    /// space count is untouched, so total width is preserved under any
    /// measure.
    fn redistribute(self, line: &str) -> String {
        let content = line.trim_end_matches(' ');
        let pad = line.len() - content.len();
        match self {
            Self::Left => line.to_string(),
            Self::Right => format!("{}{}", " ".repeat(pad), content),
            Self::Center => {
                let left = pad / 2;
                format!("{}{}{}", " ".repeat(left), content, " ".repeat(pad - left))
            }
        }
    }
}

impl AlignmentStrategy for HorizontalAlign {
    fn align(&self, lines: Vec<String>, width: usize, height: usize) -> Vec<String> {
        Aligned {
            horizontal: *self,
            vertical: VerticalAlign::Top,
        }
        .align(lines, width, height)
    }
}

impl AlignmentStrategy for VerticalAlign {
    fn align(&self, lines: Vec<String>, width: usize, height: usize) -> Vec<String> {
        let blank = " ".repeat(width);
        let above = match self {
            Self::Top => 0,
            Self::Middle => height.saturating_sub(lines.len()) / 2,
            Self::Bottom => height.saturating_sub(lines.len()),
        };

        let mut out = Vec::with_capacity(height);
        out.resize(above, blank.clone());
        out.extend(lines);
        while out.len() < height {
            out.push(blank.clone());
        }
        out
    }
}

/// Combined horizontal and vertical alignment; itself a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aligned {
    /// Horizontal placement.
    pub horizontal: HorizontalAlign,
    /// Vertical placement.
    pub vertical: VerticalAlign,
}

impl Aligned {
    /// Compose a horizontal and a vertical aligner.
    pub fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl AlignmentStrategy for Aligned {
    fn align(&self, lines: Vec<String>, width: usize, height: usize) -> Vec<String> {
        let redistributed = lines
            .into_iter()
            .map(|l| self.horizontal.redistribute(&l))
            .collect();
        self.vertical.align(redistributed, width, height)
    }
}

/// Adapter enforcing the alignment output contract: exactly `height`
/// lines, each exactly `width` cells, no `'\n'`.
pub(crate) struct AssertingAlignmentStrategy {
    inner: Box<dyn AlignmentStrategy>,
}

impl AssertingAlignmentStrategy {
    pub(crate) fn new(inner: Box<dyn AlignmentStrategy>) -> Self {
        Self { inner }
    }

    pub(crate) fn align_checked(
        &self,
        lines: Vec<String>,
        width: usize,
        height: usize,
        measure: &dyn termtable_text::CharWidth,
    ) -> std::result::Result<Vec<String>, String> {
        let aligned = self.inner.align(lines, width, height);
        if aligned.len() != height {
            return Err(format!(
                "aligner produced {} lines, expected {height}",
                aligned.len()
            ));
        }
        for (i, line) in aligned.iter().enumerate() {
            if line.contains('\n') {
                return Err(format!("aligner emitted '\\n' inside line {i}"));
            }
            let w = termtable_text::line_width(measure, line);
            if w != width {
                return Err(format!("aligner line {i} has width {w}, expected {width}"));
            }
        }
        Ok(aligned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termtable_text::CodePointWidth;

    fn lines(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    // --- horizontal ---

    #[test]
    fn left_is_identity_on_padded_lines() {
        let out = HorizontalAlign::Left.align(lines(&["ab   "]), 5, 1);
        assert_eq!(out, vec!["ab   "]);
    }

    #[test]
    fn right_moves_pad_to_the_left() {
        let out = HorizontalAlign::Right.align(lines(&["ab   "]), 5, 1);
        assert_eq!(out, vec!["   ab"]);
    }

    #[test]
    fn center_splits_pad_left_biased_remainder_right() {
        let out = HorizontalAlign::Center.align(lines(&["ab   "]), 5, 1);
        assert_eq!(out, vec![" ab  "]);
    }

    #[test]
    fn horizontal_fills_missing_rows_at_bottom() {
        let out = HorizontalAlign::Left.align(lines(&["ab   "]), 5, 3);
        assert_eq!(out, vec!["ab   ", "     ", "     "]);
    }

    #[test]
    fn right_preserves_interior_spaces() {
        let out = HorizontalAlign::Right.align(lines(&["a b  "]), 5, 1);
        assert_eq!(out, vec!["  a b"]);
    }

    // --- vertical ---

    #[test]
    fn top_pads_below() {
        let out = VerticalAlign::Top.align(lines(&["abc"]), 3, 3);
        assert_eq!(out, vec!["abc", "   ", "   "]);
    }

    #[test]
    fn middle_splits_blanks_extra_below() {
        let out = VerticalAlign::Middle.align(lines(&["abc"]), 3, 4);
        assert_eq!(out, vec!["   ", "abc", "   ", "   "]);
    }

    #[test]
    fn bottom_pads_above() {
        let out = VerticalAlign::Bottom.align(lines(&["abc"]), 3, 3);
        assert_eq!(out, vec!["   ", "   ", "abc"]);
    }

    #[test]
    fn vertical_with_full_content_is_identity() {
        let out = VerticalAlign::Bottom.align(lines(&["ab ", "cd "]), 3, 2);
        assert_eq!(out, vec!["ab ", "cd "]);
    }

    // --- composed ---

    #[test]
    fn composed_right_bottom() {
        let out = Aligned::new(HorizontalAlign::Right, VerticalAlign::Bottom)
            .align(lines(&["ab "]), 3, 2);
        assert_eq!(out, vec!["   ", " ab"]);
    }

    // --- asserting ---

    #[test]
    fn asserting_accepts_exact_block() {
        let asserting = AssertingAlignmentStrategy::new(Box::new(HorizontalAlign::Left));
        let out = asserting
            .align_checked(lines(&["ab   "]), 5, 2, &CodePointWidth)
            .unwrap();
        assert_eq!(out, vec!["ab   ", "     "]);
    }

    #[test]
    fn asserting_flags_wrong_height() {
        struct Bad;
        impl AlignmentStrategy for Bad {
            fn align(&self, lines: Vec<String>, _: usize, _: usize) -> Vec<String> {
                lines
            }
        }
        let asserting = AssertingAlignmentStrategy::new(Box::new(Bad));
        let err = asserting
            .align_checked(lines(&["abc"]), 3, 2, &CodePointWidth)
            .unwrap_err();
        assert!(err.contains("1 lines, expected 2"));
    }

    #[test]
    fn asserting_flags_wrong_width() {
        struct Bad;
        impl AlignmentStrategy for Bad {
            fn align(&self, _: Vec<String>, _: usize, _: usize) -> Vec<String> {
                vec!["x".into()]
            }
        }
        let asserting = AssertingAlignmentStrategy::new(Box::new(Bad));
        let err = asserting
            .align_checked(lines(&["abc"]), 3, 1, &CodePointWidth)
            .unwrap_err();
        assert!(err.contains("width 1, expected 3"));
    }
}
