#![forbid(unsafe_code)]

//! Border specification and composition.
//!
//! Borders are layered axis-aligned rectangles. Each specification
//! contributes horizontal and vertical strokes to the inter-cell lanes
//! it covers; later registrations overwrite earlier ones on shared
//! edges. Corner glyphs are not specified anywhere - they are inferred
//! from the up-to-four strokes meeting at each lane crossing.

use bitflags::bitflags;

bitflags! {
    /// Which edges within a border rectangle a specification applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BorderMatch: u8 {
        /// Topmost horizontal edge of the rectangle.
        const TOP = 1 << 0;
        /// Bottommost horizontal edge of the rectangle.
        const BOTTOM = 1 << 1;
        /// Leftmost vertical edge of the rectangle.
        const LEFT = 1 << 2;
        /// Rightmost vertical edge of the rectangle.
        const RIGHT = 1 << 3;
        /// Horizontal edges strictly inside the rectangle.
        const INNER_HORIZONTAL = 1 << 4;
        /// Vertical edges strictly inside the rectangle.
        const INNER_VERTICAL = 1 << 5;
        /// The four outer edges.
        const OUTLINE = Self::TOP.bits()
            | Self::BOTTOM.bits()
            | Self::LEFT.bits()
            | Self::RIGHT.bits();
        /// All inner edges.
        const INNER = Self::INNER_HORIZONTAL.bits() | Self::INNER_VERTICAL.bits();
        /// Every edge.
        const ALL = Self::OUTLINE.bits() | Self::INNER.bits();
    }
}

/// Stroke style for border edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Contributes no glyph; never overwrites earlier strokes.
    None,
    /// Space strokes: a visible gutter without drawing.
    Air,
    /// ASCII `-`, `|`, with `+` at every intersection.
    OldSchool,
    /// Light box drawing, `─` and `│`.
    Thin,
    /// Thin horizontals, double verticals.
    ThinDouble,
    /// Double box drawing, `═` and `║`.
    Double,
    /// Thin strokes with rounded simple corners.
    FancyLight,
}

/// Stroke weight of one arm at a corner, per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum StrokeWeight {
    Space,
    Ascii,
    Thin,
    Double,
}

impl BorderStyle {
    /// Glyph for a horizontal stroke, if any.
    pub fn horizontal(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Air => Some(' '),
            Self::OldSchool => Some('-'),
            Self::Thin | Self::ThinDouble | Self::FancyLight => Some('─'),
            Self::Double => Some('═'),
        }
    }

    /// Glyph for a vertical stroke, if any.
    pub fn vertical(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Air => Some(' '),
            Self::OldSchool => Some('|'),
            Self::Thin | Self::FancyLight => Some('│'),
            Self::ThinDouble | Self::Double => Some('║'),
        }
    }

    fn horizontal_weight(self) -> Option<StrokeWeight> {
        match self {
            Self::None => None,
            Self::Air => Some(StrokeWeight::Space),
            Self::OldSchool => Some(StrokeWeight::Ascii),
            Self::Thin | Self::ThinDouble | Self::FancyLight => Some(StrokeWeight::Thin),
            Self::Double => Some(StrokeWeight::Double),
        }
    }

    fn vertical_weight(self) -> Option<StrokeWeight> {
        match self {
            Self::None => None,
            Self::Air => Some(StrokeWeight::Space),
            Self::OldSchool => Some(StrokeWeight::Ascii),
            Self::Thin | Self::FancyLight => Some(StrokeWeight::Thin),
            Self::ThinDouble | Self::Double => Some(StrokeWeight::Double),
        }
    }
}

/// Corner glyph for the strokes meeting at a lane crossing.
///
/// `above`/`below` are the vertical strokes ending and starting at the
/// corner, `left`/`right` the horizontal ones. Deterministic for every
/// 4-tuple:
/// - a corner needs at least one vertical and one horizontal arm;
/// - any ASCII arm forces `'+'`;
/// - all-space arms yield a space;
/// - otherwise space arms are dropped and the presence pattern with the
///   per-axis weight (max of the two arms) selects the glyph; a pattern
///   left with a single axis continues that axis' straight stroke.
fn intersection(
    above: Option<BorderStyle>,
    below: Option<BorderStyle>,
    left: Option<BorderStyle>,
    right: Option<BorderStyle>,
) -> Option<char> {
    use StrokeWeight::*;

    let aw = above.and_then(BorderStyle::vertical_weight);
    let bw = below.and_then(BorderStyle::vertical_weight);
    let lw = left.and_then(BorderStyle::horizontal_weight);
    let rw = right.and_then(BorderStyle::horizontal_weight);

    // Corners only exist where horizontals and verticals intersect; this
    // also keeps bands rectangular, since a glyph here implies both lanes
    // have fillers.
    if aw.is_none() && bw.is_none() {
        return None;
    }
    if lw.is_none() && rw.is_none() {
        return None;
    }

    let arms = [aw, bw, lw, rw];
    if arms.iter().flatten().any(|w| *w == Ascii) {
        return Some('+');
    }
    if arms.iter().flatten().all(|w| *w == Space) {
        return Some(' ');
    }

    // Space arms influence lane existence, not glyph shape.
    let solid = |w: Option<StrokeWeight>| w.filter(|w| *w >= Thin);
    let (aw, bw, lw, rw) = (solid(aw), solid(bw), solid(lw), solid(rw));

    let vw = aw.max(bw);
    let hw = lw.max(rw);
    let (up, down, l, r) = (aw.is_some(), bw.is_some(), lw.is_some(), rw.is_some());

    // Only rounded-corner strokes meeting: use the rounded simple corners.
    let fancy_only = [above, below, left, right]
        .iter()
        .flatten()
        .all(|s| *s == BorderStyle::FancyLight || *s == BorderStyle::Air);
    if fancy_only {
        match (up, down, l, r) {
            (false, true, false, true) => return Some('╭'),
            (false, true, true, false) => return Some('╮'),
            (true, false, false, true) => return Some('╰'),
            (true, false, true, false) => return Some('╯'),
            _ => {}
        }
    }

    let pick = |thin: char, h_double: char, v_double: char, both: char| match (hw, vw) {
        (Some(Double), Some(Double)) => both,
        (Some(Double), _) => h_double,
        (_, Some(Double)) => v_double,
        _ => thin,
    };

    let glyph = match (up, down, l, r) {
        // One axis dropped out (its arms were air): continue the other.
        (false, false, false, false) => return None,
        (false, false, _, _) => match hw {
            Some(Double) => '═',
            _ => '─',
        },
        (_, _, false, false) => match vw {
            Some(Double) => '║',
            _ => '│',
        },
        (false, true, false, true) => pick('┌', '╒', '╓', '╔'),
        (false, true, true, false) => pick('┐', '╕', '╖', '╗'),
        (true, false, false, true) => pick('└', '╘', '╙', '╚'),
        (true, false, true, false) => pick('┘', '╛', '╜', '╝'),
        (true, true, false, true) => pick('├', '╞', '╟', '╠'),
        (true, true, true, false) => pick('┤', '╡', '╢', '╣'),
        (false, true, true, true) => pick('┬', '╤', '╥', '╦'),
        (true, false, true, true) => pick('┴', '╧', '╨', '╩'),
        (true, true, true, true) => pick('┼', '╪', '╫', '╬'),
    };
    Some(glyph)
}

/// One layered border registration: a rectangle, the edges it matches,
/// and the stroke style it paints them with.
///
/// The rectangle is validated against the model by
/// [`Table::with_border`](crate::Table::with_border).
#[derive(Debug, Clone, Copy)]
pub struct BorderSpecification {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
    matches: BorderMatch,
    style: BorderStyle,
}

impl BorderSpecification {
    pub(crate) fn new(
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
        matches: BorderMatch,
        style: BorderStyle,
    ) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
            matches,
            style,
        }
    }

    /// Style this spec paints on the vertical edge at `(row, column)`,
    /// if any.
    pub(crate) fn vertical(&self, row: usize, column: usize) -> Option<BorderStyle> {
        if self.style == BorderStyle::None {
            return None;
        }
        if row < self.top || row >= self.bottom || column < self.left || column > self.right {
            return None;
        }
        let edge = if column == self.left {
            BorderMatch::LEFT
        } else if column == self.right {
            BorderMatch::RIGHT
        } else {
            BorderMatch::INNER_VERTICAL
        };
        self.matches.contains(edge).then_some(self.style)
    }

    /// Style this spec paints on the horizontal edge at `(row, column)`,
    /// if any.
    pub(crate) fn horizontal(&self, row: usize, column: usize) -> Option<BorderStyle> {
        if self.style == BorderStyle::None {
            return None;
        }
        if row < self.top || row > self.bottom || column < self.left || column >= self.right {
            return None;
        }
        let edge = if row == self.top {
            BorderMatch::TOP
        } else if row == self.bottom {
            BorderMatch::BOTTOM
        } else {
            BorderMatch::INNER_HORIZONTAL
        };
        self.matches.contains(edge).then_some(self.style)
    }
}

/// Resolved border glyph grid for one render.
///
/// Indices are lanes between (and outside) table rows and columns, so
/// the arrays are one larger than the model in each direction.
pub(crate) struct BorderGrid {
    verticals: Vec<Vec<Option<BorderStyle>>>,
    horizontals: Vec<Vec<Option<BorderStyle>>>,
    corners: Vec<Vec<Option<char>>>,
    v_fillers: Vec<bool>,
    h_fillers: Vec<bool>,
}

impl BorderGrid {
    pub(crate) fn new(rows: usize, columns: usize, specs: &[BorderSpecification]) -> Self {
        let mut verticals = vec![vec![None; columns + 1]; rows];
        let mut horizontals = vec![vec![None; columns]; rows + 1];
        let mut v_fillers = vec![false; columns + 1];
        let mut h_fillers = vec![false; rows + 1];

        for row in 0..=rows {
            for column in 0..=columns {
                for spec in specs {
                    if row < rows {
                        if let Some(style) = spec.vertical(row, column) {
                            verticals[row][column] = Some(style);
                            v_fillers[column] = true;
                        }
                    }
                    if column < columns {
                        if let Some(style) = spec.horizontal(row, column) {
                            horizontals[row][column] = Some(style);
                            h_fillers[row] = true;
                        }
                    }
                }
            }
        }

        let mut corners = vec![vec![None; columns + 1]; rows + 1];
        for (row, corner_row) in corners.iter_mut().enumerate() {
            for (column, corner) in corner_row.iter_mut().enumerate() {
                let above = (row > 0).then(|| verticals[row - 1][column]).flatten();
                let below = (row < rows).then(|| verticals[row][column]).flatten();
                let left = (column > 0).then(|| horizontals[row][column - 1]).flatten();
                let right = (column < columns).then(|| horizontals[row][column]).flatten();
                *corner = intersection(above, below, left, right);
            }
        }

        Self {
            verticals,
            horizontals,
            corners,
            v_fillers,
            h_fillers,
        }
    }

    /// Number of vertical lanes, and hence the width they consume.
    pub(crate) fn vertical_lane_count(&self) -> usize {
        self.v_fillers.iter().filter(|b| **b).count()
    }

    pub(crate) fn paint_corner(&self, row: usize, column: usize, out: &mut String) {
        if let Some(glyph) = self.corners[row][column] {
            out.push(glyph);
        } else if self.v_fillers[column] && self.h_fillers[row] {
            out.push(' ');
        }
    }

    pub(crate) fn paint_vertical(&self, row: usize, column: usize, out: &mut String) {
        if let Some(glyph) = self.verticals[row][column].and_then(BorderStyle::vertical) {
            out.push(glyph);
        } else if self.v_fillers[column] {
            out.push(' ');
        }
    }

    pub(crate) fn paint_horizontal(&self, row: usize, column: usize, width: usize, out: &mut String) {
        if let Some(glyph) = self.horizontals[row][column].and_then(BorderStyle::horizontal) {
            for _ in 0..width {
                out.push(glyph);
            }
        } else if self.h_fillers[row] {
            for _ in 0..width {
                out.push(' ');
            }
        }
    }

    /// Whether any horizontal stroke exists in row lane `row`.
    #[cfg(test)]
    fn has_horizontal_lane(&self, row: usize) -> bool {
        self.h_fillers[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(
        rect: (usize, usize, usize, usize),
        matches: BorderMatch,
        style: BorderStyle,
    ) -> BorderSpecification {
        BorderSpecification::new(rect.0, rect.1, rect.2, rect.3, matches, style)
    }

    // --- edge inclusion ---

    #[test]
    fn outline_covers_only_outer_edges() {
        let s = spec((0, 0, 2, 2), BorderMatch::OUTLINE, BorderStyle::Thin);
        // Verticals: left and right lanes of both rows, not the middle.
        assert_eq!(s.vertical(0, 0), Some(BorderStyle::Thin));
        assert_eq!(s.vertical(1, 2), Some(BorderStyle::Thin));
        assert_eq!(s.vertical(0, 1), None);
        // Horizontals: top and bottom lanes, not the middle.
        assert_eq!(s.horizontal(0, 0), Some(BorderStyle::Thin));
        assert_eq!(s.horizontal(2, 1), Some(BorderStyle::Thin));
        assert_eq!(s.horizontal(1, 0), None);
    }

    #[test]
    fn inner_covers_only_inner_edges() {
        let s = spec((0, 0, 2, 2), BorderMatch::INNER, BorderStyle::Thin);
        assert_eq!(s.vertical(0, 1), Some(BorderStyle::Thin));
        assert_eq!(s.vertical(0, 0), None);
        assert_eq!(s.horizontal(1, 0), Some(BorderStyle::Thin));
        assert_eq!(s.horizontal(0, 0), None);
    }

    #[test]
    fn edges_outside_rectangle_are_none() {
        let s = spec((1, 1, 2, 2), BorderMatch::ALL, BorderStyle::Thin);
        assert_eq!(s.vertical(0, 1), None);
        assert_eq!(s.horizontal(0, 1), None);
        assert_eq!(s.horizontal(3, 1), None);
    }

    #[test]
    fn none_style_contributes_nothing() {
        let s = spec((0, 0, 2, 2), BorderMatch::ALL, BorderStyle::None);
        assert_eq!(s.vertical(0, 0), None);
        assert_eq!(s.horizontal(0, 0), None);
    }

    // --- intersection ---

    #[test]
    fn corner_requires_both_axes() {
        let t = Some(BorderStyle::Thin);
        assert_eq!(intersection(t, t, None, None), None);
        assert_eq!(intersection(None, None, t, t), None);
        assert_eq!(intersection(None, None, None, None), None);
    }

    #[test]
    fn thin_corner_set() {
        let t = Some(BorderStyle::Thin);
        assert_eq!(intersection(None, t, None, t), Some('┌'));
        assert_eq!(intersection(None, t, t, None), Some('┐'));
        assert_eq!(intersection(t, None, None, t), Some('└'));
        assert_eq!(intersection(t, None, t, None), Some('┘'));
        assert_eq!(intersection(t, t, None, t), Some('├'));
        assert_eq!(intersection(t, t, t, None), Some('┤'));
        assert_eq!(intersection(None, t, t, t), Some('┬'));
        assert_eq!(intersection(t, None, t, t), Some('┴'));
        assert_eq!(intersection(t, t, t, t), Some('┼'));
    }

    #[test]
    fn double_corner_set() {
        let d = Some(BorderStyle::Double);
        assert_eq!(intersection(None, d, None, d), Some('╔'));
        assert_eq!(intersection(None, d, d, None), Some('╗'));
        assert_eq!(intersection(d, None, None, d), Some('╚'));
        assert_eq!(intersection(d, None, d, None), Some('╝'));
        assert_eq!(intersection(d, d, d, d), Some('╬'));
    }

    #[test]
    fn mixed_weights_pick_mixed_glyphs() {
        let t = Some(BorderStyle::Thin);
        let d = Some(BorderStyle::Double);
        // Double horizontals, thin verticals.
        assert_eq!(intersection(None, t, d, d), Some('╤'));
        assert_eq!(intersection(t, t, d, d), Some('╪'));
        // Thin horizontals, double verticals.
        assert_eq!(intersection(None, d, t, t), Some('╥'));
        assert_eq!(intersection(d, d, t, t), Some('╫'));
    }

    #[test]
    fn thin_double_style_is_double_vertically_only() {
        let td = Some(BorderStyle::ThinDouble);
        assert_eq!(intersection(None, td, None, td), Some('╓'));
        assert_eq!(intersection(td, td, td, td), Some('╫'));
    }

    #[test]
    fn ascii_arm_forces_plus() {
        let o = Some(BorderStyle::OldSchool);
        let t = Some(BorderStyle::Thin);
        assert_eq!(intersection(None, o, None, o), Some('+'));
        assert_eq!(intersection(o, o, t, t), Some('+'));
    }

    #[test]
    fn air_only_corner_is_space() {
        let a = Some(BorderStyle::Air);
        assert_eq!(intersection(a, a, a, a), Some(' '));
        assert_eq!(intersection(None, a, a, None), Some(' '));
    }

    #[test]
    fn air_arm_continues_solid_axis() {
        let a = Some(BorderStyle::Air);
        let t = Some(BorderStyle::Thin);
        // Air verticals crossing a thin horizontal: the line continues.
        assert_eq!(intersection(a, a, t, t), Some('─'));
        // Air horizontals crossing a double vertical.
        let d = Some(BorderStyle::Double);
        assert_eq!(intersection(d, d, a, a), Some('║'));
    }

    #[test]
    fn fancy_light_simple_corners_are_rounded() {
        let f = Some(BorderStyle::FancyLight);
        assert_eq!(intersection(None, f, None, f), Some('╭'));
        assert_eq!(intersection(None, f, f, None), Some('╮'));
        assert_eq!(intersection(f, None, None, f), Some('╰'));
        assert_eq!(intersection(f, None, f, None), Some('╯'));
        // Tees fall back to the thin set.
        assert_eq!(intersection(f, f, None, f), Some('├'));
    }

    #[test]
    fn fancy_light_mixed_with_thin_is_square() {
        let f = Some(BorderStyle::FancyLight);
        let t = Some(BorderStyle::Thin);
        assert_eq!(intersection(None, f, None, t), Some('┌'));
    }

    // --- grid ---

    #[test]
    fn outline_grid_fillers_skip_inner_lanes() {
        let specs = [spec((0, 0, 2, 2), BorderMatch::OUTLINE, BorderStyle::Thin)];
        let grid = BorderGrid::new(2, 2, &specs);
        assert_eq!(grid.vertical_lane_count(), 2);
        assert!(grid.has_horizontal_lane(0));
        assert!(!grid.has_horizontal_lane(1));
        assert!(grid.has_horizontal_lane(2));
    }

    #[test]
    fn later_spec_overwrites_shared_edges() {
        let specs = [
            spec((0, 0, 2, 2), BorderMatch::OUTLINE, BorderStyle::Thin),
            spec((0, 0, 2, 2), BorderMatch::OUTLINE, BorderStyle::Double),
        ];
        let grid = BorderGrid::new(2, 2, &specs);
        assert_eq!(grid.corners[0][0], Some('╔'));
        assert_eq!(grid.corners[2][2], Some('╝'));
    }

    #[test]
    fn none_style_does_not_overwrite() {
        let specs = [
            spec((0, 0, 2, 2), BorderMatch::OUTLINE, BorderStyle::Thin),
            spec((0, 0, 2, 2), BorderMatch::OUTLINE, BorderStyle::None),
        ];
        let grid = BorderGrid::new(2, 2, &specs);
        assert_eq!(grid.corners[0][0], Some('┌'));
    }

    #[test]
    fn full_border_corner_glyphs() {
        let specs = [spec((0, 0, 2, 2), BorderMatch::ALL, BorderStyle::Thin)];
        let grid = BorderGrid::new(2, 2, &specs);
        assert_eq!(grid.corners[0][0], Some('┌'));
        assert_eq!(grid.corners[0][1], Some('┬'));
        assert_eq!(grid.corners[0][2], Some('┐'));
        assert_eq!(grid.corners[1][0], Some('├'));
        assert_eq!(grid.corners[1][1], Some('┼'));
        assert_eq!(grid.corners[1][2], Some('┤'));
        assert_eq!(grid.corners[2][0], Some('└'));
        assert_eq!(grid.corners[2][1], Some('┴'));
        assert_eq!(grid.corners[2][2], Some('┘'));
    }

    #[test]
    fn outline_has_no_corner_in_unused_lanes() {
        let specs = [spec((0, 0, 2, 2), BorderMatch::OUTLINE, BorderStyle::Thin)];
        let grid = BorderGrid::new(2, 2, &specs);
        // Lane column 1 carries no vertical stroke, so the top band must
        // not grow a glyph there.
        assert_eq!(grid.corners[0][1], None);
        assert!(!grid.v_fillers[1]);
    }

    #[test]
    fn paint_horizontal_repeats_glyph_by_width() {
        let specs = [spec((0, 0, 1, 1), BorderMatch::TOP, BorderStyle::Thin)];
        let grid = BorderGrid::new(1, 1, &specs);
        let mut out = String::new();
        grid.paint_horizontal(0, 0, 4, &mut out);
        assert_eq!(out, "────");
    }

    #[test]
    fn paint_filler_space_where_lane_exists_without_stroke() {
        // Vertical border on the left cell only; row 0 has a top stroke
        // over the left cell, leaving a filler over the right cell.
        let specs = [spec((0, 0, 1, 1), BorderMatch::OUTLINE, BorderStyle::Thin)];
        let grid = BorderGrid::new(1, 2, &specs);
        let mut out = String::new();
        grid.paint_horizontal(0, 1, 3, &mut out);
        assert_eq!(out, "   ");
    }

    #[test]
    fn empty_grid_paints_nothing() {
        let grid = BorderGrid::new(2, 2, &[]);
        let mut out = String::new();
        grid.paint_corner(0, 0, &mut out);
        grid.paint_vertical(0, 0, &mut out);
        grid.paint_horizontal(0, 0, 5, &mut out);
        assert!(out.is_empty());
        assert_eq!(grid.vertical_lane_count(), 0);
    }
}
