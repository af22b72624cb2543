#![forbid(unsafe_code)]

//! The central table API: rule registration and rendering.

use termtable_text::{CharWidth, CodePointWidth};

use crate::align::{AlignmentStrategy, AssertingAlignmentStrategy, HorizontalAlign};
use crate::border::{BorderGrid, BorderMatch, BorderSpecification, BorderStyle};
use crate::format::{AssertingFormatter, DefaultFormatter, Formatter};
use crate::matcher::CellMatcher;
use crate::model::TableModel;
use crate::size::{AutoSize, SizeConstraints};
use crate::wrap::{AssertingTextWrapper, DelimiterTextWrapper, TextWrapper};
use crate::{Result, TableError};

/// A renderable table: a model plus the rules that shape its cells.
///
/// Construction installs a default rule for every pipeline (display
/// formatting, auto sizing, delimiter wrapping, left alignment); rules
/// registered afterwards override the defaults for the cells their
/// matcher selects, **last registration winning** when several match.
///
/// Registration mutates the table builder-style. Once configured,
/// [`render`](Self::render) is pure: it can be called repeatedly, with
/// different widths, from multiple threads.
pub struct Table {
    model: Box<dyn TableModel>,
    formatters: Vec<(CellMatcher, AssertingFormatter)>,
    sizers: Vec<(CellMatcher, Box<dyn SizeConstraints>)>,
    wrappers: Vec<(CellMatcher, AssertingTextWrapper)>,
    aligners: Vec<(CellMatcher, AssertingAlignmentStrategy)>,
    borders: Vec<BorderSpecification>,
    measure: Box<dyn CharWidth>,
    redistribute_residual: bool,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("formatters", &self.formatters.len())
            .field("sizers", &self.sizers.len())
            .field("wrappers", &self.wrappers.len())
            .field("aligners", &self.aligners.len())
            .field("borders", &self.borders)
            .field("redistribute_residual", &self.redistribute_residual)
            .finish()
    }
}

impl Table {
    /// Build a table over `model` with the default rule set.
    pub fn new(model: impl TableModel + 'static) -> Self {
        let table = Self {
            model: Box::new(model),
            formatters: Vec::new(),
            sizers: Vec::new(),
            wrappers: Vec::new(),
            aligners: Vec::new(),
            borders: Vec::new(),
            measure: Box::new(CodePointWidth),
            redistribute_residual: false,
        };
        table
            .format(CellMatcher::table(), DefaultFormatter)
            .size(CellMatcher::table(), AutoSize::default())
            .wrap(CellMatcher::table(), DelimiterTextWrapper::default())
            .align(CellMatcher::table(), HorizontalAlign::Left)
    }

    /// The underlying model.
    pub fn model(&self) -> &dyn TableModel {
        self.model.as_ref()
    }

    /// Register a formatter for the cells `matcher` selects.
    pub fn format(mut self, matcher: CellMatcher, formatter: impl Formatter + 'static) -> Self {
        self.formatters
            .push((matcher, AssertingFormatter::new(Box::new(formatter))));
        self
    }

    /// Register size constraints for the cells `matcher` selects.
    pub fn size(mut self, matcher: CellMatcher, sizer: impl SizeConstraints + 'static) -> Self {
        self.sizers.push((matcher, Box::new(sizer)));
        self
    }

    /// Register a text wrapper for the cells `matcher` selects.
    pub fn wrap(mut self, matcher: CellMatcher, wrapper: impl TextWrapper + 'static) -> Self {
        self.wrappers
            .push((matcher, AssertingTextWrapper::new(Box::new(wrapper))));
        self
    }

    /// Register an alignment strategy for the cells `matcher` selects.
    pub fn align(mut self, matcher: CellMatcher, aligner: impl AlignmentStrategy + 'static) -> Self {
        self.aligners
            .push((matcher, AssertingAlignmentStrategy::new(Box::new(aligner))));
        self
    }

    /// Width measure used by the engine's output-contract checks.
    /// Defaults to code-point counting; install the same measure here
    /// and in the sizing/wrapping strategies when plugging in East-Asian
    /// widths.
    pub fn char_width(mut self, measure: impl CharWidth + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Hand the solver's rounding residual to the leftmost still-elastic
    /// columns, one cell each. Off by default: the residual is normally
    /// accepted and the table may undershoot the requested width by up
    /// to `columns - 1` cells.
    pub fn redistribute_residual(mut self, enabled: bool) -> Self {
        self.redistribute_residual = enabled;
        self
    }

    /// Register a border over the rectangle `(top, left)..(bottom, right)`
    /// (exclusive bounds), painting the edges in `matches` with `style`.
    ///
    /// The rectangle must fit the model: `top < bottom <= rows` and
    /// `left < right <= columns`.
    pub fn with_border(
        mut self,
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
        matches: BorderMatch,
        style: BorderStyle,
    ) -> Result<Self> {
        let rows = self.model.row_count();
        let columns = self.model.column_count();
        let fits = top < rows
            && bottom > top
            && bottom <= rows
            && left < columns
            && right > left
            && right <= columns;
        if !fits {
            return Err(TableError::Dimension {
                top,
                left,
                bottom,
                right,
                rows,
                columns,
            });
        }
        self.borders
            .push(BorderSpecification::new(top, left, bottom, right, matches, style));
        Ok(self)
    }

    /// Border on every edge of the whole table.
    pub fn with_full_border(self, style: BorderStyle) -> Result<Self> {
        let rows = self.model.row_count();
        let columns = self.model.column_count();
        self.with_border(0, 0, rows, columns, BorderMatch::ALL, style)
    }

    /// Border around the outside of the whole table.
    pub fn with_outline_border(self, style: BorderStyle) -> Result<Self> {
        let rows = self.model.row_count();
        let columns = self.model.column_count();
        self.with_border(0, 0, rows, columns, BorderMatch::OUTLINE, style)
    }

    /// Outline plus column separators plus a rule under the header row.
    pub fn with_header_border(self, style: BorderStyle) -> Result<Self> {
        let rows = self.model.row_count();
        let columns = self.model.column_count();
        self.with_border(
            0,
            0,
            rows,
            columns,
            BorderMatch::OUTLINE | BorderMatch::INNER_VERTICAL,
            style,
        )?
        .with_border(0, 0, 1, columns, BorderMatch::BOTTOM, style)
    }

    /// Render the table into at most `total_width`-cell lines.
    ///
    /// Produces a `'\n'`-terminated line per border band and cell
    /// sub-row; an empty model renders to the empty string. When the
    /// content cannot fit, minimum widths are used and the output
    /// overflows `total_width` rather than failing.
    pub fn render(&self, total_width: usize) -> Result<String> {
        let rows = self.model.row_count();
        let columns = self.model.column_count();

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("table_render", rows, columns, width = total_width).entered();

        let grid = BorderGrid::new(rows, columns, &self.borders);
        let available = total_width.saturating_sub(grid.vertical_lane_count());

        // Format every cell and aggregate column extents.
        let mut cells: Vec<Vec<Vec<String>>> = Vec::with_capacity(rows);
        let mut min_widths = vec![0usize; columns];
        let mut max_widths = vec![0usize; columns];
        for row in 0..rows {
            let mut row_cells = Vec::with_capacity(columns);
            for column in 0..columns {
                let lines = self
                    .formatter_for(row, column)
                    .format_checked(self.model.value(row, column))
                    .map_err(|detail| TableError::ContractViolation { row, column, detail })?;
                let extent = self
                    .sizer_for(row, column)
                    .width(&lines, available, columns);
                min_widths[column] = min_widths[column].max(extent.min);
                max_widths[column] = max_widths[column].max(extent.max);
                row_cells.push(lines);
            }
            cells.push(row_cells);
        }

        let widths = self.compute_actual_column_widths(available, &min_widths, &max_widths);

        #[cfg(feature = "tracing")]
        if min_widths.iter().sum::<usize>() > available {
            tracing::warn!(
                available,
                "minimum column widths exceed the available width; output will overflow"
            );
        }

        // Wrap to the solved widths and derive row heights.
        let mut heights = vec![0usize; rows];
        for row in 0..rows {
            for column in 0..columns {
                let wrapped = self
                    .wrapper_for(row, column)
                    .wrap_checked(&cells[row][column], widths[column], self.measure.as_ref())
                    .map_err(|detail| TableError::ContractViolation { row, column, detail })?;
                heights[row] = heights[row].max(wrapped.len());
                cells[row][column] = wrapped;
            }
        }

        // Align each cell into its exact width-by-height block.
        for row in 0..rows {
            for column in 0..columns {
                let lines = std::mem::take(&mut cells[row][column]);
                cells[row][column] = self
                    .aligner_for(row, column)
                    .align_checked(lines, widths[column], heights[row], self.measure.as_ref())
                    .map_err(|detail| TableError::ContractViolation { row, column, detail })?;
            }
        }

        // Emit: for every row a top border band, then its sub-rows; close
        // with the bottom band. Bands only end in '\n' when non-empty.
        let mut out = String::new();
        for row in 0..rows {
            self.emit_band(&grid, row, &widths, &mut out);
            for sub in 0..heights[row] {
                for column in 0..columns {
                    grid.paint_vertical(row, column, &mut out);
                    out.push_str(&cells[row][column][sub]);
                }
                grid.paint_vertical(row, columns, &mut out);
                out.push('\n');
            }
        }
        self.emit_band(&grid, rows, &widths, &mut out);

        Ok(out)
    }

    fn emit_band(&self, grid: &BorderGrid, row: usize, widths: &[usize], out: &mut String) {
        let before = out.len();
        for (column, width) in widths.iter().enumerate() {
            grid.paint_corner(row, column, out);
            grid.paint_horizontal(row, column, *width, out);
        }
        grid.paint_corner(row, widths.len(), out);
        if out.len() > before {
            out.push('\n');
        }
    }

    /// Solve per-column widths from the aggregated extents.
    ///
    /// When everything fits at max, max wins; when even the minima
    /// overflow, the minima are used as-is; otherwise the slack is
    /// spread proportionally to each column's elasticity, integer
    /// division truncating toward zero.
    fn compute_actual_column_widths(
        &self,
        available: usize,
        min_widths: &[usize],
        max_widths: &[usize],
    ) -> Vec<usize> {
        let sum_min: usize = min_widths.iter().sum();
        let sum_max: usize = max_widths.iter().sum();

        if sum_max <= available {
            return max_widths.to_vec();
        }
        if sum_min >= available {
            return min_widths.to_vec();
        }

        let slack = available - sum_min;
        let elasticity = sum_max - sum_min;
        let mut widths: Vec<usize> = min_widths
            .iter()
            .zip(max_widths)
            .map(|(min, max)| min + slack * (max - min) / elasticity)
            .collect();

        if self.redistribute_residual {
            let mut residual = available - widths.iter().sum::<usize>();
            while residual > 0 {
                let mut gave = false;
                for (width, max) in widths.iter_mut().zip(max_widths) {
                    if residual == 0 {
                        break;
                    }
                    if *width < *max {
                        *width += 1;
                        residual -= 1;
                        gave = true;
                    }
                }
                if !gave {
                    break;
                }
            }
        }
        widths
    }

    fn formatter_for(&self, row: usize, column: usize) -> &AssertingFormatter {
        let mut result = &self.formatters[0].1;
        for (matcher, formatter) in &self.formatters {
            if matcher.matches(row, column, self.model.as_ref()) {
                result = formatter;
            }
        }
        result
    }

    fn sizer_for(&self, row: usize, column: usize) -> &dyn SizeConstraints {
        let mut result = self.sizers[0].1.as_ref();
        for (matcher, sizer) in &self.sizers {
            if matcher.matches(row, column, self.model.as_ref()) {
                result = sizer.as_ref();
            }
        }
        result
    }

    fn wrapper_for(&self, row: usize, column: usize) -> &AssertingTextWrapper {
        let mut result = &self.wrappers[0].1;
        for (matcher, wrapper) in &self.wrappers {
            if matcher.matches(row, column, self.model.as_ref()) {
                result = wrapper;
            }
        }
        result
    }

    fn aligner_for(&self, row: usize, column: usize) -> &AssertingAlignmentStrategy {
        let mut result = &self.aligners[0].1;
        for (matcher, aligner) in &self.aligners {
            if matcher.matches(row, column, self.model.as_ref()) {
                result = aligner;
            }
        }
        result
    }
}
