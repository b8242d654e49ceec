//! The data table state machine: columns, their pixel widths, the sort and
//! the selection.

mod selection;


use std::collections::HashMap;
use std::rc::Rc;

use covshare_common::TableError;
use tracing::debug;

use crate::sort::{infer_option, sorted_indices, sorted_indices_by, Comparator};
use crate::types::{Column, Row, SortOption, SortOrder};
use crate::widths::{equal_widths, requested_widths, scaled_widths, ColumnResize, WidthRules};

/// Shown in place of the body when there are no rows.
pub const DEFAULT_PLACEHOLDER: &str = "No Content";

/// Body height used when the table or header height is unknown.
pub const DEFAULT_BODY_HEIGHT: f64 = 500.0;

pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
    rules: WidthRules,
    multi_select: bool,
    disabled: bool,
    placeholder: String,
    default_body_height: f64,
    hidden: Vec<bool>,
    widths: Vec<f64>,
    /// Content width the current widths were computed for.
    content_width: f64,
    /// Whether a header measurement has resolved the widths yet.
    measured: bool,
    /// Widths were given up front and replace the requested percentages.
    fixed_widths: bool,
    header_width: f64,
    scrollbar_width: f64,
    sort_col: usize,
    sort_order: SortOrder,
    comparators: HashMap<String, Comparator>,
    selected_row: Option<usize>,
    checked_rows: Vec<usize>,
    resize: Option<ColumnResize>,
}

impl DataTable {
    /// A table needs at least one column.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        let sort_col = columns.iter().position(|c| c.sorted).unwrap_or(0);
        let sort_order = columns[sort_col].sort_order;
        let hidden = columns.iter().map(|c| c.hidden).collect();
        let count = columns.len();
        Ok(Self {
            columns,
            rows,
            rules: WidthRules::default(),
            multi_select: false,
            disabled: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_body_height: DEFAULT_BODY_HEIGHT,
            hidden,
            widths: vec![0.0; count],
            content_width: 0.0,
            measured: false,
            fixed_widths: false,
            header_width: 0.0,
            scrollbar_width: 0.0,
            sort_col,
            sort_order,
            comparators: HashMap::new(),
            selected_row: None,
            checked_rows: Vec::new(),
            resize: None,
        })
    }

    pub fn with_rules(mut self, rules: WidthRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_default_body_height(mut self, height: f64) -> Self {
        self.default_body_height = height;
        self
    }

    /// Start from fixed pixel widths. Ignored unless there is exactly one
    /// width per column.
    pub fn with_default_widths(mut self, widths: Vec<f64>) -> Self {
        if widths.len() == self.columns.len() {
            self.widths = widths;
            self.fixed_widths = true;
        } else {
            debug!(
                expected = self.columns.len(),
                got = widths.len(),
                "ignoring default widths"
            );
        }
        self
    }

    // -- Accessors --

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn hidden_columns(&self) -> &[bool] {
        &self.hidden
    }

    pub fn sort_column(&self) -> usize {
        self.sort_col
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn column_index(&self, key: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c.key == key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))
    }

    /// Placeholder text when the table has no rows.
    pub fn placeholder(&self) -> Option<&str> {
        self.rows.is_empty().then_some(self.placeholder.as_str())
    }

    /// Table height minus header height, or the default when either is
    /// unknown.
    pub fn body_height(&self, table_height: Option<f64>, header_height: Option<f64>) -> f64 {
        match (table_height, header_height) {
            (Some(table), Some(header)) => (table - header).max(0.0),
            _ => self.default_body_height,
        }
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.selected_row = self.selected_row.filter(|r| *r < self.rows.len());
        let len = self.rows.len();
        self.checked_rows.retain(|r| *r < len);
    }

    // -- Widths --

    /// Recompute widths for a new header measurement.
    ///
    /// The first measurement resolves the requested percentages (unless
    /// default widths were given), even after a toggle or reset on the
    /// unmeasured header; later ones rescale the current widths so manual
    /// adjustments survive. A zero-width header changes nothing and returns
    /// `None`.
    pub fn on_header_resize(&mut self, header_width: f64, scrollbar_width: f64) -> Option<&[f64]> {
        if header_width <= 0.0 {
            return None;
        }
        self.header_width = header_width;
        self.scrollbar_width = scrollbar_width;
        let content = self.current_content_width();

        self.widths = if !self.measured && !self.fixed_widths {
            requested_widths(&self.columns, &self.hidden, content, &self.rules)
        } else {
            scaled_widths(&self.widths, &self.hidden, self.content_width, content)
        };
        self.content_width = content;
        self.measured = true;
        debug!(header_width, content, widths = ?self.widths, "columns resized");
        Some(&self.widths)
    }

    /// Split the header equally among the visible columns.
    pub fn reset_widths(&mut self) -> &[f64] {
        let content = self.current_content_width();
        self.widths = equal_widths(&self.hidden, self.header_width, content, &self.rules);
        self.content_width = content;
        self.fixed_widths = false;
        &self.widths
    }

    /// Start dragging the right edge of column `col`. Returns `false` for an
    /// unknown or hidden column.
    pub fn begin_column_resize(&mut self, col: usize, start_x: f64, header_left: f64) -> bool {
        let Some(&width) = self.widths.get(col) else {
            return false;
        };
        if self.hidden[col] {
            return false;
        }
        self.resize = Some(ColumnResize::begin(col, start_x, header_left, width, &self.rules));
        true
    }

    /// Where to draw the resize guide, relative to the header.
    pub fn column_resize_guide(&self, x: f64) -> Option<f64> {
        self.resize.map(|r| r.guide(x))
    }

    pub fn is_resizing_column(&self) -> bool {
        self.resize.is_some()
    }

    /// Finish the column drag at `x` and apply the new width.
    pub fn end_column_resize(&mut self, x: f64) -> Option<&[f64]> {
        let resize = self.resize.take()?;
        self.widths = resize.finish(x, &self.widths, &self.rules);
        self.content_width = self.current_content_width();
        debug!(col = resize.col, width = self.widths[resize.col], "column resized");
        Some(&self.widths)
    }

    fn current_content_width(&self) -> f64 {
        self.rules
            .content_width(self.header_width, self.scrollbar_width, self.multi_select)
    }

    // -- Visibility --

    /// Show or hide column `col` and reset widths to an equal split.
    ///
    /// Returns the column's new hidden state, or `None` when the column does
    /// not exist or is the last visible one.
    pub fn toggle_column(&mut self, col: usize) -> Option<bool> {
        let hide = !*self.hidden.get(col)?;
        if hide && self.hidden.iter().filter(|h| !**h).count() <= 1 {
            debug!(col, "refusing to hide the last visible column");
            return None;
        }
        self.hidden[col] = hide;
        self.reset_widths();
        debug!(col, key = %self.columns[col].key, hidden = hide, "column toggled");
        Some(hide)
    }

    pub fn toggle_column_by_key(&mut self, key: &str) -> Result<Option<bool>, TableError> {
        let col = self.column_index(key)?;
        Ok(self.toggle_column(col))
    }

    // -- Sorting --

    /// Header click on column `col`: flip the order when it is already the
    /// sort column, otherwise sort it ascending. Unsortable or unknown
    /// columns are ignored.
    pub fn set_sort(&mut self, col: usize) -> bool {
        if self.resize.is_some() {
            return false;
        }
        match self.columns.get(col) {
            Some(column) if column.sortable => {}
            _ => return false,
        }
        if col == self.sort_col {
            self.sort_order = self.sort_order.toggle();
        } else {
            self.sort_col = col;
            self.sort_order = SortOrder::Ascending;
        }
        true
    }

    /// Sort on the column with `key` in the given order.
    pub fn sort_by_key(&mut self, key: &str, order: SortOrder) -> Result<(), TableError> {
        self.sort_col = self.column_index(key)?;
        self.sort_order = order;
        Ok(())
    }

    /// Use `compare` for the column with `key` instead of a built-in option.
    pub fn register_comparator(
        &mut self,
        key: impl Into<String>,
        compare: impl Fn(&Row, &Row) -> std::cmp::Ordering + 'static,
    ) {
        self.comparators.insert(key.into(), Rc::new(compare));
    }

    /// The comparison the sort column uses.
    pub fn sort_option(&self) -> SortOption {
        let column = &self.columns[self.sort_col];
        column
            .sort
            .unwrap_or_else(|| infer_option(&self.rows, &column.key))
    }

    /// Row indices in display order.
    pub fn sorted_rows(&self) -> Vec<usize> {
        let key = &self.columns[self.sort_col].key;
        match self.comparators.get(key) {
            Some(compare) => sorted_indices_by(&self.rows, self.sort_order, |a, b| compare(a, b)),
            None => sorted_indices(&self.rows, key, self.sort_option(), self.sort_order),
        }
    }
}

impl std::fmt::Debug for DataTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("widths", &self.widths)
            .field("hidden", &self.hidden)
            .field("sort_col", &self.sort_col)
            .field("sort_order", &self.sort_order)
            .finish()
    }
}
