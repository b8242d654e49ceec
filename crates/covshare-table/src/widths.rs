//! Column width arithmetic.
//!
//! Widths are pixels, one per column, hidden columns at zero. The space
//! they share is the content width: the header minus the scrollbar and,
//! in multi-select tables, the checkbox column.

use crate::types::Column;

/// Width limits shared by every column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRules {
    /// Narrowest a column can be resized to.
    pub min_column_width: f64,
    /// Width of the checkbox column when multi-select is on.
    pub select_column_width: f64,
}

impl Default for WidthRules {
    fn default() -> Self {
        Self {
            min_column_width: 20.0,
            select_column_width: 35.0,
        }
    }
}

impl WidthRules {
    pub fn content_width(&self, header_width: f64, scrollbar_width: f64, multi_select: bool) -> f64 {
        let select = if multi_select {
            self.select_column_width
        } else {
            0.0
        };
        (header_width - scrollbar_width - select).max(0.0)
    }
}

fn visible_count(hidden: &[bool]) -> usize {
    hidden.iter().filter(|h| !**h).count()
}

/// Widths from each column's requested percentage.
///
/// Columns without a request share the leftover equally. When the requests
/// (unrequested columns counted at the minimum width) add up to more than
/// 100%, every visible column gets an equal share instead.
pub fn requested_widths(columns: &[Column], hidden: &[bool], content: f64, rules: &WidthRules) -> Vec<f64> {
    let mut widths = vec![0.0; columns.len()];
    let visible = visible_count(hidden);
    if visible == 0 || content <= 0.0 {
        return widths;
    }

    let min_percent = rules.min_column_width / content * 100.0;
    let is_visible = |i: usize| !hidden.get(i).copied().unwrap_or(false);
    let requested: f64 = columns
        .iter()
        .enumerate()
        .filter(|(i, _)| is_visible(*i))
        .map(|(_, c)| c.requested_percent().unwrap_or(min_percent))
        .sum();

    if requested > 100.0 {
        let share = content / visible as f64;
        for (i, width) in widths.iter_mut().enumerate() {
            if is_visible(i) {
                *width = share;
            }
        }
        return widths;
    }

    let mut used = 0.0;
    let mut auto = 0usize;
    for (i, column) in columns.iter().enumerate() {
        if !is_visible(i) {
            continue;
        }
        match column.requested_percent() {
            Some(percent) => {
                widths[i] = content * percent / 100.0;
                used += widths[i];
            }
            None => auto += 1,
        }
    }
    if auto > 0 {
        let share = (content - used).max(0.0) / auto as f64;
        for (i, column) in columns.iter().enumerate() {
            if is_visible(i) && column.requested_percent().is_none() {
                widths[i] = share;
            }
        }
    }
    widths
}

/// Rescale widths to a new content width, keeping each column's share of
/// the previous one. Hidden columns stay at zero.
pub fn scaled_widths(widths: &[f64], hidden: &[bool], previous: f64, content: f64) -> Vec<f64> {
    let base = if previous > 0.0 { previous } else { content };
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if hidden.get(i).copied().unwrap_or(false) || base <= 0.0 {
                0.0
            } else {
                w * content / base
            }
        })
        .collect()
}

/// Split the content width equally among visible columns. An unmeasured
/// header (zero width) gives every visible column the minimum width.
pub fn equal_widths(hidden: &[bool], header_width: f64, content: f64, rules: &WidthRules) -> Vec<f64> {
    if header_width <= 0.0 {
        return hidden
            .iter()
            .map(|h| if *h { 0.0 } else { rules.min_column_width })
            .collect();
    }
    let visible = visible_count(hidden);
    if visible == 0 {
        return vec![0.0; hidden.len()];
    }
    let share = content / visible as f64;
    hidden
        .iter()
        .map(|h| if *h { 0.0 } else { share })
        .collect()
}

/// Grow or shrink one column by `delta`, never below the minimum width.
/// Other columns keep their widths.
pub fn resize_column(widths: &[f64], col: usize, delta: f64, rules: &WidthRules) -> Vec<f64> {
    let mut widths = widths.to_vec();
    if let Some(width) = widths.get_mut(col) {
        *width = (*width + delta).max(rules.min_column_width);
    }
    widths
}

/// An in-progress column drag in the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnResize {
    pub col: usize,
    /// Pointer x when the drag began.
    pub start_x: f64,
    /// Left edge of the header, for placing the guide line.
    pub header_left: f64,
    /// Leftmost pointer x that keeps the column at the minimum width.
    pub min_x: f64,
}

impl ColumnResize {
    pub fn begin(col: usize, start_x: f64, header_left: f64, width: f64, rules: &WidthRules) -> Self {
        let slack = (width - rules.min_column_width).max(0.0);
        Self {
            col,
            start_x,
            header_left,
            min_x: start_x - slack,
        }
    }

    /// Guide line position relative to the header.
    pub fn guide(&self, x: f64) -> f64 {
        x.max(self.min_x) - self.header_left
    }

    /// Widths after releasing the pointer at `x`.
    pub fn finish(&self, x: f64, widths: &[f64], rules: &WidthRules) -> Vec<f64> {
        resize_column(widths, self.col, x.max(self.min_x) - self.start_x, rules)
    }
}
