use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Order in which rows are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Lowest value at the top.
    #[default]
    Ascending,
    /// Greatest value at the top.
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Built-in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// By the cell's numeric value.
    Numeric,
    /// By the cell's lowercase text.
    Lexical,
    /// By the cell's date value.
    Date,
}

/// One table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Display name.
    pub name: String,
    /// Key of the row cell shown in this column.
    pub key: String,
    /// Requested share of the header width, in percent (0-100).
    pub width: Option<f64>,
    pub sortable: bool,
    /// Whether this is the initial sort column.
    pub sorted: bool,
    pub sort: Option<SortOption>,
    pub sort_order: SortOrder,
    pub hidden: bool,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name: String::new(),
            key: String::new(),
            width: None,
            sortable: true,
            sorted: false,
            sort: None,
            sort_order: SortOrder::Ascending,
            hidden: false,
        }
    }
}

impl Column {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, percent: f64) -> Self {
        self.width = Some(percent);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.sorted = true;
        self.sort_order = order;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// The requested width, if any. Zero counts as unset.
    pub fn requested_percent(&self) -> Option<f64> {
        self.width.filter(|w| *w > 0.0)
    }
}

/// Cell content: a number or a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Number(n) => Cow::Owned(n.to_string()),
            Cell::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Numeric value; text is parsed after trimming.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n).filter(|n| !n.is_nan()),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// One table row, cells keyed by column key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub cells: BTreeMap<String, Cell>,
    /// Disabled rows ignore clicks and checkbox changes.
    pub disabled: bool,
    pub background_color: Option<String>,
    /// Progress bar fill, 0-100.
    pub progress: Option<f64>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell(mut self, key: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.cells.insert(key.into(), cell.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn cell(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_defaults_to_sortable() {
        let column: Column = serde_json::from_str(r#"{"name":"Cases","key":"cases"}"#).unwrap();
        assert!(column.sortable);
        assert!(!column.hidden);
        assert_eq!(column.sort_order, SortOrder::Ascending);
        assert_eq!(column.requested_percent(), None);
    }

    #[test]
    fn zero_width_counts_as_unset() {
        assert_eq!(Column::new("a", "a").with_width(0.0).requested_percent(), None);
        assert_eq!(Column::new("a", "a").with_width(25.0).requested_percent(), Some(25.0));
    }

    #[test]
    fn cells_deserialize_untagged() {
        let row: Row =
            serde_json::from_str(r#"{"cells":{"state":"Ohio","cases":1200}}"#).unwrap();
        assert_eq!(row.cell("state"), Some(&Cell::Text("Ohio".into())));
        assert_eq!(row.cell("cases"), Some(&Cell::Number(1200.0)));
        assert!(!row.disabled);
    }

    #[test]
    fn cell_numeric_value() {
        assert_eq!(Cell::from(" 12.5 ").as_number(), Some(12.5));
        assert_eq!(Cell::from("n/a").as_number(), None);
        assert_eq!(Cell::from(3.0).as_text(), "3");
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }
}
