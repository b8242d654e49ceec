//! Column engine for the data table: widths, sorting, visibility and
//! selection, independent of any rendering.

pub mod sort;
pub mod table;
pub mod types;
pub mod widths;

pub use sort::Comparator;
pub use table::DataTable;
pub use types::{Cell, Column, Row, SortOption, SortOrder};
pub use widths::{ColumnResize, WidthRules};
