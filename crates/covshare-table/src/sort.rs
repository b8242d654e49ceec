//! Row sorting.
//!
//! Sorting never reorders the row list; it yields the original indices in
//! display order. Descending is the ascending order reversed.

use std::cmp::Ordering;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::{Cell, Row, SortOption, SortOrder};

/// Custom row comparison registered for a column key.
pub type Comparator = Rc<dyn Fn(&Row, &Row) -> Ordering>;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d %b %Y", "%b %d, %Y"];

/// The comparison used when a column does not name one: lexical when the
/// first row's cell is text, numeric otherwise.
pub fn infer_option(rows: &[Row], key: &str) -> SortOption {
    match rows.first().and_then(|row| row.cell(key)) {
        Some(cell) if cell.is_text() => SortOption::Lexical,
        _ => SortOption::Numeric,
    }
}

/// Compare two optional cells under a built-in option.
///
/// Missing cells and values that cannot be read as the requested kind sort
/// before everything else and equal to each other.
pub fn compare_cells(a: Option<&Cell>, b: Option<&Cell>, option: SortOption) -> Ordering {
    match option {
        SortOption::Lexical => {
            let a = a.map(|c| c.as_text().to_lowercase()).unwrap_or_default();
            let b = b.map(|c| c.as_text().to_lowercase()).unwrap_or_default();
            a.cmp(&b)
        }
        SortOption::Numeric => {
            let a = a.and_then(Cell::as_number);
            let b = b.and_then(Cell::as_number);
            compare_optional(a, b, |x, y| x.total_cmp(y))
        }
        SortOption::Date => {
            let a = a.and_then(parse_date);
            let b = b.and_then(parse_date);
            compare_optional(a, b, Ord::cmp)
        }
    }
}

/// Display order for `rows` sorted on column `key`.
pub fn sorted_indices(rows: &[Row], key: &str, option: SortOption, order: SortOrder) -> Vec<usize> {
    sorted_indices_by(rows, order, |a, b| compare_cells(a.cell(key), b.cell(key), option))
}

/// Display order for `rows` under an arbitrary comparison.
pub fn sorted_indices_by(
    rows: &[Row],
    order: SortOrder,
    compare: impl Fn(&Row, &Row) -> Ordering,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    indices.sort_by(|&a, &b| compare(&rows[a], &rows[b]));
    if order == SortOrder::Descending {
        indices.reverse();
    }
    indices
}

/// Read a cell as a date. Numbers are milliseconds since the Unix epoch.
pub fn parse_date(cell: &Cell) -> Option<NaiveDateTime> {
    let text = match cell {
        Cell::Number(ms) => {
            return DateTime::from_timestamp_millis(*ms as i64).map(|d| d.naive_utc());
        }
        Cell::Text(text) => text.trim(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn compare_optional<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
