//! The `table` subcommand: load a JSON table, measure and sort it.

use std::path::Path;

use covshare_common::{ConfigError, CovshareError};
use covshare_config::TableConfig;
use covshare_table::{Column, DataTable, Row, SortOrder, WidthRules};
use serde::{Deserialize, Serialize};

/// Table file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFile {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Fixed starting widths, one per column.
    #[serde(default)]
    pub default_widths: Vec<f64>,
    #[serde(default)]
    pub multi_select: Option<bool>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub key: String,
    pub width: f64,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub sort_column: String,
    pub sort_order: SortOrder,
    pub columns: Vec<ColumnReport>,
    /// Row indices in display order.
    pub order: Vec<usize>,
    pub rows: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Options from the command line.
#[derive(Debug, Clone, Default)]
pub struct TableRequest {
    pub sort: Option<String>,
    pub descending: bool,
    pub width: f64,
}

pub fn load(path: &Path) -> Result<TableFile, CovshareError> {
    let text = std::fs::read_to_string(path)?;
    let file = serde_json::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    Ok(file)
}

pub fn build(file: TableFile, config: &TableConfig) -> Result<DataTable, CovshareError> {
    let rules = WidthRules {
        min_column_width: config.min_column_width,
        select_column_width: config.select_column_width,
    };
    let mut table = DataTable::new(file.columns, file.rows)?
        .with_rules(rules)
        .with_multi_select(file.multi_select.unwrap_or(config.multi_select))
        .with_default_body_height(config.default_body_height);
    if let Some(placeholder) = file.placeholder {
        table = table.with_placeholder(placeholder);
    }
    if !file.default_widths.is_empty() {
        table = table.with_default_widths(file.default_widths);
    }
    Ok(table)
}

/// Measure the header at the requested width and apply the requested sort.
pub fn report(table: &mut DataTable, request: &TableRequest) -> Result<TableReport, CovshareError> {
    table.on_header_resize(request.width, 0.0);
    let order = if request.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    match &request.sort {
        Some(key) => table.sort_by_key(key, order)?,
        None if request.descending => {
            let key = table.columns()[table.sort_column()].key.clone();
            table.sort_by_key(&key, order)?;
        }
        None => {}
    }

    let columns = table
        .columns()
        .iter()
        .zip(table.widths())
        .zip(table.hidden_columns())
        .map(|((column, width), hidden)| ColumnReport {
            key: column.key.clone(),
            width: *width,
            hidden: *hidden,
        })
        .collect();
    let order = table.sorted_rows();
    let rows = order.iter().map(|&i| table.rows()[i].clone()).collect();

    Ok(TableReport {
        sort_column: table.columns()[table.sort_column()].key.clone(),
        sort_order: table.sort_order(),
        columns,
        order,
        rows,
        placeholder: table.placeholder().map(str::to_string),
    })
}

pub fn run(path: &Path, request: &TableRequest, config: &TableConfig) -> Result<TableReport, CovshareError> {
    let mut table = build(load(path)?, config)?;
    report(&mut table, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CASES: &str = r#"{
        "columns": [
            {"name": "State", "key": "state", "width": 60},
            {"name": "Cases", "key": "cases", "width": 40}
        ],
        "rows": [
            {"cells": {"state": "Ohio", "cases": 1200}},
            {"cells": {"state": "Alaska", "cases": 90}},
            {"cells": {"state": "Maine", "cases": 400}}
        ]
    }"#;

    fn write_table(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn request(sort: Option<&str>, descending: bool) -> TableRequest {
        TableRequest {
            sort: sort.map(str::to_string),
            descending,
            width: 500.0,
        }
    }

    #[test]
    fn default_sort_and_widths() {
        let file = write_table(CASES);
        let report = run(file.path(), &request(None, false), &TableConfig::default()).unwrap();
        assert_eq!(report.sort_column, "state");
        assert_eq!(report.order, vec![1, 2, 0]);
        assert_eq!(report.columns[0].width, 300.0);
        assert_eq!(report.columns[1].width, 200.0);
        assert!(report.placeholder.is_none());
    }

    #[test]
    fn sort_by_key_descending() {
        let file = write_table(CASES);
        let report =
            run(file.path(), &request(Some("cases"), true), &TableConfig::default()).unwrap();
        assert_eq!(report.sort_order, SortOrder::Descending);
        assert_eq!(report.order, vec![0, 2, 1]);
        assert_eq!(report.rows[0].cell("state").unwrap().as_text(), "Ohio");
    }

    #[test]
    fn descending_without_key_flips_default_column() {
        let file = write_table(CASES);
        let report = run(file.path(), &request(None, true), &TableConfig::default()).unwrap();
        assert_eq!(report.sort_column, "state");
        assert_eq!(report.order, vec![0, 2, 1]);
    }

    #[test]
    fn multi_select_from_config_shrinks_columns() {
        let file = write_table(CASES);
        let config = TableConfig {
            multi_select: true,
            ..TableConfig::default()
        };
        // 500 - 35 = 465
        let report = run(file.path(), &request(None, false), &config).unwrap();
        assert_eq!(report.columns[0].width + report.columns[1].width, 465.0);
    }

    #[test]
    fn unknown_sort_key_is_an_error() {
        let file = write_table(CASES);
        let err = run(file.path(), &request(Some("deaths"), false), &TableConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown column: deaths");
    }

    #[test]
    fn empty_table_reports_placeholder() {
        let file = write_table(r#"{"columns": [{"name": "State", "key": "state"}]}"#);
        let report = run(file.path(), &request(None, false), &TableConfig::default()).unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.placeholder.as_deref(), Some("No Content"));
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let file = write_table("{not json");
        let err = run(file.path(), &request(None, false), &TableConfig::default()).unwrap_err();
        assert!(matches!(err, CovshareError::Config(ConfigError::ParseError(_))));
    }
}
