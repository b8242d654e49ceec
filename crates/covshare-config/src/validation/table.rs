use crate::schema::CovshareConfig;

use super::helpers::validate_range;

pub(crate) fn validate_table(errors: &mut Vec<String>, config: &CovshareConfig) {
    let table = &config.table;
    validate_range(
        errors,
        "table.min_column_width",
        table.min_column_width,
        1.0,
        200.0,
    );
    validate_range(
        errors,
        "table.select_column_width",
        table.select_column_width,
        0.0,
        200.0,
    );
    if table.default_body_height.is_nan() || table.default_body_height < 1.0 {
        errors.push(format!(
            "table.default_body_height = {} must be >= 1",
            table.default_body_height
        ));
    }
}
