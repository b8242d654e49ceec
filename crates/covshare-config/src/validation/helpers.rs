//! Shared range-validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is negative or not a number.
pub(crate) fn validate_non_negative(errors: &mut Vec<String>, name: &str, value: f64) {
    if value.is_nan() || value < 0.0 {
        errors.push(format!("{name} = {value} must be >= 0"));
    }
}
