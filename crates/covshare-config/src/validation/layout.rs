//! Layout defaults validation (divider size, color, pane floors).

use crate::colors::validate_color;
use crate::schema::CovshareConfig;

use super::helpers::{validate_non_negative, validate_range};

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &CovshareConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.handle_size", layout.handle_size, 0.0, 20.0);
    validate_range(errors, "layout.hit_slop", layout.hit_slop, 0.0, 20.0);
    validate_non_negative(errors, "layout.min_width", layout.min_width);
    validate_non_negative(errors, "layout.min_height", layout.min_height);
    if !validate_color(&layout.handle_color) {
        errors.push(format!(
            "layout.handle_color = {:?} is not a recognized color",
            layout.handle_color
        ));
    }
}
