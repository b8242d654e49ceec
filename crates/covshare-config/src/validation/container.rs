//! Declared container validation.

use std::str::FromStr;

use covshare_common::types::Dimension;

use crate::colors::validate_color;
use crate::schema::ContainerSchema;

use super::helpers::{validate_non_negative, validate_range};

pub(crate) fn validate_container(errors: &mut Vec<String>, schema: &ContainerSchema) {
    let id = if schema.id.is_empty() {
        errors.push("container.id must not be empty".into());
        "<unnamed>"
    } else {
        schema.id.as_str()
    };

    validate_dimension(errors, &format!("{id}.width"), &schema.width);
    validate_dimension(errors, &format!("{id}.height"), &schema.height);

    for (name, value) in [
        ("min_width", schema.min_width),
        ("min_height", schema.min_height),
        ("max_width", schema.max_width),
        ("max_height", schema.max_height),
    ] {
        if let Some(value) = value {
            validate_non_negative(errors, &format!("{id}.{name}"), value);
        }
    }
    if let Some(handle) = schema.handle_size {
        validate_range(errors, &format!("{id}.handle_size"), handle, 0.0, 20.0);
    }
    if let Some(slop) = schema.hit_slop {
        validate_range(errors, &format!("{id}.hit_slop"), slop, 0.0, 20.0);
    }
    if let Some(color) = &schema.handle_color {
        if !validate_color(color) {
            errors.push(format!("{id}.handle_color = {color:?} is not a recognized color"));
        }
    }
    if schema.connected_to.iter().any(|p| p == id) {
        errors.push(format!("{id} cannot follow itself"));
    }

    for (i, pane) in schema.panes.iter().enumerate() {
        let label = if pane.label.is_empty() {
            format!("{id}.pane[{i}]")
        } else {
            format!("{id}.{}", pane.label)
        };
        validate_dimension(errors, &format!("{label}.width"), &pane.width);
        validate_dimension(errors, &format!("{label}.height"), &pane.height);
    }
}

fn validate_dimension(errors: &mut Vec<String>, name: &str, value: &str) {
    if let Err(e) = Dimension::from_str(value) {
        errors.push(format!("{name}: {e}"));
    }
}
