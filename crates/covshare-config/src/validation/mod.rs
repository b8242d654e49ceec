//! Configuration validation.
//!
//! Each area has its own submodule; the entry points call them all and
//! collect every error into a single `ConfigError`.

mod container;
mod helpers;
mod layout;
mod table;


use crate::schema::{ContainerSchema, CovshareConfig};
use covshare_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CovshareConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    table::validate_table(&mut errors, config);

    finish(errors)
}

/// Validate a declared container: id, sizes, pane dimensions and colors.
pub fn validate_container(schema: &ContainerSchema) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    container::validate_container(&mut errors, schema);
    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
