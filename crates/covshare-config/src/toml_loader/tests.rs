use super::*;
use covshare_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_covshare_config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[layout]
handle_size = 6.0
handle_color = "#336699"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.handle_size, 6.0);
    assert_eq!(config.layout.handle_color, "#336699");
    assert_eq!(config.layout.hit_slop, 5.0);
    assert_eq!(config.table.select_column_width, 35.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn invalid_values_are_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\nhandle_size = 99.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.handle_size, 99.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("covshare").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::schema::CovshareConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let content = default_config_toml();
    let config: crate::schema::CovshareConfig = toml::from_str(content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("covshare"));
        assert!(path_str.ends_with("config.toml"));
    }
}
