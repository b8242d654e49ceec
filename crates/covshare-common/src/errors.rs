use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid dimension: {0:?}")]
    InvalidDimension(String),

    #[error("container already mounted: {0}")]
    DuplicateContainer(String),

    #[error("unknown container: {0}")]
    UnknownContainer(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("data table needs at least one column")]
    NoColumns,

    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CovshareError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("layout.handle_size = 99".into());
        assert_eq!(
            err.to_string(),
            "config validation error: layout.handle_size = 99"
        );
    }

    #[test]
    fn layout_error_display() {
        let err = LayoutError::InvalidDimension("12em".into());
        assert_eq!(err.to_string(), "invalid dimension: \"12em\"");

        let err = LayoutError::DuplicateContainer("left".into());
        assert_eq!(err.to_string(), "container already mounted: left");

        let err = LayoutError::UnknownContainer("right".into());
        assert_eq!(err.to_string(), "unknown container: right");
    }

    #[test]
    fn table_error_display() {
        assert_eq!(
            TableError::NoColumns.to_string(),
            "data table needs at least one column"
        );
        assert_eq!(
            TableError::UnknownColumn("cases".into()).to_string(),
            "unknown column: cases"
        );
    }

    #[test]
    fn covshare_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: CovshareError = config_err.into();
        assert!(matches!(err, CovshareError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn covshare_error_from_layout_and_table() {
        let err: CovshareError = LayoutError::UnknownContainer("top".into()).into();
        assert!(matches!(err, CovshareError::Layout(_)));

        let err: CovshareError = TableError::NoColumns.into();
        assert!(matches!(err, CovshareError::Table(_)));
    }

    #[test]
    fn covshare_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CovshareError = io_err.into();
        assert!(matches!(err, CovshareError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn covshare_error_other() {
        let err = CovshareError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
