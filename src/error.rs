// FolioFx
// copyright folio_fx developers 2025

/// Errors raised outside the per-frame core
///
/// The quality controller and particle fields never fail; only loading
/// configuration and setting up logging can.
#[derive(Debug, Clone, PartialEq)]
pub enum FxError {
    // config file could not be read
    Io(String),
    // config file is not valid TOML or has wrong field types
    Parse(String),
    // logger could not be installed
    Log(String),
}

impl std::fmt::Display for FxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FxError::Io(msg) => {
                write!(f, "config io error: {}", msg)
            }
            FxError::Parse(msg) => {
                write!(f, "config parse error: {}", msg)
            }
            FxError::Log(msg) => {
                write!(f, "log init error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FxError {}

impl From<std::io::Error> for FxError {
    fn from(e: std::io::Error) -> Self {
        FxError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for FxError {
    fn from(e: toml::de::Error) -> Self {
        FxError::Parse(e.to_string())
    }
}

/// Result alias used by config and log
pub type Result<T> = std::result::Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FxError::Io("missing.toml".to_string());
        assert_eq!(err.to_string(), "config io error: missing.toml");

        let err = FxError::Parse("expected a table".to_string());
        assert_eq!(err.to_string(), "config parse error: expected a table");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FxError = io.into();
        assert!(matches!(err, FxError::Io(ref m) if m.contains("gone")));
    }

    #[test]
    fn test_result_type() {
        fn load() -> Result<u32> {
            Err(FxError::Parse("bad".to_string()))
        }
        assert_eq!(load().unwrap_err(), FxError::Parse("bad".to_string()));
    }
}
