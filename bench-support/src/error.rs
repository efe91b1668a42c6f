//! Error types for the benchmark harness.

use thiserror::Error;

/// Faults at the edges of a benchmark run: loading configuration and
/// writing reports.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] seqbench::error::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqbench::error::ConfigError;

    #[test]
    fn config_error_is_transparent() {
        let err: HarnessError = ConfigError::invalid("repeat must be at least 1").into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: repeat must be at least 1"
        );
    }

    #[test]
    fn io_error_is_prefixed() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = HarnessError::from(io);
        assert!(matches!(err, HarnessError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing");
    }

    #[test]
    fn toml_error_converts() {
        let parse = toml::from_str::<toml::Value>("= nope").unwrap_err();
        assert!(matches!(HarnessError::from(parse), HarnessError::Toml(_)));
    }
}
