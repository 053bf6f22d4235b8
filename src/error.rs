use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can surface while a game session is running.
///
/// The core itself has no fatal failures: illegal placements are retried and
/// the heuristic's preconditions are caller discipline. What remains is the
/// input/rendering boundary, which can fail on I/O or report that the player
/// walked away mid-game.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session aborted by player")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.computer_delay_ms must be <= 10000".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.computer_delay_ms must be <= 10000"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::Aborted;
        assert_eq!(err.to_string(), "session aborted by player");
    }

    #[test]
    fn test_session_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SessionError = io.into();
        assert!(matches!(err, SessionError::Io(_)));
    }
}
