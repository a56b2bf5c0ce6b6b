//! Error types for the host layers
//!
//! Rendering itself never fails: unknown theme, status and tool names resolve
//! to fallbacks. Errors only come from config files, the terminal and the log
//! directory.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Log an error with context as it propagates
pub trait ResultExt<T> {
    /// Build the context lazily, only on the error path
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = Error::config("failed to create .agentdash dir");
        assert_eq!(
            err.to_string(),
            "Configuration error: failed to create .agentdash dir"
        );
    }

    #[test]
    fn test_terminal_errors_carry_cause() {
        let err = Error::TerminalInit("no tty".into());
        assert_eq!(err.to_string(), "Failed to initialize terminal: no tty");
    }

    #[test]
    fn test_with_context_keeps_io_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.with_context(|| "write".into()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
