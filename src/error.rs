//! Error types and handling for the `cursos-data` crate

use thiserror::Error;

/// Main error type for catalog fetching, parsing and generation
#[derive(Error, Debug)]
pub enum CursosError {
    /// Network unreachable or non-2xx response from an endpoint
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        /// HTTP status code when the server answered with a non-success status
        status: Option<u16>,
    },

    /// Malformed CSV or JSON payload
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CursosError {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            status: None,
        }
    }

    /// Create a transport error for a non-success HTTP status
    #[must_use]
    pub fn http_status(status: u16) -> Self {
        Self::Transport {
            message: format!("HTTP error! status: {status}"),
            status: Some(status),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            CursosError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CursosError::Transport { .. } => {
                "Unable to reach the course data endpoint. Please check your internet connection."
                    .to_string()
            }
            CursosError::Parse { message } => {
                format!("Course data could not be parsed: {message}")
            }
            CursosError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            CursosError::Io { .. } => {
                "File operation failed. Please check the output path and permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for CursosError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CursosError::Parse {
                message: err.to_string(),
            }
        } else {
            CursosError::Transport {
                message: err.to_string(),
                status: err.status().map(|s| s.as_u16()),
            }
        }
    }
}

impl From<serde_json::Error> for CursosError {
    fn from(err: serde_json::Error) -> Self {
        CursosError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for CursosError {
    fn from(err: csv::Error) -> Self {
        CursosError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let transport_err = CursosError::transport("connection refused");
        assert!(matches!(transport_err, CursosError::Transport { .. }));
        assert_eq!(transport_err.status(), None);

        let status_err = CursosError::http_status(503);
        assert_eq!(status_err.status(), Some(503));
        assert!(status_err.to_string().contains("503"));

        let parse_err = CursosError::parse("unexpected token");
        assert!(matches!(parse_err, CursosError::Parse { .. }));
    }

    #[test]
    fn test_user_messages() {
        let transport_err = CursosError::transport("test");
        assert!(transport_err.user_message().contains("Unable to reach"));

        let parse_err = CursosError::parse("bad header");
        assert!(parse_err.user_message().contains("bad header"));

        let config_err = CursosError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cursos_err: CursosError = io_err.into();
        assert!(matches!(cursos_err, CursosError::Io { .. }));
    }

    #[test]
    fn test_json_error_becomes_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let cursos_err: CursosError = json_err.into();
        assert!(matches!(cursos_err, CursosError::Parse { .. }));
    }
}
