use std::fmt;

/// Result type for pubassist-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// HTTP client failure (connect, timeout, body read)
    Http(reqwest::Error),

    /// Transport failure not originating from the HTTP client
    Transport(String),

    /// API answered with a non-success status
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    Decode(serde_json::Error),

    /// Malformed Range / Content-Range value
    Range(pubassist_types::Error),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Invalid argument supplied by the caller
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::Status { status, body } if body.is_empty() => {
                write!(f, "API returned status {}", status)
            }
            Error::Status { status, body } => {
                write!(f, "API returned status {}: {}", status, body)
            }
            Error::Decode(err) => write!(f, "Failed to decode response: {}", err),
            Error::Range(err) => write!(f, "{}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Range(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Transport(_) | Error::Status { .. } | Error::Config(_) | Error::InvalidInput(_) => {
                None
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<pubassist_types::Error> for Error {
    fn from(err: pubassist_types::Error) -> Self {
        Error::Range(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
