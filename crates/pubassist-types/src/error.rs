use std::fmt;

/// Result type for pubassist-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `Range` request header could not be parsed
    InvalidRange(String),

    /// `Content-Range` response header could not be parsed
    InvalidContentRange(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange(value) => write!(f, "Invalid Range header: {}", value),
            Error::InvalidContentRange(value) => {
                write!(f, "Invalid Content-Range header: {}", value)
            }
        }
    }
}

impl std::error::Error for Error {}
