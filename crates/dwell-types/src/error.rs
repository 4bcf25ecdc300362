use std::fmt;

/// Result type for dwell-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Timestamp string could not be parsed
    InvalidTimestamp(String),

    /// Reporting window bounds are out of order
    InvalidWindow(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimestamp(raw) => write!(
                f,
                "Invalid timestamp '{}': expected RFC 3339 or YYYY-MM-DD",
                raw
            ),
            Error::InvalidWindow(msg) => write!(f, "Invalid reporting window: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
