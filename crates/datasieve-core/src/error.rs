use std::fmt;

/// Result type for datasieve-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures for user-supplied payload text.
///
/// The display strings are the exact messages surfaced to the user; callers
/// render them verbatim.
#[derive(Debug)]
pub enum Error {
    /// The input is not parseable JSON
    Json(serde_json::Error),

    /// The input parsed, but is not an object carrying a `data` array
    Shape,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(_) => write!(f, "Invalid JSON format."),
            Error::Shape => write!(f, "The input must be a JSON object with a 'data' array."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Shape => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
