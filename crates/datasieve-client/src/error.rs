use std::fmt;

/// Result type for datasieve-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the classification service
#[derive(Debug)]
pub enum Error {
    /// The configured endpoint is not a usable URL
    Endpoint(url::ParseError),

    /// Transport failure, non-2xx status, or an undecodable body
    Http(reqwest::Error),

    /// The service reported failure via `is_success = false`
    Processing,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Endpoint(err) => write!(f, "invalid endpoint: {}", err),
            Error::Http(err) => write!(f, "{}", err),
            Error::Processing => write!(f, "Error processing request."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Endpoint(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Processing => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Endpoint(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
