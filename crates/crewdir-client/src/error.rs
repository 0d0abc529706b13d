use std::fmt;

/// Result type for crewdir-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the directory API
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure: the request never completed, or the
    /// response body could not be decoded
    Network(reqwest::Error),

    /// The server answered with a non-2xx, non-conflict status
    Server { status: u16 },

    /// Create was rejected with 409: the id is already taken
    DuplicateId { id: String },
}

impl Error {
    /// True for the one failure a user can fix by picking another id.
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Error::DuplicateId { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(err) => write!(f, "network error: {}", err),
            Error::Server { status } => write!(f, "server responded with status {}", status),
            Error::DuplicateId { id } => write!(f, "employee id '{}' already exists", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(err) => Some(err),
            Error::Server { .. } | Error::DuplicateId { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}
