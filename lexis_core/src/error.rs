use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a core operation can fail.
///
/// Failures are terminal for the request that triggered them; nothing is
/// retried inside the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Submitted value was absent or empty.
    #[error("String is missing")]
    MissingValue,

    /// Submitted value was present but not a string.
    #[error("{0} must be a string")]
    NotAString(String),

    #[error("String already exists in system")]
    Duplicate(String),

    #[error("String doesn't exist in system")]
    NotFound(String),

    /// One entry per malformed filter parameter.
    #[error("Invalid query parameter values or types: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Unable to parse natural language query")]
    Parse(String),

    #[error("Query parsed but resulted in conflicting filters: min_length {min_length} > max_length {max_length}")]
    Conflict { min_length: i64, max_length: i64 },

    #[error("entry store lock is poisoned")]
    LockPoisoned,
}

impl Error {
    /// Stable machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingValue | Self::NotAString(_) => "invalid_input",
            Self::Duplicate(_) => "duplicate",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Parse(_) => "parse",
            Self::Conflict { .. } => "conflict",
            Self::LockPoisoned => "internal",
        }
    }

    /// HTTP status a transport should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingValue | Self::Validation(_) | Self::Parse(_) => 400,
            Self::NotAString(_) | Self::Conflict { .. } => 422,
            Self::Duplicate(_) => 409,
            Self::NotFound(_) => 404,
            Self::LockPoisoned => 500,
        }
    }

    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MissingValue | Self::NotAString(_))
    }
}
