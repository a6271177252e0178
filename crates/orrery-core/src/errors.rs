use thiserror::Error;

/// Result type alias using OrreryError
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Canonical error kind taxonomy
///
/// Provides a stable, structured classification of all errors in the
/// system. Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A record lookup by id found nothing
    NotFound,
    /// A submitted value is absent or malformed
    InvalidInput,
    /// The datastore rejected a write for violating a constraint
    /// (missing foreign key, NOT NULL, and so on)
    ConstraintViolation,
    /// Any other datastore failure
    Persistence,
    /// Internal invariant failure
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ErrorKind::Persistence => "ERR_PERSISTENCE",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Error type for all domain and persistence operations
#[derive(Debug, Error)]
pub enum OrreryError {
    // ===== Lookup Errors =====
    /// Scientist not found in the datastore
    #[error("Scientist not found: {id}")]
    ScientistNotFound { id: i64 },

    // ===== Validation Errors =====
    /// A required attribute was absent from the input
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A name attribute was present but empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// The request body could not be decoded at all
    #[error("Malformed request body: {reason}")]
    MalformedBody { reason: String },

    // ===== Persistence Errors =====
    /// The datastore rejected a write for violating a constraint
    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    /// Any other datastore failure
    #[error("Persistence failure: {message}")]
    Persistence { message: String },

    // ===== Startup =====
    /// An environment value could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===== Internal =====
    /// Internal invariant failure (lock poisoning, corrupt state)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl OrreryError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrreryError::ScientistNotFound { .. } => ErrorKind::NotFound,
            OrreryError::MissingField { .. } => ErrorKind::InvalidInput,
            OrreryError::InvalidName { .. } => ErrorKind::InvalidInput,
            OrreryError::MalformedBody { .. } => ErrorKind::InvalidInput,
            OrreryError::Constraint { .. } => ErrorKind::ConstraintViolation,
            OrreryError::Persistence { .. } => ErrorKind::Persistence,
            OrreryError::InvalidConfig { .. } => ErrorKind::Internal,
            OrreryError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
