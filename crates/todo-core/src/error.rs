//! Storage Errors
//!
//! Failures of the persistence side-channel. They never reach the user:
//! the controller logs and swallows them.

/// Common result type for storage and codec operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing medium could not be reached (no window, storage disabled)
    Unavailable(String),
    Read(String),
    Write(String),
    Encode(String),
    /// Persisted blob exists but does not have the expected shape
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Read(msg) => write!(f, "Read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Write failed: {}", msg),
            StoreError::Encode(msg) => write!(f, "Encode failed: {}", msg),
            StoreError::Decode(msg) => write!(f, "Malformed data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
