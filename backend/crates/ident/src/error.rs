//! UID Error Types
//!
//! Errors raised while reconstructing a [`Uid`](crate::uid::Uid) from
//! serialized input. Fresh generation never fails.

use thiserror::Error;

/// UID result type alias
pub type UidResult<T> = Result<T, UidError>;

/// UID reconstruction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UidError {
    /// Byte payload whose length is not exactly 16
    #[error("malformed UID input: expected {expected} bytes, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    /// Text that is not a canonical UUID string
    #[error("invalid UID text: {0}")]
    InvalidText(String),
}

impl UidError {
    /// Whether the error came from a wrong-length byte payload
    #[inline]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, UidError::MalformedInput { .. })
    }

    /// Record the rejection at the point where it happened
    pub(crate) fn log(&self) {
        match self {
            UidError::MalformedInput { expected, actual } => {
                tracing::debug!(expected, actual, "Rejected malformed UID payload");
            }
            UidError::InvalidText(reason) => {
                tracing::debug!(reason = %reason, "Rejected invalid UID text");
            }
        }
    }

    /// Log and return, for use in `map_err`/`Err(...)` positions
    pub(crate) fn logged(self) -> Self {
        self.log();
        self
    }
}
