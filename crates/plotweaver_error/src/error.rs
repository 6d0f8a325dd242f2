//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, GenerationError, JsonError, ResponseError, StorageError,
};

/// Every error condition the workspace can raise.
///
/// # Examples
///
/// ```
/// use plotweaver_error::{PlotweaverError, PlotweaverErrorKind, JsonError};
///
/// let err: PlotweaverError = JsonError::new("bad token").into();
/// assert!(matches!(err.kind(), PlotweaverErrorKind::Json(_)));
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PlotweaverErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generation service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Response normalization error
    #[from(ResponseError)]
    Response(ResponseError),
    /// Artifact or roster persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Plotweaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use plotweaver_error::{PlotweaverResult, StorageError, StorageErrorKind};
///
/// fn persist() -> PlotweaverResult<()> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("x".into())))?
/// }
///
/// let err = persist().unwrap_err();
/// assert!(err.is_fatal());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Plotweaver Error: {}", _0)]
pub struct PlotweaverError(Box<PlotweaverErrorKind>);

impl PlotweaverError {
    /// Create a new error from a kind.
    pub fn new(kind: PlotweaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PlotweaverErrorKind {
        &self.0
    }

    /// Whether the pipeline must surface this error to its caller.
    ///
    /// Only persistence failures are fatal; a run without an artifact has no
    /// observable outcome.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), PlotweaverErrorKind::Storage(_))
    }
}

// Generic From implementation for any type that converts to PlotweaverErrorKind
impl<T> From<T> for PlotweaverError
where
    T: Into<PlotweaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Plotweaver operations.
pub type PlotweaverResult<T> = std::result::Result<T, PlotweaverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenerationErrorKind, StorageErrorKind};

    #[test]
    fn test_generation_errors_are_recoverable() {
        let err: PlotweaverError =
            GenerationError::new(GenerationErrorKind::ServiceCallFailed("reset".into())).into();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_storage_errors_are_fatal() {
        let err: PlotweaverError =
            StorageError::new(StorageErrorKind::DirectoryCreation("stories".into())).into();
        assert!(err.is_fatal());
        assert!(format!("{}", err).contains("stories"));
    }

    #[test]
    fn test_location_is_captured() {
        let err = ConfigError::new("missing agent");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
