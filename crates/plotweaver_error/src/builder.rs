//! Errors from assembling requests and content records.

/// Why a record or request could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A generated builder was finished without a required field
    #[display("Incomplete: {}", _0)]
    Incomplete(String),

    /// A write-once field was assigned a second time
    #[display("Field '{}' already recorded as '{}'", field, existing)]
    AlreadyRecorded {
        /// Name of the write-once field
        field: &'static str,
        /// Value recorded by the first assignment
        existing: String,
    },
}

/// Builder error with location tracking.
///
/// ```
/// use plotweaver_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::AlreadyRecorded {
///     field: "generation_type",
///     existing: "llm".to_string(),
/// });
/// assert!(err.to_string().contains("generation_type"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

/// `derive_builder` reports missing fields as a message string.
impl From<String> for BuilderError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(BuilderErrorKind::Incomplete(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_message_is_incomplete() {
        let err = BuilderError::from("`prompt` must be initialized".to_string());
        assert_eq!(
            err.kind(),
            &BuilderErrorKind::Incomplete("`prompt` must be initialized".to_string())
        );
        assert!(err.file.ends_with("builder.rs"));
    }
}
