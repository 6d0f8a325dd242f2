//! Generation-service error types.

/// Conditions raised while invoking the external generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No access credential is available for the service
    #[display("GEMINI_API_KEY environment variable not set")]
    CredentialMissing,
    /// Failed to create the service client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// Transport or service-side failure during the call
    #[display("Generation service call failed: {}", _0)]
    ServiceCallFailed(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The call did not resolve before the configured deadline
    #[display("Generation call timed out after {} seconds", _0)]
    Timeout(u64),
    /// The service answered without any text
    #[display("Generation service returned an empty response")]
    EmptyResponse,
}

impl GenerationErrorKind {
    /// Whether the failure happened before any network access was attempted.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::CredentialMissing | GenerationErrorKind::ClientCreation(_)
        )
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use plotweaver_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::CredentialMissing);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.kind.is_precondition());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
