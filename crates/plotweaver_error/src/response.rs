//! Response normalization error types.

/// Reasons a generation response could not be turned into a content record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ResponseErrorKind {
    /// The cleaned text is not syntactically valid structured data
    #[display("Response is not valid JSON: {}", _0)]
    Unparseable(String),
    /// The text parsed but lacks fields required for a full record
    #[display("Response is missing required fields: {}", _0)]
    MissingFields(String),
}

/// Response error with location tracking.
///
/// # Examples
///
/// ```
/// use plotweaver_error::{ResponseError, ResponseErrorKind};
///
/// let err = ResponseError::new(ResponseErrorKind::MissingFields("themes".to_string()));
/// assert!(format!("{}", err).contains("themes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Response Error: {} at line {} in {}", kind, line, file)]
pub struct ResponseError {
    /// The specific error condition
    pub kind: ResponseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ResponseError {
    /// Create a new ResponseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResponseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
