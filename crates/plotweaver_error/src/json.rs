//! Errors raised while decoding model output as JSON.

/// Characters of the offending input kept on a [`JsonError`].
const EXCERPT_CHARS: usize = 100;

/// A model response that did not decode into the expected shape.
///
/// Carries a short excerpt of the input so logs and error chains show what
/// the service actually returned.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} (input: {:?}) at line {} in {}", message, excerpt, line, file)]
pub struct JsonError {
    /// Decoder message
    pub message: String,
    /// Leading characters of the rejected input, empty when unknown
    pub excerpt: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create an error with no input excerpt.
    ///
    /// ```
    /// use plotweaver_error::JsonError;
    ///
    /// let err = JsonError::new("trailing comma");
    /// assert!(err.message.contains("trailing"));
    /// assert!(err.excerpt.is_empty());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_input(message, "")
    }

    /// Create an error that remembers the start of the rejected input.
    ///
    /// At most 100 characters are kept, cut on a char boundary.
    #[track_caller]
    pub fn with_input(message: impl Into<String>, input: &str) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            excerpt: input.chars().take(EXCERPT_CHARS).collect(),
            line: location.line(),
            file: location.file(),
        }
    }
}
