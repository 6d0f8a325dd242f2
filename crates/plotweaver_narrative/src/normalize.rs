//! Normalization of raw generation-service output.
//!
//! The service is asked for JSON but frequently wraps it in a markdown code
//! fence, and sometimes answers in prose. Normalization strips the wrapper
//! and parses what remains; text that will not parse is kept verbatim so a
//! human can still read it.

use plotweaver_core::{ContentDraft, RawGenerationResult};
use plotweaver_error::JsonError;

/// Remove a markdown code fence wrapping the whole text.
///
/// The text is trimmed first. A wrapper is removed only when the text both
/// starts with ```` ``` ```` (optionally followed by a language tag on the
/// same line) and ends with ```` ``` ````. Anything else is returned trimmed
/// but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use plotweaver_narrative::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"title\": \"X\"}\n```"), "{\"title\": \"X\"}");
/// assert_eq!(strip_code_fence("  {\"title\": \"X\"} "), "{\"title\": \"X\"}");
/// ```
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(body) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    // Skip a language tag such as `json` on the opening line
    let body = match body.find('\n') {
        Some(newline) if is_language_tag(&body[..newline]) => &body[newline + 1..],
        _ => body,
    };

    body.trim()
}

fn is_language_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}

/// Classify raw service output.
///
/// `None` (no call made, or the call failed) is [`RawGenerationResult::Absent`].
/// A JSON object whose present fields have the story's types is
/// `Structured`, even with keys missing; anything else is kept
/// as `FreeText` holding the fence-stripped text. Never fails.
///
/// # Examples
///
/// ```
/// use plotweaver_core::RawGenerationResult;
/// use plotweaver_narrative::normalize;
///
/// assert!(normalize(Some("```json\n{\"title\": \"X\"}\n```")).is_structured());
/// assert_eq!(
///     normalize(Some("むかしむかし")).free_text(),
///     Some("むかしむかし")
/// );
/// assert_eq!(normalize(None), RawGenerationResult::Absent);
/// ```
pub fn normalize(raw: Option<&str>) -> RawGenerationResult {
    let Some(raw) = raw else {
        return RawGenerationResult::Absent;
    };

    let cleaned = strip_code_fence(raw);
    match parse_json::<serde_json::Value>(cleaned) {
        Ok(value @ serde_json::Value::Object(_)) => {
            match serde_json::from_value::<ContentDraft>(value) {
                Ok(draft) => RawGenerationResult::Structured(draft),
                Err(e) => {
                    tracing::warn!(error = %e, "JSON object does not match the story shape");
                    RawGenerationResult::FreeText(cleaned.to_string())
                }
            }
        }
        _ => RawGenerationResult::FreeText(cleaned.to_string()),
    }
}

/// Parse JSON into `T`, logging a preview of the input on failure.
///
/// # Errors
///
/// Returns a `JsonError` if `json_str` does not deserialize into `T`.
pub fn parse_json<T>(json_str: &str) -> Result<T, JsonError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let err = JsonError::with_input(e.to_string(), json_str);
        tracing::warn!(
            error = %e,
            json_preview = %err.excerpt,
            "JSON parsing failed"
        );
        err
    })
}
