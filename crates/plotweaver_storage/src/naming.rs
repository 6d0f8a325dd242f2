//! Artifact file naming.

use chrono::{DateTime, Local};

/// Upper bound, in bytes, on the genre token inside a file name.
///
/// Keeps `error_story_<timestamp>_<genre>_<n>.json` well under the common
/// 255-byte file name limit.
pub const MAX_GENRE_TOKEN_BYTES: usize = 64;

/// Reduce a genre to a filename-safe token.
///
/// The genre is case-folded and every character that is not alphanumeric is
/// replaced with `_`. Non-ASCII letters such as kana are kept. The token is
/// cut to at most [`MAX_GENRE_TOKEN_BYTES`] on a character boundary; the full
/// genre is still recorded inside the artifact.
///
/// # Examples
///
/// ```
/// use plotweaver_storage::sanitize_genre;
///
/// assert_eq!(sanitize_genre("Sci-Fi/Horror"), "sci_fi_horror");
/// assert_eq!(sanitize_genre("ファンタジー"), "ファンタジー");
/// ```
pub fn sanitize_genre(genre: &str) -> String {
    let mut token = String::new();
    for c in genre
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
    {
        if token.len() + c.len_utf8() > MAX_GENRE_TOKEN_BYTES {
            break;
        }
        token.push(c);
    }
    token
}

/// Base file name shared by a story's artifacts: `story_<timestamp>_<genre>`.
///
/// The timestamp has microsecond resolution (`%Y%m%d_%H%M%S_%6f`).
pub fn artifact_base(timestamp: &DateTime<Local>, genre: &str) -> String {
    format!(
        "story_{}_{}",
        timestamp.format("%Y%m%d_%H%M%S_%6f"),
        sanitize_genre(genre)
    )
}
