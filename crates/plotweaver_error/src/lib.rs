//! Error types for the Plotweaver pipeline.
//!
//! # Error Hierarchy
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Only [`StorageError`] is treated as fatal by the pipeline. Configuration,
//! generation and response errors are absorbed and turned into a degraded
//! but valid result.
//!
//! # Examples
//!
//! ```
//! use plotweaver_error::{ConfigError, PlotweaverResult};
//!
//! fn load() -> PlotweaverResult<String> {
//!     Err(ConfigError::new("agent not found"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod generation;
mod json;
mod response;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{PlotweaverError, PlotweaverErrorKind, PlotweaverResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use response::{ResponseError, ResponseErrorKind};
pub use storage::{StorageError, StorageErrorKind};
