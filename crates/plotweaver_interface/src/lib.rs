//! Trait boundary between the pipeline and generation-service backends.
//!
//! The pipeline only ever talks to a [`GenerationDriver`]; the Gemini client
//! in `plotweaver_models` is one implementation and tests supply mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::GenerationDriver;
