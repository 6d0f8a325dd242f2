//! Generation-service integrations for Plotweaver.
//!
//! Each provider lives behind its own feature flag.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature (on by default)
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use plotweaver_core::GenerateRequestBuilder;
//! use plotweaver_interface::GenerationDriver;
//! use plotweaver_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//! let request = GenerateRequestBuilder::default()
//!     .system_prompt("You are a storyteller.")
//!     .user_prompt("Genre: SF")
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GeminiResult, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_VAR};
