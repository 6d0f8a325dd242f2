//! Configuration for the Plotweaver story pipeline.
//!
//! Two layers live here:
//!
//! - [`ConfigDocument`]: the agent configuration document listing named
//!   generation tools and named agents. [`ConfigResolver`] turns it into a
//!   typed [`ResolvedAgent`] for one agent identity.
//! - [`PlotweaverSettings`]: application settings (paths, timeouts, default
//!   model) merged from bundled defaults, user files and the environment.
//!
//! # Example
//!
//! ```
//! use plotweaver_config::{ConfigDocument, ConfigResolver};
//!
//! let yaml = r#"
//! default_agent_id: simple_story_agent_v1
//! tools:
//!   - id: llm_tool_gemini_pro
//!     config:
//!       model_name: gemini-2.0-flash
//!       temperature: 0.7
//! agents:
//!   - id: simple_story_agent_v1
//!     config:
//!       use_llm: true
//!       llm_tool_id: llm_tool_gemini_pro
//! "#;
//!
//! let document = ConfigDocument::from_yaml_str(yaml)?;
//! let resolved = ConfigResolver::new(document, "config/agent_config.yaml").resolve(None);
//!
//! assert_eq!(resolved.agent_id(), "simple_story_agent_v1");
//! assert!(resolved.wants_generation());
//! # Ok::<(), plotweaver_error::PlotweaverError>(())
//! ```

#![warn(missing_docs)]

mod document;
mod resolver;
mod settings;

pub use document::{AgentEntry, ConfigDocument, DocumentFormat, ToolEntry};
pub use resolver::{ConfigResolver, DEFAULT_AGENT_ID, ResolvedAgent};
pub use settings::PlotweaverSettings;
