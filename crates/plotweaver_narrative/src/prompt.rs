//! Prompt assembly from configured templates.

use plotweaver_config::ResolvedAgent;
use plotweaver_core::{AgentConfig, GenerationToolConfig, PromptPurpose};
use plotweaver_error::ConfigError;

const DEFAULT_STORY_SYSTEM: &str = "あなたは有能なストーリーテラーです。";
const DEFAULT_STORY_USER: &str = "ジャンル：{genre}\n物語を生成してください。";
const DEFAULT_OPTIMIZER_SYSTEM: &str = "あなたは経験豊富な編集者です。提供されたプロットの概要を分析し、具体的な改善提案をしてください。";
const DEFAULT_OPTIMIZER_USER: &str = "プロット概要:\n{plot_summary}\n\n改善案を提案してください。";

/// System and user prompt for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    /// Rendered system prompt
    pub system: String,
    /// Rendered user prompt
    pub user: String,
}

/// Builds prompts from an agent's configuration.
///
/// Sources are tried from most to least specific. For the system prompt:
/// the tool's template for the purpose, then the agent's `system_prompt`,
/// then a built-in default. For the user prompt: the tool's template for
/// the purpose, then the agent's `prompt_template`, then a built-in default.
///
/// # Examples
///
/// ```
/// use plotweaver_core::{AgentConfig, PromptPurpose};
/// use plotweaver_narrative::PromptAssembler;
///
/// let agent = AgentConfig::default();
/// let prompt = PromptAssembler::new(&agent, None)
///     .assemble(PromptPurpose::Story, "SF", None)
///     .unwrap();
///
/// assert_eq!(prompt.system, "あなたは有能なストーリーテラーです。");
/// assert_eq!(prompt.user, "ジャンル：SF\n物語を生成してください。");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptAssembler<'a> {
    agent: &'a AgentConfig,
    tool: Option<&'a GenerationToolConfig>,
}

impl<'a> PromptAssembler<'a> {
    /// Create an assembler over explicit configs.
    pub fn new(agent: &'a AgentConfig, tool: Option<&'a GenerationToolConfig>) -> Self {
        Self { agent, tool }
    }

    /// Create an assembler over a resolved agent.
    pub fn for_agent(resolved: &'a ResolvedAgent) -> Self {
        Self::new(resolved.agent(), resolved.tool().as_ref())
    }

    /// Render both prompts for `purpose`.
    ///
    /// `plot_summary` fills `{plot_summary}`; when absent the placeholder
    /// renders as an empty string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a chosen template contains a placeholder
    /// other than `{genre}` or `{plot_summary}`, or an unclosed `{`.
    pub fn assemble(
        &self,
        purpose: PromptPurpose,
        genre: &str,
        plot_summary: Option<&str>,
    ) -> Result<AssembledPrompt, ConfigError> {
        let tool_templates = self.tool.and_then(|tool| tool.templates_for(purpose));

        let (default_system, default_user) = match purpose {
            PromptPurpose::Story => (DEFAULT_STORY_SYSTEM, DEFAULT_STORY_USER),
            PromptPurpose::PlotOptimization => (DEFAULT_OPTIMIZER_SYSTEM, DEFAULT_OPTIMIZER_USER),
        };

        let system_template = tool_templates
            .and_then(|t| t.system.as_deref())
            .or(self.agent.system_prompt().as_deref())
            .unwrap_or(default_system);

        let user_template = tool_templates
            .and_then(|t| t.user.as_deref())
            .or(self.agent.prompt_template().as_deref())
            .unwrap_or(default_user);

        let plot_summary = plot_summary.unwrap_or_default();
        Ok(AssembledPrompt {
            system: render_template(system_template, genre, plot_summary)?,
            user: render_template(user_template, genre, plot_summary)?,
        })
    }
}

/// Substitute `{genre}` and `{plot_summary}` into `template`.
///
/// `{{` and `}}` render as literal braces.
///
/// # Errors
///
/// Any other `{name}` placeholder, or a `{` without a closing `}`, is a
/// `ConfigError`.
///
/// # Examples
///
/// ```
/// use plotweaver_narrative::render_template;
///
/// let rendered = render_template("{genre}: {{\"title\": ...}}", "SF", "").unwrap();
/// assert_eq!(rendered, "SF: {\"title\": ...}");
/// assert!(render_template("{mood}", "SF", "").is_err());
/// ```
#[track_caller]
pub fn render_template(
    template: &str,
    genre: &str,
    plot_summary: &str,
) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(template.len() + genre.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if tail.starts_with('{') {
            let close = tail.find('}').ok_or_else(|| {
                ConfigError::new(format!("Unclosed placeholder in prompt template: {}", template))
            })?;
            match &tail[1..close] {
                "genre" => out.push_str(genre),
                "plot_summary" => out.push_str(plot_summary),
                other => {
                    return Err(ConfigError::new(format!(
                        "Unknown placeholder {{{}}} in prompt template",
                        other
                    )));
                }
            }
            rest = &tail[close + 1..];
        } else {
            out.push('}');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}
