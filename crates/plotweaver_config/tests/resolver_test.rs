//! Tests for loading configuration documents and resolving agents.

use plotweaver_config::{ConfigDocument, ConfigResolver, PlotweaverSettings};
use plotweaver_core::PromptPurpose;
use std::io::Write;
use tempfile::TempDir;

const AGENT_CONFIG: &str = r#"
global_settings:
  log_level: INFO
default_agent_id: simple_story_agent_v1
tools:
  - id: llm_tool_gemini_pro
    class: tools.llm_tool.LLMTool
    config:
      model_name: gemini-2.0-flash
      temperature: 0.8
      max_tokens: 1500
      prompt_templates:
        story:
          system: あなたはプロの作家です。
          user: "ジャンル：{genre}\nJSON形式で物語を生成してください。"
agents:
  - id: simple_story_agent_v1
    class: agents.story_agent.StoryAgent
    config:
      use_llm: true
      llm_tool_id: llm_tool_gemini_pro
      story_templates:
        default:
          setup: 平凡な日常
          conflict: "{genre}の事件"
          resolution: 解決
        SF:
          setup: 宇宙船の中
  - id: offline_agent
    config:
      use_llm: false
  - id: broken_tool_agent
    config:
      use_llm: true
      llm_tool_id: missing_tool
"#;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> anyhow::Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

#[test]
fn test_resolve_default_agent_from_yaml_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "agent_config.yaml", AGENT_CONFIG)?;

    let document = ConfigDocument::from_file(&path)?;
    let resolver = ConfigResolver::new(document, path.display().to_string());
    let resolved = resolver.resolve(None);

    assert_eq!(resolved.agent_id(), "simple_story_agent_v1");
    assert_eq!(resolved.config_path(), &path.display().to_string());
    assert!(resolved.wants_generation());

    let tool = resolved.tool().as_ref().expect("tool should resolve");
    assert_eq!(*tool.temperature(), 0.8);
    assert_eq!(*tool.max_output_tokens(), 1500);
    let story = tool
        .templates_for(PromptPurpose::Story)
        .expect("story templates");
    assert_eq!(story.system.as_deref(), Some("あなたはプロの作家です。"));

    assert_eq!(resolved.agent().template_bank().len(), 2);
    assert_eq!(resolved.model_name("fallback"), "gemini-2.0-flash");
    Ok(())
}

#[test]
fn test_unknown_agent_resolves_to_defaults() -> anyhow::Result<()> {
    let document = ConfigDocument::from_yaml_str(AGENT_CONFIG)?;
    let resolved = ConfigResolver::new(document, "agent_config.yaml").resolve(Some("nobody"));

    assert_eq!(resolved.agent_id(), "nobody");
    assert!(!resolved.wants_generation());
    assert!(resolved.agent().template_bank().is_empty());
    Ok(())
}

#[test]
fn test_missing_tool_disables_generation() -> anyhow::Result<()> {
    let document = ConfigDocument::from_yaml_str(AGENT_CONFIG)?;
    let resolver = ConfigResolver::new(document, "agent_config.yaml");

    let broken = resolver.resolve(Some("broken_tool_agent"));
    assert!(*broken.agent().use_generation());
    assert!(broken.tool().is_none());
    assert!(!broken.wants_generation());

    let offline = resolver.resolve(Some("offline_agent"));
    assert!(!offline.wants_generation());
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = ConfigDocument::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(format!("{}", err).contains("Failed to read configuration file"));
    assert!(!err.is_fatal());
}

#[test]
fn test_json_document_by_extension() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        "agents.json",
        r#"{"agents": [{"id": "j", "config": {"use_generation": false}}]}"#,
    )?;

    let document = ConfigDocument::from_file(&path)?;
    assert!(document.agent("j").is_some());
    assert_eq!(
        ConfigResolver::new(document, "agents.json").default_agent_id(),
        "simple_story_agent_v1"
    );
    Ok(())
}

#[test]
fn test_settings_file_overrides_bundled_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        "plotweaver.toml",
        "stories_dir = \"out/stories\"\nrequest_timeout_secs = 5\n",
    )?;

    let settings = PlotweaverSettings::from_file(&path)?;
    assert_eq!(settings.stories_dir, std::path::PathBuf::from("out/stories"));
    assert_eq!(settings.request_timeout_secs, Some(5));
    assert_eq!(settings.default_model, "gemini-2.0-flash");
    assert_eq!(settings.roster_dir, std::path::PathBuf::from("data"));
    Ok(())
}
