//! Prose rendering of a content record.

use plotweaver_core::ContentStructure;

/// Render a content record as the human-readable story text.
///
/// Sections appear in a fixed order: title, characters as `- name：description`
/// bullets, the plot in setup/conflict/resolution order, themes as bullets,
/// then the configuration path and generation type.
///
/// # Examples
///
/// ```
/// use plotweaver_core::{Character, ContentMetadata, ContentStructure, Plot};
/// use plotweaver_storage::render_text;
///
/// let mut content = ContentStructure::empty("SF", ContentMetadata::new("agent", "agent_config.yaml"));
/// content.title = "星の海".to_string();
/// content.characters.push(Character::new("主人公", "protagonist", "若き冒険者"));
/// content.plot = Plot::new("始まり", "試練", "帰還");
///
/// let text = render_text(&content);
/// assert!(text.starts_with("タイトル：星の海\n"));
/// assert!(text.contains("- 主人公：若き冒険者"));
/// assert!(text.contains("始まり\n試練\n帰還"));
/// ```
pub fn render_text(content: &ContentStructure) -> String {
    let characters = content
        .characters
        .iter()
        .map(|c| format!("- {}：{}", c.name, c.description))
        .collect::<Vec<_>>()
        .join("\n");

    let themes = content
        .themes
        .iter()
        .map(|theme| format!("- {}", theme))
        .collect::<Vec<_>>()
        .join("\n");

    let generation_type = content
        .metadata
        .generation_type
        .map(|t| t.to_string())
        .unwrap_or_default();

    format!(
        "タイトル：{}\n\n登場人物：\n{}\n\nあらすじ：\n{}\n\nテーマ：\n{}\n\nNote: 設定ファイル: {}\n生成タイプ: {}\n",
        content.title,
        characters,
        content.plot.sections().join("\n"),
        themes,
        content.metadata.config_path,
        generation_type,
    )
}
