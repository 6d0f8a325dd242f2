//! Deterministic template-based story construction.

use plotweaver_core::{Character, ContentMetadata, ContentStructure, Plot, PlotTemplate};
use std::collections::HashMap;
use tracing::debug;

/// Built-in setup used when the template bank has none.
pub const DEFAULT_SETUP: &str =
    "平和な世界で暮らしていた主人公は、ある日突然、不思議な出来事に巻き込まれます。";

/// Built-in conflict used when the template bank has none.
pub const DEFAULT_CONFLICT: &str = "{genre}の要素を活かしながら、仲間たちと共に冒険を繰り広げ、ライバルとの対立や困難な課題に直面します。";

/// Built-in resolution used when the template bank has none.
pub const DEFAULT_RESOLUTION: &str = "知恵と勇気で困難を乗り越え、真の目的を達成します。";

/// Built-in cast as `(name, role, description)`.
pub const DEFAULT_CHARACTERS: [(&str, &str, &str); 3] = [
    ("主人公", "protagonist", "若き冒険者"),
    ("賢者", "support", "主人公を導く賢者"),
    ("仮面の人物", "antagonist", "謎めいたライバル"),
];

/// Built-in themes.
pub const DEFAULT_THEMES: [&str; 3] = ["友情の大切さ", "成長の物語", "正義と真実の追求"];

const DEFAULT_BANK_KEY: &str = "default";

/// Builds a complete story from an agent's template bank.
///
/// The bank entry is chosen by exact genre, then the `"default"` entry.
/// Each plot field missing from the chosen entry (or all three, when no
/// entry matches) takes the built-in text. `{genre}` is substituted in every
/// plot field afterwards.
///
/// # Examples
///
/// ```
/// use plotweaver_core::{ContentMetadata, PlotTemplate};
/// use plotweaver_narrative::FallbackStrategy;
/// use std::collections::HashMap;
///
/// let mut bank = HashMap::new();
/// bank.insert("default".to_string(), PlotTemplate::new("日常", "{genre}の謎", "解決"));
///
/// let content = FallbackStrategy::new(&bank)
///     .build("ミステリー", ContentMetadata::new("agent", "agent_config.yaml"));
///
/// assert_eq!(content.plot.conflict, "ミステリーの謎");
/// assert_eq!(content.title, "ミステリーの不思議な冒険（テンプレート）");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FallbackStrategy<'a> {
    template_bank: &'a HashMap<String, PlotTemplate>,
}

impl<'a> FallbackStrategy<'a> {
    /// Create a strategy over a template bank.
    pub fn new(template_bank: &'a HashMap<String, PlotTemplate>) -> Self {
        Self { template_bank }
    }

    /// Plot for `genre` with `{genre}` substituted.
    pub fn plot(&self, genre: &str) -> Plot {
        let entry = self
            .template_bank
            .get(genre)
            .or_else(|| self.template_bank.get(DEFAULT_BANK_KEY));

        let matched = match entry {
            Some(_) if self.template_bank.contains_key(genre) => "genre",
            Some(_) => DEFAULT_BANK_KEY,
            None => "builtin",
        };
        debug!(genre, matched, "Selected plot template");

        let field = |value: Option<&String>, builtin: &str| {
            value
                .map(String::as_str)
                .unwrap_or(builtin)
                .replace("{genre}", genre)
        };

        Plot::new(
            field(entry.and_then(|t| t.setup.as_ref()), DEFAULT_SETUP),
            field(entry.and_then(|t| t.conflict.as_ref()), DEFAULT_CONFLICT),
            field(entry.and_then(|t| t.resolution.as_ref()), DEFAULT_RESOLUTION),
        )
    }

    /// Complete story for `genre`.
    pub fn build(&self, genre: &str, metadata: ContentMetadata) -> ContentStructure {
        let mut content = ContentStructure::empty(genre, metadata);
        content.title = format!("{}の不思議な冒険（テンプレート）", genre);
        content.characters = DEFAULT_CHARACTERS
            .iter()
            .map(|(name, role, description)| Character::new(*name, *role, *description))
            .collect();
        content.plot = self.plot(genre);
        content.themes = DEFAULT_THEMES.iter().map(|t| t.to_string()).collect();
        content
    }
}
