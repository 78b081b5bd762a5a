pub const NEUTRAL_LANGUAGE_COLOR: &str = "#6b7280";

/// Hex alpha appended to a language color for the tag background.
pub const TAG_BACKGROUND_ALPHA: &str = "20";

pub const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Python", "#3776ab"),
    ("JavaScript", "#f7df1e"),
    ("Dart", "#0175c2"),
    ("CSS", "#1572b6"),
    ("HTML", "#e34f26"),
];

pub fn language_color(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return NEUTRAL_LANGUAGE_COLOR;
    };
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL_LANGUAGE_COLOR)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageTag {
    pub label: String,
    pub color: &'static str,
    pub background: String,
}

impl LanguageTag {
    /// Builds a tag for a present, non-empty language label.
    pub fn for_language(language: Option<&str>) -> Option<Self> {
        let label = language?;
        if label.is_empty() {
            return None;
        }
        let color = language_color(Some(label));
        Some(Self {
            label: label.to_string(),
            color,
            background: format!("{color}{TAG_BACKGROUND_ALPHA}"),
        })
    }

    pub fn style(&self) -> String {
        format!("background-color: {}; color: {}", self.background, self.color)
    }
}
