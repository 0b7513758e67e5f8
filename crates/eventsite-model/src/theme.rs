//! Theme settings, template kinds and colour/font presets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual theme of the generated site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Template category; selects the stylesheet variant
    pub template: TemplateKind,

    /// Preset the colours and fonts came from (not read by generation)
    pub preset: Preset,

    /// Primary CSS colour
    pub primary_color: String,

    /// Secondary CSS colour
    pub secondary_color: String,

    /// Accent CSS colour
    pub accent_color: String,

    /// Heading font family name
    pub font_heading: String,

    /// Body font family name
    pub font_body: String,

    /// Dark colour scheme
    pub dark_mode: bool,

    /// Layout hint for the authoring preview (not read by generation)
    pub layout: Layout,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            template: TemplateKind::Wedding,
            preset: Preset::Elegant,
            primary_color: "#7C3AED".to_string(),
            secondary_color: "#0D9488".to_string(),
            accent_color: "#EC4899".to_string(),
            font_heading: "Montserrat".to_string(),
            font_body: "Inter".to_string(),
            dark_mode: false,
            layout: Layout::Classic,
        }
    }
}

impl ThemeSettings {
    /// Default settings with the colours, fonts and layout of `preset`.
    ///
    /// [`Preset::Custom`] has no palette of its own and leaves the defaults.
    pub fn from_preset(preset: Preset) -> Self {
        let mut theme = Self {
            preset,
            ..Self::default()
        };
        if let Some(palette) = ThemePreset::for_preset(preset) {
            palette.apply(&mut theme);
        }
        theme
    }
}

/// Template category of the event.
///
/// Names outside the four known categories are kept as [`TemplateKind::Other`]
/// so they survive a round trip; they get no variant styles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateKind {
    Wedding,
    Corporate,
    Birthday,
    Conference,
    Other(String),
}

impl TemplateKind {
    /// The four categories with dedicated styles.
    pub fn known() -> [TemplateKind; 4] {
        [
            TemplateKind::Wedding,
            TemplateKind::Corporate,
            TemplateKind::Birthday,
            TemplateKind::Conference,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            TemplateKind::Wedding => "wedding",
            TemplateKind::Corporate => "corporate",
            TemplateKind::Birthday => "birthday",
            TemplateKind::Conference => "conference",
            TemplateKind::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TemplateKind::Other(_))
    }
}

impl From<&str> for TemplateKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "wedding" => TemplateKind::Wedding,
            "corporate" => TemplateKind::Corporate,
            "birthday" => TemplateKind::Birthday,
            "conference" => TemplateKind::Conference,
            _ => TemplateKind::Other(value.to_string()),
        }
    }
}

impl From<String> for TemplateKind {
    fn from(value: String) -> Self {
        TemplateKind::from(value.as_str())
    }
}

impl From<TemplateKind> for String {
    fn from(kind: TemplateKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Named colour/font grouping picked in the theme step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Elegant,
    Minimal,
    Vibrant,
    Custom,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Elegant => "elegant",
            Preset::Minimal => "minimal",
            Preset::Vibrant => "vibrant",
            Preset::Custom => "custom",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Layout hint carried for the authoring preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Classic => "classic",
            Layout::Modern => "modern",
            Layout::Minimal => "minimal",
        }
    }
}

/// Colours, fonts and layout bundled under a preset name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub preset: Preset,
    pub name: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub font_heading: &'static str,
    pub font_body: &'static str,
    pub layout: Layout,
}

/// Built-in presets. `custom` has no entry.
pub static PRESETS: [ThemePreset; 3] = [
    ThemePreset {
        preset: Preset::Elegant,
        name: "Elegant",
        primary_color: "#2D3748",
        secondary_color: "#718096",
        accent_color: "#9F7AEA",
        font_heading: "Playfair Display",
        font_body: "Inter",
        layout: Layout::Classic,
    },
    ThemePreset {
        preset: Preset::Minimal,
        name: "Minimal",
        primary_color: "#1A202C",
        secondary_color: "#4A5568",
        accent_color: "#667EEA",
        font_heading: "Montserrat",
        font_body: "Inter",
        layout: Layout::Minimal,
    },
    ThemePreset {
        preset: Preset::Vibrant,
        name: "Vibrant",
        primary_color: "#7C3AED",
        secondary_color: "#0D9488",
        accent_color: "#EC4899",
        font_heading: "Montserrat",
        font_body: "Inter",
        layout: Layout::Modern,
    },
];

impl ThemePreset {
    /// Look up the palette for a preset.
    pub fn for_preset(preset: Preset) -> Option<&'static ThemePreset> {
        PRESETS.iter().find(|p| p.preset == preset)
    }

    /// Overwrite the colours, fonts and layout of `theme` with this preset's.
    pub fn apply(&self, theme: &mut ThemeSettings) {
        theme.preset = self.preset;
        theme.primary_color = self.primary_color.to_string();
        theme.secondary_color = self.secondary_color.to_string();
        theme.accent_color = self.accent_color.to_string();
        theme.font_heading = self.font_heading.to_string();
        theme.font_body = self.font_body.to_string();
        theme.layout = self.layout;
    }
}
