//! Event file loading.
//!
//! An event file holds an `[event]` table (the [`EventDetails`]), a `[theme]`
//! table and an optional `[build]` table. TOML is the default format; `.json`
//! and `.yaml`/`.yml` files are accepted with the same structure.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::event::EventDetails;
use crate::theme::{Layout, Preset, TemplateKind, ThemeSettings};

/// A loaded event file with the theme fully resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventFile {
    pub event: EventDetails,
    pub theme: ThemeSettings,
    pub build: BuildSettings,
}

/// Output settings stored next to the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Output directory for archives and exported sites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Minify the generated stylesheet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,
}

/// The `[theme]` table as written by the author.
///
/// Every field is optional. Resolution order: explicit fields, then the
/// preset's palette, then [`ThemeSettings::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub template: Option<TemplateKind>,
    #[serde(default)]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub font_heading: Option<String>,
    #[serde(default)]
    pub font_body: Option<String>,
    #[serde(default)]
    pub dark_mode: Option<bool>,
    #[serde(default)]
    pub layout: Option<Layout>,
}

impl ThemeConfig {
    /// Resolve into concrete settings.
    pub fn resolve(self) -> ThemeSettings {
        let mut theme = match self.preset {
            Some(preset) => ThemeSettings::from_preset(preset),
            None => ThemeSettings::default(),
        };

        if let Some(template) = self.template {
            theme.template = template;
        }
        if let Some(color) = self.primary_color {
            theme.primary_color = color;
        }
        if let Some(color) = self.secondary_color {
            theme.secondary_color = color;
        }
        if let Some(color) = self.accent_color {
            theme.accent_color = color;
        }
        if let Some(font) = self.font_heading {
            theme.font_heading = font;
        }
        if let Some(font) = self.font_body {
            theme.font_body = font;
        }
        if let Some(dark_mode) = self.dark_mode {
            theme.dark_mode = dark_mode;
        }
        if let Some(layout) = self.layout {
            theme.layout = layout;
        }

        theme
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawEventFile {
    #[serde(default)]
    event: EventDetails,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    build: BuildSettings,
}

/// Serialization format of an event file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from a file extension, falling back to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
            "json" => FileFormat::Json,
            "yaml" | "yml" => FileFormat::Yaml,
            _ => FileFormat::Toml,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileFormat::Toml => "TOML",
            FileFormat::Json => "JSON",
            FileFormat::Yaml => "YAML",
        })
    }
}

/// Errors that can occur when loading an event file.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read event file: {0}")]
    ReadError(String),

    #[error("Invalid {format} in event file: {message}")]
    ParseError { format: FileFormat, message: String },

    #[error("Failed to serialize event file: {0}")]
    SerializeError(String),
}

/// Parse event file contents.
pub fn parse_event_file(source: &str, format: FileFormat) -> Result<EventFile, ModelError> {
    let parse_error = |message: String| ModelError::ParseError { format, message };

    let raw: RawEventFile = match format {
        FileFormat::Toml => toml::from_str(source).map_err(|e| parse_error(e.to_string()))?,
        FileFormat::Json => {
            serde_json::from_str(source).map_err(|e| parse_error(e.to_string()))?
        }
        FileFormat::Yaml => {
            serde_yaml::from_str(source).map_err(|e| parse_error(e.to_string()))?
        }
    };

    let theme = raw.theme.resolve();

    if let TemplateKind::Other(name) = &theme.template {
        tracing::warn!(
            "Unknown template '{}': expected one of wedding, corporate, birthday, conference; no template-specific styles will be applied",
            name
        );
    }

    Ok(EventFile {
        event: raw.event,
        theme,
        build: raw.build,
    })
}

/// Read and parse an event file, choosing the format from its extension.
pub fn load_event_file(path: &Path) -> Result<EventFile, ModelError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ModelError::ReadError(format!("{}: {}", path.display(), e)))?;

    let file = parse_event_file(&content, FileFormat::from_path(path))?;

    tracing::debug!(
        "Loaded event '{}' ({} template) from {}",
        file.event.title,
        file.theme.template,
        path.display()
    );

    Ok(file)
}

impl EventFile {
    /// Render as TOML, the format `eventsite init` writes.
    pub fn to_toml(&self) -> Result<String, ModelError> {
        toml::to_string_pretty(self).map_err(|e| ModelError::SerializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn parses_toml_event_file() {
        let source = r##"
[event]
title = "Summer Gala"
date = "2024-08-15"
gallery_images = ["a.jpg", "b.jpg"]
rsvp_enabled = true

[theme]
template = "birthday"
primary_color = "#123456"
dark_mode = true

[build]
output = "out"
"##;

        let file = parse_event_file(source, FileFormat::Toml).unwrap();

        assert_eq!(file.event.title, "Summer Gala");
        assert_eq!(file.event.gallery_images, vec!["a.jpg", "b.jpg"]);
        assert!(file.event.rsvp_enabled);
        assert_eq!(file.event.venue, "");
        assert_eq!(file.theme.template, TemplateKind::Birthday);
        assert_eq!(file.theme.primary_color, "#123456");
        assert!(file.theme.dark_mode);
        assert_eq!(file.build.output.as_deref(), Some("out"));
        assert_eq!(file.build.minify, None);
    }

    #[test]
    fn explicit_fields_override_preset() {
        let source = r##"
[theme]
preset = "minimal"
accent_color = "red"
"##;

        let file = parse_event_file(source, FileFormat::Toml).unwrap();

        assert_eq!(file.theme.preset, Preset::Minimal);
        assert_eq!(file.theme.primary_color, "#1A202C");
        assert_eq!(file.theme.accent_color, "red");
        assert_eq!(file.theme.layout, Layout::Minimal);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = parse_event_file("", FileFormat::Toml).unwrap();

        assert_eq!(file.event, EventDetails::default());
        assert_eq!(file.theme, ThemeSettings::default());
    }

    #[test]
    fn keeps_unknown_template() {
        let file = parse_event_file("[theme]\ntemplate = \"gala\"\n", FileFormat::Toml).unwrap();

        assert_eq!(file.theme.template, TemplateKind::Other("gala".to_string()));
    }

    #[test]
    fn parses_json_and_yaml() {
        let json = r#"{"event": {"title": "Launch"}, "theme": {"template": "corporate"}}"#;
        let file = parse_event_file(json, FileFormat::Json).unwrap();
        assert_eq!(file.event.title, "Launch");
        assert_eq!(file.theme.template, TemplateKind::Corporate);

        let yaml = "event:\n  title: Launch\ntheme:\n  template: conference\n";
        let file = parse_event_file(yaml, FileFormat::Yaml).unwrap();
        assert_eq!(file.event.title, "Launch");
        assert_eq!(file.theme.template, TemplateKind::Conference);
    }

    #[test]
    fn errors_on_invalid_toml() {
        let result = parse_event_file("[event\ntitle = 1", FileFormat::Toml);

        assert!(matches!(
            result,
            Err(ModelError::ParseError {
                format: FileFormat::Toml,
                ..
            })
        ));
    }

    #[test]
    fn errors_on_unknown_preset() {
        let result = parse_event_file("[theme]\npreset = \"neon\"\n", FileFormat::Toml);

        assert!(matches!(result, Err(ModelError::ParseError { .. })));
    }

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(FileFormat::from_path(&PathBuf::from("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(&PathBuf::from("a.yml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(&PathBuf::from("event.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(&PathBuf::from("event")), FileFormat::Toml);
    }

    #[test]
    fn toml_output_loads_back() {
        let original = EventFile {
            event: EventDetails::sample(),
            theme: ThemeSettings::default(),
            build: BuildSettings {
                output: Some("dist".to_string()),
                minify: None,
            },
        };

        let toml = original.to_toml().unwrap();
        let loaded = parse_event_file(&toml, FileFormat::Toml).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_event_file(&dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ModelError::ReadError(_))));
    }
}
