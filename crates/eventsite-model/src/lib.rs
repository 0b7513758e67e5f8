//! Data model for eventsite.
//!
//! Holds the two records the generator consumes ([`EventDetails`] and
//! [`ThemeSettings`]), the theme presets and starter template catalog, and the
//! loader for event files on disk.

pub mod catalog;
pub mod event;
pub mod file;
pub mod theme;

pub use catalog::{find_template, ColorOption, FontOption, TemplateInfo, COLORS, FONTS, TEMPLATES};
pub use event::EventDetails;
pub use file::{
    load_event_file, parse_event_file, BuildSettings, EventFile, FileFormat, ModelError, ThemeConfig,
};
pub use theme::{Layout, Preset, TemplateKind, ThemePreset, ThemeSettings, PRESETS};
