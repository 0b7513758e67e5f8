//! CLI subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use eventsite_model::{load_event_file, EventFile};
use eventsite_static::BuildConfig;

pub mod build;
pub mod export;
pub mod init;
pub mod serve;
pub mod templates;

/// Message shown when generation fails; details go to the log.
pub const GENERATION_FAILED: &str =
    "There was an error generating your website. Please try again.";

/// Build flags shared by `build` and `export`.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub output: Option<PathBuf>,
    /// Only `Some(true)` when the flag was passed, so the file setting applies otherwise
    pub minify: Option<bool>,
    pub date: Option<NaiveDate>,
}

impl BuildOptions {
    pub fn new(output: Option<PathBuf>, minify: bool, date: Option<NaiveDate>) -> Self {
        Self {
            output,
            minify: minify.then_some(true),
            date,
        }
    }

    /// Merge flags over the event file's `[build]` table.
    pub fn resolve(&self, file: &EventFile) -> BuildConfig {
        let defaults = BuildConfig::default();

        BuildConfig {
            output_dir: self
                .output
                .clone()
                .or_else(|| file.build.output.as_ref().map(PathBuf::from))
                .unwrap_or(defaults.output_dir),
            minify: self.minify.or(file.build.minify).unwrap_or(defaults.minify),
            today: self.date.unwrap_or(defaults.today),
        }
    }
}

/// Load the event file, with the path in any error.
pub fn load_event(path: &Path) -> Result<EventFile> {
    let file = load_event_file(path).with_context(|| {
        format!(
            "Failed to load {}. Run 'eventsite init' to create one.",
            path.display()
        )
    })?;

    tracing::info!("Loaded event '{}' from {}", file.event.title, path.display());

    Ok(file)
}
