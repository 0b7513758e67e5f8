//! Site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;

use eventsite_model::{EventDetails, ThemeSettings};

use crate::archive::{pack_archive, ARCHIVE_ENTRIES};
use crate::assets::{render_css, render_js, AssetPipeline};
use crate::format::archive_file_name;
use crate::templates::render_html;

/// Configuration for building an event site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory for archives and exported files
    pub output_dir: PathBuf,

    /// Minify the stylesheet
    pub minify: bool,

    /// Reference date for the footer year
    pub today: NaiveDate,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: false,
            today: chrono::Local::now().date_naive(),
        }
    }
}

/// Result of writing a site to disk.
#[derive(Debug)]
pub struct BuildResult {
    /// Path of the archive or export directory
    pub path: PathBuf,

    /// Number of site files written
    pub files: usize,

    /// Total bytes written
    pub bytes: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render page: {0}")]
    RenderError(String),

    #[error("Failed to create archive: {0}")]
    ArchiveError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// The three generated files of a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFiles {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl SiteFiles {
    /// File names paired with their contents, in archive order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (ARCHIVE_ENTRIES[0], self.html.as_str()),
            (ARCHIVE_ENTRIES[1], self.css.as_str()),
            (ARCHIVE_ENTRIES[2], self.js.as_str()),
        ]
    }

    /// Combined size of the three files.
    pub fn total_bytes(&self) -> usize {
        self.html.len() + self.css.len() + self.js.len()
    }
}

/// Event site builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run the three renderers.
    pub fn render(
        &self,
        details: &EventDetails,
        theme: &ThemeSettings,
    ) -> Result<SiteFiles, BuildError> {
        let html = render_html(details, theme, self.config.today)
            .map_err(|e| BuildError::RenderError(e.to_string()))?;

        let css = render_css(theme);
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Skipping CSS minification: {}", e);
                    css
                }
            }
        } else {
            css
        };

        let js = render_js();

        Ok(SiteFiles { html, css, js })
    }

    /// Render the site and pack it into zip archive bytes.
    ///
    /// Encoding runs on the blocking pool. Either the whole archive is
    /// produced or an error is returned.
    pub async fn build_archive(
        &self,
        details: &EventDetails,
        theme: &ThemeSettings,
    ) -> Result<Vec<u8>, BuildError> {
        let files = self.render(details, theme)?;

        let bytes = tokio::task::spawn_blocking(move || pack_archive(files.entries()))
            .await
            .map_err(|e| BuildError::ArchiveError(e.to_string()))?
            .map_err(|e| BuildError::ArchiveError(e.to_string()))?;

        Ok(bytes)
    }

    /// Build the archive and save it in the output directory.
    ///
    /// The file is named after the event title (see [`archive_file_name`]).
    pub async fn write_archive(
        &self,
        details: &EventDetails,
        theme: &ThemeSettings,
    ) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let bytes = self.build_archive(details, theme).await?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let path = self.config.output_dir.join(archive_file_name(&details.title));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;

        Ok(BuildResult {
            path,
            files: ARCHIVE_ENTRIES.len(),
            bytes: bytes.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Write the three files unpacked into `dir`.
    pub fn export(
        &self,
        details: &EventDetails,
        theme: &ThemeSettings,
        dir: &Path,
    ) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let files = self.render(details, theme)?;

        fs::create_dir_all(dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        for (name, content) in files.entries() {
            let path = dir.join(name);
            fs::write(&path, content)
                .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))?;
            tracing::debug!("Wrote {}", path.display());
        }

        Ok(BuildResult {
            path: dir.to_path_buf(),
            files: ARCHIVE_ENTRIES.len(),
            bytes: files.total_bytes(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Render an event site and pack it into zip archive bytes, using today's
/// date and no minification.
pub async fn build_archive(
    details: &EventDetails,
    theme: &ThemeSettings,
) -> Result<Vec<u8>, BuildError> {
    SiteBuilder::new(BuildConfig::default())
        .build_archive(details, theme)
        .await
}
