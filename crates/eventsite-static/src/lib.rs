//! Static site generator for eventsite.
//!
//! Turns an [`EventDetails`](eventsite_model::EventDetails) and
//! [`ThemeSettings`](eventsite_model::ThemeSettings) pair into a three-file
//! website (`index.html`, `styles.css`, `script.js`) and packs it into a zip
//! archive.

pub mod archive;
pub mod assets;
pub mod builder;
pub mod format;
pub mod templates;

pub use archive::{pack_archive, ArchiveError, ARCHIVE_ENTRIES};
pub use assets::{render_css, render_js, AssetPipeline};
pub use builder::{build_archive, BuildConfig, BuildError, BuildResult, SiteBuilder, SiteFiles};
pub use format::archive_file_name;
pub use templates::{render_html, PageContext, RenderError, TemplateEngine};
