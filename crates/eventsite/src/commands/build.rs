//! Archive build command.

use std::path::Path;

use anyhow::Result;
use eventsite_static::SiteBuilder;

use super::{load_event, BuildOptions, GENERATION_FAILED};

/// Run the build command.
pub async fn run(config_path: &Path, options: BuildOptions) -> Result<()> {
    tracing::info!("Generating website...");

    let file = load_event(config_path)?;
    let config = options.resolve(&file);

    let builder = SiteBuilder::new(config);

    let result = match builder.write_archive(&file.event, &file.theme).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Error generating website: {}", e);
            anyhow::bail!(GENERATION_FAILED);
        }
    };

    tracing::info!(
        "Packed {} files ({} bytes) in {}ms",
        result.files,
        result.bytes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.path.display());

    Ok(())
}
