//! Unpacked export command.

use std::path::Path;

use anyhow::Result;
use eventsite_static::SiteBuilder;

use super::{load_event, BuildOptions, GENERATION_FAILED};

/// Run the export command.
pub async fn run(config_path: &Path, options: BuildOptions) -> Result<()> {
    let file = load_event(config_path)?;
    let config = options.resolve(&file);
    let output_dir = config.output_dir.clone();

    let builder = SiteBuilder::new(config);

    let result = match builder.export(&file.event, &file.theme, &output_dir) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Error generating website: {}", e);
            anyhow::bail!(GENERATION_FAILED);
        }
    };

    tracing::info!(
        "Wrote {} files ({} bytes) to {} in {}ms",
        result.files,
        result.bytes,
        result.path.display(),
        result.duration_ms
    );
    tracing::info!(
        "Run 'eventsite serve --dir {}' to preview it.",
        result.path.display()
    );

    Ok(())
}
