//! Create a starter event file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eventsite_model::{
    find_template, BuildSettings, EventDetails, EventFile, TemplateKind, ThemeSettings,
};

/// Run the init command.
pub async fn run(config_path: &Path, template: TemplateKind, yes: bool) -> Result<()> {
    tracing::info!("Initializing eventsite...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let file = starter_event(&template)?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config_path, file.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {} from the {} template", config_path.display(), template);
    tracing::info!("Edit it, then run 'eventsite build' to generate your website.");

    Ok(())
}

/// Sample event seeded from the starter template for `template`.
pub fn starter_event(template: &TemplateKind) -> Result<EventFile> {
    let Some(info) = find_template(template) else {
        anyhow::bail!(
            "Unknown template '{}'. Choose one of: {}",
            template,
            TemplateKind::known().map(|k| k.to_string()).join(", ")
        );
    };

    let event = EventDetails {
        description: info.sample_description.to_string(),
        banner_image: info.thumbnail(),
        ..EventDetails::sample()
    };

    let theme = ThemeSettings {
        template: info.kind.clone(),
        ..ThemeSettings::default()
    };

    Ok(EventFile {
        event,
        theme,
        build: BuildSettings {
            output: Some("dist".to_string()),
            minify: None,
        },
    })
}
