//! eventsite CLI - turn an event file into a static website archive.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use eventsite_model::TemplateKind;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "eventsite")]
#[command(about = "Generate a static event website and package it as a zip archive")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the event file (TOML, JSON or YAML)
    #[arg(short, long, default_value = "event.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter event file
    Init {
        /// Template category to start from
        #[arg(short, long, default_value = "wedding")]
        template: String,

        /// Overwrite an existing event file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate the site and save it as a zip archive
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the stylesheet
        #[arg(long)]
        minify: bool,

        /// Reference date for the footer year (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Generate the site as plain files in a directory
    Export {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the stylesheet
        #[arg(long)]
        minify: bool,

        /// Reference date for the footer year (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Preview an exported site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// List starter templates, presets, fonts and colours
    Templates,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { template, yes } => {
            commands::init::run(&cli.config, TemplateKind::from(template), yes).await?;
        }
        Commands::Build {
            output,
            minify,
            date,
        } => {
            let options = commands::BuildOptions::new(output, minify, date);
            commands::build::run(&cli.config, options).await?;
        }
        Commands::Export {
            output,
            minify,
            date,
        } => {
            let options = commands::BuildOptions::new(output, minify, date);
            commands::export::run(&cli.config, options).await?;
        }
        Commands::Serve { port, dir, no_open } => {
            commands::serve::run(port, dir, !no_open).await?;
        }
        Commands::Templates => {
            commands::templates::run();
        }
    }

    Ok(())
}
