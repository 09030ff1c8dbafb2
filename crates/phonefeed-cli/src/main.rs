mod pipeline;
mod sheet;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use phonefeed_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

use crate::pipeline::BuildOptions;

#[derive(Debug, Parser)]
#[command(name = "phonefeed")]
#[command(about = "Build the phone catalog spreadsheet from the Tienda Movil listing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the catalog, download images, and write the spreadsheet
    Build(BuildArgs),
    /// Check a spreadsheet against the product column contract
    Verify {
        /// Spreadsheet to check; defaults to the configured output path
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Catalog listing URL (overrides `PHONEFEED_CATALOG_URL`)
    #[arg(long)]
    catalog_url: Option<String>,
    /// Parse a saved catalog page instead of fetching it
    #[arg(long)]
    html_file: Option<PathBuf>,
    /// Spreadsheet output path (overrides `PHONEFEED_OUTPUT_PATH`)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Image output directory (overrides `PHONEFEED_IMAGES_DIR`)
    #[arg(long)]
    images_dir: Option<PathBuf>,
    /// Keep remote image URLs instead of downloading
    #[arg(long)]
    skip_images: bool,
    /// Parse and map rows without writing any files
    #[arg(long)]
    dry_run: bool,
}

impl BuildArgs {
    fn apply(self, mut config: AppConfig) -> (AppConfig, BuildOptions) {
        if let Some(url) = self.catalog_url {
            config.catalog_url = url;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(dir) = self.images_dir {
            config.images_dir = dir;
        }
        let options = BuildOptions {
            html_file: self.html_file,
            skip_images: self.skip_images,
            dry_run: self.dry_run,
        };
        (config, options)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = phonefeed_core::load_app_config();

    let level = loaded.as_ref().map_or("info", |config| config.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run(cli, loaded).await {
        tracing::error!(error = %format!("{e:#}"), "phonefeed run failed");
        return Err(e);
    }

    Ok(())
}

async fn run(cli: Cli, loaded: Result<AppConfig, ConfigError>) -> anyhow::Result<()> {
    let config = loaded.context("failed to load configuration")?;
    match cli.command {
        Some(Commands::Build(args)) => {
            let (config, options) = args.apply(config);
            pipeline::run_build(&config, &options).await?;
        }
        Some(Commands::Verify { path }) => {
            let path = path.unwrap_or(config.output_path);
            let report = sheet::verify_sheet(&path)?;
            println!(
                "{}: {} rows match the product column contract",
                path.display(),
                report.rows
            );
        }
        None => println!("phonefeed: run `phonefeed build` or `phonefeed verify` (see --help)"),
    }

    Ok(())
}
