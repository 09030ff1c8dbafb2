//! The `build` command: fetch, extract, dedupe, map, download images, write.
//!
//! Every stage runs once, in order, on the current task. Only the catalog
//! fetch and the spreadsheet write can abort the run; image failures are
//! counted and logged.

use std::path::{Path, PathBuf};

use anyhow::Context;
use phonefeed_core::{AppConfig, ProductRow};
use phonefeed_scraper::{
    dedupe_products, download_images, normalize_products, parse_catalog_html, CatalogClient,
    ImageTotals,
};
use url::Url;

use crate::sheet;

#[derive(Debug, Default, Clone)]
pub(crate) struct BuildOptions {
    /// Read the catalog from this file instead of fetching `catalog_url`.
    pub html_file: Option<PathBuf>,
    pub skip_images: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BuildSummary {
    pub raw_count: usize,
    pub rows: Vec<ProductRow>,
    /// `None` when downloads were skipped or the run was a dry run.
    pub images: Option<ImageTotals>,
    pub written: bool,
}

/// Runs the full build pipeline for `config`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched or read, the images
/// directory cannot be created, or the spreadsheet cannot be written.
pub(crate) async fn run_build(
    config: &AppConfig,
    options: &BuildOptions,
) -> anyhow::Result<BuildSummary> {
    let client = CatalogClient::new(
        &config.user_agent,
        config.catalog_timeout_secs,
        config.image_timeout_secs,
    )?;

    let html = load_catalog_html(&client, config, options.html_file.as_deref()).await?;
    let base_url = Url::parse(&config.catalog_url).ok();

    let raw = parse_catalog_html(&html, base_url.as_ref());
    let raw_count = raw.len();
    let mut rows = normalize_products(dedupe_products(raw));
    tracing::info!(
        raw = raw_count,
        unique = rows.len(),
        "parsed catalog listings"
    );

    if options.dry_run {
        for row in &rows {
            tracing::info!(
                id = %row.id,
                brand = %row.brand_name,
                model = %row.model,
                price = row.price,
                "would write row"
            );
        }
        tracing::info!(
            path = %config.output_path.display(),
            count = rows.len(),
            "dry run: nothing written"
        );
        return Ok(BuildSummary {
            raw_count,
            rows,
            images: None,
            written: false,
        });
    }

    let images = if options.skip_images {
        tracing::info!("skipping image downloads");
        None
    } else {
        let totals = download_images(&client, &mut rows, config).await?;
        tracing::info!(
            downloaded = totals.downloaded,
            failed = totals.failed,
            skipped = totals.skipped,
            dir = %config.images_dir.display(),
            "image downloads finished"
        );
        Some(totals)
    };

    sheet::write_rows(&rows, &config.output_path, &config.sheet_name)?;
    tracing::info!(
        path = %config.output_path.display(),
        count = rows.len(),
        local_images = rows.iter().filter(|r| r.has_local_image()).count(),
        "wrote product spreadsheet"
    );

    Ok(BuildSummary {
        raw_count,
        rows,
        images,
        written: true,
    })
}

async fn load_catalog_html(
    client: &CatalogClient,
    config: &AppConfig,
    html_file: Option<&Path>,
) -> anyhow::Result<String> {
    if let Some(path) = html_file {
        tracing::info!(path = %path.display(), "reading catalog from file");
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog file {}", path.display()));
    }

    tracing::info!(url = %config.catalog_url, "fetching catalog");
    client
        .fetch_catalog(&config.catalog_url)
        .await
        .with_context(|| format!("failed to fetch catalog from {}", config.catalog_url))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
