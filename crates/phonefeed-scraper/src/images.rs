//! Best-effort image download for product rows.
//!
//! Each row's remote image is saved under the configured images directory and
//! the row is repointed at the local `/images/<namespace>/<file>` reference.
//! A failed download only costs that row its local copy; the run continues.

use std::path::Path;

use phonefeed_core::{slugify, AppConfig, ProductRow};
use url::Url;

use crate::client::CatalogClient;
use crate::error::ScraperError;

const DEFAULT_EXTENSION: &str = ".jpg";

/// Per-run download counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageTotals {
    pub downloaded: usize,
    pub failed: usize,
    /// Rows with no image URL at all.
    pub skipped: usize,
}

/// Local filename for a row's image: `slug(brand-model)` plus the URL's
/// extension, or `.jpg` when the URL path has none.
///
/// Deterministic, so reruns overwrite the same files.
#[must_use]
pub fn image_filename(row: &ProductRow, image_url: &str) -> String {
    let base = slugify(&format!("{}-{}", row.brand_name, row.model), "item");
    format!("{base}{}", image_extension(image_url))
}

fn image_extension(image_url: &str) -> String {
    let without_query = image_url.split('?').next().unwrap_or(image_url);
    let path = Url::parse(without_query)
        .map_or_else(|_| without_query.to_string(), |url| url.path().to_string());
    let file_name = path.rsplit('/').next().unwrap_or_default();

    match file_name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < file_name.len() => file_name[dot..].to_string(),
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Downloads every row's image in order, one request at a time.
///
/// # Errors
///
/// Returns [`ScraperError::Io`] only if the images directory cannot be
/// created. Per-image failures are logged and counted in
/// [`ImageTotals::failed`].
pub async fn download_images(
    client: &CatalogClient,
    rows: &mut [ProductRow],
    config: &AppConfig,
) -> Result<ImageTotals, ScraperError> {
    tokio::fs::create_dir_all(&config.images_dir)
        .await
        .map_err(|source| ScraperError::Io {
            path: config.images_dir.display().to_string(),
            source,
        })?;

    let mut totals = ImageTotals::default();

    for row in rows.iter_mut() {
        let image_url = row.images.trim().to_string();
        if image_url.is_empty() {
            totals.skipped += 1;
            continue;
        }

        let filename = image_filename(row, &image_url);
        let local_path = config.images_dir.join(&filename);

        tracing::info!(url = %image_url, path = %local_path.display(), "downloading image");
        match save_image(client, &image_url, &local_path).await {
            Ok(()) => {
                row.images = config.image_reference(&filename);
                totals.downloaded += 1;
            }
            Err(e) => {
                tracing::warn!(
                    row_id = %row.id,
                    url = %image_url,
                    error = %e,
                    "failed to download image; keeping remote URL"
                );
                totals.failed += 1;
            }
        }
    }

    Ok(totals)
}

async fn save_image(
    client: &CatalogClient,
    image_url: &str,
    local_path: &Path,
) -> Result<(), ScraperError> {
    let bytes = client.fetch_image(image_url).await?;
    tokio::fs::write(local_path, bytes)
        .await
        .map_err(|source| ScraperError::Io {
            path: local_path.display().to_string(),
            source,
        })
}
