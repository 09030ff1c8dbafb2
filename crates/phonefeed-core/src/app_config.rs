use std::path::PathBuf;

pub const DEFAULT_CATALOG_URL: &str =
    "https://tiendamovil.com.py/shop/celulares/?order=product.date_add.desc&resultsPerPage=9999999";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listing page scraped for products.
    pub catalog_url: String,
    /// Spreadsheet written at the end of a build run.
    pub output_path: PathBuf,
    /// Directory that downloaded images are written into.
    pub images_dir: PathBuf,
    /// Path segment used in `/images/<namespace>/<file>` references.
    pub image_namespace: String,
    pub sheet_name: String,
    pub catalog_timeout_secs: u64,
    pub image_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl AppConfig {
    /// Public reference for a downloaded image file, as the storefront serves it.
    #[must_use]
    pub fn image_reference(&self, filename: &str) -> String {
        format!("/images/{}/{filename}", self.image_namespace.trim_matches('/'))
    }
}
