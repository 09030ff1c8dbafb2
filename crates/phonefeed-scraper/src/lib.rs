pub mod client;
pub mod dedupe;
pub mod error;
pub mod extract;
pub mod fields;
pub mod images;
pub mod normalize;

pub use client::CatalogClient;
pub use dedupe::dedupe_products;
pub use error::ScraperError;
pub use extract::parse_catalog_html;
pub use images::{download_images, image_filename, ImageTotals};
pub use normalize::normalize_products;
