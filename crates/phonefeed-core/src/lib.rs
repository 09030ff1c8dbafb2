pub mod app_config;
pub mod config;
pub mod products;
pub mod slug;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{ProductRow, RawProduct, NO_BRAND, PRODUCT_COLUMNS};
pub use slug::{fold_diacritics, slugify};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
