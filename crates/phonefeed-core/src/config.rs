use crate::app_config::{AppConfig, DEFAULT_CATALOG_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_timeout = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(secs)
    };

    let catalog_url = or_default("PHONEFEED_CATALOG_URL", DEFAULT_CATALOG_URL);
    if catalog_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PHONEFEED_CATALOG_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let output_path = PathBuf::from(or_default(
        "PHONEFEED_OUTPUT_PATH",
        "data/products-paraguay.xlsx",
    ));
    let images_dir = PathBuf::from(or_default(
        "PHONEFEED_IMAGES_DIR",
        "public/images/phones-paraguay",
    ));
    let image_namespace = or_default("PHONEFEED_IMAGE_NAMESPACE", "phones-paraguay");
    let sheet_name = or_default("PHONEFEED_SHEET_NAME", "Paraguay");
    let catalog_timeout_secs = parse_timeout("PHONEFEED_CATALOG_TIMEOUT_SECS", "20")?;
    let image_timeout_secs = parse_timeout("PHONEFEED_IMAGE_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("PHONEFEED_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("PHONEFEED_LOG_LEVEL", "info");

    Ok(AppConfig {
        catalog_url,
        output_path,
        images_dir,
        image_namespace,
        sheet_name,
        catalog_timeout_secs,
        image_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
