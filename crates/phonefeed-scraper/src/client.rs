//! HTTP client for the catalog page and the product images it links to.

use std::time::Duration;

use reqwest::{Client, Response, Url};

use crate::error::ScraperError;

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const IMAGE_ACCEPT: &str = "image/avif,image/webp,image/apng,image/*,*/*;q=0.8";

/// Single-request HTTP client. Every call is one attempt: there is no retry
/// or backoff, callers decide whether a failure is fatal.
pub struct CatalogClient {
    client: Client,
    catalog_timeout: Duration,
    image_timeout: Duration,
}

impl CatalogClient {
    /// Creates a client that sends `user_agent` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        user_agent: &str,
        catalog_timeout_secs: u64,
        image_timeout_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            catalog_timeout: Duration::from_secs(catalog_timeout_secs),
            image_timeout: Duration::from_secs(image_timeout_secs),
        })
    }

    /// Fetches the catalog listing page and returns its HTML.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` does not parse.
    /// - [`ScraperError::NotFound`] on HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ScraperError::Http`] on network failure or timeout.
    pub async fn fetch_catalog(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = parse_url(url)?;
        let response = self
            .client
            .get(parsed)
            .timeout(self.catalog_timeout)
            .header(reqwest::header::ACCEPT, HTML_ACCEPT)
            .send()
            .await?;
        let response = check_status(response, url)?;
        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched catalog page");
        Ok(body)
    }

    /// Downloads an image and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CatalogClient::fetch_catalog`], bounded by the
    /// image timeout instead of the catalog timeout.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        let parsed = parse_url(url)?;
        let response = self
            .client
            .get(parsed)
            .timeout(self.image_timeout)
            .header(reqwest::header::ACCEPT, IMAGE_ACCEPT)
            .send()
            .await?;
        let response = check_status(response, url)?;
        Ok(response.bytes().await?.to_vec())
    }
}

fn parse_url(url: &str) -> Result<Url, ScraperError> {
    Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })
}

fn check_status(response: Response, url: &str) -> Result<Response, ScraperError> {
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ScraperError::NotFound {
            url: url.to_owned(),
        });
    }

    if !status.is_success() {
        return Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    Ok(response)
}
