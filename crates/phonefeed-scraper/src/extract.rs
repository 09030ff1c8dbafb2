//! Catalog page extraction: HTML in, one [`RawProduct`] per listing out.
//!
//! The storefront markup is not under our control and differs between theme
//! versions, so every field is read through an ordered selector chain and the
//! first non-empty match wins.

use phonefeed_core::RawProduct;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::fields::{
    clean_text, extract_battery, extract_camera, extract_display_size, extract_ram,
    extract_storage_options, guess_brand, parse_price,
};

const PRODUCT_NODES: &str = "article.product-miniature, li.product";
const TITLE_CHAIN: &str = "h2.h3 a, h2.product-title a, h3 a, h2 a";
const BRAND_CHAIN: &str = ".product-brand, .product-cat, .manufacturer, .product-manufacturer";
const PRICE_CHAIN: &str = ".product-price-and-shipping .price, .price .amount, \
                           .woocommerce-Price-amount, .product-price";
const LINK_CHAIN: &str = "a.product-thumbnail, a.thumbnail, a.product-img-link, h2 a, h3 a";
const DESCRIPTION_CHAIN: &str = ".product-description, .product-short-description, \
                                 .product-desc, .product-description-short";

struct ListingSelectors {
    product: Selector,
    title: Vec<Selector>,
    brand: Vec<Selector>,
    price: Vec<Selector>,
    link: Vec<Selector>,
    image: Selector,
    description: Vec<Selector>,
}

impl ListingSelectors {
    fn new() -> Self {
        Self {
            product: parse_selector(PRODUCT_NODES),
            title: parse_chain(TITLE_CHAIN),
            brand: parse_chain(BRAND_CHAIN),
            price: parse_chain(PRICE_CHAIN),
            link: parse_chain(LINK_CHAIN),
            image: parse_selector("img"),
            description: parse_chain(DESCRIPTION_CHAIN),
        }
    }
}

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Splits a comma-separated selector list into individually ordered
/// candidates, so precedence follows the list rather than document order.
fn parse_chain(chain: &str) -> Vec<Selector> {
    chain.split(',').map(|css| parse_selector(css.trim())).collect()
}

/// Extracts every product listing from a catalog page.
///
/// Nodes without a title are skipped. When `base_url` is given, relative
/// product and image links are resolved against it.
#[must_use]
pub fn parse_catalog_html(html: &str, base_url: Option<&Url>) -> Vec<RawProduct> {
    let document = Html::parse_document(html);
    let selectors = ListingSelectors::new();

    let products: Vec<RawProduct> = document
        .select(&selectors.product)
        .filter_map(|node| parse_listing(node, &selectors, base_url))
        .collect();

    tracing::debug!(count = products.len(), "parsed catalog listings");
    products
}

fn parse_listing(
    node: ElementRef<'_>,
    selectors: &ListingSelectors,
    base_url: Option<&Url>,
) -> Option<RawProduct> {
    let title = first_text(node, &selectors.title);
    if title.is_empty() {
        return None;
    }

    let brand_text = first_text(node, &selectors.brand);
    let brand = if brand_text.is_empty() {
        guess_brand(&title)
    } else {
        brand_text
    };

    let price = parse_price(&first_text(node, &selectors.price));
    let source_url = resolve_url(base_url, &first_attr(node, &selectors.link, "href"));
    let image_url = resolve_url(base_url, &image_source(node, &selectors.image));
    let description = first_text(node, &selectors.description);

    let combined = format!("{title}. {description}");

    Some(RawProduct {
        storage_options: extract_storage_options(&combined),
        display_size: extract_display_size(&combined),
        battery: extract_battery(&combined),
        ram: extract_ram(&combined),
        camera: extract_camera(&combined),
        title,
        brand,
        price,
        source_url,
        image_url,
        description,
    })
}

fn first_text(node: ElementRef<'_>, chain: &[Selector]) -> String {
    chain
        .iter()
        .flat_map(|selector| node.select(selector))
        .map(|el| clean_text(&el.text().collect::<String>()))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn first_attr(node: ElementRef<'_>, chain: &[Selector], attr: &str) -> String {
    chain
        .iter()
        .flat_map(|selector| node.select(selector))
        .filter_map(|el| el.value().attr(attr))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Lazy-loading themes put the real URL in `data-src` and a placeholder in
/// `src`.
fn image_source(node: ElementRef<'_>, img: &Selector) -> String {
    let Some(el) = node.select(img).next() else {
        return String::new();
    };
    ["data-src", "src"]
        .iter()
        .filter_map(|attr| el.value().attr(attr))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn resolve_url(base_url: Option<&Url>, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    base_url
        .and_then(|base| base.join(raw).ok())
        .map_or_else(|| raw.to_string(), |url| url.to_string())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
