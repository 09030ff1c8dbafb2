//! Mapping from deduplicated [`RawProduct`]s to spreadsheet [`ProductRow`]s.

use std::sync::LazyLock;

use phonefeed_core::{slugify, ProductRow, RawProduct, NO_BRAND};
use regex::Regex;

static CELULAR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Celular\s+").expect("valid prefix regex"));

/// Maps products to rows, assigning ids `"1"..="N"` in input order.
#[must_use]
pub fn normalize_products(products: Vec<RawProduct>) -> Vec<ProductRow> {
    products
        .into_iter()
        .enumerate()
        .map(|(idx, product)| normalize_product(product, idx + 1))
        .collect()
}

/// Maps one product to a row with the given 1-based id.
///
/// Columns the catalog does not provide (`sale_price`, `processor`,
/// `release_year`) are left blank for manual editing.
#[must_use]
pub fn normalize_product(product: RawProduct, id: usize) -> ProductRow {
    let brand_id = slugify(&product.brand, "unknown");
    let brand_name = if product.brand.trim().is_empty() {
        NO_BRAND.to_string()
    } else {
        product.brand
    };
    let model = CELULAR_PREFIX_RE.replace(&product.title, "").into_owned();

    ProductRow {
        id: id.to_string(),
        brand_id,
        brand_name,
        model,
        price: product.price.unwrap_or(0),
        sale_price: String::new(),
        storage_options: product.storage_options.join(","),
        display_size: product.display_size,
        processor: String::new(),
        ram: product.ram,
        camera: product.camera,
        battery: product.battery,
        release_year: String::new(),
        description: product.description,
        images: product.image_url,
        is_featured: false,
        is_published: true,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
