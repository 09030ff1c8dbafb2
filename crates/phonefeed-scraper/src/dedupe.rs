use std::collections::HashSet;

use phonefeed_core::{slugify, RawProduct};

/// Case-folded identity of a listing: slugified brand plus raw title.
#[must_use]
pub fn dedupe_key(product: &RawProduct) -> String {
    format!("{}|{}", slugify(&product.brand, "unknown"), product.title).to_lowercase()
}

/// Drops repeat listings of the same (brand, title), keeping the first one
/// seen. Input order is preserved for the survivors.
#[must_use]
pub fn dedupe_products(products: Vec<RawProduct>) -> Vec<RawProduct> {
    let mut seen = HashSet::new();
    products
        .into_iter()
        .filter(|product| seen.insert(dedupe_key(product)))
        .collect()
}
