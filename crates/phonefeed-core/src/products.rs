use serde::Serialize;

/// Brand name used when neither brand markup nor the title identifies one.
pub const NO_BRAND: &str = "Sin marca";

/// Spreadsheet column contract, in output order.
///
/// The downstream feed conversion reads columns by these exact names, so the
/// writer and the verifier both project rows through this list.
pub const PRODUCT_COLUMNS: [&str; 17] = [
    "id",
    "brand_id",
    "brand_name",
    "model",
    "price",
    "sale_price",
    "storage_options",
    "display_size",
    "processor",
    "ram",
    "camera",
    "battery",
    "release_year",
    "description",
    "images",
    "is_featured",
    "is_published",
];

/// One product listing as scraped from the catalog page, before dedupe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProduct {
    pub title: String,
    pub brand: String,
    /// Integer price in the source currency (guaraníes); `None` when the
    /// listing had no parseable price.
    pub price: Option<u64>,
    pub source_url: String,
    pub image_url: String,
    pub description: String,
    /// Distinct `"<n>GB"` values in first-seen order.
    pub storage_options: Vec<String>,
    pub display_size: String,
    pub battery: String,
    pub ram: String,
    pub camera: String,
}

/// A spreadsheet row. Field order matches [`PRODUCT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    /// 1-based position within a run, as a string.
    pub id: String,
    pub brand_id: String,
    pub brand_name: String,
    pub model: String,
    pub price: u64,
    pub sale_price: String,
    /// Comma-joined, e.g. `"128GB,256GB"`.
    pub storage_options: String,
    pub display_size: String,
    pub processor: String,
    pub ram: String,
    pub camera: String,
    pub battery: String,
    pub release_year: String,
    pub description: String,
    /// Remote image URL, or `/images/<namespace>/<file>` once downloaded.
    pub images: String,
    pub is_featured: bool,
    pub is_published: bool,
}

impl ProductRow {
    /// Returns `true` once the image field points at a local `/images/` path.
    #[must_use]
    pub fn has_local_image(&self) -> bool {
        self.images.starts_with("/images/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row() -> ProductRow {
        ProductRow {
            id: "1".to_string(),
            brand_id: "samsung".to_string(),
            brand_name: "Samsung".to_string(),
            model: "Galaxy A15 128GB".to_string(),
            price: 1_350_000,
            sale_price: String::new(),
            storage_options: "128GB".to_string(),
            display_size: "6.5\"".to_string(),
            processor: String::new(),
            ram: "128GB".to_string(),
            camera: String::new(),
            battery: "5000 mAh".to_string(),
            release_year: String::new(),
            description: String::new(),
            images: "https://cdn.example.com/a15.jpg".to_string(),
            is_featured: false,
            is_published: true,
        }
    }

    #[test]
    fn serialized_field_order_matches_column_contract() {
        let value = serde_json::to_value(make_row()).unwrap();
        let object = value.as_object().unwrap();
        for column in PRODUCT_COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
        assert_eq!(object.len(), PRODUCT_COLUMNS.len());
    }

    #[test]
    fn has_local_image_false_for_remote_url() {
        assert!(!make_row().has_local_image());
    }

    #[test]
    fn has_local_image_true_after_rewrite() {
        let mut row = make_row();
        row.images = "/images/phones-paraguay/samsung-galaxy-a15-128gb.jpg".to_string();
        assert!(row.has_local_image());
    }
}
