use super::*;

fn make_raw(brand: &str, title: &str) -> RawProduct {
    RawProduct {
        title: title.to_owned(),
        brand: brand.to_owned(),
        price: Some(1_899_000),
        source_url: "https://tiendamovil.com.py/celulares/a.html".to_owned(),
        image_url: "https://cdn.tiendamovil.com.py/a.jpg".to_owned(),
        description: "Pantalla 6,6\"".to_owned(),
        storage_options: vec!["128GB".to_owned(), "256GB".to_owned()],
        display_size: "6.6\"".to_owned(),
        battery: "5000 mAh".to_owned(),
        ram: "128GB".to_owned(),
        camera: "camara 50mp.".to_owned(),
    }
}

#[test]
fn ids_are_dense_and_one_based() {
    let rows = normalize_products(vec![
        make_raw("Samsung", "Galaxy A15"),
        make_raw("Apple", "iPhone 13"),
        make_raw("Xiaomi", "Redmi 13C"),
    ]);
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn no_products_yield_no_rows() {
    assert!(normalize_products(Vec::new()).is_empty());
}

#[test]
fn brand_id_is_slugified() {
    let row = normalize_product(make_raw("Sin marca", "Teléfono"), 1);
    assert_eq!(row.brand_id, "sin-marca");
    assert_eq!(row.brand_name, "Sin marca");
}

#[test]
fn blank_brand_defaults() {
    let row = normalize_product(make_raw("  ", "Teléfono"), 1);
    assert_eq!(row.brand_id, "unknown");
    assert_eq!(row.brand_name, NO_BRAND);
}

#[test]
fn model_strips_celular_prefix() {
    let row = normalize_product(make_raw("Motorola", "Celular Motorola Moto G54"), 1);
    assert_eq!(row.model, "Motorola Moto G54");

    let row = normalize_product(make_raw("Motorola", "CELULAR  Moto G24"), 1);
    assert_eq!(row.model, "Moto G24");
}

#[test]
fn model_keeps_celular_elsewhere() {
    let row = normalize_product(make_raw("ZTE", "ZTE Blade Celular"), 1);
    assert_eq!(row.model, "ZTE Blade Celular");
}

#[test]
fn missing_price_maps_to_zero() {
    let mut raw = make_raw("Honor", "X6b");
    raw.price = None;
    assert_eq!(normalize_product(raw, 1).price, 0);
}

#[test]
fn storage_options_comma_joined() {
    let row = normalize_product(make_raw("Samsung", "Galaxy A35"), 1);
    assert_eq!(row.storage_options, "128GB,256GB");

    let mut raw = make_raw("Samsung", "Galaxy A35");
    raw.storage_options.clear();
    assert_eq!(normalize_product(raw, 1).storage_options, "");
}

#[test]
fn unmapped_columns_blank_and_flags_defaulted() {
    let row = normalize_product(make_raw("Infinix", "Hot 40i"), 7);
    assert_eq!(row.id, "7");
    assert!(row.sale_price.is_empty());
    assert!(row.processor.is_empty());
    assert!(row.release_year.is_empty());
    assert!(!row.is_featured);
    assert!(row.is_published);
    assert_eq!(row.images, "https://cdn.tiendamovil.com.py/a.jpg");
}
