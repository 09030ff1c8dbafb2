//! Free-text field extraction for catalog listings.
//!
//! Every parser is total: a listing that does not mention a field yields an
//! empty value (or `None` for the price), never an error.

use std::sync::LazyLock;

use phonefeed_core::{fold_diacritics, NO_BRAND};
use regex::Regex;

static STORAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*GB").expect("valid storage regex"));
static DISPLAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([0-9]{1,2}(?:\.[0-9])?)\s*""#).expect("valid display regex"));
static BATTERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]{3,5})\s*mAh").expect("valid battery regex"));
static RAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*GB\s*(?:RAM)?").expect("valid ram regex"));

/// Brand names matched against listing titles, in priority order.
const KNOWN_BRANDS: [&str; 13] = [
    "Apple", "iPhone", "Samsung", "Xiaomi", "Motorola", "Oppo", "OPPO", "Honor", "HONOR", "Tecno",
    "TECNO", "ZTE", "Infinix",
];

/// Collapses all whitespace runs to single spaces and trims the ends.
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a listing price into an integer amount.
///
/// Assumes Paraguayan formatting: `.` groups thousands and `,` starts a
/// decimal part that is dropped. `"Gs. 1.234.567"` parses to `1234567`.
/// Returns `None` when the text contains no digits.
#[must_use]
pub fn parse_price(text: &str) -> Option<u64> {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_digit() || c == '.' || c == ',' {
                c
            } else {
                ' '
            }
        })
        .collect();

    // "Gs." leaves a bare "." token ahead of the amount.
    let token = cleaned
        .split_whitespace()
        .find(|t| t.chars().any(|c| c.is_ascii_digit()))?;

    let integer_part = token.split(',').next().unwrap_or(token);
    let digits: String = integer_part.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().ok()
}

/// Guesses the brand from a listing title by case-insensitive substring
/// match. `iPhone` maps to `Apple`; no match yields [`NO_BRAND`].
#[must_use]
pub fn guess_brand(title: &str) -> String {
    let lower = title.to_lowercase();
    KNOWN_BRANDS
        .iter()
        .find(|brand| lower.contains(&brand.to_lowercase()))
        .map_or_else(
            || NO_BRAND.to_string(),
            |brand| {
                if brand.eq_ignore_ascii_case("iphone") {
                    "Apple".to_string()
                } else {
                    (*brand).to_string()
                }
            },
        )
}

/// All distinct `"<n>GB"` mentions in first-seen order.
#[must_use]
pub fn extract_storage_options(text: &str) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for caps in STORAGE_RE.captures_iter(text) {
        let option = format!("{}GB", &caps[1]);
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}

/// First screen size in inches, e.g. `6,7"` becomes `6.7"`.
#[must_use]
pub fn extract_display_size(text: &str) -> String {
    let normalized = text.replace(',', ".");
    DISPLAY_RE
        .captures(&normalized)
        .map(|caps| format!("{}\"", &caps[1]))
        .unwrap_or_default()
}

/// First battery capacity, rendered as `"<n> mAh"`.
#[must_use]
pub fn extract_battery(text: &str) -> String {
    BATTERY_RE
        .captures(text)
        .map(|caps| format!("{} mAh", &caps[1]))
        .unwrap_or_default()
}

/// First `<n>GB` mention, optionally followed by `RAM`.
#[must_use]
pub fn extract_ram(text: &str) -> String {
    RAM_RE
        .captures(text)
        .map(|caps| format!("{}GB", &caps[1]))
        .unwrap_or_default()
}

/// Camera blurb: from the first `camara` (accent-insensitive) through the
/// next sentence terminator, lowercased. Accents in the blurb are kept.
#[must_use]
pub fn extract_camera(text: &str) -> String {
    let lower = text.to_lowercase();

    // Folded byte offset -> byte offset in `lower`.
    let mut folded = String::with_capacity(lower.len());
    let mut origin: Vec<usize> = Vec::with_capacity(lower.len());
    let mut buf = [0u8; 4];
    for (idx, ch) in lower.char_indices() {
        let piece = fold_diacritics(ch.encode_utf8(&mut buf));
        origin.resize(origin.len() + piece.len(), idx);
        folded.push_str(&piece);
    }

    let Some(start) = folded.find("camara").map(|at| origin[at]) else {
        return String::new();
    };
    let tail = &lower[start..];
    match tail.find(&['.', '!', '\n'][..]) {
        Some(end) => tail[..=end].trim().to_string(),
        None => tail.trim().to_string(),
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
