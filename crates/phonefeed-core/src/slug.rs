//! Slug and diacritic folding helpers shared by the row mapper and the image
//! downloader.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decomposes `text` (NFD) and drops combining marks, so `"Cámara"` becomes
/// `"Camara"`. Case is preserved.
#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercase, diacritic-free, hyphen-delimited identifier derived from `value`.
///
/// Every run of characters outside `[a-z0-9]` collapses to a single `-` and
/// leading/trailing hyphens are trimmed. Returns `fallback` when nothing
/// alphanumeric survives.
#[must_use]
pub fn slugify(value: &str, fallback: &str) -> String {
    let folded = fold_diacritics(&value.to_lowercase());

    let mut slug = String::with_capacity(folded.len());
    let mut pending_hyphen = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}
