//! Reduction of a raw [`ProductRow`] to a display-ready [`ProductPreview`].

use std::sync::LazyLock;

use catnav_core::{MediaItem, ProductPreview, ProductRow};
use regex::Regex;
use rust_decimal::Decimal;

use crate::locale::{resolve_text, Locale};

/// A key with an authority (`https://...`), a `data:` URI, or a leading `/`
/// is used verbatim instead of being joined to the image base URL. A bare
/// `word:` prefix is not enough, since storage keys may contain colons.
static ABSOLUTE_IMAGE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://|(?i:data):|/)")
        .expect("valid absolute image key regex")
});

/// Summarizes one product for the menu.
///
/// Missing names fall back to the slug, missing media to `image_url: None`,
/// and a missing or non-positive first price to `price: None`.
#[must_use]
pub fn summarize_product(
    product: &ProductRow,
    locale: &Locale,
    image_base_url: &str,
) -> ProductPreview {
    let display_name = resolve_text(&product.localized_names, locale, &product.slug).to_string();

    ProductPreview {
        id: product.id,
        slug: product.slug.clone(),
        display_name,
        image_url: resolve_image_url(&product.media_items, image_base_url),
        price: authoritative_price(&product.price_candidates),
    }
}

/// Returns the URL of the lowest-`sort_order` image, or `None` without media.
///
/// Items with a blank key are ignored. Ties keep the earlier item.
#[must_use]
pub fn resolve_image_url(media: &[MediaItem], image_base_url: &str) -> Option<String> {
    let key = media
        .iter()
        .filter(|m| !m.image_key.trim().is_empty())
        .min_by_key(|m| m.sort_order)?
        .image_key
        .trim();

    if ABSOLUTE_IMAGE_KEY.is_match(key) || image_base_url.is_empty() {
        return Some(key.to_string());
    }

    Some(format!("{}/{}", image_base_url.trim_end_matches('/'), key))
}

// Only the first candidate counts; zero or less means "price on request".
fn authoritative_price(candidates: &[Decimal]) -> Option<Decimal> {
    candidates.first().copied().filter(|p| *p > Decimal::ZERO)
}
