//! Flat catalog rows as handed over by the data-fetch layer.
//!
//! Rows arrive already joined: each category carries its translations and
//! the products filed under it, and each product carries its names, media
//! and price candidates. Nothing here is nested beyond that; the category
//! hierarchy is only expressed through `parent_id`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::SnapshotError;

/// A translation-like record that can take part in language fallback.
pub trait Localized {
    fn lang_code(&self) -> &str;
    fn text(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTranslation {
    pub text: String,
    pub lang_code: String,
}

impl Localized for CategoryTranslation {
    fn lang_code(&self) -> &str {
        &self.lang_code
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductName {
    pub name: String,
    pub lang_code: String,
}

impl Localized for ProductName {
    fn lang_code(&self) -> &str {
        &self.lang_code
    }

    fn text(&self) -> &str {
        &self.name
    }
}

/// One stored image of a product. Lower `sort_order` sorts first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Either a storage key relative to the image bucket or an absolute URL.
    pub image_key: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i64,
    pub slug: String,
    #[serde(default)]
    pub localized_names: Vec<ProductName>,
    #[serde(default)]
    pub media_items: Vec<MediaItem>,
    /// Candidate prices; only the first one is authoritative.
    #[serde(default)]
    pub price_candidates: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i64,
    /// `None` for a top-level category.
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub slug: String,
    pub sort_key: f64,
    #[serde(default)]
    pub translations: Vec<CategoryTranslation>,
    /// Products filed directly under this category, in row order.
    #[serde(default)]
    pub products: Vec<ProductRow>,
}

/// The full set of category rows fetched in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub categories: Vec<CategoryRow>,
}

impl CatalogSnapshot {
    /// Parses a snapshot from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] when a required field is missing or
    /// has the wrong type, and the other variants when [`Self::validate`] fails.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the invariants serde cannot express.
    ///
    /// Structural anomalies (dangling parents, duplicate ids, cycles) are not
    /// rejected here; the tree builder degrades around them.
    ///
    /// # Errors
    ///
    /// Returns the first [`SnapshotError`] found, in row order.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for category in &self.categories {
            if category.slug.trim().is_empty() {
                return Err(SnapshotError::BlankCategorySlug {
                    category_id: category.id,
                });
            }
            if !category.sort_key.is_finite() {
                return Err(SnapshotError::NonFiniteSortKey {
                    category_id: category.id,
                });
            }
            if let Some(product) = category
                .products
                .iter()
                .find(|p| p.slug.trim().is_empty())
            {
                return Err(SnapshotError::BlankProductSlug {
                    product_id: product.id,
                    category_id: category.id,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }
}
