use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A display-ready projection of a [`crate::ProductRow`]: the name is already
/// resolved to one language and the image key to a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPreview {
    pub id: i64,
    pub slug: String,
    pub display_name: String,
    /// `None` when the product has no media; the renderer shows a placeholder.
    pub image_url: Option<String>,
    /// `None` means "price on request". Written as a JSON number (or `null`)
    /// for the renderer; kept exact as a `Decimal` in memory.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

/// One node of the navigation forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: i64,
    pub label: String,
    pub href: String,
    /// Ordering fallback for categories that are not explicitly prioritized.
    pub sort_key: f64,
    pub children: Vec<NavItem>,
    /// Previews of the products filed directly under this category.
    pub own_products: Vec<ProductPreview>,
    /// Deduplicated, capped previews across this category and its direct
    /// children. Only filled for top-level nodes of the mega menu.
    pub aggregated_products: Vec<ProductPreview>,
}

/// What the mega-menu panel currently shows for a top-level category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSelection {
    /// The "all products" view of the whole category.
    All,
    /// A single direct child, by id.
    Child(i64),
}

impl NavItem {
    /// Creates a node with no children and no products.
    #[must_use]
    pub fn bare(id: i64, label: String, href: String, sort_key: f64) -> Self {
        Self {
            id,
            label,
            href,
            sort_key,
            children: Vec::new(),
            own_products: Vec::new(),
            aggregated_products: Vec::new(),
        }
    }

    /// Returns the direct child with the given id, if any.
    #[must_use]
    pub fn child(&self, id: i64) -> Option<&NavItem> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Returns the previews the panel should list for `selection`.
    ///
    /// An unknown child id yields an empty slice.
    #[must_use]
    pub fn panel_products(&self, selection: PanelSelection) -> &[ProductPreview] {
        match selection {
            PanelSelection::All => &self.aggregated_products,
            PanelSelection::Child(id) => match self.child(id) {
                Some(child) => &child.own_products,
                None => &[],
            },
        }
    }

    /// Number of nodes in the subtree rooted here, this node included.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(NavItem::subtree_len).sum::<usize>()
    }

    /// Returns `true` if this node or any descendant has products of its own.
    #[must_use]
    pub fn subtree_has_products(&self) -> bool {
        !self.own_products.is_empty() || self.children.iter().any(NavItem::subtree_has_products)
    }
}
