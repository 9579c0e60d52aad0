//! The "all products" list of a top-level category.
//!
//! The list is positional: the category's own products come first, then each
//! direct child's products in child order. It is not a popularity ranking and
//! grandchildren do not contribute.

use std::collections::HashSet;

use catnav_core::NavItem;

/// Fills `root.aggregated_products` from the root and its direct children.
///
/// Duplicates by product id keep their first occurrence; the result is capped
/// at `max_per_node`. Descendants are left untouched.
pub fn aggregate_products(root: &mut NavItem, max_per_node: usize) {
    let mut seen = HashSet::new();
    let aggregated: Vec<_> = root
        .own_products
        .iter()
        .chain(root.children.iter().flat_map(|c| c.own_products.iter()))
        .filter(|p| seen.insert(p.id))
        .take(max_per_node)
        .cloned()
        .collect();

    tracing::trace!(
        category_id = root.id,
        aggregated = aggregated.len(),
        "aggregated category products"
    );
    root.aggregated_products = aggregated;
}

/// Runs [`aggregate_products`] on every root of the forest.
pub fn aggregate_all(roots: &mut [NavItem], max_per_node: usize) {
    for root in roots {
        aggregate_products(root, max_per_node);
    }
}
