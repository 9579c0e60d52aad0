use catnav_core::{CatalogSnapshot, NavConfig, NavItem};

use crate::aggregate::aggregate_all;
use crate::error::NavError;
use crate::locale::Locale;
use crate::ordering::order_roots;
use crate::summarize::summarize_product;
use crate::tree::{bare_node, link_categories};

/// Which navigation surface the tree is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavVariant {
    /// Category tree with product previews and per-root aggregation.
    #[default]
    MegaMenu,
    /// Category tree only; every product list is left empty.
    NavBar,
}

/// Builds the ordered navigation forest for one snapshot.
///
/// The snapshot is validated first; everything after that degrades instead of
/// failing (see [`crate::tree`]).
///
/// # Errors
///
/// Returns [`NavError::Snapshot`] if the snapshot fails validation.
pub fn build_navigation(
    snapshot: &CatalogSnapshot,
    locale: &Locale,
    config: &NavConfig,
    variant: NavVariant,
) -> Result<Vec<NavItem>, NavError> {
    snapshot.validate()?;

    let mut roots = match variant {
        NavVariant::MegaMenu => link_categories(
            &snapshot.categories,
            &config.parent_overrides,
            config.max_depth,
            |row| {
                let mut node = bare_node(row, locale, config);
                node.own_products = row
                    .products
                    .iter()
                    .map(|p| summarize_product(p, locale, &config.image_base_url))
                    .collect();
                node
            },
        ),
        NavVariant::NavBar => link_categories(
            &snapshot.categories,
            &config.parent_overrides,
            config.max_depth,
            |row| bare_node(row, locale, config),
        ),
    };

    if variant == NavVariant::MegaMenu {
        aggregate_all(&mut roots, config.max_preview_per_node);
    }

    let linked_roots = roots.len();
    let ordered = order_roots(roots, &config.priority_ids, config.max_top_level);

    tracing::debug!(
        ?variant,
        target_lang = locale.target(),
        categories = snapshot.categories.len(),
        products = snapshot.product_count(),
        linked_roots,
        emitted_roots = ordered.len(),
        "built navigation tree"
    );

    Ok(ordered)
}
