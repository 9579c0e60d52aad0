//! Linking of flat category rows into a parent/child forest.
//!
//! The rows are trusted to describe a rooted hierarchy but are not required
//! to. Anomalies are handled without failing the build:
//!
//! - a duplicate category id keeps its first row and drops the rest
//! - a parent id that names no category promotes the row to the top level
//! - categories whose parent chain loops back on itself are dropped, and
//!   their remaining children are promoted like any other orphan
//! - categories nested below `max_depth` are dropped together with their
//!   subtree, so assembling and walking the result stays bounded
//!
//! Parent overrides from the navigation config are applied before linking,
//! so an override can both rescue and create each of these cases.

use std::collections::{HashMap, HashSet};

use catnav_core::{CategoryRow, NavConfig, NavItem, ParentOverride};

use crate::locale::{resolve_text, Locale};

/// Builds the category forest without any products attached.
///
/// Roots come back in source row order; children keep source row order
/// under their parent.
#[must_use]
pub fn build_category_tree(
    categories: &[CategoryRow],
    locale: &Locale,
    config: &NavConfig,
) -> Vec<NavItem> {
    link_categories(
        categories,
        &config.parent_overrides,
        config.max_depth,
        |row| bare_node(row, locale, config),
    )
}

pub(crate) fn bare_node(row: &CategoryRow, locale: &Locale, config: &NavConfig) -> NavItem {
    NavItem::bare(
        row.id,
        resolve_text(&row.translations, locale, &row.slug).to_string(),
        config.category_href(&row.slug),
        row.sort_key,
    )
}

/// Links rows into a forest, creating each surviving node with `make_node`.
///
/// `make_node` is called once per surviving row, in row order.
pub(crate) fn link_categories<F>(
    categories: &[CategoryRow],
    overrides: &[ParentOverride],
    max_depth: usize,
    mut make_node: F,
) -> Vec<NavItem>
where
    F: FnMut(&CategoryRow) -> NavItem,
{
    let rows = dedup_rows(categories);
    let moved: HashMap<i64, i64> = overrides
        .iter()
        .map(|o| (o.move_id, o.new_parent_id))
        .collect();

    let parents: HashMap<i64, Option<i64>> = rows
        .iter()
        .map(|row| {
            let parent = match moved.get(&row.id) {
                Some(&new_parent) => {
                    tracing::debug!(
                        category_id = row.id,
                        stored_parent = ?row.parent_id,
                        new_parent,
                        "applying parent override"
                    );
                    Some(new_parent)
                }
                None => row.parent_id,
            };
            (row.id, parent)
        })
        .collect();

    let order: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let cyclic = find_cyclic(&order, &parents);
    for &id in order.iter().filter(|id| cyclic.contains(id)) {
        tracing::warn!(category_id = id, "dropping category caught in a parent cycle");
    }

    let mut root_ids = Vec::new();
    let mut children_of: HashMap<i64, Vec<i64>> = HashMap::new();

    for &row in rows.iter().filter(|row| !cyclic.contains(&row.id)) {
        let parent = parents.get(&row.id).copied().flatten();
        match parent {
            Some(p) if parents.contains_key(&p) && !cyclic.contains(&p) => {
                children_of.entry(p).or_default().push(row.id);
            }
            Some(p) => {
                tracing::debug!(
                    category_id = row.id,
                    missing_parent = p,
                    "promoting orphan category to top level"
                );
                root_ids.push(row.id);
            }
            None => root_ids.push(row.id),
        }
    }

    let too_deep = find_too_deep(&root_ids, &children_of, max_depth);

    let mut nodes: HashMap<i64, NavItem> = HashMap::new();
    for &row in rows
        .iter()
        .filter(|row| !cyclic.contains(&row.id) && !too_deep.contains(&row.id))
    {
        nodes.insert(row.id, make_node(row));
    }

    root_ids
        .iter()
        .filter_map(|&id| assemble(id, &mut nodes, &children_of))
        .collect()
}

/// Keeps the first row for every category id.
fn dedup_rows(categories: &[CategoryRow]) -> Vec<&CategoryRow> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .filter(|row| {
            let first = seen.insert(row.id);
            if !first {
                tracing::warn!(
                    category_id = row.id,
                    slug = %row.slug,
                    "dropping duplicate category row"
                );
            }
            first
        })
        .collect()
}

/// Returns the ids that sit on a parent cycle.
///
/// Each id is visited once: a walk up the parent chain stops at the top, at a
/// parent that is not a known category, at an id classified by an earlier
/// walk, or when it meets its own path again. Only the looping tail of that
/// path is cyclic; anything before it merely hangs off the cycle.
fn find_cyclic(order: &[i64], parents: &HashMap<i64, Option<i64>>) -> HashSet<i64> {
    let mut classified: HashMap<i64, bool> = HashMap::new();

    for &start in order {
        if classified.contains_key(&start) {
            continue;
        }

        let mut path: Vec<i64> = Vec::new();
        let mut position: HashMap<i64, usize> = HashMap::new();
        let mut loop_start = None;
        let mut current = Some(start);

        while let Some(id) = current {
            if classified.contains_key(&id) {
                break;
            }
            if let Some(&pos) = position.get(&id) {
                loop_start = Some(pos);
                break;
            }
            position.insert(id, path.len());
            path.push(id);
            current = parents
                .get(&id)
                .copied()
                .flatten()
                .filter(|p| parents.contains_key(p));
        }

        let split = loop_start.unwrap_or(path.len());
        for (idx, id) in path.into_iter().enumerate() {
            classified.insert(id, idx >= split);
        }
    }

    classified
        .into_iter()
        .filter_map(|(id, is_cyclic)| is_cyclic.then_some(id))
        .collect()
}

/// Returns the ids nested deeper than `max_depth`, counting roots as depth 1.
///
/// Walks with an explicit stack so arbitrarily long chains cannot exhaust
/// the call stack.
fn find_too_deep(
    root_ids: &[i64],
    children_of: &HashMap<i64, Vec<i64>>,
    max_depth: usize,
) -> HashSet<i64> {
    let mut too_deep = HashSet::new();
    let mut stack: Vec<(i64, usize)> = root_ids.iter().map(|&id| (id, 1)).collect();

    while let Some((id, depth)) = stack.pop() {
        if depth > max_depth {
            if depth == max_depth + 1 {
                tracing::warn!(
                    category_id = id,
                    max_depth,
                    "dropping category subtree nested below the depth limit"
                );
            }
            too_deep.insert(id);
        }
        if let Some(child_ids) = children_of.get(&id) {
            stack.extend(child_ids.iter().map(|&child| (child, depth + 1)));
        }
    }

    too_deep
}

fn assemble(
    id: i64,
    nodes: &mut HashMap<i64, NavItem>,
    children_of: &HashMap<i64, Vec<i64>>,
) -> Option<NavItem> {
    let mut node = nodes.remove(&id)?;
    if let Some(child_ids) = children_of.get(&id) {
        node.children = child_ids
            .iter()
            .filter_map(|&child| assemble(child, nodes, children_of))
            .collect();
    }
    Some(node)
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
