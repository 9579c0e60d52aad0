use catnav_core::CategoryTranslation;

use super::*;

fn cat(id: i64, parent_id: Option<i64>, sort_key: f64) -> CategoryRow {
    CategoryRow {
        id,
        parent_id,
        slug: format!("cat-{id}"),
        sort_key,
        translations: vec![],
        products: vec![],
    }
}

fn no_overrides() -> NavConfig {
    NavConfig {
        parent_overrides: vec![],
        ..NavConfig::default()
    }
}

fn locale() -> Locale {
    Locale::new("en", "tr").unwrap()
}

fn ids(nodes: &[NavItem]) -> Vec<i64> {
    nodes.iter().map(|n| n.id).collect()
}

fn find(nodes: &[NavItem], id: i64) -> Option<&NavItem> {
    nodes.iter().find_map(|n| {
        if n.id == id {
            Some(n)
        } else {
            find(&n.children, id)
        }
    })
}

// -----------------------------------------------------------------------
// linking
// -----------------------------------------------------------------------

#[test]
fn links_children_under_parents_in_row_order() {
    let rows = vec![
        cat(1, None, 2.0),
        cat(2, None, 1.0),
        cat(3, Some(1), 0.0),
        cat(4, Some(1), 0.0),
    ];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![1, 2]);
    assert_eq!(ids(&roots[0].children), vec![3, 4]);
    assert!(roots[1].children.is_empty());
}

#[test]
fn child_listed_before_parent_is_still_linked() {
    let rows = vec![cat(3, Some(1), 0.0), cat(1, None, 0.0)];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![1]);
    assert_eq!(ids(&roots[0].children), vec![3]);
}

#[test]
fn builds_deeper_levels() {
    let rows = vec![cat(1, None, 0.0), cat(2, Some(1), 0.0), cat(3, Some(2), 0.0)];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].children[0].children[0].id, 3);
    assert_eq!(roots[0].subtree_len(), 3);
}

#[test]
fn resolves_label_and_href() {
    let mut row = cat(1, None, 0.0);
    row.slug = "business-cards".to_string();
    row.translations = vec![
        CategoryTranslation {
            text: "Kartvizit".to_string(),
            lang_code: "tr".to_string(),
        },
        CategoryTranslation {
            text: "Business Cards".to_string(),
            lang_code: "en".to_string(),
        },
    ];
    let roots = build_category_tree(&[row], &locale(), &no_overrides());
    assert_eq!(roots[0].label, "Business Cards");
    assert_eq!(roots[0].href, "/category/business-cards");
    assert!(roots[0].own_products.is_empty());
    assert!(roots[0].aggregated_products.is_empty());
}

#[test]
fn label_defaults_to_slug_without_translations() {
    let roots = build_category_tree(&[cat(9, None, 0.0)], &locale(), &no_overrides());
    assert_eq!(roots[0].label, "cat-9");
}

#[test]
fn empty_input_yields_empty_forest() {
    assert!(build_category_tree(&[], &locale(), &NavConfig::default()).is_empty());
}

// -----------------------------------------------------------------------
// orphans and overrides
// -----------------------------------------------------------------------

#[test]
fn orphan_is_promoted_to_root() {
    let rows = vec![cat(1, None, 0.0), cat(5, Some(999), 0.0)];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![1, 5]);
}

#[test]
fn default_override_rehomes_category() {
    let rows = vec![
        cat(3, None, 0.0),
        cat(10, None, 0.0),
        cat(27, Some(10), 0.0),
    ];
    let roots = build_category_tree(&rows, &locale(), &NavConfig::default());
    assert_eq!(ids(&roots), vec![3, 10]);
    assert_eq!(ids(&roots[0].children), vec![27]);
    assert!(roots[1].children.is_empty());
}

#[test]
fn override_also_applies_to_stored_roots() {
    let rows = vec![cat(3, None, 0.0), cat(27, None, 0.0)];
    let roots = build_category_tree(&rows, &locale(), &NavConfig::default());
    assert_eq!(ids(&roots), vec![3]);
    assert_eq!(ids(&roots[0].children), vec![27]);
}

#[test]
fn override_to_missing_parent_promotes_to_root() {
    let rows = vec![cat(10, None, 0.0), cat(27, Some(10), 0.0)];
    let roots = build_category_tree(&rows, &locale(), &NavConfig::default());
    assert_eq!(ids(&roots), vec![10, 27]);
}

#[test]
fn override_for_absent_category_is_ignored() {
    let rows = vec![cat(1, None, 0.0), cat(2, Some(1), 0.0)];
    let roots = build_category_tree(&rows, &locale(), &NavConfig::default());
    assert_eq!(ids(&roots), vec![1]);
    assert_eq!(ids(&roots[0].children), vec![2]);
}

// -----------------------------------------------------------------------
// malformed input
// -----------------------------------------------------------------------

#[test]
fn duplicate_category_keeps_first_row() {
    let mut dupe = cat(1, None, 0.0);
    dupe.slug = "second".to_string();
    let rows = vec![cat(1, None, 0.0), dupe, cat(2, Some(1), 0.0)];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![1]);
    assert_eq!(roots[0].label, "cat-1");
    assert_eq!(ids(&roots[0].children), vec![2]);
}

#[test]
fn self_parent_is_dropped() {
    let rows = vec![cat(1, None, 0.0), cat(2, Some(2), 0.0)];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![1]);
    assert!(find(&roots, 2).is_none());
}

#[test]
fn two_node_cycle_is_dropped_and_descendants_promoted() {
    let rows = vec![
        cat(1, Some(2), 0.0),
        cat(2, Some(1), 0.0),
        cat(3, Some(1), 0.0),
        cat(4, Some(3), 0.0),
        cat(5, None, 0.0),
    ];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![3, 5]);
    assert_eq!(ids(&roots[0].children), vec![4]);
    assert!(find(&roots, 1).is_none());
    assert!(find(&roots, 2).is_none());
}

#[test]
fn chain_leading_into_cycle_keeps_its_own_links() {
    // 6 -> 5 -> 4 -> (3 <-> 2)
    let rows = vec![
        cat(6, Some(5), 0.0),
        cat(5, Some(4), 0.0),
        cat(4, Some(3), 0.0),
        cat(3, Some(2), 0.0),
        cat(2, Some(3), 0.0),
    ];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![4]);
    assert_eq!(ids(&roots[0].children), vec![5]);
    assert_eq!(ids(&roots[0].children[0].children), vec![6]);
}

#[test]
fn override_that_creates_cycle_fails_closed() {
    let config = NavConfig {
        parent_overrides: vec![ParentOverride {
            move_id: 1,
            new_parent_id: 2,
        }],
        ..NavConfig::default()
    };
    let rows = vec![cat(1, None, 0.0), cat(2, Some(1), 0.0), cat(3, Some(2), 0.0)];
    let roots = build_category_tree(&rows, &locale(), &config);
    assert_eq!(ids(&roots), vec![3]);
}

#[test]
fn no_node_appears_twice() {
    let rows = vec![
        cat(1, None, 0.0),
        cat(2, Some(1), 0.0),
        cat(2, Some(1), 0.0),
        cat(3, Some(3), 0.0),
        cat(4, Some(2), 0.0),
        cat(5, Some(404), 0.0),
    ];
    let roots = build_category_tree(&rows, &locale(), &no_overrides());

    fn collect(nodes: &[NavItem], out: &mut Vec<i64>) {
        for n in nodes {
            out.push(n.id);
            collect(&n.children, out);
        }
    }
    let mut all = Vec::new();
    collect(&roots, &mut all);
    let mut deduped = all.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(all.len(), deduped.len());
    assert_eq!(deduped, vec![1, 2, 4, 5]);
}

#[test]
fn make_node_runs_once_per_surviving_row() {
    let rows = vec![
        cat(1, None, 0.0),
        cat(1, None, 0.0),
        cat(2, Some(2), 0.0),
        cat(3, Some(1), 0.0),
    ];
    let mut calls = Vec::new();
    let roots = link_categories(&rows, &[], 32, |row| {
        calls.push(row.id);
        NavItem::bare(row.id, String::new(), String::new(), row.sort_key)
    });
    assert_eq!(calls, vec![1, 3]);
    assert_eq!(ids(&roots), vec![1]);
}

// -----------------------------------------------------------------------
// depth limit
// -----------------------------------------------------------------------

/// A single chain `0 <- 1 <- ... <- len - 1`.
fn chain(len: i64) -> Vec<CategoryRow> {
    (0..len)
        .map(|id| cat(id, (id > 0).then_some(id - 1), 0.0))
        .collect()
}

fn depth(node: &NavItem) -> usize {
    let mut depth = 1;
    let mut current = node;
    while let Some(child) = current.children.first() {
        depth += 1;
        current = child;
    }
    depth
}

#[test]
fn very_long_chain_is_cut_at_max_depth() {
    let config = no_overrides();
    let roots = build_category_tree(&chain(5_000), &locale(), &config);
    assert_eq!(ids(&roots), vec![0]);
    assert_eq!(depth(&roots[0]), config.max_depth);
    assert_eq!(roots[0].subtree_len(), config.max_depth);
}

#[test]
fn very_long_chain_listed_leaf_first_is_cut_the_same_way() {
    let mut rows = chain(5_000);
    rows.reverse();
    let roots = build_category_tree(&rows, &locale(), &no_overrides());
    assert_eq!(ids(&roots), vec![0]);
    assert_eq!(roots[0].subtree_len(), 32);
}

#[test]
fn depth_limit_drops_whole_subtree_but_keeps_siblings() {
    let config = NavConfig {
        max_depth: 2,
        ..no_overrides()
    };
    // 1 -> 2 -> 3 -> 4, and 1 -> 5
    let rows = vec![
        cat(1, None, 0.0),
        cat(2, Some(1), 0.0),
        cat(3, Some(2), 0.0),
        cat(4, Some(3), 0.0),
        cat(5, Some(1), 0.0),
    ];
    let roots = build_category_tree(&rows, &locale(), &config);
    assert_eq!(ids(&roots), vec![1]);
    assert_eq!(ids(&roots[0].children), vec![2, 5]);
    assert!(roots[0].children[0].children.is_empty());
    assert!(find(&roots, 3).is_none());
    assert!(find(&roots, 4).is_none());
}

#[test]
fn depth_counts_from_promoted_orphans() {
    let config = NavConfig {
        max_depth: 2,
        ..no_overrides()
    };
    let rows = vec![
        cat(7, Some(404), 0.0),
        cat(8, Some(7), 0.0),
        cat(9, Some(8), 0.0),
    ];
    let roots = build_category_tree(&rows, &locale(), &config);
    assert_eq!(ids(&roots), vec![7]);
    assert_eq!(ids(&roots[0].children), vec![8]);
    assert!(roots[0].children[0].children.is_empty());
}

#[test]
fn make_node_skips_rows_below_depth_limit() {
    let mut calls = Vec::new();
    let roots = link_categories(&chain(4), &[], 2, |row| {
        calls.push(row.id);
        NavItem::bare(row.id, String::new(), String::new(), row.sort_key)
    });
    assert_eq!(calls, vec![0, 1]);
    assert_eq!(roots[0].subtree_len(), 2);
}
