use std::collections::HashMap;

use catnav_core::NavItem;

/// Orders top-level categories for display and keeps the first `max_count`.
///
/// Roots named in `priority_ids` come first, in `priority_ids` order. The rest
/// follow by ascending `sort_key`; equal keys keep their incoming order.
#[must_use]
pub fn order_roots(roots: Vec<NavItem>, priority_ids: &[i64], max_count: usize) -> Vec<NavItem> {
    let mut prioritized: HashMap<i64, NavItem> = HashMap::new();
    let mut ordinary = Vec::new();

    for root in roots {
        if priority_ids.contains(&root.id) && !prioritized.contains_key(&root.id) {
            prioritized.insert(root.id, root);
        } else {
            ordinary.push(root);
        }
    }

    ordinary.sort_by(|a, b| a.sort_key.total_cmp(&b.sort_key));

    let mut ordered: Vec<NavItem> = priority_ids
        .iter()
        .filter_map(|id| prioritized.remove(id))
        .collect();
    ordered.extend(ordinary);

    if ordered.len() > max_count {
        tracing::debug!(
            kept = max_count,
            dropped = ordered.len() - max_count,
            "truncating top-level categories"
        );
        ordered.truncate(max_count);
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(id: i64, sort_key: f64) -> NavItem {
        NavItem::bare(id, format!("Cat {id}"), format!("/category/{id}"), sort_key)
    }

    fn ids(nodes: &[NavItem]) -> Vec<i64> {
        nodes.iter().map(|n| n.id).collect()
    }

    #[test]
    fn sorts_by_sort_key_without_priorities() {
        let roots = vec![root(1, 2.0), root(2, 1.0)];
        assert_eq!(ids(&order_roots(roots, &[], 6)), vec![2, 1]);
    }

    #[test]
    fn prioritized_follow_priority_list_order() {
        let roots = vec![root(1, 0.0), root(2, 0.0), root(3, 0.0), root(4, 0.0)];
        assert_eq!(ids(&order_roots(roots, &[4, 2], 6)), vec![4, 2, 1, 3]);
    }

    #[test]
    fn prioritized_precede_lower_sort_keys() {
        let roots = vec![root(1, -10.0), root(2, 100.0)];
        assert_eq!(ids(&order_roots(roots, &[2], 6)), vec![2, 1]);
    }

    #[test]
    fn missing_priority_ids_are_skipped() {
        let roots = vec![root(1, 1.0), root(2, 0.0)];
        assert_eq!(ids(&order_roots(roots, &[77, 1], 6)), vec![1, 2]);
    }

    #[test]
    fn equal_sort_keys_keep_incoming_order() {
        let roots = vec![root(5, 1.0), root(3, 1.0), root(4, 0.5)];
        assert_eq!(ids(&order_roots(roots, &[], 6)), vec![4, 5, 3]);
    }

    #[test]
    fn fractional_and_negative_keys_sort_numerically() {
        let roots = vec![root(1, 1.5), root(2, -1.0), root(3, 1.25), root(4, 10.0)];
        assert_eq!(ids(&order_roots(roots, &[], 6)), vec![2, 3, 1, 4]);
    }

    #[test]
    fn truncates_to_max_count() {
        let roots: Vec<NavItem> = (1..=9_i32)
            .map(|id| root(i64::from(id), f64::from(10 - id)))
            .collect();
        let ordered = order_roots(roots, &[1], 6);
        assert_eq!(ids(&ordered), vec![1, 9, 8, 7, 6, 5]);
    }

    #[test]
    fn truncation_can_drop_prioritized_roots() {
        let roots = vec![root(1, 0.0), root(2, 0.0), root(3, 0.0)];
        assert_eq!(ids(&order_roots(roots, &[3, 2, 1], 2)), vec![3, 2]);
    }

    #[test]
    fn duplicate_priority_ids_emit_root_once() {
        let roots = vec![root(1, 0.0), root(2, 0.0)];
        assert_eq!(ids(&order_roots(roots, &[2, 2], 6)), vec![2, 1]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(order_roots(Vec::new(), &[1, 2], 6).is_empty());
    }
}
