//! Dashboard Query Pipeline
//!
//! Pure filtering and sorting over the list fixture, re-evaluated on every
//! keystroke.

use crate::models::ShoppingList;
use crate::view_state::{DashboardQuery, FilterKey, SortKey};

/// Apply the dashboard pipeline in fixed order: drop archived, match the
/// search term, apply the shared filter, then sort.
pub fn filter_and_sort(lists: &[ShoppingList], query: &DashboardQuery) -> Vec<ShoppingList> {
    let needle = query.search.to_lowercase();
    let mut visible: Vec<ShoppingList> = lists
        .iter()
        .filter(|list| !list.archived)
        .filter(|list| matches_search(list, &needle))
        .filter(|list| query.filter == FilterKey::All || !list.shared_with.is_empty())
        .cloned()
        .collect();

    match query.sort {
        SortKey::Name => {
            visible.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::Updated => visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
    visible
}

/// Empty needle matches everything; otherwise case-insensitive substring of
/// name or description.
fn matches_search(list: &ShoppingList, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if list.name.to_lowercase().contains(needle) {
        return true;
    }
    list.description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn make_list(
        id: &str,
        name: &str,
        description: Option<&str>,
        shared_with: &[&str],
        archived: bool,
        updated_days_ago: i64,
    ) -> ShoppingList {
        ShoppingList {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
            created_at: Utc::now() - Duration::days(updated_days_ago + 1),
            updated_at: Utc::now() - Duration::days(updated_days_ago),
            items: vec![],
            owner_id: "user-1".to_string(),
            shared_with: shared_with.iter().map(|id| id.to_string()).collect(),
            archived,
            total_estimated_cost: 0.0,
        }
    }

    fn fixture() -> Vec<ShoppingList> {
        vec![
            make_list("l1", "Weekly Groceries", Some("Regular items"), &["user-2"], false, 1),
            make_list("l2", "Bathroom Supplies", Some("Monthly essentials"), &[], false, 2),
            make_list("l3", "Dinner Party", Some("Saturday's party"), &["user-2", "user-3"], false, 0),
            make_list("l4", "Camping Trip", None, &["user-3"], true, 85),
        ]
    }

    fn ids(lists: &[ShoppingList]) -> Vec<&str> {
        lists.iter().map(|list| list.id.as_str()).collect()
    }

    #[test]
    fn test_archived_lists_never_appear() {
        let visible = filter_and_sort(&fixture(), &DashboardQuery::default());
        assert!(!ids(&visible).contains(&"l4"));
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let visible = filter_and_sort(&fixture(), &DashboardQuery::default());
        assert_eq!(ids(&visible), vec!["l3", "l1", "l2"]);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let query = DashboardQuery {
            search: "GROCER".to_string(),
            ..Default::default()
        };
        let visible = filter_and_sort(&fixture(), &query);
        assert_eq!(ids(&visible), vec!["l1"]);
    }

    #[test]
    fn test_search_matches_description() {
        let query = DashboardQuery {
            search: "monthly".to_string(),
            ..Default::default()
        };
        let visible = filter_and_sort(&fixture(), &query);
        assert_eq!(ids(&visible), vec!["l2"]);
    }

    #[test]
    fn test_search_miss_yields_empty() {
        let query = DashboardQuery {
            search: "zzz".to_string(),
            ..Default::default()
        };
        assert!(filter_and_sort(&fixture(), &query).is_empty());
    }

    #[test]
    fn test_shared_filter_restricts_then_restores() {
        let shared = DashboardQuery {
            filter: FilterKey::Shared,
            ..Default::default()
        };
        let visible = filter_and_sort(&fixture(), &shared);
        assert_eq!(ids(&visible), vec!["l3", "l1"]);

        let back = DashboardQuery {
            filter: shared.filter.toggled(),
            ..shared
        };
        assert_eq!(ids(&filter_and_sort(&fixture(), &back)), vec!["l3", "l1", "l2"]);
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let query = DashboardQuery {
            sort: SortKey::Name,
            ..Default::default()
        };
        let visible = filter_and_sort(&fixture(), &query);
        assert_eq!(ids(&visible), vec!["l2", "l3", "l1"]);
    }

    #[test]
    fn test_sort_by_date_descending() {
        let visible = filter_and_sort(&fixture(), &DashboardQuery::default());
        let updated: Vec<_> = visible.iter().map(|list| list.updated_at).collect();
        let mut expected = updated.clone();
        expected.sort();
        expected.reverse();
        assert_eq!(updated, expected);
    }

    #[test]
    fn test_sort_is_noop_for_tiny_inputs() {
        for query in [
            DashboardQuery::default(),
            DashboardQuery {
                sort: SortKey::Name,
                ..Default::default()
            },
        ] {
            assert!(filter_and_sort(&[], &query).is_empty());
            let single = vec![make_list("l1", "Solo", None, &[], false, 0)];
            assert_eq!(ids(&filter_and_sort(&single, &query)), vec!["l1"]);
        }
    }
}
