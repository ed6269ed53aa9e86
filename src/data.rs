//! Mock Data
//!
//! Static fixtures standing in for a persisted collection. Built once at
//! startup and never mutated afterwards.

use chrono::{Duration, Utc};
use std::collections::BTreeMap;

use crate::models::{item_total, ItemCategory, ShoppingHistory, ShoppingItem, ShoppingList, User};

/// The signed-in user
pub fn current_user() -> User {
    User {
        id: "user-1".to_string(),
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        avatar: Some(
            "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=100"
                .to_string(),
        ),
    }
}

/// All known users, for sharing
pub fn users() -> Vec<User> {
    vec![
        current_user(),
        User {
            id: "user-2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            avatar: Some(
                "https://images.pexels.com/photos/3170635/pexels-photo-3170635.jpeg?auto=compress&cs=tinysrgb&w=100"
                    .to_string(),
            ),
        },
        User {
            id: "user-3".to_string(),
            name: "Robert Johnson".to_string(),
            email: "robert.johnson@example.com".to_string(),
            avatar: Some(
                "https://images.pexels.com/photos/428364/pexels-photo-428364.jpeg?auto=compress&cs=tinysrgb&w=100"
                    .to_string(),
            ),
        },
    ]
}

fn item(
    id: &str,
    name: &str,
    quantity: u32,
    price: f64,
    category: ItemCategory,
    purchased: bool,
    added_by: &str,
    days_ago: i64,
) -> ShoppingItem {
    ShoppingItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        price,
        category,
        purchased,
        added_by: added_by.to_string(),
        added_at: Utc::now() - Duration::days(days_ago),
    }
}

/// Items for a given list id
fn items_for(list_id: &str) -> Vec<ShoppingItem> {
    match list_id {
        "list-1" => vec![
            item("item-1", "Milk", 2, 3.99, ItemCategory::Dairy, false, "user-1", 1),
            item("item-2", "Bread", 1, 2.49, ItemCategory::Bakery, true, "user-1", 2),
            item("item-3", "Eggs", 12, 4.99, ItemCategory::Groceries, false, "user-2", 3),
        ],
        "list-2" => vec![
            item("item-4", "Shampoo", 1, 7.99, ItemCategory::Hygiene, false, "user-1", 1),
            item("item-5", "Toothpaste", 2, 3.49, ItemCategory::Hygiene, false, "user-1", 2),
        ],
        "list-3" => vec![
            item("item-6", "Chicken Breast", 500, 9.99, ItemCategory::Meat, false, "user-1", 1),
            item("item-7", "Rice", 1, 2.99, ItemCategory::Groceries, true, "user-3", 2),
            item("item-8", "Tomatoes", 5, 3.49, ItemCategory::FreshProducts, false, "user-1", 3),
        ],
        _ => vec![],
    }
}

fn list(
    id: &str,
    name: &str,
    description: &str,
    created_days_ago: i64,
    updated_days_ago: i64,
    shared_with: &[&str],
) -> ShoppingList {
    let items = items_for(id);
    let total = item_total(&items);
    ShoppingList {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        created_at: Utc::now() - Duration::days(created_days_ago),
        updated_at: Utc::now() - Duration::days(updated_days_ago),
        items,
        owner_id: "user-1".to_string(),
        shared_with: shared_with.iter().map(|id| id.to_string()).collect(),
        archived: false,
        total_estimated_cost: total,
    }
}

/// Active shopping lists
pub fn shopping_lists() -> Vec<ShoppingList> {
    vec![
        list("list-1", "Weekly Groceries", "Regular items for the week", 7, 1, &["user-2"]),
        list("list-2", "Bathroom Supplies", "Monthly bathroom essentials", 14, 2, &[]),
        list("list-3", "Dinner Party", "Items for Saturday's dinner party", 3, 0, &["user-2", "user-3"]),
    ]
}

/// Archived lists, kept for historical reporting only
pub fn archived_lists() -> Vec<ShoppingList> {
    vec![ShoppingList {
        id: "list-4".to_string(),
        name: "Camping Trip".to_string(),
        description: Some("Supplies for summer camping".to_string()),
        created_at: Utc::now() - Duration::days(90),
        updated_at: Utc::now() - Duration::days(85),
        items: vec![],
        owner_id: "user-1".to_string(),
        shared_with: vec!["user-3".to_string()],
        archived: true,
        total_estimated_cost: 156.75,
    }]
}

/// History aggregate. Carries its own totals, independent of the live lists.
pub fn shopping_history() -> ShoppingHistory {
    let category_summary: BTreeMap<ItemCategory, f64> = [
        (ItemCategory::Groceries, 245.65),
        (ItemCategory::FreshProducts, 123.45),
        (ItemCategory::Dairy, 89.99),
        (ItemCategory::Bakery, 56.78),
        (ItemCategory::Meat, 187.45),
        (ItemCategory::Hygiene, 45.67),
        (ItemCategory::Household, 33.46),
        (ItemCategory::Other, 0.0),
    ]
    .into_iter()
    .collect();

    ShoppingHistory {
        lists: archived_lists(),
        total_spent: 782.45,
        category_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_totals_match_item_sums() {
        for list in shopping_lists() {
            assert!(
                (list.total_estimated_cost - list.item_total()).abs() < 1e-9,
                "total for {} out of sync with items",
                list.id
            );
        }
    }

    #[test]
    fn test_weekly_groceries_total() {
        let lists = shopping_lists();
        let weekly = lists.iter().find(|l| l.id == "list-1").unwrap();
        // 3.99 x 2 + 2.49 + 4.99 x 12
        assert!((weekly.total_estimated_cost - 70.35).abs() < 1e-9);
    }

    #[test]
    fn test_active_lists_are_not_archived() {
        assert!(shopping_lists().iter().all(|l| !l.archived));
        assert!(archived_lists().iter().all(|l| l.archived));
    }

    #[test]
    fn test_history_covers_every_category() {
        let history = shopping_history();
        assert_eq!(history.category_summary.len(), 8);
        assert_eq!(history.lists.len(), 1);
        assert!(history.total_spent > 0.0);
    }
}
