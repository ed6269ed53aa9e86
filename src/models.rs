//! Data Model
//!
//! Shopping-list entities held as in-memory fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A known user of the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Closed set of item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Groceries,
    #[serde(rename = "Fresh Products")]
    FreshProducts,
    Dairy,
    Bakery,
    Meat,
    Hygiene,
    Household,
    Other,
}

impl ItemCategory {
    /// Human label, matching the serialized form
    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Groceries => "Groceries",
            ItemCategory::FreshProducts => "Fresh Products",
            ItemCategory::Dairy => "Dairy",
            ItemCategory::Bakery => "Bakery",
            ItemCategory::Meat => "Meat",
            ItemCategory::Hygiene => "Hygiene",
            ItemCategory::Household => "Household",
            ItemCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry on a shopping list, owned by its parent list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: ItemCategory,
    pub purchased: bool,
    pub added_by: String,
    pub added_at: DateTime<Utc>,
}

/// A shopping list with its items, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<ShoppingItem>,
    pub owner_id: String,
    pub shared_with: Vec<String>,
    pub archived: bool,
    /// Cached at fixture build time; must equal `item_total()` while items
    /// stay immutable. Recompute instead of trusting this field if items
    /// ever become mutable.
    pub total_estimated_cost: f64,
}

impl ShoppingList {
    /// Sum of price x quantity over all items
    pub fn item_total(&self) -> f64 {
        item_total(&self.items)
    }

    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.purchased).count()
    }

    /// Purchased progress in percent, 0 for an empty list
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            0.0
        } else {
            self.purchased_count() as f64 / self.items.len() as f64 * 100.0
        }
    }
}

/// Sum of price x quantity over a slice of items
pub fn item_total(items: &[ShoppingItem]) -> f64 {
    items
        .iter()
        .fold(0.0, |total, item| total + item.price * item.quantity as f64)
}

/// Static history aggregate: archived lists plus precomputed spend figures.
/// An independent fixture, not derived from the live list set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingHistory {
    pub lists: Vec<ShoppingList>,
    pub total_spent: f64,
    pub category_summary: BTreeMap<ItemCategory, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_item(name: &str, quantity: u32, price: f64, purchased: bool) -> ShoppingItem {
        ShoppingItem {
            id: format!("item-{}", name),
            name: name.to_string(),
            quantity,
            price,
            category: ItemCategory::Groceries,
            purchased,
            added_by: "user-1".to_string(),
            added_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
        }
    }

    fn make_list(items: Vec<ShoppingItem>) -> ShoppingList {
        let total = item_total(&items);
        ShoppingList {
            id: "list-1".to_string(),
            name: "Weekly Groceries".to_string(),
            description: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
            items,
            owner_id: "user-1".to_string(),
            shared_with: vec![],
            archived: false,
            total_estimated_cost: total,
        }
    }

    #[test]
    fn test_item_total() {
        let list = make_list(vec![
            make_item("a", 2, 3.99, false),
            make_item("b", 1, 2.49, false),
            make_item("c", 1, 4.99, false),
        ]);
        assert!((list.item_total() - 15.46).abs() < 1e-9);
        assert!((list.total_estimated_cost - list.item_total()).abs() < 1e-9);
    }

    #[test]
    fn test_progress_empty_list() {
        let list = make_list(vec![]);
        assert_eq!(list.progress(), 0.0);
    }

    #[test]
    fn test_progress_all_purchased() {
        let list = make_list(vec![
            make_item("a", 1, 1.0, true),
            make_item("b", 1, 1.0, true),
        ]);
        assert_eq!(list.progress(), 100.0);
    }

    #[test]
    fn test_progress_partial() {
        let list = make_list(vec![
            make_item("a", 1, 1.0, true),
            make_item("b", 1, 1.0, false),
        ]);
        assert_eq!(list.progress(), 50.0);
        assert_eq!(list.purchased_count(), 1);
    }

    #[test]
    fn test_category_label_matches_serialized_form() {
        let value = serde_json::to_value(ItemCategory::FreshProducts).unwrap();
        assert_eq!(value, serde_json::json!("Fresh Products"));
        assert_eq!(ItemCategory::FreshProducts.to_string(), "Fresh Products");
    }
}
