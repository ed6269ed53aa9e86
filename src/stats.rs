//! History Statistics
//!
//! Derived figures for the history page, computed from the static history
//! aggregate.

use std::cmp::Ordering;

use crate::models::{ItemCategory, ShoppingHistory};

/// One ranked category with its share of total spend
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: ItemCategory,
    pub amount: f64,
    pub percentage: f64,
}

/// Categories ranked by spend descending, truncated to `limit`.
/// Percentage is 0 when total spend is 0.
pub fn top_categories(history: &ShoppingHistory, limit: usize) -> Vec<CategorySpend> {
    let mut ranked: Vec<(ItemCategory, f64)> = history
        .category_summary
        .iter()
        .map(|(category, amount)| (*category, *amount))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(category, amount)| CategorySpend {
            category,
            amount,
            percentage: if history.total_spent > 0.0 {
                amount / history.total_spent * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Average spend per archived list, 0 when there are no lists
pub fn average_per_list(history: &ShoppingHistory) -> f64 {
    if history.lists.is_empty() {
        0.0
    } else {
        history.total_spent / history.lists.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn history(total_spent: f64, summary: &[(ItemCategory, f64)]) -> ShoppingHistory {
        ShoppingHistory {
            lists: vec![],
            total_spent,
            category_summary: summary.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_top_categories_ranked_descending() {
        let history = history(
            100.0,
            &[
                (ItemCategory::Groceries, 50.0),
                (ItemCategory::Meat, 30.0),
                (ItemCategory::Dairy, 20.0),
            ],
        );
        let top = top_categories(&history, 5);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].category, ItemCategory::Groceries);
        assert_eq!(top[1].category, ItemCategory::Meat);
        assert_eq!(top[2].category, ItemCategory::Dairy);
        assert!((top[0].percentage - 50.0).abs() < 1e-9);
        assert!((top[2].percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_categories_truncates_to_limit() {
        let top = top_categories(&crate::data::shopping_history(), 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].category, ItemCategory::Groceries);
        assert_eq!(top[1].category, ItemCategory::Meat);
    }

    #[test]
    fn test_zero_total_yields_zero_percentages() {
        let history = history(0.0, &[(ItemCategory::Other, 0.0)]);
        let top = top_categories(&history, 5);
        assert_eq!(top[0].percentage, 0.0);
    }

    #[test]
    fn test_average_per_list_guards_zero_lists() {
        let empty = history(782.45, &[]);
        assert_eq!(average_per_list(&empty), 0.0);

        let populated = crate::data::shopping_history();
        assert!((average_per_list(&populated) - 782.45).abs() < 1e-9);
    }
}
