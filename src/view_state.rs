//! View State
//!
//! Serializable UI state owned by the top-level shell and passed down.
//! No ambient globals; components receive these via props or `AppContext`.

use serde::{Deserialize, Serialize};

use crate::models::ShoppingList;

/// Navigation tabs. Dashboard and History have real pages; the rest show a
/// placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Dashboard,
    ActiveLists,
    History,
    Archived,
    Statistics,
    Settings,
    Help,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::ActiveLists => "Active Lists",
            Tab::History => "History",
            Tab::Archived => "Archived",
            Tab::Statistics => "Statistics",
            Tab::Settings => "Settings",
            Tab::Help => "Help & Support",
        }
    }
}

/// The five stubbed list actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalKind {
    Create,
    Edit,
    Delete,
    Share,
    Archive,
}

/// Open modal plus the list the action was requested on (none for create)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalState {
    pub kind: ModalKind,
    pub list: Option<ShoppingList>,
}

impl ModalState {
    pub fn title(&self) -> &'static str {
        match self.kind {
            ModalKind::Create => "Create New Shopping List",
            ModalKind::Edit => "Edit Shopping List",
            ModalKind::Delete => "Delete Shopping List",
            ModalKind::Share => "Share Shopping List",
            ModalKind::Archive => "Archive Shopping List",
        }
    }

    pub fn body(&self) -> String {
        let name = self
            .list
            .as_ref()
            .map(|list| list.name.as_str())
            .unwrap_or("this list");
        match self.kind {
            ModalKind::Create => {
                "Here you would create a new shopping list with a form.".to_string()
            }
            ModalKind::Edit => format!("You would edit \"{}\" here.", name),
            ModalKind::Delete => "Are you sure you want to delete this list?".to_string(),
            ModalKind::Share => format!("Share \"{}\" with friends or family.", name),
            ModalKind::Archive => "This list will be moved to your archives.".to_string(),
        }
    }
}

/// Sort key for the dashboard, a two-state cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    /// Most recently updated first
    #[default]
    Updated,
}

impl SortKey {
    pub fn toggled(self) -> Self {
        match self {
            SortKey::Name => SortKey::Updated,
            SortKey::Updated => SortKey::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Updated => "Latest",
        }
    }
}

/// Shared-only filter for the dashboard, a two-state cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    #[default]
    All,
    Shared,
}

impl FilterKey {
    pub fn toggled(self) -> Self {
        match self {
            FilterKey::All => FilterKey::Shared,
            FilterKey::Shared => FilterKey::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKey::All => "All Lists",
            FilterKey::Shared => "Shared Only",
        }
    }
}

/// Dashboard query state: free-text search plus the two toggles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub search: String,
    pub sort: SortKey,
    pub filter: FilterKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids_are_kebab_case() {
        let value = serde_json::to_value(Tab::ActiveLists).unwrap();
        assert_eq!(value, serde_json::json!("active-lists"));
    }

    #[test]
    fn test_toggles_cycle_between_two_states() {
        assert_eq!(SortKey::Updated.toggled(), SortKey::Name);
        assert_eq!(SortKey::Updated.toggled().toggled(), SortKey::Updated);
        assert_eq!(FilterKey::All.toggled(), FilterKey::Shared);
        assert_eq!(FilterKey::All.toggled().toggled(), FilterKey::All);
    }

    #[test]
    fn test_modal_copy_mentions_selected_list() {
        let list = crate::data::shopping_lists().remove(0);
        let modal = ModalState {
            kind: ModalKind::Edit,
            list: Some(list),
        };
        assert_eq!(modal.title(), "Edit Shopping List");
        assert_eq!(modal.body(), "You would edit \"Weekly Groceries\" here.");

        let create = ModalState {
            kind: ModalKind::Create,
            list: None,
        };
        assert_eq!(create.title(), "Create New Shopping List");
    }

    #[test]
    fn test_query_state_is_serializable() {
        let query = DashboardQuery {
            search: "gro".to_string(),
            sort: SortKey::Name,
            filter: FilterKey::Shared,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"search": "gro", "sort": "name", "filter": "shared"})
        );
    }
}
