//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! fixture data; nothing writes to it after startup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::data;
use crate::models::{ShoppingHistory, ShoppingList, User};

/// Fixture data with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The signed-in user
    pub current_user: User,
    /// All known users, for resolving shared-with ids
    pub users: Vec<User>,
    /// Active shopping lists
    pub lists: Vec<ShoppingList>,
    /// Static history aggregate
    pub history: ShoppingHistory,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_user: data::current_user(),
            users: data::users(),
            lists: data::shopping_lists(),
            history: data::shopping_history(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Resolve a list's shared-with ids against the user fixture, in fixture order
pub fn shared_users(store: &AppStore, list: &ShoppingList) -> Vec<User> {
    store
        .users()
        .read()
        .iter()
        .filter(|user| list.shared_with.contains(&user.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builds_from_fixtures() {
        let state = AppState::new();
        assert_eq!(state.current_user.id, "user-1");
        assert_eq!(state.users.len(), 3);
        assert_eq!(state.lists.len(), 3);
        assert_eq!(state.history.lists.len(), 1);
    }
}
