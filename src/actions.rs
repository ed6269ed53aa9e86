//! Action Dispatch Boundary
//!
//! Defines the abstract interface for list mutations.
//! Implementations can target a real backend, local storage, etc.

use crate::models::ShoppingList;
use crate::view_state::{ModalKind, ModalState};

/// Capability set over the shopping-list collection
pub trait ListActions {
    /// Create a new list
    fn create_list(&self);

    /// Edit an existing list
    fn edit_list(&self, list: &ShoppingList);

    /// Delete a list by id
    fn delete_list(&self, list_id: &str);

    /// Share a list with its shared-with set
    fn share_list(&self, list: &ShoppingList);

    /// Move a list to the archives
    fn archive_list(&self, list_id: &str);
}

/// Placeholder implementation: confirming a modal is acknowledged in the UI
/// but applies nothing to the fixture data. Swap this out once lists live
/// somewhere mutable.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderActions;

impl ListActions for PlaceholderActions {
    fn create_list(&self) {}

    fn edit_list(&self, _list: &ShoppingList) {}

    fn delete_list(&self, _list_id: &str) {}

    fn share_list(&self, _list: &ShoppingList) {}

    fn archive_list(&self, _list_id: &str) {}
}

/// Route a confirmed modal to the matching capability
pub fn dispatch(actions: &impl ListActions, modal: &ModalState) {
    match (modal.kind, &modal.list) {
        (ModalKind::Create, _) => actions.create_list(),
        (ModalKind::Edit, Some(list)) => actions.edit_list(list),
        (ModalKind::Delete, Some(list)) => actions.delete_list(&list.id),
        (ModalKind::Share, Some(list)) => actions.share_list(list),
        (ModalKind::Archive, Some(list)) => actions.archive_list(&list.id),
        // An action modal without a selected list has nothing to apply
        (_, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_confirming_every_modal_leaves_fixtures_untouched() {
        let lists = data::shopping_lists();
        let before = lists.clone();
        let actions = PlaceholderActions;

        for kind in [
            ModalKind::Create,
            ModalKind::Edit,
            ModalKind::Delete,
            ModalKind::Share,
            ModalKind::Archive,
        ] {
            let modal = ModalState {
                kind,
                list: lists.first().cloned(),
            };
            dispatch(&actions, &modal);
        }

        assert_eq!(lists, before);
    }
}
