//! Application Context
//!
//! Shell state provided via Leptos Context API: active tab plus the action
//! modal dispatcher.

use leptos::prelude::*;

use crate::models::ShoppingList;
use crate::view_state::{ModalKind, ModalState, Tab};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently selected navigation tab - read
    pub active_tab: ReadSignal<Tab>,
    /// Currently selected navigation tab - write
    set_active_tab: WriteSignal<Tab>,
    /// Open action modal, if any - read
    pub modal: ReadSignal<Option<ModalState>>,
    /// Open action modal, if any - write
    set_modal: WriteSignal<Option<ModalState>>,
}

impl AppContext {
    pub fn new(
        active_tab: (ReadSignal<Tab>, WriteSignal<Tab>),
        modal: (ReadSignal<Option<ModalState>>, WriteSignal<Option<ModalState>>),
    ) -> Self {
        Self {
            active_tab: active_tab.0,
            set_active_tab: active_tab.1,
            modal: modal.0,
            set_modal: modal.1,
        }
    }

    /// Switch the main view
    pub fn select_tab(&self, tab: Tab) {
        web_sys::console::log_1(&format!("[APP] Switching to tab {:?}", tab).into());
        self.set_active_tab.set(tab);
    }

    pub fn request_create(&self) {
        self.open(ModalKind::Create, None);
    }

    pub fn request_edit(&self, list: ShoppingList) {
        self.open(ModalKind::Edit, Some(list));
    }

    pub fn request_delete(&self, list: ShoppingList) {
        self.open(ModalKind::Delete, Some(list));
    }

    pub fn request_share(&self, list: ShoppingList) {
        self.open(ModalKind::Share, Some(list));
    }

    pub fn request_archive(&self, list: ShoppingList) {
        self.open(ModalKind::Archive, Some(list));
    }

    fn open(&self, kind: ModalKind, list: Option<ShoppingList>) {
        web_sys::console::log_1(&format!("[APP] Opening {:?} modal", kind).into());
        self.set_modal.set(Some(ModalState { kind, list }));
    }

    /// Clear modal state unconditionally; cancel and confirm both land here
    pub fn close_modal(&self) {
        self.set_modal.set(None);
    }
}
