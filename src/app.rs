//! Application Shell
//!
//! Top-level component: owns the view state, provides the store and
//! context, and renders the page for the active tab.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActionModal, ComingSoon, Dashboard, HistoryPage, Navbar, Sidebar};
use crate::context::AppContext;
use crate::store::AppState;
use crate::view_state::{DashboardQuery, ModalState, Tab};

#[component]
pub fn App() -> impl IntoView {
    // View state, owned here and passed down
    let (active_tab, set_active_tab) = signal(Tab::Dashboard);
    let (modal, set_modal) = signal::<Option<ModalState>>(None);
    let (query, set_query) = signal(DashboardQuery::default());

    // Fixture data and shell context for all children
    provide_context(Store::new(AppState::new()));
    provide_context(AppContext::new((active_tab, set_active_tab), (modal, set_modal)));

    Effect::new(move |_| {
        let tab = active_tab.get();
        web_sys::console::log_1(&format!("[APP] Active tab: {:?}", tab).into());
    });

    view! {
        <div class="app-shell">
            <Navbar />

            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar />
                </aside>

                <main class="app-main">
                    {move || match active_tab.get() {
                        Tab::Dashboard => view! {
                            <Dashboard query=query set_query=set_query />
                        }
                        .into_any(),
                        Tab::History => view! { <HistoryPage /> }.into_any(),
                        _ => view! { <ComingSoon /> }.into_any(),
                    }}
                </main>
            </div>

            <ActionModal />
        </div>
    }
}
