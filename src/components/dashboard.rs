//! Dashboard Page Component
//!
//! Search, filter, and sort controls over the active lists, feeding the
//! card grid. The pipeline re-runs on every keystroke.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::icons;
use crate::components::{Button, ShoppingListGrid};
use crate::context::AppContext;
use crate::query::filter_and_sort;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_state::DashboardQuery;

#[component]
pub fn Dashboard(
    query: ReadSignal<DashboardQuery>,
    set_query: WriteSignal<DashboardQuery>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let visible = Memo::new(move |_| filter_and_sort(&store.lists().get(), &query.get()));

    view! {
        <div class="dashboard">
            <div class="page-header">
                <h1>"My Shopping Lists"</h1>
                <p>"Manage your shopping lists and track your expenses"</p>
            </div>

            <div class="dashboard-toolbar">
                <div class="dashboard-search">
                    <span class="search-icon">{icons::search(20)}</span>
                    <input
                        type="text"
                        placeholder="Search lists..."
                        prop:value=move || query.get().search
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_query.update(|query| query.search = value);
                        }
                    />
                </div>

                <div class="dashboard-controls">
                    <div class="toggle-group">
                        <button
                            type="button"
                            class="toggle-btn"
                            on:click=move |_| set_query.update(|query| {
                                query.filter = query.filter.toggled();
                            })
                        >
                            {icons::filter(16)}
                            {move || query.get().filter.label()}
                        </button>
                        <button
                            type="button"
                            class="toggle-btn"
                            on:click=move |_| set_query.update(|query| {
                                query.sort = query.sort.toggled();
                            })
                        >
                            {icons::sort_desc(16)}
                            {move || format!("Sort: {}", query.get().sort.label())}
                        </button>
                    </div>

                    <Button on_press=Callback::new(move |_| ctx.request_create())>
                        {icons::list_plus(18)}
                        "Create List"
                    </Button>
                </div>
            </div>

            <div class="dashboard-panel">
                <ShoppingListGrid lists=visible />
            </div>
        </div>
    }
}
