//! Sidebar Component
//!
//! Tab navigation with a bottom section and the external mobile-app link.

use leptos::prelude::*;

use crate::components::icons;
use crate::context::AppContext;
use crate::view_state::Tab;

const MAIN_TABS: &[Tab] = &[
    Tab::Dashboard,
    Tab::ActiveLists,
    Tab::History,
    Tab::Archived,
    Tab::Statistics,
];

const BOTTOM_TABS: &[Tab] = &[Tab::Settings, Tab::Help];

const MOBILE_APP_URL: &str = "https://shoppinlistapp.netlify.app/";

fn tab_icon(tab: Tab) -> AnyView {
    match tab {
        Tab::Dashboard => icons::layout_dashboard(20),
        Tab::ActiveLists => icons::list_checks(20),
        Tab::History => icons::clock(20),
        Tab::Archived => icons::archive(20),
        Tab::Statistics => icons::bar_chart(20),
        Tab::Settings => icons::settings(20),
        Tab::Help => icons::help_circle(20),
    }
}

#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let is_active = move || ctx.active_tab.get() == tab;

    view! {
        <button
            class=move || if is_active() { "sidebar-tab active" } else { "sidebar-tab" }
            on:click=move |_| ctx.select_tab(tab)
        >
            <span class="sidebar-tab-icon">{tab_icon(tab)}</span>
            <span class="sidebar-tab-label">{tab.label()}</span>
        </button>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar">
            <div class="sidebar-brand">
                {icons::shopping_bag(24)}
                <span class="sidebar-brand-name">"ShoppingList"</span>
            </div>

            <nav class="sidebar-nav">
                {MAIN_TABS
                    .iter()
                    .map(|&tab| view! { <TabButton tab=tab /> })
                    .collect_view()}
            </nav>

            <div class="sidebar-bottom">
                {BOTTOM_TABS
                    .iter()
                    .map(|&tab| view! { <TabButton tab=tab /> })
                    .collect_view()}

                <a
                    href=MOBILE_APP_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="sidebar-tab"
                >
                    <span class="sidebar-tab-icon">{icons::external_link(20)}</span>
                    <span class="sidebar-tab-label">"Mobile App"</span>
                </a>
            </div>
        </div>
    }
}
