//! Badge Component
//!
//! Small inline label.

use leptos::prelude::*;

#[component]
pub fn Badge(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <span class=format!("badge badge-primary {}", class)>{children()}</span> }
}
