//! Coming Soon Component
//!
//! Placeholder for tabs without a real page yet.

use leptos::prelude::*;

#[component]
pub fn ComingSoon() -> impl IntoView {
    view! {
        <div class="coming-soon">
            <div class="coming-soon-inner">
                <h2>"Coming Soon"</h2>
                <p>"This feature is under development and will be available soon."</p>
            </div>
        </div>
    }
}
