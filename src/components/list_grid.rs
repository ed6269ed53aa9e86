//! Shopping List Grid Component
//!
//! Responsive grid of list cards with a dedicated empty state.

use leptos::prelude::*;

use crate::components::icons;
use crate::components::ShoppingListCard;
use crate::models::ShoppingList;

#[component]
pub fn ShoppingListGrid(lists: Memo<Vec<ShoppingList>>) -> impl IntoView {
    view! {
        {move || if lists.get().is_empty() {
            view! {
                <div class="list-grid-empty">
                    <div class="list-grid-empty-icon">{icons::shopping_bag(32)}</div>
                    <h3>"No shopping lists yet"</h3>
                    <p>"Create your first shopping list to get started."</p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="list-grid">
                    <For
                        each=move || lists.get()
                        key=|list| list.id.clone()
                        children=move |list| {
                            view! { <ShoppingListCard list=list /> }
                        }
                    />
                </div>
            }
            .into_any()
        }}
    }
}
