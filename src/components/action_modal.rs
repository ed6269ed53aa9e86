//! Action Modal Component
//!
//! Descriptive modal for the five list actions. Confirm routes through the
//! action boundary, whose placeholder implementation applies nothing, then
//! closes just like cancel.

use leptos::prelude::*;

use crate::actions::{dispatch, PlaceholderActions};
use crate::context::AppContext;

#[component]
pub fn ActionModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.modal.get().map(|modal| {
            let title = modal.title();
            let body = modal.body();
            let confirmed = modal.clone();

            view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <div class="modal-header">
                            <h3>{title}</h3>
                        </div>
                        <div class="modal-body">
                            <p>{body}</p>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-outline btn-md"
                                on:click=move |_| ctx.close_modal()
                            >
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                class="btn btn-primary btn-md"
                                on:click=move |_| {
                                    dispatch(&PlaceholderActions, &confirmed);
                                    ctx.close_modal();
                                }
                            >
                                "Confirm"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
