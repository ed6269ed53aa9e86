//! Shopping List Card Component
//!
//! One list: progress, total cost, collaborator avatars, and the five
//! action buttons.

use leptos::prelude::*;

use crate::components::icons;
use crate::components::{
    Avatar, AvatarSize, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle,
};
use crate::context::AppContext;
use crate::format::format_date;
use crate::models::ShoppingList;
use crate::store::{shared_users, use_app_store};

#[component]
pub fn ShoppingListCard(list: ShoppingList) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let completed = list.purchased_count();
    let total_items = list.items.len();
    let progress = list.progress();
    let shared = shared_users(&store, &list);
    let overflow = shared.len().saturating_sub(3);

    let edit_list = list.clone();
    let share_list = list.clone();
    let archive_list = list.clone();
    let delete_list = list.clone();

    view! {
        <Card class="list-card">
            <CardHeader>
                <div class="list-card-heading">
                    <div>
                        <CardTitle>{list.name.clone()}</CardTitle>
                        {list.description.clone().map(|description| view! {
                            <p class="list-card-description">{description}</p>
                        })}
                    </div>
                    <Badge>{format_date(list.updated_at)}</Badge>
                </div>
            </CardHeader>

            <CardContent>
                <div class="list-card-progress">
                    <div class="progress-labels">
                        <span>"Progress"</span>
                        <span class="progress-count">
                            {format!("{}/{} items", completed, total_items)}
                        </span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style=format!("width: {}%;", progress)></div>
                    </div>
                </div>

                <div class="list-card-meta">
                    <div class="list-card-total">
                        {icons::shopping_bag(16)}
                        <span>{format!("Total: ${:.2}", list.total_estimated_cost)}</span>
                    </div>

                    {(!shared.is_empty()).then(|| view! {
                        <div class="avatar-stack">
                            {shared
                                .iter()
                                .take(3)
                                .map(|user| view! {
                                    <Avatar
                                        src=user.avatar.clone()
                                        alt=user.name.clone()
                                        size=AvatarSize::Sm
                                        class="stacked"
                                    />
                                })
                                .collect_view()}
                            {(overflow > 0).then(|| view! {
                                <div class="avatar-overflow">{format!("+{}", overflow)}</div>
                            })}
                        </div>
                    })}
                </div>
            </CardContent>

            <CardFooter class="list-card-actions">
                <div class="action-group">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on_press=Callback::new(move |_| ctx.request_edit(edit_list.clone()))
                    >
                        {icons::edit(16)}
                        "Edit"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on_press=Callback::new(move |_| ctx.request_share(share_list.clone()))
                    >
                        {icons::share(16)}
                        "Share"
                    </Button>
                </div>

                <div class="action-group">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        on_press=Callback::new(move |_| ctx.request_archive(archive_list.clone()))
                    >
                        {icons::archive(16)}
                        "Archive"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        class="danger"
                        on_press=Callback::new(move |_| ctx.request_delete(delete_list.clone()))
                    >
                        {icons::trash(16)}
                        "Delete"
                    </Button>
                </div>
            </CardFooter>
        </Card>
    }
}
