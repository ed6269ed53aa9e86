//! History Page Component
//!
//! Read-only statistics over the static history aggregate: summary cards,
//! top spending categories, and recent lists.

use leptos::prelude::*;

use crate::components::icons;
use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::format::{format_currency, format_date_short};
use crate::stats::{average_per_list, top_categories};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let store = use_app_store();

    let history = Memo::new(move |_| store.history().get());
    let top = Memo::new(move |_| top_categories(&history.get(), 5));

    view! {
        <div class="history">
            <div class="page-header">
                <h1>"Shopping History"</h1>
                <p>"Track your shopping habits and expenses over time"</p>
            </div>

            <div class="summary-grid">
                <Card>
                    <CardContent>
                        <div class="summary-item">
                            <div class="summary-icon summary-icon-blue">
                                {icons::shopping_bag(24)}
                            </div>
                            <div>
                                <p class="summary-label">"Total Lists"</p>
                                <h3 class="summary-value">
                                    {move || history.get().lists.len()}
                                </h3>
                            </div>
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardContent>
                        <div class="summary-item">
                            <div class="summary-icon summary-icon-green">
                                {icons::credit_card(24)}
                            </div>
                            <div>
                                <p class="summary-label">"Total Spent"</p>
                                <h3 class="summary-value">
                                    {move || format_currency(history.get().total_spent)}
                                </h3>
                            </div>
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardContent>
                        <div class="summary-item">
                            <div class="summary-icon summary-icon-purple">
                                {icons::trending_up(24)}
                            </div>
                            <div>
                                <p class="summary-label">"Avg. Per List"</p>
                                <h3 class="summary-value">
                                    {move || format_currency(average_per_list(&history.get()))}
                                </h3>
                            </div>
                        </div>
                    </CardContent>
                </Card>
            </div>

            <div class="history-grid">
                <Card>
                    <CardHeader>
                        <CardTitle>
                            <span class="card-title-icon">{icons::bar_chart(20)}</span>
                            "Top Spending Categories"
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="category-list">
                            <For
                                each=move || top.get()
                                key=|entry| entry.category
                                children=move |entry| {
                                    view! {
                                        <div class="category-row">
                                            <div class="category-row-labels">
                                                <span>{entry.category.label()}</span>
                                                <span>{format_currency(entry.amount)}</span>
                                            </div>
                                            <div class="progress-track">
                                                <div
                                                    class="progress-fill"
                                                    style=format!("width: {}%;", entry.percentage)
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>"Recent Shopping Lists"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        {move || if history.get().lists.is_empty() {
                            view! {
                                <div class="history-empty">
                                    <p>"No shopping history available yet."</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="recent-lists">
                                    <For
                                        each=move || history.get().lists
                                        key=|list| list.id.clone()
                                        children=move |list| {
                                            let item_count = list.items.len();
                                            view! {
                                                <div class="recent-list-row">
                                                    <div>
                                                        <h4>{list.name.clone()}</h4>
                                                        <p class="recent-list-date">
                                                            {format_date_short(list.created_at)}
                                                        </p>
                                                    </div>
                                                    <div class="recent-list-figures">
                                                        <p>{format_currency(list.total_estimated_cost)}</p>
                                                        <p class="recent-list-count">
                                                            {format!("{} items", item_count)}
                                                        </p>
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }}
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
