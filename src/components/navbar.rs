//! Navbar Component
//!
//! Top bar with brand, search box, create button, notifications, and the
//! profile dropdown. The search box here is decorative; the dashboard owns
//! the working one.

use leptos::prelude::*;

use crate::components::icons;
use crate::components::{Avatar, AvatarSize, Button};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (menu_open, set_menu_open) = signal(false);
    let (profile_open, set_profile_open) = signal(false);

    let current_user = store.current_user().get_untracked();
    let user_name = current_user.name.clone();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                // Logo and brand
                <div class="navbar-brand">
                    {icons::shopping_bag(32)}
                    <span class="navbar-brand-name">"ShoppingListApp"</span>
                </div>

                // Search (hidden on mobile via CSS)
                <div class="navbar-search">
                    <span class="search-icon">{icons::search(20)}</span>
                    <input type="text" placeholder="Search lists..." />
                </div>

                // Desktop actions
                <div class="navbar-actions">
                    <Button on_press=Callback::new(move |_| ctx.request_create())>
                        {icons::plus(16)}
                        "New List"
                    </Button>

                    <button class="icon-btn">{icons::bell(20)}</button>

                    <div class="navbar-profile">
                        <button
                            class="profile-toggle"
                            on:click=move |_| set_profile_open.update(|open| *open = !*open)
                        >
                            <Avatar
                                src=current_user.avatar.clone()
                                alt=current_user.name.clone()
                                size=AvatarSize::Sm
                            />
                            <span class="profile-name">{user_name}</span>
                            {icons::chevron_down(16)}
                        </button>

                        <Show when=move || profile_open.get()>
                            <div class="profile-dropdown">
                                <a href="#">"Your Profile"</a>
                                <a href="#">"Settings"</a>
                                <a href="#">"Sign out"</a>
                            </div>
                        </Show>
                    </div>
                </div>

                // Mobile menu button
                <button
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        icons::close(24)
                    } else {
                        icons::menu(24)
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="navbar-mobile-menu">
                    <div class="navbar-search">
                        <span class="search-icon">{icons::search(20)}</span>
                        <input type="text" placeholder="Search lists..." />
                    </div>

                    <Button
                        class="full-width"
                        on_press=Callback::new(move |_| {
                            ctx.request_create();
                            set_menu_open.set(false);
                        })
                    >
                        {icons::plus(16)}
                        "New List"
                    </Button>

                    <a href="#" class="mobile-menu-link">
                        {icons::user(20)}
                        "Profile"
                    </a>
                    <a href="#" class="mobile-menu-link">
                        {icons::bell(20)}
                        "Notifications"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
