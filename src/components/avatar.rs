//! Avatar Component
//!
//! User picture with initials fallback when the image fails to load.

use leptos::prelude::*;

use crate::format::initials;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            AvatarSize::Sm => "avatar-sm",
            AvatarSize::Md => "avatar-md",
            AvatarSize::Lg => "avatar-lg",
        }
    }
}

/// Round user avatar. The one failure this app handles: a broken image URL
/// flips to initials, never an error.
#[component]
pub fn Avatar(
    #[prop(optional_no_strip)] src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional)] size: AvatarSize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let fallback = initials(&alt);

    view! {
        <div class=format!("avatar {} {}", size.class(), class)>
            {move || match (src.clone(), failed.get()) {
                (Some(url), false) => view! {
                    <img
                        src=url
                        alt=alt.clone()
                        class="avatar-image"
                        on:error=move |_| set_failed.set(true)
                    />
                }
                .into_any(),
                _ => view! { <span class="avatar-initials">{fallback.clone()}</span> }.into_any(),
            }}
        </div>
    }
}
