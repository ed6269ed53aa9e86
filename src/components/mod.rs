//! UI Components
//!
//! Reusable Leptos components.

mod action_modal;
mod avatar;
mod badge;
mod button;
mod card;
mod coming_soon;
mod dashboard;
mod history;
pub mod icons;
mod list_card;
mod list_grid;
mod navbar;
mod sidebar;

pub use action_modal::ActionModal;
pub use avatar::{Avatar, AvatarSize};
pub use badge::Badge;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardFooter, CardHeader, CardTitle};
pub use coming_soon::ComingSoon;
pub use dashboard::Dashboard;
pub use history::HistoryPage;
pub use list_card::ShoppingListCard;
pub use list_grid::ShoppingListGrid;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
