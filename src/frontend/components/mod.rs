//! Reusable UI components for the ReciGuard frontend

mod alert;
mod button;
mod feature_card;
mod footer;
mod header;
mod home_panel;
mod input;
mod page_frame;
mod recipe_card;
mod sidebar;

pub use alert::{Alert, AlertVariant, EmptyState, ErrorAlert, SuccessAlert};
pub use button::{Button, ButtonVariant};
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use header::{Header, SubHeader};
pub use home_panel::HomePanel;
pub use input::{EmailInput, PasswordInput, TextInput};
pub use page_frame::PageFrame;
pub use recipe_card::{RecipeCard, RecipeGrid};
pub use sidebar::AccountSidebar;
