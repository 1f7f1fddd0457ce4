//! Pages under `/users`, framed by the account sidebar and home panel.

mod allergy;
mod home;
mod info;
mod my_recipes;
mod password;
mod scraps;

pub use allergy::AllergyUpdatePage;
pub use home::AccountHomePage;
pub use info::InfoUpdatePage;
pub use my_recipes::MyRecipesPage;
pub use password::PasswordUpdatePage;
pub use scraps::ScrapsPage;
