//! Page components for the ReciGuard frontend

mod account;
mod all_recipes;
mod landing;
mod login;
mod not_found;
mod recipe_detail;
mod recipe_form;
mod recipes;
mod signup;

pub use account::{
    AccountHomePage, AllergyUpdatePage, InfoUpdatePage, MyRecipesPage, PasswordUpdatePage,
    ScrapsPage,
};
pub use all_recipes::AllRecipesPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_form::RecipeFormPage;
pub use recipes::RecipesPage;
pub use signup::SignupPage;
