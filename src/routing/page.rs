use serde::{Deserialize, Serialize};

/// Every routable view of the application.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Landing,
    Login,
    Signup,
    Recipes,
    RecipeForm,
    RecipeDetail,
    AccountHome,
    InfoUpdate,
    PasswordUpdate,
    AllergyUpdate,
    MyRecipes,
    Scraps,
    AllRecipes,
}

impl Page {
    /// Declaration order of the route table.
    pub const ALL: [Page; 13] = [
        Self::Landing,
        Self::Login,
        Self::Signup,
        Self::Recipes,
        Self::RecipeForm,
        Self::RecipeDetail,
        Self::AccountHome,
        Self::InfoUpdate,
        Self::PasswordUpdate,
        Self::AllergyUpdate,
        Self::MyRecipes,
        Self::Scraps,
        Self::AllRecipes,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/auth/login",
            Self::Signup => "/auth/register",
            Self::Recipes => "/recipes",
            Self::RecipeForm => "/users/recipe-form",
            Self::RecipeDetail => "/recipes/:recipeId",
            Self::AccountHome => "/users/:userid",
            Self::InfoUpdate => "/users/info",
            Self::PasswordUpdate => "/users/password",
            Self::AllergyUpdate => "/users/allergy",
            Self::MyRecipes => "/users/myrecipes",
            Self::Scraps => "/users/scraps",
            Self::AllRecipes => "/recipes/all",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Recipes => "recipes",
            Self::RecipeForm => "recipe_form",
            Self::RecipeDetail => "recipe_detail",
            Self::AccountHome => "account_home",
            Self::InfoUpdate => "info_update",
            Self::PasswordUpdate => "password_update",
            Self::AllergyUpdate => "allergy_update",
            Self::MyRecipes => "my_recipes",
            Self::Scraps => "scraps",
            Self::AllRecipes => "all_recipes",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "ReciGuard",
            Self::Login => "Log in",
            Self::Signup => "Sign up",
            Self::Recipes => "Recipes",
            Self::RecipeForm => "New recipe",
            Self::RecipeDetail => "Recipe",
            Self::AccountHome => "My page",
            Self::InfoUpdate => "Profile",
            Self::PasswordUpdate => "Password",
            Self::AllergyUpdate => "Allergies",
            Self::MyRecipes => "My recipes",
            Self::Scraps => "Scraps",
            Self::AllRecipes => "All recipes",
        }
    }

    pub fn is_account_page(&self) -> bool {
        matches!(
            self,
            Self::AccountHome
                | Self::InfoUpdate
                | Self::PasswordUpdate
                | Self::AllergyUpdate
                | Self::MyRecipes
                | Self::Scraps
        )
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("invalid page: {}", s))
    }
}
