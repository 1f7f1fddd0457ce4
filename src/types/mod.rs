use serde::{Deserialize, Serialize};

/// Public user information (safe to expose to frontend)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Login request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserPublic,
    pub token: String,
}

/// Registration request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful registration response
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub user: UserPublic,
    pub message: String,
}

/// One entry of a recipe list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub recipe_id: i64,
    pub recipe_name: String,
    #[serde(default)]
    pub image_path: Option<String>,
    pub serving: u32,
    #[serde(default)]
    pub scrapped: bool,
}

/// Today's pick. Every field is absent when there is no recommendation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecommendation {
    #[serde(default)]
    pub recipe_id: Option<i64>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub recipe_name: Option<String>,
}

impl RecipeRecommendation {
    pub fn is_empty(&self) -> bool {
        self.recipe_id.is_none()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientLine {
    pub ingredient: String,
    pub quantity: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    #[serde(default)]
    pub instruction_image: Option<String>,
    pub instruction: String,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: i32,
    #[serde(default)]
    pub sodium: i32,
    #[serde(default)]
    pub carbohydrate: i32,
    #[serde(default)]
    pub fat: i32,
    #[serde(default)]
    pub protein: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(default)]
    pub image_path: Option<String>,
    pub recipe_name: String,
    pub serving: u32,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub food_type: String,
    #[serde(default)]
    pub cooking_style: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub scrapped: bool,
    #[serde(default)]
    pub scrap_count: u32,
    #[serde(default)]
    pub view_count: u32,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    #[serde(default)]
    pub instructions: Vec<InstructionStep>,
    #[serde(default)]
    pub similar_allergy_ingredients: Vec<String>,
}

/// A recipe being registered by the current user.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub recipe_name: String,
    pub serving: u32,
    pub cuisine: String,
    pub food_type: String,
    pub cooking_style: String,
    #[serde(default)]
    pub image_path: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: Vec<InstructionStep>,
}

/// Created recipe reference returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreated {
    pub recipe_id: i64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AllergySelection {
    pub ingredients: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub recipe_count: u32,
    #[serde(default)]
    pub scrap_count: u32,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// Scrap state after a toggle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScrapState {
    pub scrapped: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Korean,
    Western,
    Chinese,
    Japanese,
    Fusion,
}

impl Cuisine {
    pub const ALL: [Cuisine; 5] = [
        Self::Korean,
        Self::Western,
        Self::Chinese,
        Self::Japanese,
        Self::Fusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::Western => "western",
            Self::Chinese => "chinese",
            Self::Japanese => "japanese",
            Self::Fusion => "fusion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Korean => "Korean",
            Self::Western => "Western",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Fusion => "Fusion",
        }
    }
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Cuisine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "korean" => Ok(Self::Korean),
            "western" => Ok(Self::Western),
            "chinese" => Ok(Self::Chinese),
            "japanese" => Ok(Self::Japanese),
            "fusion" => Ok(Self::Fusion),
            _ => Err(format!("invalid cuisine: {}", s)),
        }
    }
}

/// Filters for the recipe listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub cuisine: Option<Cuisine>,
    /// Exclude recipes containing the user's allergens.
    #[serde(default)]
    pub filtered: bool,
}

impl RecipeQuery {
    /// Query-string pairs for the backend; blank search text is omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("query", q.to_string()));
        }
        if let Some(cuisine) = self.cuisine {
            pairs.push(("cuisine", cuisine.as_str().to_string()));
        }
        if self.filtered {
            pairs.push(("filtered", "true".to_string()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
