use crate::types::*;
use leptos::prelude::*;

#[cfg(feature = "ssr")]
pub mod backend;
pub mod session;

#[cfg(feature = "ssr")]
use crate::common::ApiError;
#[cfg(feature = "ssr")]
use reqwest::Method;

/// Joins a backend base URL and an endpoint path with exactly one slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(feature = "ssr")]
async fn backend() -> Result<actix_web::web::Data<backend::BackendClient>, ServerFnError> {
    Ok(leptos_actix::extract().await?)
}

/// Logs a backend failure and turns it into the error shown to the user.
#[cfg(feature = "ssr")]
fn fail(context: &str, err: ApiError) -> ServerFnError {
    match &err {
        ApiError::Backend { .. } | ApiError::Transport(_) => {
            log::error!("{}: {}", context, err)
        }
        _ => log::warn!("{}: {}", context, err),
    }
    ServerFnError::new(err.to_string())
}

/// The backend answers "nothing found" with 404; lists treat that as
/// empty.
#[cfg(feature = "ssr")]
fn empty_on_not_found<T>(result: Result<Vec<T>, ApiError>) -> Result<Vec<T>, ApiError> {
    match result {
        Err(ApiError::NotFound(_)) => Ok(Vec::new()),
        other => other,
    }
}

/// Login server function - authenticates against the backend and stores the
/// session cookies
#[server(Login, "/api")]
pub async fn login(username: String, password: String) -> Result<UserPublic, ServerFnError> {
    let username = username.trim().to_string();
    if username.is_empty() || password.is_empty() {
        return Err(ServerFnError::new("Enter your username and password"));
    }

    let client = backend().await?;
    let response: LoginResponse = client
        .send(
            Method::POST,
            "/auth/login",
            &LoginRequest { username, password },
            None,
        )
        .await
        .map_err(|e| fail("login", e))?;

    session::store(&response.token, &response.user)?;
    log::info!("User {} logged in", response.user.user_id);
    leptos_actix::redirect("/recipes");

    Ok(response.user)
}

/// Register server function - creates a new user account
#[server(Register, "/api")]
pub async fn register(
    username: String,
    email: String,
    password: String,
    password_confirm: String,
) -> Result<RegisterResponse, ServerFnError> {
    use crate::services::validate_signup;

    validate_signup(&username, &email, &password, &password_confirm)
        .map_err(|m| fail("register", ApiError::Validation(m)))?;

    let client = backend().await?;
    client
        .send(
            Method::POST,
            "/auth/register",
            &RegisterRequest {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
                password,
            },
            None,
        )
        .await
        .map_err(|e| fail("register", e))
}

#[server(Logout, "/api")]
pub async fn logout() -> Result<(), ServerFnError> {
    session::clear()?;
    leptos_actix::redirect("/");
    Ok(())
}

/// Get current user - reads the logged-in user from the session cookie
#[server(GetCurrentUser, "/api")]
pub async fn get_current_user() -> Result<Option<UserPublic>, ServerFnError> {
    session::current_user().await
}

/// Today's recommended recipe. Recommendation failures degrade to "none".
#[server(FetchRecommendation, "/api")]
pub async fn fetch_recommendation() -> Result<RecipeRecommendation, ServerFnError> {
    let client = backend().await?;
    let token = session::token().await?;

    match client.get("/recipes/today", token.as_deref()).await {
        Ok(recommendation) => Ok(recommendation),
        Err(e) => {
            log::warn!("recommendation unavailable: {}", e);
            Ok(RecipeRecommendation::default())
        }
    }
}

#[server(FetchRecipes, "/api")]
pub async fn fetch_recipes(query: RecipeQuery) -> Result<Vec<RecipeSummary>, ServerFnError> {
    let client = backend().await?;
    let token = if query.filtered {
        Some(session::require_token().await?)
    } else {
        session::token().await?
    };

    let qs = query.to_query_string();
    let path = if qs.is_empty() {
        "/recipes".to_string()
    } else {
        format!("/recipes?{}", qs)
    };

    empty_on_not_found(client.get(&path, token.as_deref()).await).map_err(|e| fail("fetch recipes", e))
}

#[server(FetchAllRecipes, "/api")]
pub async fn fetch_all_recipes() -> Result<Vec<RecipeSummary>, ServerFnError> {
    let client = backend().await?;
    let token = session::token().await?;

    empty_on_not_found(client.get("/recipes/all", token.as_deref()).await)
        .map_err(|e| fail("fetch all recipes", e))
}

#[server(FetchRecipe, "/api")]
pub async fn fetch_recipe(recipe_id: i64) -> Result<RecipeDetail, ServerFnError> {
    let client = backend().await?;
    let token = session::token().await?;

    client
        .get(&format!("/recipes/{}", recipe_id), token.as_deref())
        .await
        .map_err(|e| fail("fetch recipe", e))
}

#[server(ToggleScrap, "/api")]
pub async fn toggle_scrap(recipe_id: i64) -> Result<ScrapState, ServerFnError> {
    let client = backend().await?;
    let token = session::require_token().await?;

    client
        .send(
            Method::POST,
            &format!("/recipes/{}/scrap", recipe_id),
            &serde_json::json!({}),
            Some(&token),
        )
        .await
        .map_err(|e| fail("toggle scrap", e))
}

#[server(FetchAccount, "/api")]
pub async fn fetch_account(user_id: i64) -> Result<AccountSummary, ServerFnError> {
    let client = backend().await?;
    let token = session::require_token().await?;

    client
        .get(&format!("/users/{}", user_id), Some(&token))
        .await
        .map_err(|e| fail("fetch account", e))
}

#[server(FetchProfile, "/api")]
pub async fn fetch_profile() -> Result<ProfileInfo, ServerFnError> {
    let client = backend().await?;
    let token = session::require_token().await?;

    client
        .get("/users/info", Some(&token))
        .await
        .map_err(|e| fail("fetch profile", e))
}

#[server(UpdateProfile, "/api")]
pub async fn update_profile(username: String, email: String) -> Result<ProfileInfo, ServerFnError> {
    use crate::services::validate_email;

    if !validate_email(&email) {
        let err = ApiError::Validation("Invalid email address".to_string());
        return Err(fail("update profile", err));
    }

    let client = backend().await?;
    let token = session::require_token().await?;

    client
        .send(
            Method::PUT,
            "/users/info",
            &ProfileInfo {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
            },
            Some(&token),
        )
        .await
        .map_err(|e| fail("update profile", e))
}

#[server(UpdatePassword, "/api")]
pub async fn update_password(
    current_password: String,
    new_password: String,
    confirm_password: String,
) -> Result<String, ServerFnError> {
    use crate::services::validate_password_change;

    validate_password_change(&current_password, &new_password, &confirm_password)
        .map_err(|m| fail("update password", ApiError::Validation(m)))?;

    let client = backend().await?;
    let token = session::require_token().await?;

    client
        .send_empty(
            Method::PUT,
            "/users/password",
            &PasswordChange {
                current_password,
                new_password,
            },
            Some(&token),
        )
        .await
        .map_err(|e| fail("update password", e))?;

    Ok("Password updated".to_string())
}

#[server(FetchAllergies, "/api")]
pub async fn fetch_allergies() -> Result<Vec<String>, ServerFnError> {
    let client = backend().await?;
    let token = session::require_token().await?;

    let selection: AllergySelection = client
        .get("/users/allergy", Some(&token))
        .await
        .map_err(|e| fail("fetch allergies", e))?;
    Ok(selection.ingredients)
}

#[server(UpdateAllergies, "/api")]
pub async fn update_allergies(ingredients: Vec<String>) -> Result<Vec<String>, ServerFnError> {
    use crate::services::normalize_allergies;

    let selection = AllergySelection {
        ingredients: normalize_allergies(&ingredients),
    };

    let client = backend().await?;
    let token = session::require_token().await?;

    client
        .send_empty(Method::PUT, "/users/allergy", &selection, Some(&token))
        .await
        .map_err(|e| fail("update allergies", e))?;

    Ok(selection.ingredients)
}

#[server(FetchMyRecipes, "/api")]
pub async fn fetch_my_recipes() -> Result<Vec<RecipeSummary>, ServerFnError> {
    let client = backend().await?;
    let token = session::require_token().await?;

    empty_on_not_found(client.get("/users/myrecipes", Some(&token)).await)
        .map_err(|e| fail("fetch my recipes", e))
}

#[server(FetchScraps, "/api")]
pub async fn fetch_scraps() -> Result<Vec<RecipeSummary>, ServerFnError> {
    let client = backend().await?;
    let token = session::require_token().await?;

    empty_on_not_found(client.get("/users/scraps", Some(&token)).await)
        .map_err(|e| fail("fetch scraps", e))
}

#[server(CreateRecipe, "/api")]
pub async fn create_recipe(draft: RecipeDraft) -> Result<RecipeCreated, ServerFnError> {
    let draft = draft.normalized();
    draft
        .validate()
        .map_err(|m| fail("create recipe", ApiError::Validation(m)))?;

    let client = backend().await?;
    let token = session::require_token().await?;

    let created: RecipeCreated = client
        .send(Method::POST, "/users/recipe-form", &draft, Some(&token))
        .await
        .map_err(|e| fail("create recipe", e))?;

    log::info!("Recipe {} created", created.recipe_id);
    Ok(created)
}
