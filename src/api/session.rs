//! Login state carried in cookies between the browser and the server
//! functions.

use crate::types::UserPublic;

/// Backend bearer token.
pub const TOKEN_COOKIE: &str = "rg_token";
/// `id|username` of the logged-in user, for navigation links.
pub const USER_COOKIE: &str = "rg_user";

pub fn encode_user_cookie(user: &UserPublic) -> String {
    format!("{}|{}", user.user_id, urlencoding::encode(&user.username))
}

pub fn decode_user_cookie(value: &str) -> Option<UserPublic> {
    let (id, name) = value.split_once('|')?;
    let user_id = id.trim().parse::<i64>().ok()?;
    let username = urlencoding::decode(name).ok()?.into_owned();
    if username.is_empty() {
        return None;
    }

    Some(UserPublic {
        user_id,
        username,
        email: None,
    })
}

#[cfg(feature = "ssr")]
mod server {
    use actix_web::HttpRequest;
    use actix_web::cookie::time::Duration;
    use actix_web::cookie::{Cookie, SameSite};
    use actix_web::http::header::{HeaderValue, SET_COOKIE};
    use leptos::prelude::*;
    use leptos_actix::ResponseOptions;

    use crate::common::ApiError;
    use crate::types::UserPublic;

    use super::{TOKEN_COOKIE, USER_COOKIE, decode_user_cookie, encode_user_cookie};

    async fn cookie_value(name: &str) -> Result<Option<String>, ServerFnError> {
        let req: HttpRequest = leptos_actix::extract().await?;
        Ok(req
            .cookie(name)
            .map(|c| c.value().trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    pub async fn token() -> Result<Option<String>, ServerFnError> {
        cookie_value(TOKEN_COOKIE).await
    }

    pub async fn require_token() -> Result<String, ServerFnError> {
        token()
            .await?
            .ok_or_else(|| ServerFnError::new(ApiError::Unauthorized.to_string()))
    }

    pub async fn current_user() -> Result<Option<UserPublic>, ServerFnError> {
        Ok(cookie_value(USER_COOKIE)
            .await?
            .and_then(|v| decode_user_cookie(&v)))
    }

    fn set_cookie(cookie: Cookie<'_>) -> Result<(), ServerFnError> {
        let Some(response) = use_context::<ResponseOptions>() else {
            log::warn!("No response context; cookie {} not set", cookie.name());
            return Ok(());
        };
        let value = HeaderValue::from_str(&cookie.to_string())
            .map_err(|e| ServerFnError::new(format!("Invalid cookie: {e}")))?;
        response.append_header(SET_COOKIE, value);
        Ok(())
    }

    fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build(name, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    pub fn store(token: &str, user: &UserPublic) -> Result<(), ServerFnError> {
        set_cookie(session_cookie(TOKEN_COOKIE, token.to_string()))?;
        set_cookie(session_cookie(USER_COOKIE, encode_user_cookie(user)))
    }

    pub fn clear() -> Result<(), ServerFnError> {
        for name in [TOKEN_COOKIE, USER_COOKIE] {
            let mut cookie = session_cookie(name, String::new());
            cookie.set_max_age(Duration::ZERO);
            set_cookie(cookie)?;
        }
        Ok(())
    }
}

#[cfg(feature = "ssr")]
pub use server::*;
