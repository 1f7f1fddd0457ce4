use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::ApiError;
use crate::config::AppConfig;

use super::join_url;

/// HTTP client for the ReciGuard backend. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.backend_timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.backend_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, join_url(&self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let body = Self::execute(self.request(Method::GET, path, token)).await?;
        decode(&body)
    }

    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::execute(self.request(method, path, token).json(payload)).await?;
        decode(&body)
    }

    /// Like [`Self::send`] for endpoints that answer without a body.
    pub async fn send_empty<B>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
        token: Option<&str>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        Self::execute(self.request(method, path, token).json(payload)).await?;
        Ok(())
    }

    async fn execute(request: RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Transport(format!("invalid response: {e}")))
}
