use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use crate::config::AppConfig;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Which error-body dialect a response speaks.
#[derive(Clone, Copy)]
enum Api {
    Rest,
    Auth,
}

/// Request helper bound to one project URL and anon key. Every request
/// carries the anon key; the bearer token is the user's access token when
/// one is given, the anon key otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseClient {
    config: AppConfig,
}

impl SupabaseClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// `{url}/rest/v1/{table}?k=v&...` with values percent-encoded.
    pub fn rest_url(&self, table: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}/rest/v1/{}", self.config.supabase_url, table);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.supabase_url, path)
    }

    fn authorize(&self, builder: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
        let bearer = access_token.unwrap_or(&self.config.supabase_anon_key);
        builder
            .header("apikey", &self.config.supabase_anon_key)
            .header("Authorization", &format!("Bearer {}", bearer))
    }

    /// GET returning a JSON array (or any list-shaped body).
    pub async fn select<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(url), access_token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response, Api::Rest).await
    }

    /// GET of exactly one row. Zero rows yield [`ApiError::NotFound`].
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(url), access_token)
            .header("Accept", SINGLE_OBJECT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response, Api::Rest).await
    }

    /// POST to an auth endpoint with a JSON body, decoding a JSON reply.
    pub async fn auth_post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(url), access_token)
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response, Api::Auth).await
    }

    /// POST to an auth endpoint without a body, ignoring the reply body.
    pub async fn auth_post_empty(&self, url: &str, access_token: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::post(url), Some(access_token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_auth_response(status, &body))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, api: Api) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(match api {
            Api::Rest => ApiError::from_rest_response(status, &body),
            Api::Auth => ApiError::from_auth_response(status, &body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Hook to access the backend client provided by the app root.
pub fn use_supabase() -> SupabaseClient {
    use_context::<SupabaseClient>().expect("SupabaseClient not found in component tree")
}
