use contracts::system::auth::PROFILE_NOT_FOUND_CODE;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Not found")]
    NotFound,
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("{0}")]
    Auth(String),
}

/// Error body emitted by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Error body emitted by the auth service. Field names vary across versions.
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Maps a failed data-API response. `PGRST116` and HTTP 404 become
    /// [`ApiError::NotFound`].
    pub fn from_rest_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<PostgrestErrorBody>(body).ok();
        if status == 404
            || parsed
                .as_ref()
                .and_then(|b| b.code.as_deref())
                .is_some_and(|code| code == PROFILE_NOT_FOUND_CODE)
        {
            return ApiError::NotFound;
        }
        let message = parsed
            .and_then(|b| b.message)
            .unwrap_or_else(|| fallback_message(body));
        ApiError::Http { status, message }
    }

    /// Maps a failed auth-API response to a user-facing message.
    pub fn from_auth_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<AuthErrorBody>(body)
            .ok()
            .and_then(|b| b.error_description.or(b.msg).or(b.message).or(b.error));
        match message {
            Some(message) => ApiError::Auth(message),
            None => ApiError::Http {
                status,
                message: fallback_message(body),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

fn fallback_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
