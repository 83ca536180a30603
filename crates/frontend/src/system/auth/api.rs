use chrono::Utc;
use contracts::domain::a104_user_profile::UserProfile;
use contracts::system::auth::{
    PasswordGrantRequest, ProfileOutcome, RefreshGrantRequest, Session,
};

use crate::shared::supabase::{ApiError, SupabaseClient};

pub fn password_grant_url(client: &SupabaseClient) -> String {
    client.auth_url("token?grant_type=password")
}

pub fn refresh_grant_url(client: &SupabaseClient) -> String {
    client.auth_url("token?grant_type=refresh_token")
}

pub fn profile_url(client: &SupabaseClient, user_id: &str) -> String {
    client.rest_url(
        "user_profiles",
        &[("select", "*"), ("id", &format!("eq.{}", user_id))],
    )
}

/// Email/password sign in.
pub async fn sign_in_with_password(
    client: &SupabaseClient,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let request = PasswordGrantRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let session: Session = client
        .auth_post(&password_grant_url(client), &request, None)
        .await?;
    Ok(session.with_expiry_from(Utc::now()))
}

/// Exchanges a refresh token for a new session.
pub async fn refresh_session(
    client: &SupabaseClient,
    refresh_token: &str,
) -> Result<Session, ApiError> {
    let request = RefreshGrantRequest {
        refresh_token: refresh_token.to_string(),
    };
    let session: Session = client
        .auth_post(&refresh_grant_url(client), &request, None)
        .await?;
    Ok(session.with_expiry_from(Utc::now()))
}

/// Revokes the session server-side.
pub async fn sign_out(client: &SupabaseClient, access_token: &str) -> Result<(), ApiError> {
    client
        .auth_post_empty(&client.auth_url("logout"), access_token)
        .await
}

pub fn profile_outcome(result: Result<UserProfile, ApiError>) -> ProfileOutcome {
    match result {
        Ok(profile) => ProfileOutcome::Found(profile),
        Err(ApiError::NotFound) => ProfileOutcome::NotFound,
        Err(e) => ProfileOutcome::Failed(e.to_string()),
    }
}

/// Single profile row for a user. Never fails; the outcome says what happened.
pub async fn fetch_profile(
    client: &SupabaseClient,
    user_id: &str,
    access_token: Option<&str>,
) -> ProfileOutcome {
    let result = client
        .select_single::<UserProfile>(&profile_url(client, user_id), access_token)
        .await;
    if let Err(e) = &result {
        log::warn!("Profile lookup for {} failed: {}", user_id, e);
    }
    profile_outcome(result)
}
