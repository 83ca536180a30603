//! Backend configuration baked in at build time.
//!
//! `SUPABASE_URL` and `SUPABASE_ANON_KEY` must be present in the build
//! environment (e.g. `SUPABASE_URL=https://xyz.supabase.co trunk build`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing SUPABASE_URL environment variable")]
    MissingUrl,
    #[error("Missing SUPABASE_ANON_KEY environment variable")]
    MissingAnonKey,
    #[error("Invalid SUPABASE_URL format. Must start with https://")]
    InsecureUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingAnonKey)?;

        if !url.starts_with("https://") {
            return Err(ConfigError::InsecureUrl);
        }

        Ok(Self {
            supabase_url: url.trim_end_matches('/').to_string(),
            supabase_anon_key: anon_key.to_string(),
        })
    }
}
