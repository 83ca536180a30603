//! Thin REST client for the hosted backend (PostgREST + GoTrue endpoints).

pub mod client;
pub mod error;

pub use client::{use_supabase, SupabaseClient};
pub use error::ApiError;
