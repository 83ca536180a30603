//! Sign-in, session lifecycle and role-based access.

pub mod api;
pub mod context;
pub mod events;
pub mod guard;
pub mod storage;

pub use context::{use_auth, AuthContext, AuthProvider};
pub use guard::RequireRole;
