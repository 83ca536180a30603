pub mod aggregate;

pub use aggregate::{Role, RoleFlags, UserProfile};
