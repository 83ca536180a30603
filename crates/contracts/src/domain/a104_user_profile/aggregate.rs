use serde::{Deserialize, Serialize};

/// Role stored on a profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    #[default]
    Buyer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Seller => "seller",
            Role::Buyer => "buyer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Seller => "Seller",
            Role::Buyer => "Buyer",
        }
    }

    /// Whether a user holding `self` may enter a page that requires `required`.
    /// Admin ⊇ seller ⊇ buyer.
    pub fn grants(&self, required: Role) -> bool {
        match required {
            Role::Admin => matches!(self, Role::Admin),
            Role::Seller => matches!(self, Role::Seller | Role::Admin),
            Role::Buyer => true,
        }
    }

    pub fn flags(&self) -> RoleFlags {
        RoleFlags {
            is_admin: matches!(self, Role::Admin),
            is_seller: matches!(self, Role::Seller),
            is_buyer: matches!(self, Role::Buyer),
        }
    }
}

/// The three derived booleans exposed by the auth context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleFlags {
    pub is_admin: bool,
    pub is_seller: bool,
    pub is_buyer: bool,
}

/// Row of the `user_profiles` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(Role::Admin.grants(Role::Admin));
        assert!(!Role::Seller.grants(Role::Admin));
        assert!(!Role::Buyer.grants(Role::Admin));

        assert!(Role::Admin.grants(Role::Seller));
        assert!(Role::Seller.grants(Role::Seller));
        assert!(!Role::Buyer.grants(Role::Seller));

        for role in [Role::Admin, Role::Seller, Role::Buyer] {
            assert!(role.grants(Role::Buyer));
        }
    }

    #[test]
    fn test_flags_are_exclusive() {
        assert_eq!(
            Role::Seller.flags(),
            RoleFlags {
                is_admin: false,
                is_seller: true,
                is_buyer: false
            }
        );
        assert!(Role::Admin.flags().is_admin);
        assert!(Role::Buyer.flags().is_buyer);
    }

    #[test]
    fn test_profile_row_without_role_defaults_to_buyer() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"u1","name":"Jane","avatar_url":null}"#).unwrap();
        assert_eq!(profile.role, Role::Buyer);
        assert_eq!(profile.name.as_deref(), Some("Jane"));
        assert!(profile.avatar_url.is_none());
    }
}
