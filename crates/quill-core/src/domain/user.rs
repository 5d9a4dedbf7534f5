use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    Author,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Author => "author",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity - an author/editor account in the admin console.
///
/// Posts reference users by display name only; deleting or renaming a
/// user never touches post rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated ID and creation timestamp.
    pub fn new(name: String, email: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
            photo_url: None,
            bio: None,
            created_at: Utc::now(),
        }
    }
}

/// Sparse patch for a user profile. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
}

impl UserPatch {
    /// True when no field is set. User updates reject empty patches.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.photo_url.is_none()
            && self.bio.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_serde() {
        let role: UserRole = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, UserRole::Editor);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"editor\"");
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<UserRole>("\"superuser\"").is_err());
    }
}
