//! Profile Data Structure
//!
//! Represents an authenticated user's identity. Profiles are created
//! by the backend at registration, loaded into memory at session
//! restore or login, and never persisted client-side.

use serde::{Deserialize, Serialize};

/// Moderation role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Parse a wire role name; unknown names fall back to `User`
    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "super_admin" => Role::SuperAdmin,
            _ => Role::User,
        }
    }
}

/// An authenticated user's identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Opaque server key
    pub id: String,
    /// Unique public username (shown as `u/<handle>`)
    pub handle: String,
    /// Display name
    pub display_name: String,
    /// Two-letter avatar initials
    pub initials: String,
    /// Avatar color tag (CSS color string)
    pub color_tag: String,
    /// Moderation role
    pub role: Role,
    /// Whether the account is banned
    pub is_banned: bool,
}

impl Profile {
    /// Build the model from a wire row
    pub fn from_row(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            handle: row.uid,
            display_name: row.name,
            initials: row.initials,
            color_tag: row.color,
            role: Role::parse(&row.role),
            is_banned: row.is_banned != 0,
        }
    }

    /// Whether this user can moderate content
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin | Role::SuperAdmin)
    }

    /// Whether this user can manage other admins
    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}

/// Profile as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_role")]
    pub role: String,
    /// The backend stores this as a 0/1 integer
    #[serde(default)]
    pub is_banned: i64,
}

fn default_role() -> String {
    "user".to_string()
}

/// Successful credential or OTP verification: `{token, profile}`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub profile: ProfileRow,
}

/// Acknowledgement of an OTP request
#[derive(Debug, Clone, Deserialize)]
pub struct OtpAck {
    /// Echoed back by dev builds of the backend; absent in production
    #[serde(default)]
    pub code: Option<String>,
    /// Seconds until the code expires
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ProfileRow {
        ProfileRow {
            id: "p-1".to_string(),
            uid: "amir_b".to_string(),
            name: "Amir".to_string(),
            initials: "AB".to_string(),
            color: "#4da6ff".to_string(),
            role: "user".to_string(),
            is_banned: 0,
        }
    }

    #[test]
    fn test_from_row() {
        let profile = Profile::from_row(sample_row());
        assert_eq!(profile.handle, "amir_b");
        assert_eq!(profile.role, Role::User);
        assert!(!profile.is_banned);
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("super_admin"), Role::SuperAdmin);
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("something_else"), Role::User);
    }

    #[test]
    fn test_admin_flags() {
        let mut row = sample_row();
        row.role = "admin".to_string();
        let profile = Profile::from_row(row);
        assert!(profile.is_admin());
        assert!(!profile.is_super_admin());
    }

    #[test]
    fn test_row_deserializes_with_missing_fields() {
        let row: ProfileRow =
            serde_json::from_str(r#"{"id":"p-2","uid":"sara_k","name":"Sara"}"#).unwrap();
        assert_eq!(row.role, "user");
        assert_eq!(row.is_banned, 0);
        let profile = Profile::from_row(row);
        assert_eq!(profile.initials, "");
    }
}
