//! Authentication models

use serde::{Deserialize, Serialize};

/// Login/registration payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

/// Account roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response() {
        let json = r#"{"token":"eyJhbGciOi","username":"admin","role":"ADMIN"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.role, Role::Admin);
        assert_eq!(response.username, "admin");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "ADMIN");
        assert_eq!(Role::default(), Role::User);
    }
}
