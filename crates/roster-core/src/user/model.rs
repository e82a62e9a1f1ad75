//! User domain model.
//!
//! Represents a registered user record and the input used to create one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle status of a user record.
///
/// Only ever one of the two values; the string form is what reports and
/// serialized records expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserStatus {
    /// The user is active. Every record starts here.
    #[default]
    Ativo,
    /// The user has been deactivated.
    Inativo,
}

impl UserStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Ativo)
    }
}

/// A stored user record.
///
/// Everything except `status` is fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier generated on creation
    pub id: String,
    /// Display name
    pub nome: String,
    /// Contact email (presence is the only check)
    pub email: String,
    /// Age in years, never below the configured minimum
    pub idade: u32,
    /// Administrators are exempt from deactivation
    pub is_admin: bool,
    /// Current status
    pub status: UserStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user.
///
/// `idade` is optional so callers can express an absent age; the service
/// rejects it before anything is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub nome: String,
    pub email: String,
    pub idade: Option<u32>,
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    /// Creates a non-admin creation request.
    pub fn new(nome: impl Into<String>, email: impl Into<String>, idade: u32) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            idade: Some(idade),
            is_admin: false,
        }
    }

    /// Marks the request as an administrator.
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_string_forms() {
        assert_eq!(UserStatus::Ativo.to_string(), "ativo");
        assert_eq!(UserStatus::Inativo.to_string(), "inativo");
        assert_eq!(UserStatus::from_str("inativo").unwrap(), UserStatus::Inativo);
        assert!(UserStatus::from_str("suspenso").is_err());
    }

    #[test]
    fn test_user_serializes_with_original_field_names() {
        let user = User {
            id: "1".to_string(),
            nome: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            idade: 28,
            is_admin: false,
            status: UserStatus::Ativo,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["status"], "ativo");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_new_user_defaults_to_non_admin() {
        let request = NewUser::new("Bob", "bob@example.com", 32);
        assert!(!request.is_admin);
        assert!(request.admin().is_admin);
    }
}
