//! Error types for the Roster crates.

use thiserror::Error;

/// Message returned when a required creation field is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Nome, email e idade são obrigatórios.";

/// Message returned when the user is below the legal age.
pub const UNDERAGE_MESSAGE: &str = "O usuário deve ser maior de idade.";

/// A shared error type for the Roster crates.
///
/// The two validation variants render exactly the user-facing messages
/// callers match against, so `to_string()` is part of the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Name, email or age was not supplied
    #[error("Nome, email e idade são obrigatórios.")]
    MissingFields,

    /// Age is present but below the configured minimum
    #[error("O usuário deve ser maior de idade.")]
    Underage { idade: u32, min_age: u32 },

    /// An identifier collided with an existing record
    #[error("Duplicate user id: '{0}'")]
    DuplicateId(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Underage error
    pub fn underage(idade: u32, min_age: u32) -> Self {
        Self::Underage { idade, min_age }
    }

    /// Creates a DuplicateId error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error came from input validation on creation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFields | Self::Underage { .. })
    }

    /// Check if this is a MissingFields error
    pub fn is_missing_fields(&self) -> bool {
        matches!(self, Self::MissingFields)
    }

    /// Check if this is an Underage error
    pub fn is_underage(&self) -> bool {
        matches!(self, Self::Underage { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<toml::de::Error> for RosterError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for RosterError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, RosterError>`.
pub type Result<T> = std::result::Result<T, RosterError>;
