//! Domain layer for Roster.
//!
//! Contains the user model, validation rules, the service and repository
//! traits, and the plain-text report.

pub mod config;
pub mod error;
pub mod id;
pub mod user;

// Re-export common error type
pub use error::RosterError;
