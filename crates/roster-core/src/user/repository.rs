//! User repository trait.
//!
//! Defines the interface for user storage operations.

use super::model::{User, UserStatus};
use crate::error::Result;

/// An abstract repository for user records.
///
/// Implementations own the mapping from identifier to record and must keep
/// identifiers unique. Listing returns records in insertion order so
/// reports are reproducible.
///
/// All methods take `&self`; implementations provide their own interior
/// synchronization so a single instance can be shared across threads.
pub trait UserRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Record stored
    /// - `Err(RosterError::DuplicateId)`: A record with the same id exists
    fn insert(&self, user: User) -> Result<()>;

    /// Finds a user by its ID.
    ///
    /// Returns `None` when no record matches.
    fn find_by_id(&self, id: &str) -> Option<User>;

    /// Replaces the status of an existing record.
    ///
    /// Returns `false` when no record matches `id`.
    fn update_status(&self, id: &str, status: UserStatus) -> bool;

    /// Lists all records in insertion order.
    fn list_all(&self) -> Vec<User>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every record.
    fn clear(&self);
}
