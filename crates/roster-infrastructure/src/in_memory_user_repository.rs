//! In-memory implementation of UserRepository.
//!
//! Nothing survives the process; a fresh instance starts empty.

use roster_core::error::{Result, RosterError};
use roster_core::user::{User, UserRepository, UserStatus};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Store {
    users: HashMap<String, User>,
    /// Ids in insertion order
    order: Vec<String>,
}

/// User repository holding every record in memory.
///
/// A single lock guards both the id mapping and the insertion order, so
/// one instance can be shared between threads.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored: no mutation below can panic between its steps.
    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, user: User) -> Result<()> {
        let mut store = self.write();
        if store.users.contains_key(&user.id) {
            tracing::warn!(user_id = %user.id, "Refusing to overwrite existing user");
            return Err(RosterError::duplicate_id(user.id));
        }

        store.order.push(user.id.clone());
        store.users.insert(user.id.clone(), user);
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Option<User> {
        self.read().users.get(id).cloned()
    }

    fn update_status(&self, id: &str, status: UserStatus) -> bool {
        match self.write().users.get_mut(id) {
            Some(user) => {
                user.status = status;
                true
            }
            None => false,
        }
    }

    fn list_all(&self) -> Vec<User> {
        let store = self.read();
        store
            .order
            .iter()
            .filter_map(|id| store.users.get(id).cloned())
            .collect()
    }

    fn len(&self) -> usize {
        self.read().users.len()
    }

    fn clear(&self) {
        let mut store = self.write();
        store.users.clear();
        store.order.clear();
        tracing::debug!("Cleared in-memory user store");
    }
}
