//! User service for registering and managing users.
//!
//! The service owns validation, identifier generation and the active/inactive
//! lifecycle. Storage is delegated to a [`UserRepository`].

use super::model::{NewUser, User, UserStatus};
use super::report::render_report;
use super::repository::UserRepository;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::id::IdGenerator;
use chrono::Utc;

/// Service for managing user records.
///
/// This trait abstracts the user operations so callers can hold a
/// `dyn UserService` regardless of the storage behind it.
pub trait UserService: Send + Sync {
    /// Validates and stores a new user.
    ///
    /// Checks run in order: missing name, email or age (an age of zero
    /// counts as missing) fails with [`RosterError::MissingFields`]; an age
    /// below the minimum then fails with [`RosterError::Underage`].
    ///
    /// # Returns
    ///
    /// The stored record, including its generated `id` and `created_at`.
    fn create_user(&self, new_user: NewUser) -> Result<User>;

    /// Positional form of [`UserService::create_user`].
    fn create_user_with(
        &self,
        nome: &str,
        email: &str,
        idade: u32,
        is_admin: bool,
    ) -> Result<User> {
        self.create_user(NewUser {
            nome: nome.to_string(),
            email: email.to_string(),
            idade: Some(idade),
            is_admin,
        })
    }

    /// Returns the user with `id`, or `None` if there is none.
    fn get_user_by_id(&self, id: &str) -> Option<User>;

    /// Marks a user as inactive.
    ///
    /// # Returns
    ///
    /// - `true`: the user exists and is not an admin (already inactive
    ///   users stay inactive and still return `true`)
    /// - `false`: no such user, or the user is an admin
    fn deactivate_user(&self, id: &str) -> bool;

    /// Renders the plain-text report of every user in insertion order.
    fn generate_user_report(&self) -> String;

    /// All users in insertion order.
    fn list_users(&self) -> Vec<User>;

    fn count_users(&self) -> usize;

    /// Removes every user. Intended for resets between test cases.
    fn clear_all(&self);
}

/// Default implementation backed by any [`UserRepository`].
///
/// # Example
///
/// ```ignore
/// use roster_core::user::{DefaultUserService, NewUser, UserService};
/// use roster_infrastructure::InMemoryUserRepository;
///
/// let service = DefaultUserService::new(InMemoryUserRepository::new());
/// let user = service.create_user(NewUser::new("Alice", "alice@example.com", 28))?;
/// assert!(service.deactivate_user(&user.id));
/// ```
pub struct DefaultUserService<R: UserRepository> {
    repository: R,
    id_generator: Box<dyn IdGenerator>,
    config: RosterConfig,
}

impl<R: UserRepository> DefaultUserService<R> {
    /// Creates a service with the default configuration (minimum age 18,
    /// UUID identifiers).
    pub fn new(repository: R) -> Self {
        let config = RosterConfig::default();
        Self {
            repository,
            id_generator: config.id_strategy.build(),
            config,
        }
    }

    /// Creates a service from an explicit configuration.
    pub fn with_config(repository: R, config: RosterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repository,
            id_generator: config.id_strategy.build(),
            config,
        })
    }

    /// Replaces the identifier generator.
    pub fn with_id_generator(mut self, id_generator: Box<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    fn validate(&self, new_user: &NewUser) -> Result<u32> {
        let idade = match new_user.idade {
            Some(idade)
                if idade != 0 && !new_user.nome.is_empty() && !new_user.email.is_empty() =>
            {
                idade
            }
            _ => return Err(RosterError::MissingFields),
        };

        if idade < self.config.min_age {
            return Err(RosterError::underage(idade, self.config.min_age));
        }

        Ok(idade)
    }
}

impl<R: UserRepository> UserService for DefaultUserService<R> {
    fn create_user(&self, new_user: NewUser) -> Result<User> {
        let idade = match self.validate(&new_user) {
            Ok(idade) => idade,
            Err(e) => {
                tracing::debug!(email = %new_user.email, "Rejected user creation: {}", e);
                return Err(e);
            }
        };

        let user = User {
            id: self.id_generator.next_id(),
            nome: new_user.nome,
            email: new_user.email,
            idade,
            is_admin: new_user.is_admin,
            status: UserStatus::Ativo,
            created_at: Utc::now(),
        };

        self.repository.insert(user.clone())?;
        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "Created user");

        Ok(user)
    }

    fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.repository.find_by_id(id)
    }

    fn deactivate_user(&self, id: &str) -> bool {
        let Some(user) = self.repository.find_by_id(id) else {
            tracing::debug!(user_id = %id, "Deactivation skipped: user not found");
            return false;
        };

        if user.is_admin {
            tracing::warn!(user_id = %id, "Deactivation refused: user is an admin");
            return false;
        }

        if !user.status.is_active() {
            tracing::debug!(user_id = %id, "User already inactive");
            return true;
        }

        let updated = self.repository.update_status(id, UserStatus::Inativo);
        if updated {
            tracing::info!(user_id = %id, "Deactivated user");
        }
        updated
    }

    fn generate_user_report(&self) -> String {
        render_report(&self.repository.list_all())
    }

    fn list_users(&self) -> Vec<User> {
        self.repository.list_all()
    }

    fn count_users(&self) -> usize {
        self.repository.len()
    }

    fn clear_all(&self) {
        let removed = self.repository.len();
        self.repository.clear();
        tracing::info!(removed, "Cleared all users");
    }
}
