//! Persistence gateway for users and its tagged error type.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// No user matched the identifier.
        NotFound { id: String } => "user {id} not found",
        /// Another user already owns the email address.
        DuplicateEmail => "user email already registered",
    }
}

/// Driven port over the user store.
///
/// Every method performs exactly one round trip. Identifiers are generated by
/// the store on [`UserRepository::create`]. Uniqueness of `email` is the
/// store's responsibility and surfaces as
/// [`UserPersistenceError::DuplicateEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a user and return it with its generated identifier.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Apply a partial update and return the stored result.
    ///
    /// An empty change set returns the current record unchanged.
    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<User, UserPersistenceError>;

    /// Remove a user.
    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}

/// In-memory user store.
///
/// Mirrors the database semantics closely enough for tests and for running
/// the service without PostgreSQL: generated UUIDs, insertion order, email
/// uniqueness and non-blank name/email.
#[derive(Debug, Default)]
pub struct FixtureUserRepository {
    users: Mutex<Vec<User>>,
}

impl FixtureUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_users<R>(&self, f: impl FnOnce(&mut Vec<User>) -> R) -> R {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut users)
    }
}

fn ensure_not_blank(field: &str, value: Option<&String>) -> Result<(), UserPersistenceError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(UserPersistenceError::query(format!(
            "{field} must not be blank"
        ))),
        _ => Ok(()),
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.with_users(|users| users.clone()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        self.with_users(|users| {
            if users.iter().any(|existing| existing.email() == user.email()) {
                return Err(UserPersistenceError::duplicate_email());
            }
            let created = user.clone().into_user(UserId::random());
            users.push(created.clone());
            Ok(created)
        })
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<User, UserPersistenceError> {
        ensure_not_blank("name", changes.name.as_ref())?;
        ensure_not_blank("email", changes.email.as_ref())?;
        self.with_users(|users| {
            let email_taken = changes.email.as_ref().is_some_and(|email| {
                users
                    .iter()
                    .any(|other| other.id() != id && other.email() == email)
            });
            if email_taken {
                return Err(UserPersistenceError::duplicate_email());
            }
            let user = users
                .iter_mut()
                .find(|user| user.id() == id)
                .ok_or_else(|| UserPersistenceError::not_found(id.to_string()))?;
            user.apply(changes);
            Ok(user.clone())
        })
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        self.with_users(|users| {
            let index = users
                .iter()
                .position(|user| user.id() == id)
                .ok_or_else(|| UserPersistenceError::not_found(id.to_string()))?;
            users.remove(index);
            Ok(())
        })
    }
}
