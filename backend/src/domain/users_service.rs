//! User use-case service.
//!
//! Implements the driving ports on top of a [`UserRepository`] and owns the
//! error taxonomy: a duplicate email on create is a conflict, every other
//! persistence failure is an internal error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Message returned when a create collides with an existing email.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email já cadastrado.";

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
pub struct UsersService<R> {
    repository: Arc<R>,
}

impl<R> Clone for UsersService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> UsersService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn internal_error(operation: &'static str, err: &UserPersistenceError) -> Error {
    error!(operation, error = %err, "user repository operation failed");
    Error::internal(format!("{operation} failed: {err}"))
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(|err| internal_error("list_users", &err))
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        match self.repository.create(&user).await {
            Ok(created) => {
                debug!(user_id = %created.id(), "user created");
                Ok(created)
            }
            Err(UserPersistenceError::DuplicateEmail) => {
                debug!("rejected user with duplicate email");
                Err(Error::conflict(DUPLICATE_EMAIL_MESSAGE))
            }
            Err(err) => Err(internal_error("create_user", &err)),
        }
    }

    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<User, Error> {
        // Not-found and duplicate email stay internal errors on update.
        self.repository
            .update(id, &changes)
            .await
            .map_err(|err| internal_error("update_user", &err))
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| internal_error("delete_user", &err))
    }
}

#[cfg(test)]
mod tests;
