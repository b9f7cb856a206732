//! Driving port for user mutations.
//!
//! Inbound adapters call this port after shaping the request; the
//! implementation owns the translation of persistence failures into the
//! domain [`Error`] taxonomy.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Domain use-case port for creating, updating and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a validated user.
    ///
    /// Fails with [`crate::domain::ErrorCode::Conflict`] when the email is
    /// already registered.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Apply a partial update. Every failure, including an unknown id, is an
    /// internal error.
    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<User, Error>;

    /// Remove a user. Every failure, including an unknown id, is an internal
    /// error.
    async fn delete_user(&self, id: &UserId) -> Result<(), Error>;
}
