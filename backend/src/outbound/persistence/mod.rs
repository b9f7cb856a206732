//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Async-safe pooling**: connections come from a `bb8` pool through
//!   `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use user_registry::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
