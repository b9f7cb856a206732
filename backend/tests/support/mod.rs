//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! small helpers live here instead of being copied between suites.

mod cluster_skip;

use std::sync::OnceLock;

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;
use user_registry::outbound::persistence::MIGRATIONS;

pub use cluster_skip::{handle_cluster_setup_failure, test_database_url};

static MIGRATED: OnceLock<Result<(), String>> = OnceLock::new();

/// Apply the embedded migrations once per test binary.
///
/// Tests run concurrently, so the first caller migrates and everyone else
/// observes the cached outcome.
pub fn migrate_once(url: &str) -> Result<(), String> {
    MIGRATED
        .get_or_init(|| {
            let mut conn = PgConnection::establish(url).map_err(|err| format!("{err}"))?;
            conn.run_pending_migrations(MIGRATIONS)
                .map(|_| ())
                .map_err(|err| format!("migration: {err}"))
        })
        .clone()
}
