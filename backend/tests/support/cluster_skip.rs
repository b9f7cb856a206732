//! Helpers for controlling database-backed test behaviour.
//!
//! Integration tests that need PostgreSQL read `DATABASE_URL`. Without it
//! they skip; when it is set but the database cannot be prepared they fail
//! unless `SKIP_TEST_CLUSTER` is truthy.

/// Returns true when the `SKIP_TEST_CLUSTER` environment variable is set to a
/// truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles database setup failures consistently across integration tests.
///
/// When `SKIP_TEST_CLUSTER` is truthy, prints a skip marker and returns `None`.
/// Otherwise, panics with a clear failure message so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test database setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Database URL for integration tests, or `None` with a skip marker when the
/// suite should not touch a database.
pub fn test_database_url() -> Option<String> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: SKIP_TEST_CLUSTER is set");
        return None;
    }
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-CLUSTER: DATABASE_URL is not set");
            None
        }
    }
}
