//! Test infrastructure for running the loader against a live PostgreSQL.
//!
//! Every test gets its own PostgreSQL schema, selected through `search_path`,
//! so tests can run in parallel against one database without seeing each
//! other's `category` and `item` tables.

pub mod postgresql;

pub use postgresql::{create_postgres_config, PostgresTestSchema};

use std::sync::atomic::{AtomicU64, Ordering};

// Generate unique test identifiers for parallel execution
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique test identifier for parallel test execution
pub fn generate_test_id() -> u64 {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    timestamp.wrapping_add(counter)
}
