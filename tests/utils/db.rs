/// Database test utilities
///
/// Every test gets its own in-memory store, so tests are fully isolated
/// and need no cross-test locking.
use mitai::Database;
use std::sync::Arc;

pub fn open_test_db() -> Arc<Database> {
    Arc::new(Database::open(":memory:").expect("Failed to open in-memory store"))
}
