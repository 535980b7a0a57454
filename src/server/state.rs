//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{service::availability::AvailabilityPolicy, util::cabin_lock::CabinLocks};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; clones share the pool.
    pub db: DatabaseConnection,

    /// Per-cabin locks serializing availability checks with the booking write.
    ///
    /// Must be the single instance for the whole process, otherwise two requests
    /// could hold "the" lock for the same cabin at once.
    pub cabin_locks: CabinLocks,

    /// Which booking statuses are skipped by availability checks.
    pub availability_policy: Arc<AvailabilityPolicy>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        cabin_locks: CabinLocks,
        availability_policy: AvailabilityPolicy,
    ) -> Self {
        Self {
            db,
            cabin_locks,
            availability_policy: Arc::new(availability_policy),
        }
    }
}
