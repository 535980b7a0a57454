//! Per-cabin async locks.
//!
//! A booking write is only correct if nothing else touches the same cabin between the
//! availability check and the insert/update. `CabinLocks` hands out one async mutex per
//! cabin id; holding its guard across the check and the write serializes competing
//! requests for that cabin while leaving other cabins untouched.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-cabin mutexes, shared by every clone.
#[derive(Clone, Default)]
pub struct CabinLocks {
    locks: Arc<DashMap<i32, Arc<Mutex<()>>>>,
}

impl CabinLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `cabin_id`.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn lock(&self, cabin_id: i32) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the map shard is not held across the await
        let lock = self.locks.entry(cabin_id).or_default().value().clone();

        lock.lock_owned().await
    }
}
