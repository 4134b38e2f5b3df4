use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use solestock_store::RecordStore;

/// Process-wide state shared by all handlers.
///
/// One `RecordStore`; each request holds the lock for one add/remove or for one
/// read-and-aggregate pass. State lives only as long as the process.
#[derive(Debug, Default)]
pub struct AppServices {
    store: RwLock<RecordStore>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    // `apply` only pushes or removes whole records, so a poisoned lock still
    // guards a consistent store.
    pub fn read(&self) -> RwLockReadGuard<'_, RecordStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, RecordStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}
