//! In-memory service record store
//!
//! The store owns the seeded records for the process lifetime. There is no
//! persistence: the collection is rebuilt from the seed on every restart.
//! Mutation happens in place under a write lock; when two requests mutate the
//! same record concurrently the last write wins.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use covhub_core::domain::service::Service;

/// Shared in-memory collection of service records, kept in seed order
#[derive(Debug)]
pub struct ServiceStore {
    services: RwLock<Vec<Service>>,
}

impl ServiceStore {
    /// Create a store over an initial set of records
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            services: RwLock::new(services),
        }
    }

    /// Snapshot of all records in insertion (seed) order
    pub fn list_all(&self) -> Vec<Service> {
        self.read().clone()
    }

    /// Snapshot of a single record
    pub fn find_by_id(&self, id: u32) -> Option<Service> {
        self.read().iter().find(|s| s.id == id).cloned()
    }

    /// Mutate the stored record for `id` in place
    ///
    /// Applies `mutate`, refreshes `last_updated` to now, and returns a
    /// snapshot of the updated record. Returns `None` when the id is unknown
    /// and leaves the store untouched.
    pub fn update<F>(&self, id: u32, mutate: F) -> Option<Service>
    where
        F: FnOnce(&mut Service),
    {
        let mut services = self.write();
        let service = services.iter_mut().find(|s| s.id == id)?;

        mutate(service);
        service.last_updated = chrono::Utc::now();

        Some(service.clone())
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Service>> {
        self.services.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Service>> {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
