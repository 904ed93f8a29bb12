//! Service Module
//!
//! Business logic layer for the server.
//! Lifecycle transitions live here, between the API handlers and the store.

pub mod lifecycle;

// Re-export for convenience
pub use lifecycle as lifecycle_service;
