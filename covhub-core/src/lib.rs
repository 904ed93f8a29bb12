//! Coverage Hub Core
//!
//! Domain types for the Coverage Hub backend.
//!
//! This crate contains the entities shared between the HTTP server and the
//! test-generation agent client: the tracked [`domain::service::Service`]
//! record and its enumerated lifecycle fields.

pub mod domain;
