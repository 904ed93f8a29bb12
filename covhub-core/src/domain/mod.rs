//! Core domain types
//!
//! Fundamental business entities for the Coverage Hub. These types are shared
//! between the server (which stores and mutates them) and the agent client
//! (which reads them to build generation requests).

pub mod service;
