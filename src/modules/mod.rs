//! Modules layer - Infrastructure components
//!
//! Contains adapters for things outside the database, like file storage.

pub mod storage;
