//! Storage module for file management
//!
//! Provides the local-disk document store used by the upload pipeline.

mod local_store;

pub use local_store::{LocalStore, StoredObject};
