//! Storage layer for the persisted item collection.
//!
//! # Modules
//!
//! - `backend`: [`ItemStore`] trait the session writes through
//! - `collection`: pure helpers computing next collections
//! - `json`: JSON file store with atomic replace
//! - `memory`: in-process store

pub mod backend;
pub mod collection;
pub mod json;
pub mod memory;

pub use backend::ItemStore;
pub use json::{JsonStore, STORAGE_KEY};
pub use memory::MemoryStore;
