//! Infrastructure layer: the storage collaborator the domain stays out of.
//!
//! The domain crates never touch storage themselves; this crate supplies
//! the in-memory reference implementation of the lookup directory and the
//! bill register, owning the write-serialization discipline.

pub mod memory;

#[cfg(test)]
mod integration_tests;

pub use memory::{InMemoryStore, StoreError, StoreResult};
