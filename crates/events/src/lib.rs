//! `bunai-events` — domain event contract.
//!
//! Events describe business facts (a bill was created, payment was
//! received). Persistence and dispatch of events belong to the embedding
//! application, not here.

pub mod event;

pub use event::Event;
