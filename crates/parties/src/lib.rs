//! `bunai-parties` — the people a bill involves.
//!
//! Two reference entities: the **buyer** the bill is raised against, and the
//! **dalal** (broker) who placed the deal. Both are simple lookup records;
//! their CRUD persistence is owned by the storage layer.

pub mod buyer;
pub mod dalal;

pub use buyer::{Buyer, BuyerDetails, BuyerId};
pub use dalal::{Dalal, DalalDetails, DalalId};
