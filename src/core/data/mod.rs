//! Core data structures shared by the parsers, the store, and the projections.

mod entry;
mod messages;

pub use entry::*;
pub use messages::*;
