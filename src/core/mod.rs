//! Dictionary engine.
//!
//! - `data`: entries, identity tuples, raw language mappings
//! - `format`: version tag → parser selection
//! - `parsers`: JSON and legacy `.lang` parsers
//! - `tree`: read-only view of a repository checkout
//! - `resolve`: candidate path policy (first found / merge)
//! - `store`: SQLite-backed persistent store
//! - `reconcile`: per-unit upsert into the store
//! - `projection`: full corpus and mini index

pub mod data;
pub mod format;
pub mod parsers;
pub mod projection;
pub mod reconcile;
pub mod resolve;
pub mod store;
pub mod tree;

pub use data::*;
