//! i18n-dict - Minecraft mod translation dictionary builder
//!
//! i18n-dict collects the English and Chinese language files of many mod
//! repositories, reconciles them into a SQLite store and publishes two JSON
//! projections of that store: the full corpus and a compact index of the most
//! common translation for each English text.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and console output)
//! - `config`: `source_mods.json` loading and validation
//! - `core`: Formats, parsers, path resolution, reconciliation, store and projections
//! - `error`: Per-source and store error types
//! - `output`: Release file serialization
//! - `pipeline`: Sequential processing of every configured source
//! - `report`: Markdown run report
//! - `source`: Repository snapshot retrieval (GitHub or local directory)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod utils;
