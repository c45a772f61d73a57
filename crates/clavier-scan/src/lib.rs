//! Library loading for clavier.
//!
//! Walks a music directory, reads embedded tags into
//! [`clavier_core::Track`] records, and assembles the [`Library`]: the
//! title index plus a title-to-path lookup, loaded in one pass and
//! queried through the search crate.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod library;
pub mod scan;

pub use config::Config;
pub use error::{ScanError, ScanResult};
pub use library::Library;
