//! Core domain model for clavier.
//!
//! This crate defines the track record the library engine indexes: the
//! [`Track`] itself, its uuid-backed identifier, and the audio format
//! taxonomy used by the directory scanner.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod model;

pub use model::{AudioFormat, Track, TrackId, PLACEHOLDER_TITLE};
