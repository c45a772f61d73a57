//! Proximity search over the clavier title index.
//!
//! Two algorithms: [`lexical::nearest`] walks outward from the tightest
//! predecessor/successor bracket around the query, and [`fuzzy::nearest`]
//! scores every indexed track by word-level edit distance and keeps the
//! k best. Both read the index without mutating it and return shared
//! references into it.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod fuzzy;
pub mod lexical;
