//! Title-keyed index for clavier.
//!
//! An AVL tree over [`clavier_core::Track`]s ordered by normalized title.
//! The normalizer ignores case and one leading English article; the tree
//! offers insert, delete, exact lookup, ordered traversal, and the
//! bracketing / predecessor / successor descents the proximity searches
//! are built on.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod normalize;
pub mod tree;

pub use tree::{Iter, TrackIndex};
