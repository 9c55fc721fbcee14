//! File system building blocks.
//!
//! Path arithmetic ([`path`]), the shared recursive walk ([`walk::TreeWalk`]),
//! tree rendering ([`tree::render_tree`]) and output structure mirroring
//! ([`mirror::mirror_structure`]).

pub mod mirror;
pub mod path;
pub mod tree;
pub mod walk;

pub use mirror::{mirror_structure, MirrorReport};
pub use tree::{print_tree, render_tree};
pub use walk::{EntryKind, TreeWalk, WalkEntry};
