//! Read-only queries over a finished parse.
//!
//! - [`Tree`] - the tree, its text and diagnostics, spatial and kind lookup
//! - [`NodeExt`] - named-field access on any node

mod node_ext;
mod tree;

pub use node_ext::NodeExt;
pub use tree::Tree;
