//! Resolution of text selections to YAML nodes.
//!
//! Given a cursor offset, or the two edges of a selection, these modules find
//! the node that best represents it: the most specific node under a cursor,
//! or the lowest common ancestor of both edges. Offsets that fall into
//! whitespace or comments are moved onto the nearest node by a directional
//! scan.
//!
//! # Example
//!
//! ```
//! use yamlselect::selection::{resolve_range, ResolveOptions};
//!
//! let doc = "colors:\n  - red\n  - green\n";
//! let red = doc.find("red").unwrap();
//! let green = doc.find("green").unwrap();
//!
//! let span = resolve_range(doc, red, Some(green), &ResolveOptions::default()).unwrap();
//! assert_eq!(span.start, doc.find('-').unwrap());
//! ```

pub mod error;
pub mod lca;
pub mod locate;
pub mod path;
pub mod range;

pub use error::SelectionError;
pub use lca::{lca, lca_traced, LcaOptions, LcaTrace};
pub use locate::{
    build_path_backward, build_path_forward, find_node_backward, find_node_forward, Direction,
    Locator,
};
pub use path::{NodePath, PathTrace};
pub use range::{resolve_at, resolve_in_tree, resolve_range, ResolveOptions};
