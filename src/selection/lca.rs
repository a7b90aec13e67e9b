//! Lowest common ancestor of two offsets.
//!
//! The begin offset is located scanning forward and the end offset scanning
//! backward, so a selection whose edges sit in whitespace still snaps to the
//! nodes just inside it. The two paths are then compared node by node.

use std::fmt;

use super::error::SelectionError;
use super::locate::Locator;
use super::path::{NodePath, PathTrace};
use crate::document::node::YamlNode;

/// Both paths an LCA resolution compared, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcaTrace {
    pub begin: PathTrace,
    pub end: PathTrace,
}

impl fmt::Display for LcaTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.begin)?;
        write!(f, "{}", self.end)
    }
}

/// Options for [`lca`] and [`lca_traced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcaOptions {
    pub extend_keys: bool,
    pub max_depth: usize,
}

impl Default for LcaOptions {
    fn default() -> Self {
        Self {
            extend_keys: false,
            max_depth: super::locate::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Returns the deepest node shared by the paths of `begin` and `end`.
///
/// The offsets may be given in either order. `document_length` bounds the
/// forward search from the smaller offset.
///
/// # Example
///
/// ```
/// use yamlselect::document::parser::parse_yaml;
/// use yamlselect::selection::lca::{lca, LcaOptions};
///
/// let doc = "outer:\n  a: 1\n  b: 2\nother: 3\n";
/// let tree = parse_yaml(doc).unwrap();
///
/// let a = doc.find("a:").unwrap();
/// let b = doc.find("b:").unwrap();
/// let node = lca(tree.root(), a, b, doc.len(), LcaOptions::default()).unwrap();
/// assert_eq!(node.start(), a);
/// ```
pub fn lca(
    root: &YamlNode,
    begin: usize,
    end: usize,
    document_length: usize,
    options: LcaOptions,
) -> Result<&YamlNode, SelectionError> {
    lca_traced(root, begin, end, document_length, options).map(|(node, _)| node)
}

/// Like [`lca`], also returning both paths as built, before key extension.
pub fn lca_traced(
    root: &YamlNode,
    begin: usize,
    end: usize,
    document_length: usize,
    options: LcaOptions,
) -> Result<(&YamlNode, LcaTrace), SelectionError> {
    let (begin, end) = if begin > end { (end, begin) } else { (begin, end) };

    let begin_path = Locator::forward(document_length)
        .with_max_depth(options.max_depth)
        .path(root, begin)?;
    let end_path = Locator::backward()
        .with_max_depth(options.max_depth)
        .path(root, end)?;

    let trace = LcaTrace {
        begin: begin_path.trace(),
        end: end_path.trace(),
    };

    // The shorter path is the candidate side; ties go to the begin path.
    let (short_path, long_path) = if begin_path.len() > end_path.len() {
        (end_path, begin_path)
    } else {
        (begin_path, end_path)
    };
    let short_path = if options.extend_keys {
        short_path.extend_keys()
    } else {
        short_path
    };

    match first_common_node(&long_path, &short_path) {
        Some(node) => Ok((node, trace)),
        None => Err(SelectionError::NoCommonAncestor { begin, end }),
    }
}

fn first_common_node<'a>(
    long_path: &NodePath<'a>,
    short_path: &NodePath<'a>,
) -> Option<&'a YamlNode> {
    long_path
        .iter()
        .find(|outer| short_path.iter().any(|inner| outer.is_same_node(inner)))
}
