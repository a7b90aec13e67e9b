//! Leaf-to-root node paths and key extension.

use std::fmt;

use crate::document::node::YamlNode;

/// The nodes visited while locating an offset, most specific first.
///
/// A path always holds at least one node and always ends with the root of
/// the tree it was built from. Nodes are borrowed from that tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePath<'a> {
    nodes: Vec<&'a YamlNode>,
}

impl<'a> NodePath<'a> {
    /// `nodes` must be non-empty and ordered leaf first.
    pub(crate) fn new(nodes: Vec<&'a YamlNode>) -> Self {
        debug_assert!(!nodes.is_empty(), "a node path always contains the root");
        Self { nodes }
    }

    /// The most specific node.
    pub fn leaf(&self) -> &'a YamlNode {
        self.nodes[0]
    }

    /// The least specific node, i.e. the document root.
    pub fn root(&self) -> &'a YamlNode {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a YamlNode> + '_ {
        self.nodes.iter().copied()
    }

    /// Drops a leaf that is the first key of its parent mapping, making
    /// the mapping the most specific node.
    ///
    /// Any other path is returned unchanged.
    pub fn extend_keys(mut self) -> Self {
        let leaf_is_first_key = match (self.nodes.first(), self.nodes.get(1)) {
            (Some(leaf), Some(parent)) => parent
                .first_key()
                .is_some_and(|key| std::ptr::eq(key, *leaf)),
            _ => false,
        };
        if leaf_is_first_key {
            self.nodes.remove(0);
        }
        self
    }

    /// `(start offset, label)` pairs for diagnostics.
    pub fn trace(&self) -> PathTrace {
        PathTrace(
            self.nodes
                .iter()
                .map(|node| (node.start(), node.debug_label()))
                .collect(),
        )
    }
}

/// A rendered path, printed as `[(37, 'value (str)'), (32, 'key (map)')]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTrace(pub Vec<(usize, String)>);

impl fmt::Display for PathTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (start, label)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, '{}')", start, label)?;
        }
        write!(f, "]")
    }
}
