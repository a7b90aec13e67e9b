//! A composed YAML document.
//!
//! `YamlTree` pairs the root node with the length of the text it was
//! composed from. Selection resolution needs that length as the forward
//! search limit, so trees built by hand have to state it explicitly.
//!
//! # Example
//!
//! ```
//! use yamlselect::document::node::{TextSpan, YamlNode};
//! use yamlselect::document::tree::YamlTree;
//!
//! let root = YamlNode::scalar("hello", "str", TextSpan::new(0, 5));
//! let tree = YamlTree::new(root, 6);
//!
//! assert_eq!(tree.document_length(), 6);
//! assert!(tree.original_source().is_none());
//! ```

use super::node::YamlNode;

#[derive(Debug, Clone, PartialEq)]
pub struct YamlTree {
    root: YamlNode,
    /// Length of the source in characters
    document_length: usize,
    /// The original YAML string, when the tree was parsed from text
    original_source: Option<String>,
}

impl YamlTree {
    /// Creates a tree from a hand-built root and the length of the text
    /// its spans refer to.
    pub fn new(root: YamlNode, document_length: usize) -> Self {
        Self {
            root,
            document_length,
            original_source: None,
        }
    }

    /// Creates a tree that remembers the text it was parsed from.
    ///
    /// The document length is the source's character count.
    pub fn with_source(root: YamlNode, original_source: String) -> Self {
        Self {
            root,
            document_length: original_source.chars().count(),
            original_source: Some(original_source),
        }
    }

    pub fn root(&self) -> &YamlNode {
        &self.root
    }

    pub fn document_length(&self) -> usize {
        self.document_length
    }

    pub fn original_source(&self) -> Option<&str> {
        self.original_source.as_deref()
    }
}
