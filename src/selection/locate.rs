//! Directional node location.
//!
//! Finding the node under an offset is a plain descent while the offset is
//! covered by some node. Offsets in whitespace or comments are covered by no
//! leaf, so the search steps through the gap in one direction until a node
//! covers the offset or the scan boundary is reached. When a container runs
//! out of room, the search reports nothing and its parent resumes the scan
//! with its own, wider boundary.
//!
//! # Example
//!
//! ```
//! use yamlselect::document::parser::parse_yaml;
//! use yamlselect::selection::locate::{find_node_backward, find_node_forward};
//!
//! let doc = "a: 1\n\nb: 2\n";
//! let tree = parse_yaml(doc).unwrap();
//! let gap = 5; // the empty line
//!
//! let next = find_node_forward(tree.root(), gap, doc.len(), false).unwrap();
//! assert_eq!(next.start(), doc.find('b').unwrap());
//!
//! let previous = find_node_backward(tree.root(), gap, false).unwrap();
//! assert_eq!(previous.start(), doc.find('1').unwrap());
//! ```

use std::fmt;

use super::error::SelectionError;
use super::path::NodePath;
use crate::document::node::{YamlNode, YamlValue};

/// Gap scanning step. Distinct node boundaries are never closer than two
/// characters, so a smaller step finds nothing new.
pub const SEARCH_STEP: usize = 2;

/// Default bound on how deep a descent may go.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Which way to scan out of a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Resolves offsets to leaf-to-root node paths.
///
/// A forward locator never scans past `limit` (usually the document
/// length); a backward locator never scans below it (usually 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    direction: Direction,
    limit: usize,
    max_depth: usize,
}

impl Locator {
    pub fn forward(limit: usize) -> Self {
        Self {
            direction: Direction::Forward,
            limit,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn backward() -> Self {
        Self {
            direction: Direction::Backward,
            limit: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the most specific node for `offset`.
    pub fn locate<'a>(
        &self,
        root: &'a YamlNode,
        offset: usize,
    ) -> Result<&'a YamlNode, SelectionError> {
        Ok(self.path(root, offset)?.leaf())
    }

    /// Returns every node from the most specific one for `offset` up to
    /// `root`.
    pub fn path<'a>(
        &self,
        root: &'a YamlNode,
        offset: usize,
    ) -> Result<NodePath<'a>, SelectionError> {
        match self.descend(root, offset, self.limit, 0)? {
            Some(nodes) => Ok(NodePath::new(nodes)),
            None => Err(SelectionError::OffsetNotLocatable {
                offset,
                direction: self.direction,
            }),
        }
    }

    /// Path from the node containing `offset` up to and including `node`,
    /// scanning out of gaps no further than `limit` and `node`'s own span.
    fn descend<'a>(
        &self,
        node: &'a YamlNode,
        mut offset: usize,
        mut limit: usize,
        depth: usize,
    ) -> Result<Option<Vec<&'a YamlNode>>, SelectionError> {
        if depth > self.max_depth {
            return Err(SelectionError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }

        loop {
            if node.span().contains(offset) {
                if let Some(mut path) = self.descend_children(node, offset, limit, depth)? {
                    path.push(node);
                    return Ok(Some(path));
                }
            }

            // Gap, or trailing whitespace inside `node`: step towards the
            // boundary and retry against the same node.
            match self.direction {
                Direction::Forward => {
                    let boundary = node.end().min(limit);
                    if offset >= boundary {
                        return Ok(None);
                    }
                    offset = (offset + SEARCH_STEP).min(boundary);
                    limit = boundary;
                }
                Direction::Backward => {
                    let boundary = node.start().max(limit);
                    if offset <= boundary {
                        return Ok(None);
                    }
                    offset = offset.saturating_sub(SEARCH_STEP).max(boundary);
                    limit = boundary;
                }
            }
            log::trace!(
                "{} scan in {} moved to offset {}",
                self.direction,
                node.debug_label(),
                offset
            );
        }
    }

    /// Path below `node` for an offset inside `node`'s span. A scalar is its
    /// own leaf, so it yields an empty path; `None` means no child claims
    /// the offset.
    fn descend_children<'a>(
        &self,
        node: &'a YamlNode,
        offset: usize,
        limit: usize,
        depth: usize,
    ) -> Result<Option<Vec<&'a YamlNode>>, SelectionError> {
        match node.value() {
            YamlValue::Scalar(_) => Ok(Some(Vec::new())),
            YamlValue::Sequence(items) => {
                for item in items {
                    if item.span().contains(offset) {
                        if let Some(path) = self.descend(item, offset, limit, depth + 1)? {
                            return Ok(Some(path));
                        }
                    }
                }
                Ok(None)
            }
            YamlValue::Mapping(entries) => {
                for (key, value) in entries {
                    // Keys are leaves for selection purposes.
                    if key.span().contains(offset) {
                        return Ok(Some(vec![key]));
                    }
                    if value.span().contains(offset) {
                        if let Some(path) = self.descend(value, offset, limit, depth + 1)? {
                            return Ok(Some(path));
                        }
                    }
                }
                Ok(None)
            }
        }
    }
}

/// Path for `offset`, scanning forward out of gaps up to `limit`.
pub fn build_path_forward(
    root: &YamlNode,
    offset: usize,
    limit: usize,
) -> Result<NodePath<'_>, SelectionError> {
    Locator::forward(limit).path(root, offset)
}

/// Path for `offset`, scanning backward out of gaps down to the start.
pub fn build_path_backward(root: &YamlNode, offset: usize) -> Result<NodePath<'_>, SelectionError> {
    Locator::backward().path(root, offset)
}

/// The most specific node at `offset`, searching forward out of gaps.
pub fn find_node_forward(
    root: &YamlNode,
    offset: usize,
    limit: usize,
    extend_keys: bool,
) -> Result<&YamlNode, SelectionError> {
    let path = build_path_forward(root, offset, limit)?;
    let path = if extend_keys { path.extend_keys() } else { path };
    Ok(path.leaf())
}

/// The most specific node at `offset`, searching backward out of gaps.
pub fn find_node_backward(
    root: &YamlNode,
    offset: usize,
    extend_keys: bool,
) -> Result<&YamlNode, SelectionError> {
    let path = build_path_backward(root, offset)?;
    let path = if extend_keys { path.extend_keys() } else { path };
    Ok(path.leaf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{NodeKind, TextSpan};

    /// "---\n  key: [1, 2]\n"
    fn flow_doc() -> YamlNode {
        YamlNode::mapping(
            vec![(
                YamlNode::scalar("key", "str", TextSpan::new(6, 9)),
                YamlNode::sequence(
                    vec![
                        YamlNode::scalar("1", "int", TextSpan::new(12, 13)),
                        YamlNode::scalar("2", "int", TextSpan::new(15, 16)),
                    ],
                    TextSpan::new(11, 17),
                ),
            )],
            TextSpan::new(6, 18),
        )
    }

    const LEN: usize = 18;

    fn spans(path: &NodePath<'_>) -> Vec<(usize, usize)> {
        path.iter().map(|n| (n.start(), n.end())).collect()
    }

    #[test]
    fn test_path_to_scalar_in_flow_sequence() {
        let root = flow_doc();
        let path = build_path_forward(&root, 15, LEN).unwrap();

        let kinds: Vec<NodeKind> = path.iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Scalar, NodeKind::Sequence, NodeKind::Mapping]
        );
        assert_eq!(spans(&path), vec![(15, 16), (11, 17), (6, 18)]);
        assert!(std::ptr::eq(path.root(), &root));
    }

    #[test]
    fn test_key_hit_includes_its_mapping() {
        let root = flow_doc();
        let path = build_path_forward(&root, 7, LEN).unwrap();
        assert_eq!(spans(&path), vec![(6, 9), (6, 18)]);
    }

    #[test]
    fn test_locator_directions() {
        assert_eq!(Locator::forward(18).direction(), Direction::Forward);
        assert_eq!(
            Locator::backward().with_max_depth(4).direction(),
            Direction::Backward
        );
    }

    #[test]
    fn test_forward_scan_from_before_root() {
        let root = flow_doc();
        let node = find_node_forward(&root, 5, LEN, false).unwrap();
        assert_eq!(node.span(), TextSpan::new(6, 9));
    }

    #[test]
    fn test_backward_scan_before_root_fails() {
        let root = flow_doc();
        let err = find_node_backward(&root, 5, false).unwrap_err();
        assert_eq!(
            err,
            SelectionError::OffsetNotLocatable {
                offset: 5,
                direction: Direction::Backward
            }
        );
    }

    #[test]
    fn test_gap_between_key_and_value() {
        let root = flow_doc();

        let forward = find_node_forward(&root, 10, LEN, false).unwrap();
        assert_eq!(forward.span(), TextSpan::new(12, 13));

        let backward = find_node_backward(&root, 10, false).unwrap();
        assert_eq!(backward.span(), TextSpan::new(6, 9));
    }

    #[test]
    fn test_gap_inside_sequence() {
        let root = flow_doc();

        let forward = find_node_forward(&root, 14, LEN, false).unwrap();
        assert_eq!(forward.span(), TextSpan::new(15, 16));

        let backward = find_node_backward(&root, 14, false).unwrap();
        assert_eq!(backward.span(), TextSpan::new(12, 13));
    }

    #[test]
    fn test_trailing_newline_is_not_locatable_forward() {
        let root = flow_doc();
        assert!(matches!(
            build_path_forward(&root, 17, LEN),
            Err(SelectionError::OffsetNotLocatable { offset: 17, .. })
        ));
        let backward = find_node_backward(&root, 17, false).unwrap();
        assert_eq!(backward.span(), TextSpan::new(15, 16));
    }

    #[test]
    fn test_forward_limit_bounds_the_scan() {
        let root = flow_doc();
        assert!(build_path_forward(&root, 10, 11).is_err());
        assert!(build_path_forward(&root, 10, 12).is_ok());
    }

    #[test]
    fn test_offset_past_root_is_not_locatable() {
        let root = flow_doc();
        assert!(build_path_forward(&root, 30, 40).is_err());
    }

    #[test]
    fn test_extend_keys_on_find() {
        let root = flow_doc();
        let node = find_node_forward(&root, 7, LEN, true).unwrap();
        assert_eq!(node.kind(), NodeKind::Mapping);
    }

    #[test]
    fn test_scalar_root() {
        let root = YamlNode::scalar("hello", "str", TextSpan::new(0, 5));
        let path = build_path_forward(&root, 3, 6).unwrap();
        assert_eq!(path.len(), 1);
        assert!(std::ptr::eq(path.leaf(), &root));
    }

    #[test]
    fn test_depth_limit() {
        let mut node = YamlNode::scalar("x", "str", TextSpan::new(10, 11));
        for depth in 0..10 {
            node = YamlNode::sequence(vec![node], TextSpan::new(9 - depth, 12 + depth));
        }

        let shallow = Locator::forward(30).with_max_depth(3);
        assert_eq!(
            shallow.locate(&node, 10).unwrap_err(),
            SelectionError::DepthLimitExceeded { limit: 3 }
        );

        let deep = Locator::forward(30).with_max_depth(10);
        assert_eq!(deep.path(&node, 10).unwrap().len(), 11);
    }
}
