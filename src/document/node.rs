//! YAML node representation with source positions.
//!
//! This module provides the read-only tree that selection resolution walks.
//! Each `YamlNode` wraps a `YamlValue` (scalar, sequence or mapping) together
//! with the span of text it was composed from and its resolved tag.
//!
//! # Example
//!
//! ```
//! use yamlselect::document::node::{TextSpan, YamlNode};
//!
//! // "a: 1" composed by hand
//! let key = YamlNode::scalar("a", "str", TextSpan::new(0, 1));
//! let value = YamlNode::scalar("1", "int", TextSpan::new(3, 4));
//! let root = YamlNode::mapping(vec![(key, value)], TextSpan::new(0, 4));
//!
//! assert!(root.span().contains(2));
//! assert_eq!(root.debug_label(), "a (map)");
//! ```

/// A character range in the original YAML source.
///
/// `end` is the parser's end mark. Containment checks treat it inclusively,
/// so a node claims every offset in `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    /// Start character offset in the original YAML
    pub start: usize,
    /// End character offset in the original YAML
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if `offset` lies within `start..=end`.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Returns true if `other` lies entirely within this span.
    pub fn encloses(&self, other: &TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the characters of `document` covered by `start..end`.
    ///
    /// Offsets past the end of the document are clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlselect::document::node::TextSpan;
    ///
    /// assert_eq!(TextSpan::new(3, 8).slice("a: hello"), "hello");
    /// ```
    pub fn slice<'a>(&self, document: &'a str) -> &'a str {
        let byte_at = |char_idx: usize| {
            document
                .char_indices()
                .nth(char_idx)
                .map(|(b, _)| b)
                .unwrap_or(document.len())
        };
        let start = byte_at(self.start);
        let end = byte_at(self.end.max(self.start));
        &document[start..end]
    }
}

impl std::fmt::Display for TextSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// The three node shapes a composed YAML document is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

/// A YAML value without position metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// A leaf holding the literal scalar text
    Scalar(String),
    /// An ordered list of child nodes
    Sequence(Vec<YamlNode>),
    /// Ordered key/value pairs; keys are nodes too
    Mapping(Vec<(YamlNode, YamlNode)>),
}

/// A YAML value wrapped with the span and tag it was composed with.
///
/// Nodes are never mutated once composed. Two nodes are the "same" node
/// for selection purposes when [`YamlNode::is_same_node`] says so, which
/// compares shape and span rather than identity.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    pub(crate) value: YamlValue,
    pub(crate) span: TextSpan,
    pub(crate) tag: String,
}

impl YamlNode {
    /// Creates a scalar leaf with the given literal and tag.
    pub fn scalar(value: impl Into<String>, tag: impl Into<String>, span: TextSpan) -> Self {
        Self {
            value: YamlValue::Scalar(value.into()),
            span,
            tag: tag.into(),
        }
    }

    /// Creates a sequence node tagged `seq`.
    pub fn sequence(items: Vec<YamlNode>, span: TextSpan) -> Self {
        Self {
            value: YamlValue::Sequence(items),
            span,
            tag: "seq".to_string(),
        }
    }

    /// Creates a mapping node tagged `map`.
    pub fn mapping(entries: Vec<(YamlNode, YamlNode)>, span: TextSpan) -> Self {
        Self {
            value: YamlValue::Mapping(entries),
            span,
            tag: "map".to_string(),
        }
    }

    /// Replaces the tag, e.g. for explicitly tagged collections.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn value(&self) -> &YamlValue {
        &self.value
    }

    pub fn span(&self) -> TextSpan {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> NodeKind {
        match self.value {
            YamlValue::Scalar(_) => NodeKind::Scalar,
            YamlValue::Sequence(_) => NodeKind::Sequence,
            YamlValue::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// Returns the key node of the first mapping entry, if this is a
    /// non-empty mapping.
    pub fn first_key(&self) -> Option<&YamlNode> {
        match &self.value {
            YamlValue::Mapping(entries) => entries.first().map(|(key, _)| key),
            _ => None,
        }
    }

    /// Structural identity: same shape, same start, same end.
    ///
    /// Paths built by the forward and backward searches are compared with
    /// this, never with pointer identity.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlselect::document::node::{TextSpan, YamlNode};
    ///
    /// let a = YamlNode::scalar("x", "str", TextSpan::new(0, 1));
    /// let b = YamlNode::scalar("other", "int", TextSpan::new(0, 1));
    /// let c = YamlNode::sequence(vec![], TextSpan::new(0, 1));
    ///
    /// assert!(a.is_same_node(&b));
    /// assert!(!a.is_same_node(&c));
    /// ```
    pub fn is_same_node(&self, other: &YamlNode) -> bool {
        self.kind() == other.kind() && self.span == other.span
    }

    /// Human readable label used in path traces, e.g. `"a key (map)"`.
    ///
    /// Mappings are named after their first key, scalars after their value,
    /// sequences have an empty name.
    pub fn debug_label(&self) -> String {
        let name = match &self.value {
            YamlValue::Scalar(s) => s.as_str(),
            YamlValue::Sequence(_) => "",
            YamlValue::Mapping(entries) => match entries.first() {
                Some((key, _)) => match key.value() {
                    YamlValue::Scalar(s) => s.as_str(),
                    _ => "",
                },
                None => "",
            },
        };
        format!("{} ({})", name, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span_contains_is_inclusive() {
        let span = TextSpan::new(4, 9);
        assert!(!span.contains(3));
        assert!(span.contains(4));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }

    #[test]
    fn test_text_span_encloses() {
        let outer = TextSpan::new(0, 20);
        assert!(outer.encloses(&TextSpan::new(0, 20)));
        assert!(outer.encloses(&TextSpan::new(5, 6)));
        assert!(!outer.encloses(&TextSpan::new(5, 21)));
    }

    #[test]
    fn test_text_span_slice_counts_characters() {
        let doc = "é: ünïcode";
        assert_eq!(TextSpan::new(3, 10).slice(doc), "ünïcode");
        assert_eq!(TextSpan::new(8, 40).slice(doc), "de");
    }

    #[test]
    fn test_kind_and_tags() {
        let scalar = YamlNode::scalar("42", "int", TextSpan::new(0, 2));
        let seq = YamlNode::sequence(vec![scalar.clone()], TextSpan::new(0, 2));
        let map = YamlNode::mapping(vec![], TextSpan::new(0, 2));

        assert_eq!(scalar.kind(), NodeKind::Scalar);
        assert_eq!(seq.kind(), NodeKind::Sequence);
        assert_eq!(map.kind(), NodeKind::Mapping);
        assert_eq!(seq.tag(), "seq");
        assert_eq!(map.tag(), "map");
        assert_eq!(seq.clone().with_tag("set").tag(), "set");
    }

    #[test]
    fn test_same_node_ignores_value() {
        let a = YamlNode::mapping(vec![], TextSpan::new(3, 7));
        let b = YamlNode::mapping(
            vec![(
                YamlNode::scalar("k", "str", TextSpan::new(3, 4)),
                YamlNode::scalar("v", "str", TextSpan::new(6, 7)),
            )],
            TextSpan::new(3, 7),
        );
        assert!(a.is_same_node(&b));
        assert!(!a.is_same_node(&YamlNode::mapping(vec![], TextSpan::new(3, 8))));
    }

    #[test]
    fn test_debug_labels() {
        let key = YamlNode::scalar("name", "str", TextSpan::new(0, 4));
        let value = YamlNode::scalar("7", "int", TextSpan::new(6, 7));
        let map = YamlNode::mapping(vec![(key, value.clone())], TextSpan::new(0, 7));

        assert_eq!(map.debug_label(), "name (map)");
        assert_eq!(value.debug_label(), "7 (int)");
        assert_eq!(
            YamlNode::sequence(vec![], TextSpan::new(0, 0)).debug_label(),
            " (seq)"
        );
        assert_eq!(
            YamlNode::mapping(vec![], TextSpan::new(0, 0)).debug_label(),
            " (map)"
        );
    }

    #[test]
    fn test_first_key() {
        let key = YamlNode::scalar("a", "str", TextSpan::new(0, 1));
        let value = YamlNode::scalar("b", "str", TextSpan::new(3, 4));
        let map = YamlNode::mapping(vec![(key.clone(), value)], TextSpan::new(0, 4));

        assert_eq!(map.first_key(), Some(&key));
        assert!(key.first_key().is_none());
    }
}
