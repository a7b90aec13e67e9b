#![allow(dead_code)]

use yamlselect::document::node::{TextSpan, YamlNode, YamlValue};
use yamlselect::document::tree::YamlTree;

/// The selection fixture used throughout the tests.
pub const DOC: &str = "---
a key: content
a mapping:
  key: value
a list:
  - one red:   \"#f00\"
    one blue:  \"#08f\"
  - two red:   \"#f31\"
    two green: \"#3d6\"
";

fn s(value: &str, start: usize, end: usize) -> YamlNode {
    YamlNode::scalar(value, "str", TextSpan::new(start, end))
}

/// `DOC` composed by hand, with the marks a reference YAML composer
/// reports for it.
pub fn fixture_tree() -> YamlTree {
    let root = YamlNode::mapping(
        vec![
            (s("a key", 4, 9), s("content", 11, 18)),
            (
                s("a mapping", 19, 28),
                YamlNode::mapping(
                    vec![(s("key", 32, 35), s("value", 37, 42))],
                    TextSpan::new(32, 43),
                ),
            ),
            (
                s("a list", 43, 49),
                YamlNode::sequence(
                    vec![
                        YamlNode::mapping(
                            vec![
                                (s("one red", 55, 62), s("#f00", 66, 72)),
                                (s("one blue", 77, 85), s("#08f", 88, 94)),
                            ],
                            TextSpan::new(55, 97),
                        ),
                        YamlNode::mapping(
                            vec![
                                (s("two red", 99, 106), s("#f31", 110, 116)),
                                (s("two green", 121, 130), s("#3d6", 132, 138)),
                            ],
                            TextSpan::new(99, 139),
                        ),
                    ],
                    TextSpan::new(53, 139),
                ),
            ),
        ],
        TextSpan::new(4, 139),
    );
    YamlTree::new(root, DOC.len())
}

pub fn find(needle: &str) -> usize {
    DOC.find(needle).unwrap()
}

/// Every node of `node`'s subtree, parents before children.
pub fn all_nodes(node: &YamlNode) -> Vec<&YamlNode> {
    let mut out = vec![node];
    match node.value() {
        YamlValue::Scalar(_) => {}
        YamlValue::Sequence(items) => {
            for item in items {
                out.extend(all_nodes(item));
            }
        }
        YamlValue::Mapping(entries) => {
            for (key, value) in entries {
                out.extend(all_nodes(key));
                out.extend(all_nodes(value));
            }
        }
    }
    out
}

/// Offsets strictly inside some scalar's text.
pub fn interior_offsets(root: &YamlNode) -> Vec<usize> {
    let mut offsets: Vec<usize> = all_nodes(root)
        .into_iter()
        .filter(|n| matches!(n.value(), YamlValue::Scalar(_)))
        .flat_map(|n| (n.start() + 1)..n.end())
        .collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}
