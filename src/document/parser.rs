//! YAML parsing with position tracking.
//!
//! This module composes the event stream produced by `saphyr-parser` into a
//! `YamlTree` whose nodes carry the character spans they were read from.
//! Only composition happens here: scanning and grammar are entirely the
//! parser's business, and its errors are passed through with context.
//!
//! # Example
//!
//! ```
//! use yamlselect::document::parser::parse_yaml;
//! use yamlselect::document::node::YamlValue;
//!
//! let tree = parse_yaml("name: Alice\nage: 30\n").unwrap();
//!
//! match tree.root().value() {
//!     YamlValue::Mapping(entries) => assert_eq!(entries.len(), 2),
//!     _ => panic!("Expected mapping"),
//! }
//! ```

use super::node::{TextSpan, YamlNode};
use super::tree::YamlTree;
use anyhow::{bail, Context, Result};
use saphyr_parser::{Event, Parser, ScalarStyle, Span};

/// A collection whose end event has not been seen yet.
enum Frame {
    Sequence {
        start: usize,
        tag: Option<String>,
        items: Vec<YamlNode>,
    },
    Mapping {
        start: usize,
        tag: Option<String>,
        entries: Vec<(YamlNode, YamlNode)>,
        pending_key: Option<YamlNode>,
    },
}

/// Builds nodes from events with an explicit stack, so nesting depth is
/// bounded by memory rather than by the call stack.
struct Composer<'a> {
    source: &'a str,
    stack: Vec<Frame>,
    root: Option<YamlNode>,
    documents: usize,
}

impl<'a> Composer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            stack: Vec::new(),
            root: None,
            documents: 0,
        }
    }

    fn on_event(&mut self, event: Event<'_>, span: Span) -> Result<()> {
        let start = span.start.index();
        let end = span.end.index();

        match event {
            Event::DocumentStart(..) => {
                self.documents += 1;
                if self.documents > 1 {
                    bail!("expected a single document, found another at offset {start}");
                }
            }
            Event::Scalar(value, style, _, tag) => {
                let tag = match tag.as_ref() {
                    Some(t) => tag_name(&t.handle, &t.suffix),
                    None if matches!(style, ScalarStyle::Plain) => {
                        resolve_plain_tag(&value).to_string()
                    }
                    None => "str".to_string(),
                };
                let node = YamlNode::scalar(value.to_string(), tag, TextSpan::new(start, end));
                self.attach(node)?;
            }
            Event::Alias(_) => {
                let span = TextSpan::new(start, end);
                let node = YamlNode::scalar(span.slice(self.source), "alias", span);
                self.attach(node)?;
            }
            Event::SequenceStart(_, tag) => {
                self.stack.push(Frame::Sequence {
                    start,
                    tag: tag.as_ref().map(|t| tag_name(&t.handle, &t.suffix)),
                    items: Vec::new(),
                });
            }
            Event::MappingStart(_, tag) => {
                self.stack.push(Frame::Mapping {
                    start,
                    tag: tag.as_ref().map(|t| tag_name(&t.handle, &t.suffix)),
                    entries: Vec::new(),
                    pending_key: None,
                });
            }
            Event::SequenceEnd => match self.stack.pop() {
                Some(Frame::Sequence { start, tag, items }) => {
                    let span = enclosing_span(start, end, items.iter());
                    let mut node = YamlNode::sequence(items, span);
                    if let Some(tag) = tag {
                        node = node.with_tag(tag);
                    }
                    self.attach(node)?;
                }
                _ => bail!("unbalanced sequence end at offset {start}"),
            },
            Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Mapping {
                    start,
                    tag,
                    entries,
                    pending_key,
                }) => {
                    if pending_key.is_some() {
                        bail!("mapping ending at offset {start} has a key without a value");
                    }
                    let children = entries.iter().flat_map(|(k, v)| [k, v]);
                    let span = enclosing_span(start, end, children);
                    let mut node = YamlNode::mapping(entries, span);
                    if let Some(tag) = tag {
                        node = node.with_tag(tag);
                    }
                    self.attach(node)?;
                }
                _ => bail!("unbalanced mapping end at offset {start}"),
            },
            _ => {}
        }
        Ok(())
    }

    /// Hands a finished node to the innermost open collection, or makes it
    /// the document root.
    fn attach(&mut self, node: YamlNode) -> Result<()> {
        match self.stack.last_mut() {
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                Some(key) => entries.push((key, node)),
                None => *pending_key = Some(node),
            },
            None => {
                if self.root.is_some() {
                    bail!("document has more than one root node");
                }
                self.root = Some(node);
            }
        }
        Ok(())
    }
}

/// Span from `start` to `end`, widened so it encloses every child.
fn enclosing_span<'n>(
    start: usize,
    end: usize,
    children: impl Iterator<Item = &'n YamlNode>,
) -> TextSpan {
    children.fold(TextSpan::new(start, end.max(start)), |span, child| {
        TextSpan::new(span.start.min(child.start()), span.end.max(child.end()))
    })
}

/// Short name for a tag: core schema tags lose their prefix.
fn tag_name(handle: &str, suffix: &str) -> String {
    match handle {
        "!!" | "tag:yaml.org,2002:" => suffix.to_string(),
        _ => format!("{handle}{suffix}"),
    }
}

/// Resolves the tag of an untagged plain scalar.
fn resolve_plain_tag(value: &str) -> &'static str {
    match value {
        "" | "~" | "null" | "Null" | "NULL" => "null",
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => "bool",
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" | "-.inf" | "-.Inf" | "-.INF"
        | ".nan" | ".NaN" | ".NAN" => "float",
        _ if is_int(value) => "int",
        _ if is_float(value) => "float",
        _ => "str",
    }
}

fn is_int(value: &str) -> bool {
    let digits = value.strip_prefix(&['-', '+'][..]).unwrap_or(value);
    if let Some(hex) = digits.strip_prefix("0x") {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(oct) = digits.strip_prefix("0o") {
        return !oct.is_empty() && oct.chars().all(|c| matches!(c, '0'..='7'));
    }
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_float(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && value.parse::<f64>().is_ok()
}

/// Parses a YAML string into a `YamlTree`.
///
/// The stream must hold exactly one document. Spans are character offsets
/// into `yaml_str`.
///
/// # Errors
///
/// Returns an error if:
/// - The input is not valid YAML
/// - The input contains no document node
/// - The input contains more than one document
///
/// # Example
///
/// ```
/// use yamlselect::document::parser::parse_yaml;
///
/// let tree = parse_yaml("[1, 2, 3]").unwrap();
/// assert_eq!(tree.root().tag(), "seq");
///
/// assert!(parse_yaml("key: [unclosed").is_err());
/// ```
pub fn parse_yaml(yaml_str: &str) -> Result<YamlTree> {
    let mut composer = Composer::new(yaml_str);

    for result in Parser::new_from_str(yaml_str) {
        let (event, span) = result.context("Failed to parse YAML")?;
        composer.on_event(event, span)?;
    }

    if !composer.stack.is_empty() {
        bail!("YAML stream ended inside an open collection");
    }
    let root = composer
        .root
        .context("YAML input does not contain a document")?;

    log::debug!("composed {} root spanning {}", root.tag(), root.span());

    Ok(YamlTree::with_source(root, yaml_str.to_string()))
}
