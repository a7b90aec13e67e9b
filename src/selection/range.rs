//! Selection range resolution.
//!
//! This is the entry point editors call: given a cursor or a selection,
//! return the span of the node that best represents it.
//!
//! # Example
//!
//! ```
//! use yamlselect::selection::range::{resolve_range, ResolveOptions};
//!
//! let doc = "server:\n  host: example.org\n  port: 8080\n";
//! let host = doc.find("example").unwrap();
//! let port = doc.find("8080").unwrap();
//!
//! let span = resolve_range(doc, host, None, &ResolveOptions::default()).unwrap();
//! assert_eq!(span.slice(doc), "example.org");
//!
//! let span = resolve_range(doc, host, Some(port), &ResolveOptions::default()).unwrap();
//! assert_eq!(span.start, doc.find("host").unwrap());
//! ```

use anyhow::Result;

use super::error::SelectionError;
use super::lca::{lca_traced, LcaOptions};
use super::locate::{Direction, Locator, DEFAULT_MAX_DEPTH};
use crate::config::Config;
use crate::document::node::TextSpan;
use crate::document::parser::parse_yaml;
use crate::document::tree::YamlTree;

/// Options controlling how a selection is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Widen a bare first key to the mapping it belongs to
    pub extend_keys: bool,
    /// Log the paths compared during resolution
    pub debug: bool,
    /// Deepest nesting a search may descend into
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extend_keys: false,
            debug: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&Config> for ResolveOptions {
    fn from(config: &Config) -> Self {
        Self {
            extend_keys: config.extend_keys,
            debug: false,
            max_depth: config.max_depth,
        }
    }
}

/// Parses `document` and resolves `begin..=end` (or just `begin`) to the
/// span of the enclosing node.
///
/// # Errors
///
/// Parser errors are returned as they are. Resolution failures are
/// [`SelectionError`]s and can be recovered with `downcast_ref`.
pub fn resolve_range(
    document: &str,
    begin: usize,
    end: Option<usize>,
    options: &ResolveOptions,
) -> Result<TextSpan> {
    let tree = parse_yaml(document)?;
    Ok(resolve_in_tree(&tree, begin, end, options)?)
}

/// Resolves a selection against an already composed tree.
///
/// A single offset (or `begin == end`) resolves to the most specific node
/// found by a forward search; two offsets resolve to their lowest common
/// ancestor.
pub fn resolve_in_tree(
    tree: &YamlTree,
    begin: usize,
    end: Option<usize>,
    options: &ResolveOptions,
) -> Result<TextSpan, SelectionError> {
    let length = tree.document_length();
    check_bounds(begin, length)?;

    let end = match end {
        Some(end) if end != begin => end,
        _ => return resolve_at(tree, begin, Direction::Forward, options),
    };
    check_bounds(end, length)?;

    let lca_options = LcaOptions {
        extend_keys: options.extend_keys,
        max_depth: options.max_depth,
    };
    let (node, trace) = lca_traced(tree.root(), begin, end, length, lca_options)?;
    if options.debug {
        log::debug!("begin path: {}", trace.begin);
        log::debug!("end path: {}", trace.end);
    }
    log::debug!("selection {}..{} resolved to {}", begin, end, node.span());

    Ok(node.span())
}

/// Resolves a single offset, scanning out of gaps in `direction`.
pub fn resolve_at(
    tree: &YamlTree,
    offset: usize,
    direction: Direction,
    options: &ResolveOptions,
) -> Result<TextSpan, SelectionError> {
    check_bounds(offset, tree.document_length())?;

    let locator = match direction {
        Direction::Forward => Locator::forward(tree.document_length()),
        Direction::Backward => Locator::backward(),
    }
    .with_max_depth(options.max_depth);

    let path = locator.path(tree.root(), offset)?;
    if options.debug {
        log::debug!("{} path: {}", locator.direction(), path.trace());
    }
    let path = if options.extend_keys {
        path.extend_keys()
    } else {
        path
    };
    log::debug!("offset {} resolved to {}", offset, path.leaf().span());

    Ok(path.leaf().span())
}

fn check_bounds(offset: usize, length: usize) -> Result<(), SelectionError> {
    if offset > length {
        return Err(SelectionError::OffsetOutOfBounds { offset, length });
    }
    Ok(())
}
