//! Error types for selection resolution.

use std::fmt;

use super::locate::Direction;

/// Errors that can occur while resolving offsets to nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Directional scanning ran into its limit without reaching a node.
    OffsetNotLocatable { offset: usize, direction: Direction },
    /// The two paths share no node. Both paths end at the root, so this
    /// means the tree and offsets disagree about the document.
    NoCommonAncestor { begin: usize, end: usize },
    /// The document nests deeper than the configured limit.
    DepthLimitExceeded { limit: usize },
    /// An offset lies beyond the end of the document.
    OffsetOutOfBounds { offset: usize, length: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::OffsetNotLocatable { offset, direction } => write!(
                f,
                "Offset {} is not in any node (searched {})",
                offset, direction
            ),
            SelectionError::NoCommonAncestor { begin, end } => write!(
                f,
                "No common ancestor between offsets {} and {}; tree does not match the document",
                begin, end
            ),
            SelectionError::DepthLimitExceeded { limit } => {
                write!(f, "Document nesting exceeds the depth limit of {}", limit)
            }
            SelectionError::OffsetOutOfBounds { offset, length } => write!(
                f,
                "Offset {} is outside the document (length {})",
                offset, length
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SelectionError::OffsetNotLocatable {
            offset: 12,
            direction: Direction::Backward,
        };
        assert_eq!(
            err.to_string(),
            "Offset 12 is not in any node (searched backward)"
        );

        let err = SelectionError::OffsetOutOfBounds {
            offset: 50,
            length: 40,
        };
        assert_eq!(
            err.to_string(),
            "Offset 50 is outside the document (length 40)"
        );
    }
}
