//! Composed YAML documents: nodes with source spans, the tree that owns
//! them, and the parser adapter that builds it.

pub mod node;
pub mod parser;
pub mod tree;
