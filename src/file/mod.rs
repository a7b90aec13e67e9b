//! Input for YAML documents.
//!
//! This module reads document text from disk or stdin, transparently
//! decompressing gzip input.

pub mod loader;
