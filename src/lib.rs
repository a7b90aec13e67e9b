//! YAMLSelect resolves text selections in YAML documents to the nodes that
//! enclose them, the engine behind "expand selection" in editors.

pub mod config;
pub mod document;
pub mod file;
pub mod selection;
