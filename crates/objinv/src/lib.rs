//! Sphinx objects inventory (`objects.inv`) generation.
//!
//! Turns a forest of documented Python objects into the version 2 inventory
//! format that Sphinx's intersphinx extension consumes, so other projects
//! can link to the documented symbols.
//!
//! # Architecture
//!
//! - **DocumentedObject**: the capability set the writer needs from a node
//! - **DocTree**: arena-backed forest implementing `DocumentedObject`
//! - **InventoryWriter**: header, per-object lines, zlib-compressed body
//! - **InventoryReader**: parses an inventory back into entries
//! - **Manifest**: JSON description of a forest, for tools and tests

pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod manifest;
pub mod object;
pub mod reader;
pub mod tree;
pub mod writer;

pub use config::InventoryConfig;
pub use entry::{InventoryEntry, ObjectKind};
pub use error::{InventoryError, InventoryResult};
pub use logger::{InventoryLogger, TracingLogger};
pub use manifest::{Manifest, ManifestObject};
pub use object::DocumentedObject;
pub use reader::InventoryReader;
pub use tree::{DocTree, NodeId, NodeRef};
pub use writer::{
    InventoryFile, InventoryWriter, INVENTORY_FILE_NAME, INVENTORY_VERSION, LOG_FACILITY,
};
