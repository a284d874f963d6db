//! JSON description of a documented object forest.
//!
//! ```json
//! {
//!   "project": "Test",
//!   "objects": [
//!     { "kind": "module", "name": "pkg", "contents": [
//!       { "kind": "function", "name": "f" }
//!     ] }
//!   ]
//! }
//! ```
//!
//! `kind` may be omitted; such objects are written with the fallback role.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::tree::{DocTree, NodeId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Optional project name; callers decide whether it overrides config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub objects: Vec<ManifestObject>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<ManifestObject>,
}

impl Manifest {
    pub fn from_json_str(s: &str) -> InventoryResult<Self> {
        serde_json::from_str(s).map_err(|e| InventoryError::Manifest(e.to_string()))
    }

    pub fn load(path: &Path) -> InventoryResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Build the arena tree, keeping the manifest's sibling order.
    pub fn to_tree(&self) -> DocTree {
        let mut tree = DocTree::new();
        let mut pending: Vec<(Option<NodeId>, &ManifestObject)> =
            self.objects.iter().rev().map(|obj| (None, obj)).collect();

        while let Some((parent, obj)) = pending.pop() {
            let kind = obj.kind.as_deref();
            let id = match parent {
                Some(parent) => tree.add_child(parent, kind, &obj.name),
                None => tree.add_root(kind, &obj.name),
            };
            pending.extend(obj.contents.iter().rev().map(|child| (Some(id), child)));
        }
        tree
    }
}
