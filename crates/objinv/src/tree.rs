//! Arena-backed object tree.
//!
//! [`DocTree`] owns every node; children are listed by [`NodeId`] on their
//! parent and the parent link is a plain index, so there are no reference
//! cycles and no shared ownership.

use std::borrow::Cow;
use std::fmt;

use crate::object::DocumentedObject;

/// Index of a node inside a [`DocTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct DocNode {
    kind: Option<String>,
    name: String,
    full_name: String,
    parent: Option<NodeId>,
    contents: Vec<NodeId>,
}

/// A forest of documented objects.
#[derive(Clone, Debug, Default)]
pub struct DocTree {
    nodes: Vec<DocNode>,
    roots: Vec<NodeId>,
}

impl DocTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level object. Its full name is its local name.
    pub fn add_root(&mut self, kind: Option<&str>, name: &str) -> NodeId {
        let id = self.push(kind, name, name.to_owned(), None);
        self.roots.push(id);
        id
    }

    /// Append a child to `parent`'s contents. The full name is
    /// `<parent full name>.<name>`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn add_child(&mut self, parent: NodeId, kind: Option<&str>, name: &str) -> NodeId {
        let full_name = format!("{}.{}", self.nodes[parent.0].full_name, name);
        let id = self.push(kind, name, full_name, Some(parent));
        self.nodes[parent.0].contents.push(id);
        id
    }

    fn push(
        &mut self,
        kind: Option<&str>,
        name: &str,
        full_name: String,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DocNode {
            kind: kind.map(str::to_owned),
            name: name.to_owned(),
            full_name,
            parent,
            contents: Vec::new(),
        });
        id
    }

    /// Handles to the top-level objects, in insertion order.
    pub fn roots(&self) -> Vec<NodeRef<'_>> {
        self.roots.iter().map(|&id| NodeRef { tree: self, id }).collect()
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Total number of nodes, at any depth.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Borrowed handle to one node of a [`DocTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a DocTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn node(&self) -> &'a DocNode {
        &self.tree.nodes[self.id.0]
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("full_name", &self.node().full_name)
            .field("kind", &self.node().kind)
            .finish()
    }
}

impl DocumentedObject for NodeRef<'_> {
    fn kind(&self) -> Option<&str> {
        self.node().kind.as_deref()
    }

    fn name(&self) -> &str {
        &self.node().name
    }

    fn full_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.node().full_name)
    }

    fn parent(&self) -> Option<Self> {
        self.node().parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    fn ordered_contents(&self) -> Vec<Self> {
        self.node()
            .contents
            .iter()
            .map(|&id| NodeRef {
                tree: self.tree,
                id,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        let tree = DocTree::new();
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
        assert!(tree.get(NodeId(0)).is_none());
    }

    #[test]
    fn full_names_are_dotted() {
        let mut tree = DocTree::new();
        let pkg = tree.add_root(Some("package"), "pkg");
        let module = tree.add_child(pkg, Some("module"), "sub");
        let class = tree.add_child(module, Some("class"), "Thing");

        assert_eq!(tree.get(pkg).unwrap().full_name(), "pkg");
        assert_eq!(tree.get(module).unwrap().full_name(), "pkg.sub");
        assert_eq!(tree.get(class).unwrap().full_name(), "pkg.sub.Thing");
        assert_eq!(tree.get(class).unwrap().name(), "Thing");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn parent_links() {
        let mut tree = DocTree::new();
        let root = tree.add_root(Some("module"), "m");
        let child = tree.add_child(root, Some("function"), "f");

        assert!(tree.get(root).unwrap().parent().is_none());
        let parent = tree.get(child).unwrap().parent().unwrap();
        assert_eq!(parent.id(), root);
    }

    #[test]
    fn contents_keep_insertion_order() {
        let mut tree = DocTree::new();
        let root = tree.add_root(Some("module"), "m");
        let z = tree.add_child(root, Some("function"), "z");
        let a = tree.add_child(root, Some("function"), "a");
        let k = tree.add_child(root, Some("function"), "k");

        let ids: Vec<NodeId> = tree
            .get(root)
            .unwrap()
            .ordered_contents()
            .iter()
            .map(|n| n.id())
            .collect();
        assert_eq!(ids, vec![z, a, k]);
    }

    #[test]
    fn missing_kind() {
        let mut tree = DocTree::new();
        let id = tree.add_root(None, "x");
        assert!(tree.get(id).unwrap().kind().is_none());
    }
}
