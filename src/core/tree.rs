//! Arena-backed doclet tree.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! parent link is an index, so the tree has no reference cycles. Nodes are
//! only ever appended: ids stay valid for the lifetime of the tree, and the
//! children of a node are kept in discovery order.

use serde::{Serialize, Serializer};

use crate::core::doclet::Doclet;

/// Stable index of a node inside a [`DocTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A nesting container, optionally holding a doclet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    doclet: Option<Doclet>,
    parent: Option<NodeId>,
    depth: usize,
    children: Vec<NodeId>,
}

impl Node {
    pub fn doclet(&self) -> Option<&Doclet> {
        self.doclet.as_ref()
    }

    /// Parent node, `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Number of ancestors. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Children in source order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True for nodes created by a scope rather than a comment.
    pub fn is_scope(&self) -> bool {
        self.doclet.is_none() && self.parent.is_some()
    }
}

/// The tree built by one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTree {
    nodes: Vec<Node>,
}

impl Default for DocTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocTree {
    /// Creates a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                doclet: None,
                parent: None,
                depth: 0,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing was attached to the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Returns the node for an id handed out by this tree.
    ///
    /// Panics for ids from another tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn doclet(&self, id: NodeId) -> Option<&Doclet> {
        self.get(id).and_then(Node::doclet)
    }

    pub(crate) fn doclet_mut(&mut self, id: NodeId) -> Option<&mut Doclet> {
        self.nodes.get_mut(id.0).and_then(|node| node.doclet.as_mut())
    }

    /// Appends a new last child to `parent` and returns its id.
    pub fn append(&mut self, parent: NodeId, doclet: Option<Doclet>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(Node {
            doclet,
            parent: Some(parent),
            depth,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The last child of `id`, if any.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.children.last().copied())
    }

    /// Ancestors of `id`, nearest first. Does not include `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).and_then(Node::parent),
        }
    }

    /// All nodes in depth-first pre-order, starting with the root.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// All doclet nodes in source order.
    pub fn doclets(&self) -> impl Iterator<Item = (NodeId, &Doclet)> {
        self.descendants()
            .filter_map(|id| self.doclet(id).map(|doclet| (id, doclet)))
    }
}

pub struct Ancestors<'a> {
    tree: &'a DocTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(Node::parent);
        Some(current)
    }
}

pub struct Descendants<'a> {
    tree: &'a DocTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        if let Some(node) = self.tree.get(current) {
            self.stack.extend(node.children.iter().rev());
        }
        Some(current)
    }
}

// ============================================================
// Serialization
// ============================================================

/// Nested view used for JSON output.
#[derive(Serialize)]
struct NodeView<'a> {
    depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    doclet: Option<&'a Doclet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeView<'a>>,
}

impl<'a> NodeView<'a> {
    fn build(tree: &'a DocTree, id: NodeId) -> Self {
        let node = tree.node(id);
        Self {
            depth: node.depth,
            doclet: node.doclet(),
            children: node
                .children
                .iter()
                .map(|child| Self::build(tree, *child))
                .collect(),
        }
    }
}

impl Serialize for DocTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView::build(self, self.root()).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_tree_has_root() {
        let tree = DocTree::new();
        let root = tree.node(tree.root());

        assert_eq!(tree.len(), 1);
        assert!(tree.is_empty());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.parent(), None);
        assert!(!root.is_scope());
    }

    #[test]
    fn test_append_sets_depth_and_order() {
        let mut tree = DocTree::new();
        let root = tree.root();
        let a = tree.append(root, Some(Doclet::new("* A", "", 2)));
        let b = tree.append(root, None);
        let c = tree.append(b, None);

        assert_eq!(tree.node(root).children(), [a, b]);
        assert_eq!(tree.node(c).depth(), 2);
        assert_eq!(tree.node(c).parent(), Some(b));
        assert_eq!(tree.last_child(root), Some(b));
        assert!(tree.node(b).is_scope());
        assert_eq!(tree.ancestors(c).collect::<Vec<_>>(), vec![b, root]);
    }

    #[test]
    fn test_descendants_pre_order() {
        let mut tree = DocTree::new();
        let root = tree.root();
        let a = tree.append(root, None);
        let a1 = tree.append(a, None);
        let b = tree.append(root, None);
        let a2 = tree.append(a, None);

        assert_eq!(
            tree.descendants().collect::<Vec<_>>(),
            vec![root, a, a1, a2, b]
        );
    }

    #[test]
    fn test_serialize_nested() {
        let mut tree = DocTree::new();
        let root = tree.root();
        let doc = tree.append(root, Some(Doclet::new("* Text", "let a;", 2)));
        tree.append(doc, None);

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "depth": 0,
                "children": [{
                    "depth": 1,
                    "doclet": {
                        "comment": "* Text",
                        "sections": ["Text"],
                        "code": "let a;",
                        "codeLine": 2,
                        "codeName": null
                    },
                    "children": [{ "depth": 2 }]
                }]
            })
        );
    }
}
