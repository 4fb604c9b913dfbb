//! Arena-backed tree for query evaluation.
//!
//! `Tree` stores every node in a flat vector and links them by [`NodeId`].
//! Children lists are plain edge lists, so [`Tree::link`] can add extra
//! edges (including ones pointing back at an ancestor) to model graphs
//! that are not strictly trees.
//!
//! # Example
//!
//! ```
//! use treequery::document::tree::Tree;
//! use treequery::document::node::TreeNode;
//!
//! let mut tree = Tree::new("");
//! let a = tree.add_child(tree.root_id(), "a");
//! let b = tree.add_child(a, "b");
//!
//! // b -> a makes a cycle
//! tree.link(b, a);
//!
//! let root = tree.root();
//! assert_eq!(root.children().len(), 1);
//! assert_eq!(tree.node(b).unwrap().path(), "/a/b");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::node::TreeNode;

/// Index of a node within its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct NodeData {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A named tree stored in an arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    /// Creates a tree holding only a root with the given name.
    ///
    /// Use an empty name for an anonymous root that contributes nothing to
    /// node paths.
    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![NodeData {
                name: root_name.to_string(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Returns the id of the root node.
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns a handle to the root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.root_id(),
        }
    }

    /// Returns a handle to the node with the given id, if it exists.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        if id.0 < self.nodes.len() {
            Some(NodeRef { tree: self, id })
        } else {
            None
        }
    }

    /// Appends a new child named `name` under `parent` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "parent {:?} is not in this tree", parent);
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name: name.to_string(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Adds `child` to the children of `parent` without changing the
    /// child's own parent.
    ///
    /// Returns false if either id is not in this tree.
    pub fn link(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return false;
        }
        self.nodes[parent.0].children.push(child);
        true
    }

    /// Replaces the parent of `node`, which may create a loop in parent
    /// links. Returns false if either id is not in this tree.
    pub fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> bool {
        if node.0 >= self.nodes.len() || parent.is_some_and(|p| p.0 >= self.nodes.len()) {
            return false;
        }
        self.nodes[node.0].parent = parent;
        true
    }

    /// Finds the first node (in id order) whose path equals `path`.
    pub fn find_path(&self, path: &str) -> Option<NodeRef<'_>> {
        let wanted: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        (0..self.nodes.len())
            .map(|i| NodeRef {
                tree: self,
                id: NodeId(i),
            })
            .find(|node| node.path_segments() == wanted)
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always has a root, so this only returns false.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A cheap, copyable handle to one node of a [`Tree`].
///
/// Two handles are equal when they point at the same node of the same tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Returns the node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tree this node belongs to.
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// Borrows the node's name without allocating.
    pub fn name_str(&self) -> &'a str {
        &self.tree.nodes[self.id.0].name
    }

    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl Hash for NodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.name_str())
            .finish()
    }
}

impl TreeNode for NodeRef<'_> {
    fn name(&self) -> String {
        self.name_str().to_string()
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    fn children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&id| NodeRef {
                tree: self.tree,
                id,
            })
            .collect()
    }
}
