//! Skeleton node arena
//!
//! The host scene graph is mirrored as a flat arena of named nodes with
//! parent/child relations stored as indices, so the tree carries no owning
//! back-references. The build pipeline only reads poses; mutation happens
//! through the explicit setters the host drives between ticks.

use hashbrown::HashMap;

use glam::{Quat, Vec3};

use crate::space::Transform;

/// Stable index of a node within its [`Skeleton`] arena
pub type NodeIndex = usize;

/// One node of the skeleton tree
#[derive(Debug, Clone)]
pub struct SkeletonNode {
    pub name: String,
    /// World-space pose
    pub transform: Transform,
    pub parent: Option<NodeIndex>,
    /// Children in their creation order
    pub children: Vec<NodeIndex>,
}

/// Tree of named, transform-bearing nodes addressed by index
///
/// Node 0 is always the root. Names are expected to be unique; when they are
/// not, lookups resolve to the first match in preorder depth-first order and
/// anything beyond that is undefined input.
#[derive(Debug, Clone)]
pub struct Skeleton {
    nodes: Vec<SkeletonNode>,
}

impl Skeleton {
    /// Create a skeleton containing only a root node
    pub fn with_root(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            nodes: vec![SkeletonNode {
                name: name.into(),
                transform,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Append a child node under `parent`, returning its index
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn add_node(
        &mut self,
        parent: NodeIndex,
        name: impl Into<String>,
        transform: Transform,
    ) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(SkeletonNode {
            name: name.into(),
            transform,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(index);
        index
    }

    pub fn root(&self) -> NodeIndex {
        0
    }

    pub fn node(&self, index: NodeIndex) -> &SkeletonNode {
        &self.nodes[index]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Replace a node's world pose
    pub fn set_transform(&mut self, index: NodeIndex, transform: Transform) {
        self.nodes[index].transform = transform;
    }

    pub fn set_position(&mut self, index: NodeIndex, position: Vec3) {
        self.nodes[index].transform.position = position;
    }

    pub fn set_rotation(&mut self, index: NodeIndex, rotation: Quat) {
        self.nodes[index].transform.rotation = rotation;
    }

    pub fn set_scale(&mut self, index: NodeIndex, scale: Vec3) {
        self.nodes[index].transform.scale = scale;
    }

    /// Find a node by exact name, preorder depth-first from the root
    ///
    /// First match wins when names are duplicated.
    pub fn find_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.find_in_subtree(self.root(), name)
    }

    fn find_in_subtree(&self, index: NodeIndex, name: &str) -> Option<NodeIndex> {
        if self.nodes[index].name == name {
            return Some(index);
        }
        for &child in &self.nodes[index].children {
            if let Some(found) = self.find_in_subtree(child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Build a name → index map for a build pass
    ///
    /// Inserts in preorder and keeps only the first occurrence of each name,
    /// so lookups agree with [`find_by_name`](Self::find_by_name).
    pub fn name_index(&self) -> HashMap<&str, NodeIndex> {
        let mut map = HashMap::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(index) = stack.pop() {
            map.entry(self.nodes[index].name.as_str()).or_insert(index);
            // Reverse so the leftmost child is visited first
            for &child in self.nodes[index].children.iter().rev() {
                stack.push(child);
            }
        }
        map
    }
}
