use generational_arena::Arena;
pub use generational_arena::Index;
use tracing::instrument;

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode<R> {
    /// Caller-supplied record carried by this node
    pub record: R,
    /// Index of the parent node in the arena, None for top-level nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena
    pub children: Vec<Index>,
}

/// Arena-based tree structure for hierarchy storage.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups. One arena holds every record of one build, whether or not a
/// record ended up reachable from a top-level node.
#[derive(Debug)]
pub struct TreeArena<R> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<R>>,
    /// Indices of top-level nodes
    roots: Vec<Index>,
}

impl<R> Default for TreeArena<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> TreeArena<R> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    /// Inserts a node. With a parent, the node is appended to that parent's
    /// child list; without one it joins the top level.
    #[instrument(level = "trace", skip(self, record))]
    pub fn insert_node(&mut self, record: R, parent: Option<Index>) -> Index {
        let node = TreeNode {
            record,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.roots.push(node_idx);
        }

        node_idx
    }

    /// Replaces `parent`'s child list.
    ///
    /// The new children are re-parented and leave the top level; children of
    /// a previous list that are not in the new one become top-level nodes
    /// again. Side effect only.
    #[instrument(level = "trace", skip(self))]
    pub fn set_children(&mut self, parent: Index, children: Vec<Index>) {
        let old = match self.arena.get_mut(parent) {
            Some(node) => std::mem::replace(&mut node.children, children.clone()),
            None => return,
        };
        for idx in old {
            if !children.contains(&idx) {
                if let Some(node) = self.arena.get_mut(idx) {
                    node.parent = None;
                    self.roots.push(idx);
                }
            }
        }
        for idx in children {
            self.roots.retain(|&root| root != idx);
            if let Some(node) = self.arena.get_mut(idx) {
                node.parent = Some(parent);
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<R>> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<R>> {
        self.arena.get_mut(idx)
    }

    /// Top-level nodes in result order.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    /// The single top-level node, when the arena holds exactly one.
    pub fn root(&self) -> Option<Index> {
        match self.roots.as_slice() {
            [root] => Some(*root),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Overwrites the top-level ordering after linkage.
    pub(crate) fn set_roots(&mut self, roots: Vec<Index>) {
        self.roots = roots;
    }
}
