//! Retained record of a search, for diagnostics and visualization.

use super::cell::Cell;
use crate::error::{PoleError, Result};
use num_traits::Float;

/// Index of a node within a [`SearchTree`].
pub type NodeId = usize;

/// A cell of the search together with links to its children, if it was
/// subdivided.
#[derive(Debug, Clone)]
pub struct TreeNode<F> {
    cell: Cell<F>,
    children: Option<[NodeId; 4]>,
}

impl<F: Float> TreeNode<F> {
    /// Cell stored at this node.
    #[inline]
    pub fn cell(&self) -> &Cell<F> {
        &self.cell
    }

    /// Child ids in [`Quadrant::ALL`](super::Quadrant::ALL) order.
    #[inline]
    pub fn children(&self) -> Option<[NodeId; 4]> {
        self.children
    }

    /// Returns `true` if the cell was never subdivided.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Every cell a search evaluated, arranged as the quadtree it grew.
///
/// Nodes live in an arena and link only downward; the root is always
/// [`SearchTree::ROOT`].
#[derive(Debug, Clone)]
pub struct SearchTree<F> {
    nodes: Vec<TreeNode<F>>,
}

impl<F: Float> SearchTree<F> {
    pub const ROOT: NodeId = 0;

    pub(crate) fn new(root: Cell<F>) -> Self {
        Self {
            nodes: vec![TreeNode {
                cell: root,
                children: None,
            }],
        }
    }

    /// Records the subdivision of `parent` into `children`.
    ///
    /// `divided` is the parent cell after its subdivision, replacing the
    /// snapshot stored when it was first recorded.
    pub(crate) fn attach(
        &mut self,
        parent: NodeId,
        divided: &Cell<F>,
        children: &[Cell<F>; 4],
    ) -> Result<[NodeId; 4]> {
        let first = self.nodes.len();
        let node = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| PoleError::InvariantViolation(format!("no tree node {parent}")))?;

        if node.children.is_some() {
            return Err(PoleError::InvariantViolation(format!(
                "tree node {parent} attached twice"
            )));
        }

        let ids = [first, first + 1, first + 2, first + 3];
        node.cell = divided.clone();
        node.children = Some(ids);

        self.nodes.extend(children.iter().map(|cell| TreeNode {
            cell: cell.clone(),
            children: None,
        }));

        Ok(ids)
    }

    /// The root node, covering the whole bounding square.
    #[inline]
    pub fn root(&self) -> &TreeNode<F> {
        &self.nodes[Self::ROOT]
    }

    /// Node with the given id, if any.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<F>> {
        self.nodes.get(id)
    }

    /// Children of `id`, or `None` for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> Option<[&TreeNode<F>; 4]> {
        let ids = self.node(id)?.children?;
        Some(ids.map(|child| &self.nodes[child]))
    }

    /// Number of cells evaluated.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels, counting the root as one.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level = vec![Self::ROOT];

        while !level.is_empty() {
            depth += 1;
            level = level
                .iter()
                .filter_map(|&id| self.nodes[id].children)
                .flatten()
                .collect();
        }

        depth
    }

    /// Pre-order traversal starting at the root.
    pub fn iter(&self) -> Iter<'_, F> {
        Iter {
            tree: self,
            stack: vec![Self::ROOT],
        }
    }

    /// Cells that were never subdivided.
    pub fn leaves(&self) -> impl Iterator<Item = &Cell<F>> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.is_leaf())
            .map(TreeNode::cell)
    }
}

/// Pre-order iterator over a [`SearchTree`].
pub struct Iter<'a, F> {
    tree: &'a SearchTree<F>,
    stack: Vec<NodeId>,
}

impl<'a, F: Float> Iterator for Iter<'a, F> {
    type Item = &'a TreeNode<F>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        if let Some(children) = node.children {
            // Reverse so the first quadrant is visited first.
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

impl<'a, F: Float> IntoIterator for &'a SearchTree<F> {
    type Item = &'a TreeNode<F>;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
