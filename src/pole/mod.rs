//! Pole of inaccessibility search.
//!
//! The pole is the interior point farthest from every boundary of a polygon,
//! holes included. It is approximated by branch-and-bound over a quadtree:
//! each square [`Cell`] bounds the best distance reachable inside it by
//! `distance + half-diagonal`, which holds because the polygon's signed
//! distance is 1-Lipschitz. Cells whose bound cannot beat the current best by
//! more than the precision are discarded; the rest are split in four.
//!
//! # Example
//!
//! ```
//! use visual_center::{find_pole_with, PoleOptions, Polygon, QueueOrder};
//!
//! let polygon: Polygon<f64> =
//!     Polygon::new(vec![[0.0, 0.0], [120.0, 0.0], [120.0, 40.0], [0.0, 40.0]]).unwrap();
//!
//! let options = PoleOptions::with_precision(0.5)
//!     .with_order(QueueOrder::Fifo)
//!     .with_tree(true);
//! let report = find_pole_with(&polygon, &options).unwrap();
//!
//! assert!(report.pole.distance >= 19.5);
//! assert_eq!(report.tree.unwrap().len(), report.stats.cells_evaluated);
//! ```

mod cell;
#[cfg(feature = "parallel")]
mod parallel;
mod queue;
mod search;
mod tree;

pub use cell::{Cell, Quadrant};
#[cfg(feature = "parallel")]
pub use parallel::find_pole_parallel;
pub use search::{find_pole, find_pole_with};
pub use tree::{Iter, NodeId, SearchTree, TreeNode};

use crate::error::{PoleError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// Order in which pending cells are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueueOrder {
    /// Most promising cell (largest upper bound) first. Tightens the best
    /// candidate early and prunes the most.
    #[default]
    BestFirst,
    /// Breadth-first, in insertion order.
    Fifo,
}

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoleOptions<F> {
    /// Tolerance on the reported distance; must be positive and finite.
    pub precision: F,
    /// Traversal order of the work queue.
    pub order: QueueOrder,
    /// Keep every evaluated cell as a [`SearchTree`] in the report.
    pub retain_tree: bool,
    /// Abort once more than this many cells have been evaluated.
    pub max_cells: Option<usize>,
}

impl<F: Float> Default for PoleOptions<F> {
    fn default() -> Self {
        Self {
            precision: F::one(),
            order: QueueOrder::default(),
            retain_tree: false,
            max_cells: None,
        }
    }
}

impl<F: Float> PoleOptions<F> {
    /// Creates options with the specified precision.
    pub fn with_precision(precision: F) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: QueueOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_tree(mut self, retain: bool) -> Self {
        self.retain_tree = retain;
        self
    }

    pub fn with_max_cells(mut self, limit: usize) -> Self {
        self.max_cells = Some(limit);
        self
    }

    /// Checks the options before a search starts.
    ///
    /// # Errors
    ///
    /// [`PoleError::InvalidConfig`] if `precision` is not positive and finite,
    /// or `max_cells` is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.precision > F::zero() && self.precision.is_finite()) {
            return Err(PoleError::InvalidConfig(
                "precision must be positive and finite".into(),
            ));
        }
        if self.max_cells == Some(0) {
            return Err(PoleError::InvalidConfig(
                "max_cells must allow at least the root cell".into(),
            ));
        }
        Ok(())
    }
}

/// Approximate pole: the best cell center found and its distance to the
/// nearest boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pole<F> {
    pub point: Point2<F>,
    pub distance: F,
}

impl<F: Float> Pole<F> {
    fn from_cell(cell: &Cell<F>) -> Self {
        Self {
            point: cell.center(),
            distance: cell.distance(),
        }
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats<F> {
    /// Cells whose center was evaluated, root included.
    pub cells_evaluated: usize,
    /// Cells discarded by the bound.
    pub cells_pruned: usize,
    pub cells_subdivided: usize,
    /// Every accepted best distance, starting with the root's.
    pub improvements: Vec<F>,
}

impl<F: Float> SearchStats<F> {
    fn new(root_distance: F) -> Self {
        Self {
            cells_evaluated: 1,
            cells_pruned: 0,
            cells_subdivided: 0,
            improvements: vec![root_distance],
        }
    }
}

/// Full outcome of [`find_pole_with`].
#[derive(Debug, Clone)]
pub struct PoleReport<F> {
    pub pole: Pole<F>,
    pub stats: SearchStats<F>,
    /// Present when [`PoleOptions::retain_tree`] was set.
    pub tree: Option<SearchTree<F>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options: PoleOptions<f64> = PoleOptions::default();
        assert_eq!(options.precision, 1.0);
        assert_eq!(options.order, QueueOrder::BestFirst);
        assert!(!options.retain_tree);
        assert_eq!(options.max_cells, None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = PoleOptions::with_precision(0.25_f32)
            .with_order(QueueOrder::Fifo)
            .with_tree(true)
            .with_max_cells(1000);
        assert_eq!(options.precision, 0.25);
        assert_eq!(options.order, QueueOrder::Fifo);
        assert!(options.retain_tree);
        assert_eq!(options.max_cells, Some(1000));
    }

    #[test]
    fn test_validate() {
        let bad = PoleOptions::with_precision(-0.5_f64).validate();
        assert!(matches!(bad, Err(PoleError::InvalidConfig(_))));

        let bad = PoleOptions::with_precision(1.0_f64)
            .with_max_cells(0)
            .validate();
        assert!(matches!(bad, Err(PoleError::InvalidConfig(_))));
    }
}
