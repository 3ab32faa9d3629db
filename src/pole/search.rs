//! Branch-and-bound search for the pole of inaccessibility.

use super::cell::Cell;
use super::queue::CellQueue;
use super::tree::SearchTree;
use super::{Pole, PoleOptions, PoleReport, SearchStats};
use crate::error::{PoleError, Result};
use crate::polygon::Polygon;
use num_traits::Float;
use std::fmt::Debug;

/// Finds the pole of `polygon` to within `precision`, best-first.
///
/// # Errors
///
/// [`PoleError::InvalidConfig`] if `precision` is not a positive, finite
/// number.
///
/// # Example
///
/// ```
/// use visual_center::{find_pole, Polygon};
///
/// let polygon: Polygon<f64> = Polygon::with_holes(
///     vec![[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]],
///     vec![vec![[0.0, 25.0], [50.0, 25.0], [50.0, 75.0], [0.0, 75.0]]],
/// )
/// .unwrap();
///
/// let pole = find_pole(&polygon, 1.0).unwrap();
/// assert!(pole.distance > 24.0 && pole.distance <= 25.0 + 1e-9);
/// assert!(pole.point.x > 50.0);
/// ```
pub fn find_pole<F: Float + Debug>(polygon: &Polygon<F>, precision: F) -> Result<Pole<F>> {
    find_pole_with(polygon, &PoleOptions::with_precision(precision)).map(|report| report.pole)
}

/// Runs the search with full control over ordering, tree retention and the
/// cell cap, returning the pole along with search statistics.
///
/// The run is deterministic: the same polygon and options always produce the
/// same report.
///
/// # Errors
///
/// - [`PoleError::InvalidConfig`] for out-of-range options, before any work.
/// - [`PoleError::SearchLimitExceeded`] once more than `max_cells` cells have
///   been evaluated.
/// - [`PoleError::InvariantViolation`] if a cell is subdivided twice.
pub fn find_pole_with<F: Float + Debug>(
    polygon: &Polygon<F>,
    options: &PoleOptions<F>,
) -> Result<PoleReport<F>> {
    options.validate()?;

    let root = root_cell(polygon, options.precision);
    log::debug!(
        "pole search: root {:?} size {:?} distance {:?}, {:?} order, precision {:?}",
        root.center(),
        root.size(),
        root.distance(),
        options.order,
        options.precision
    );

    let mut best = Pole::from_cell(&root);
    let mut stats = SearchStats::new(best.distance);
    let mut tree = options.retain_tree.then(|| SearchTree::new(root.clone()));
    let mut queue = CellQueue::new(options.order);
    queue.push(root, tree.as_ref().map(|_| SearchTree::<F>::ROOT));

    while let Some(entry) = queue.pop() {
        let mut cell = entry.cell;

        if !cell.can_improve(best.distance) {
            stats.cells_pruned += 1;
            continue;
        }

        if cell.distance() > best.distance {
            best = Pole::from_cell(&cell);
            stats.improvements.push(best.distance);
            log::trace!(
                "new best {:?} at {:?} ({} cells queued)",
                best.distance,
                best.point,
                queue.len()
            );
        }

        let children = cell.subdivide(polygon)?;
        stats.cells_subdivided += 1;
        stats.cells_evaluated += children.len();
        check_limit(options, stats.cells_evaluated)?;

        let ids = match (tree.as_mut(), entry.node) {
            (Some(tree), Some(node)) => Some(tree.attach(node, &cell, &children)?),
            _ => None,
        };
        for (i, child) in children.into_iter().enumerate() {
            queue.push(child, ids.map(|ids| ids[i]));
        }
    }

    log::debug!(
        "pole {:?} distance {:?}: {} cells evaluated, {} pruned",
        best.point,
        best.distance,
        stats.cells_evaluated,
        stats.cells_pruned
    );

    Ok(PoleReport {
        pole: best,
        stats,
        tree,
    })
}

/// Square covering the shell's bounding box, centered on its center.
pub(crate) fn root_cell<F: Float>(polygon: &Polygon<F>, precision: F) -> Cell<F> {
    let size = polygon.bounds().longest_side();
    Cell::new(polygon, polygon.centroid(), size, precision)
}

pub(crate) fn check_limit<F: Float>(options: &PoleOptions<F>, evaluated: usize) -> Result<()> {
    match options.max_cells {
        Some(limit) if evaluated > limit => {
            log::warn!("pole search exceeded its cap of {limit} cells");
            Err(PoleError::SearchLimitExceeded { cells: evaluated })
        }
        _ => Ok(()),
    }
}

impl<F: Float + Debug> Polygon<F> {
    /// Shorthand for [`find_pole`] on this polygon.
    pub fn pole(&self, precision: F) -> Result<Pole<F>> {
        find_pole(self, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pole::QueueOrder;
    use crate::primitives::Point2;
    use approx::assert_relative_eq;

    fn rectangle(w: f64, h: f64) -> Polygon<f64> {
        Polygon::new(vec![[0.0, 0.0], [w, 0.0], [w, h], [0.0, h]]).unwrap()
    }

    #[test]
    fn test_square_pole_is_center() {
        let pole = find_pole(&rectangle(100.0, 100.0), 1.0).unwrap();
        assert_eq!(pole.point, Point2::new(50.0, 50.0));
        assert_relative_eq!(pole.distance, 50.0);
    }

    #[test]
    fn test_wide_rectangle() {
        let polygon = rectangle(200.0, 40.0);
        for order in [QueueOrder::Fifo, QueueOrder::BestFirst] {
            let options = PoleOptions::with_precision(0.5).with_order(order);
            let report = find_pole_with(&polygon, &options).unwrap();
            assert!(report.pole.distance >= 20.0 - 0.5);
            assert!(report.pole.distance <= 20.0 + 1e-9);
            assert!(polygon.contains(report.pole.point));
        }
    }

    #[test]
    fn test_root_too_small_to_split() {
        // Radius below precision: the root is the answer
        let polygon = rectangle(1.0, 1.0);
        let report = find_pole_with(&polygon, &PoleOptions::with_precision(5.0)).unwrap();
        assert_eq!(report.pole.point, Point2::new(0.5, 0.5));
        assert_eq!(report.stats.cells_evaluated, 1);
        assert_eq!(report.stats.cells_pruned, 1);
        assert_eq!(report.stats.cells_subdivided, 0);
    }

    #[test]
    fn test_invalid_precision() {
        let polygon = rectangle(10.0, 10.0);
        for precision in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = find_pole(&polygon, precision).unwrap_err();
            assert!(matches!(err, PoleError::InvalidConfig(_)), "{precision}");
        }
    }

    #[test]
    fn test_cell_cap() {
        let polygon = rectangle(100.0, 30.0);
        let options = PoleOptions::with_precision(0.01).with_max_cells(20);
        let err = find_pole_with(&polygon, &options).unwrap_err();
        match err {
            PoleError::SearchLimitExceeded { cells } => assert!(cells > 20),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_improvements_non_decreasing() {
        let polygon = rectangle(90.0, 30.0);
        for order in [QueueOrder::Fifo, QueueOrder::BestFirst] {
            let options = PoleOptions::with_precision(0.1).with_order(order);
            let report = find_pole_with(&polygon, &options).unwrap();
            let improvements = &report.stats.improvements;
            assert!(improvements.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(improvements.last().copied(), Some(report.pole.distance));
        }
    }

    #[test]
    fn test_tree_matches_stats() {
        let polygon = rectangle(60.0, 20.0);
        let options = PoleOptions::with_precision(1.0).with_tree(true);
        let report = find_pole_with(&polygon, &options).unwrap();
        let tree = report.tree.expect("tree retained");

        assert_eq!(tree.len(), report.stats.cells_evaluated);
        let divided = tree.iter().filter(|node| node.cell().is_divided()).count();
        assert_eq!(divided, report.stats.cells_subdivided);
        assert!(tree.iter().all(|node| node.cell().is_divided() != node.is_leaf()));
        assert!(tree
            .iter()
            .any(|node| node.cell().center() == report.pole.point));
    }

    #[test]
    fn test_polygon_shorthand() {
        let polygon = rectangle(40.0, 40.0);
        assert_eq!(polygon.pole(1.0).unwrap(), find_pole(&polygon, 1.0).unwrap());
    }
}
