//! Level-synchronous search that spreads oracle evaluations over rayon.

use super::search::{check_limit, root_cell};
use super::{Cell, Pole, PoleOptions, PoleReport, SearchStats};
use crate::error::{PoleError, Result};
use crate::polygon::Polygon;
use num_traits::Float;
use rayon::prelude::*;
use std::fmt::Debug;

/// Parallel variant of [`find_pole_with`](super::find_pole_with).
///
/// The frontier is processed one quadtree level at a time. Pruning and best
/// updates run sequentially in frontier order, then the survivors are
/// subdivided across the rayon pool. This visits cells in the same order as
/// [`QueueOrder::Fifo`](super::QueueOrder::Fifo), so the report matches the
/// sequential FIFO search exactly; `options.order` is ignored.
///
/// # Errors
///
/// As [`find_pole_with`](super::find_pole_with), plus
/// [`PoleError::InvalidConfig`] when `options.retain_tree` is set.
pub fn find_pole_parallel<F>(polygon: &Polygon<F>, options: &PoleOptions<F>) -> Result<PoleReport<F>>
where
    F: Float + Debug + Send + Sync,
{
    options.validate()?;
    if options.retain_tree {
        return Err(PoleError::InvalidConfig(
            "the parallel search does not retain a search tree".into(),
        ));
    }

    let root = root_cell(polygon, options.precision);
    log::debug!(
        "parallel pole search: root {:?} size {:?}, precision {:?}",
        root.center(),
        root.size(),
        options.precision
    );

    let mut best = Pole::from_cell(&root);
    let mut stats = SearchStats::new(best.distance);
    let mut frontier = vec![root];

    while !frontier.is_empty() {
        let mut survivors: Vec<Cell<F>> = Vec::with_capacity(frontier.len());
        for cell in frontier {
            if !cell.can_improve(best.distance) {
                stats.cells_pruned += 1;
                continue;
            }
            if cell.distance() > best.distance {
                best = Pole::from_cell(&cell);
                stats.improvements.push(best.distance);
            }
            survivors.push(cell);
        }

        check_limit(options, stats.cells_evaluated + 4 * survivors.len())?;

        let children = survivors
            .par_iter_mut()
            .map(|cell| cell.subdivide(polygon))
            .collect::<Result<Vec<_>>>()?;

        stats.cells_subdivided += children.len();
        stats.cells_evaluated += 4 * children.len();
        log::trace!(
            "level done: {} cells subdivided, best {:?}",
            children.len(),
            best.distance
        );

        frontier = children.into_iter().flatten().collect();
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
        tree: None,
    })
}
