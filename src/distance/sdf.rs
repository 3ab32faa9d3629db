//! Signed distance to a single closed ring.
//!
//! Rings follow the usual SDF convention: negative inside, positive outside,
//! zero on an edge. The polygon oracle flips the shell's sign and composes
//! the holes on top of this primitive.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Signed distance from `p` to a closed ring.
///
/// The magnitude is the Euclidean distance to the nearest edge; the sign comes
/// from the non-zero winding rule, so winding order does not matter.
///
/// # Arguments
///
/// * `p` - Query point
/// * `vertices` - Ring vertices in order (first vertex should NOT be repeated at end)
///
/// # Returns
///
/// Signed distance: negative if inside, positive if outside. Rings with fewer
/// than 3 vertices enclose nothing and report `+inf`.
pub fn sdf_ring<F: Float>(p: Point2<F>, vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::infinity();
    }

    let dist = edges(vertices)
        .map(|edge| edge.distance_squared_to_point(p))
        .fold(F::infinity(), F::min)
        .sqrt();

    if winding_number(p, vertices) != 0 {
        -dist
    } else {
        dist
    }
}

/// Computes the winding number of a point with respect to a ring.
///
/// Returns 0 if the point is outside, non-zero if inside. Points exactly on
/// an edge may go either way.
pub fn winding_number<F: Float>(p: Point2<F>, vertices: &[Point2<F>]) -> i32 {
    let mut winding = 0i32;

    for edge in edges(vertices) {
        let (v1, v2) = (edge.start, edge.end);

        if v1.y <= p.y {
            if v2.y > p.y && is_left(v1, v2, p) > F::zero() {
                // Upward crossing
                winding += 1;
            }
        } else if v2.y <= p.y && is_left(v1, v2, p) < F::zero() {
            // Downward crossing
            winding -= 1;
        }
    }

    winding
}

/// Iterates the closed ring's edges, including the wrap-around edge.
fn edges<F: Float>(vertices: &[Point2<F>]) -> impl Iterator<Item = Segment2<F>> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment2::new(vertices[i], vertices[(i + 1) % n]))
}

/// Returns positive if p is left of line v1->v2, negative if right, zero if on line.
#[inline]
fn is_left<F: Float>(v1: Point2<F>, v2: Point2<F>, p: Point2<F>) -> F {
    (v2 - v1).cross(p - v1)
}
