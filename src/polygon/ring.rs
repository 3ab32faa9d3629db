//! Closed rings and the conversions that feed them.
//!
//! Every vertex source accepted by [`Polygon`](super::Polygon) goes through
//! [`IntoRing`] exactly once, so the distance oracle and the search only ever
//! see a flat, validated list of points.

use crate::bounds::Aabb2;
use crate::distance::sdf_ring;
use crate::error::{PoleError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// A validated closed ring: at least 3 vertices, all finite.
///
/// The ring is implicitly closed; an explicit closing vertex equal to the
/// first one is dropped on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Validates `points` as a closed ring.
    ///
    /// # Errors
    ///
    /// [`PoleError::InvalidPolygon`] if a coordinate is not finite or fewer
    /// than 3 vertices remain after dropping a repeated closing vertex.
    pub fn new(mut points: Vec<Point2<F>>) -> Result<Self> {
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(PoleError::InvalidPolygon(format!(
                "vertex {i} has a non-finite coordinate"
            )));
        }

        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return Err(PoleError::InvalidPolygon(format!(
                "ring needs at least 3 vertices, got {}",
                points.len()
            )));
        }

        Ok(Self { points })
    }

    /// Returns the ring's vertices, without a closing duplicate.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a validated ring.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the bounding box of the ring.
    pub fn bounds(&self) -> Aabb2<F> {
        // A validated ring is never empty.
        Aabb2::from_points(self.points.iter().copied())
            .unwrap_or_else(|| Aabb2::from_point(Point2::origin()))
    }

    /// Signed distance to this ring, negative inside and positive outside.
    #[inline]
    pub fn signed_distance(&self, p: Point2<F>) -> F {
        sdf_ring(p, &self.points)
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive for CCW winding in a y-up frame, negative for CW. Vertices are
    /// taken relative to the first one to limit cancellation far from the
    /// origin.
    pub fn signed_area(&self) -> F {
        let origin = self.points[0];
        let n = self.points.len();
        let twice = (1..n - 1).fold(F::zero(), |acc, i| {
            let a = self.points[i] - origin;
            let b = self.points[i + 1] - origin;
            acc + a.cross(b)
        });
        twice / (F::one() + F::one())
    }

    /// Consumes the ring, returning its vertices.
    pub fn into_points(self) -> Vec<Point2<F>> {
        self.points
    }
}

/// Conversion of caller-supplied vertex data into a validated [`Ring`].
///
/// Flat point lists and contour-style lists that wrap each vertex in its own
/// single-point row are both accepted; the wrapping is removed here.
pub trait IntoRing<F: Float> {
    /// Normalizes and validates the vertex data.
    fn into_ring(self) -> Result<Ring<F>>;
}

impl<F: Float> IntoRing<F> for Ring<F> {
    fn into_ring(self) -> Result<Ring<F>> {
        Ok(self)
    }
}

impl<F: Float> IntoRing<F> for Vec<Point2<F>> {
    fn into_ring(self) -> Result<Ring<F>> {
        Ring::new(self)
    }
}

impl<F: Float> IntoRing<F> for &[Point2<F>] {
    fn into_ring(self) -> Result<Ring<F>> {
        Ring::new(self.to_vec())
    }
}

impl<F: Float> IntoRing<F> for Vec<[F; 2]> {
    fn into_ring(self) -> Result<Ring<F>> {
        Ring::new(self.into_iter().map(Point2::from).collect())
    }
}

impl<F: Float> IntoRing<F> for Vec<(F, F)> {
    fn into_ring(self) -> Result<Ring<F>> {
        Ring::new(self.into_iter().map(Point2::from).collect())
    }
}

impl<F: Float> IntoRing<F> for Vec<[[F; 2]; 1]> {
    fn into_ring(self) -> Result<Ring<F>> {
        Ring::new(self.into_iter().map(|[p]| Point2::from(p)).collect())
    }
}

impl<F: Float> IntoRing<F> for Vec<Vec<[F; 2]>> {
    fn into_ring(self) -> Result<Ring<F>> {
        let points = self
            .into_iter()
            .enumerate()
            .map(|(i, row)| match row.as_slice() {
                [p] => Ok(Point2::from(*p)),
                _ => Err(PoleError::InvalidPolygon(format!(
                    "wrapped ring row {i} holds {} points, expected 1",
                    row.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ring::new(points)
    }
}
