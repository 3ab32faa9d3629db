//! Polygons with holes and their signed-distance oracle.
//!
//! # Example
//!
//! ```
//! use visual_center::{Point2, Polygon};
//!
//! let square: Polygon<f64> = Polygon::new(vec![
//!     [0.0, 0.0],
//!     [100.0, 0.0],
//!     [100.0, 100.0],
//!     [0.0, 100.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(square.signed_distance(Point2::new(50.0, 50.0)), 50.0);
//! assert!(square.signed_distance(Point2::new(150.0, 150.0)) < 0.0);
//! ```

mod ring;

pub use ring::{IntoRing, Ring};

use crate::bounds::Aabb2;
use crate::error::{PoleError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon: one outer shell and zero or more holes.
///
/// Holes must lie inside the shell and must not overlap or nest; this is not
/// checked. The polygon is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    shell: Ring<F>,
    holes: Vec<Ring<F>>,
    bounds: Aabb2<F>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon without holes.
    ///
    /// # Errors
    ///
    /// [`PoleError::InvalidPolygon`] if the shell is not a valid ring or
    /// encloses no area.
    pub fn new<S: IntoRing<F>>(shell: S) -> Result<Self> {
        Self::with_holes(shell, Vec::<Ring<F>>::new())
    }

    /// Creates a polygon from a shell and any collection of hole rings.
    ///
    /// # Errors
    ///
    /// [`PoleError::InvalidPolygon`] if any ring is invalid or the shell
    /// encloses no area, either because its bounding box is flat or because
    /// its vertices are collinear.
    pub fn with_holes<S, H, I>(shell: S, holes: I) -> Result<Self>
    where
        S: IntoRing<F>,
        H: IntoRing<F>,
        I: IntoIterator<Item = H>,
    {
        let shell = shell.into_ring()?;
        let holes = holes
            .into_iter()
            .map(IntoRing::into_ring)
            .collect::<Result<Vec<_>>>()?;

        let bounds = shell.bounds();
        if !(bounds.area() > F::zero()) {
            return Err(PoleError::InvalidPolygon(
                "shell has a zero-area bounding box".into(),
            ));
        }
        if !(shell.signed_area().abs() > F::epsilon() * bounds.area()) {
            return Err(PoleError::InvalidPolygon("shell encloses no area".into()));
        }

        log::trace!(
            "polygon: {} shell vertices, {} holes",
            shell.len(),
            holes.len()
        );

        Ok(Self {
            shell,
            holes,
            bounds,
        })
    }

    /// Returns the outer ring.
    #[inline]
    pub fn shell(&self) -> &Ring<F> {
        &self.shell
    }

    /// Returns the hole rings.
    #[inline]
    pub fn holes(&self) -> &[Ring<F>] {
        &self.holes
    }

    /// Bounding box of the shell. Holes never extend it.
    #[inline]
    pub fn bounds(&self) -> Aabb2<F> {
        self.bounds
    }

    /// Width of the shell's bounding box.
    #[inline]
    pub fn width(&self) -> F {
        self.bounds.width()
    }

    /// Height of the shell's bounding box.
    #[inline]
    pub fn height(&self) -> F {
        self.bounds.height()
    }

    /// Center of the shell's bounding box.
    ///
    /// This is the bounding-box center the search starts from, not the
    /// area-weighted centroid.
    #[inline]
    pub fn centroid(&self) -> Point2<F> {
        self.bounds.center()
    }

    /// Signed distance from `p` to the nearest boundary, shell or hole.
    ///
    /// Positive strictly inside the region, negative outside the shell or
    /// inside any hole, zero on a boundary. The result is 1-Lipschitz in `p`.
    pub fn signed_distance(&self, p: Point2<F>) -> F {
        // Rings report negative inside; the shell's interior is the region.
        let mut nearest = -self.shell.signed_distance(p);

        for hole in &self.holes {
            let d = hole.signed_distance(p);
            if d.abs() < nearest.abs() {
                nearest = d;
            }
        }

        nearest
    }

    /// Returns `true` if `p` lies strictly inside the region.
    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        self.signed_distance(p) > F::zero()
    }
}
