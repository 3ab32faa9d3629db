//! Square quadtree cells with a Lipschitz upper bound.

use crate::error::{PoleError, Result};
use crate::polygon::Polygon;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// One quarter of a subdivided cell, named for a y-down frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// +x, -y
    NorthEast,
    /// -x, -y
    NorthWest,
    /// +x, +y
    SouthEast,
    /// -x, +y
    SouthWest,
}

impl Quadrant {
    /// All quadrants in the order [`Cell::subdivide`] returns them.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Unit signs of the child center's offset from the parent center.
    #[inline]
    pub fn offset_signs(self) -> (i8, i8) {
        match self {
            Quadrant::NorthEast => (1, -1),
            Quadrant::NorthWest => (-1, -1),
            Quadrant::SouthEast => (1, 1),
            Quadrant::SouthWest => (-1, 1),
        }
    }

    fn offset<F: Float>(self, magnitude: F) -> Vec2<F> {
        let (sx, sy) = self.offset_signs();
        let signed = |s: i8| if s < 0 { -magnitude } else { magnitude };
        Vec2::new(signed(sx), signed(sy))
    }
}

/// An axis-aligned square region of the search.
///
/// The oracle is evaluated once, at the center. Because the oracle is
/// 1-Lipschitz, no point inside the cell can score more than
/// `distance + radius`, where `radius` is the half-diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<F> {
    center: Point2<F>,
    size: F,
    precision: F,
    distance: F,
    radius: F,
    max_distance: F,
    divided: bool,
}

impl<F: Float> Cell<F> {
    /// Evaluates `polygon` at `center` and derives the cell's bound.
    pub fn new(polygon: &Polygon<F>, center: Point2<F>, size: F, precision: F) -> Self {
        let two = F::one() + F::one();
        let radius = size / two * two.sqrt();
        let distance = polygon.signed_distance(center);

        Self {
            center,
            size,
            precision,
            distance,
            radius,
            max_distance: distance + radius,
            divided: false,
        }
    }

    /// Center point, where the oracle was evaluated.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> F {
        self.size
    }

    /// Precision the cell was created with.
    #[inline]
    pub fn precision(&self) -> F {
        self.precision
    }

    /// Signed distance from the center to the polygon boundary.
    #[inline]
    pub fn distance(&self) -> F {
        self.distance
    }

    /// Half-diagonal, `size / 2 * sqrt(2)`.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Upper bound on the oracle anywhere inside the cell.
    #[inline]
    pub fn max_distance(&self) -> F {
        self.max_distance
    }

    /// Returns `true` once the cell has been subdivided.
    #[inline]
    pub fn is_divided(&self) -> bool {
        self.divided
    }

    /// Returns `true` if some point in the cell may beat `best` by more than
    /// the cell's precision.
    #[inline]
    pub fn can_improve(&self, best: F) -> bool {
        self.max_distance > best + self.precision
    }

    /// Splits the cell into four children of half the size.
    ///
    /// Children are returned in [`Quadrant::ALL`] order, each centered a
    /// quarter of the parent's size away along both axes.
    ///
    /// # Errors
    ///
    /// [`PoleError::InvariantViolation`] if the cell was already divided.
    pub fn subdivide(&mut self, polygon: &Polygon<F>) -> Result<[Cell<F>; 4]> {
        if self.divided {
            return Err(PoleError::InvariantViolation(
                "cell subdivided a second time".into(),
            ));
        }

        let two = F::one() + F::one();
        let half = self.size / two;
        let quarter = half / two;
        let precision = self.precision;
        let center = self.center;

        let children =
            Quadrant::ALL.map(|q| Cell::new(polygon, center + q.offset(quarter), half, precision));
        self.divided = true;

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(side: f64) -> Polygon<f64> {
        Polygon::new(vec![[0.0, 0.0], [side, 0.0], [side, side], [0.0, side]]).unwrap()
    }

    #[test]
    fn test_radius() {
        let polygon = square(10.0);
        let cell = Cell::new(&polygon, Point2::new(0.0, 0.0), 20.0, 20.0);
        assert_relative_eq!(cell.radius(), 14.142135623730951, epsilon = 1e-12);
    }

    #[test]
    fn test_max_distance() {
        let polygon = square(50.0);
        let cell = Cell::new(&polygon, Point2::new(25.0, 25.0), 100.0, 1.0);
        assert_relative_eq!(cell.distance(), 25.0, epsilon = 1e-12);
        assert_relative_eq!(cell.max_distance(), 95.71067811865476, epsilon = 1e-9);
        assert!(!cell.is_divided());
    }

    #[test]
    fn test_can_improve_respects_precision() {
        let polygon = square(50.0);
        let cell = Cell::new(&polygon, Point2::new(25.0, 25.0), 2.0, 1.0);
        // max = 25 + sqrt(2)
        assert!(cell.can_improve(24.0));
        assert!(cell.can_improve(25.0));
        assert!(!cell.can_improve(25.5));
    }

    #[test]
    fn test_subdivide_layout() {
        let polygon = square(100.0);
        let mut cell = Cell::new(&polygon, Point2::new(50.0, 50.0), 100.0, 1.0);
        let children = cell.subdivide(&polygon).unwrap();

        assert!(cell.is_divided());
        let centers: Vec<_> = children.iter().map(Cell::center).collect();
        assert_eq!(
            centers,
            vec![
                Point2::new(75.0, 25.0),
                Point2::new(25.0, 25.0),
                Point2::new(75.0, 75.0),
                Point2::new(25.0, 75.0),
            ]
        );
        for child in &children {
            assert_eq!(child.size(), 50.0);
            assert_eq!(child.precision(), 1.0);
            assert_relative_eq!(child.distance(), 25.0, epsilon = 1e-12);
            assert!(!child.is_divided());
        }
    }

    #[test]
    fn test_subdivide_twice_fails() {
        let polygon = square(10.0);
        let mut cell = Cell::new(&polygon, Point2::new(5.0, 5.0), 10.0, 1.0);
        cell.subdivide(&polygon).unwrap();

        let err = cell.subdivide(&polygon).unwrap_err();
        assert!(matches!(err, PoleError::InvariantViolation(_)));
    }

    #[test]
    fn test_quadrant_signs() {
        let signs: Vec<_> = Quadrant::ALL.iter().map(|q| q.offset_signs()).collect();
        assert_eq!(signs, vec![(1, -1), (-1, -1), (1, 1), (-1, 1)]);
    }
}
