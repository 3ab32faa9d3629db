//! visual-center - Pole of inaccessibility for polygons with holes
//!
//! Finds the point deepest inside a polygon, the one farthest from any edge of
//! its shell or holes. Useful for label placement and visual centering. The
//! answer is approximate: it is within a caller-chosen precision of the true
//! maximum distance.
//!
//! ```
//! use visual_center::{find_pole, Polygon};
//!
//! let donut: Polygon<f64> = Polygon::with_holes(
//!     vec![[0.0, 0.0], [90.0, 0.0], [90.0, 90.0], [0.0, 90.0]],
//!     vec![vec![[30.0, 30.0], [60.0, 30.0], [60.0, 60.0], [30.0, 60.0]]],
//! )
//! .unwrap();
//!
//! let pole = find_pole(&donut, 0.5).unwrap();
//! assert!(donut.contains(pole.point));
//! assert!(pole.distance >= 15.0 - 0.5);
//! ```

pub mod bounds;
pub mod distance;
pub mod error;
pub mod pole;
pub mod polygon;
pub mod primitives;

pub use bounds::Aabb2;
pub use error::PoleError;
#[cfg(feature = "parallel")]
pub use pole::find_pole_parallel;
pub use pole::{
    find_pole, find_pole_with, Cell, Pole, PoleOptions, PoleReport, QueueOrder, SearchStats,
    SearchTree,
};
pub use polygon::{IntoRing, Polygon, Ring};
pub use primitives::{Point2, Segment2, Vec2};
