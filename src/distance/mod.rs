//! Distance computations for closed rings.

mod sdf;

pub use sdf::{sdf_ring, winding_number};
