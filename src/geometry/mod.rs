// MIT/Apache2 License

//! Value types used by the path engine: vectors, angles, bounding boxes, resolved
//! curve segments and flattened polygons for containment tests.

mod angle;
mod bounds;
mod curve;
mod polygon;
mod vector;

pub use angle::*;
pub use bounds::*;
pub use curve::*;
pub use polygon::*;
pub use vector::*;
