// MIT/Apache2 License

//! Parse vector path data into traversable paths.
//!
//! A [`Path`] is built from SVG-style path data (or one of the shape
//! factories in [`path`]) and measured by arc length. It can then be asked
//! for the position and heading found any fraction of the way around its
//! perimeter, travelling either by raw curve parameter or at constant speed.
//! Paths can also be sketched onto a [`Surface`] and hit-tested against it.

#![forbid(unsafe_code)]

mod config;
mod error;

pub mod fill;
pub mod geometry;
pub mod path;
pub mod surface;

pub(crate) mod util;

pub use config::*;
pub use error::*;
pub use fill::*;
pub use path::{CollisionSpec, Path, PerimeterPosition};
pub use surface::*;
