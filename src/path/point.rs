// MIT/Apache2 License

use super::LinkId;
use crate::geometry::Vector;
use std::{fmt, rc::Rc};

/// Index of a [`Point`] inside its owning path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub(crate) usize);

impl PointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Something outside of a path that has a current absolute position.
pub trait Positioned {
    fn position(&self) -> Vector;
}

/// Where a point takes its position from.
#[derive(Clone)]
pub enum Fixed {
    /// The point sits at its local offset, scaled by the path's scale.
    Local,
    /// The point's local value is an absolute coordinate. The point does not
    /// move when the path is moved or rotated.
    Absolute,
    /// The point borrows the position of another point in the same path.
    Point(PointId),
    /// The point borrows the absolute position of an external object.
    External(Rc<dyn Positioned>),
}

impl Default for Fixed {
    #[inline]
    fn default() -> Self {
        Fixed::Local
    }
}

impl fmt::Debug for Fixed {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fixed::Local => f.write_str("Local"),
            Fixed::Absolute => f.write_str("Absolute"),
            Fixed::Point(id) => f.debug_tuple("Point").field(id).finish(),
            Fixed::External(pivot) => f
                .debug_tuple("External")
                .field(&pivot.position())
                .finish(),
        }
    }
}

/// A positionable node belonging to exactly one path.
#[derive(Debug, Clone, Default)]
pub struct Point {
    pub(crate) local: Vector,
    pub(crate) fixed: Fixed,
    pub(crate) start_link: Option<LinkId>,
}

impl Point {
    #[inline]
    pub(crate) fn new(local: Vector) -> Self {
        Self {
            local,
            fixed: Fixed::Local,
            start_link: None,
        }
    }

    #[inline]
    pub fn local(&self) -> Vector {
        self.local
    }

    #[inline]
    pub fn fixed(&self) -> &Fixed {
        &self.fixed
    }

    /// The link that is drawn starting from this point, if any.
    #[inline]
    pub fn start_link(&self) -> Option<LinkId> {
        self.start_link
    }

    #[inline]
    pub fn set_local(&mut self, local: Vector) {
        self.local = local;
    }

    /// Move the point by an offset.
    #[inline]
    pub fn set_delta(&mut self, delta: Vector) {
        self.local += delta;
    }

    /// Lengthen (or, with a negative distance, shorten) the point's offset from the origin.
    #[inline]
    pub fn extend(&mut self, distance: f64) {
        let magnitude = self.local.magnitude();
        if magnitude > 0.0 {
            self.local = self.local.scale((magnitude + distance) / magnitude);
        }
    }

    /// Rotate the point's offset about the origin.
    #[inline]
    pub fn rotate_by(&mut self, degrees: f64) {
        self.local = self.local.rotate(degrees);
    }

    /// Place the point at a distance and angle from the origin.
    #[inline]
    pub fn set_polar(&mut self, distance: f64, degrees: f64) {
        let radians = degrees.to_radians();
        self.local = Vector::new_3d(
            distance * radians.cos(),
            distance * radians.sin(),
            self.local.z,
        );
    }

    #[inline]
    pub fn set_fixed(&mut self, fixed: Fixed) {
        self.fixed = fixed;
    }
}
