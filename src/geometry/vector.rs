// MIT/Apache2 License

use approx::{AbsDiffEq, RelativeEq};
use euclid::default::Point2D;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A coordinate in two (or, nominally, three) dimensional space.
///
/// The `z` component is carried along for uniformity but takes no part in
/// planar operations such as rotation and interpolation of paths.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    /// Create a planar vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Create a vector with an explicit `z` component.
    #[inline]
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Get a vector of length one pointing the same way. The zero vector is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self.scale(magnitude.recip())
        } else {
            self
        }
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::new_3d(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Scale the `x` and `y` components independently.
    #[inline]
    pub fn scale_xy(self, scale_x: f64, scale_y: f64) -> Self {
        Self::new_3d(self.x * scale_x, self.y * scale_y, self.z)
    }

    /// Rotate this vector about the origin by a number of degrees.
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        if degrees == 0.0 {
            return self;
        }

        let magnitude = self.x.hypot(self.y);
        let arg = self.y.atan2(self.x) + degrees.to_radians();
        Self::new_3d(magnitude * arg.cos(), magnitude * arg.sin(), self.z)
    }

    /// Linearly interpolate between this vector and another.
    #[inline]
    pub fn lerp(self, other: Vector, t: f64) -> Self {
        let p = self.to_point2d().lerp(other.to_point2d(), t);
        Self::new_3d(p.x, p.y, self.z + (other.z - self.z) * t)
    }

    /// Planar distance between two vectors.
    #[inline]
    pub fn distance_to(self, other: Vector) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Mirror `other` through this vector.
    #[inline]
    pub fn reflect(self, other: Vector) -> Self {
        self + (self - other)
    }

    #[inline]
    pub fn to_point2d(self) -> Point2D<f64> {
        Point2D::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D<f64>> for Vector {
    #[inline]
    fn from(p: Point2D<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Vector {
        Self::new_3d(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Vector) -> Vector {
        Self::new_3d(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Self::new_3d(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, factor: f64) -> Vector {
        self.scale(factor)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
