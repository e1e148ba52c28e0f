// MIT/Apache2 License

use euclid::default::{Box2D, Point2D};

/// An axis-aligned bounding box that grows as coordinates are committed to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// A bounding box containing nothing at all.
    pub const EMPTY: Bounds = Bounds {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Grow the box to contain the given coordinate.
    #[inline]
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Horizontal span; zero when empty.
    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Vertical span; zero when empty.
    #[inline]
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    #[inline]
    pub fn to_box2d(&self) -> Option<Box2D<f64>> {
        if self.is_empty() {
            None
        } else {
            Some(Box2D::new(
                Point2D::new(self.min_x, self.min_y),
                Point2D::new(self.max_x, self.max_y),
            ))
        }
    }
}
