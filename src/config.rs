// MIT/Apache2 License

use crate::{geometry::Vector, path::Path, FillRule};

/// Construction settings for a [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathOptions {
    /// Absolute coordinate of the path's origin.
    pub start: Vector,
    /// Horizontal stretch applied to coordinates while parsing.
    pub scale_x: f64,
    /// Vertical stretch applied to coordinates while parsing.
    pub scale_y: f64,
    /// Uniform scale applied when points are resolved.
    pub scale: f64,
    /// Rotation about the origin, in degrees.
    pub roll: f64,
    /// Samples taken per link when measuring arc length.
    pub precision: usize,
    pub closed: bool,
    /// Whether the path is an open line rather than a closed shape. Lines measure their
    /// handle from the top-left corner, shapes from their center.
    pub is_line: bool,
    pub fill_rule: FillRule,
    pub handle: Handle,
}

impl Default for PathOptions {
    #[inline]
    fn default() -> Self {
        Self {
            start: Vector::ZERO,
            scale_x: 1.0,
            scale_y: 1.0,
            scale: 1.0,
            roll: 0.0,
            precision: 10,
            closed: true,
            is_line: true,
            fill_rule: FillRule::NonZero,
            handle: Handle::default(),
        }
    }
}

impl PathOptions {
    /// Parse the path data and build a ready-to-query path.
    #[inline]
    pub fn build(&self, data: &str) -> Path {
        let parsed = crate::path::parse(data, self.scale_x, self.scale_y);
        let mut path = Path::from_parsed(parsed, self);
        path.build_positions();
        path
    }
}

/// Reference point of a path, one value per axis.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Handle {
    pub x: HandleValue,
    pub y: HandleValue,
}

impl Handle {
    #[inline]
    pub fn new(x: HandleValue, y: HandleValue) -> Self {
        Self { x, y }
    }
}

/// Position along one axis of a path's box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HandleValue {
    /// The left or top edge.
    Start,
    Center,
    /// The right or bottom edge.
    End,
    /// A percentage of the box's span.
    Percent(f64),
    /// A fixed distance in pixels.
    Pixels(f64),
}

impl Default for HandleValue {
    #[inline]
    fn default() -> Self {
        HandleValue::Pixels(0.0)
    }
}

impl HandleValue {
    /// Resolve against a span. A centered frame measures from the middle of the span.
    #[inline]
    pub fn resolve(self, span: f64, centered: bool) -> f64 {
        let half = span / 2.0;
        let offset = if centered { half } else { 0.0 };
        match self {
            HandleValue::Start => -offset,
            HandleValue::Center => half - offset,
            HandleValue::End => span - offset,
            HandleValue::Percent(percent) => percent / 100.0 * span - offset,
            HandleValue::Pixels(pixels) => pixels,
        }
    }
}
