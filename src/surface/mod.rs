// MIT/Apache2 License

use crate::FillRule;

/// Provides the `Canvas` type.
mod canvas;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;

pub use canvas::Canvas;

/// Something a path can be sketched onto.
///
/// `Surface`s are usually 2D drawing contexts: a browser canvas, a vector
/// renderer, or a recorder that keeps path instructions around for later.
/// A path replays its geometry onto a `Surface` in absolute coordinates,
/// one instruction at a time, starting with `begin_path()`.
///
/// Every `Surface` should be capable of the following:
///
/// * Starting a fresh path with `begin_path()`, discarding what was sketched before.
/// * Accepting the `move_to`, `line_to`, `quadratic_curve_to`, `bezier_curve_to` and
///   `close_path` instructions.
///
/// Surfaces that can test containment against the current path should also override
/// `is_point_in_path()`. The default implementation returns `NotSupported(Containment)`.
pub trait Surface {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self) -> crate::Result;

    /// Start a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64) -> crate::Result;
    /// Draw a straight line from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64) -> crate::Result;
    /// Draw a quadratic curve to (x, y) with the control point (cx, cy).
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> crate::Result;
    /// Draw a cubic bezier curve to (x, y) with the control points (c1x, c1y) and
    /// (c2x, c2y).
    fn bezier_curve_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> crate::Result;
    /// Close the current subpath.
    fn close_path(&mut self) -> crate::Result;

    /// Tell whether (x, y) lies inside the current path under the given fill rule.
    #[inline]
    fn is_point_in_path(&self, _x: f64, _y: f64, _rule: FillRule) -> crate::Result<bool> {
        Err(crate::Error::NotSupported(crate::NSOpType::Containment))
    }
}
