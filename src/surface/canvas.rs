// MIT/Apache2 License

use super::Surface;
use crate::{geometry::Polygon, FillRule};
use lyon_path::{math::Point, Path, PathEvent};

/// An in-memory surface that records path instructions as lyon events.
///
/// The recorded path can answer containment queries, which makes `Canvas` a
/// drop-in surface for hit testing, and can be exported as a `lyon_path::Path`
/// for tessellation or rendering elsewhere.
#[derive(Debug, Clone)]
pub struct Canvas {
    events: Vec<PathEvent>,
    first: Point,
    current: Point,
    open: bool,
    tolerance: f32,
}

impl Default for Canvas {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    #[inline]
    pub fn new() -> Self {
        Self::with_tolerance(0.1)
    }

    /// Create a canvas that flattens curves to within `tolerance` when testing containment.
    #[inline]
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            events: Vec::new(),
            first: Point::origin(),
            current: Point::origin(),
            open: false,
            tolerance,
        }
    }

    /// The events recorded so far. An open subpath has no `End` event yet.
    #[inline]
    pub fn events(&self) -> &[PathEvent] {
        &self.events
    }

    /// The recorded events, with any open subpath terminated.
    fn finished_events(&self) -> Vec<PathEvent> {
        let mut events = self.events.clone();
        if self.open {
            events.push(PathEvent::End {
                last: self.current,
                first: self.first,
                close: false,
            });
        }
        events
    }

    /// Build a `lyon_path::Path` out of the recorded instructions.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();

        for event in self.finished_events() {
            match event {
                PathEvent::Begin { at } => {
                    builder.begin(at);
                }
                PathEvent::Line { to, .. } => {
                    builder.line_to(to);
                }
                PathEvent::Quadratic { ctrl, to, .. } => {
                    builder.quadratic_bezier_to(ctrl, to);
                }
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => {
                    builder.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                PathEvent::End { close, .. } => {
                    builder.end(close);
                }
            }
        }

        builder.build()
    }

    #[inline]
    fn checked_point(x: f64, y: f64) -> crate::Result<Point> {
        if x.is_finite() && y.is_finite() {
            Ok(Point::new(x as f32, y as f32))
        } else {
            Err(crate::Error::NonFinite { x, y })
        }
    }

    /// Begin a subpath at the current point if none is open.
    #[inline]
    fn ensure_open(&mut self) {
        if !self.open {
            self.events.push(PathEvent::Begin { at: self.current });
            self.first = self.current;
            self.open = true;
        }
    }

    #[inline]
    fn end_subpath(&mut self, close: bool) {
        if self.open {
            self.events.push(PathEvent::End {
                last: self.current,
                first: self.first,
                close,
            });
            self.open = false;
        }
    }
}

impl Surface for Canvas {
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        self.events.clear();
        self.first = Point::origin();
        self.current = Point::origin();
        self.open = false;
        Ok(())
    }

    #[inline]
    fn move_to(&mut self, x: f64, y: f64) -> crate::Result {
        let to = Self::checked_point(x, y)?;
        self.end_subpath(false);
        self.first = to;
        self.current = to;
        Ok(())
    }

    #[inline]
    fn line_to(&mut self, x: f64, y: f64) -> crate::Result {
        let to = Self::checked_point(x, y)?;
        self.ensure_open();
        self.events.push(PathEvent::Line {
            from: self.current,
            to,
        });
        self.current = to;
        Ok(())
    }

    #[inline]
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> crate::Result {
        let ctrl = Self::checked_point(cx, cy)?;
        let to = Self::checked_point(x, y)?;
        self.ensure_open();
        self.events.push(PathEvent::Quadratic {
            from: self.current,
            ctrl,
            to,
        });
        self.current = to;
        Ok(())
    }

    #[inline]
    fn bezier_curve_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> crate::Result {
        let ctrl1 = Self::checked_point(c1x, c1y)?;
        let ctrl2 = Self::checked_point(c2x, c2y)?;
        let to = Self::checked_point(x, y)?;
        self.ensure_open();
        self.events.push(PathEvent::Cubic {
            from: self.current,
            ctrl1,
            ctrl2,
            to,
        });
        self.current = to;
        Ok(())
    }

    #[inline]
    fn close_path(&mut self) -> crate::Result {
        self.end_subpath(true);
        self.current = self.first;
        Ok(())
    }

    fn is_point_in_path(&self, x: f64, y: f64, rule: FillRule) -> crate::Result<bool> {
        let point = Self::checked_point(x, y)?;
        let polygon = Polygon::from_events_with_tolerance(self.finished_events(), self.tolerance);
        Ok(polygon.contains(point, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_subpaths() {
        let mut canvas = Canvas::new();
        canvas.begin_path().unwrap();
        canvas.move_to(0.0, 0.0).unwrap();
        // moving twice does not leave an empty subpath behind
        canvas.move_to(5.0, 5.0).unwrap();
        canvas.line_to(10.0, 5.0).unwrap();
        canvas.quadratic_curve_to(15.0, 10.0, 10.0, 15.0).unwrap();
        canvas.close_path().unwrap();
        canvas.line_to(0.0, 0.0).unwrap();

        let events = canvas.events();
        assert_eq!(events.len(), 6);
        assert_eq!(
            events[0],
            PathEvent::Begin {
                at: Point::new(5.0, 5.0)
            }
        );
        assert!(matches!(events[3], PathEvent::End { close: true, .. }));
        // drawing after a close starts again from the subpath start
        assert_eq!(
            events[4],
            PathEvent::Begin {
                at: Point::new(5.0, 5.0)
            }
        );
    }

    #[test]
    fn test_begin_path_clears() {
        let mut canvas = Canvas::new();
        canvas.line_to(10.0, 10.0).unwrap();
        assert!(!canvas.events().is_empty());
        canvas.begin_path().unwrap();
        assert!(canvas.events().is_empty());
    }

    #[test]
    fn test_containment_closes_open_subpaths() {
        let mut canvas = Canvas::new();
        canvas.begin_path().unwrap();
        canvas.move_to(0.0, 0.0).unwrap();
        canvas.line_to(100.0, 0.0).unwrap();
        canvas.line_to(100.0, 100.0).unwrap();
        canvas.line_to(0.0, 100.0).unwrap();

        assert!(canvas.is_point_in_path(50.0, 50.0, FillRule::NonZero).unwrap());
        assert!(!canvas.is_point_in_path(150.0, 50.0, FillRule::NonZero).unwrap());
    }

    #[test]
    fn test_curved_containment() {
        let mut canvas = Canvas::new();
        canvas.begin_path().unwrap();
        canvas.move_to(0.0, 0.0).unwrap();
        canvas
            .bezier_curve_to(0.0, -100.0, 100.0, -100.0, 100.0, 0.0)
            .unwrap();
        canvas.close_path().unwrap();

        // the bulge of the curve is inside, beyond its apex is not
        assert!(canvas.is_point_in_path(50.0, -50.0, FillRule::NonZero).unwrap());
        assert!(!canvas.is_point_in_path(50.0, -90.0, FillRule::NonZero).unwrap());
    }

    #[test]
    fn test_non_finite() {
        let mut canvas = Canvas::new();
        let err = canvas.line_to(f64::NAN, 0.0);
        assert!(matches!(err, Err(crate::Error::NonFinite { .. })));
        assert!(canvas.events().is_empty());
    }

    #[test]
    fn test_export() {
        let mut canvas = Canvas::new();
        canvas.move_to(1.0, 2.0).unwrap();
        canvas.line_to(3.0, 4.0).unwrap();

        let path = canvas.to_path();
        let events: Vec<PathEvent> = path.iter().collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[2], PathEvent::End { close: false, .. }));
    }
}
