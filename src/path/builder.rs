// MIT/Apache2 License

use super::{Action, Link, LinkId, Point, PointId, Species};
use crate::geometry::{Bounds, Vector};

/// The last control point handed out, kept so smooth segments can mirror it.
#[derive(Debug, Copy, Clone)]
enum LastControl {
    Cubic(Vector),
    Quadratic(Vector),
}

/// Incrementally assembles the points and links of a path.
///
/// All coordinates handed to the builder are absolute and unscaled. The
/// builder applies the scale factors when it stores points, while the
/// cursor, subpath start and mirrored control points stay unscaled.
#[derive(Debug)]
pub struct PathBuilder {
    points: Vec<Point>,
    links: Vec<Link>,
    scale_x: f64,
    scale_y: f64,
    cursor: Vector,
    subpath_start: Vector,
    current: PointId,
    last_control: Option<LastControl>,
    bounds: Bounds,
}

impl Default for PathBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::with_scale(1.0, 1.0)
    }

    /// Create a builder that stores every point stretched by the given factors.
    #[inline]
    pub fn with_scale(scale_x: f64, scale_y: f64) -> Self {
        Self {
            points: vec![Point::new(Vector::ZERO)],
            links: Vec::new(),
            scale_x,
            scale_y,
            cursor: Vector::ZERO,
            subpath_start: Vector::ZERO,
            current: PointId(0),
            last_control: None,
            bounds: Bounds::EMPTY,
        }
    }

    /// The current (unscaled) drawing position.
    #[inline]
    pub fn cursor(&self) -> Vector {
        self.cursor
    }

    /// The point drawing will continue from.
    #[inline]
    pub fn current_point(&self) -> PointId {
        self.current
    }

    /// The most recently created link.
    #[inline]
    pub fn last_link(&self) -> Option<LinkId> {
        self.links.len().checked_sub(1).map(LinkId)
    }

    /// Lift the pen and start a new subpath.
    pub fn move_to(&mut self, to: Vector) -> &mut Self {
        let end = self.commit(to);
        self.link_from_current(Species::Line, Action::Move, end);
        self.subpath_start = to;
        self.last_control = None;
        self
    }

    pub fn line_to(&mut self, to: Vector) -> &mut Self {
        let end = self.commit(to);
        self.link_from_current(Species::Line, Action::Add, end);
        self.last_control = None;
        self
    }

    pub fn quadratic_to(&mut self, control: Vector, to: Vector) -> &mut Self {
        self.bounds.include(control.x, control.y);
        self.quadratic(control, to)
    }

    /// A quadratic whose control point mirrors the previous quadratic's control through the
    /// cursor. If the previous segment was not quadratic, the control sits on the cursor.
    pub fn smooth_quadratic_to(&mut self, to: Vector) -> &mut Self {
        let control = match self.last_control {
            Some(LastControl::Quadratic(previous)) => self.cursor.reflect(previous),
            _ => self.cursor,
        };
        self.quadratic(control, to)
    }

    pub fn cubic_to(&mut self, control1: Vector, control2: Vector, to: Vector) -> &mut Self {
        self.bounds.include(control1.x, control1.y);
        self.bounds.include(control2.x, control2.y);
        self.cubic(control1, control2, to)
    }

    /// A cubic whose first control point mirrors the previous cubic's second control through
    /// the cursor. If the previous segment was not cubic, the control sits on the cursor.
    pub fn smooth_cubic_to(&mut self, control2: Vector, to: Vector) -> &mut Self {
        self.bounds.include(control2.x, control2.y);
        let control1 = match self.last_control {
            Some(LastControl::Cubic(previous)) => self.cursor.reflect(previous),
            _ => self.cursor,
        };
        self.cubic(control1, control2, to)
    }

    /// Close the current subpath, drawing a line back to its start if the cursor is elsewhere.
    pub fn close(&mut self) -> &mut Self {
        let start = self.subpath_start;
        if self.cursor != start {
            self.line_to(start);
        }

        let end = self.commit(start);
        self.link_from_current(Species::Line, Action::Close, end);
        self.last_control = None;
        self
    }

    /// Terminate the path.
    pub fn finish(mut self) -> ParsedPath {
        let last = self.current;
        self.push_link(Species::Line, Action::End, last, last);

        ParsedPath {
            points: self.points,
            links: self.links,
            first_point: PointId(0),
            bounds: self.bounds,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
        }
    }

    fn quadratic(&mut self, control: Vector, to: Vector) -> &mut Self {
        let control_id = self.push_point(control);
        let end = self.commit(to);
        self.link_from_current(
            Species::Quadratic {
                control: control_id,
            },
            Action::Add,
            end,
        );
        self.last_control = Some(LastControl::Quadratic(control));
        self
    }

    fn cubic(&mut self, control1: Vector, control2: Vector, to: Vector) -> &mut Self {
        let control1_id = self.push_point(control1);
        let control2_id = self.push_point(control2);
        let end = self.commit(to);
        self.link_from_current(
            Species::Bezier {
                control1: control1_id,
                control2: control2_id,
            },
            Action::Add,
            end,
        );
        self.last_control = Some(LastControl::Cubic(control2));
        self
    }

    /// Add an end point: it becomes the cursor and widens the bounds.
    #[inline]
    fn commit(&mut self, to: Vector) -> PointId {
        self.bounds.include(to.x, to.y);
        self.cursor = to;
        self.push_point(to)
    }

    #[inline]
    fn push_point(&mut self, raw: Vector) -> PointId {
        let id = PointId(self.points.len());
        self.points
            .push(Point::new(raw.scale_xy(self.scale_x, self.scale_y)));
        id
    }

    #[inline]
    fn link_from_current(&mut self, species: Species, action: Action, end: PointId) {
        let start = self.current;
        self.push_link(species, action, start, end);
        self.current = end;
    }

    #[inline]
    fn push_link(&mut self, species: Species, action: Action, start: PointId, end: PointId) {
        let id = LinkId(self.links.len());
        self.links.push(Link::new(species, action, start, end));
        if let Some(point) = self.points.get_mut(start.0) {
            point.start_link = Some(id);
        }
    }
}

/// The raw output of the builder or the command parser.
#[derive(Debug, Clone)]
pub struct ParsedPath {
    pub(crate) points: Vec<Point>,
    pub(crate) links: Vec<Link>,
    pub(crate) first_point: PointId,
    bounds: Bounds,
    scale_x: f64,
    scale_y: f64,
}

impl ParsedPath {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[inline]
    pub fn first_point(&self) -> PointId {
        self.first_point
    }

    /// Bounding box of committed coordinates, before scaling.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.bounds.width() * self.scale_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bounds.height() * self.scale_y
    }
}
