// MIT/Apache2 License

//! Traversable paths.
//!
//! A [`Path`] owns its points and links in two arenas and refers between them
//! by index. Each drawable link keeps a sampled arc-length table. Together
//! these tables map a normalized distance along the whole path onto a link and
//! a position on that link.

mod builder;
mod factory;
mod link;
mod parser;
mod point;

pub use builder::*;
pub use factory::*;
pub use link::*;
pub use parser::parse;
pub use point::*;

use crate::{
    config::{Handle, PathOptions},
    geometry::{Angle, Bounds, Curve, Vector},
    surface::{Canvas, Surface},
    util::clamp_unit,
    FillRule,
};

/// Parameter offset used to estimate the tangent by finite differences.
const TANGENT_EPSILON: f64 = 1e-7;

/// A location on a path's perimeter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerimeterPosition {
    pub x: f64,
    pub y: f64,
    /// Direction of travel, if it was asked for.
    pub roll: Option<Angle>,
}

impl PerimeterPosition {
    #[inline]
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// Which points of a path should be used as collision points.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionSpec {
    /// This many points spread evenly around the perimeter.
    Count(usize),
    /// The single point at this fraction of the perimeter.
    Fraction(f64),
    /// The path's origin.
    Start,
    /// Explicit local coordinates.
    Points(Vec<Vector>),
}

/// A path built out of points and the links between them.
#[derive(Debug, Clone)]
pub struct Path {
    points: Vec<Point>,
    links: Vec<Link>,
    link_list: Vec<LinkId>,
    link_durations: Vec<f64>,
    perimeter_length: f64,
    precision: usize,
    closed: bool,
    is_line: bool,
    first_point: Option<PointId>,
    start: Vector,
    roll: Angle,
    scale: f64,
    width: f64,
    height: f64,
    bounds: Bounds,
    fill_rule: FillRule,
    handle: Handle,
    dirty: bool,
}

impl Path {
    /// Parse path data with the default options and build the result.
    #[inline]
    pub fn from_data(data: &str) -> Path {
        PathOptions::default().build(data)
    }

    /// Wrap parser or builder output. The result still needs to be built.
    pub fn from_parsed(parsed: ParsedPath, options: &PathOptions) -> Path {
        let width = parsed.width();
        let height = parsed.height();
        let bounds = parsed.bounds();
        let ParsedPath {
            points,
            links,
            first_point,
            ..
        } = parsed;

        let link_list = links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.is_drawable())
            .map(|(index, _)| LinkId(index))
            .collect();

        Path {
            points,
            links,
            link_list,
            link_durations: Vec::new(),
            perimeter_length: 0.0,
            precision: options.precision.max(1),
            closed: options.closed,
            is_line: options.is_line,
            first_point: Some(first_point),
            start: options.start,
            roll: Angle::from_degrees(options.roll).unwrap_or_default(),
            scale: options.scale,
            width,
            height,
            bounds,
            fill_rule: options.fill_rule,
            handle: options.handle,
            dirty: true,
        }
    }

    /* Accessors */

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.0)
    }

    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.0)
    }

    /// The drawable links, in drawing order.
    #[inline]
    pub fn link_list(&self) -> &[LinkId] {
        &self.link_list
    }

    /// Cumulative fraction of the perimeter covered through each drawable link.
    #[inline]
    pub fn link_durations(&self) -> &[f64] {
        &self.link_durations
    }

    #[inline]
    pub fn first_point(&self) -> Option<PointId> {
        self.first_point
    }

    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        self.is_line
    }

    #[inline]
    pub fn start(&self) -> Vector {
        self.start
    }

    #[inline]
    pub fn roll(&self) -> Angle {
        self.roll
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Bounding box of the path data, before any scaling.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    #[inline]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Whether the arc-length tables are stale.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /* Mutators */

    /// Move the path. Only points anchored outside the path need re-measuring.
    #[inline]
    pub fn set_start(&mut self, start: Vector) {
        self.start = start;
        if self.has_anchored_points() {
            self.dirty = true;
        }
    }

    /// Rotate the path, in degrees.
    #[inline]
    pub fn set_roll(&mut self, degrees: f64) {
        self.roll = Angle::from_degrees(degrees).unwrap_or_default();
        if self.has_anchored_points() {
            self.dirty = true;
        }
    }

    #[inline]
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.dirty = true;
    }

    /// Change the number of samples taken per link. Values below one are raised to one.
    #[inline]
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.max(1);
        self.dirty = true;
    }

    #[inline]
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    #[inline]
    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
    }

    #[inline]
    pub fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    /// Get mutable access to a point. The path is re-measured before its next query.
    #[inline]
    pub fn point_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.dirty = true;
        self.points.get_mut(id.0)
    }

    #[inline]
    pub fn set_point_fixed(&mut self, id: PointId, fixed: Fixed) {
        if let Some(point) = self.point_mut(id) {
            point.set_fixed(fixed);
        }
    }

    /// Anchor a point at its current absolute position, so that it stays put when
    /// the path is moved or rotated.
    pub fn pin_point(&mut self, id: PointId) {
        let absolute = self.point_position(id);
        if let Some(point) = self.point_mut(id) {
            point.local = absolute;
            point.fixed = Fixed::Absolute;
        }
    }

    /// Flag the arc-length tables as stale, e.g. after an external pivot has moved.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    fn has_anchored_points(&self) -> bool {
        self.points
            .iter()
            .any(|point| !matches!(point.fixed, Fixed::Local | Fixed::Point(_)))
    }

    /* Frames */

    #[inline]
    fn to_local(&self, absolute: Vector) -> Vector {
        (absolute - self.start).rotate(-self.roll.degrees())
    }

    #[inline]
    fn to_absolute(&self, local: Vector) -> Vector {
        local.rotate(self.roll.degrees()) + self.start
    }

    /// The position of a point in the path's own frame: scaled, but neither rotated nor
    /// translated.
    #[inline]
    pub fn point_local(&self, id: PointId) -> Vector {
        self.resolve_point(id, self.points.len())
    }

    /// The absolute position of a point.
    #[inline]
    pub fn point_position(&self, id: PointId) -> Vector {
        self.to_absolute(self.point_local(id))
    }

    fn resolve_point(&self, id: PointId, depth: usize) -> Vector {
        let point = match self.points.get(id.0) {
            Some(point) => point,
            None => return Vector::ZERO,
        };

        match &point.fixed {
            Fixed::Local => point.local.scale(self.scale),
            Fixed::Absolute => self.to_local(point.local),
            Fixed::Point(other) if depth > 0 && *other != id => {
                self.resolve_point(*other, depth - 1)
            }
            // a chain of pivots that loops back on itself
            Fixed::Point(_) => point.local.scale(self.scale),
            Fixed::External(pivot) => self.to_local(pivot.position()),
        }
    }

    /* Link evaluation */

    /// Resolve a drawable link into concrete geometry in the local frame.
    pub fn curve(&self, id: LinkId) -> Option<Curve> {
        let link = self.links.get(id.0)?;
        if !link.is_drawable() {
            return None;
        }

        let start = self.point_local(link.start_point);
        let end = self.point_local(link.end_point);
        Some(match link.species {
            Species::Line => Curve::Line { start, end },
            Species::Quadratic { control } => Curve::Quadratic {
                start,
                control: self.point_local(control),
                end,
            },
            Species::Bezier { control1, control2 } => Curve::Bezier {
                start,
                control1: self.point_local(control1),
                control2: self.point_local(control2),
                end,
            },
        })
    }

    /// Parametric position on a link in the path's local frame. Links without geometry
    /// evaluate to the zero vector.
    #[inline]
    pub fn link_local_position(&self, id: LinkId, t: f64) -> Vector {
        self.curve(id)
            .map_or(Vector::ZERO, |curve| curve.eval_at(clamp_unit(t)))
    }

    /// Parametric position on a link, rotated and translated into the absolute frame.
    #[inline]
    pub fn link_position(&self, id: LinkId, t: f64) -> Vector {
        self.to_absolute(self.link_local_position(id, t))
    }

    /// Constant-speed position on a link in the local frame, read from its sample table.
    #[inline]
    pub fn link_local_steady_position(&self, id: LinkId, val: f64) -> Vector {
        self.links
            .get(id.0)
            .and_then(|link| link.local_steady_position(val))
            .unwrap_or_else(|| self.link_local_position(id, val))
    }

    #[inline]
    pub fn link_steady_position(&self, id: LinkId, val: f64) -> Vector {
        self.to_absolute(self.link_local_steady_position(id, val))
    }

    #[inline]
    fn evaluate_link(&self, id: LinkId, val: f64, steady: bool, local: bool) -> Vector {
        let position = if steady {
            self.link_local_steady_position(id, val)
        } else {
            self.link_local_position(id, val)
        };

        if local {
            position
        } else {
            self.to_absolute(position)
        }
    }

    /* Measurement */

    fn sample_link(&self, id: LinkId, precision: usize) -> (SampleTable, f64) {
        let mut samples = SampleTable::new();
        let mut cumulative = 0.0;
        let mut previous: Option<Vector> = None;

        for step in 0..=precision {
            let here = self.link_local_position(id, step as f64 / precision as f64);
            let distance = previous.map_or(0.0, |previous| previous.distance_to(here));
            cumulative += distance;
            samples.push(Sample {
                x: here.x,
                y: here.y,
                step: distance,
                cumulative,
            });
            previous = Some(here);
        }

        (samples, cumulative)
    }

    /// Re-sample a single link's arc-length table and return its length. Without an
    /// explicit `precision` the path's own precision is used.
    ///
    /// The path's duration table is left alone until the next full build, so a link can
    /// be measured more finely without disturbing traversal.
    pub fn set_link_positions(&mut self, id: LinkId, precision: Option<usize>) -> f64 {
        match self.links.get(id.0) {
            Some(link) if link.is_drawable() => {}
            _ => return 0.0,
        }

        let precision = precision.unwrap_or(self.precision).max(1);
        let (samples, length) = self.sample_link(id, precision);
        self.links[id.0].set_samples(samples, length);
        length
    }

    /// Rebuild every drawable link's arc-length table and the path's duration table.
    pub fn build_positions(&mut self) -> &mut Self {
        let precision = self.precision.max(1);
        let mut total = 0.0;
        let mut durations = Vec::with_capacity(self.link_list.len());

        for index in 0..self.link_list.len() {
            let id = self.link_list[index];
            total += self.set_link_positions(id, Some(precision));
            durations.push(total);
        }

        if total > 0.0 {
            durations.iter_mut().for_each(|duration| *duration /= total);
        } else {
            // nothing has length, so share the perimeter out evenly
            let count = durations.len() as f64;
            durations
                .iter_mut()
                .enumerate()
                .for_each(|(index, duration)| *duration = (index + 1) as f64 / count);
        }
        if let Some(last) = durations.last_mut() {
            *last = 1.0;
        }

        log::debug!(
            "Measured {} links at precision {}: perimeter length {}",
            durations.len(),
            precision,
            total
        );

        self.link_durations = durations;
        self.perimeter_length = total;
        self.dirty = false;
        self
    }

    #[inline]
    fn ensure_built(&mut self) {
        if self.dirty || self.link_durations.len() != self.link_list.len() {
            self.build_positions();
        }
    }

    /// The total sampled length of the path. The path is re-measured first if `force` is
    /// set or if anything changed since it was last measured.
    #[inline]
    pub fn perimeter_length(&mut self, force: bool) -> f64 {
        if force {
            self.build_positions();
        } else {
            self.ensure_built();
        }
        self.perimeter_length
    }

    /// Find the point a fraction `val` of the way around the path.
    ///
    /// * `steady` - Travel at constant speed using the arc-length tables, rather than by
    ///   the raw curve parameter.
    /// * `roll` - Also estimate the direction of travel.
    /// * `local` - Report the position in the path's own frame instead of the absolute one.
    ///
    /// Returns `None` if the path has no drawable links.
    pub fn perimeter_position(
        &mut self,
        val: f64,
        steady: bool,
        roll: bool,
        local: bool,
    ) -> Option<PerimeterPosition> {
        self.ensure_built();

        let val = clamp_unit(val);
        let index = self
            .link_durations
            .iter()
            .position(|&duration| duration >= val)?;
        let id = *self.link_list.get(index)?;

        let lower = if index == 0 {
            0.0
        } else {
            self.link_durations[index - 1]
        };
        let span = self.link_durations[index] - lower;
        let link_val = if span > 0.0 {
            clamp_unit((val - lower) / span)
        } else {
            0.0
        };

        let here = self.evaluate_link(id, link_val, steady, local);
        let roll = if roll {
            let before = self.evaluate_link(id, clamp_unit(link_val - TANGENT_EPSILON), steady, local);
            let after = self.evaluate_link(id, clamp_unit(link_val + TANGENT_EPSILON), steady, local);
            Some(Angle::from_radians((after.y - before.y).atan2(after.x - before.x)).unwrap_or_default())
        } else {
            None
        };

        Some(PerimeterPosition {
            x: here.x,
            y: here.y,
            roll,
        })
    }

    /// Local coordinates to use as collision points for this path.
    pub fn collision_vectors(&mut self, spec: &CollisionSpec) -> Vec<Vector> {
        match spec {
            CollisionSpec::Count(count) if *count > 1 => (0..*count)
                .filter_map(|i| self.perimeter_position(i as f64 / *count as f64, true, false, true))
                .map(|position| position.to_vector())
                .collect(),
            CollisionSpec::Count(_) | CollisionSpec::Start => vec![Vector::ZERO],
            CollisionSpec::Fraction(fraction) => self
                .perimeter_position(*fraction, true, false, true)
                .map(|position| vec![position.to_vector()])
                .unwrap_or_default(),
            CollisionSpec::Points(points) => points.clone(),
        }
    }

    /// Offset of the path's handle from its origin. Lines measure from their top-left
    /// corner and closed shapes from their center.
    #[inline]
    pub fn pivot_offset(&self) -> Vector {
        let centered = !self.is_line;
        Vector::new(
            self.handle.x.resolve(self.width * self.scale, centered),
            self.handle.y.resolve(self.height * self.scale, centered),
        )
    }

    /* Drawing */

    /// Replay the path onto a surface, in absolute coordinates.
    pub fn sketch<S: Surface + ?Sized>(&self, surface: &mut S) -> crate::Result {
        surface.begin_path()?;

        let first = match self.first_point {
            Some(first) => first,
            None => return Ok(()),
        };
        let origin = self.point_position(first);
        surface.move_to(origin.x, origin.y)?;

        let mut visited = vec![false; self.links.len()];
        let mut current = self.points.get(first.0).and_then(Point::start_link);

        while let Some(id) = current {
            let link = match self.links.get(id.0) {
                Some(link) => link,
                None => break,
            };
            if std::mem::replace(&mut visited[id.0], true) {
                log::warn!("Link {} was reached twice while sketching; stopping", id.0);
                break;
            }

            let end = self.point_position(link.end_point);
            match link.action {
                Action::End => break,
                Action::Close => surface.close_path()?,
                Action::Move => surface.move_to(end.x, end.y)?,
                Action::Add => match link.species {
                    Species::Line => surface.line_to(end.x, end.y)?,
                    Species::Quadratic { control } => {
                        let control = self.point_position(control);
                        surface.quadratic_curve_to(control.x, control.y, end.x, end.y)?;
                    }
                    Species::Bezier { control1, control2 } => {
                        let control1 = self.point_position(control1);
                        let control2 = self.point_position(control2);
                        surface.bezier_curve_to(
                            control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                        )?;
                    }
                },
            }

            current = self.points.get(link.end_point.0).and_then(Point::start_link);
        }

        Ok(())
    }

    /// Sketch the path onto `surface` and return the first of `tests` that falls inside it,
    /// judged by the path's fill rule.
    pub fn check_hit<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        tests: &[Vector],
    ) -> crate::Result<Option<Vector>> {
        self.sketch(surface)?;

        for test in tests {
            if surface.is_point_in_path(test.x, test.y, self.fill_rule)? {
                return Ok(Some(*test));
            }
        }

        Ok(None)
    }

    /// Export the path's absolute geometry as a `lyon_path::Path`.
    #[inline]
    pub fn to_lyon_path(&self) -> crate::Result<lyon_path::Path> {
        let mut canvas = Canvas::new();
        self.sketch(&mut canvas)?;
        Ok(canvas.to_path())
    }
}
