// MIT/Apache2 License

//! Ready-made paths for common shapes.
//!
//! Every factory places the path's origin at the given coordinate, builds the
//! geometry relative to it with a [`PathBuilder`], and returns a measured
//! [`Path`]. Options such as precision, roll and fill rule come from the
//! supplied [`PathOptions`], although each factory decides for itself whether
//! the result is an open line or a closed shape.

use super::{Path, PathBuilder, PointId, Species};
use crate::{config::PathOptions, geometry::Vector};

/// Control factor used to approximate quarter ellipses with cubic curves.
const ARC_FACTOR: f64 = 0.55;

/// Upper bound on the sides walked by [`regular_shape`].
const MAX_SIDES: usize = 1000;

/// Which points of a line or curve are pinned to their absolute position, so that they
/// stay put when the path moves or rotates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FixedMode {
    None,
    All,
    /// The start and end points.
    Both,
    Start,
    End,
    /// Every control point.
    Control,
    /// The first control point.
    StartControl,
    /// The last control point.
    EndControl,
}

impl Default for FixedMode {
    #[inline]
    fn default() -> Self {
        FixedMode::None
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Role {
    Start,
    StartControl,
    EndControl,
    End,
}

impl FixedMode {
    #[inline]
    fn pins(self, role: Role) -> bool {
        match self {
            FixedMode::None => false,
            FixedMode::All => true,
            FixedMode::Both => matches!(role, Role::Start | Role::End),
            FixedMode::Start => role == Role::Start,
            FixedMode::End => role == Role::End,
            FixedMode::Control => matches!(role, Role::StartControl | Role::EndControl),
            FixedMode::StartControl => role == Role::StartControl,
            FixedMode::EndControl => role == Role::EndControl,
        }
    }
}

/// Corner radii of a rectangle. Each corner has a horizontal and a vertical radius.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vector,
    pub top_right: Vector,
    pub bottom_right: Vector,
    pub bottom_left: Vector,
}

impl CornerRadii {
    /// The same circular radius on every corner.
    #[inline]
    pub fn uniform(radius: f64) -> Self {
        let radius = Vector::new(radius, radius);
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// How far a regular shape turns between vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Turn {
    /// A polygon with this many sides.
    Sides(usize),
    /// A fixed angle in degrees. 72 draws a pentagon, 144 a five-pointed star.
    Angle(f64),
}

/// The segment drawn between two vertices of a regular shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineType {
    Line,
    Quadratic,
    Bezier,
    /// Cubic curves whose first control mirrors the previous curve.
    Smooth,
    /// Quadratic curves whose control mirrors the previous curve.
    SmoothQuadratic,
}

impl Default for LineType {
    #[inline]
    fn default() -> Self {
        LineType::Line
    }
}

/// Settings for [`regular_shape`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegularShape {
    pub turn: Turn,
    /// Distance from the center to each vertex.
    pub radius: f64,
    pub line_type: LineType,
    /// First control point, relative to the segment's start and aligned with its heading.
    pub control1: Vector,
    /// Second control point, relative to the segment's start and aligned with its heading.
    pub control2: Vector,
}

impl Default for RegularShape {
    #[inline]
    fn default() -> Self {
        Self {
            turn: Turn::Sides(4),
            radius: 20.0,
            line_type: LineType::Line,
            control1: Vector::ZERO,
            control2: Vector::ZERO,
        }
    }
}

impl RegularShape {
    /// Degrees turned between vertices. Degenerate settings fall back to 4 degrees.
    #[inline]
    pub fn step(&self) -> f64 {
        match self.turn {
            Turn::Sides(sides) if sides > 1 => 360.0 / sides as f64,
            Turn::Angle(angle) if angle > 0.0 && angle.is_finite() => angle,
            _ => 4.0,
        }
    }
}

#[inline]
fn builder_for(options: &PathOptions) -> PathBuilder {
    PathBuilder::with_scale(options.scale_x, options.scale_y)
}

/// Wrap the builder's output with the factory's own placement and closure.
fn assemble(
    builder: PathBuilder,
    options: &PathOptions,
    start: Vector,
    closed: bool,
    is_line: bool,
) -> Path {
    let options = PathOptions {
        start,
        closed,
        is_line,
        ..options.clone()
    };
    Path::from_parsed(builder.finish(), &options)
}

/// Pin the points of the path's first drawable link that `fixed` selects.
fn pin(path: &mut Path, fixed: FixedMode) {
    let link = match path.link_list().first().and_then(|&id| path.link(id)) {
        Some(link) => link,
        None => return,
    };

    let mut roles: Vec<(PointId, Role)> = vec![(link.start_point(), Role::Start)];
    match link.species() {
        Species::Line => {}
        Species::Quadratic { control } => roles.push((control, Role::StartControl)),
        Species::Bezier { control1, control2 } => {
            roles.push((control1, Role::StartControl));
            roles.push((control2, Role::EndControl));
        }
    }
    roles.push((link.end_point(), Role::End));

    for (id, role) in roles {
        if fixed.pins(role) {
            path.pin_point(id);
        }
    }
}

fn open_curve(builder: PathBuilder, start: Vector, fixed: FixedMode, options: &PathOptions) -> Path {
    let mut path = assemble(builder, options, start, false, true);
    pin(&mut path, fixed);
    path.build_positions();
    path
}

/// A straight line between two absolute coordinates.
pub fn line(start: Vector, end: Vector, fixed: FixedMode, options: &PathOptions) -> Path {
    let mut builder = builder_for(options);
    builder.move_to(Vector::ZERO).line_to(end - start);
    open_curve(builder, start, fixed, options)
}

/// A quadratic curve between absolute coordinates.
pub fn quadratic(
    start: Vector,
    control: Vector,
    end: Vector,
    fixed: FixedMode,
    options: &PathOptions,
) -> Path {
    let mut builder = builder_for(options);
    builder
        .move_to(Vector::ZERO)
        .quadratic_to(control - start, end - start);
    open_curve(builder, start, fixed, options)
}

/// A cubic bezier curve between absolute coordinates.
pub fn bezier(
    start: Vector,
    control1: Vector,
    control2: Vector,
    end: Vector,
    fixed: FixedMode,
    options: &PathOptions,
) -> Path {
    let mut builder = builder_for(options);
    builder
        .move_to(Vector::ZERO)
        .cubic_to(control1 - start, control2 - start, end - start);
    open_curve(builder, start, fixed, options)
}

/// An ellipse centered on `center`, drawn clockwise from its top.
pub fn ellipse(center: Vector, radius_x: f64, radius_y: f64, options: &PathOptions) -> Path {
    let (rx, ry) = (radius_x, radius_y);
    let (kx, ky) = (rx * ARC_FACTOR, ry * ARC_FACTOR);

    let mut builder = builder_for(options);
    builder
        .move_to(Vector::new(0.0, -ry))
        .cubic_to(Vector::new(kx, -ry), Vector::new(rx, -ky), Vector::new(rx, 0.0))
        .cubic_to(Vector::new(rx, ky), Vector::new(kx, ry), Vector::new(0.0, ry))
        .cubic_to(Vector::new(-kx, ry), Vector::new(-rx, ky), Vector::new(-rx, 0.0))
        .cubic_to(Vector::new(-rx, -ky), Vector::new(-kx, -ry), Vector::new(0.0, -ry))
        .close();

    let mut path = assemble(builder, options, center, true, false);
    path.build_positions();
    path
}

/// A rectangle centered on `center`, with optionally rounded corners.
pub fn rectangle(
    center: Vector,
    width: f64,
    height: f64,
    radii: CornerRadii,
    options: &PathOptions,
) -> Path {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let CornerRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = radii;
    let k = ARC_FACTOR;

    let mut builder = builder_for(options);
    builder
        .move_to(Vector::new(-hw + tl.x, -hh))
        .line_to(Vector::new(hw - tr.x, -hh))
        .cubic_to(
            Vector::new(hw - tr.x + tr.x * k, -hh),
            Vector::new(hw, -hh + tr.y - tr.y * k),
            Vector::new(hw, -hh + tr.y),
        )
        .line_to(Vector::new(hw, hh - br.y))
        .cubic_to(
            Vector::new(hw, hh - br.y + br.y * k),
            Vector::new(hw - br.x + br.x * k, hh),
            Vector::new(hw - br.x, hh),
        )
        .line_to(Vector::new(-hw + bl.x, hh))
        .cubic_to(
            Vector::new(-hw + bl.x - bl.x * k, hh),
            Vector::new(-hw, hh - bl.y + bl.y * k),
            Vector::new(-hw, hh - bl.y),
        )
        .line_to(Vector::new(-hw, -hh + tl.y))
        .cubic_to(
            Vector::new(-hw, -hh + tl.y - tl.y * k),
            Vector::new(-hw + tl.x - tl.x * k, -hh),
            Vector::new(-hw + tl.x, -hh),
        )
        .close();

    let mut path = assemble(builder, options, center, true, false);
    path.build_positions();
    path
}

/// A regular polygon or star around `center`.
///
/// The walk starts `radius` to the right of the center and turns by the shape's step
/// until the heading comes back round to zero.
pub fn regular_shape(center: Vector, shape: &RegularShape, options: &PathOptions) -> Path {
    let step = shape.step();
    let mut builder = builder_for(options);

    let first = Vector::new(shape.radius, 0.0);
    let mut vertex = first;
    builder.move_to(vertex);

    let mut heading = 0.0f64;
    let mut steps = 0;
    loop {
        steps += 1;
        heading = (heading + step) % 360.0;
        let closing = heading < 1e-6 || 360.0 - heading < 1e-6;

        // land exactly on the first vertex so the close adds no extra edge
        let next = if closing { first } else { vertex.rotate(step) };
        // controls follow the direction of the edge
        let edge = (next - vertex).normalize();
        let edge_angle = edge.y.atan2(edge.x).to_degrees();
        let control1 = vertex + shape.control1.rotate(edge_angle);
        let control2 = vertex + shape.control2.rotate(edge_angle);

        match shape.line_type {
            LineType::Line => builder.line_to(next),
            LineType::Quadratic => builder.quadratic_to(control1, next),
            LineType::Bezier => builder.cubic_to(control1, control2, next),
            LineType::Smooth => builder.smooth_cubic_to(control2, next),
            LineType::SmoothQuadratic => builder.smooth_quadratic_to(next),
        };
        vertex = next;

        if closing {
            break;
        }
        if steps >= MAX_SIDES {
            log::warn!(
                "Regular shape with a {} degree step did not close after {} sides",
                step,
                MAX_SIDES
            );
            break;
        }
    }
    builder.close();

    log::trace!(
        "Built a regular shape with {} edges at a {} degree step",
        steps,
        step
    );

    let mut path = assemble(builder, options, center, true, false);
    path.build_positions();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{path::Action, HandleValue};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_line() {
        init();
        let options = PathOptions::default();
        let mut path = line(
            Vector::new(10.0, 10.0),
            Vector::new(40.0, 50.0),
            FixedMode::None,
            &options,
        );
        assert!(!path.is_closed());
        assert!(path.is_line());
        assert_relative_eq!(path.perimeter_length(false), 50.0, epsilon = 1e-9);

        let end = path.perimeter_position(1.0, true, false, false).unwrap();
        assert_abs_diff_eq!(end.to_vector(), Vector::new(40.0, 50.0), epsilon = 1e-9);
    }

    #[test]
    fn test_pinned_end() {
        init();
        let options = PathOptions::default();
        let mut path = line(
            Vector::new(0.0, 0.0),
            Vector::new(100.0, 0.0),
            FixedMode::End,
            &options,
        );
        path.set_start(Vector::new(0.0, 100.0));
        // the free start moved, the pinned end did not
        assert_relative_eq!(
            path.perimeter_length(false),
            100.0 * 2f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_pinned_controls() {
        init();
        let options = PathOptions::default();
        let mut path = bezier(
            Vector::new(0.0, 0.0),
            Vector::new(0.0, 50.0),
            Vector::new(100.0, 50.0),
            Vector::new(100.0, 0.0),
            FixedMode::Control,
            &options,
        );
        let id = path.link_list()[0];
        let (control1, control2) = match path.link(id).unwrap().species() {
            Species::Bezier { control1, control2 } => (control1, control2),
            other => panic!("expected a bezier, got {:?}", other),
        };

        path.set_start(Vector::new(500.0, 500.0));
        assert_abs_diff_eq!(path.point_position(control1), Vector::new(0.0, 50.0), epsilon = 1e-9);
        assert_abs_diff_eq!(path.point_position(control2), Vector::new(100.0, 50.0), epsilon = 1e-9);
        let end = path.link(id).unwrap().end_point();
        assert_abs_diff_eq!(path.point_position(end), Vector::new(600.0, 500.0), epsilon = 1e-9);

        let mut path = quadratic(
            Vector::new(0.0, 0.0),
            Vector::new(50.0, 50.0),
            Vector::new(100.0, 0.0),
            FixedMode::All,
            &options,
        );
        path.set_roll(45.0);
        let end = path.perimeter_position(1.0, false, false, false).unwrap();
        assert_abs_diff_eq!(end.to_vector(), Vector::new(100.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_circle_perimeter() {
        init();
        let options = PathOptions::default();
        let mut path = ellipse(Vector::new(200.0, 200.0), 50.0, 50.0, &options);
        assert!(path.is_closed());
        assert!(!path.is_line());
        assert_abs_diff_eq!(path.perimeter_length(false), 2.0 * PI * 50.0, epsilon = 2.0);
        assert_eq!(path.width(), 100.0);
        assert_eq!(path.height(), 100.0);

        // the walk starts at the top of the circle
        let top = path.perimeter_position(0.0, true, false, false).unwrap();
        assert_abs_diff_eq!(top.to_vector(), Vector::new(200.0, 150.0), epsilon = 1e-9);
        let bottom = path.perimeter_position(0.5, true, false, false).unwrap();
        assert_abs_diff_eq!(bottom.to_vector(), Vector::new(200.0, 250.0), epsilon = 1e-6);

        // closed shapes measure their handle from the center
        assert_eq!(path.pivot_offset(), Vector::ZERO);
    }

    #[test]
    fn test_rectangle() {
        init();
        let options = PathOptions::default();
        let mut path = rectangle(
            Vector::ZERO,
            100.0,
            50.0,
            CornerRadii::default(),
            &options,
        );
        assert_relative_eq!(path.perimeter_length(false), 300.0, epsilon = 1e-9);
        assert_eq!(path.width(), 100.0);
        assert_eq!(path.height(), 50.0);

        // the outline ends where it started, so closing adds no extra edge
        let closes = path
            .links()
            .iter()
            .filter(|link| link.action() == Action::Close)
            .count();
        assert_eq!(closes, 1);
        assert_eq!(path.link_list().len(), 8);

        let mut rounded = rectangle(
            Vector::ZERO,
            100.0,
            50.0,
            CornerRadii::uniform(10.0),
            &options,
        );
        let expected = 2.0 * (80.0 + 30.0) + 2.0 * PI * 10.0;
        assert_abs_diff_eq!(rounded.perimeter_length(false), expected, epsilon = 1.0);
    }

    #[test]
    fn test_regular_shapes() {
        init();
        let options = PathOptions::default();
        let mut square = regular_shape(Vector::ZERO, &RegularShape::default(), &options);
        assert_abs_diff_eq!(
            square.perimeter_length(false),
            4.0 * 20.0 * 2f64.sqrt(),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(square.width(), 40.0, epsilon = 1e-9);

        let star = RegularShape {
            turn: Turn::Angle(144.0),
            radius: 50.0,
            ..RegularShape::default()
        };
        let mut star = regular_shape(Vector::ZERO, &star, &options);
        let edge = 100.0 * (72f64).to_radians().sin();
        assert_abs_diff_eq!(star.perimeter_length(false), 5.0 * edge, epsilon = 1e-6);

        let heptagon = RegularShape {
            turn: Turn::Sides(7),
            ..RegularShape::default()
        };
        let heptagon = regular_shape(Vector::ZERO, &heptagon, &options);
        assert_eq!(heptagon.link_list().len(), 7);
    }

    #[test]
    fn test_regular_shape_closes_on_first_vertex() {
        init();
        let options = PathOptions::default();
        for &sides in &[3usize, 5, 6, 7, 9, 11, 13] {
            let shape = RegularShape {
                turn: Turn::Sides(sides),
                ..RegularShape::default()
            };
            let mut path = regular_shape(Vector::ZERO, &shape, &options);
            assert_eq!(path.link_list().len(), sides, "{} sides", sides);

            let last = path.perimeter_position(1.0, true, false, true).unwrap();
            assert_abs_diff_eq!(last.to_vector(), Vector::new(20.0, 0.0), epsilon = 1e-9);
        }

        // the final edge of a hexagon climbs back to the first vertex at 60 degrees
        let hexagon = RegularShape {
            turn: Turn::Sides(6),
            ..RegularShape::default()
        };
        let mut hexagon = regular_shape(Vector::ZERO, &hexagon, &options);
        let end = hexagon.perimeter_position(1.0, true, true, true).unwrap();
        assert_abs_diff_eq!(end.roll.unwrap().degrees(), 60.0, epsilon = 1e-4);

        let star = RegularShape {
            turn: Turn::Angle(144.0),
            radius: 50.0,
            ..RegularShape::default()
        };
        let star = regular_shape(Vector::ZERO, &star, &options);
        assert_eq!(star.link_list().len(), 5);
    }

    #[test]
    fn test_curved_regular_shape() {
        init();
        let options = PathOptions::default();
        let shape = RegularShape {
            turn: Turn::Sides(6),
            line_type: LineType::Quadratic,
            control1: Vector::new(10.0, -10.0),
            ..RegularShape::default()
        };
        let mut curved = regular_shape(Vector::ZERO, &shape, &options);
        let mut straight = regular_shape(
            Vector::ZERO,
            &RegularShape {
                turn: Turn::Sides(6),
                ..RegularShape::default()
            },
            &options,
        );
        assert!(curved.perimeter_length(false) > straight.perimeter_length(false));
        assert!(curved
            .link_list()
            .iter()
            .any(|&id| matches!(curved.link(id).unwrap().species(), Species::Quadratic { .. })));
    }

    #[test]
    fn test_degenerate_step() {
        let shape = RegularShape {
            turn: Turn::Sides(1),
            ..RegularShape::default()
        };
        assert_eq!(shape.step(), 4.0);
        let shape = RegularShape {
            turn: Turn::Angle(-30.0),
            ..RegularShape::default()
        };
        assert_eq!(shape.step(), 4.0);
        assert_eq!(
            RegularShape {
                turn: Turn::Sides(5),
                ..RegularShape::default()
            }
            .step(),
            72.0
        );
    }

    #[test]
    fn test_line_handle() {
        init();
        let options = PathOptions {
            handle: crate::Handle::new(HandleValue::End, HandleValue::Center),
            ..PathOptions::default()
        };
        let path = line(Vector::ZERO, Vector::new(80.0, 20.0), FixedMode::None, &options);
        assert_eq!(path.pivot_offset(), Vector::new(80.0, 10.0));
    }
}
