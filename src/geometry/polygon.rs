// MIT/Apache2 License

use crate::{util::approx_eq, FillRule};
use lyon_geom::{LineSegment, Point};
use lyon_path::{iterator::PathIterator, PathEvent};

/// One or more closed polygons, flattened from path events.
///
/// Every subpath is treated as closed, which matches how fills treat open
/// subpaths.
#[derive(Debug, Default, Clone)]
pub struct Polygon {
    edges: Vec<Edge>,
}

impl Polygon {
    /// Add an edge to this polygon.
    #[inline]
    pub fn add_edge(&mut self, p1: Point<f32>, p2: Point<f32>) {
        let edge = Edge::new(p1, p2);

        // horizontal edges never cross a horizontal ray
        if !approx_eq(edge.top, edge.bottom) {
            self.edges.push(edge);
        }
    }

    /// Collect from a path event iterator with a given tolerance.
    pub fn from_events_with_tolerance(
        iter: impl IntoIterator<Item = PathEvent>,
        tolerance: f32,
    ) -> Self {
        let mut polygon = Self::default();
        for event in iter.into_iter().flattened(tolerance) {
            match event {
                PathEvent::Line { from, to } => polygon.add_edge(from, to),
                PathEvent::End { last, first, .. } => polygon.add_edge(last, first),
                _ => {}
            }
        }
        polygon
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum the signed crossings of a ray cast from `point` toward positive X.
    #[inline]
    pub fn winding_number(&self, point: Point<f32>) -> i32 {
        self.edges.iter().map(|edge| edge.winding_at(point)).sum()
    }

    /// Tell whether `point` lies inside the polygon under the given fill rule.
    #[inline]
    pub fn contains(&self, point: Point<f32>, rule: FillRule) -> bool {
        rule.is_in(self.winding_number(point))
    }
}

/// An edge in a `Polygon`.
#[derive(Debug, Copy, Clone)]
pub struct Edge {
    /// The segment that this edge exists along.
    pub line: LineSegment<f32>,
    /// The highest point (lowest Y) on this edge.
    pub top: f32,
    /// The lowest point (highest Y) on this edge.
    pub bottom: f32,
    /// The direction this edge goes in.
    pub direction: Direction,
}

impl Edge {
    /// Create a new `Edge` from two points.
    #[inline]
    pub fn new(p1: Point<f32>, p2: Point<f32>) -> Self {
        let (top, bottom, direction) = if p1.y <= p2.y {
            (p1.y, p2.y, Direction::Forward)
        } else {
            (p2.y, p1.y, Direction::Backwards)
        };

        Self {
            line: LineSegment { from: p1, to: p2 },
            top,
            bottom,
            direction,
        }
    }

    /// The signed contribution of this edge to the winding number around `point`.
    ///
    /// The vertical range is half-open so a vertex shared by two edges is only
    /// counted once.
    #[inline]
    pub fn winding_at(&self, point: Point<f32>) -> i32 {
        if point.y < self.top || point.y >= self.bottom {
            return 0;
        }

        if self.line.solve_x_for_y(point.y) > point.x {
            match self.direction {
                Direction::Forward => 1,
                Direction::Backwards => -1,
            }
        } else {
            0
        }
    }
}

/// The direction that an `Edge` moves in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Downwards, toward increasing Y.
    Forward,
    Backwards,
}

impl Default for Direction {
    #[inline]
    fn default() -> Self {
        Direction::Forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon_geom::point;

    fn square(x: f32, y: f32, size: f32, clockwise: bool) -> Vec<PathEvent> {
        let mut corners = vec![
            point(x, y),
            point(x + size, y),
            point(x + size, y + size),
            point(x, y + size),
        ];
        if !clockwise {
            corners.reverse();
        }

        let mut events = vec![PathEvent::Begin { at: corners[0] }];
        for pair in corners.windows(2) {
            events.push(PathEvent::Line {
                from: pair[0],
                to: pair[1],
            });
        }
        events.push(PathEvent::End {
            last: corners[3],
            first: corners[0],
            close: true,
        });
        events
    }

    #[test]
    fn test_horizontal_edges_skipped() {
        let polygon = Polygon::from_events_with_tolerance(square(0.0, 0.0, 10.0, true), 0.1);
        assert_eq!(polygon.edges().len(), 2);

        let mut polygon = Polygon::default();
        polygon.add_edge(point(0.0, 0.0), point(10.0, 0.0));
        assert!(polygon.edges().is_empty());
        polygon.add_edge(point(10.0, 0.0), point(10.0, 10.0));
        assert_eq!(polygon.edges().len(), 1);
    }

    #[test]
    fn test_winding() {
        let mut events = square(0.0, 0.0, 100.0, true);
        events.extend(square(25.0, 25.0, 50.0, true));
        let polygon = Polygon::from_events_with_tolerance(events, 0.1);

        assert_eq!(polygon.winding_number(point(50.0, 50.0)).abs(), 2);
        assert!(polygon.contains(point(50.0, 50.0), FillRule::NonZero));
        assert!(!polygon.contains(point(50.0, 50.0), FillRule::EvenOdd));
        assert!(polygon.contains(point(10.0, 50.0), FillRule::EvenOdd));
        assert!(!polygon.contains(point(150.0, 50.0), FillRule::NonZero));

        // an inner square wound the other way cancels out
        let mut events = square(0.0, 0.0, 100.0, true);
        events.extend(square(25.0, 25.0, 50.0, false));
        let polygon = Polygon::from_events_with_tolerance(events, 0.1);
        assert_eq!(polygon.winding_number(point(50.0, 50.0)), 0);
        assert!(!polygon.contains(point(50.0, 50.0), FillRule::NonZero));
    }

    #[test]
    fn test_open_subpath_is_closed() {
        let events = vec![
            PathEvent::Begin {
                at: point(0.0, 0.0),
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(100.0, 0.0),
            },
            PathEvent::Line {
                from: point(100.0, 0.0),
                to: point(100.0, 100.0),
            },
            PathEvent::End {
                last: point(100.0, 100.0),
                first: point(0.0, 0.0),
                close: false,
            },
        ];
        let polygon = Polygon::from_events_with_tolerance(events, 0.1);
        assert!(polygon.contains(point(75.0, 25.0), FillRule::NonZero));
        assert!(!polygon.contains(point(25.0, 75.0), FillRule::NonZero));
    }
}
