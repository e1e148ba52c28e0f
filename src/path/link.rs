// MIT/Apache2 License

use super::PointId;
use crate::{geometry::Vector, util::clamp_unit};
use tinyvec::TinyVec;

/// Index of a [`Link`] inside its owning path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub(crate) usize);

impl LinkId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The curve family of a link, along with its control points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Species {
    Line,
    Quadratic { control: PointId },
    Bezier { control1: PointId, control2: PointId },
}

/// What a link does when the path is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draws geometry. Only these links take part in traversal.
    Add,
    /// Lifts the pen and moves to the end point.
    Move,
    /// Closes the current subpath.
    Close,
    /// Marks the end of the path.
    End,
}

/// One entry of a link's arc-length table.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    /// Distance from the previous sample.
    pub step: f64,
    /// Distance from the start of the link.
    pub cumulative: f64,
}

impl Sample {
    #[inline]
    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// Sample storage; common precisions fit without touching the heap.
pub(crate) type SampleTable = TinyVec<[Sample; 16]>;

/// A directed segment between two points of a path.
#[derive(Debug, Clone)]
pub struct Link {
    pub(crate) species: Species,
    pub(crate) action: Action,
    pub(crate) start_point: PointId,
    pub(crate) end_point: PointId,
    pub(crate) samples: SampleTable,
    pub(crate) length: f64,
}

impl Link {
    #[inline]
    pub(crate) fn new(
        species: Species,
        action: Action,
        start_point: PointId,
        end_point: PointId,
    ) -> Self {
        Self {
            species,
            action,
            start_point,
            end_point,
            samples: SampleTable::new(),
            length: 0.0,
        }
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }

    #[inline]
    pub fn start_point(&self) -> PointId {
        self.start_point
    }

    #[inline]
    pub fn end_point(&self) -> PointId {
        self.end_point
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.action == Action::Add
    }

    /// Total sampled length. Zero until the owning path has been built.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The arc-length table, in the path's local frame.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub(crate) fn set_samples(&mut self, samples: SampleTable, length: f64) {
        self.samples = samples;
        self.length = length;
    }

    /// Look up the point that lies a fraction `val` of this link's length along it, in the
    /// path's local frame.
    ///
    /// Returns `None` if the link has not been sampled yet.
    pub fn local_steady_position(&self, val: f64) -> Option<Vector> {
        let first = self.samples.first()?;
        let distance = (clamp_unit(val) * self.length).max(0.0).min(self.length);

        let bracket = self
            .samples
            .windows(2)
            .find(|pair| distance <= pair[1].cumulative);

        match bracket {
            Some(pair) => {
                let (prev, next) = (pair[0], pair[1]);
                if next.step <= 0.0 {
                    // zero-length step, nothing to interpolate across
                    Some(prev.position())
                } else {
                    let fraction = clamp_unit((distance - prev.cumulative) / next.step);
                    Some(prev.position().lerp(next.position(), fraction))
                }
            }
            None => Some(
                self.samples
                    .last()
                    .map_or_else(|| first.position(), Sample::position),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table(points: &[(f64, f64)]) -> (SampleTable, f64) {
        let mut samples = SampleTable::new();
        let mut cumulative = 0.0;
        let mut previous: Option<Vector> = None;
        for &(x, y) in points {
            let here = Vector::new(x, y);
            let step = previous.map_or(0.0, |p| p.distance_to(here));
            cumulative += step;
            samples.push(Sample {
                x,
                y,
                step,
                cumulative,
            });
            previous = Some(here);
        }
        (samples, cumulative)
    }

    #[test]
    fn test_unsampled() {
        let link = Link::new(Species::Line, Action::Add, PointId(0), PointId(1));
        assert!(link.local_steady_position(0.5).is_none());
        assert!(link.is_drawable());
    }

    #[test]
    fn test_steady_lookup() {
        let mut link = Link::new(Species::Line, Action::Add, PointId(0), PointId(1));
        // uneven spacing: the lookup must follow distance, not sample index
        let (samples, length) = table(&[(0.0, 0.0), (10.0, 0.0), (100.0, 0.0)]);
        link.set_samples(samples, length);

        assert_eq!(link.length(), 100.0);
        assert_relative_eq!(link.local_steady_position(0.0).unwrap(), Vector::ZERO);
        assert_relative_eq!(
            link.local_steady_position(0.05).unwrap(),
            Vector::new(5.0, 0.0)
        );
        assert_relative_eq!(
            link.local_steady_position(0.5).unwrap(),
            Vector::new(50.0, 0.0)
        );
        assert_relative_eq!(
            link.local_steady_position(1.0).unwrap(),
            Vector::new(100.0, 0.0)
        );

        // out of range values clamp
        assert_relative_eq!(
            link.local_steady_position(7.0).unwrap(),
            Vector::new(100.0, 0.0)
        );
        assert_relative_eq!(link.local_steady_position(-1.0).unwrap(), Vector::ZERO);
    }

    #[test]
    fn test_zero_length_link() {
        let mut link = Link::new(Species::Line, Action::Add, PointId(0), PointId(0));
        let (samples, length) = table(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]);
        link.set_samples(samples, length);

        assert_eq!(link.length(), 0.0);
        let found = link.local_steady_position(0.5).unwrap();
        assert!(found.is_finite());
        assert_eq!(found, Vector::new(5.0, 5.0));
    }
}
