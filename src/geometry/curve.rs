// MIT/Apache2 License

use super::Vector;

/// The resolved geometry of one drawable segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Curve {
    Line {
        start: Vector,
        end: Vector,
    },
    Quadratic {
        start: Vector,
        control: Vector,
        end: Vector,
    },
    Bezier {
        start: Vector,
        control1: Vector,
        control2: Vector,
        end: Vector,
    },
}

impl Curve {
    /// Evaluate the curve at parameter `t` through repeated linear interpolation (de Casteljau).
    ///
    /// This is parametric, not constant speed: equal steps in `t` cover unequal distances on curves.
    #[inline]
    pub fn eval_at(self, t: f64) -> Vector {
        match self {
            Curve::Line { start, end } => start.lerp(end, t),
            Curve::Quadratic {
                start,
                control,
                end,
            } => {
                let a = start.lerp(control, t);
                let b = control.lerp(end, t);
                a.lerp(b, t)
            }
            Curve::Bezier {
                start,
                control1,
                control2,
                end,
            } => {
                let a = start.lerp(control1, t);
                let b = control1.lerp(control2, t);
                let c = control2.lerp(end, t);
                let ab = a.lerp(b, t);
                let bc = b.lerp(c, t);
                ab.lerp(bc, t)
            }
        }
    }

    #[inline]
    pub fn start(self) -> Vector {
        match self {
            Curve::Line { start, .. }
            | Curve::Quadratic { start, .. }
            | Curve::Bezier { start, .. } => start,
        }
    }

    #[inline]
    pub fn end(self) -> Vector {
        match self {
            Curve::Line { end, .. } | Curve::Quadratic { end, .. } | Curve::Bezier { end, .. } => {
                end
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints() {
        let quad = Curve::Quadratic {
            start: Vector::new(0.0, 0.0),
            control: Vector::new(50.0, 100.0),
            end: Vector::new(100.0, 0.0),
        };
        assert_eq!(quad.eval_at(0.0), quad.start());
        assert_eq!(quad.eval_at(1.0), quad.end());
        assert_relative_eq!(quad.eval_at(0.5), Vector::new(50.0, 50.0));

        let cubic = Curve::Bezier {
            start: Vector::new(0.0, 0.0),
            control1: Vector::new(0.0, 100.0),
            control2: Vector::new(100.0, 100.0),
            end: Vector::new(100.0, 0.0),
        };
        assert_eq!(cubic.eval_at(0.0), cubic.start());
        assert_eq!(cubic.eval_at(1.0), cubic.end());
        assert_relative_eq!(cubic.eval_at(0.5), Vector::new(50.0, 75.0));
    }

    #[test]
    fn test_line_is_exact() {
        let line = Curve::Line {
            start: Vector::new(-10.0, 4.0),
            end: Vector::new(30.0, -16.0),
        };
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let expected = Vector::new(-10.0 + 40.0 * t, 4.0 - 20.0 * t);
            assert_relative_eq!(line.eval_at(t), expected, epsilon = 1e-12);
        }
    }
}
