// MIT/Apache2 License

use ordered_float::NotNan;
use std::fmt;

/// An angle. Never NaN, which lets it be ordered and hashed.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Angle {
    radians: NotNan<f64>,
}

impl Angle {
    /// Create an angle based on the number of radians in the angle. This function returns `None` if the radians given
    /// is NaN.
    #[inline]
    pub fn from_radians(radians: f64) -> Option<Self> {
        NotNan::new(radians).ok().map(|radians| Self { radians })
    }

    /// Create an angle based on the number of degrees in the angle. This function returns `None` if the degrees given
    /// is NaN.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        Self::from_radians(degrees.to_radians())
    }

    /// Get the number of radians in this angle.
    #[inline]
    pub fn radians(self) -> f64 {
        self.radians.into_inner()
    }

    /// Get the number of degrees in this angle.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.radians().to_degrees()
    }
}

impl fmt::Debug for Angle {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}deg)", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversions() {
        assert!(Angle::from_radians(f64::NAN).is_none());
        assert_eq!(Angle::default().degrees(), 0.0);

        let quarter = Angle::from_degrees(90.0).unwrap();
        assert_relative_eq!(quarter.radians(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(quarter.degrees(), 90.0);
        assert!(quarter > Angle::default());
    }
}
