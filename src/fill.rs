// MIT/Apache2 License

/// Defines which regions of a path count as "inside" it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// A point is inside if the winding number around it is not zero.
    NonZero,
    /// A point is inside if a ray from it crosses an odd number of edges.
    EvenOdd,
}

impl Default for FillRule {
    #[inline]
    fn default() -> Self {
        FillRule::NonZero
    }
}

impl FillRule {
    /// Tell whether a region with the given winding number is filled.
    #[inline]
    pub fn is_in(self, winding: i32) -> bool {
        lyon_path::FillRule::from(self).is_in(winding as i16)
    }
}

impl From<FillRule> for lyon_path::FillRule {
    #[inline]
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::NonZero => lyon_path::FillRule::NonZero,
            FillRule::EvenOdd => lyon_path::FillRule::EvenOdd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winding_rules() {
        assert!(FillRule::NonZero.is_in(2));
        assert!(FillRule::NonZero.is_in(-1));
        assert!(!FillRule::NonZero.is_in(0));

        assert!(FillRule::EvenOdd.is_in(1));
        assert!(FillRule::EvenOdd.is_in(-3));
        assert!(!FillRule::EvenOdd.is_in(2));
    }
}
