// MIT/Apache2 License

use std::fmt;

/// Sum error type for chalkpath operations.
#[derive(Debug)]
pub enum Error {
    /// Attempted to run an operation that the surface does not support.
    NotSupported(NSOpType),
    /// A coordinate handed to a surface was NaN or infinite.
    NonFinite { x: f64, y: f64 },
}

/// An operation that is not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NSOpType {
    /// Point-in-path containment queries.
    Containment,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported(nsop) => {
                write!(f, "Surface does not support feature \"{:?}\"", nsop)
            }
            Self::NonFinite { x, y } => write!(f, "Coordinate ({}, {}) is not finite", x, y),
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::NotSupported(NSOpType::Containment);
        assert_eq!(err.to_string(), "Surface does not support feature \"Containment\"");
        let err = Error::NonFinite { x: f64::NAN, y: 1.0 };
        assert_eq!(err.to_string(), "Coordinate (NaN, 1) is not finite");
    }
}
