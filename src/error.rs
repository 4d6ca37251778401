//! Error types for curve evaluation.

use thiserror::Error;

/// The two failure classes of an evaluation.
///
/// `OutOfRange` means the curve setup is malformed (degree, vector lengths, ...),
/// `OutOfDomain` means the setup is fine but the requested parameter is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    OutOfDomain,
}

/// Errors that can occur while validating or evaluating a NURBS curve.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NurbsError {
    /// No control points were given.
    #[error("at least one control point is required")]
    NoControlPoints,

    /// The degree is below 1.
    #[error("degree must be at least 1 (linear), got {degree}")]
    DegreeTooLow { degree: usize },

    /// The degree exceeds the number of control points minus one.
    #[error("degree must be less than or equal to point count - 1 ({max}), got {degree}")]
    DegreeTooHigh { degree: usize, max: usize },

    /// The knot vector does not hold `n + degree + 1` values.
    #[error("bad knot vector length: expected {expected}, got {actual}")]
    KnotCount { expected: usize, actual: usize },

    /// A knot is smaller than its predecessor (or NaN).
    #[error("knot vector must be non-decreasing, violated at index {index}")]
    UnsortedKnots { index: usize },

    /// The knots bounding the domain, `knots[degree]` and `knots[len - 1 - degree]`,
    /// are equal.
    #[error("knot domain is empty: knots[{low}] equals knots[{high}]")]
    EmptyKnotDomain { low: usize, high: usize },

    /// The weight vector does not hold one weight per control point.
    #[error("bad weight vector length: expected {expected}, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    /// A weight is zero, negative or NaN.
    #[error("weight {index} must be positive")]
    NonPositiveWeight { index: usize },

    /// A control point has a different dimensionality than the first one.
    #[error("control point {index} has {actual} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// The output buffer cannot hold exactly one curve point.
    #[error("bad output buffer length: expected {expected}, got {actual}")]
    OutputLength { expected: usize, actual: usize },

    /// The remapped parameter lies outside the knot domain `[low, high]`.
    #[error("parameter {t} is out of bounds of the knot domain [{low}, {high}]")]
    OutOfDomain { t: f64, low: f64, high: f64 },
}

impl NurbsError {
    /// Classifies the error into bad setup (`OutOfRange`) or bad parameter (`OutOfDomain`).
    pub fn kind(&self) -> ErrorKind {
        match self {
            NurbsError::OutOfDomain { .. } => ErrorKind::OutOfDomain,
            _ => ErrorKind::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_messages() {
        let err = NurbsError::KnotCount {
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "bad knot vector length: expected 8, got 7");

        let err = NurbsError::EmptyKnotDomain { low: 1, high: 2 };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "knot domain is empty: knots[1] equals knots[2]");

        let err = NurbsError::OutOfDomain {
            t: 5.0,
            low: 3.0,
            high: 4.0,
        };
        assert_eq!(err.kind(), ErrorKind::OutOfDomain);
        assert_eq!(
            err.to_string(),
            "parameter 5 is out of bounds of the knot domain [3, 4]"
        );
    }
}
