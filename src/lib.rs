//! Evaluation of rational B-spline (NURBS) curves.
//!
//! A point on the curve is computed with de Boor's algorithm carried out in
//! homogeneous coordinates, so weighted control points (conics, circles, ...)
//! are evaluated exactly. Control points may have any number of coordinates,
//! only known at runtime; anything implementing [`ControlPoint`] works
//! (`[T; N]`, `Vec<T>`, slices, [`PointN`] and, with the `nalgebra` feature,
//! `nalgebra::SVector`).
//!
//! Available entry points:
//! - [`interpolate()`] and [`interpolate_into()`] evaluate one point from raw
//!   control points with optional knots and weights.
//! - [`Nurbs`] validates a curve once and evaluates it repeatedly.
//!
//! The parameter `t` is normalized: `0` is the start and `1` the end of the
//! knot domain.
//!
//! ```rust
//! use deboor::{interpolate, ErrorKind};
//!
//! let points = [[0.0f64, 0.0], [1.0, 2.0], [2.0, 2.0], [3.0, 0.0]];
//!
//! // default knots [0, 1, ..., 7] give a uniform cubic B-spline
//! let p = interpolate(0.5, 3, &points, None, None).unwrap();
//! assert!((p[1] - 23.0 / 12.0).abs() < 1e-12);
//!
//! let err = interpolate(0.5, 4, &points, None, None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! ```

pub mod adapters;
mod de_boor;
pub mod error;
pub mod knots;
pub mod nurbs;
pub mod point;
pub mod point_generic;
pub mod spline;

pub use error::{ErrorKind, NurbsError};
pub use knots::{
    clamped_knots, find_span, find_span_binary, knot_domain, uniform_knots, unit_weights,
};
pub use nurbs::{interpolate, interpolate_into, Nurbs};
pub use point::ControlPoint;
pub use point_generic::PointN;
pub use spline::Spline;

/// Tolerance for squared errors in tests.
#[cfg(test)]
const EPSILON: f64 = 1e-10;
