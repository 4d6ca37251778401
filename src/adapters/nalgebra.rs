//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to use `nalgebra::SVector<T, D>`
//! as a `ControlPoint`. Add `nalgebra` as a direct dependency to construct the vectors
//! in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::Vector3;
//! use deboor::interpolate;
//!
//! let points = [
//!     Vector3::new(0.0, 0.0, 0.0),
//!     Vector3::new(1.0, 2.0, 0.0),
//!     Vector3::new(2.0, 0.0, 1.0),
//! ];
//!
//! let mid = interpolate(0.5, 2, &points, None, None).unwrap();
//! # let _ = mid;
//! ```
//!
//! The scalar type must satisfy `nalgebra::Scalar` and `num_traits::Float`
//! (e.g. `f32` or `f64`).

use nalgebra::{Scalar, SVector};
use num_traits::Float;

use crate::point::ControlPoint;

impl<T, const D: usize> ControlPoint for SVector<T, D>
where
    T: Scalar + Float,
{
    type Scalar = T;

    fn dim(&self) -> usize {
        D
    }

    fn axis(&self, index: usize) -> T {
        self[index]
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;

    use crate::{clamped_knots, interpolate, EPSILON};

    #[test]
    fn svector_control_points() {
        let points = [Vector2::new(0.0f64, 0.0), Vector2::new(4.0, 2.0)];
        let knots = clamped_knots(2, 1);
        let p = interpolate(0.25, 1, &points, Some(knots.as_slice()), None).unwrap();
        let p = Vector2::from_column_slice(&p);
        assert!((p - Vector2::new(1.0, 0.5)).magnitude_squared() < EPSILON);
    }
}
