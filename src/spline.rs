/// spline.rs
/// Trait for common abstractions over evaluable curves with runtime dimension
use num_traits::Float;

use crate::NurbsError;

pub trait Spline<T: Float> {
    /// Number of coordinates of an evaluated point.
    fn dim(&self) -> usize;

    /// Evaluate the curve at normalized parameter `t` into `out` (of length `dim()`).
    fn eval_into<'o>(&self, t: T, out: &'o mut [T]) -> Result<&'o mut [T], NurbsError>;

    /// Evaluate the curve at normalized parameter `t` into a new buffer.
    fn eval(&self, t: T) -> Result<Vec<T>, NurbsError> {
        let mut out = vec![T::zero(); self.dim()];
        self.eval_into(t, &mut out)?;
        Ok(out)
    }
}
