use num_traits::Float;

/// Trait defined over control points whose dimensionality is only known at runtime.
/// Many libraries already provide Point-types, so implementing this trait is mostly
/// wrapping their component access.
/// Keeping the trait as minimal as possible to make integration with other libraries easy:
/// the evaluator only ever reads coordinates, it never builds points of type `Self`.
pub trait ControlPoint {
    type Scalar: Float;

    /// Number of coordinates (components) of the point.
    fn dim(&self) -> usize;

    /// Returns the component of the point on its axis corresponding to index
    /// e.g. [0, 1, 2] -> [x, y, z].
    /// `index` is always smaller than `dim()`.
    fn axis(&self, index: usize) -> Self::Scalar;
}

impl<T: Float, const N: usize> ControlPoint for [T; N] {
    type Scalar = T;

    fn dim(&self) -> usize {
        N
    }

    fn axis(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Float> ControlPoint for [T] {
    type Scalar = T;

    fn dim(&self) -> usize {
        self.len()
    }

    fn axis(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Float> ControlPoint for Vec<T> {
    type Scalar = T;

    fn dim(&self) -> usize {
        self.len()
    }

    fn axis(&self, index: usize) -> T {
        self[index]
    }
}

impl<P: ControlPoint + ?Sized> ControlPoint for &P {
    type Scalar = P::Scalar;

    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn axis(&self, index: usize) -> Self::Scalar {
        (**self).axis(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_dimension_of_point_types() {
        let array = [1.0f64, 2.0, 3.0];
        let vec = vec![1.0f32, 2.0];
        let slice: &[f64] = &array[..1];

        assert_eq!(array.dim(), 3);
        assert_eq!(vec.dim(), 2);
        assert_eq!(slice.dim(), 1);
        assert_eq!((&array).axis(2), 3.0);
        assert_eq!(vec.axis(1), 2.0);
    }
}
