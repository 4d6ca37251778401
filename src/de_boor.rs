//! de Boor's algorithm in homogeneous coordinates.

use log::trace;
use num_traits::Float;
use tinyvec::TinyVec;

use crate::ControlPoint;

/// Homogeneous scratch points kept inline up to this many scalars,
/// e.g. a cubic in 3D needs 4 * 4 = 16.
type Scratch<T> = TinyVec<[T; 32]>;

/// Iteratively compute de Boor's algorithm for the rational curve at the
/// already remapped parameter `t` inside knot span `span`, writing the
/// Cartesian result to `out`.
///
/// Only control points `span - degree ..= span` contribute, so just those are
/// lifted to homogeneous coordinates `(x * w, w)`. The pyramid is then built
/// bottom up: at each level a node is blended from its own value and its left
/// neighbour's value of the previous level, storing the result in place. Nodes
/// are visited from right to left so that the left neighbour has not been
/// overwritten yet when it is read.
///
/// Callers guarantee `degree <= span < points.len()`, a non-decreasing knot
/// vector of length `points.len() + degree + 1` with `knots[span] < knots[span + 1]`
/// and `out.len()` equal to the dimension of every control point. The span
/// having non-zero width keeps every `alpha` denominator positive.
pub(crate) fn de_boor<P, T>(
    t: T,
    span: usize,
    degree: usize,
    points: &[P],
    knots: &[T],
    weights: Option<&[T]>,
    out: &mut [T],
) where
    P: ControlPoint<Scalar = T>,
    T: Float + Default,
{
    let dim = out.len();
    let stride = dim + 1;
    let first = span - degree;
    trace!(
        "de Boor: span {} (points {}..={}), degree {}, dim {}",
        span,
        first,
        span,
        degree,
        dim
    );

    // lift to homogeneous coordinates
    let mut v: Scratch<T> = TinyVec::with_capacity((degree + 1) * stride);
    for (i, point) in points[first..=span].iter().enumerate() {
        let w = weights.map_or(T::one(), |weights| weights[first + i]);
        for axis in 0..dim {
            v.push(point.axis(axis) * w);
        }
        v.push(w);
    }

    // level degree + 1 of the pyramid is empty, the last node is done after `degree` levels
    for level in 1..=degree {
        for j in (level..=degree).rev() {
            let i = first + j;
            let alpha = (t - knots[i]) / (knots[i + degree + 1 - level] - knots[i]);

            // v[j] = (1 - alpha) * v[j - 1] + alpha * v[j]
            let (left, right) = v.split_at_mut(j * stride);
            let prev = &left[(j - 1) * stride..];
            for (c, &p) in right[..stride].iter_mut().zip(prev) {
                *c = (T::one() - alpha) * p + alpha * *c;
            }
        }
    }

    // back to cartesian
    let result = &v[degree * stride..];
    let w = result[dim];
    for (o, &c) in out.iter_mut().zip(result) {
        *o = c / w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn linear_blend_of_two_points() {
        let points = [[0.0f64, 0.0], [2.0, 4.0]];
        let knots = [0.0, 0.0, 1.0, 1.0];
        let mut out = [0.0; 2];
        de_boor(0.25, 1, 1, &points, &knots, None, &mut out);
        assert!((out[0] - 0.5).abs() < EPSILON);
        assert!((out[1] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn weights_pull_towards_heavier_point() {
        let points = [[0.0f64], [1.0]];
        let knots = [0.0, 0.0, 1.0, 1.0];
        let mut out = [0.0; 1];
        // (0 * 1 * 0.5 + 1 * 3 * 0.5) / (1 * 0.5 + 3 * 0.5)
        de_boor(0.5, 1, 1, &points, &knots, Some(&[1.0, 3.0][..]), &mut out);
        assert!((out[0] - 0.75).abs() < EPSILON);
    }

    #[test]
    fn scratch_spills_to_heap_for_large_windows() {
        // degree 9 in 5D needs 10 * 6 scalars, more than the inline capacity
        let points: Vec<[f64; 5]> = (0..10).map(|i| [i as f64; 5]).collect();
        let knots: Vec<f64> = crate::clamped_knots(10, 9);
        let mut out = [0.0; 5];
        de_boor(1.0, 9, 9, &points, &knots, None, &mut out);
        for x in out {
            assert!((x - 9.0).abs() < EPSILON);
        }
    }
}
