use std::borrow::Cow;

use log::{debug, trace};
use num_traits::Float;

use crate::de_boor::de_boor;
use crate::knots::{check_degree, check_knots, check_weights, locate, uniform_knots};
use crate::{ControlPoint, NurbsError, Spline};

/// Evaluate the rational B-spline defined by `points` at the normalized parameter `t`.
///
/// `t` is remapped linearly from `[0, 1]` onto the knot domain
/// `[knots[degree], knots[knots.len() - 1 - degree]]`, so values of `t` outside
/// `[0, 1]` end up outside the domain and are rejected. Any `t` in `[0, 1]` is
/// accepted: `t = 1` evaluates the end of the domain even when the remap rounds a
/// little past it. If `knots` is None the integer sequence `[0, 1, ..., n + degree]`
/// is used, if `weights` is None every control point gets weight 1.
///
/// Knots may repeat. A parameter on a repeated knot is evaluated in the lowest
/// span of non-zero width containing it, so a start knot repeated more than
/// `degree + 1` times still gives a finite point (the extra control points at the
/// front get no influence).
///
/// Returns a newly allocated point with the dimension of the first control point.
/// Use [`interpolate_into`] to write into an existing buffer instead.
///
/// # Errors
/// `OutOfRange` kind errors for a malformed setup (degree outside `1..=n-1`,
/// knot vector length other than `n + degree + 1`, decreasing knots, an empty knot
/// domain, non-positive weights, control points of differing dimension),
/// `OutOfDomain` if the remapped parameter falls outside the knot domain.
///
/// # Examples
/// ```rust
/// use deboor::{clamped_knots, interpolate};
///
/// let points = [[0.0f64, 0.0], [1.0, 2.0], [2.0, 2.0], [3.0, 0.0]];
/// let knots = clamped_knots(points.len(), 3);
/// let mid = interpolate(0.5, 3, &points, Some(knots.as_slice()), None).unwrap();
/// assert!((mid[0] - 1.5).abs() < 1e-12);
/// assert!((mid[1] - 1.5).abs() < 1e-12);
/// ```
pub fn interpolate<P, T>(
    t: T,
    degree: usize,
    points: &[P],
    knots: Option<&[T]>,
    weights: Option<&[T]>,
) -> Result<Vec<T>, NurbsError>
where
    P: ControlPoint<Scalar = T>,
    T: Float + Default,
{
    let dim = validate(degree, points, knots, weights)?;
    let mut out = vec![T::zero(); dim];
    evaluate(t, degree, points, knots, weights, &mut out)?;
    Ok(out)
}

/// Same as [`interpolate`] but writes the point into `out`, which must hold exactly
/// as many values as a control point has coordinates. Returns `out` on success.
///
/// # Examples
/// ```rust
/// use deboor::interpolate_into;
///
/// let points = [[0.0f64, 0.0], [1.0, 1.0], [2.0, 0.0]];
/// let mut buf = [0.0; 2];
/// interpolate_into(0.5, 1, &points, None, None, &mut buf).unwrap();
/// assert_eq!(buf, [1.0, 1.0]);
/// ```
pub fn interpolate_into<'o, P, T>(
    t: T,
    degree: usize,
    points: &[P],
    knots: Option<&[T]>,
    weights: Option<&[T]>,
    out: &'o mut [T],
) -> Result<&'o mut [T], NurbsError>
where
    P: ControlPoint<Scalar = T>,
    T: Float + Default,
{
    let dim = validate(degree, points, knots, weights)?;
    check_output(dim, out)?;
    evaluate(t, degree, points, knots, weights, out)?;
    Ok(out)
}

fn evaluate<P, T>(
    t: T,
    degree: usize,
    points: &[P],
    knots: Option<&[T]>,
    weights: Option<&[T]>,
    out: &mut [T],
) -> Result<(), NurbsError>
where
    P: ControlPoint<Scalar = T>,
    T: Float + Default,
{
    let knots: Cow<'_, [T]> = match knots {
        Some(knots) => Cow::Borrowed(knots),
        None => Cow::Owned(uniform_knots(points.len(), degree)),
    };
    let knots: &[T] = &knots;
    let (mapped, span) = locate(knots, degree, t)?;
    de_boor(mapped, span, degree, points, knots, weights, out);
    Ok(())
}

/// Checks the structure of a curve and returns the dimension of its control points.
fn validate<P, T>(
    degree: usize,
    points: &[P],
    knots: Option<&[T]>,
    weights: Option<&[T]>,
) -> Result<usize, NurbsError>
where
    P: ControlPoint<Scalar = T>,
    T: Float,
{
    let n = points.len();
    check_degree(n, degree)?;
    if let Some(knots) = knots {
        check_knots(knots, n, degree)?;
    }
    if let Some(weights) = weights {
        check_weights(weights, n)?;
    }
    check_dimensions(points)
}

fn check_dimensions<P: ControlPoint>(points: &[P]) -> Result<usize, NurbsError> {
    let dim = points.first().map_or(0, |p| p.dim());
    if dim == 0 {
        debug!("first control point has no coordinates");
        return Err(NurbsError::DimensionMismatch {
            index: 0,
            expected: 1,
            actual: 0,
        });
    }
    if let Some(index) = points.iter().position(|p| p.dim() != dim) {
        debug!("control point {} does not have {} coordinates", index, dim);
        return Err(NurbsError::DimensionMismatch {
            index,
            expected: dim,
            actual: points[index].dim(),
        });
    }
    Ok(dim)
}

fn check_output<T>(dim: usize, out: &[T]) -> Result<(), NurbsError> {
    if out.len() != dim {
        debug!("output buffer holds {} values, curve has {} dimensions", out.len(), dim);
        return Err(NurbsError::OutputLength {
            expected: dim,
            actual: out.len(),
        });
    }
    Ok(())
}

/// A validated rational B-spline curve.
///
/// Construction checks degree, knots, weights and control point dimensions once and
/// materializes default knots and weights, so evaluation can only fail because of
/// the parameter (or a wrongly sized output buffer).
///
/// # Examples
/// ```rust
/// use deboor::{clamped_knots, Nurbs};
///
/// // quarter of the unit circle as a rational quadratic
/// let w = core::f64::consts::FRAC_1_SQRT_2;
/// let arc = Nurbs::new(
///     2,
///     vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
///     Some(clamped_knots(3, 2)),
///     Some(vec![1.0, w, 1.0]),
/// )
/// .unwrap();
///
/// let p = arc.eval(0.3).unwrap();
/// assert!((p[0] * p[0] + p[1] * p[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Nurbs<P, T> {
    degree: usize,
    dim: usize,
    control_points: Vec<P>,
    knots: Vec<T>,
    weights: Vec<T>,
    domain: (T, T),
}

impl<P, T> Nurbs<P, T>
where
    P: ControlPoint<Scalar = T>,
    T: Float + Default,
{
    /// Create a new curve of `degree` over `control_points`.
    /// Missing knots default to `[0, 1, ..., n + degree]`, missing weights to 1.
    /// A curve requires at least one more control point than the degree and, if
    /// given, exactly `control_points.len() + degree + 1` non-decreasing knots and
    /// one positive weight per control point.
    pub fn new(
        degree: usize,
        control_points: Vec<P>,
        knots: Option<Vec<T>>,
        weights: Option<Vec<T>>,
    ) -> Result<Self, NurbsError> {
        let n = control_points.len();
        let dim = validate(degree, &control_points, knots.as_deref(), weights.as_deref())?;
        let knots = knots.unwrap_or_else(|| uniform_knots(n, degree));
        let weights = weights.unwrap_or_else(|| vec![T::one(); n]);
        let domain = (knots[degree], knots[knots.len() - 1 - degree]);
        trace!("new curve: {} control points, degree {}, dim {}", n, degree, dim);
        Ok(Nurbs {
            degree,
            dim,
            control_points,
            knots,
            weights,
            domain,
        })
    }

    /// Compute the point at normalized parameter `t` (`0` maps to the start of the
    /// knot domain, `1` to its end). Parameters outside `[0, 1]` fail with
    /// `OutOfDomain`, see [`interpolate`] for how repeated knots are handled.
    pub fn eval(&self, t: T) -> Result<Vec<T>, NurbsError> {
        let mut out = vec![T::zero(); self.dim];
        self.eval_into(t, &mut out)?;
        Ok(out)
    }

    /// Compute the point at `t` into `out`, which must hold `dim()` values.
    pub fn eval_into<'o>(&self, t: T, out: &'o mut [T]) -> Result<&'o mut [T], NurbsError> {
        check_output(self.dim, out)?;
        let (mapped, span) = locate(&self.knots, self.degree, t)?;
        de_boor(
            mapped,
            span,
            self.degree,
            &self.control_points,
            &self.knots,
            Some(self.weights.as_slice()),
            out,
        );
        Ok(out)
    }

    /// Get the min and max knot values the curve is defined over.
    pub fn knot_domain(&self) -> (T, T) {
        self.domain
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of coordinates of each control point (and of each evaluated point).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    pub fn weights(&self) -> &[T] {
        &self.weights
    }
}

impl<P, T> Spline<T> for Nurbs<P, T>
where
    P: ControlPoint<Scalar = T>,
    T: Float + Default,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn eval_into<'o>(&self, t: T, out: &'o mut [T]) -> Result<&'o mut [T], NurbsError> {
        Nurbs::eval_into(self, t, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clamped_knots, ErrorKind, PointN, EPSILON};

    fn squared_error(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
    }

    #[test]
    fn construct_and_eval() {
        // degree 3, 4 control points => 4+3+1=8 knots
        let points = vec![
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([4.3f64, 3f64]),
            PointN::new([3.2f64, -4f64]),
        ];
        let knots = vec![0., 0., 0., 1., 2., 3., 3., 3.];
        let curve = Nurbs::new(3, points, Some(knots), None).unwrap();

        let (kmin, kmax) = curve.knot_domain();
        assert_eq!((kmin, kmax), (1.0, 2.0));

        // reference values of the non-rational spline at the domain ends and middle
        let start = curve.eval(0.0).unwrap();
        assert!(squared_error(&start, &[1.358333333333, 0.359166666667]) < EPSILON);
        let mid = curve.eval(0.5).unwrap();
        assert!(squared_error(&mid, &[2.63125, 0.8678125]) < EPSILON);
        let end = curve.eval(1.0).unwrap();
        assert!(squared_error(&end, &[3.491666666667, 0.583333333333]) < EPSILON);
    }

    #[test]
    fn construction_rejects_bad_setup() {
        let points = vec![[0.0f64, 0.0], [1.0, 1.0], [2.0, 0.0]];
        assert_eq!(
            Nurbs::new(3, points.clone(), None, None),
            Err(NurbsError::DegreeTooHigh { degree: 3, max: 2 })
        );
        assert_eq!(
            Nurbs::new(2, points.clone(), None, Some(vec![1.0, -1.0, 1.0])),
            Err(NurbsError::NonPositiveWeight { index: 1 })
        );

        let ragged = vec![vec![0.0f64, 0.0], vec![1.0], vec![2.0, 0.0]];
        assert_eq!(
            Nurbs::new(1, ragged, None, None),
            Err(NurbsError::DimensionMismatch {
                index: 1,
                expected: 2,
                actual: 1
            })
        );

        assert_eq!(
            Nurbs::new(1, points.clone(), Some(vec![0.0, 1.0, 1.0, 1.0, 2.0]), None),
            Err(NurbsError::EmptyKnotDomain { low: 1, high: 3 })
        );

        let empty: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert_eq!(
            Nurbs::new(1, empty, None, None).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn defaults_are_materialized() {
        let curve = Nurbs::new(1, vec![[0.0f32], [1.0], [4.0]], None, None).unwrap();
        assert_eq!(curve.knots(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(curve.weights(), &[1.0, 1.0, 1.0]);
        assert_eq!(curve.knot_domain(), (1.0, 3.0));
        assert_eq!(curve.degree(), 1);
        assert_eq!(curve.control_points().len(), 3);
        assert_eq!(curve.eval(0.75).unwrap(), vec![2.5]);
    }

    #[test]
    fn curve_and_free_function_agree() {
        let points = vec![
            [0.0f64, 1.0, 2.0],
            [1.0, 3.0, -1.0],
            [2.5, 0.0, 0.5],
            [4.0, 1.0, 1.0],
            [5.0, 2.0, 0.0],
        ];
        let knots = vec![0.0, 0.0, 0.0, 0.3, 0.7, 1.0, 1.0, 1.0];
        let weights = vec![1.0, 2.0, 0.5, 1.5, 1.0];
        let curve = Nurbs::new(
            2,
            points.clone(),
            Some(knots.clone()),
            Some(weights.clone()),
        )
        .unwrap();

        let nsteps: usize = 100;
        for i in 0..=nsteps {
            let t = i as f64 / nsteps as f64;
            let a = curve.eval(t).unwrap();
            let b = interpolate(
                t,
                2,
                &points,
                Some(knots.as_slice()),
                Some(weights.as_slice()),
            )
            .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn eval_through_spline_trait() {
        fn sample<S: Spline<f64>>(spline: &S) -> Vec<f64> {
            spline.eval(0.5).unwrap()
        }
        let points = vec![[0.0f64, 0.0], [2.0, 2.0]];
        let curve = Nurbs::new(1, points, Some(clamped_knots(2, 1)), None).unwrap();
        assert_eq!(sample(&curve), vec![1.0, 1.0]);
        assert_eq!(Spline::dim(&curve), 2);
    }

    #[test]
    fn output_buffer_must_match_dimension() {
        let points = [[0.0f64, 0.0], [1.0, 1.0]];
        let mut short = [0.0; 1];
        assert_eq!(
            interpolate_into(0.5, 1, &points, None, None, &mut short),
            Err(NurbsError::OutputLength {
                expected: 2,
                actual: 1
            })
        );
        let curve = Nurbs::new(1, points.to_vec(), None, None).unwrap();
        let mut long = [0.0; 3];
        assert!(curve.eval_into(0.5, &mut long).is_err());
    }
}
