//! Knot and weight vectors: defaults, validation, domain and knot span lookup.

use log::debug;
use num_traits::Float;

use crate::NurbsError;

/// Default knot vector `[0, 1, 2, ..., n + degree]` for `n` control points.
///
/// The curve built on these knots does not pass through its first and last
/// control points; use [`clamped_knots`] for that.
///
/// # Examples
/// ```rust
/// let knots: Vec<f64> = deboor::uniform_knots(4, 3);
/// assert_eq!(knots, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
/// ```
pub fn uniform_knots<T: Float>(n: usize, degree: usize) -> Vec<T> {
    let mut knots = Vec::with_capacity(n + degree + 1);
    let mut value = T::zero();
    for _ in 0..n + degree + 1 {
        knots.push(value);
        value = value + T::one();
    }
    knots
}

/// Open uniform (clamped) knot vector for `n` control points: `degree + 1` zeros,
/// the interior values `1, 2, ...` and `degree + 1` copies of `n - degree`.
///
/// A curve on these knots starts at its first and ends at its last control point.
/// With `degree == n - 1` it is the Bézier curve of the control points.
///
/// # Examples
/// ```rust
/// let knots: Vec<f64> = deboor::clamped_knots(5, 2);
/// assert_eq!(knots, vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0]);
/// ```
pub fn clamped_knots<T: Float>(n: usize, degree: usize) -> Vec<T> {
    let len = n + degree + 1;
    let mut knots = Vec::with_capacity(len);
    let mut value = T::zero();
    for i in 0..len {
        if i > degree && i <= n {
            value = value + T::one();
        }
        knots.push(value);
    }
    knots
}

/// Default weights: one per control point, all equal to 1 (a non-rational B-spline).
pub fn unit_weights<T: Float>(n: usize) -> Vec<T> {
    vec![T::one(); n]
}

/// Get the min and max knot values `(knots[degree], knots[len - 1 - degree])`
/// the curve is defined over. Returns None if the knot vector is too short
/// to contain a domain for `degree`.
pub fn knot_domain<T: Float>(knots: &[T], degree: usize) -> Option<(T, T)> {
    // len >= 2 * degree + 2 without overflowing for huge degrees
    if knots.len() / 2 <= degree {
        return None;
    }
    Some((knots[degree], knots[knots.len() - 1 - degree]))
}

/// Find the knot span containing `t` by scanning forward from `degree`.
///
/// Returns the first index `s` in `[degree, len - 1 - degree)` with
/// `knots[s] < knots[s + 1]` and `knots[s] <= t <= knots[s + 1]`. A `t` sitting
/// exactly on a knot shared by two spans therefore resolves to the lower span.
/// Zero-width spans (repeated knots) are never returned, so a first knot repeated
/// more than `degree + 1` times still yields a usable span at the domain start.
/// Returns None if `t` is outside the knot domain (or NaN) or the domain is empty.
pub fn find_span<T: Float>(knots: &[T], degree: usize, t: T) -> Option<usize> {
    let (low, high) = knot_domain(knots, degree)?;
    if !(t >= low && t <= high) {
        return None;
    }
    (degree..knots.len() - 1 - degree)
        .find(|&s| knots[s] < knots[s + 1] && t >= knots[s] && t <= knots[s + 1])
}

/// Same result as [`find_span`] using binary search, for long knot vectors.
/// The knots must be non-decreasing.
pub fn find_span_binary<T: Float>(knots: &[T], degree: usize, t: T) -> Option<usize> {
    let (low, high) = knot_domain(knots, degree)?;
    if !(t >= low && t <= high) || low == high {
        return None;
    }
    // first span whose upper knot reaches t; its lower knot is <= t because
    // the previous upper knot (or the domain start) is. At the domain start the
    // upper knot has to move past t to skip zero-width spans.
    let upper = &knots[degree + 1..=knots.len() - 1 - degree];
    let offset = if t > low {
        upper.partition_point(|&knot| knot < t)
    } else {
        upper.partition_point(|&knot| knot <= t)
    };
    Some(degree + offset)
}

pub(crate) fn check_degree(n: usize, degree: usize) -> Result<(), NurbsError> {
    if n == 0 {
        debug!("rejecting curve without control points");
        return Err(NurbsError::NoControlPoints);
    }
    if degree < 1 {
        debug!("rejecting degree {} (must be at least 1)", degree);
        return Err(NurbsError::DegreeTooLow { degree });
    }
    if degree > n - 1 {
        debug!("rejecting degree {} for {} control points", degree, n);
        return Err(NurbsError::DegreeTooHigh { degree, max: n - 1 });
    }
    Ok(())
}

pub(crate) fn check_knots<T: Float>(
    knots: &[T],
    n: usize,
    degree: usize,
) -> Result<(), NurbsError> {
    let expected = n + degree + 1;
    if knots.len() != expected {
        debug!("bad knot vector length {} (expected {})", knots.len(), expected);
        return Err(NurbsError::KnotCount {
            expected,
            actual: knots.len(),
        });
    }
    // written so that NaN fails as well
    if let Some(index) = (1..knots.len()).find(|&i| !(knots[i] >= knots[i - 1])) {
        debug!("knot vector decreases at index {}", index);
        return Err(NurbsError::UnsortedKnots { index });
    }
    let high = knots.len() - 1 - degree;
    if knots[degree] == knots[high] {
        debug!("knot domain [{}, {}] is empty", degree, high);
        return Err(NurbsError::EmptyKnotDomain { low: degree, high });
    }
    Ok(())
}

pub(crate) fn check_weights<T: Float>(weights: &[T], n: usize) -> Result<(), NurbsError> {
    if weights.len() != n {
        debug!("bad weight vector length {} (expected {})", weights.len(), n);
        return Err(NurbsError::WeightCount {
            expected: n,
            actual: weights.len(),
        });
    }
    if let Some(index) = weights.iter().position(|&w| !(w > T::zero())) {
        debug!("weight {} is not positive", index);
        return Err(NurbsError::NonPositiveWeight { index });
    }
    Ok(())
}

/// Maps a normalized `t` onto the knot domain and locates its span.
/// Fails with `OutOfDomain` if the remapped value is outside `[low, high]`.
/// For `t` in `[0, 1]` the remapped value is pinned to the domain, so rounding in
/// `t * (high - low) + low` cannot push `t = 1` past `high`.
pub(crate) fn locate<T: Float>(
    knots: &[T],
    degree: usize,
    t: T,
) -> Result<(T, usize), NurbsError> {
    // knot vectors reaching this point passed check_knots, so the domain exists
    let (low, high) = knot_domain(knots, degree).ok_or(NurbsError::KnotCount {
        expected: degree.saturating_mul(2).saturating_add(2),
        actual: knots.len(),
    })?;
    let mut mapped = t * (high - low) + low;
    if t >= T::zero() && t <= T::one() {
        mapped = mapped.max(low).min(high);
    }

    let out_of_domain = || {
        debug!("parameter {:?} remapped outside of knot domain", t.to_f64());
        NurbsError::OutOfDomain {
            t: mapped.to_f64().unwrap_or(f64::NAN),
            low: low.to_f64().unwrap_or(f64::NAN),
            high: high.to_f64().unwrap_or(f64::NAN),
        }
    };
    if !(mapped >= low && mapped <= high) {
        return Err(out_of_domain());
    }
    let span = find_span(knots, degree, mapped).ok_or_else(out_of_domain)?;
    Ok((mapped, span))
}
