//! Chebyshev polynomials of the first kind on [-1, 1].

/// Evaluate the series `Σ coeffs[n] · T_n(t)` using Clenshaw's recurrence.
///
/// An empty coefficient slice evaluates to 0.
pub fn evaluate(coeffs: &[f64], t: f64) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };

    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for &c in rest.iter().rev() {
        let b0 = 2.0 * t * b1 - b2 + c;
        b2 = b1;
        b1 = b0;
    }
    c0 + t * b1 - b2
}
