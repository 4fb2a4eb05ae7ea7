pub mod applier;
pub mod chebyshev;
pub mod generator;

pub use applier::{apply_curve, apply_curve_array, CurveLut};
pub use generator::{CurveGenerator, CurveParams};

use crate::error::{GradeError, Result};

/// A tone curve sampled at paired `(x, y)` points over [0, 1].
///
/// `x` is strictly increasing and `y` is non-decreasing, so the curve never
/// reverses the ordering of the values passed through it.
#[derive(Clone, Debug, PartialEq)]
pub struct MonotoneCurve {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl MonotoneCurve {
    /// Build a curve from sample pairs, validating the ordering invariants.
    pub fn from_samples(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(GradeError::InvalidCurve(format!(
                "x has {} samples but y has {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(GradeError::InvalidCurve(format!(
                "at least 2 samples required, got {}",
                xs.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(GradeError::InvalidCurve("non-finite sample".into()));
        }
        if xs.windows(2).any(|w| w[0] >= w[1]) {
            return Err(GradeError::InvalidCurve(
                "x must be strictly increasing".into(),
            ));
        }
        if ys.windows(2).any(|w| w[0] > w[1]) {
            return Err(GradeError::InvalidCurve("y must be non-decreasing".into()));
        }
        Ok(Self { xs, ys })
    }

    /// Build a curve the generator has already shaped. Invariants hold by construction.
    pub(crate) fn from_parts(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    /// The identity curve `y = x` sampled at `resolution` evenly spaced points.
    pub fn identity(resolution: usize) -> Self {
        let xs = linspace(resolution.max(2));
        let ys = xs.clone();
        Self { xs, ys }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// True when every `y[i] <= y[i + 1]`.
    pub fn is_monotone(&self) -> bool {
        self.ys.windows(2).all(|w| w[0] <= w[1])
    }

    /// Evaluate the curve at a single point with clamped linear interpolation.
    pub fn eval(&self, value: f64) -> f64 {
        applier::interpolate(&self.xs, &self.ys, value)
    }
}

/// `n` evenly spaced points from 0.0 to 1.0 inclusive.
pub(crate) fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}
