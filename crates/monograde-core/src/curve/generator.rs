use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::{DEFAULT_CHEBYSHEV_TERMS, DEFAULT_CURVE_RESOLUTION, DEFAULT_DECAY_EXPONENT};
use crate::error::{GradeError, Result};

use super::{chebyshev, linspace, MonotoneCurve};

/// Shape controls for randomly generated curves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Number of samples over [0, 1].
    pub resolution: usize,
    /// Number of Chebyshev basis terms in the raw signal.
    pub terms: usize,
    /// Term `n` is scaled by `1 / (n + 1)^decay_exponent`.
    pub decay_exponent: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_CURVE_RESOLUTION,
            terms: DEFAULT_CHEBYSHEV_TERMS,
            decay_exponent: DEFAULT_DECAY_EXPONENT,
        }
    }
}

impl CurveParams {
    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(GradeError::InvalidCurveParams(format!(
                "resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        if self.terms == 0 {
            return Err(GradeError::InvalidCurveParams(
                "at least one basis term is required".into(),
            ));
        }
        if !self.decay_exponent.is_finite() {
            return Err(GradeError::InvalidCurveParams(format!(
                "decay exponent must be finite, got {}",
                self.decay_exponent
            )));
        }
        Ok(())
    }
}

/// Produces random monotone curves.
///
/// The sample grid and per-term decay weights are computed once; each call to
/// [`CurveGenerator::generate`] only draws fresh basis weights.
#[derive(Clone, Debug)]
pub struct CurveGenerator {
    params: CurveParams,
    xs: Vec<f64>,
    decay: Vec<f64>,
}

impl Default for CurveGenerator {
    fn default() -> Self {
        Self::from_valid_params(CurveParams::default())
    }
}

impl CurveGenerator {
    pub fn new(params: CurveParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_valid_params(params))
    }

    fn from_valid_params(params: CurveParams) -> Self {
        let xs = linspace(params.resolution);
        let decay = (0..params.terms)
            .map(|n| ((n + 1) as f64).powf(params.decay_exponent).recip())
            .collect();
        Self { params, xs, decay }
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Generate one random monotone curve blended toward identity.
    ///
    /// `strength` = 0 returns the identity, 1 the raw random curve. Values
    /// outside [0, 1] are the caller's responsibility.
    pub fn generate<R: Rng + ?Sized>(&self, strength: f32, rng: &mut R) -> MonotoneCurve {
        let coeffs: Vec<f64> = self
            .decay
            .iter()
            .map(|&d| {
                let w: f64 = StandardNormal.sample(&mut *rng);
                w * d
            })
            .collect();

        let raw: Vec<f64> = self
            .xs
            .iter()
            .map(|&x| chebyshev::evaluate(&coeffs, 2.0 * x - 1.0))
            .collect();

        let Some(profile) = cumulative_profile(&raw) else {
            warn!(
                resolution = self.params.resolution,
                "Degenerate random signal, falling back to identity curve"
            );
            return MonotoneCurve::identity(self.params.resolution);
        };

        let s = strength as f64;
        let ys = profile
            .iter()
            .zip(&self.xs)
            .map(|(&y, &x)| y * s + (1.0 - s) * x)
            .collect();

        debug!(
            terms = coeffs.len(),
            resolution = self.xs.len(),
            strength,
            "Generated monotone curve"
        );

        MonotoneCurve::from_parts(self.xs.clone(), ys)
    }
}

/// Shift `raw` so its minimum is 0, accumulate, and normalize so the last
/// sample is 1. Returns `None` when the accumulated total is not a positive
/// finite number.
fn cumulative_profile(raw: &[f64]) -> Option<Vec<f64>> {
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);

    let mut acc = 0.0;
    let cumulative: Vec<f64> = raw
        .iter()
        .map(|&v| {
            acc += v - min;
            acc
        })
        .collect();

    let total = *cumulative.last()?;
    if !(total.is_finite() && total > 0.0) {
        return None;
    }

    Some(cumulative.into_iter().map(|v| v / total).collect())
}
