use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_STRENGTH;
use crate::curve::CurveParams;
use crate::error::Result;
use crate::transform::MonotoneImageTransformer;

/// Odd constant used to spread job indices across the seed space.
const JOB_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Blend between identity (0.0) and the fully random curve (1.0).
    pub strength: f32,
    /// Base seed. `None` draws from OS entropy, so every run differs.
    pub seed: Option<u64>,
    pub curve: CurveParams,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
            seed: None,
            curve: CurveParams::default(),
        }
    }
}

impl TransformConfig {
    pub fn build_transformer(&self) -> Result<MonotoneImageTransformer> {
        MonotoneImageTransformer::with_curve_params(self.strength, self.curve.clone())
    }

    /// Random source for the `job`-th output of a run.
    ///
    /// With a base seed every job gets its own reproducible stream, independent
    /// of the order in which jobs are processed.
    pub fn job_rng(&self, job: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ job.wrapping_mul(JOB_SEED_STRIDE)),
            None => StdRng::from_entropy(),
        }
    }
}
