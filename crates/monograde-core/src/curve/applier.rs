use ndarray::Array2;

use crate::consts::{LEVELS_8BIT, MAX_8BIT, PARALLEL_PIXEL_THRESHOLD};

use super::MonotoneCurve;

/// Piecewise-linear interpolation of `value` against the samples `(xs, ys)`.
///
/// Inputs below `xs[0]` map to `ys[0]`, inputs above the last sample map to
/// the last `y`. NaN propagates. `xs` must be strictly increasing and hold
/// at least one sample.
pub(crate) fn interpolate(xs: &[f64], ys: &[f64], value: f64) -> f64 {
    if value.is_nan() {
        return f64::NAN;
    }
    let last = xs.len() - 1;
    if value <= xs[0] {
        return ys[0];
    }
    if value >= xs[last] {
        return ys[last];
    }

    // First sample strictly greater than `value`; always in 1..=last here.
    let hi = xs.partition_point(|&x| x <= value);
    let lo = hi - 1;
    let t = (value - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}

/// Map every value through the curve.
pub fn apply_curve(values: &[f32], curve: &MonotoneCurve) -> Vec<f32> {
    values
        .iter()
        .map(|&v| curve.eval(v as f64) as f32)
        .collect()
}

/// Map every pixel of a channel through the curve, preserving its layout.
pub fn apply_curve_array(data: &Array2<f32>, curve: &MonotoneCurve) -> Array2<f32> {
    let mut out = data.clone();
    if out.len() >= PARALLEL_PIXEL_THRESHOLD {
        out.par_mapv_inplace(|v| curve.eval(v as f64) as f32);
    } else {
        out.mapv_inplace(|v| curve.eval(v as f64) as f32);
    }
    out
}

/// A curve evaluated at every 8-bit level.
///
/// An 8-bit channel only takes 256 distinct values, so remapping through the
/// table gives the same result as interpolating each pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveLut {
    table: [u8; LEVELS_8BIT],
}

impl CurveLut {
    pub fn from_curve(curve: &MonotoneCurve) -> Self {
        let mut table = [0u8; LEVELS_8BIT];
        for (level, slot) in table.iter_mut().enumerate() {
            let v = curve.eval(level as f64 / MAX_8BIT as f64);
            *slot = quantize(v);
        }
        Self { table }
    }

    pub fn map(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    pub fn table(&self) -> &[u8; LEVELS_8BIT] {
        &self.table
    }
}

/// Scale a [0, 1] value to 8 bits, rounding to nearest and clamping.
pub(crate) fn quantize(v: f64) -> u8 {
    (v * MAX_8BIT as f64).round().clamp(0.0, MAX_8BIT as f64) as u8
}
