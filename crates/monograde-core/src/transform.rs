use std::borrow::Cow;

use image::{DynamicImage, RgbImage};
use ndarray::{Array3, Zip};
use rand::Rng;
use tracing::info;

use crate::color::process::process_color;
use crate::consts::{COLOR_CHANNEL_COUNT, DEFAULT_STRENGTH};
use crate::curve::{apply_curve_array, CurveGenerator, CurveLut, CurveParams, MonotoneCurve};
use crate::error::{GradeError, Result};
use crate::frame::{ColorFrame, Frame};

/// Applies an independent random monotone tone curve to each RGB channel.
///
/// Every call draws three fresh curves (red, green, blue, in that order) from
/// the random source it is given, so a seeded source reproduces the result.
#[derive(Clone, Debug)]
pub struct MonotoneImageTransformer {
    strength: f32,
    generator: CurveGenerator,
}

impl Default for MonotoneImageTransformer {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
            generator: CurveGenerator::default(),
        }
    }
}

impl MonotoneImageTransformer {
    /// `strength` must lie in [0, 1]: 0 leaves images untouched, 1 applies
    /// the fully random curve.
    pub fn new(strength: f32) -> Result<Self> {
        Self::with_curve_params(strength, CurveParams::default())
    }

    pub fn with_curve_params(strength: f32, params: CurveParams) -> Result<Self> {
        if !(0.0..=1.0).contains(&strength) {
            return Err(GradeError::InvalidStrength(strength));
        }
        Ok(Self {
            strength,
            generator: CurveGenerator::new(params)?,
        })
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn curve_params(&self) -> &CurveParams {
        self.generator.params()
    }

    /// Draw one curve.
    pub fn generate_curve<R: Rng + ?Sized>(&self, rng: &mut R) -> MonotoneCurve {
        self.generator.generate(self.strength, rng)
    }

    /// Draw one curve per channel, in R, G, B order.
    pub fn generate_curves<R: Rng + ?Sized>(&self, rng: &mut R) -> [MonotoneCurve; 3] {
        [
            self.generate_curve(rng),
            self.generate_curve(rng),
            self.generate_curve(rng),
        ]
    }

    fn generate_luts<R: Rng + ?Sized>(&self, rng: &mut R) -> [CurveLut; 3] {
        self.generate_curves(rng).map(|curve| CurveLut::from_curve(&curve))
    }

    /// Transform a decoded image. The image must have exactly three channels;
    /// 16-bit and float RGB inputs are reduced to 8 bits first.
    pub fn apply_to_image<R: Rng + ?Sized>(
        &self,
        image: &DynamicImage,
        rng: &mut R,
    ) -> Result<RgbImage> {
        let channels = image.color().channel_count() as usize;
        if channels != COLOR_CHANNEL_COUNT {
            return Err(GradeError::InvalidChannelCount { channels });
        }

        let rgb = match image {
            DynamicImage::ImageRgb8(rgb) => Cow::Borrowed(rgb),
            other => Cow::Owned(other.to_rgb8()),
        };
        Ok(self.apply_to_rgb(&rgb, rng))
    }

    /// Transform an 8-bit RGB image into a newly allocated one.
    pub fn apply_to_rgb<R: Rng + ?Sized>(&self, image: &RgbImage, rng: &mut R) -> RgbImage {
        let luts = self.generate_luts(rng);

        let mut out = RgbImage::new(image.width(), image.height());
        for (dst, src) in out.pixels_mut().zip(image.pixels()) {
            for (c, lut) in luts.iter().enumerate() {
                dst.0[c] = lut.map(src.0[c]);
            }
        }

        info!(
            width = image.width(),
            height = image.height(),
            strength = self.strength,
            "Applied monotone curves"
        );
        out
    }

    /// Transform an 8-bit array shaped `(height, width, 3)`.
    pub fn apply_to_array<R: Rng + ?Sized>(
        &self,
        data: &Array3<u8>,
        rng: &mut R,
    ) -> Result<Array3<u8>> {
        let (h, w, channels) = data.dim();
        if channels != COLOR_CHANNEL_COUNT {
            return Err(GradeError::InvalidChannelCount { channels });
        }

        let luts = self.generate_luts(rng);
        let out = Zip::indexed(data).map_collect(|(_, _, c), &v| luts[c].map(v));

        info!(
            width = w,
            height = h,
            strength = self.strength,
            "Applied monotone curves"
        );
        Ok(out)
    }

    /// Transform normalized float channels without quantizing.
    pub fn apply_to_color_frame<R: Rng + ?Sized>(
        &self,
        color: &ColorFrame,
        rng: &mut R,
    ) -> ColorFrame {
        process_color(color, |frame| {
            let curve = self.generate_curve(&mut *rng);
            Frame::new(apply_curve_array(&frame.data, &curve))
        })
    }
}
