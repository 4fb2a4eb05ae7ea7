use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::{GradeError, Result};

/// Containers the `image` crate can encode 8-bit RGB into.
const RGB8_OUTPUT_FORMATS: [ImageFormat; 7] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Tiff,
    ImageFormat::Bmp,
    ImageFormat::WebP,
    ImageFormat::Pnm,
    ImageFormat::Tga,
];

/// Decode an image file. Channel layout is left as stored.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

pub fn is_rgb8_writable(format: ImageFormat) -> bool {
    RGB8_OUTPUT_FORMATS.contains(&format)
}

/// Output container chosen from the file extension.
///
/// Missing or unrecognized extensions fall back to PNG. A recognized format
/// without an 8-bit RGB encoder is an error rather than a silently mislabeled file.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format) if is_rgb8_writable(format) => Ok(format),
        Ok(format) => Err(GradeError::UnsupportedOutputFormat(format!("{format:?}"))),
        Err(_) => Ok(ImageFormat::Png),
    }
}

/// `path` with its extension replaced by `png` when the format it names
/// cannot hold an 8-bit RGB image.
pub fn writable_path(path: &Path) -> PathBuf {
    match ImageFormat::from_path(path) {
        Ok(format) if !is_rgb8_writable(format) => path.with_extension("png"),
        _ => path.to_path_buf(),
    }
}

/// Save an 8-bit RGB image, choosing the format from the file extension.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, output_format(path)?)?;
    Ok(())
}
