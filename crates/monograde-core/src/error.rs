use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected 3 color channels, got {channels}")]
    InvalidChannelCount { channels: usize },

    #[error("Strength must be a finite value in [0, 1], got {0}")]
    InvalidStrength(f32),

    #[error("Invalid curve samples: {0}")]
    InvalidCurve(String),

    #[error("Invalid curve parameters: {0}")]
    InvalidCurveParams(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Channel shape mismatch: red is {expected:?}, {channel} is {found:?}")]
    MismatchedChannels {
        channel: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("No 8-bit RGB encoder for output format {0}")]
    UnsupportedOutputFormat(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, GradeError>;
