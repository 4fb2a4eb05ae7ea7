/// Default blend weight between the random curve and the identity.
pub const DEFAULT_STRENGTH: f32 = 0.4;

/// Number of samples a generated curve holds over [0, 1].
pub const DEFAULT_CURVE_RESOLUTION: usize = 1000;

/// Number of Chebyshev basis terms summed into the raw signal.
pub const DEFAULT_CHEBYSHEV_TERMS: usize = 100;

/// Term `n` is weighted by `1 / (n + 1)^DEFAULT_DECAY_EXPONENT`.
/// Larger values bias curves toward smooth, low-frequency shapes.
pub const DEFAULT_DECAY_EXPONENT: f64 = 1.75;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Number of distinct 8-bit channel levels.
pub const LEVELS_8BIT: usize = 256;

/// Largest 8-bit channel value as a float, used for normalization.
pub const MAX_8BIT: f32 = 255.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
