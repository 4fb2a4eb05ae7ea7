use image::{Rgb, RgbImage};
use ndarray::{Array2, Array3, Axis};

use crate::consts::{COLOR_CHANNEL_COUNT, MAX_8BIT};
use crate::curve::applier::quantize;
use crate::error::{GradeError, Result};
use crate::frame::{ColorFrame, Frame};

/// Split an 8-bit RGB image into normalized R, G, B frames.
pub fn split_rgb(image: &RgbImage) -> ColorFrame {
    let (w, h) = image.dimensions();
    let mut red = Array2::<f32>::zeros((h as usize, w as usize));
    let mut green = Array2::<f32>::zeros((h as usize, w as usize));
    let mut blue = Array2::<f32>::zeros((h as usize, w as usize));

    for (col, row, pixel) in image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let idx = [row as usize, col as usize];
        red[idx] = r as f32 / MAX_8BIT;
        green[idx] = g as f32 / MAX_8BIT;
        blue[idx] = b as f32 / MAX_8BIT;
    }

    ColorFrame {
        red: Frame::new(red),
        green: Frame::new(green),
        blue: Frame::new(blue),
    }
}

/// Merge R, G, B frames back into an 8-bit RGB image, rounding to nearest.
pub fn merge_rgb(color: &ColorFrame) -> Result<RgbImage> {
    let (h, w) = color.red.data.dim();
    for (channel, frame) in [("green", &color.green), ("blue", &color.blue)] {
        let found = frame.data.dim();
        if found != (h, w) {
            return Err(GradeError::MismatchedChannels {
                channel,
                expected: (h, w),
                found,
            });
        }
    }

    let width = u32::try_from(w).map_err(|_| GradeError::InvalidDimensions {
        width: u32::MAX,
        height: h as u32,
    })?;
    let height = u32::try_from(h).map_err(|_| GradeError::InvalidDimensions {
        width,
        height: u32::MAX,
    })?;

    Ok(RgbImage::from_fn(width, height, |col, row| {
        let idx = [row as usize, col as usize];
        Rgb([
            quantize(color.red.data[idx] as f64),
            quantize(color.green.data[idx] as f64),
            quantize(color.blue.data[idx] as f64),
        ])
    }))
}

/// Apply a processing function to each channel of a color frame, in R, G, B order.
pub fn process_color<F>(color: &ColorFrame, mut process_fn: F) -> ColorFrame
where
    F: FnMut(&Frame) -> Frame,
{
    let red = process_fn(&color.red);
    let green = process_fn(&color.green);
    let blue = process_fn(&color.blue);
    ColorFrame { red, green, blue }
}

/// Copy an RGB image into an array shaped `(height, width, 3)`.
pub fn rgb_image_to_array(image: &RgbImage) -> Array3<u8> {
    let (w, h) = image.dimensions();
    Array3::from_shape_fn((h as usize, w as usize, COLOR_CHANNEL_COUNT), |(row, col, c)| {
        image.get_pixel(col as u32, row as u32).0[c]
    })
}

/// Build an RGB image from an array shaped `(height, width, 3)`.
pub fn array_to_rgb_image(data: &Array3<u8>) -> Result<RgbImage> {
    let (h, w, channels) = data.dim();
    if channels != COLOR_CHANNEL_COUNT {
        return Err(GradeError::InvalidChannelCount { channels });
    }
    let (Ok(width), Ok(height)) = (u32::try_from(w), u32::try_from(h)) else {
        return Err(GradeError::InvalidDimensions {
            width: u32::MAX,
            height: u32::MAX,
        });
    };

    let mut image = RgbImage::new(width, height);
    for (row, lane) in data.axis_iter(Axis(0)).enumerate() {
        for (col, px) in lane.axis_iter(Axis(0)).enumerate() {
            image.put_pixel(col as u32, row as u32, Rgb([px[0], px[1], px[2]]));
        }
    }
    Ok(image)
}
