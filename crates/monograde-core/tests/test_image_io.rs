mod common;

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use monograde_core::error::GradeError;
use monograde_core::io::image_io::{load_image, output_format, save_image, writable_path};
use monograde_core::MonotoneImageTransformer;

use common::{gradient_image, seeded};

#[test]
fn test_save_load_roundtrip_png() {
    let image = gradient_image(9, 6);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_image(&image, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.color().channel_count(), 3);
    assert_eq!(loaded.to_rgb8(), image);
}

#[test]
fn test_save_load_roundtrip_tiff() {
    let image = gradient_image(4, 4);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.tiff");

    save_image(&image, &path).unwrap();
    assert_eq!(load_image(&path).unwrap().to_rgb8(), image);
}

#[test]
fn test_save_load_roundtrip_webp() {
    let image = gradient_image(8, 8);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.webp");

    save_image(&image, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WEBP");

    // Lossless encoding, so pixels survive exactly.
    assert_eq!(load_image(&path).unwrap().to_rgb8(), image);
}

#[test]
fn test_save_gif_rejected_instead_of_mislabeled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.gif");

    let err = save_image(&gradient_image(4, 4), &path).unwrap_err();
    assert!(matches!(err, GradeError::UnsupportedOutputFormat(_)));
    assert!(!path.exists());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("missing.png")).is_err());
}

#[test]
fn test_output_format_from_extension() {
    let format = |p: &str| output_format(Path::new(p)).unwrap();
    assert_eq!(format("a.png"), ImageFormat::Png);
    assert_eq!(format("a.TIF"), ImageFormat::Tiff);
    assert_eq!(format("a.jpeg"), ImageFormat::Jpeg);
    assert_eq!(format("a.bmp"), ImageFormat::Bmp);
    assert_eq!(format("a.webp"), ImageFormat::WebP);
    assert_eq!(format("a"), ImageFormat::Png);
    assert_eq!(format("a.xyz"), ImageFormat::Png);
    assert!(output_format(Path::new("a.gif")).is_err());
}

#[test]
fn test_writable_path_rewrites_unwritable_formats() {
    assert_eq!(writable_path(Path::new("d/x.gif")), PathBuf::from("d/x.png"));
    assert_eq!(writable_path(Path::new("d/x.webp")), PathBuf::from("d/x.webp"));
    assert_eq!(writable_path(Path::new("d/x.jpg")), PathBuf::from("d/x.jpg"));
    assert_eq!(writable_path(Path::new("d/x")), PathBuf::from("d/x"));
}

#[test]
fn test_transform_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("in.png");
    let dst = dir.path().join("out.png");
    save_image(&gradient_image(16, 16), &src).unwrap();

    let transformer = MonotoneImageTransformer::default();
    let loaded = load_image(&src).unwrap();
    let graded = transformer.apply_to_image(&loaded, &mut seeded(1)).unwrap();
    save_image(&graded, &dst).unwrap();

    let reloaded = load_image(&dst).unwrap();
    assert_eq!(reloaded, DynamicImage::ImageRgb8(graded));
}
