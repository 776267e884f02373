// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes image files into RGBA pixel buffers suitable for
//! uploading as an egui texture.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// File extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// A decoded image in unmultiplied RGBA8.
pub struct LoadedImage {
    /// Size of the file's image, used for fitting
    pub width: u32,
    pub height: u32,
    /// Size of `pixels`; smaller than the source when it had to be capped
    pub texture_width: u32,
    pub texture_height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file from disk, scaling it down so neither side exceeds
/// `max_texture_side`.
pub fn load_image(path: &Path, max_texture_side: u32) -> Result<LoadedImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    Ok(to_texture_pixels(decoded, max_texture_side))
}

/// Convert to RGBA8 within the GPU texture limit, keeping the source size.
fn to_texture_pixels(decoded: DynamicImage, max_texture_side: u32) -> LoadedImage {
    let (width, height) = decoded.dimensions();

    let capped = if width > max_texture_side || height > max_texture_side {
        log::info!(
            "Scaling {}x{} image to fit texture limit {}",
            width,
            height,
            max_texture_side
        );
        decoded.resize(max_texture_side, max_texture_side, FilterType::Triangle)
    } else {
        decoded
    };

    let rgba = capped.to_rgba8();
    let (texture_width, texture_height) = rgba.dimensions();

    LoadedImage {
        width,
        height,
        texture_width,
        texture_height,
        pixels: rgba.into_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png_dimensions_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let loaded = load_image(&path, 8192).unwrap();
        assert_eq!(loaded.width, 3);
        assert_eq!(loaded.height, 2);
        assert_eq!((loaded.texture_width, loaded.texture_height), (3, 2));
        assert_eq!(loaded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_load_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_image(&path, 8192).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_image(Path::new("/nonexistent/meme.png"), 8192).is_err());
    }

    #[test]
    fn test_oversized_image_is_capped_to_texture_side() {
        let panorama = DynamicImage::ImageRgba8(image::RgbaImage::new(2000, 100));
        let loaded = to_texture_pixels(panorama, 500);

        // Source size is kept for fitting, pixels fit the limit
        assert_eq!((loaded.width, loaded.height), (2000, 100));
        assert_eq!((loaded.texture_width, loaded.texture_height), (500, 25));
        assert_eq!(loaded.pixels.len(), 500 * 25 * 4);
    }

    #[test]
    fn test_image_within_limit_is_untouched() {
        let tile = DynamicImage::ImageRgba8(image::RgbaImage::new(500, 40));
        let loaded = to_texture_pixels(tile, 500);
        assert_eq!((loaded.texture_width, loaded.texture_height), (500, 40));
    }
}
