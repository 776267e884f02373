// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module computes where a loaded image is drawn on the canvas so
//! that it fills as much of the surface as possible without distortion.

/// Placement of an image inside the canvas, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitGeometry {
    pub width: f32,
    pub height: f32,
    /// Left edge of the drawn image
    pub offset_x: f32,
    /// Top edge of the drawn image
    pub offset_y: f32,
}

/// Fit an image into the surface, preserving its aspect ratio and centering
/// it along the axis that is not filled.
///
/// Images that are narrower than the surface (relative to its own aspect
/// ratio) take the full height; everything else takes the full width. A
/// zero-height image is not guarded against.
pub fn fit_image(surface_width: f32, surface_height: f32, image_width: f32, image_height: f32) -> FitGeometry {
    let aspect_ratio = image_width / image_height;
    let surface_ratio = surface_width / surface_height;

    if aspect_ratio < surface_ratio {
        // Taller than the surface - fill height, center horizontally
        let height = surface_height;
        let width = height * aspect_ratio;
        FitGeometry {
            width,
            height,
            offset_x: (surface_width - width) / 2.0,
            offset_y: 0.0,
        }
    } else {
        // Wider than (or same shape as) the surface - fill width, center vertically
        let width = surface_width;
        let height = width / aspect_ratio;
        FitGeometry {
            width,
            height,
            offset_x: 0.0,
            offset_y: (surface_height - height) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_landscape_fills_width() {
        let fit = fit_image(500.0, 400.0, 1000.0, 500.0);
        assert_eq!(fit.width, 500.0);
        assert_eq!(fit.height, 250.0);
        assert_eq!(fit.offset_x, 0.0);
        assert_eq!(fit.offset_y, 75.0);
    }

    #[test]
    fn test_portrait_fills_height() {
        let fit = fit_image(500.0, 400.0, 400.0, 800.0);
        assert_eq!(fit.height, 400.0);
        assert_eq!(fit.width, 200.0);
        assert_eq!(fit.offset_y, 0.0);
        assert_eq!(fit.offset_x, 150.0);
    }

    #[test]
    fn test_square_image_takes_smaller_side() {
        for (w, h) in [(500.0, 400.0), (300.0, 640.0), (400.0, 400.0), (1.0, 999.0)] {
            let fit = fit_image(w, h, 256.0, 256.0);
            let expected = f32::min(w, h);
            assert!(approx(fit.width, fit.height), "{w}x{h}: {fit:?}");
            assert!(approx(fit.width, expected), "{w}x{h}: {fit:?}");
        }
    }

    #[test]
    fn test_square_surface_matches_portrait_threshold() {
        // On a square surface anything with ratio < 1 is height-bound
        let fit = fit_image(400.0, 400.0, 399.0, 400.0);
        assert_eq!(fit.height, 400.0);
        assert!(fit.offset_x > 0.0);

        let fit = fit_image(400.0, 400.0, 400.0, 400.0);
        assert_eq!(fit.width, 400.0);
        assert_eq!(fit.height, 400.0);
        assert_eq!(fit.offset_x, 0.0);
        assert_eq!(fit.offset_y, 0.0);
    }

    #[test]
    fn test_always_touches_a_boundary_and_stays_inside() {
        let sizes = [1.0, 3.0, 17.0, 100.0, 333.0, 400.0, 640.0, 1080.0, 1920.0, 4096.0];
        for &sw in &sizes {
            for &sh in &sizes {
                for &iw in &sizes {
                    for &ih in &sizes {
                        let fit = fit_image(sw, sh, iw, ih);
                        let touches = approx(fit.width, sw) || approx(fit.height, sh);
                        assert!(touches, "surface {sw}x{sh} image {iw}x{ih}: {fit:?}");
                        assert!(fit.width <= sw + EPS, "surface {sw}x{sh} image {iw}x{ih}: {fit:?}");
                        assert!(fit.height <= sh + EPS, "surface {sw}x{sh} image {iw}x{ih}: {fit:?}");
                        assert!(fit.offset_x >= -EPS && fit.offset_y >= -EPS);
                    }
                }
            }
        }
    }

    #[test]
    fn test_result_is_centered() {
        let fit = fit_image(640.0, 480.0, 300.0, 900.0);
        assert!(approx(fit.offset_x * 2.0 + fit.width, 640.0));
        assert!(approx(fit.offset_y * 2.0 + fit.height, 480.0));
    }
}
