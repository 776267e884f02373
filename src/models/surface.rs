// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Render target description.
//!
//! The canvas is never patched in place. Each redraw produces a complete
//! [`SurfaceFrame`] that replaces the previous one, so the surface is either
//! blank (nothing drawn yet) or a black fill with the fitted image and the
//! caption overlay on top.

use super::caption::CaptionPair;
use crate::util::geometry::{fit_image, FitGeometry};

/// Fixed dimensions of the canvas and where captions sit on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    pub width: f32,
    pub height: f32,
    pub caption_font_size: f32,
    /// Bottom edge of the top caption row, from the top of the canvas
    pub top_caption_y: f32,
    /// Distance of the bottom caption row's bottom edge from the bottom of the canvas
    pub bottom_caption_margin: f32,
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            caption_font_size: 25.0,
            top_caption_y: 30.0,
            bottom_caption_margin: 10.0,
        }
    }
}

impl SurfaceLayout {
    pub fn fit(&self, image_width: u32, image_height: u32) -> FitGeometry {
        fit_image(self.width, self.height, image_width as f32, image_height as f32)
    }
}

/// Captions positioned on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionOverlay {
    pub top: String,
    pub bottom: String,
    /// Horizontal center of both lines
    pub center_x: f32,
    /// Bottom edge of the top row. Descenders sit above this line, not across it.
    pub top_y: f32,
    /// Bottom edge of the bottom row
    pub bottom_y: f32,
    pub font_size: f32,
}

/// One complete redraw of the canvas, painted over a black fill.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFrame {
    pub width: f32,
    pub height: f32,
    pub image: Option<FitGeometry>,
    pub captions: Option<CaptionOverlay>,
}

impl SurfaceFrame {
    /// Black fill only.
    pub fn blank(layout: &SurfaceLayout) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
            image: None,
            captions: None,
        }
    }

    pub fn with_image(mut self, geometry: FitGeometry) -> Self {
        self.image = Some(geometry);
        self
    }

    pub fn with_captions(mut self, layout: &SurfaceLayout, captions: &CaptionPair) -> Self {
        self.captions = Some(CaptionOverlay {
            top: captions.top.clone(),
            bottom: captions.bottom.clone(),
            center_x: layout.width / 2.0,
            top_y: layout.top_caption_y,
            bottom_y: layout.height - layout.bottom_caption_margin,
            font_size: layout.caption_font_size,
        });
        self
    }
}
