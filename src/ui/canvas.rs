// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed-size meme canvas.
//!
//! This module paints the current [`SurfaceFrame`]: a black fill, the fitted
//! image and the caption overlay. Everything is clipped to the canvas, so
//! captions wider than the surface are cut off at its edges.

use crate::models::surface::{CaptionOverlay, SurfaceFrame, SurfaceLayout};

/// Display the canvas.
pub fn show(
    ui: &mut egui::Ui,
    layout: &SurfaceLayout,
    frame: Option<&SurfaceFrame>,
    image_texture: Option<&egui::TextureHandle>,
    image_label: Option<&str>,
) {
    let size = match frame {
        Some(frame) => egui::vec2(frame.width, frame.height),
        None => egui::vec2(layout.width, layout.height),
    };
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    match frame {
        Some(frame) => {
            painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

            if let (Some(geometry), Some(texture)) = (frame.image, image_texture) {
                let image_rect = egui::Rect::from_min_size(
                    rect.min + egui::vec2(geometry.offset_x, geometry.offset_y),
                    egui::vec2(geometry.width, geometry.height),
                );
                painter.image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            if let Some(captions) = &frame.captions {
                draw_captions(&painter, rect, captions);
            }
        }
        None => {
            // Nothing drawn yet
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::from_gray(90)));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Choose an image to begin",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(150),
            );
        }
    }

    if let Some(label) = image_label {
        response.on_hover_text(label);
    }
}

/// Draw both captions in white, horizontally centered, with the bottom of
/// each text row resting on its anchor line.
fn draw_captions(painter: &egui::Painter, rect: egui::Rect, captions: &CaptionOverlay) {
    let font = egui::FontId::proportional(captions.font_size);

    for (text, bottom_y) in [
        (&captions.top, captions.top_y),
        (&captions.bottom, captions.bottom_y),
    ] {
        if text.is_empty() {
            continue;
        }
        painter.text(
            rect.min + egui::vec2(captions.center_x, bottom_y),
            egui::Align2::CENTER_BOTTOM,
            text,
            font.clone(),
            egui::Color32::WHITE,
        );
    }
}
