// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Meme form: image picker, caption fields and the action buttons.

use crate::models::caption::CaptionSlot;
use crate::models::session::SessionState;

/// Result of form interaction.
pub enum FormAction {
    None,
    PickImage,
    EditCaption(CaptionSlot, String),
    Submit,
    Clear,
    Read,
}

/// Display the form and report what the user did.
pub fn show(ui: &mut egui::Ui, session: &SessionState) -> FormAction {
    let mut action = FormAction::None;
    let controls = session.controls();

    ui.heading("Meme");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("Choose image...").clicked() {
            action = FormAction::PickImage;
        }
        let label = session.image_label().unwrap_or("No image selected");
        ui.label(egui::RichText::new(label).italics().weak());
        if let Some(image) = session.image() {
            ui.label(egui::RichText::new(format!("{}×{}", image.width, image.height)).weak());
        }
    });

    ui.add_space(8.0);

    for (slot, title) in [(CaptionSlot::Top, "Top text"), (CaptionSlot::Bottom, "Bottom text")] {
        ui.label(title);
        let mut text = session.captions().get(slot).to_string();
        let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY));
        if response.changed() {
            action = FormAction::EditCaption(slot, text);
        }
    }

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.add_enabled(controls.submit, egui::Button::new("Generate")).clicked() {
            action = FormAction::Submit;
        }
        if ui.add_enabled(controls.reset, egui::Button::new("Clear")).clicked() {
            action = FormAction::Clear;
        }
        let mut read = ui.add_enabled(controls.read, egui::Button::new("Read Text"));
        if let Some(narration) = session.narration() {
            read = read.on_hover_text(format!("Prepared: \"{}\"", narration.text.trim()));
        }
        if read.clicked() {
            action = FormAction::Read;
        }
    });

    action
}
