// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Voice selection and volume controls.

use crate::models::narration::VoiceSelector;
use crate::models::volume::Volume;

/// Result of voice panel interaction.
pub enum VoiceAction {
    None,
    SelectVoice(String),
    SetVolume(u8),
}

/// Display the voice drop-down and the volume slider with its icon.
pub fn show(ui: &mut egui::Ui, voices: &VoiceSelector, volume: Volume) -> VoiceAction {
    let mut action = VoiceAction::None;

    ui.label("Voice");
    ui.add_enabled_ui(voices.is_populated(), |ui| {
        let selected_text = voices
            .selected_option()
            .map(|o| o.label.as_str())
            .unwrap_or("Generate a meme to load voices");

        egui::ComboBox::from_id_source("voice_selection")
            .width(ui.available_width())
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for option in voices.options() {
                    let is_selected = voices.selected() == Some(option.name.as_str());
                    if ui.selectable_label(is_selected, option.label.as_str()).clicked() && !is_selected {
                        action = VoiceAction::SelectVoice(option.name.clone());
                    }
                }
            });
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let tier = volume.tier();
        ui.label(egui::RichText::new(tier.icon()).size(20.0))
            .on_hover_text(tier.alt_text());

        let mut percent = volume.percent();
        if ui.add(egui::Slider::new(&mut percent, 0..=100)).changed() {
            action = VoiceAction::SetVolume(percent);
        }
    });

    action
}
