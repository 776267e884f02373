// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Voice catalog and narration requests.
//!
//! The voice catalog is whatever the speech backend reports at the moment
//! narration is prepared. It is never cached: every submit or read
//! re-populates the selector and rebuilds the name lookup.

use super::caption::CaptionPair;
use super::volume::Volume;
use std::collections::HashMap;

/// A synthesis voice as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
    /// Whether the platform reports this as its default voice
    pub is_default: bool,
}

impl VoiceInfo {
    pub fn new(name: impl Into<String>, lang: impl Into<String>, is_default: bool) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default,
        }
    }
}

/// One entry of the voice selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOption {
    pub label: String,
    pub name: String,
}

impl VoiceOption {
    fn from_voice(voice: &VoiceInfo) -> Self {
        let mut label = format!("{} ({})", voice.name, voice.lang);
        if voice.is_default {
            label.push_str(" -- DEFAULT");
        }
        Self {
            label,
            name: voice.name.clone(),
        }
    }
}

/// Contents and selection of the voice drop-down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceSelector {
    options: Vec<VoiceOption>,
    selected: Option<String>,
}

impl VoiceSelector {
    pub fn options(&self) -> &[VoiceOption] {
        &self.options
    }

    /// Name of the selected voice, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_option(&self) -> Option<&VoiceOption> {
        let name = self.selected.as_deref()?;
        self.options.iter().find(|o| o.name == name)
    }

    /// The selector stays disabled until narration has been prepared once.
    pub fn is_populated(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn select(&mut self, name: String) {
        self.selected = Some(name);
    }

    /// Replace all entries with the given catalog.
    ///
    /// The current selection survives if a voice of that name is still
    /// listed; otherwise the first entry becomes selected.
    pub fn repopulate(&mut self, voices: &[VoiceInfo]) {
        self.options = voices.iter().map(VoiceOption::from_voice).collect();

        let still_listed = self
            .selected
            .as_deref()
            .is_some_and(|name| self.options.iter().any(|o| o.name == name));
        if !still_listed {
            self.selected = self.options.first().map(|o| o.name.clone());
        }
    }
}

/// Voices keyed by name, built once per narration request.
#[derive(Debug, Clone, Default)]
pub struct VoiceCatalog {
    by_name: HashMap<String, VoiceInfo>,
}

impl VoiceCatalog {
    pub fn new(voices: &[VoiceInfo]) -> Self {
        let by_name = voices
            .iter()
            .map(|v| (v.name.clone(), v.clone()))
            .collect();
        Self { by_name }
    }

    /// Exact-name lookup.
    pub fn resolve(&self, name: &str) -> Option<&VoiceInfo> {
        self.by_name.get(name)
    }
}

/// Everything needed to speak the captions once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationRequest {
    pub text: String,
    /// `None` means the platform default voice
    pub voice: Option<VoiceInfo>,
    pub volume: Volume,
}

/// Refresh the selector from the current catalog and build a request for the
/// given captions.
///
/// Shared by caption submission and the read-aloud button.
pub fn prepare(
    captions: &CaptionPair,
    voices: &[VoiceInfo],
    selector: &mut VoiceSelector,
    volume: Volume,
) -> NarrationRequest {
    selector.repopulate(voices);
    let catalog = VoiceCatalog::new(voices);

    let voice = selector
        .selected()
        .and_then(|name| catalog.resolve(name))
        .cloned();
    if voice.is_none() {
        log::debug!("No voice matched {:?}, using platform default", selector.selected());
    }

    NarrationRequest {
        text: captions.spoken_text(),
        voice,
        volume,
    }
}
