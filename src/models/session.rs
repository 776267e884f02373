// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state and event handling for the meme canvas.
//!
//! All mutable state of the application lives in [`SessionState`]. User
//! actions arrive as [`Event`]s; handling one returns the next state plus the
//! platform work the app has to perform ([`Effect`]). Nothing in here touches
//! egui, the file system or the speech backend, so the whole control flow can
//! be exercised in tests.

use super::caption::{CaptionPair, CaptionSlot};
use super::narration::{self, NarrationRequest, VoiceInfo, VoiceSelector};
use super::surface::{SurfaceFrame, SurfaceLayout};
use super::volume::Volume;
use std::path::PathBuf;

/// Where the canvas is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing drawn yet, or cleared
    Empty,
    /// Image drawn, no captions
    ImageLoaded,
    /// Image drawn with captions on top
    CaptionsRendered,
}

/// Enablement of the three form buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub submit: bool,
    pub reset: bool,
    pub read: bool,
}

/// Metadata of the decoded image currently held by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// A file picked by the user, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

/// User-driven input to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// File picker closed; `None` when nothing was chosen
    ImageSelected(Option<SelectedFile>),
    /// Background decode finished
    ImageDecoded(ImageSource),
    CaptionEdited(CaptionSlot, String),
    /// Generate button, carrying the voice catalog queried at click time
    FormSubmitted { voices: Vec<VoiceInfo> },
    Cleared,
    /// Read-aloud button, carrying the voice catalog queried at click time
    ReadClicked { voices: Vec<VoiceInfo> },
    VoiceSelected(String),
    VolumeChanged(u8),
}

/// Platform work requested by an event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Decode the file in the background and report back with `ImageDecoded`
    DecodeImage(PathBuf),
    /// Replace the canvas contents with this frame
    Redraw(SurfaceFrame),
    /// Speak, interrupting anything still playing
    Speak(NarrationRequest),
}

/// Everything the meme canvas controller knows.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    layout: SurfaceLayout,
    phase: Phase,
    image: Option<ImageSource>,
    /// Descriptive label for the image (its file name)
    image_label: Option<String>,
    captions: CaptionPair,
    volume: Volume,
    voices: VoiceSelector,
    /// Request built by the last submit or read
    narration: Option<NarrationRequest>,
}

impl SessionState {
    pub fn new(layout: SurfaceLayout, volume: Volume) -> Self {
        Self {
            layout,
            phase: Phase::Empty,
            image: None,
            image_label: None,
            captions: CaptionPair::default(),
            volume,
            voices: VoiceSelector::default(),
            narration: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn controls(&self) -> Controls {
        match self.phase {
            Phase::Empty => Controls {
                submit: self.image.is_some(),
                reset: false,
                read: false,
            },
            Phase::ImageLoaded => Controls {
                submit: true,
                reset: false,
                read: false,
            },
            Phase::CaptionsRendered => Controls {
                submit: false,
                reset: true,
                read: true,
            },
        }
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    pub fn image_label(&self) -> Option<&str> {
        self.image_label.as_deref()
    }

    pub fn captions(&self) -> &CaptionPair {
        &self.captions
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn voices(&self) -> &VoiceSelector {
        &self.voices
    }

    pub fn narration(&self) -> Option<&NarrationRequest> {
        self.narration.as_ref()
    }

    /// Apply one event, returning the next state and the effects to perform.
    pub fn handle(mut self, event: Event) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        match event {
            Event::ImageSelected(None) => {
                log::debug!("Image selection cancelled");
            }
            Event::ImageSelected(Some(file)) => {
                self.image_label = Some(file.name);
                effects.push(Effect::DecodeImage(file.path));
            }
            Event::ImageDecoded(source) => {
                log::info!("Image ready: {} ({}x{})", source.name, source.width, source.height);
                let frame = SurfaceFrame::blank(&self.layout)
                    .with_image(self.layout.fit(source.width, source.height));
                self.image = Some(source);
                self.narration = None;
                self.phase = Phase::ImageLoaded;
                effects.push(Effect::Redraw(frame));
            }
            Event::CaptionEdited(slot, text) => {
                self.captions.set(slot, text);
            }
            Event::FormSubmitted { voices } => {
                if !self.controls().submit {
                    log::debug!("Submit ignored in phase {:?}", self.phase);
                } else if let Some(image) = &self.image {
                    let frame = SurfaceFrame::blank(&self.layout)
                        .with_image(self.layout.fit(image.width, image.height))
                        .with_captions(&self.layout, &self.captions);
                    self.narration = Some(self.prepare_narration(&voices));
                    self.phase = Phase::CaptionsRendered;
                    log::info!("Captions rendered");
                    effects.push(Effect::Redraw(frame));
                }
            }
            Event::Cleared => {
                if self.controls().reset {
                    self.captions.clear();
                    self.narration = None;
                    self.phase = Phase::Empty;
                    log::info!("Canvas cleared");
                    effects.push(Effect::Redraw(SurfaceFrame::blank(&self.layout)));
                } else {
                    log::debug!("Clear ignored in phase {:?}", self.phase);
                }
            }
            Event::ReadClicked { voices } => {
                if self.controls().read {
                    let request = self.prepare_narration(&voices);
                    self.narration = Some(request.clone());
                    effects.push(Effect::Speak(request));
                } else {
                    log::debug!("Read ignored in phase {:?}", self.phase);
                }
            }
            Event::VoiceSelected(name) => {
                self.voices.select(name);
            }
            Event::VolumeChanged(percent) => {
                self.volume = Volume::new(percent);
            }
        }

        (self, effects)
    }

    fn prepare_narration(&mut self, voices: &[VoiceInfo]) -> NarrationRequest {
        narration::prepare(&self.captions, voices, &mut self.voices, self.volume)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SurfaceLayout::default(), Volume::default())
    }
}
