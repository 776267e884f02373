// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Speech synthesis backends.
//!
//! The app talks to the platform synthesizer through the [`Narrator`]
//! trait. The native backend wraps the `tts` crate; when it is compiled out
//! or cannot start, [`SilentNarrator`] stands in and only logs.

use crate::models::narration::{NarrationRequest, VoiceInfo};
use anyhow::Result;

/// Platform speech synthesis.
pub trait Narrator {
    /// Query the voices currently offered by the platform.
    fn voices(&mut self) -> Result<Vec<VoiceInfo>>;

    /// Speak a request, interrupting anything still playing.
    fn speak(&mut self, request: &NarrationRequest) -> Result<()>;
}

/// Pick the best available narrator for this build.
pub fn default_narrator() -> Box<dyn Narrator> {
    #[cfg(feature = "speech")]
    match native::TtsNarrator::new() {
        Ok(narrator) => return Box::new(narrator),
        Err(e) => log::warn!("Speech synthesis unavailable: {:#}", e),
    }

    Box::new(SilentNarrator)
}

/// Pick the backend voice to apply for a request.
///
/// The wanted name is matched exactly against the last queried voices. When
/// nothing is wanted or the name is no longer offered, the voice that was
/// current when the backend started is used instead, so an earlier explicit
/// choice does not leak into later requests.
#[cfg_attr(not(feature = "speech"), allow(dead_code))]
fn choose_voice<'a, V>(
    voices: &'a [V],
    name_of: impl Fn(&V) -> String,
    wanted: Option<&str>,
    default: Option<&'a V>,
) -> Option<&'a V> {
    wanted
        .and_then(|name| voices.iter().find(|v| name_of(v) == name))
        .or(default)
}

/// Narrator with no voices that logs instead of speaking.
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn voices(&mut self) -> Result<Vec<VoiceInfo>> {
        Ok(Vec::new())
    }

    fn speak(&mut self, request: &NarrationRequest) -> Result<()> {
        log::info!("(silent) would speak {:?}", request.text);
        Ok(())
    }
}

#[cfg(feature = "speech")]
mod native {
    use super::{choose_voice, Narrator};
    use crate::models::narration::{NarrationRequest, VoiceInfo};
    use anyhow::Result;
    use tts::{Tts, Voice};

    /// Narrator backed by the platform engine through the `tts` crate.
    pub struct TtsNarrator {
        tts: Tts,
        /// Voices from the most recent query, used to resolve requests
        voices: Vec<Voice>,
        /// Voice that was current at startup, restored for unmatched requests
        default_voice: Option<Voice>,
    }

    impl TtsNarrator {
        pub fn new() -> Result<Self> {
            let tts = Tts::default()?;
            let features = tts.supported_features();
            log::info!(
                "Speech backend ready (voice selection: {}, volume: {})",
                features.voice,
                features.volume
            );
            let default_voice = if features.get_voice {
                tts.voice().unwrap_or_else(|e| {
                    log::warn!("Failed to read the default voice: {}", e);
                    None
                })
            } else {
                None
            };
            Ok(Self {
                tts,
                voices: Vec::new(),
                default_voice,
            })
        }

        /// Map 0.0..=1.0 onto the backend's own volume range.
        fn backend_volume(&self, fraction: f32) -> f32 {
            let min = self.tts.min_volume();
            let max = self.tts.max_volume();
            min + (max - min) * fraction
        }
    }

    impl Narrator for TtsNarrator {
        fn voices(&mut self) -> Result<Vec<VoiceInfo>> {
            let features = self.tts.supported_features();
            if !features.voice {
                log::debug!("Backend does not list voices");
                self.voices.clear();
                return Ok(Vec::new());
            }

            let default_id = self.default_voice.as_ref().map(|v| v.id());

            self.voices = self.tts.voices()?;
            let voices = self
                .voices
                .iter()
                .map(|v| {
                    let is_default = default_id.as_deref() == Some(v.id().as_str());
                    VoiceInfo::new(v.name(), v.language().to_string(), is_default)
                })
                .collect();
            Ok(voices)
        }

        fn speak(&mut self, request: &NarrationRequest) -> Result<()> {
            let features = self.tts.supported_features();

            let wanted = request.voice.as_ref().map(|v| v.name.as_str());
            let voice = choose_voice(&self.voices, Voice::name, wanted, self.default_voice.as_ref());
            match voice {
                Some(voice) if features.voice => self.tts.set_voice(voice)?,
                Some(_) => log::debug!("Backend cannot switch voices"),
                None => log::debug!("No voice to apply for {:?}, leaving the backend as is", wanted),
            }

            if features.volume {
                let volume = self.backend_volume(request.volume.fraction());
                self.tts.set_volume(volume)?;
            } else {
                log::debug!("Backend cannot change volume");
            }

            self.tts.speak(request.text.as_str(), true)?;
            log::info!("Speaking {:?}", request.text);
            Ok(())
        }
    }
}
