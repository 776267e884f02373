// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback volume and its icon tiers.

/// Playback volume as a percentage, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    pub const MAX: Volume = Volume(100);

    /// Create a volume, clamping anything above 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Volume as a fraction in 0.0..=1.0.
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub fn tier(self) -> VolumeTier {
        match self.0 {
            0 => VolumeTier::Muted,
            1..=33 => VolumeTier::Low,
            34..=66 => VolumeTier::Medium,
            _ => VolumeTier::High,
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

/// Icon shown next to the volume slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeTier {
    /// Tier number, 0 (muted) to 3 (loud).
    pub fn level(self) -> u8 {
        match self {
            VolumeTier::Muted => 0,
            VolumeTier::Low => 1,
            VolumeTier::Medium => 2,
            VolumeTier::High => 3,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            VolumeTier::Muted => "🔇",
            VolumeTier::Low => "🔈",
            VolumeTier::Medium => "🔉",
            VolumeTier::High => "🔊",
        }
    }

    /// Hover text for the icon.
    pub fn alt_text(self) -> String {
        format!("Volume Level {}", self.level())
    }
}
