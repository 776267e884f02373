// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption text overlaid on the canvas.

/// Which of the two caption fields is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionSlot {
    Top,
    Bottom,
}

/// The top and bottom caption strings. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionPair {
    pub top: String,
    pub bottom: String,
}

impl CaptionPair {
    #[cfg(test)]
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    pub fn get(&self, slot: CaptionSlot) -> &str {
        match slot {
            CaptionSlot::Top => &self.top,
            CaptionSlot::Bottom => &self.bottom,
        }
    }

    pub fn set(&mut self, slot: CaptionSlot, text: String) {
        match slot {
            CaptionSlot::Top => self.top = text,
            CaptionSlot::Bottom => self.bottom = text,
        }
    }

    /// Blank both fields.
    pub fn clear(&mut self) {
        self.top.clear();
        self.bottom.clear();
    }

    /// Text handed to the speech synthesizer: both captions joined by a space.
    pub fn spoken_text(&self) -> String {
        format!("{} {}", self.top, self.bottom)
    }
}
