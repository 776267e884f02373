// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the meme generator.

pub mod canvas;
pub mod form;
pub mod voice;
