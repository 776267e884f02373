// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: image decoding, settings and speech output.

pub mod media;
pub mod settings;
pub mod speech;
