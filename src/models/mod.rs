// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model and control logic.

pub mod caption;
pub mod narration;
pub mod session;
pub mod surface;
pub mod volume;
