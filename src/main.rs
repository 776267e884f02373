// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! memegen - a meme canvas
//!
//! A desktop application for loading an image, overlaying top and bottom
//! captions and having them read aloud with the platform's speech engine.

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::MemeApp;
use io::settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::from_env()?;

    // Leave room for the control panel next to the canvas
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.canvas_width + 340.0, settings.canvas_height.max(420.0) + 80.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true)
            .with_title("Meme Generator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "memegen",
        options,
        Box::new(move |_cc| Ok(Box::new(MemeApp::new(&settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
