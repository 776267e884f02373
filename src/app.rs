// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! `MemeApp` owns the session state and is the only place where platform
//! work happens: it turns UI interaction into session events, and performs
//! the effects the session asks for (decoding images, swapping the canvas
//! frame, speaking).

use crate::io::media::{self, IMAGE_EXTENSIONS};
use crate::io::settings::Settings;
use crate::io::speech::{self, Narrator};
use crate::models::narration::VoiceInfo;
use crate::models::session::{Effect, Event, ImageSource, SelectedFile, SessionState};
use crate::models::surface::SurfaceFrame;
use crate::ui::{canvas, form, voice};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Texture limit assumed until the painter reports its own.
const DEFAULT_MAX_TEXTURE_SIDE: usize = 2048;

/// Result of background image decoding.
struct DecodedImage {
    name: String,
    width: u32,
    height: u32,
    texture_size: [usize; 2],
    pixels: Vec<u8>,
}

/// Main application state.
pub struct MemeApp {
    /// Controller state: phase, captions, volume, voices
    session: SessionState,

    /// Last complete canvas frame; `None` until something is drawn
    frame: Option<SurfaceFrame>,

    /// Texture of the image held by the session
    image_texture: Option<egui::TextureHandle>,

    /// Receiver for background image decoding
    image_loader: Option<Receiver<Result<DecodedImage, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Largest texture side the painter accepts
    max_texture_side: usize,

    narrator: Box<dyn Narrator>,
}

impl MemeApp {
    /// Create the application with the platform speech backend.
    pub fn new(settings: &Settings) -> Self {
        Self::with_narrator(settings, speech::default_narrator())
    }

    pub fn with_narrator(settings: &Settings, narrator: Box<dyn Narrator>) -> Self {
        Self {
            session: SessionState::new(settings.layout(), settings.volume()),
            frame: None,
            image_texture: None,
            image_loader: None,
            loading_message: None,
            max_texture_side: DEFAULT_MAX_TEXTURE_SIDE,
            narrator,
        }
    }

    /// Feed one event through the session and perform the resulting effects.
    fn dispatch(&mut self, event: Event) {
        let session = std::mem::take(&mut self.session);
        let (session, effects) = session.handle(event);
        self.session = session;

        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::DecodeImage(path) => self.decode_image(path),
            Effect::Redraw(frame) => self.frame = Some(frame),
            Effect::Speak(request) => {
                if let Err(e) = self.narrator.speak(&request) {
                    log::error!("Failed to speak captions: {:#}", e);
                }
            }
        }
    }

    /// Current voice catalog; empty if the backend cannot list voices.
    fn query_voices(&mut self) -> Vec<VoiceInfo> {
        self.narrator.voices().unwrap_or_else(|e| {
            log::warn!("Failed to query voices: {:#}", e);
            Vec::new()
        })
    }

    fn submit_captions(&mut self) {
        let voices = self.query_voices();
        self.dispatch(Event::FormSubmitted { voices });
    }

    fn read_aloud(&mut self) {
        let voices = self.query_voices();
        self.dispatch(Event::ReadClicked { voices });
    }

    fn select_image(&mut self, path: Option<PathBuf>) {
        self.dispatch(Event::ImageSelected(path.map(SelectedFile::from_path)));
    }

    /// Decode an image file on a background thread.
    ///
    /// A newer request replaces the receiver, so a slower earlier decode is
    /// dropped when it finishes.
    fn decode_image(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        let max_side = u32::try_from(self.max_texture_side).unwrap_or(u32::MAX);

        std::thread::spawn(move || {
            let result = media::load_image(&path, max_side)
                .map(|loaded| {
                    log::info!("Decoded image: {} ({}x{})", path.display(), loaded.width, loaded.height);
                    DecodedImage {
                        name: SelectedFile::from_path(path.clone()).name,
                        width: loaded.width,
                        height: loaded.height,
                        texture_size: [loaded.texture_width as usize, loaded.texture_height as usize],
                        pixels: loaded.pixels,
                    }
                })
                .map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);
        });
    }

    /// Pick up a finished background decode, if any.
    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(receiver) = self.image_loader.as_ref() else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err("decoder stopped without a result".to_string()),
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(decoded) => {
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied(decoded.texture_size, &decoded.pixels);
                let texture = ctx.load_texture("meme_image", color_image, egui::TextureOptions::LINEAR);
                self.image_texture = Some(texture);

                self.dispatch(Event::ImageDecoded(ImageSource {
                    name: decoded.name,
                    width: decoded.width,
                    height: decoded.height,
                }));
            }
            Err(e) => {
                log::error!("Failed to load image: {}", e);
            }
        }
    }
}

/// Open the native file picker; `None` when the user cancels.
fn pick_image_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

impl eframe::App for MemeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.max_texture_side = ctx.input(|i| i.max_texture_side);
        self.poll_image_loader(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Files dropped onto the window count as a selection
        let dropped = ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if dropped.is_some() {
            self.select_image(dropped);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.select_image(pick_image_file());
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Form and voice controls (left side)
        let (form_action, voice_action) = egui::SidePanel::left("controls")
            .default_width(280.0)
            .show(ctx, |ui| {
                let form_action = form::show(ui, &self.session);
                ui.separator();
                let voice_action = voice::show(ui, self.session.voices(), self.session.volume());
                (form_action, voice_action)
            })
            .inner;

        match form_action {
            form::FormAction::PickImage => self.select_image(pick_image_file()),
            form::FormAction::EditCaption(slot, text) => self.dispatch(Event::CaptionEdited(slot, text)),
            form::FormAction::Submit => self.submit_captions(),
            form::FormAction::Clear => self.dispatch(Event::Cleared),
            form::FormAction::Read => self.read_aloud(),
            form::FormAction::None => {}
        }

        match voice_action {
            voice::VoiceAction::SelectVoice(name) => self.dispatch(Event::VoiceSelected(name)),
            voice::VoiceAction::SetVolume(percent) => self.dispatch(Event::VolumeChanged(percent)),
            voice::VoiceAction::None => {}
        }

        // Canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.loading_message {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new(message).color(egui::Color32::from_gray(200)));
                });
            }
            ui.vertical_centered(|ui| {
                canvas::show(
                    ui,
                    self.session.layout(),
                    self.frame.as_ref(),
                    self.image_texture.as_ref(),
                    self.session.image_label(),
                );
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::caption::CaptionSlot;
    use crate::models::narration::NarrationRequest;
    use crate::models::session::Phase;
    use crate::models::volume::Volume;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Narrator that records every request instead of speaking.
    struct RecordingNarrator {
        voices: Vec<VoiceInfo>,
        spoken: Rc<RefCell<Vec<NarrationRequest>>>,
    }

    impl Narrator for RecordingNarrator {
        fn voices(&mut self) -> anyhow::Result<Vec<VoiceInfo>> {
            Ok(self.voices.clone())
        }

        fn speak(&mut self, request: &NarrationRequest) -> anyhow::Result<()> {
            self.spoken.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    /// Narrator whose backend is broken.
    struct FailingNarrator;

    impl Narrator for FailingNarrator {
        fn voices(&mut self) -> anyhow::Result<Vec<VoiceInfo>> {
            anyhow::bail!("no speech daemon")
        }

        fn speak(&mut self, _request: &NarrationRequest) -> anyhow::Result<()> {
            anyhow::bail!("no speech daemon")
        }
    }

    fn recording_app() -> (MemeApp, Rc<RefCell<Vec<NarrationRequest>>>) {
        let spoken = Rc::new(RefCell::new(Vec::new()));
        let narrator = RecordingNarrator {
            voices: vec![
                VoiceInfo::new("Alice", "en-US", false),
                VoiceInfo::new("Bruno", "fr-FR", true),
            ],
            spoken: Rc::clone(&spoken),
        };
        let app = MemeApp::with_narrator(&Settings::default(), Box::new(narrator));
        (app, spoken)
    }

    fn load_and_caption(app: &mut MemeApp) {
        app.dispatch(Event::ImageDecoded(ImageSource {
            name: "cat.png".to_string(),
            width: 400,
            height: 800,
        }));
        app.dispatch(Event::CaptionEdited(CaptionSlot::Top, "hello".to_string()));
        app.dispatch(Event::CaptionEdited(CaptionSlot::Bottom, "world".to_string()));
        app.submit_captions();
    }

    #[test]
    fn test_nothing_drawn_initially() {
        let (app, _) = recording_app();
        assert!(app.frame.is_none());
        assert_eq!(app.session.phase(), Phase::Empty);
    }

    #[test]
    fn test_submit_redraws_and_populates_voices() {
        let (mut app, spoken) = recording_app();
        load_and_caption(&mut app);

        let frame = app.frame.as_ref().expect("frame drawn");
        let image = frame.image.expect("image drawn");
        assert_eq!((image.width, image.height), (200.0, 400.0));
        assert!(frame.captions.is_some());

        let labels: Vec<&str> = app
            .session
            .voices()
            .options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Alice (en-US)", "Bruno (fr-FR) -- DEFAULT"]);
        assert!(spoken.borrow().is_empty());
    }

    #[test]
    fn test_read_aloud_speaks_through_narrator() {
        let (mut app, spoken) = recording_app();
        load_and_caption(&mut app);
        app.dispatch(Event::VoiceSelected("Bruno".to_string()));
        app.dispatch(Event::VolumeChanged(25));
        app.read_aloud();

        let spoken = spoken.borrow();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "hello world");
        assert_eq!(spoken[0].voice.as_ref().map(|v| v.name.as_str()), Some("Bruno"));
        assert_eq!(spoken[0].volume, Volume::new(25));
    }

    #[test]
    fn test_read_is_ignored_before_captions() {
        let (mut app, spoken) = recording_app();
        app.read_aloud();
        assert!(spoken.borrow().is_empty());
    }

    #[test]
    fn test_clear_leaves_black_canvas() {
        let (mut app, _) = recording_app();
        load_and_caption(&mut app);
        app.dispatch(Event::Cleared);

        let frame = app.frame.as_ref().expect("frame drawn");
        assert!(frame.image.is_none());
        assert!(frame.captions.is_none());
        assert_eq!(app.session.captions().top, "");
        assert_eq!(app.session.captions().bottom, "");
    }

    #[test]
    fn test_cancelled_pick_starts_no_decode() {
        let (mut app, _) = recording_app();
        app.select_image(None);
        assert!(app.image_loader.is_none());
        assert!(app.loading_message.is_none());
    }

    #[test]
    fn test_dead_decoder_stops_loading() {
        let (mut app, _) = recording_app();
        let (sender, receiver) = channel::<Result<DecodedImage, String>>();
        drop(sender);
        app.image_loader = Some(receiver);
        app.loading_message = Some("Loading image...".to_string());

        app.poll_image_loader(&egui::Context::default());

        assert!(app.image_loader.is_none());
        assert!(app.loading_message.is_none());
        assert_eq!(app.session.phase(), Phase::Empty);
    }

    #[test]
    fn test_pending_decode_keeps_loading() {
        let (mut app, _) = recording_app();
        let (_sender, receiver) = channel::<Result<DecodedImage, String>>();
        app.image_loader = Some(receiver);
        app.loading_message = Some("Loading image...".to_string());

        app.poll_image_loader(&egui::Context::default());

        assert!(app.image_loader.is_some());
        assert!(app.loading_message.is_some());
    }

    #[test]
    fn test_decode_respects_texture_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panorama.png");
        image::RgbaImage::new(400, 20).save(&path).unwrap();

        let (mut app, _) = recording_app();
        app.max_texture_side = 100;
        app.decode_image(path);

        let decoded = app.image_loader.as_ref().unwrap().recv().unwrap().unwrap();
        assert_eq!((decoded.width, decoded.height), (400, 20));
        assert_eq!(decoded.texture_size, [100, 5]);
        assert_eq!(decoded.pixels.len(), 100 * 5 * 4);
    }

    #[test]
    fn test_backend_failures_degrade_silently() {
        let mut app = MemeApp::with_narrator(&Settings::default(), Box::new(FailingNarrator));
        load_and_caption(&mut app);
        app.read_aloud();

        assert_eq!(app.session.phase(), Phase::CaptionsRendered);
        let request = app.session.narration().expect("request prepared");
        assert_eq!(request.voice, None);
    }
}
