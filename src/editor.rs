// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! ROI editor application state and egui App implementation.
//!
//! Rectangles are drawn with mouse drags over the canvas, persisted to a
//! flat JSON file, and overlaid onto played media. Playback is a
//! cooperative render loop: one frame per update pass, rescheduled through
//! a deferred repaint so the controls stay responsive.

use crate::io::media::{self, FrameSource};
use crate::io::serialization::{self, RoiLoadError};
use crate::models::roi::{DragGesture, Roi, RoiSet};
use crate::overlay;
use crate::ui::{canvas, toolbar};
use std::time::{Duration, Instant};

/// Delay between played frames.
const FRAME_DELAY: Duration = Duration::from_millis(10);

/// Media space assumed when nothing is loaded, so drawing works on the
/// bare canvas.
const EMPTY_CANVAS_SIZE: (u32, u32) = (800, 600);

pub struct RoiEditorApp {
    rois: RoiSet,
    gesture: DragGesture,
    /// Last recorded start/end pair. This, not the full set, is what
    /// playback overlays by default; it survives media loads but not Clear.
    last_rect: Option<Roi>,
    /// Overlay every committed rectangle during playback instead of only
    /// the most recent one.
    overlay_all: bool,

    playback: Option<Box<dyn FrameSource>>,
    next_frame_due: Option<Instant>,
    texture: Option<egui::TextureHandle>,
    media_size: Option<(u32, u32)>,
}

impl Default for RoiEditorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl RoiEditorApp {
    pub fn new() -> Self {
        Self {
            rois: RoiSet::default(),
            gesture: DragGesture::default(),
            last_rect: None,
            overlay_all: false,
            playback: None,
            next_frame_due: None,
            texture: None,
            media_size: None,
        }
    }

    fn press(&mut self, x: f32, y: f32) {
        self.gesture.press(x, y);
    }

    fn drag_to(&mut self, x: f32, y: f32) {
        self.gesture.drag(x, y);
        if let Some(transient) = self.gesture.transient() {
            self.last_rect = Some(transient);
        }
    }

    fn commit(&mut self, x: f32, y: f32) {
        if let Some(roi) = self.gesture.release(x, y) {
            self.last_rect = Some(roi);
            self.rois.push(roi);
            log::info!(
                "Committed ROI ({:.0}, {:.0}, {:.0}, {:.0}), total: {}",
                roi.x1,
                roi.y1,
                roi.x2,
                roi.y2,
                self.rois.len()
            );
        }
    }

    /// The Clear button: empty set, no transient, no last rectangle.
    fn clear_rois(&mut self) {
        self.rois.clear();
        self.gesture.reset();
        self.last_rect = None;
        log::info!("Cleared all ROIs");
    }

    /// Opening any media source empties the set but keeps the last
    /// recorded rectangle so it can be overlaid on the new media.
    fn reset_rois_for_media(&mut self) {
        self.rois.clear();
        self.gesture.reset();
    }

    fn stop_playback(&mut self) {
        self.playback = None;
        self.next_frame_due = None;
    }

    fn start_playback(&mut self, source: Box<dyn FrameSource>) {
        self.reset_rois_for_media();
        self.playback = Some(source);
        self.next_frame_due = None;
    }

    fn set_frame_texture(&mut self, ctx: &egui::Context, frame: &image::RgbaImage) {
        let size = [frame.width() as usize, frame.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
        self.texture = Some(ctx.load_texture("media_frame", color_image, egui::TextureOptions::LINEAR));
        self.media_size = Some((frame.width(), frame.height()));
    }

    fn overlay_onto(&self, frame: &mut image::RgbaImage, color: image::Rgba<u8>) {
        if self.overlay_all {
            for roi in &self.rois.rois {
                overlay::draw_roi(frame, roi, color);
            }
        } else if let Some(roi) = &self.last_rect {
            overlay::draw_roi(frame, roi, color);
        }
    }

    fn open_video(&mut self) {
        #[cfg(feature = "video-opencv")]
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Video files", &["mp4", "avi"])
                .pick_file()
            {
                match media::capture::CaptureSource::from_file(&path) {
                    Ok(source) => self.start_playback(Box::new(source)),
                    Err(e) => log::error!("Failed to open video: {e}"),
                }
            }
        }
        #[cfg(not(feature = "video-opencv"))]
        {
            // Without the opencv backend, a video is a directory of frames.
            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                match media::ImageSequenceSource::open(&dir) {
                    Ok(source) => self.start_playback(Box::new(source)),
                    Err(e) => log::error!("Failed to open frame sequence: {e}"),
                }
            }
        }
    }

    fn open_image(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            self.stop_playback();
            self.reset_rois_for_media();
            match media::load_image(&path) {
                Ok(mut frame) => {
                    // Drawn once at load; later edits stroke the canvas only.
                    if let Some(roi) = &self.last_rect {
                        overlay::draw_roi(&mut frame, roi, overlay::IMAGE_OUTLINE);
                    }
                    self.set_frame_texture(ctx, &frame);
                    log::info!("Loaded image {}", path.display());
                }
                Err(e) => log::error!("{e}"),
            }
        }
    }

    fn open_camera(&mut self) {
        #[cfg(feature = "video-opencv")]
        {
            match media::capture::CaptureSource::from_camera(0) {
                Ok(source) => self.start_playback(Box::new(source)),
                Err(e) => log::error!("Failed to open camera: {e}"),
            }
        }
        #[cfg(not(feature = "video-opencv"))]
        {
            log::error!("Camera capture requires the video-opencv feature");
        }
    }

    fn save_rois(&self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .set_file_name("rois.json")
            .save_file()
        {
            if let Err(e) = serialization::save_rois(&self.rois, &path) {
                log::error!("Failed to save ROIs: {e}");
            }
        }
    }

    fn load_rois(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            match serialization::load_rois(&path) {
                Ok(set) => {
                    self.gesture.reset();
                    self.rois = set;
                    log::info!("RoIs loaded successfully ({} rectangles)", self.rois.len());
                }
                // Both failure kinds leave the prior set untouched.
                Err(e @ RoiLoadError::NotFound(_)) => log::warn!("{e}"),
                Err(e @ RoiLoadError::Decode(_)) => log::error!("{e}"),
                Err(e) => log::error!("Failed to load ROIs: {e}"),
            }
        }
    }
}

impl eframe::App for RoiEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull at most one frame per pass from the active playback source.
        let due = self.next_frame_due.map_or(true, |t| Instant::now() >= t);
        let pulled = match self.playback.as_mut() {
            Some(source) if due => Some(source.next_frame()),
            _ => None,
        };
        match pulled {
            Some(Some(mut frame)) => {
                self.overlay_onto(&mut frame, overlay::PLAYBACK_OUTLINE);
                self.set_frame_texture(ctx, &frame);
                self.next_frame_due = Some(Instant::now() + FRAME_DELAY);
            }
            Some(None) => {
                log::info!("End of stream");
                self.stop_playback();
            }
            None => {}
        }
        if self.playback.is_some() {
            ctx.request_repaint_after(FRAME_DELAY);
        }

        // Quit key ends playback, as the original display windows did.
        if self.playback.is_some() && ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            log::info!("Playback stopped by user");
            self.stop_playback();
        }

        let command = egui::TopBottomPanel::top("controls")
            .show(ctx, |ui| toolbar::editor_toolbar(ui, &mut self.overlay_all))
            .inner;

        match command {
            toolbar::EditorCommand::OpenVideo => self.open_video(),
            toolbar::EditorCommand::OpenImage => self.open_image(ctx),
            toolbar::EditorCommand::OpenCamera => self.open_camera(),
            toolbar::EditorCommand::SaveRois => self.save_rois(),
            toolbar::EditorCommand::LoadRois => self.load_rois(),
            toolbar::EditorCommand::ClearRois => self.clear_rois(),
            toolbar::EditorCommand::Exit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            toolbar::EditorCommand::None => {}
        }

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::editor_canvas(
                    ui,
                    &self.texture,
                    self.media_size.unwrap_or(EMPTY_CANVAS_SIZE),
                    &self.rois,
                    self.gesture.transient(),
                )
            })
            .inner;

        match action {
            canvas::CanvasAction::Press(x, y) => self.press(x, y),
            canvas::CanvasAction::Drag(x, y) => self.drag_to(x, y),
            canvas::CanvasAction::Release(x, y) => self.commit(x, y),
            canvas::CanvasAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_gesture_appends_exactly_one_committed_rectangle() {
        let mut app = RoiEditorApp::new();
        app.press(10.0, 10.0);
        app.drag_to(50.0, 50.0);
        app.commit(50.0, 50.0);

        assert_eq!(app.rois.rois, vec![Roi::new(10.0, 10.0, 50.0, 50.0)]);
        assert_eq!(app.gesture.transient(), None);
        assert_eq!(app.last_rect, Some(Roi::new(10.0, 10.0, 50.0, 50.0)));
    }

    #[test]
    fn clear_empties_everything_regardless_of_prior_state() {
        let mut app = RoiEditorApp::new();
        app.clear_rois();
        assert!(app.rois.is_empty());

        app.press(1.0, 2.0);
        app.drag_to(3.0, 4.0);
        app.commit(3.0, 4.0);
        app.press(5.0, 5.0);
        app.drag_to(9.0, 9.0);

        app.clear_rois();
        assert!(app.rois.is_empty());
        assert_eq!(app.gesture.transient(), None);
        assert_eq!(app.last_rect, None);
    }

    #[test]
    fn opening_media_clears_the_set_but_keeps_the_last_rectangle() {
        let mut app = RoiEditorApp::new();
        app.press(10.0, 10.0);
        app.drag_to(40.0, 40.0);
        app.commit(40.0, 40.0);

        app.reset_rois_for_media();
        assert!(app.rois.is_empty());
        assert_eq!(app.last_rect, Some(Roi::new(10.0, 10.0, 40.0, 40.0)));
    }

    #[test]
    fn click_without_motion_commits_a_degenerate_rectangle() {
        let mut app = RoiEditorApp::new();
        app.press(20.0, 30.0);
        app.commit(20.0, 30.0);
        assert_eq!(app.rois.rois, vec![Roi::new(20.0, 30.0, 20.0, 30.0)]);
    }
}
