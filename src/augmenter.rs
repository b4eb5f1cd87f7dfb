// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Frame augmenter application state and egui App implementation.
//!
//! Every frame of the loaded video runs through the mask/clip/rotate
//! pipeline before display. The loop is cooperative: one frame per update
//! pass with a deferred repaint in between, so button presses interleave
//! with playback. Session state survives video loads on purpose.

use crate::io::media::{self, FrameSource};
use crate::models::session::AugmentSession;
use crate::pipeline;
use crate::ui::{canvas, toolbar};
use std::time::{Duration, Instant};

const FRAME_DELAY: Duration = Duration::from_millis(10);

pub struct AugmenterApp {
    session: AugmentSession,
    playback: Option<Box<dyn FrameSource>>,
    next_frame_due: Option<Instant>,
    texture: Option<egui::TextureHandle>,
}

impl Default for AugmenterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AugmenterApp {
    pub fn new() -> Self {
        Self {
            session: AugmentSession::new(),
            playback: None,
            next_frame_due: None,
            texture: None,
        }
    }

    fn load_video(&mut self) {
        #[cfg(feature = "video-opencv")]
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Video Files", &["mp4", "avi"])
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

    fn start_playback(&mut self, source: Box<dyn FrameSource>) {
        // Mask points, clip rect and angle carry over to the new video.
        self.playback = Some(source);
        self.next_frame_due = None;
    }
}

impl eframe::App for AugmenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let due = self.next_frame_due.map_or(true, |t| Instant::now() >= t);
        let pulled = match self.playback.as_mut() {
            Some(source) if due => Some(source.next_frame()),
            _ => None,
        };
        match pulled {
            Some(Some(frame)) => {
                let processed = pipeline::process_frame(&self.session, &frame);
                let display = pipeline::resize_for_display(&processed);
                let size = [display.width() as usize, display.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, display.as_raw());
                self.texture =
                    Some(ctx.load_texture("augmented_frame", color_image, egui::TextureOptions::LINEAR));
                self.next_frame_due = Some(Instant::now() + FRAME_DELAY);
            }
            Some(None) => {
                log::info!("End of video stream");
                self.playback = None;
                self.next_frame_due = None;
            }
            None => {}
        }
        if self.playback.is_some() {
            ctx.request_repaint_after(FRAME_DELAY);
        }

        let command = egui::TopBottomPanel::top("controls")
            .show(ctx, |ui| {
                toolbar::augmenter_toolbar(
                    ui,
                    self.session.angle_degrees,
                    self.session.mask_points.len(),
                )
            })
            .inner;

        match command {
            toolbar::AugmenterCommand::LoadVideo => self.load_video(),
            toolbar::AugmenterCommand::ResetMask => {
                self.session.reset_mask_points();
                log::info!("Mask points reset");
            }
            toolbar::AugmenterCommand::ResetClip => {
                self.session.reset_clip_rect();
                log::info!("Clip rectangle reset to default");
            }
            toolbar::AugmenterCommand::RotateLeft => self.session.rotate_left(),
            toolbar::AugmenterCommand::RotateRight => self.session.rotate_right(),
            toolbar::AugmenterCommand::None => {}
        }

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::mask_canvas(ui, &self.texture, &self.session.mask_points)
            })
            .inner;

        match action {
            canvas::MaskCanvasAction::AddPoint(x, y) => {
                self.session.add_mask_point(x, y);
                log::info!(
                    "Added mask point ({x:.0}, {y:.0}), total: {}",
                    self.session.mask_points.len()
                );
            }
            canvas::MaskCanvasAction::ResetPoints => {
                self.session.reset_mask_points();
                log::info!("Mask points reset");
            }
            canvas::MaskCanvasAction::None => {}
        }
    }
}
