// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas widgets for both tools.
//!
//! The editor canvas shows the loaded media, reports drag gestures in media
//! pixel coordinates, and strokes committed (blue) and transient (red)
//! rectangles. The augmenter canvas shows processed frames at the fixed
//! display size and reports mask-point clicks.

use crate::models::roi::{Roi, RoiSet};
use crate::pipeline::DISPLAY_SIZE;
use crate::util::geometry;

/// Result of an editor canvas interaction, in media pixel coordinates.
pub enum CanvasAction {
    None,
    Press(f32, f32),
    Drag(f32, f32),
    Release(f32, f32),
}

/// Result of an augmenter canvas interaction, in canvas pixel coordinates.
pub enum MaskCanvasAction {
    None,
    AddPoint(f32, f32),
    ResetPoints,
}

/// Display the editor canvas and handle the drag gesture.
pub fn editor_canvas(
    ui: &mut egui::Ui,
    texture: &Option<egui::TextureHandle>,
    media_size: (u32, u32),
    rois: &RoiSet,
    transient: Option<Roi>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let available = egui::Rect::from_min_size(ui.min_rect().min, available_size);
        let media_rect = geometry::fit_rect(available, media_size);

        if let Some(texture) = texture {
            ui.painter().image(
                texture.id(),
                media_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        let response = ui.allocate_rect(media_rect, egui::Sense::drag());
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = geometry::screen_to_media(pos, media_rect, media_size);
                action = CanvasAction::Press(x, y);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = geometry::screen_to_media(pos, media_rect, media_size);
                action = CanvasAction::Drag(x, y);
            }
        } else if response.drag_stopped() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = geometry::screen_to_media(pos, media_rect, media_size);
                action = CanvasAction::Release(x, y);
            } else if let Some(t) = transient {
                // Pointer left the window mid-drag; finish at the last point.
                action = CanvasAction::Release(t.x2, t.y2);
            }
        }

        let painter = ui.painter();
        for roi in &rois.rois {
            stroke_roi(painter, roi, media_rect, media_size, egui::Color32::BLUE);
        }
        if let Some(roi) = transient {
            stroke_roi(painter, &roi, media_rect, media_size, egui::Color32::RED);
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("ROIs: {}", rois.len()));
        ui.separator();
        if texture.is_some() {
            ui.label("Ready");
        } else {
            ui.label("No media loaded");
        }
    });

    action
}

fn stroke_roi(
    painter: &egui::Painter,
    roi: &Roi,
    media_rect: egui::Rect,
    media_size: (u32, u32),
    color: egui::Color32,
) {
    let a = geometry::media_to_screen((roi.x1, roi.y1), media_rect, media_size);
    let b = geometry::media_to_screen((roi.x2, roi.y2), media_rect, media_size);
    painter.rect_stroke(
        egui::Rect::from_two_pos(a, b),
        egui::Rounding::ZERO,
        egui::Stroke::new(2.0, color),
    );
}

/// Display the augmenter canvas: the current processed frame plus markers
/// for the mask vertices. Left click adds a vertex, right click resets.
pub fn mask_canvas(
    ui: &mut egui::Ui,
    texture: &Option<egui::TextureHandle>,
    mask_points: &[(f32, f32)],
) -> MaskCanvasAction {
    let mut action = MaskCanvasAction::None;

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        let size = egui::vec2(DISPLAY_SIZE.0 as f32, DISPLAY_SIZE.1 as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if let Some(texture) = texture {
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Load a video to begin",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(150),
            );
        }

        if response.secondary_clicked() {
            action = MaskCanvasAction::ResetPoints;
        } else if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                action = MaskCanvasAction::AddPoint(pos.x - rect.min.x, pos.y - rect.min.y);
            }
        }

        let painter = ui.painter();
        for &(x, y) in mask_points {
            let center = egui::pos2(rect.min.x + x, rect.min.y + y);
            painter.circle_filled(center, 3.0, egui::Color32::LIGHT_BLUE);
            painter.circle_stroke(center, 3.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
        }
    });

    action
}
