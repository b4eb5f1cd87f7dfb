// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Button rows for both tools.
//!
//! Each toolbar returns at most one command per frame; the apps translate
//! commands into state changes and dialogs.

/// Commands issued by the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    None,
    OpenVideo,
    OpenImage,
    OpenCamera,
    SaveRois,
    LoadRois,
    ClearRois,
    Exit,
}

pub fn editor_toolbar(ui: &mut egui::Ui, overlay_all: &mut bool) -> EditorCommand {
    let mut command = EditorCommand::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("Video").clicked() {
            command = EditorCommand::OpenVideo;
        }
        if ui.button("Image").clicked() {
            command = EditorCommand::OpenImage;
        }
        if ui.button("Camera").clicked() {
            command = EditorCommand::OpenCamera;
        }

        ui.separator();

        if ui.button("Save ROI").clicked() {
            command = EditorCommand::SaveRois;
        }
        if ui.button("Load ROI").clicked() {
            command = EditorCommand::LoadRois;
        }
        if ui.button("Clear ROI").clicked() {
            command = EditorCommand::ClearRois;
        }

        ui.separator();

        // Playback normally overlays only the most recent rectangle.
        ui.checkbox(overlay_all, "Overlay all ROIs");

        ui.separator();

        if ui.button("Exit").clicked() {
            command = EditorCommand::Exit;
        }
    });

    command
}

/// Commands issued by the augmenter toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmenterCommand {
    None,
    LoadVideo,
    ResetMask,
    ResetClip,
    RotateLeft,
    RotateRight,
}

pub fn augmenter_toolbar(
    ui: &mut egui::Ui,
    angle_degrees: i32,
    mask_point_count: usize,
) -> AugmenterCommand {
    let mut command = AugmenterCommand::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("Load Video").clicked() {
            command = AugmenterCommand::LoadVideo;
        }

        ui.separator();

        if ui.button("Reset RoI").clicked() {
            command = AugmenterCommand::ResetMask;
        }
        if ui.button("Reset Clip Rect").clicked() {
            command = AugmenterCommand::ResetClip;
        }

        ui.separator();

        if ui.button("Rotate Left").clicked() {
            command = AugmenterCommand::RotateLeft;
        }
        if ui.button("Rotate Right").clicked() {
            command = AugmenterCommand::RotateRight;
        }

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "Angle: {angle_degrees}°  |  Mask points: {mask_point_count}"
            ))
            .weak(),
        );
    });

    command
}
