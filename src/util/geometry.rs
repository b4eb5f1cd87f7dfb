// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Coordinate transformations between the on-screen canvas and media pixel
//! space, plus aspect-preserving fitting of media into the canvas area.

/// Compute the letterboxed rectangle that fits `media_size` inside
/// `available`, centered, preserving aspect ratio.
pub fn fit_rect(available: egui::Rect, media_size: (u32, u32)) -> egui::Rect {
    let media_aspect = media_size.0 as f32 / media_size.1 as f32;
    let available_aspect = available.width() / available.height();

    let (width, height) = if media_aspect > available_aspect {
        // Media is wider - fit to width
        (available.width(), available.width() / media_aspect)
    } else {
        // Media is taller - fit to height
        (available.height() * media_aspect, available.height())
    };

    let offset = egui::vec2(
        (available.width() - width) / 2.0,
        (available.height() - height) / 2.0,
    );
    egui::Rect::from_min_size(available.min + offset, egui::vec2(width, height))
}

/// Map a screen position inside the displayed media rect to media pixel
/// coordinates.
pub fn screen_to_media(
    pos: egui::Pos2,
    media_rect: egui::Rect,
    media_size: (u32, u32),
) -> (f32, f32) {
    let rel_x = (pos.x - media_rect.min.x) / media_rect.width();
    let rel_y = (pos.y - media_rect.min.y) / media_rect.height();
    (rel_x * media_size.0 as f32, rel_y * media_size.1 as f32)
}

/// Map a point in media pixel coordinates back to screen space.
pub fn media_to_screen(
    point: (f32, f32),
    media_rect: egui::Rect,
    media_size: (u32, u32),
) -> egui::Pos2 {
    egui::pos2(
        media_rect.min.x + point.0 / media_size.0 as f32 * media_rect.width(),
        media_rect.min.y + point.1 / media_size.1 as f32 * media_rect.height(),
    )
}
