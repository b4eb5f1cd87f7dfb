// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Rectangle overlays baked onto media frames.
//!
//! Played video and camera frames get a green outline; a still image gets
//! a red one, drawn once at load.

use crate::models::roi::Roi;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

pub const PLAYBACK_OUTLINE: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const IMAGE_OUTLINE: Rgba<u8> = Rgba([255, 0, 0, 255]);

const OUTLINE_THICKNESS: i32 = 2;

/// Draw a rectangle outline onto the frame. Inverted corner order draws
/// the same rectangle as the ordered one.
pub fn draw_roi(frame: &mut RgbaImage, roi: &Roi, color: Rgba<u8>) {
    let (x1, y1, x2, y2) = roi.ordered();
    let width = ((x2 - x1) as u32).max(1);
    let height = ((y2 - y1) as u32).max(1);

    for inset in 0..OUTLINE_THICKNESS {
        let w = width.saturating_sub(2 * inset as u32).max(1);
        let h = height.saturating_sub(2 * inset as u32).max(1);
        draw_hollow_rect_mut(
            frame,
            Rect::at(x1 as i32 + inset, y1 as i32 + inset).of_size(w, h),
            color,
        );
    }
}
