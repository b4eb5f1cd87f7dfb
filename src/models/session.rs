// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Augmentation session state.
//!
//! All mutable state of the frame augmenter lives in one session object:
//! the polygon mask vertices, the clip rectangle, and the rotation angle.
//! The session deliberately survives video loads; only the dedicated
//! controls reset its pieces.

/// Clip rectangle applied to every frame: (x1, y1, x2, y2).
pub const DEFAULT_CLIP_RECT: (u32, u32, u32, u32) = (100, 100, 400, 400);

/// Degrees added or subtracted per rotate button press.
pub const ROTATION_STEP_DEGREES: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AugmentSession {
    /// Polygon mask vertices in frame pixel coordinates. Transient; rebuilt
    /// from scratch after every reset.
    pub mask_points: Vec<(f32, f32)>,
    pub clip_rect: (u32, u32, u32, u32),
    /// Unbounded; never normalized modulo 360.
    pub angle_degrees: i32,
}

impl Default for AugmentSession {
    fn default() -> Self {
        Self {
            mask_points: Vec::new(),
            clip_rect: DEFAULT_CLIP_RECT,
            angle_degrees: 0,
        }
    }
}

impl AugmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mask_point(&mut self, x: f32, y: f32) {
        self.mask_points.push((x, y));
    }

    pub fn reset_mask_points(&mut self) {
        self.mask_points.clear();
    }

    pub fn reset_clip_rect(&mut self) {
        self.clip_rect = DEFAULT_CLIP_RECT;
    }

    pub fn rotate_left(&mut self) {
        self.angle_degrees += ROTATION_STEP_DEGREES;
    }

    pub fn rotate_right(&mut self) {
        self.angle_degrees -= ROTATION_STEP_DEGREES;
    }
}
