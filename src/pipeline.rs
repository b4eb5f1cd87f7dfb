// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Per-frame augmentation pipeline: mask, clip, rotate.
//!
//! The three steps run in fixed order on every frame. Masking zeroes
//! everything outside the polygon, clipping crops to the session's clip
//! rectangle, and rotation turns the clipped frame about its own center
//! while keeping its dimensions.

use crate::models::session::AugmentSession;
use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use imageproc::point::Point;

/// Fixed size every processed frame is resized to before display.
pub const DISPLAY_SIZE: (u32, u32) = (640, 480);

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Run the full pipeline for one frame.
pub fn process_frame(session: &AugmentSession, frame: &RgbaImage) -> RgbaImage {
    let masked = if session.mask_points.is_empty() {
        frame.clone()
    } else {
        apply_mask(frame, &session.mask_points)
    };
    let clipped = clip(&masked, session.clip_rect);
    rotate(&clipped, session.angle_degrees)
}

/// Zero out every pixel outside the polygon spanned by `points`.
///
/// Fewer than three vertices rasterize to an empty mask, so the whole
/// frame goes black, matching the fill semantics of the usual polygon
/// rasterizers.
pub fn apply_mask(frame: &RgbaImage, points: &[(f32, f32)]) -> RgbaImage {
    let mut mask = GrayImage::new(frame.width(), frame.height());

    let mut polygon: Vec<Point<i32>> = points
        .iter()
        .map(|&(x, y)| Point::new(x as i32, y as i32))
        .collect();
    polygon.dedup();
    // The rasterizer rejects an explicitly closed polygon.
    if polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    if polygon.len() >= 3 {
        draw_polygon_mut(&mut mask, &polygon, Luma([255u8]));
    }

    let mut out = RgbaImage::from_pixel(frame.width(), frame.height(), BACKGROUND);
    for (x, y, pixel) in frame.enumerate_pixels() {
        if mask.get_pixel(x, y)[0] != 0 {
            out.put_pixel(x, y, *pixel);
        }
    }
    out
}

/// Crop to `(x1, y1, x2, y2)`, clamped at the frame boundary.
pub fn clip(frame: &RgbaImage, rect: (u32, u32, u32, u32)) -> RgbaImage {
    let (x1, y1, x2, y2) = rect;
    let x1 = x1.min(frame.width().saturating_sub(1));
    let y1 = y1.min(frame.height().saturating_sub(1));
    let x2 = x2.clamp(x1 + 1, frame.width());
    let y2 = y2.clamp(y1 + 1, frame.height());
    imageops::crop_imm(frame, x1, y1, x2 - x1, y2 - y1).to_image()
}

/// Rotate about the frame center, keeping dimensions. Corners uncovered by
/// the rotation fill with black. Positive angles turn counterclockwise, as
/// the rotate-left control expects.
pub fn rotate(frame: &RgbaImage, angle_degrees: i32) -> RgbaImage {
    let theta = -(angle_degrees as f32).to_radians();
    rotate_about_center(frame, theta, Interpolation::Bilinear, BACKGROUND)
}

/// Resize a processed frame to the fixed display size.
pub fn resize_for_display(frame: &RgbaImage) -> RgbaImage {
    imageops::resize(
        frame,
        DISPLAY_SIZE.0,
        DISPLAY_SIZE.1,
        imageops::FilterType::Triangle,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn white_frame(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, WHITE)
    }

    #[test]
    fn mask_keeps_inside_and_zeroes_outside() {
        let frame = white_frame(20, 20);
        let points = [(4.0, 4.0), (15.0, 4.0), (15.0, 15.0), (4.0, 15.0)];

        let masked = apply_mask(&frame, &points);
        assert_eq!(*masked.get_pixel(10, 10), WHITE);
        assert_eq!(*masked.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*masked.get_pixel(19, 19), BACKGROUND);
    }

    #[test]
    fn mask_with_two_points_blacks_the_frame() {
        let frame = white_frame(10, 10);
        let masked = apply_mask(&frame, &[(1.0, 1.0), (8.0, 8.0)]);
        assert!(masked.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn duplicate_closing_vertex_is_tolerated() {
        let frame = white_frame(20, 20);
        let points = [
            (4.0, 4.0),
            (15.0, 4.0),
            (15.0, 15.0),
            (4.0, 15.0),
            (4.0, 4.0),
        ];
        let masked = apply_mask(&frame, &points);
        assert_eq!(*masked.get_pixel(10, 10), WHITE);
    }

    #[test]
    fn clip_produces_requested_dimensions() {
        let frame = white_frame(500, 500);
        let clipped = clip(&frame, (100, 100, 400, 400));
        assert_eq!((clipped.width(), clipped.height()), (300, 300));
    }

    #[test]
    fn clip_clamps_at_the_frame_boundary() {
        let frame = white_frame(8, 8);
        let clipped = clip(&frame, (4, 4, 100, 100));
        assert_eq!((clipped.width(), clipped.height()), (4, 4));
    }

    #[test]
    fn rotation_preserves_dimensions() {
        let frame = white_frame(30, 20);
        let rotated = rotate(&frame, 37);
        assert_eq!((rotated.width(), rotated.height()), (30, 20));
    }

    #[test]
    fn rotation_by_zero_leaves_pixels_in_place() {
        let mut frame = white_frame(10, 10);
        frame.put_pixel(3, 7, Rgba([10, 20, 30, 255]));
        let rotated = rotate(&frame, 0);
        assert_eq!(*rotated.get_pixel(3, 7), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn pipeline_without_mask_points_skips_masking() {
        let session = AugmentSession {
            mask_points: Vec::new(),
            clip_rect: (0, 0, 10, 10),
            angle_degrees: 0,
        };
        let frame = white_frame(10, 10);
        let out = process_frame(&session, &frame);
        assert_eq!((out.width(), out.height()), (10, 10));
        assert_eq!(*out.get_pixel(5, 5), WHITE);
    }

    #[test]
    fn pipeline_applies_mask_then_clip_then_rotate() {
        let mut session = AugmentSession::new();
        session.clip_rect = (10, 10, 40, 40);
        // Polygon covers the left half of the source frame only.
        session.mask_points = vec![(0.0, 0.0), (25.0, 0.0), (25.0, 49.0), (0.0, 49.0)];

        let frame = white_frame(50, 50);
        let out = process_frame(&session, &frame);
        assert_eq!((out.width(), out.height()), (30, 30));
        // Clip origin is (10, 10): source x=12 is inside the mask, x=45 is not.
        assert_eq!(*out.get_pixel(2, 5), WHITE);
        assert_eq!(*out.get_pixel(29, 5), BACKGROUND);
    }

    #[test]
    fn display_resize_yields_fixed_size() {
        let out = resize_for_display(&white_frame(300, 300));
        assert_eq!((out.width(), out.height()), DISPLAY_SIZE);
    }
}
