// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Rectangle ROI data structures.
//!
//! This module defines the rectangle type stored by the editor, the ordered
//! set persisted to disk, and the per-gesture drag state machine.

use serde::{Deserialize, Serialize};

/// A rectangle as drawn: two corner points in media pixel coordinates.
///
/// Stored verbatim. `x2 < x1` is legal and means the drag ran right-to-left;
/// no normalization or validity check is applied on the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Roi {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Roi {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Corner coordinates with min/max ordering applied, for drawing.
    pub fn ordered(&self) -> (f32, f32, f32, f32) {
        (
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }
}

impl From<[f32; 4]> for Roi {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Roi> for [f32; 4] {
    fn from(roi: Roi) -> Self {
        [roi.x1, roi.y1, roi.x2, roi.y2]
    }
}

/// Ordered set of committed rectangles.
///
/// Serializes directly to the on-disk format: one object with a single
/// `rois` key mapping to an array of 4-element arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoiSet {
    pub rois: Vec<Roi>,
}

impl RoiSet {
    pub fn push(&mut self, roi: Roi) {
        self.rois.push(roi);
    }

    pub fn clear(&mut self) {
        self.rois.clear();
    }

    pub fn len(&self) -> usize {
        self.rois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rois.is_empty()
    }
}

/// Mouse-drag gesture state: Idle until a press, Dragging until release.
///
/// At most one transient rectangle exists at a time; release yields the
/// committed rectangle and returns the gesture to Idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragGesture {
    start: Option<(f32, f32)>,
    current: Option<(f32, f32)>,
}

impl DragGesture {
    /// Record the start point and enter the Dragging state.
    pub fn press(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
        self.current = None;
    }

    /// Record the current point. Ignored when no press preceded it.
    pub fn drag(&mut self, x: f32, y: f32) {
        if self.start.is_some() {
            self.current = Some((x, y));
        }
    }

    /// Finish the gesture, yielding the committed rectangle.
    ///
    /// A release with no preceding press yields nothing. A release without
    /// any motion yields a degenerate rectangle, stored as drawn.
    pub fn release(&mut self, x: f32, y: f32) -> Option<Roi> {
        let (sx, sy) = self.start.take()?;
        self.current = None;
        Some(Roi::new(sx, sy, x, y))
    }

    /// The in-progress outline, present only mid-drag.
    pub fn transient(&self) -> Option<Roi> {
        let (sx, sy) = self.start?;
        let (cx, cy) = self.current?;
        Some(Roi::new(sx, sy, cx, cy))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roi_set_serializes_to_rois_key_with_tuples() {
        let set = RoiSet {
            rois: vec![Roi::new(1.0, 2.0, 3.0, 4.0), Roi::new(50.0, 60.0, 10.0, 20.0)],
        };

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "rois": [[1.0, 2.0, 3.0, 4.0], [50.0, 60.0, 10.0, 20.0]] })
        );
    }

    #[test]
    fn inverted_rectangle_is_stored_as_drawn() {
        let roi = Roi::new(50.0, 50.0, 10.0, 10.0);
        let back: Roi = serde_json::from_value(serde_json::to_value(roi).unwrap()).unwrap();
        assert_eq!(back, roi);
        assert_eq!(back.ordered(), (10.0, 10.0, 50.0, 50.0));
    }

    #[test]
    fn drag_gesture_press_drag_release_commits_one_rectangle() {
        let mut gesture = DragGesture::default();
        gesture.press(10.0, 10.0);
        gesture.drag(30.0, 20.0);
        gesture.drag(50.0, 50.0);
        assert_eq!(gesture.transient(), Some(Roi::new(10.0, 10.0, 50.0, 50.0)));

        let committed = gesture.release(50.0, 50.0);
        assert_eq!(committed, Some(Roi::new(10.0, 10.0, 50.0, 50.0)));
        assert_eq!(gesture.transient(), None);
    }

    #[test]
    fn release_without_press_yields_nothing() {
        let mut gesture = DragGesture::default();
        assert_eq!(gesture.release(5.0, 5.0), None);
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut gesture = DragGesture::default();
        gesture.drag(5.0, 5.0);
        assert_eq!(gesture.transient(), None);
    }
}
