// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! ROI Tools - desktop utilities for regions of interest on media.
//!
//! Two independent applications share this library:
//!
//! - `roi-editor` draws rectangular ROIs over images, video, or a camera
//!   feed and persists them as a flat JSON file.
//! - `frame-augmenter` masks video frames to a clicked polygon, clips them
//!   to a fixed rectangle, and rotates them, all per frame during playback.

pub mod augmenter;
pub mod editor;
pub mod io;
pub mod models;
pub mod overlay;
pub mod pipeline;
pub mod ui;
pub mod util;
