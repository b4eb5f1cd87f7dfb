// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Media loading and frame sources.
//!
//! Still images load through the `image` crate. Playback goes through the
//! [`FrameSource`] trait: the default build reads numbered image-sequence
//! directories, and the `video-opencv` feature adds real video files and
//! camera capture on top of OpenCV.

use anyhow::{ensure, Context, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Extensions accepted for still images and sequence frames.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Load a still image as RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// A pull-based stream of frames. `None` means end of stream; a failed
/// read ends the stream the same way.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<RgbaImage>;
}

/// Plays a directory of image files in sorted order, one file per frame.
pub struct ImageSequenceSource {
    frames: std::vec::IntoIter<PathBuf>,
}

impl ImageSequenceSource {
    pub fn open(dir: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("failed to read frame directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            })
            .collect();

        ensure!(!paths.is_empty(), "no image frames found in {}", dir.display());
        paths.sort();

        log::info!("Opened frame sequence {} ({} frames)", dir.display(), paths.len());
        Ok(Self {
            frames: paths.into_iter(),
        })
    }
}

impl FrameSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Option<RgbaImage> {
        let path = self.frames.next()?;
        match image::open(&path) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                log::warn!("Failed to read frame {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(feature = "video-opencv")]
pub mod capture {
    //! OpenCV-backed video file and camera sources.

    use super::FrameSource;
    use anyhow::{ensure, Context, Result};
    use image::RgbaImage;
    use opencv::core::Mat;
    use opencv::prelude::*;
    use opencv::videoio::{self, VideoCapture};
    use std::path::Path;

    pub struct CaptureSource {
        cap: VideoCapture,
    }

    impl CaptureSource {
        pub fn from_file(path: &Path) -> Result<Self> {
            let cap = VideoCapture::from_file(path.to_string_lossy().as_ref(), videoio::CAP_ANY)?;
            ensure!(cap.is_opened()?, "could not open video {}", path.display());
            log::info!("Opened video {}", path.display());
            Ok(Self { cap })
        }

        pub fn from_camera(index: i32) -> Result<Self> {
            let cap = VideoCapture::new(index, videoio::CAP_ANY)?;
            ensure!(cap.is_opened()?, "could not open camera {index}");
            log::info!("Opened camera {index}");
            Ok(Self { cap })
        }
    }

    impl FrameSource for CaptureSource {
        fn next_frame(&mut self) -> Option<RgbaImage> {
            let mut mat = Mat::default();
            match self.cap.read(&mut mat) {
                Ok(true) => mat_to_rgba(&mat)
                    .map_err(|e| log::warn!("Failed to convert frame: {e}"))
                    .ok(),
                Ok(false) => None,
                Err(e) => {
                    log::warn!("Frame read failed: {e}");
                    None
                }
            }
        }
    }

    fn mat_to_rgba(mat: &Mat) -> Result<RgbaImage> {
        let mut rgba = Mat::default();
        opencv::imgproc::cvt_color(mat, &mut rgba, opencv::imgproc::COLOR_BGR2RGBA, 0)?;
        let width = rgba.cols() as u32;
        let height = rgba.rows() as u32;
        let data = rgba.data_bytes()?.to_vec();
        RgbaImage::from_raw(width, height, data).context("frame buffer size mismatch")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn sequence_plays_frames_in_sorted_order_then_ends() {
        let dir = tempfile::tempdir().unwrap();
        for (name, shade) in [("b.png", 20u8), ("a.png", 10u8), ("c.png", 30u8)] {
            let frame = RgbaImage::from_pixel(4, 4, Rgba([shade, 0, 0, 255]));
            frame.save(dir.path().join(name)).unwrap();
        }

        let mut source = ImageSequenceSource::open(dir.path()).unwrap();
        let shades: Vec<u8> = std::iter::from_fn(|| source.next_frame())
            .map(|f| f.get_pixel(0, 0)[0])
            .collect();
        assert_eq!(shades, vec![10, 20, 30]);
        assert!(source.next_frame().is_none());
    }

    #[test]
    fn sequence_open_fails_on_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ImageSequenceSource::open(dir.path()).is_err());
    }

    #[test]
    fn non_image_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a frame").unwrap();
        let frame = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        frame.save(dir.path().join("frame.png")).unwrap();

        let mut source = ImageSequenceSource::open(dir.path()).unwrap();
        assert!(source.next_frame().is_some());
        assert!(source.next_frame().is_none());
    }
}
