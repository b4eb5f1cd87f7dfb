// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Frame augmenter: polygon mask, fixed clip, and rotation on video frames.

use anyhow::Result;
use roi_tools::augmenter::AugmenterApp;

fn main() -> Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([680.0, 580.0])
            .with_title("Video Augmentation"),
        ..Default::default()
    };

    eframe::run_native(
        "Video Augmentation",
        options,
        Box::new(|_cc| Ok(Box::new(AugmenterApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
