// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! ROI editor: draw, persist, and overlay rectangular regions of interest.

use anyhow::Result;
use roi_tools::editor::RoiEditorApp;

fn main() -> Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("ROI Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "ROI Editor",
        options,
        Box::new(|_cc| Ok(Box::new(RoiEditorApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
