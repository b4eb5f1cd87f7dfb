// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! UI components shared by the two applications.

pub mod canvas;
pub mod toolbar;
