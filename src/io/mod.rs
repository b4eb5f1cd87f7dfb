// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for media and ROI files.

pub mod media;
pub mod serialization;
