// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for both tools.

pub mod roi;
pub mod session;
