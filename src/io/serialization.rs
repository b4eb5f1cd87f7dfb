// Copyright (c) 2026, ROI Tools contributors
// SPDX-License-Identifier: BSD-3-Clause

//! ROI set persistence.
//!
//! The on-disk format is a single JSON object with one `rois` key mapping
//! to an array of `[x1, y1, x2, y2]` arrays in media pixel coordinates.
//! No versioning, no schema validation beyond key presence.

use crate::models::roi::RoiSet;
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The two error kinds the load path distinguishes. Everything else in the
/// editor surfaces as a plain logged error.
#[derive(Debug, Error)]
pub enum RoiLoadError {
    #[error("ROI settings file not found: {0}")]
    NotFound(PathBuf),
    #[error("invalid JSON format in the ROI settings file: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the set as `{"rois": [...]}`. An empty set writes nothing.
///
/// Returns whether a file was written.
pub fn save_rois(set: &RoiSet, path: &Path) -> Result<bool> {
    if set.is_empty() {
        log::info!("No ROIs to save.");
        return Ok(false);
    }

    let json = serde_json::to_string_pretty(set)?;
    std::fs::write(path, json)?;
    log::info!("ROIs saved successfully to {}", path.display());
    Ok(true)
}

/// Read a set back from disk.
///
/// Callers keep their prior set on any error; no partial load occurs.
pub fn load_rois(path: &Path) -> Result<RoiSet, RoiLoadError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RoiLoadError::NotFound(path.to_path_buf())
        } else {
            RoiLoadError::Io(e)
        }
    })?;
    let set = serde_json::from_str(&json)?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roi::Roi;

    fn sample_set() -> RoiSet {
        RoiSet {
            rois: vec![
                Roi::new(10.0, 10.0, 50.0, 50.0),
                Roi::new(120.0, 40.0, 80.0, 15.0), // inverted, stored as drawn
                Roi::new(0.0, 0.0, 0.0, 0.0),
            ],
        }
    }

    #[test]
    fn save_then_load_round_trips_ordered_tuples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rois.json");

        let set = sample_set();
        assert!(save_rois(&set, &path).unwrap());

        let loaded = load_rois(&path).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn empty_set_save_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rois.json");

        let written = save_rois(&RoiSet::default(), &path).unwrap();
        assert!(!written);
        assert!(!path.exists());
    }

    #[test]
    fn load_missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        let err = load_rois(&path).unwrap_err();
        assert!(matches!(err, RoiLoadError::NotFound(_)));
    }

    #[test]
    fn load_invalid_json_reports_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rois.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_rois(&path).unwrap_err();
        assert!(matches!(err, RoiLoadError::Decode(_)));
    }

    #[test]
    fn file_contains_single_rois_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rois.json");
        save_rois(&sample_set(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        let rois = object["rois"].as_array().unwrap();
        assert_eq!(rois.len(), 3);
        assert!(rois.iter().all(|r| r.as_array().unwrap().len() == 4));
    }
}
