// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `points.json` document model.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LoadError;

/// A `points.json` document.
///
/// ```json
/// {"points": [{"index": 0, "label": "first line", "x": 0.25, "y": 0.75}]}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PointFile {
    /// Records in file order. A document without a `points` key has none.
    #[serde(default)]
    pub points: Vec<PointRecord>,
}

/// One labeled point with normalized coordinates.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PointRecord {
    /// Horizontal position in `[0, 1]`.
    pub x: f64,
    /// Vertical position in `[0, 1]`, top to bottom.
    pub y: f64,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Position in the connecting path, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl PointRecord {
    /// Create an unindexed record.
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            index: None,
        }
    }

    /// Set the path position.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }
}

impl PointFile {
    /// Parse a document from JSON text.
    pub fn parse(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&contents)?;
        debug!(path = %path.display(), points = file.points.len(), "loaded point file");
        Ok(file)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
