// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loader errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a point file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The contents are not a valid point file.
    #[error("invalid point file: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// Whether the error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
