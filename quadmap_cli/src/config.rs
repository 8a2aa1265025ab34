// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `quadmap.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use quadmap_points::Canvas;
use quadmap_render::{Layers, Style};
use quadmap_tree::{DEFAULT_MAX_DEPTH, TreeConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct Config {
    /// Point file to read.
    #[serde(default = "default_input")]
    pub(crate) input: PathBuf,
    /// SVG file to write.
    #[serde(default = "default_output")]
    pub(crate) output: PathBuf,
    #[serde(default)]
    pub(crate) canvas: CanvasConfig,
    #[serde(default)]
    pub(crate) tree: TreeSection,
    #[serde(default)]
    pub(crate) render: RenderConfig,
}

impl Config {
    /// Load configuration from `path`, writing the defaults there first if it does not exist.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Self = toml::from_str(&contents)
                .with_context(|| format!("parsing {}", path.display()))?;
            config
                .canvas
                .validate()
                .with_context(|| format!("invalid [canvas] in {}", path.display()))?;
            Ok(config)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)
                .with_context(|| format!("writing {}", path.display()))?;
            Ok(default_config)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            canvas: CanvasConfig::default(),
            tree: TreeSection::default(),
            render: RenderConfig::default(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("points.json")
}
fn default_output() -> PathBuf {
    PathBuf::from("quadmap.svg")
}

/// Drawing surface size in pixels.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct CanvasConfig {
    #[serde(default = "default_canvas_size")]
    pub(crate) width: f64,
    #[serde(default = "default_canvas_size")]
    pub(crate) height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

impl CanvasConfig {
    /// Both sides must be finite and positive.
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            anyhow::ensure!(
                value.is_finite() && value > 0.0,
                "canvas {name} must be a positive number, got {value}"
            );
        }
        Ok(())
    }

    pub(crate) fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }
}

fn default_canvas_size() -> f64 {
    800.0
}

/// Subdivision settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct TreeSection {
    /// Points a leaf holds before it splits.
    #[serde(default = "default_capacity")]
    pub(crate) capacity: usize,
    /// Depth at which leaves stop splitting.
    #[serde(default = "default_max_depth")]
    pub(crate) max_depth: usize,
}

impl Default for TreeSection {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_depth: default_max_depth(),
        }
    }
}

impl TreeSection {
    pub(crate) fn tree_config(&self) -> TreeConfig {
        TreeConfig::new(self.capacity).with_max_depth(self.max_depth)
    }
}

fn default_capacity() -> usize {
    1
}
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Layer switches and style numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct RenderConfig {
    #[serde(default = "default_on")]
    pub(crate) boundaries: bool,
    #[serde(default = "default_on")]
    pub(crate) points: bool,
    #[serde(default = "default_on")]
    pub(crate) labels: bool,
    #[serde(default = "default_on")]
    pub(crate) path: bool,
    #[serde(default = "default_on")]
    pub(crate) status: bool,
    #[serde(default = "default_font_family")]
    pub(crate) font_family: String,
    #[serde(default = "default_label_max_size")]
    pub(crate) label_max_size: f64,
    #[serde(default = "default_label_min_size")]
    pub(crate) label_min_size: f64,
    #[serde(default = "default_label_step")]
    pub(crate) label_step: f64,
    #[serde(default = "default_label_padding")]
    pub(crate) label_padding: f64,
    #[serde(default = "default_boundary_width")]
    pub(crate) boundary_width: f64,
    #[serde(default = "default_marker_radius")]
    pub(crate) marker_radius: f64,
    #[serde(default = "default_path_max_width")]
    pub(crate) path_max_width: f64,
    #[serde(default = "default_path_min_width")]
    pub(crate) path_min_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            boundaries: true,
            points: true,
            labels: true,
            path: true,
            status: true,
            font_family: default_font_family(),
            label_max_size: default_label_max_size(),
            label_min_size: default_label_min_size(),
            label_step: default_label_step(),
            label_padding: default_label_padding(),
            boundary_width: default_boundary_width(),
            marker_radius: default_marker_radius(),
            path_max_width: default_path_max_width(),
            path_min_width: default_path_min_width(),
        }
    }
}

impl RenderConfig {
    pub(crate) fn layers(&self) -> Layers {
        let mut layers = Layers::empty();
        layers.set(Layers::BOUNDARIES, self.boundaries);
        layers.set(Layers::POINTS, self.points);
        layers.set(Layers::LABELS, self.labels);
        layers.set(Layers::PATH, self.path);
        layers.set(Layers::STATUS, self.status);
        layers
    }

    pub(crate) fn style(&self) -> Style {
        let mut style = Style {
            boundary_width: self.boundary_width,
            marker_radius: self.marker_radius,
            path_max_width: self.path_max_width,
            path_min_width: self.path_min_width,
            ..Style::default()
        };
        style.label.font_family.clone_from(&self.font_family);
        style.label.max_size = self.label_max_size;
        style.label.min_size = self.label_min_size;
        style.label.step = self.label_step;
        style.label.padding = self.label_padding;
        style
    }
}

fn default_on() -> bool {
    true
}
fn default_font_family() -> String {
    "sans-serif".to_string()
}
fn default_label_max_size() -> f64 {
    32.0
}
fn default_label_min_size() -> f64 {
    6.0
}
fn default_label_step() -> f64 {
    1.0
}
fn default_label_padding() -> f64 {
    4.0
}
fn default_boundary_width() -> f64 {
    1.0
}
fn default_marker_radius() -> f64 {
    2.0
}
fn default_path_max_width() -> f64 {
    6.0
}
fn default_path_min_width() -> f64 {
    0.5
}
