// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `quadmap`: render a `points.json` file as a quadrant map SVG.
//!
//! Usage: `quadmap [CONFIG]`, where `CONFIG` defaults to `quadmap.toml` and is
//! created with default settings when missing.

use std::path::PathBuf;

use anyhow::Context;
use kurbo::Size;
use quadmap_points::{PointFile, build_layout};
use quadmap_render::{Scene, to_svg_string};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Quadmap v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("quadmap.toml"), PathBuf::from);
    let config = config::Config::load(&config_path)?;
    info!("Loaded configuration from {}", config_path.display());
    info!("  Input: {}", config.input.display());
    info!("  Canvas: {}x{}", config.canvas.width, config.canvas.height);
    info!("  Capacity: {}", config.tree.capacity);

    let (file, status) = match PointFile::load(&config.input) {
        Ok(file) if file.points.is_empty() => {
            warn!("{} holds no points", config.input.display());
            (file, Some(format!("No points in {}", config.input.display())))
        }
        Ok(file) => (file, None),
        Err(err) if err.is_not_found() => {
            warn!("{err}");
            let hint = format!(
                "{} missing; run the precompute step",
                config.input.display()
            );
            (PointFile::default(), Some(hint))
        }
        Err(err) => return Err(err).context("loading points"),
    };

    let canvas = config.canvas.canvas();
    let layout = build_layout(&file, canvas, config.tree.tree_config());
    if !layout.is_complete() {
        warn!(
            "{} of {} points fell outside the canvas",
            layout.rejected.len(),
            file.points.len()
        );
    }

    let style = config.render.style();
    let layers = config.render.layers();
    let mut scene = Scene::build(&layout.tree, &layout.path, &style, layers);
    if scene.missed_anchors > 0 {
        warn!("{} path points could not be anchored", scene.missed_anchors);
    }
    if scene.hidden_labels > 0 {
        info!("{} labels had no room", scene.hidden_labels);
    }
    if let Some(text) = status {
        scene = scene.with_status(text, &style);
    }

    let svg = to_svg_string(
        &scene,
        Size::new(canvas.width, canvas.height),
        &style,
        layers,
    );
    if let Some(parent) = config.output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&config.output, svg)
        .with_context(|| format!("writing {}", config.output.display()))?;

    info!(
        points = layout.tree.len(),
        leaves = layout.tree.root().leaf_count(),
        depth = layout.tree.root().deepest(),
        "Wrote {}",
        config.output.display()
    );
    Ok(())
}
