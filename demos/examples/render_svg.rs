// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a point file to SVG.
//!
//! Writes a small `points.json` to the temp directory, loads it back, builds a
//! layout, turns it into a scene, and prints the SVG to stdout.
//!
//! Run:
//! - `cargo run -p quadmap_demos --example render_svg > map.svg`

use kurbo::Size;
use quadmap_points::{Canvas, LoadError, PointFile, PointRecord, build_layout};
use quadmap_render::{Layers, Scene, Style, to_svg_string};
use quadmap_tree::TreeConfig;

fn sample() -> PointFile {
    PointFile {
        points: vec![
            PointRecord::new(0.12, 0.18, "the first line of a small poem").with_index(0),
            PointRecord::new(0.81, 0.22, "drifts across the page").with_index(1),
            PointRecord::new(0.68, 0.34, "folds into a corner").with_index(2),
            PointRecord::new(0.25, 0.77, "and settles").with_index(3),
            PointRecord::new(0.5, 0.5, "where the quadrants meet").with_index(4),
            PointRecord::new(1.0, 1.0, "an unnumbered aside"),
        ],
    }
}

fn write_and_reload() -> Result<PointFile, LoadError> {
    let path = std::env::temp_dir().join("quadmap-demo-points.json");
    let json = sample().to_json_pretty()?;
    std::fs::write(&path, json).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    PointFile::load(&path)
}

fn main() {
    let file = match write_and_reload() {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let canvas = Canvas::new(800.0, 800.0);
    let layout = build_layout(&file, canvas, TreeConfig::new(1));

    let style = Style::default();
    let layers = Layers::all();
    let scene = Scene::build(&layout.tree, &layout.path, &style, layers)
        .with_status(format!("{} points", layout.tree.len()), &style);
    eprintln!(
        "{} primitives, {} leaves, bounds {:?}",
        scene.primitives.len(),
        layout.tree.root().leaf_count(),
        scene.bounds()
    );

    print!(
        "{}",
        to_svg_string(&scene, Size::new(canvas.width, canvas.height), &style, layers)
    );
}
