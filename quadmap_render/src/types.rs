// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for rendering: layer flags, colors, and style.

use core::fmt;

bitflags::bitflags! {
    /// Layers included when building a [`Scene`](crate::Scene).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Layers: u8 {
        /// Outline of every node region.
        const BOUNDARIES = 0b0000_0001;
        /// A dot at every stored point.
        const POINTS     = 0b0000_0010;
        /// Point labels fitted into their leaf boxes.
        const LABELS     = 0b0000_0100;
        /// Weighted polyline through the leaf centers in path order.
        const PATH       = 0b0000_1000;
        /// Status text in the top-left corner, when one is set.
        const STATUS     = 0b0001_0000;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::all()
    }
}

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque gray.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(mut self, a: u8) -> Self {
        self.a = a;
        self
    }
}

/// Formats as a CSS color: `rgb(r,g,b)` when opaque, `rgba(r,g,b,a)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            write!(f, "rgba({},{},{},{alpha:.3})", self.r, self.g, self.b)
        }
    }
}

/// How labels are sized and wrapped.
///
/// There is no font loading: glyph extents are estimated from the font size
/// with `advance` (width per character) and `line_height` (baseline to
/// baseline), both as multiples of the size.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Text color.
    pub color: Color,
    /// CSS font family written to the output.
    pub font_family: String,
    /// Largest size tried.
    pub max_size: f64,
    /// Smallest size tried; labels that still do not fit are truncated.
    pub min_size: f64,
    /// Decrement between tried sizes.
    pub step: f64,
    /// Gap kept between a label and its box edges.
    pub padding: f64,
    /// Estimated character width per unit of font size.
    pub advance: f64,
    /// Line spacing per unit of font size.
    pub line_height: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Color::gray(220),
            font_family: String::from("sans-serif"),
            max_size: 32.0,
            min_size: 6.0,
            step: 1.0,
            padding: 4.0,
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

/// Colors and stroke weights for every layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Canvas fill.
    pub background: Color,
    /// Region outline color.
    pub boundary: Color,
    /// Region outline width.
    pub boundary_width: f64,
    /// Point dot color.
    pub marker: Color,
    /// Point dot radius.
    pub marker_radius: f64,
    /// Path color.
    pub path: Color,
    /// Width of the first path segment.
    pub path_max_width: f64,
    /// Width of the last path segment.
    pub path_min_width: f64,
    /// Label sizing.
    pub label: LabelStyle,
    /// Status text color.
    pub status: Color,
    /// Status text size.
    pub status_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::gray(0),
            boundary: Color::gray(80),
            boundary_width: 1.0,
            marker: Color::gray(255),
            marker_radius: 2.0,
            path: Color::rgb(255, 140, 60).with_alpha(200),
            path_max_width: 6.0,
            path_min_width: 0.5,
            label: LabelStyle::default(),
            status: Color::gray(255),
            status_size: 14.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_format_as_css() {
        assert_eq!(Color::gray(80).to_string(), "rgb(80,80,80)");
        assert_eq!(
            Color::rgb(255, 0, 0).with_alpha(51).to_string(),
            "rgba(255,0,0,0.200)"
        );
    }

    #[test]
    fn all_layers_by_default() {
        let layers = Layers::default();
        assert!(layers.contains(Layers::BOUNDARIES | Layers::LABELS | Layers::PATH));
        assert!(!(layers - Layers::PATH).contains(Layers::PATH));
    }
}
