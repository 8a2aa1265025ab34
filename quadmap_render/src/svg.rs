// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a [`Scene`].

use core::fmt::{self, Write};

use kurbo::Size;

use crate::scene::{Primitive, Scene};
use crate::types::{Layers, Style};

/// Write `scene` as a standalone SVG document of the given canvas size.
///
/// Status primitives are written only when `layers` includes
/// [`Layers::STATUS`]; every other primitive is written as is.
pub fn write_svg<W: Write>(
    scene: &Scene,
    size: Size,
    style: &Style,
    layers: Layers,
    out: &mut W,
) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height,
    )?;
    writeln!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        size.width, size.height, style.background
    )?;

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Boundary(rect) => writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                style.boundary,
                style.boundary_width
            )?,
            Primitive::Marker { center, radius } => writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                center.x, center.y, radius, style.marker
            )?,
            Primitive::Segment(segment) => writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                segment.line.p0.x,
                segment.line.p0.y,
                segment.line.p1.x,
                segment.line.p1.y,
                style.path,
                segment.weight
            )?,
            Primitive::Label(label) => {
                let step = label.size * style.label.line_height;
                write!(
                    out,
                    r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">"#,
                    label.bounds.x0,
                    label.bounds.y0 + label.size,
                    Escaped(&style.label.font_family),
                    label.size,
                    style.label.color
                )?;
                for (i, line) in label.lines.iter().enumerate() {
                    let dy = if i == 0 { 0.0 } else { step };
                    write!(
                        out,
                        r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                        label.bounds.x0,
                        dy,
                        Escaped(line)
                    )?;
                }
                writeln!(out, "</text>")?;
            }
            Primitive::Status { origin, text, size } => {
                if layers.contains(Layers::STATUS) {
                    writeln!(
                        out,
                        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                        origin.x,
                        origin.y,
                        Escaped(&style.label.font_family),
                        size,
                        style.status,
                        Escaped(text)
                    )?;
                }
            }
        }
    }

    writeln!(out, "</svg>")
}

/// [`write_svg`] into a new string.
pub fn to_svg_string(scene: &Scene, size: Size, style: &Style, layers: Layers) -> String {
    let mut out = String::new();
    // Writing to a String does not fail.
    let _ = write_svg(scene, size, style, layers, &mut out);
    out
}

/// XML text and attribute escaping.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
