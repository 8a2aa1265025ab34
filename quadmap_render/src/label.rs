// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting label text into a box by word wrapping and shrinking.

use kurbo::Rect;

use crate::types::LabelStyle;

/// A label laid out inside its box.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedLabel {
    /// Box the label was fitted into (already inset by padding).
    pub bounds: Rect,
    /// Chosen font size.
    pub size: f64,
    /// Wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// Whether text was cut because nothing fit at the minimum size.
    pub truncated: bool,
}

/// Wrap and size `text` to fit inside `bounds`.
///
/// Sizes are tried from `max_size` down to `min_size` in `step` decrements and
/// the first size whose wrapped block fits is kept. When even the minimum
/// size overflows, the block is cut to the lines that fit and the last one
/// ends with an ellipsis.
///
/// Returns `None` for blank text or when not a single line fits.
pub fn fit_label(text: &str, bounds: Rect, style: &LabelStyle) -> Option<FittedLabel> {
    if text.trim().is_empty() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return None;
    }

    let min = style.min_size.max(f64::MIN_POSITIVE);
    let max = style.max_size.max(min);
    let mut size = max;
    loop {
        if let Some(lines) = wrap_at(text, bounds, size, style)
            && lines.len() as f64 * size * style.line_height <= bounds.height()
        {
            return Some(FittedLabel {
                bounds,
                size,
                lines,
                truncated: false,
            });
        }
        if size <= min || style.step <= 0.0 {
            break;
        }
        size = (size - style.step).max(min);
    }

    truncate_at(text, bounds, min, style)
}

fn wrap_at(text: &str, bounds: Rect, size: f64, style: &LabelStyle) -> Option<Vec<String>> {
    let columns = whole(bounds.width() / (size * style.advance));
    (columns > 0).then(|| wrap(text, columns))
}

fn truncate_at(text: &str, bounds: Rect, size: f64, style: &LabelStyle) -> Option<FittedLabel> {
    let rows = whole(bounds.height() / (size * style.line_height));
    let columns = whole(bounds.width() / (size * style.advance));
    if rows == 0 || columns == 0 {
        return None;
    }
    let mut lines = wrap(text, columns);
    let truncated = lines.len() > rows;
    if truncated {
        lines.truncate(rows);
        if let Some(last) = lines.last_mut() {
            let keep = last.chars().count().min(columns - 1);
            *last = last.chars().take(keep).chain(['\u{2026}']).collect();
        }
    }
    Some(FittedLabel {
        bounds,
        size,
        lines,
        truncated,
    })
}

/// Greedy word wrap to at most `columns` characters per line.
///
/// Words longer than a line are split across lines.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    debug_assert!(columns > 0, "wrap needs at least one column");
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        if line_len > 0 && line_len + 1 + chars.len() > columns {
            lines.push(core::mem::take(&mut line));
            line_len = 0;
        }
        while line_len == 0 && chars.len() > columns {
            let rest = chars.split_off(columns);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(&chars);
        line_len += chars.len();
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Non-negative whole part of `v`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Column and row counts are small and floored on purpose."
)]
fn whole(v: f64) -> usize {
    if v.is_finite() && v >= 1.0 {
        v.floor() as usize
    } else {
        0
    }
}
