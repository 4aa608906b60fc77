//! # Print Canvas Geometry
//!
//! Scales a source image to the requested print width and places it on a
//! white canvas that is exactly `max_width` dots wide and a whole number of
//! 8-dot strips tall.
//!
//! ```text
//! ├──────────────── max_width ─────────────────┤
//! ┌────────────────────────────────────────────┐ ┐
//! │               (white padding)              │ │
//! │        ┌──────────────────────────┐        │ │
//! │ white  │   image scaled by ratio  │ white  │ │ height rounded up
//! │        └──────────────────────────┘        │ │ to a multiple of 8
//! │               (white padding)              │ │
//! └────────────────────────────────────────────┘ ┘
//! ```
//!
//! Scaling never enlarges the image. Sampling is done directly in dot
//! coordinates, so no intermediate drawing surface is allocated.

use super::PixelSource;
use crate::protocol::graphics::STRIP_HEIGHT;

/// White background colour for everything outside the drawn image.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Resampling strategy used when the image is scaled down.
///
/// `Nearest` keeps hard edges, which suits logos, text and line art: a thin
/// black stroke survives a downscale. `Area` is closer to what a smoothing
/// 2D canvas does and suits photographs, but fine detail averages towards
/// mid grey and may drop out at the threshold. With no downscale both give
/// the same dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Each dot takes the source pixel under its centre.
    #[default]
    Nearest,
    /// Each dot averages all source pixels it covers (box filter), blending
    /// partially covered edge dots with the white background.
    Area,
}

/// Placement of a scaled image on the print canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Canvas width in dots (always the printer's max width)
    pub width: usize,
    /// Canvas height in dots (multiple of 8)
    pub height: usize,
    /// Scale factor applied to the source image (`<= 1.0`)
    pub ratio: f64,
    /// Left edge of the drawn image, in dots
    pub left: f64,
    /// Top edge of the drawn image, in dots
    pub top: f64,
    /// Drawn image width, in dots
    pub drawn_width: f64,
    /// Drawn image height, in dots
    pub drawn_height: f64,
    src_width: u32,
    src_height: u32,
}

impl Canvas {
    /// Compute the canvas for a `src_width` × `src_height` image.
    ///
    /// `target_width` is clamped to `max_width`, and both are clamped to at
    /// least one dot. The source dimensions must be non-zero.
    pub fn fit(src_width: u32, src_height: u32, target_width: u16, max_width: u16) -> Self {
        let max_width = max_width.max(1);
        let effective = target_width.max(1).min(max_width);

        let ratio = if (effective as u32) < src_width {
            effective as f64 / src_width as f64
        } else {
            1.0
        };

        let drawn_width = src_width as f64 * ratio;
        let drawn_height = src_height as f64 * ratio;

        let strip = STRIP_HEIGHT as f64;
        let height = ((drawn_height / strip).ceil() * strip) as usize;
        let width = max_width as usize;

        Self {
            width,
            height,
            ratio,
            left: (width as f64 - drawn_width) / 2.0,
            top: (height as f64 - drawn_height) / 2.0,
            drawn_width,
            drawn_height,
            src_width,
            src_height,
        }
    }

    /// Number of 8-dot strips in the canvas.
    pub fn strips(&self) -> usize {
        self.height / STRIP_HEIGHT
    }

    /// Sample the colour of canvas dot `(x, y)` with nearest-neighbour lookup.
    pub fn sample_nearest<P: PixelSource + ?Sized>(
        &self,
        image: &P,
        x: usize,
        y: usize,
    ) -> [u8; 3] {
        let cx = x as f64 + 0.5 - self.left;
        let cy = y as f64 + 0.5 - self.top;

        if cx < 0.0 || cy < 0.0 || cx >= self.drawn_width || cy >= self.drawn_height {
            return BACKGROUND;
        }

        let sx = ((cx / self.ratio) as u32).min(self.src_width - 1);
        let sy = ((cy / self.ratio) as u32).min(self.src_height - 1);
        image.rgb(sx, sy)
    }

    /// Precompute the source spans covered by every canvas column and row,
    /// for use with [`Canvas::sample_area`].
    pub fn area_spans(&self) -> AreaSpans {
        AreaSpans {
            columns: (0..self.width)
                .map(|x| spans(x as f64 - self.left, self.ratio, self.src_width))
                .collect(),
            rows: (0..self.height)
                .map(|y| spans(y as f64 - self.top, self.ratio, self.src_height))
                .collect(),
        }
    }

    /// Sample canvas dot `(x, y)` by averaging the source pixels it covers.
    ///
    /// Any part of the dot outside the drawn image counts as white.
    pub fn sample_area<P: PixelSource + ?Sized>(
        &self,
        image: &P,
        spans: &AreaSpans,
        x: usize,
        y: usize,
    ) -> [u8; 3] {
        let cols = &spans.columns[x];
        let rows = &spans.rows[y];
        if cols.is_empty() || rows.is_empty() {
            return BACKGROUND;
        }

        let mut acc = [0.0f64; 3];
        let mut covered = 0.0;
        for &(sy, wy) in rows {
            for &(sx, wx) in cols {
                let w = wx * wy;
                let px = image.rgb(sx, sy);
                for c in 0..3 {
                    acc[c] += px[c] as f64 * w;
                }
                covered += w;
            }
        }

        let background = (1.0 - covered).max(0.0);
        let mut out = [0u8; 3];
        for c in 0..3 {
            let v = acc[c] + BACKGROUND[c] as f64 * background;
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

/// Source coverage of each canvas column/row: `(source index, weight)` pairs
/// whose weights sum to the covered fraction of the dot.
#[derive(Debug, Clone)]
pub struct AreaSpans {
    columns: Vec<Vec<(u32, f64)>>,
    rows: Vec<Vec<(u32, f64)>>,
}

/// Source pixels overlapped by the canvas interval `[start, start + 1)`,
/// where `start` is already relative to the drawn image's origin.
fn spans(start: f64, ratio: f64, src_len: u32) -> Vec<(u32, f64)> {
    let lo = (start / ratio).max(0.0);
    let hi = ((start + 1.0) / ratio).min(src_len as f64);
    if hi <= lo {
        return Vec::new();
    }

    // Weights are expressed as a fraction of one canvas dot.
    let mut out = Vec::new();
    let mut s = lo.floor() as u32;
    while (s as f64) < hi && s < src_len {
        let overlap = (hi.min(s as f64 + 1.0) - lo.max(s as f64)).max(0.0);
        if overlap > 0.0 {
            out.push((s, overlap * ratio));
        }
        s += 1;
    }
    out
}
