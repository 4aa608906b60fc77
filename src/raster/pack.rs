//! # Monochrome Thresholding and Strip Packing
//!
//! Converts canvas colours to ink/no-ink dots and packs them into 8-dot
//! vertical column bytes, one strip at a time.
//!
//! ## Packing Order
//!
//! Dots are visited row by row, left to right. Each column keeps a running
//! byte that is shifted left for every row of the strip:
//!
//! ```text
//! row 0 ──► bit 7 (MSB)
//! row 1 ──► bit 6
//!  ...
//! row 7 ──► bit 0 (LSB)
//! ```
//!
//! After the 8th row the column bytes form one strip and a fresh strip begins.

use crate::protocol::graphics::STRIP_HEIGHT;

/// Brightness cutoff: a dot whose mean channel value is below this prints.
pub const THRESHOLD: u16 = 128;

/// Decide whether a colour prints as an ink dot.
///
/// Pure black always prints; otherwise a dot prints when its mean brightness
/// `(r + g + b) / 3` is below [`THRESHOLD`].
///
/// ## Example
///
/// ```
/// use escpos_receipt::raster::is_ink;
///
/// assert!(is_ink([0, 0, 0]));
/// assert!(is_ink([127, 127, 128])); // mean 127.33
/// assert!(!is_ink([128, 128, 128]));
/// assert!(!is_ink([255, 255, 255]));
/// ```
#[inline]
pub fn is_ink(rgb: [u8; 3]) -> bool {
    let sum = rgb[0] as u16 + rgb[1] as u16 + rgb[2] as u16;
    // sum / 3 < 128  <=>  sum < 384
    sum == 0 || sum < THRESHOLD * 3
}

/// Pack a `width` × `height` grid of dots into 8-dot strips.
///
/// `dot(x, y)` returns `true` for ink. Every complete band of 8 rows becomes
/// one strip of `width` bytes. A trailing band shorter than 8 rows is still
/// emitted, with its bits in the low positions of each byte.
pub fn pack_strips<F>(width: usize, height: usize, mut dot: F) -> Vec<Vec<u8>>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut strips = Vec::with_capacity(height.div_ceil(STRIP_HEIGHT));
    let mut current = vec![0u8; width];
    let mut rows = 0;

    for y in 0..height {
        for (x, byte) in current.iter_mut().enumerate() {
            *byte = (*byte << 1) | dot(x, y) as u8;
        }
        rows += 1;

        if rows == STRIP_HEIGHT {
            strips.push(std::mem::replace(&mut current, vec![0u8; width]));
            rows = 0;
        }
    }

    if rows > 0 {
        strips.push(current);
    }

    strips
}
