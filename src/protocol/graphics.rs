//! # ESC/POS Bit Image Commands
//!
//! This module implements the 8-dot single-density bit image command used to
//! print raster strips.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (columns, one byte each)
//!   │
//!   │   ┌─┐ ← bit 7 (MSB) = top dot of the strip
//!   │   │ │
//!   │   └─┘ ← bit 0 (LSB) = bottom dot of the strip
//!   ▼
//!   Y (paper feed direction, 8 dots per strip)
//! ```
//!
//! ## Bit Packing
//!
//! Unlike row-oriented raster formats, every data byte is one **vertical**
//! column of 8 dots:
//!
//! ```text
//! Byte 0x80 = 10000000 = only the top dot
//! Byte 0x01 = 00000001 = only the bottom dot
//! Byte 0xFF = 11111111 = full 8-dot column
//! ```

use super::commands::{ESC, u16_le};

/// Bit image mode `m = 0`: 8-dot single density.
pub const MODE_8_DOT_SINGLE: u8 = 0x00;

/// Height in dots of one bit image strip.
pub const STRIP_HEIGHT: usize = 8;

/// # Bit Image Header (ESC * m nL nH)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A m nL nH d1...dk |
/// | Decimal | 27 42 m nL nH d1...dk |
///
/// ## Parameters
///
/// - `m`: Always 0 here (8-dot single density)
/// - `nL, nH`: Number of columns, little-endian (`nL + nH × 256`)
/// - `d1...dk`: One byte per column, k = nL + nH × 256
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::graphics;
///
/// assert_eq!(graphics::bit_image_header(512), [0x1B, 0x2A, 0x00, 0x00, 0x02]);
/// ```
#[inline]
pub fn bit_image_header(columns: u16) -> [u8; 5] {
    let [lo, hi] = u16_le(columns);
    [ESC, b'*', MODE_8_DOT_SINGLE, lo, hi]
}

/// # Bit Image Strip (header + column data)
///
/// Frames one 8-dot strip with its header.
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::graphics;
///
/// let cmd = graphics::bit_image(&[0xFF, 0x00, 0x81]);
/// assert_eq!(cmd, vec![0x1B, 0x2A, 0x00, 3, 0, 0xFF, 0x00, 0x81]);
/// ```
pub fn bit_image(columns: &[u8]) -> Vec<u8> {
    debug_assert!(
        columns.len() <= u16::MAX as usize,
        "Bit image strip is limited to 65535 columns, got {}",
        columns.len()
    );

    let mut cmd = Vec::with_capacity(5 + columns.len());
    cmd.extend(bit_image_header(columns.len() as u16));
    cmd.extend_from_slice(columns);
    cmd
}
