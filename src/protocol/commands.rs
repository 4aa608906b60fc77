//! # ESC/POS Protocol Commands
//!
//! This module implements the basic ESC/POS commands used by receipt-style
//! thermal printers (Epson TM series and the many compatible clones).
//!
//! ## Protocol Overview
//!
//! ESC/POS is a one-way, fire-and-forget byte protocol. Commands are byte
//! sequences introduced by a control character; everything else is printed
//! as text.
//!
//! - **Single byte**: `LF`
//! - **Two bytes**: `ESC @`
//! - **With parameters**: `GS V m`, `ESC J n`, `ESC * m nL nH d1...dk`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x0240 (576) is sent as bytes `[0x40, 0x02]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for cutter control and other extended commands.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets the printer to its power-on mode.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Bold and character size return to normal
/// - Justification returns to left
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// LINE FEED
// ============================================================================

/// # Print and Feed Lines (LF × n)
///
/// Prints the line buffer and advances the paper `count` lines. A count of
/// zero produces no bytes at all.
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::commands;
///
/// assert_eq!(commands::line_feed(3), vec![0x0A, 0x0A, 0x0A]);
/// assert!(commands::line_feed(0).is_empty());
/// ```
#[inline]
pub fn line_feed(count: usize) -> Vec<u8> {
    vec![LF; count]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Full Cut (GS V 0)
///
/// Cuts the paper completely at the current position.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 0   |
/// | Hex     | 1D 56 00 |
/// | Decimal | 29 86 0  |
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![GS, b'V', 0]
}

/// # Partial Cut (GS V 1)
///
/// Cuts the paper leaving a small uncut hinge, so the receipt stays attached
/// to the roll until torn off.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 1   |
/// | Hex     | 1D 56 01 |
/// | Decimal | 29 86 1  |
///
/// The cutter sits a few lines above the print head, so callers usually feed
/// a handful of lines first (see `PrinterSession::partial_cut`).
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![GS, b'V', 1]
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Print and Feed Paper (ESC J n)
///
/// Prints the buffer and feeds the paper `n` motion units (usually dots).
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC J n   |
/// | Hex     | 1B 4A n   |
/// | Decimal | 27 74 n   |
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::commands;
///
/// assert_eq!(commands::feed_dots(24), vec![0x1B, 0x4A, 24]);
/// ```
#[inline]
pub fn feed_dots(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]); // 576 = 0x0240
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
