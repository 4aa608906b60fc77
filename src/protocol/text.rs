//! # ESC/POS Text Styling Commands
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Justify | ESC a n | Left / center / right |
//! | Bold | ESC E n | **Emphasized** text |
//! | Size | ESC ! n | Double height / width via print mode bits |
//!
//! ## Text Justification
//!
//! ```text
//! Left (default)    |LEFT TEXT
//! Center            |  CENTER TEXT
//! Right             |      RIGHT TEXT
//! ```

use serde::{Deserialize, Serialize};

use super::commands::ESC;

// ============================================================================
// JUSTIFICATION
// ============================================================================

/// Horizontal justification, used both for the printer's line justification
/// and for cell padding in table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left (default)
/// - `n = 1`: Center
/// - `n = 2`: Right
///
/// Takes effect at the start of the next line.
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::text::{justify, Justification};
///
/// assert_eq!(justify(Justification::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn justify(justification: Justification) -> Vec<u8> {
    vec![ESC, b'a', justification as u8]
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
/// | Decimal | 27 69 n |
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::text::bold;
///
/// let mut data = Vec::new();
/// data.extend(bold(true));
/// data.extend(b"TOTAL");
/// data.extend(bold(false));
/// assert_eq!(&data[..3], &[0x1B, 0x45, 0x01]);
/// ```
#[inline]
pub fn bold(enabled: bool) -> Vec<u8> {
    vec![ESC, b'E', enabled as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character size presets selectable through the print mode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    #[default]
    Normal,
    DoubleHeight,
    DoubleWidth,
    /// Double width and double height
    Quad,
}

impl TextSize {
    /// The print mode bits for this size (bit 4 = double height,
    /// bit 5 = double width).
    pub const fn mode_bits(self) -> u8 {
        match self {
            TextSize::Normal => 0x00,
            TextSize::DoubleHeight => 0x10,
            TextSize::DoubleWidth => 0x20,
            TextSize::Quad => 0x30,
        }
    }
}

/// # Select Print Mode (ESC ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
///
/// ## Size Table
///
/// | Size | n |
/// |------|---|
/// | Normal | 0x00 |
/// | Double height | 0x10 |
/// | Double width | 0x20 |
/// | Quad (2×2) | 0x30 |
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::text::{size, TextSize};
///
/// assert_eq!(size(TextSize::Quad), vec![0x1B, 0x21, 0x30]);
/// ```
pub fn size(size: TextSize) -> Vec<u8> {
    vec![ESC, b'!', size.mode_bits()]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_bytes() {
        assert_eq!(justify(Justification::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(justify(Justification::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(justify(Justification::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_bold_bytes() {
        assert_eq!(bold(true), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold(false), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_size_bytes() {
        assert_eq!(size(TextSize::Normal), vec![0x1B, 0x21, 0x00]);
        assert_eq!(size(TextSize::DoubleHeight), vec![0x1B, 0x21, 0x10]);
        assert_eq!(size(TextSize::DoubleWidth), vec![0x1B, 0x21, 0x20]);
        assert_eq!(size(TextSize::Quad), vec![0x1B, 0x21, 0x30]);
    }

    #[test]
    fn test_justification_serde_names() {
        let parsed: Vec<Justification> =
            serde_json::from_str(r#"["left", "center", "right"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Justification::Left,
                Justification::Center,
                Justification::Right
            ]
        );
    }

    #[test]
    fn test_text_size_default_is_normal() {
        assert_eq!(TextSize::default(), TextSize::Normal);
    }
}
