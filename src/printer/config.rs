//! # Printer Profiles
//!
//! Hardware characteristics that the encoders need: how many dots a bit image
//! strip may span and how many characters fit on one text line.
//!
//! ## Built-in Profiles
//!
//! | Paper | Max width (dots) | Font A chars/line |
//! |-------|------------------|-------------------|
//! | 80mm | 576 | 48 |
//! | 58mm | 384 | 32 |
//!
//! ## Usage
//!
//! ```
//! use escpos_receipt::printer::PrinterProfile;
//!
//! let profile = PrinterProfile::PAPER_80MM;
//! println!("{}: {} dots, {} chars per line",
//!          profile.name,
//!          profile.max_width_dots,
//!          profile.chars_per_line);
//! ```
//!
//! Custom profiles load from JSON; omitted fields fall back to the 80mm values.
//!
//! ```
//! use escpos_receipt::printer::PrinterProfile;
//!
//! let json = r#"{ "name": "Kiosk", "max_width_dots": 512 }"#;
//! let profile = PrinterProfile::from_json(json).unwrap();
//! assert_eq!(profile.max_width_dots, 512);
//! assert_eq!(profile.chars_per_line, 48);
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::EscPosError;

/// Lines fed before a partial cut so the last printed line clears the cutter.
pub const DEFAULT_CUT_FEED_LINES: usize = 5;

/// # Printer Profile
///
/// ## Properties
///
/// - **max_width_dots**: Column count of one bit image strip (`ESC *`)
/// - **chars_per_line**: Characters per line in the default font
/// - **cut_feed_lines**: Line feeds sent before a partial cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterProfile {
    /// Profile name, used in log messages
    pub name: Cow<'static, str>,

    /// Maximum bit image width in dots
    pub max_width_dots: u16,

    /// Characters per text line
    pub chars_per_line: usize,

    /// Line feeds before a partial cut
    pub cut_feed_lines: usize,
}

impl PrinterProfile {
    /// # 80mm Receipt Paper
    ///
    /// ```text
    /// ├── 4mm ──┼────── 72mm printable ──────┼── 4mm ──┤
    /// │ margin  │         576 dots           │ margin  │
    /// ```
    pub const PAPER_80MM: Self = Self {
        name: Cow::Borrowed("80mm receipt"),
        max_width_dots: 576,
        chars_per_line: 48,
        cut_feed_lines: DEFAULT_CUT_FEED_LINES,
    };

    /// # 58mm Receipt Paper
    ///
    /// 48mm printable, 384 dots at 203 DPI.
    pub const PAPER_58MM: Self = Self {
        name: Cow::Borrowed("58mm receipt"),
        max_width_dots: 384,
        chars_per_line: 32,
        cut_feed_lines: DEFAULT_CUT_FEED_LINES,
    };

    /// Parse a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, EscPosError> {
        let profile: Self = serde_json::from_str(json)
            .map_err(|e| EscPosError::Config(format!("Invalid printer profile: {}", e)))?;

        if profile.max_width_dots == 0 {
            return Err(EscPosError::Config(
                "max_width_dots must be at least 1".to_string(),
            ));
        }
        if profile.chars_per_line == 0 {
            return Err(EscPosError::Config(
                "chars_per_line must be at least 1".to_string(),
            ));
        }

        Ok(profile)
    }

    /// Look up a built-in profile by short name (`"80mm"` or `"58mm"`).
    pub fn built_in(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "80mm" | "80" => Some(Self::PAPER_80MM),
            "58mm" | "58" => Some(Self::PAPER_58MM),
            _ => None,
        }
    }
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self::PAPER_80MM
    }
}

// ============================================================================
// TESTS
// ============================================================================
