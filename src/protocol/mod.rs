//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for the ESC/POS protocol used by receipt
//! printers. Each builder returns the exact bytes of one command.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, line feed, cut, feed)
//! - [`graphics`]: 8-dot bit image strips
//! - [`text`]: Text styling (justification, bold, size)
//!
//! ## Usage Example
//!
//! ```
//! use escpos_receipt::protocol::{commands, text};
//! use escpos_receipt::protocol::text::Justification;
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::justify(Justification::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold(false));
//! data.extend(commands::line_feed(5));
//! data.extend(commands::cut_partial());
//! ```

pub mod commands;
pub mod graphics;
pub mod text;
