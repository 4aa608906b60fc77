//! # escpos-receipt - ESC/POS Receipt Printing Library
//!
//! escpos-receipt turns images and tabular text into the byte stream an
//! ESC/POS thermal receipt printer understands. It provides:
//!
//! - **Raster encoding**: scale, center, threshold and pack an image into
//!   8-dot bit image strips
//! - **Table layout**: wrap and justify rows into fixed-width text lines
//! - **Protocol implementation**: ESC/POS command builders
//! - **Transport**: a `ByteSink` seam plus a chunked `std::io::Write` sink
//!
//! ## Quick Start
//!
//! ```no_run
//! use escpos_receipt::{
//!     protocol::text::Justification,
//!     table::TableSpec,
//!     transport::StreamTransport,
//!     PrinterProfile, PrinterSession,
//! };
//!
//! // Open connection to printer
//! let transport = StreamTransport::open("/dev/usb/lp0")?;
//! let mut session = PrinterSession::with_profile(transport, PrinterProfile::PAPER_58MM);
//!
//! session.reset()?;
//! session.image_bytes(&std::fs::read("logo.png")?, 300, 0)?;
//!
//! let spec = TableSpec::new(vec![24, 8], vec![Justification::Left, Justification::Right]);
//! session.table(&spec, &[vec!["Espresso".into(), "3.20".into()]])?;
//! session.cut()?;
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`raster`] | Image to bit image strips |
//! | [`table`] | Column wrapping and justification |
//! | [`session`] | Command sequencing over a sink |
//! | [`ir`] | Inspectable op programs and codegen |
//! | [`protocol`] | ESC/POS command builders |
//! | [`transport`] | Byte sinks |
//! | [`printer`] | Printer profiles |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Any printer accepting `ESC * 0` 8-dot single-density bit images, which
//! covers most 58mm and 80mm ESC/POS receipt printers.

pub mod error;
pub mod ir;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod session;
pub mod table;
pub mod transport;

// Re-exports for convenience
pub use error::{EscPosError, TransportError};
pub use printer::PrinterProfile;
pub use raster::{RasterChunk, RasterJob};
pub use session::PrinterSession;
pub use table::{TableRow, TableSpec, WrappedLine};
pub use transport::ByteSink;
