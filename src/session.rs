//! # Printer Session
//!
//! A [`PrinterSession`] sequences print commands over a [`ByteSink`].
//!
//! ## Command Table
//!
//! | Method | Bytes |
//! |--------|-------|
//! | `reset()` | `1B 40` |
//! | `new_line(n)` | `0A` × n |
//! | `partial_cut(n)` | `0A` × n, then `1D 56 01` |
//! | `full_cut()` | `1D 56 00` |
//! | `bold(on)` | `1B 45 01` / `1B 45 00` |
//! | `justify(j)` | `1B 61 00/01/02` |
//! | `size(s)` | `1B 21 00/10/20/30` |
//! | `text(s)` | UTF-8 bytes, then `0A` |
//! | `image(..)` | per strip: `1B 2A 00 nL nH` + columns, then `1B 4A n` |
//! | `table(..)` | one `text` per laid-out line |
//!
//! Each call is one write to the sink. The exceptions: `partial_cut` writes
//! its line feeds and its cut separately, `image` writes every strip and
//! every feed separately, and `table` writes one line at a time. Sink errors
//! are returned as they are; nothing is retried.
//!
//! ## Example
//!
//! ```
//! use escpos_receipt::protocol::text::Justification;
//! use escpos_receipt::table::TableSpec;
//! use escpos_receipt::PrinterSession;
//!
//! let mut session = PrinterSession::new(Vec::new());
//! session.reset()?;
//! session.justify(Justification::Center)?;
//! session.text("CHURRA MART")?;
//!
//! let spec = TableSpec::new(vec![10, 6], vec![Justification::Left, Justification::Right]);
//! session.table(&spec, &[vec!["Coffee".into(), "4.50".into()]])?;
//! session.partial_cut(3)?;
//!
//! let bytes = session.into_inner();
//! assert!(bytes.ends_with(&[0x1D, 0x56, 0x01]));
//! # Ok::<(), escpos_receipt::EscPosError>(())
//! ```

use log::trace;

use crate::error::EscPosError;
use crate::ir::{Op, Program};
use crate::printer::PrinterProfile;
use crate::protocol::text::{Justification, TextSize};
use crate::raster::{self, PixelSource, RasterOptions};
use crate::table::{TableRow, TableSpec};
use crate::transport::ByteSink;

/// A print job in progress on one sink.
pub struct PrinterSession<S: ByteSink> {
    sink: S,
    profile: PrinterProfile,
}

impl<S: ByteSink> PrinterSession<S> {
    /// Create a session with the default (80mm) profile.
    pub fn new(sink: S) -> Self {
        Self::with_profile(sink, PrinterProfile::default())
    }

    pub fn with_profile(sink: S, profile: PrinterProfile) -> Self {
        Self { sink, profile }
    }

    pub fn profile(&self) -> &PrinterProfile {
        &self.profile
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// End the session and get the sink back.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Compile `program` and send it as a single write.
    ///
    /// An empty program writes nothing.
    pub fn run(&mut self, program: &Program) -> Result<(), EscPosError> {
        let bytes = program.to_bytes();
        if bytes.is_empty() {
            return Ok(());
        }
        trace!("session: write {} bytes ({} ops)", bytes.len(), program.len());
        self.sink.write(&bytes)?;
        Ok(())
    }

    fn send(&mut self, op: Op) -> Result<(), EscPosError> {
        self.run(&Program::from_iter([op]))
    }

    // ===== Printer Control =====

    /// Reset the printer to its power-on state (ESC @).
    pub fn reset(&mut self) -> Result<(), EscPosError> {
        self.send(Op::Init)
    }

    /// Feed `count` blank lines in one write. Zero writes nothing.
    pub fn new_line(&mut self, count: usize) -> Result<(), EscPosError> {
        self.send(Op::LineFeed(count))
    }

    /// Feed `feed_lines` lines so the last printed line clears the cutter,
    /// then cut leaving a small hinge.
    pub fn partial_cut(&mut self, feed_lines: usize) -> Result<(), EscPosError> {
        self.new_line(feed_lines)?;
        self.send(Op::Cut { partial: true })
    }

    /// Partial cut using the profile's `cut_feed_lines`.
    pub fn cut(&mut self) -> Result<(), EscPosError> {
        self.partial_cut(self.profile.cut_feed_lines)
    }

    /// Cut the paper completely, with no feed.
    pub fn full_cut(&mut self) -> Result<(), EscPosError> {
        self.send(Op::Cut { partial: false })
    }

    // ===== Text =====

    pub fn bold(&mut self, enabled: bool) -> Result<(), EscPosError> {
        self.send(Op::SetBold(enabled))
    }

    pub fn justify(&mut self, justification: Justification) -> Result<(), EscPosError> {
        self.send(Op::SetJustify(justification))
    }

    pub fn size(&mut self, size: TextSize) -> Result<(), EscPosError> {
        self.send(Op::SetSize(size))
    }

    /// Print one line of text. The line feed is appended here, in the same
    /// write.
    pub fn text(&mut self, text: &str) -> Result<(), EscPosError> {
        let mut program = Program::new();
        program.line(text);
        self.run(&program)
    }

    /// Lay out `rows` and print every resulting line.
    ///
    /// Nothing is written if the rows don't match `spec`.
    pub fn table(&mut self, spec: &TableSpec, rows: &[TableRow]) -> Result<(), EscPosError> {
        let lines = spec.layout_for(&self.profile, rows)?;
        for line in &lines {
            self.text(line)?;
        }
        Ok(())
    }

    // ===== Graphics =====

    /// Print `image` scaled to at most `width` dots, centered on the
    /// profile's full dot width.
    ///
    /// After every 8-dot strip the paper is fed `feed` dots (ESC J); a feed
    /// of zero sends no feed command.
    pub fn image<P: PixelSource + ?Sized>(
        &mut self,
        image: &P,
        width: u16,
        feed: u8,
    ) -> Result<(), EscPosError> {
        let options = RasterOptions::new(width, self.profile.max_width_dots);
        self.image_with(image, &options, feed)
    }

    /// Like [`PrinterSession::image`], with explicit encoder options.
    ///
    /// `options.max_width` replaces the profile's dot width for this image
    /// only, so a narrower canvas (or area sampling) needs no new profile.
    pub fn image_with<P: PixelSource + ?Sized>(
        &mut self,
        image: &P,
        options: &RasterOptions,
        feed: u8,
    ) -> Result<(), EscPosError> {
        let job = raster::encode_with(image, options)?;

        let mut program = Program::new();
        program.raster(&job, feed);

        // One write per strip, one per feed.
        for op in program {
            self.send(op)?;
        }
        Ok(())
    }

    /// Decode an image file (PNG, JPEG, ...) and print it.
    pub fn image_bytes(&mut self, bytes: &[u8], width: u16, feed: u8) -> Result<(), EscPosError> {
        let image = raster::decode(bytes)?;
        self.image(&image, width, feed)
    }
}

// ============================================================================
// TESTS
// ============================================================================
