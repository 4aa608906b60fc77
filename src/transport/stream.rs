//! # Stream Transport
//!
//! Sends print data to any `std::io::Write`. The usual target is a printer
//! character device such as `/dev/usb/lp0` (Linux `usblp` driver), but a TCP
//! stream to a network printer on port 9100 works the same way.
//!
//! ## Chunked Writes
//!
//! Large writes are split into chunks (4096 bytes by default) with an
//! optional delay between them, so cheap printers with small receive
//! buffers are not overrun by a long raster image. Every `write` ends with a
//! flush.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use log::trace;

use super::ByteSink;
use crate::error::TransportError;

/// Default device path for USB printers on Linux
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// # Stream Printer Transport
///
/// ## Example
///
/// ```no_run
/// use escpos_receipt::transport::{ByteSink, StreamTransport};
/// use escpos_receipt::protocol::commands;
///
/// let mut transport = StreamTransport::open("/dev/usb/lp0")?;
/// transport.write(&commands::init())?;
///
/// # Ok::<(), escpos_receipt::EscPosError>(())
/// ```
pub struct StreamTransport<W: Write> {
    inner: W,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl StreamTransport<File> {
    /// Open a printer device file for writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the `lp` group)
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, TransportError> {
        let file = OpenOptions::new().write(true).open(device.as_ref())?;
        Ok(Self::new(file))
    }

    /// Open with default device path (/dev/usb/lp0)
    pub fn open_default() -> Result<Self, TransportError> {
        Self::open(DEFAULT_DEVICE)
    }
}

impl<W: Write> StreamTransport<W> {
    /// Wrap an existing writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::ZERO,
        }
    }

    /// Set the chunk size for large writes.
    ///
    /// Default is 4096 bytes. A size of zero is treated as one byte.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    ///
    /// Default is no delay.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Get back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for StreamTransport<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        if bytes.is_empty() {
            return Ok(());
        }

        let chunks = bytes.len().div_ceil(self.chunk_size);
        for (i, chunk) in bytes.chunks(self.chunk_size).enumerate() {
            trace!("stream: chunk {}/{} ({} bytes)", i + 1, chunks, chunk.len());
            self.write_chunk(chunk, i * self.chunk_size, bytes.len())?;

            if i + 1 < chunks && !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }

        self.inner.flush()?;
        Ok(())
    }
}

impl<W: Write> StreamTransport<W> {
    /// Write all of `chunk`, which starts `offset` bytes into a write of
    /// `total` bytes.
    ///
    /// A writer that accepts zero bytes is reported as a short write.
    fn write_chunk(
        &mut self,
        chunk: &[u8],
        offset: usize,
        total: usize,
    ) -> Result<(), TransportError> {
        let mut written = 0;
        while written < chunk.len() {
            match Write::write(&mut self.inner, &chunk[written..]) {
                Ok(0) => {
                    return Err(TransportError::ShortWrite {
                        written: offset + written,
                        expected: total,
                    });
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
