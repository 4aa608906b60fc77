//! # Printer Transport Layer
//!
//! This module provides the destinations print jobs are written to.
//!
//! ## The `ByteSink` Contract
//!
//! A [`ByteSink`] accepts ordered chunks of bytes. ESC/POS is one-way, so a
//! sink never returns data; it only reports whether the write succeeded.
//! Retrying is the sink's business; callers surface the first error.
//!
//! ## Available Sinks
//!
//! - `Vec<u8>`: collects the job in memory (previews, tests, golden files)
//! - [`stream`]: any `std::io::Write`, e.g. a `/dev/usb/lp0` device file

pub mod stream;

pub use stream::StreamTransport;

use crate::error::TransportError;

/// An ordered, fallible byte destination.
pub trait ByteSink {
    /// Write all of `bytes`, in order.
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).write(bytes)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).write(bytes)
    }
}
