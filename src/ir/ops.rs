//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for receipt printing.
//! The IR is a sequence of opcodes that can be inspected and compiled to
//! ESC/POS bytes.
//!
//! ```text
//! Session / caller → IR (inspectable) → Codegen → Bytes → ByteSink
//! ```
//!
//! Each opcode represents a single, atomic printer operation.

use crate::protocol::text::{Justification, TextSize};
use crate::raster::RasterJob;

/// IR opcodes - the "bytecode" for receipt printing.
///
/// Each variant represents a single atomic operation. The IR can be:
/// - Inspected for debugging (`{:#?}`)
/// - Compiled to ESC/POS bytes
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @). Resets to default state.
    Init,

    /// Cut paper. `partial: true` leaves a small hinge.
    Cut { partial: bool },

    /// Feed paper by `dots` motion units (ESC J n).
    FeedDots(u8),

    // ========== Style Changes ==========
    /// Set line justification.
    SetJustify(Justification),

    /// Enable/disable bold.
    SetBold(bool),

    /// Set character size.
    SetSize(TextSize),

    // ========== Content ==========
    /// Raw text (no trailing newline), sent as UTF-8.
    Text(String),

    /// `n` line feeds. Zero emits nothing.
    LineFeed(usize),

    // ========== Graphics ==========
    /// One 8-dot bit image strip (ESC * 0). One byte per column.
    BitImage(Vec<u8>),
}

/// A compiled IR program.
///
/// Contains a sequence of ops that can be compiled to bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create a program with an initial Init op.
    pub fn with_init() -> Self {
        Self {
            ops: vec![Op::Init],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Append a text line (text + newline).
    pub fn line(&mut self, text: impl Into<String>) {
        self.push(Op::Text(text.into()));
        self.push(Op::LineFeed(1));
    }

    /// Append every strip of an encoded image, each followed by a paper
    /// feed of `feed` dots when `feed > 0`.
    pub fn raster(&mut self, job: &RasterJob, feed: u8) {
        for chunk in &job.chunks {
            self.push(Op::BitImage(chunk.clone()));
            if feed > 0 {
                self.push(Op::FeedDots(feed));
            }
        }
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
