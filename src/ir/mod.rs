//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for receipt printing. The IR is a
//! "bytecode" representation that sits between the printer session and raw
//! ESC/POS protocol bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐     ┌──────────┐
//! │   Session   │ ──► │     IR      │ ──► │ Codegen  │ ──► │ ByteSink │
//! │  (commands) │     │  (Vec<Op>)  │     │ (bytes)  │     │          │
//! └─────────────┘     └─────────────┘     └──────────┘     └──────────┘
//! ```
//!
//! Every session command builds a small [`Program`] and writes its compiled
//! bytes as one unit, so what reaches the sink can always be inspected first.
//!
//! ## Example
//!
//! ```
//! use escpos_receipt::ir::{Op, Program};
//! use escpos_receipt::protocol::text::Justification;
//!
//! let mut program = Program::with_init();
//! program.push(Op::SetJustify(Justification::Center));
//! program.push(Op::SetBold(true));
//! program.line("HELLO");
//! program.push(Op::Cut { partial: false });
//!
//! // Inspect the IR
//! println!("{:#?}", program);
//!
//! let bytes = program.to_bytes();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

mod codegen;
mod ops;

// codegen adds `to_bytes` to Op and Program via impl
pub use ops::*;
