//! # Code Generation
//!
//! Converts IR programs to ESC/POS protocol bytes.

use super::ops::{Op, Program};
use crate::protocol::{commands, graphics, text};

impl Op {
    /// Append the ESC/POS bytes for this op to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            // ===== Printer Control =====
            Op::Init => {
                out.extend(commands::init());
            }
            Op::Cut { partial } => {
                if *partial {
                    out.extend(commands::cut_partial());
                } else {
                    out.extend(commands::cut_full());
                }
            }
            Op::FeedDots(dots) => {
                out.extend(commands::feed_dots(*dots));
            }

            // ===== Style Changes =====
            Op::SetJustify(justification) => {
                out.extend(text::justify(*justification));
            }
            Op::SetBold(enabled) => {
                out.extend(text::bold(*enabled));
            }
            Op::SetSize(size) => {
                out.extend(text::size(*size));
            }

            // ===== Content =====
            Op::Text(s) => {
                out.extend(s.as_bytes());
            }
            Op::LineFeed(count) => {
                out.extend(commands::line_feed(*count));
            }

            // ===== Graphics =====
            Op::BitImage(columns) => {
                out.extend(graphics::bit_image(columns));
            }
        }
    }

    /// Compile this single op.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }
}

impl Program {
    /// Compile the IR program to ESC/POS bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for op in &self.ops {
            op.encode_into(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::{Justification, TextSize};

    #[test]
    fn test_init_codegen() {
        let program = Program::with_init();
        assert_eq!(program.to_bytes(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_cut_codegen() {
        assert_eq!(Op::Cut { partial: false }.to_bytes(), vec![0x1D, 0x56, 0x00]);
        assert_eq!(Op::Cut { partial: true }.to_bytes(), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_style_codegen() {
        let program: Program = vec![
            Op::SetJustify(Justification::Right),
            Op::SetBold(true),
            Op::SetSize(TextSize::DoubleWidth),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            program.to_bytes(),
            vec![0x1B, 0x61, 0x02, 0x1B, 0x45, 0x01, 0x1B, 0x21, 0x20]
        );
    }

    #[test]
    fn test_text_is_utf8() {
        let mut program = Program::new();
        program.line("café");
        assert_eq!(program.to_bytes(), b"caf\xC3\xA9\n".to_vec());
    }

    #[test]
    fn test_bit_image_codegen() {
        let bytes = Op::BitImage(vec![0xF0; 3]).to_bytes();
        assert_eq!(bytes, vec![0x1B, 0x2A, 0x00, 3, 0, 0xF0, 0xF0, 0xF0]);
    }

    #[test]
    fn test_feed_codegen() {
        let program: Program = vec![Op::FeedDots(12), Op::LineFeed(3), Op::LineFeed(0)]
            .into_iter()
            .collect();
        assert_eq!(program.to_bytes(), vec![0x1B, 0x4A, 12, 0x0A, 0x0A, 0x0A]);
    }

    #[test]
    fn test_empty_program() {
        assert!(Program::new().to_bytes().is_empty());
    }
}
