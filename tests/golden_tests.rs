//! # Golden Tests
//!
//! These tests pin the exact bytes produced for small, hand-checkable inputs.
//!
//! ## Test Coverage
//!
//! - **Raster**: reference images built in code, compared against bytes
//!   computed by hand (centering, padding, bit order, threshold).
//! - **Session**: a complete receipt job written to a `Vec<u8>` sink.
//! - **Properties**: width, chunk count, idempotence and determinism checks
//!   over a handful of generated inputs.

use escpos_receipt::ir::{Op, Program};
use escpos_receipt::protocol::text::{Justification, TextSize};
use escpos_receipt::raster::{self, RasterOptions, Sampling};
use escpos_receipt::table::{self, TableSpec};
use escpos_receipt::{ByteSink, EscPosError, PrinterProfile, PrinterSession, TransportError};
use image::{ImageFormat, Rgb, RgbImage};
use pretty_assertions::assert_eq;
use std::io::Cursor;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// 4x4 image: top row and left column black, the rest white.
///
/// ```text
/// ####
/// #...
/// #...
/// #...
/// ```
fn corner_image() -> RgbImage {
    RgbImage::from_fn(4, 4, |x, y| if x == 0 || y == 0 { BLACK } else { WHITE })
}

/// 1x16 column probing the threshold and the bit order of two strips.
fn probe_column() -> RgbImage {
    RgbImage::from_fn(1, 16, |_, y| match y {
        0 | 15 => BLACK,
        3 => Rgb([127, 127, 127]), // sum 381: ink
        4 => Rgb([128, 128, 128]), // sum 384: paper
        8 => Rgb([200, 100, 83]),  // sum 383: ink
        _ => WHITE,
    })
}

fn profile(max_width_dots: u16) -> PrinterProfile {
    PrinterProfile {
        max_width_dots,
        ..PrinterProfile::PAPER_58MM
    }
}

fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
    cells
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

// ============================================================================
// RASTER GOLDEN TESTS
// ============================================================================

#[test]
fn test_golden_raster_centered_on_wider_canvas() {
    init_logging();
    // 4x4 image on an 8x8 canvas: 2 dots of padding on every side.
    let job = raster::encode(&corner_image(), 4, 8).unwrap();

    // Column 2 holds the left edge (rows 2..=5 → 0b0011_1100); columns 3..=5
    // hold only the top edge (row 2 → 0b0010_0000).
    assert_eq!(
        job.chunks,
        vec![vec![0x00, 0x00, 0x3C, 0x20, 0x20, 0x20, 0x00, 0x00]]
    );
    assert_eq!(job.header(), [0x1B, 0x2A, 0x00, 0x08, 0x00]);
}

#[test]
fn test_golden_raster_downscaled_and_vertically_padded() {
    // 8x6 black block scaled by 0.5 to 4x3, centered in an 8-row strip:
    // top offset 2.5, so rows 2, 3 and 4 are ink (0b0011_1000).
    let block = RgbImage::from_pixel(8, 6, BLACK);
    let job = raster::encode(&block, 4, 4).unwrap();
    assert_eq!(job.chunks, vec![vec![0x38; 4]]);
    assert_eq!(job.height_dots(), 8);
}

#[test]
fn test_golden_raster_bit_order_and_threshold() {
    let job = raster::encode(&probe_column(), 1, 1).unwrap();
    // Strip 0: row 0 (MSB) and row 3. Strip 1: row 8 (MSB) and row 15 (LSB).
    assert_eq!(job.chunks, vec![vec![0x90], vec![0x81]]);
}

#[test]
fn test_golden_raster_commands() {
    let job = raster::encode(&probe_column(), 1, 3).unwrap();
    let commands: Vec<Vec<u8>> = job.commands().collect();
    assert_eq!(
        commands,
        vec![
            vec![0x1B, 0x2A, 0x00, 3, 0, 0x00, 0x90, 0x00],
            vec![0x1B, 0x2A, 0x00, 3, 0, 0x00, 0x81, 0x00],
        ]
    );
}

#[test]
fn test_golden_raster_area_sampling_solid_block() {
    // 8x16 scaled to 4x8 fills the strip exactly: every dot covers four
    // black source pixels.
    let block = RgbImage::from_pixel(8, 16, BLACK);
    let options = RasterOptions::new(4, 4).sampling(Sampling::Area);
    let job = raster::encode_with(&block, &options).unwrap();
    assert_eq!(job.chunks, vec![vec![0xFF; 4]]);
}

// ============================================================================
// SESSION GOLDEN TESTS
// ============================================================================

#[test]
fn test_golden_receipt_job() {
    init_logging();
    let mut session = PrinterSession::with_profile(Vec::new(), profile(8));

    session.reset().unwrap();
    session.justify(Justification::Center).unwrap();
    session.bold(true).unwrap();
    session.size(TextSize::DoubleHeight).unwrap();
    session.text("CAFE").unwrap();
    session.size(TextSize::Normal).unwrap();
    session.bold(false).unwrap();
    session.image(&corner_image(), 4, 16).unwrap();
    session.justify(Justification::Left).unwrap();
    let spec = TableSpec::new(vec![6, 4], vec![Justification::Left, Justification::Right]);
    session
        .table(&spec, &rows(&[&["Coffee beans", "12.50"]]))
        .unwrap();
    session.partial_cut(2).unwrap();

    let mut expected: Vec<u8> = Vec::new();
    expected.extend([0x1B, 0x40]);
    expected.extend([0x1B, 0x61, 0x01]);
    expected.extend([0x1B, 0x45, 0x01]);
    expected.extend([0x1B, 0x21, 0x10]);
    expected.extend(b"CAFE\n");
    expected.extend([0x1B, 0x21, 0x00]);
    expected.extend([0x1B, 0x45, 0x00]);
    expected.extend([0x1B, 0x2A, 0x00, 0x08, 0x00]);
    expected.extend([0x00, 0x00, 0x3C, 0x20, 0x20, 0x20, 0x00, 0x00]);
    expected.extend([0x1B, 0x4A, 16]);
    expected.extend([0x1B, 0x61, 0x00]);
    expected.extend(b"Coffee12.5\n");
    expected.extend(b" beans   0\n");
    expected.extend([0x0A, 0x0A, 0x1D, 0x56, 0x01]);

    assert_eq!(session.into_inner(), expected);
}

#[test]
fn test_golden_session_matches_program() {
    let mut session = PrinterSession::new(Vec::new());
    session.reset().unwrap();
    session.text("Thank you").unwrap();
    session.full_cut().unwrap();

    let mut program = Program::with_init();
    program.line("Thank you");
    program.push(Op::Cut { partial: false });

    assert_eq!(session.into_inner(), program.to_bytes());
}

#[test]
fn test_image_bytes_matches_decoded_image() {
    let mut png = Vec::new();
    corner_image()
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let mut from_file = PrinterSession::with_profile(Vec::new(), profile(8));
    from_file.image_bytes(&png, 4, 0).unwrap();

    let mut from_pixels = PrinterSession::with_profile(Vec::new(), profile(8));
    from_pixels.image(&corner_image(), 4, 0).unwrap();

    assert_eq!(from_file.into_inner(), from_pixels.into_inner());
}

/// Fails every write.
struct Unplugged;

impl ByteSink for Unplugged {
    fn write(&mut self, _bytes: &[u8]) -> Result<(), TransportError> {
        Err(TransportError::Io(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "printer offline",
        )))
    }
}

#[test]
fn test_failing_sink_surfaces_transport_error() {
    let mut session = PrinterSession::new(Unplugged);
    let err = session.reset().unwrap_err();
    assert!(matches!(err, EscPosError::Transport(TransportError::Io(_))));
    assert!(err.to_string().contains("printer offline"));
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 7 + y * 13) % 256) as u8;
        Rgb([v, v.wrapping_mul(3), 255 - v])
    })
}

#[test]
fn test_chunks_always_span_max_width() {
    for &(w, h, target, max) in &[
        (1, 1, 1, 1),
        (37, 5, 20, 64),
        (600, 123, 576, 576),
        (300, 300, 1000, 384),
        (10, 17, 0, 0),
    ] {
        let job = raster::encode(&gradient(w, h), target, max).unwrap();
        let max = max.max(1) as usize;
        assert!(
            job.chunks.iter().all(|c| c.len() == max),
            "{}x{} → {} / {}",
            w,
            h,
            target,
            max
        );
        assert_eq!(job.height_dots(), job.chunks.len() * 8);
        assert!(!job.chunks.is_empty());
    }
}

#[test]
fn test_chunk_count_follows_scaled_height() {
    // 600 wide scaled to 300: ratio 0.5, 123 rows → 61.5 → 64 dots.
    let job = raster::encode(&gradient(600, 123), 300, 576).unwrap();
    assert_eq!(job.chunks.len(), 8);
    // Exact multiple of 8 is kept as is.
    let job = raster::encode(&gradient(40, 16), 40, 40).unwrap();
    assert_eq!(job.chunks.len(), 2);
}

#[test]
fn test_reencoding_is_identical() {
    let image = gradient(97, 41);
    for sampling in [Sampling::Nearest, Sampling::Area] {
        let options = RasterOptions::new(50, 64).sampling(sampling);
        let a = raster::encode_with(&image, &options).unwrap();
        let b = raster::encode_with(&image, &options).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_layout_is_idempotent() {
    let widths = [6, 4, 5];
    let justifications = [
        Justification::Left,
        Justification::Center,
        Justification::Right,
    ];
    let input = rows(&[
        &["Sparkling water", "2", "1.80"],
        &["Tea", "12", "14.40"],
        &["", "", ""],
        &["Croissant au beurre", "1", "123456789"],
    ]);

    let once = table::layout(&widths, &justifications, &input).unwrap();
    for line in &once {
        assert_eq!(line.chars().count(), 15, "{:?}", line);
    }

    let split: Vec<Vec<String>> = once
        .iter()
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            vec![
                chars[0..6].iter().collect(),
                chars[6..10].iter().collect(),
                chars[10..15].iter().collect(),
            ]
        })
        .collect();
    let twice = table::layout(&widths, &justifications, &split).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_layout_reference_cases() {
    let left_right = [Justification::Left, Justification::Right];
    assert_eq!(
        table::layout(&[5, 3], &left_right, &rows(&[&["hello", "ab"]])).unwrap(),
        vec!["hello ab"]
    );
    assert_eq!(
        table::layout(&[3], &[Justification::Left], &rows(&[&["abcdef"]])).unwrap(),
        vec!["abc", "def"]
    );
    assert_eq!(
        table::layout(&[6], &[Justification::Center], &rows(&[&["ab"]])).unwrap(),
        vec!["  ab  "]
    );
    let err = table::layout(&[5, 3], &left_right, &rows(&[&["x"]])).unwrap_err();
    assert!(matches!(
        err,
        EscPosError::ColumnArityMismatch {
            row: Some(0),
            expected: 2,
            found: 1
        }
    ));
}
