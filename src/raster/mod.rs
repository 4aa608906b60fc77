//! # Raster Image Encoder
//!
//! Converts an arbitrary RGB image into the printer's 8-dot column strips.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌────────────────────┐   ┌───────────┐   ┌──────────────┐
//! │  Image   │ ─►│ Canvas (scale, pad,│ ─►│ Threshold │ ─►│ Strip packing│ ─► RasterJob
//! │ (pixels) │   │  center, sample)   │   │  (1-bit)  │   │ (8 rows/byte)│
//! └──────────┘   └────────────────────┘   └───────────┘   └──────────────┘
//! ```
//!
//! Every strip of the resulting [`RasterJob`] is exactly `max_width` bytes
//! long and is sent to the printer behind an `ESC * 0 nL nH` header.
//!
//! ## Example
//!
//! ```
//! use escpos_receipt::raster;
//! use image::{Rgb, RgbImage};
//!
//! let logo = RgbImage::from_pixel(100, 20, Rgb([0, 0, 0]));
//! let job = raster::encode(&logo, 100, 384).unwrap();
//!
//! assert_eq!(job.chunks.len(), 3); // 20 rows padded to 24
//! assert!(job.chunks.iter().all(|c| c.len() == 384));
//! ```

mod canvas;
mod pack;

pub use canvas::{AreaSpans, BACKGROUND, Canvas, Sampling};
pub use pack::{THRESHOLD, is_ink, pack_strips};

use image::{DynamicImage, GenericImageView, GrayImage, RgbImage, RgbaImage};
use log::debug;

use crate::error::EscPosError;
use crate::protocol::graphics;

/// Read-only access to decoded pixels. Alpha, if any, is ignored.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Colour of pixel `(x, y)`; callers stay within bounds.
    fn rgb(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

impl PixelSource for GrayImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [v] = self.get_pixel(x, y).0;
        [v, v, v]
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = GenericImageView::get_pixel(self, x, y).0;
        [r, g, b]
    }
}

/// One 8-dot strip: one byte per canvas column.
pub type RasterChunk = Vec<u8>;

/// Encoder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Desired print width in dots (clamped to `max_width`)
    pub target_width: u16,
    /// Printer's maximum dot width per bit image command
    pub max_width: u16,
    /// Resampling strategy for downscaling
    pub sampling: Sampling,
}

impl RasterOptions {
    pub fn new(target_width: u16, max_width: u16) -> Self {
        Self {
            target_width,
            max_width,
            sampling: Sampling::default(),
        }
    }

    pub fn sampling(self, sampling: Sampling) -> Self {
        Self { sampling, ..self }
    }
}

/// An encoded image: strips in top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterJob {
    /// Column count of every strip (the canvas width)
    pub width: u16,
    pub chunks: Vec<RasterChunk>,
}

impl RasterJob {
    /// The `ESC * 0 nL nH` header preceding every strip of this job.
    pub fn header(&self) -> [u8; 5] {
        graphics::bit_image_header(self.width)
    }

    /// Padded canvas height in dots.
    pub fn height_dots(&self) -> usize {
        self.chunks.len() * graphics::STRIP_HEIGHT
    }

    /// Each strip framed as a complete bit image command.
    pub fn commands(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        self.chunks.iter().map(|chunk| graphics::bit_image(chunk))
    }
}

/// Encode `image` with nearest-neighbour sampling.
///
/// See [`encode_with`].
pub fn encode<P: PixelSource + ?Sized>(
    image: &P,
    target_width: u16,
    max_width: u16,
) -> Result<RasterJob, EscPosError> {
    encode_with(image, &RasterOptions::new(target_width, max_width))
}

/// Encode `image` into 8-dot strips.
///
/// The image is scaled down (never up) to `min(target_width, max_width)`
/// dots wide, centered on a white `max_width`-wide canvas whose height is
/// rounded up to a multiple of 8, thresholded to 1 bit, and packed.
///
/// ## Errors
///
/// [`EscPosError::ImageDecode`] if the image has no pixels.
pub fn encode_with<P: PixelSource + ?Sized>(
    image: &P,
    options: &RasterOptions,
) -> Result<RasterJob, EscPosError> {
    let (src_width, src_height) = (image.width(), image.height());
    if src_width == 0 || src_height == 0 {
        return Err(EscPosError::ImageDecode(format!(
            "image has no pixels ({}x{})",
            src_width, src_height
        )));
    }

    let canvas = Canvas::fit(
        src_width,
        src_height,
        options.target_width,
        options.max_width,
    );
    debug!(
        "raster: {}x{} source, ratio {:.4}, canvas {}x{} ({} strips)",
        src_width,
        src_height,
        canvas.ratio,
        canvas.width,
        canvas.height,
        canvas.strips()
    );

    let chunks = match options.sampling {
        Sampling::Nearest => pack_strips(canvas.width, canvas.height, |x, y| {
            is_ink(canvas.sample_nearest(image, x, y))
        }),
        Sampling::Area => {
            let spans = canvas.area_spans();
            pack_strips(canvas.width, canvas.height, |x, y| {
                is_ink(canvas.sample_area(image, &spans, x, y))
            })
        }
    };

    Ok(RasterJob {
        width: canvas.width as u16,
        chunks,
    })
}

/// Decode an encoded image file (PNG, JPEG, GIF, BMP, ...) from memory.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, EscPosError> {
    Ok(image::load_from_memory(bytes)?)
}

// ============================================================================
// TESTS
// ============================================================================
