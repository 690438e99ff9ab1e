// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding rasterized glyphs and painting them onto a [`Canvas`].
//!
//! A rasterizer hands back a glyph in one of several pixel encodings depending
//! on the [`RenderMode`](crate::RenderMode) it was asked for:
//!
//! - [`PixelEncoding::Mono`]: one bit per pixel, most significant bit first.
//! - [`PixelEncoding::Gray`]: one coverage byte per pixel.
//! - [`PixelEncoding::Lcd`]: three coverage bytes per pixel laid out side by side,
//!   so a row holds three times as many samples as the glyph is wide.
//! - [`PixelEncoding::LcdV`]: three coverage bytes per pixel in three consecutive
//!   rows, so the bitmap holds three times as many rows as the glyph is high.
//!
//! Coverage is blended per channel against whatever is already on the canvas,
//! which lets overlapping glyph boxes accumulate.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Glyph bitmaps are small and blended values never exceed a byte."
)]

use crate::canvas::{Canvas, Color};
use crate::error::Error;

/// Pixel layout of a rasterized glyph as reported by the rasterizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixelEncoding {
    /// One bit per pixel, most significant bit first.
    Mono,
    /// One coverage byte per pixel.
    Gray,
    /// Three horizontal coverage samples per pixel.
    Lcd,
    /// Three vertical coverage samples per pixel.
    LcdV,
    /// Premultiplied color in BGRA order. Not supported for painting.
    Bgra,
}

/// A rasterized glyph as produced by a [`RasterEngine`](crate::RasterEngine).
///
/// The buffer is an owned copy; nothing borrows from the rasterizer once it
/// has returned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterOutput {
    /// Layout of `buffer`.
    pub encoding: Option<PixelEncoding>,
    /// Raw pixel rows.
    pub buffer: Vec<u8>,
    /// Signed byte distance between rows. Negative for bottom-up bitmaps.
    pub stride: i32,
    /// Width in samples, three times the pixel width for [`PixelEncoding::Lcd`].
    pub raw_width: u32,
    /// Height in rows, three times the pixel height for [`PixelEncoding::LcdV`].
    pub raw_height: u32,
    /// Horizontal distance from the pen position to the left edge of the bitmap.
    pub bearing_left: i32,
    /// Vertical distance from the baseline up to the top edge of the bitmap.
    pub bearing_top: i32,
}

/// Pixel storage shared by all [`GlyphBitmap`] variants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bitmap {
    stride: i32,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Takes ownership of `data`, sized to `height * |stride| * max(1, bytes_per_pixel)`.
    ///
    /// Short buffers are zero-padded and long ones truncated so that the length
    /// always matches the geometry.
    fn new(
        stride: i32,
        width: u32,
        height: u32,
        bytes_per_pixel: usize,
        mut data: Vec<u8>,
    ) -> Self {
        let len = height as usize * stride.unsigned_abs() as usize * bytes_per_pixel.max(1);
        data.resize(len, 0);
        Self {
            stride,
            width,
            height,
            data,
        }
    }

    /// Signed byte distance between rows as reported by the rasterizer.
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    // The sign of the stride marks bottom-up bitmaps but rows are always
    // addressed top-down.
    fn row_len(&self) -> usize {
        self.stride.unsigned_abs() as usize
    }

    fn sample(&self, index: usize) -> u8 {
        self.data.get(index).copied().unwrap_or(0)
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The decoded pixels of a single glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlyphBitmap {
    /// Bilevel coverage.
    Mono(Bitmap),
    /// Grayscale coverage.
    Gray(Bitmap),
    /// Horizontal sub-pixel coverage.
    SubpixelH {
        /// The samples, three per pixel along each row.
        bitmap: Bitmap,
        /// Whether the first sample belongs to blue rather than red.
        reversed: bool,
    },
    /// Vertical sub-pixel coverage.
    SubpixelV {
        /// The samples, one row per sub-pixel.
        bitmap: Bitmap,
        /// Whether the first sample row belongs to blue rather than red.
        reversed: bool,
    },
}

impl Default for GlyphBitmap {
    fn default() -> Self {
        Self::empty()
    }
}

impl GlyphBitmap {
    /// A bitmap with no pixels. Painting it does nothing.
    pub fn empty() -> Self {
        Self::Gray(Bitmap::default())
    }

    /// Decodes a rasterizer result, taking ownership of its buffer.
    ///
    /// `reversed` selects BGR instead of RGB sample order for the sub-pixel
    /// encodings and is ignored otherwise.
    ///
    /// Returns an [`ErrorKind::UnsupportedPixelEncoding`](crate::ErrorKind::UnsupportedPixelEncoding)
    /// error for color bitmaps or a missing encoding.
    pub fn decode(output: RasterOutput, reversed: bool) -> Result<Self, Error> {
        let RasterOutput {
            encoding,
            buffer,
            stride,
            raw_width,
            raw_height,
            ..
        } = output;
        Ok(match encoding {
            Some(PixelEncoding::Mono) => {
                Self::Mono(Bitmap::new(stride, raw_width, raw_height, 0, buffer))
            }
            Some(PixelEncoding::Gray) => {
                Self::Gray(Bitmap::new(stride, raw_width, raw_height, 1, buffer))
            }
            Some(PixelEncoding::Lcd) => Self::SubpixelH {
                bitmap: Bitmap::new(stride, raw_width / 3, raw_height, 3, buffer),
                reversed,
            },
            Some(PixelEncoding::LcdV) => Self::SubpixelV {
                bitmap: Bitmap::new(stride, raw_width, raw_height / 3, 3, buffer),
                reversed,
            },
            // TODO: paint color glyphs once the canvas can composite premultiplied BGRA.
            Some(PixelEncoding::Bgra) => {
                return Err(Error::unsupported_pixel_encoding("BGRA color bitmap"));
            }
            None => return Err(Error::unsupported_pixel_encoding("unknown pixel mode")),
        })
    }

    /// The pixel storage.
    pub fn bitmap(&self) -> &Bitmap {
        match self {
            Self::Mono(bitmap)
            | Self::Gray(bitmap)
            | Self::SubpixelH { bitmap, .. }
            | Self::SubpixelV { bitmap, .. } => bitmap,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.bitmap().width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bitmap().height
    }

    /// Bytes holding one pixel, `0` for bit-packed bitmaps.
    pub fn bytes_per_pixel_component(&self) -> usize {
        match self {
            Self::Mono(_) => 0,
            Self::Gray(_) => 1,
            Self::SubpixelH { .. } | Self::SubpixelV { .. } => 3,
        }
    }

    /// Paints the glyph with its top left corner at `(x, y)`.
    ///
    /// Only pixels within `width × height` of the origin are touched.
    pub fn paint(&self, canvas: &mut Canvas, x: i32, y: i32, pen: Color) {
        let bitmap = self.bitmap();
        if bitmap.is_empty() {
            return;
        }
        match self {
            Self::Mono(bitmap) => paint_mono(bitmap, canvas, x, y, pen),
            Self::Gray(bitmap) => paint_coverage(bitmap, canvas, x, y, pen, |row, col| {
                let value = bitmap.sample(row * bitmap.row_len() + col);
                [value; 3]
            }),
            Self::SubpixelH { bitmap, reversed } => {
                let offsets = channel_offsets(*reversed);
                paint_coverage(bitmap, canvas, x, y, pen, |row, col| {
                    offsets.map(|offset| bitmap.sample(row * bitmap.row_len() + 3 * col + offset))
                })
            }
            Self::SubpixelV { bitmap, reversed } => {
                let offsets = channel_offsets(*reversed);
                paint_coverage(bitmap, canvas, x, y, pen, |row, col| {
                    offsets.map(|offset| bitmap.sample((3 * row + offset) * bitmap.row_len() + col))
                })
            }
        }
    }
}

/// Sample offsets feeding the red, green and blue channels.
fn channel_offsets(reversed: bool) -> [usize; 3] {
    if reversed { [2, 1, 0] } else { [0, 1, 2] }
}

/// Mixes `pen` into `background` by `coverage` out of 255.
pub(crate) fn blend(coverage: u8, background: u8, pen: u8) -> u8 {
    let coverage = u32::from(coverage);
    let mixed = ((255 - coverage) * u32::from(background) + coverage * u32::from(pen)) / 255;
    mixed as u8
}

fn paint_mono(bitmap: &Bitmap, canvas: &mut Canvas, x: i32, y: i32, pen: Color) {
    let row_len = bitmap.row_len();
    for row in 0..bitmap.height as usize {
        for col in 0..bitmap.width as usize {
            let byte = bitmap.sample(row * row_len + col / 8);
            if (byte >> (7 - col % 8)) & 1 == 1 {
                canvas.set_pixel(x + col as i32, y + row as i32, pen);
            }
        }
    }
}

fn paint_coverage(
    bitmap: &Bitmap,
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    pen: Color,
    coverage_at: impl Fn(usize, usize) -> [u8; 3],
) {
    for row in 0..bitmap.height as usize {
        for col in 0..bitmap.width as usize {
            let coverage = coverage_at(row, col);
            canvas.update_pixel(x + col as i32, y + row as i32, |background| {
                let mut result = background;
                for channel in 0..3 {
                    result.0[channel] =
                        blend(coverage[channel], background.0[channel], pen.0[channel]);
                }
                result
            });
        }
    }
}
