// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization with `swash`.
//!
//! Swash produces 8-bit alpha masks and 32-bit horizontal sub-pixel masks. The
//! remaining encodings are derived from those:
//!
//! - monochrome bitmaps threshold an alpha mask at half coverage and pack it
//!   most significant bit first,
//! - vertical sub-pixel bitmaps render the alpha mask at triple vertical
//!   resolution so each output row holds one sub-pixel stripe.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Glyph placements are small pixel values."
)]

use swash::scale::image::{Content, Image};
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::{Format, Transform};
use swash::FontRef;

use crate::bitmap::{PixelEncoding, RasterOutput};
use crate::directive::{LoadFlags, RasterDirective, RenderMode};
use crate::error::Error;
use crate::font::FontFace;
use crate::run::RasterEngine;

/// Coverage at or above which a monochrome pixel is set.
const MONO_THRESHOLD: u8 = 128;

/// Rasterizes glyphs with `swash`.
pub struct SwashRasterizer {
    context: ScaleContext,
}

impl SwashRasterizer {
    /// Creates a rasterizer.
    pub fn new() -> Self {
        Self {
            context: ScaleContext::new(),
        }
    }
}

impl Default for SwashRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SwashRasterizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwashRasterizer").finish_non_exhaustive()
    }
}

impl RasterEngine for SwashRasterizer {
    fn load_and_render(
        &mut self,
        face: &FontFace,
        glyph_id: u32,
        directive: &RasterDirective,
    ) -> Result<RasterOutput, Error> {
        let font = FontRef::from_index(face.data(), face.index() as usize)
            .ok_or_else(|| Error::font_load_failure(format!("face {}", face.index())))?;
        let Ok(glyph_id) = u16::try_from(glyph_id) else {
            log::warn!("glyph id {glyph_id} out of range");
            return Ok(empty_output());
        };

        let (ppem_x, ppem_y) = face.ppem();
        let mut scaler = self
            .context
            .builder(font)
            .size(ppem_y)
            .hint(directive.hinted())
            .build();

        let sources: &[Source] = if directive.load_flags.contains(LoadFlags::NO_BITMAP) {
            &[Source::Outline]
        } else {
            &[
                Source::ColorBitmap(StrikeWith::ExactSize),
                Source::Bitmap(StrikeWith::ExactSize),
                Source::Outline,
            ]
        };
        let vertical_scale = if directive.render_mode == RenderMode::LcdV {
            3.0
        } else {
            1.0
        };
        let horizontal_scale = ppem_x / ppem_y;

        let mut render = Render::new(sources);
        render.format(match directive.render_mode {
            RenderMode::LcdH => Format::Subpixel,
            RenderMode::Mono | RenderMode::Gray | RenderMode::LcdV => Format::Alpha,
        });
        if vertical_scale != 1.0 || horizontal_scale != 1.0 {
            render.transform(Some(Transform::scale(horizontal_scale, vertical_scale)));
        }
        Ok(render
            .render(&mut scaler, glyph_id)
            .map(|image| convert(image, directive.render_mode))
            .unwrap_or_else(empty_output))
    }
}

fn empty_output() -> RasterOutput {
    RasterOutput {
        encoding: Some(PixelEncoding::Gray),
        ..Default::default()
    }
}

fn convert(image: Image, mode: RenderMode) -> RasterOutput {
    let width = image.placement.width;
    let height = image.placement.height;
    let left = image.placement.left;
    let top = image.placement.top;
    match image.content {
        Content::Mask => match mode {
            RenderMode::Mono => {
                let (buffer, stride) = pack_mono(&image.data, width, height);
                RasterOutput {
                    encoding: Some(PixelEncoding::Mono),
                    buffer,
                    stride: stride as i32,
                    raw_width: width,
                    raw_height: height,
                    bearing_left: left,
                    bearing_top: top,
                }
            }
            RenderMode::LcdV => {
                let (buffer, rows, top) = align_stripes(&image.data, width, height, top);
                RasterOutput {
                    encoding: Some(PixelEncoding::LcdV),
                    buffer,
                    stride: width as i32,
                    raw_width: width,
                    raw_height: rows,
                    bearing_left: left,
                    bearing_top: top,
                }
            }
            RenderMode::Gray | RenderMode::LcdH => RasterOutput {
                encoding: Some(PixelEncoding::Gray),
                buffer: image.data,
                stride: width as i32,
                raw_width: width,
                raw_height: height,
                bearing_left: left,
                bearing_top: top,
            },
        },
        Content::SubpixelMask => RasterOutput {
            encoding: Some(PixelEncoding::Lcd),
            buffer: rgba_to_rgb(&image.data),
            stride: 3 * width as i32,
            raw_width: 3 * width,
            raw_height: height,
            bearing_left: left,
            bearing_top: top,
        },
        Content::Color => RasterOutput {
            encoding: Some(PixelEncoding::Bgra),
            buffer: image.data,
            stride: 4 * width as i32,
            raw_width: width,
            raw_height: height,
            bearing_left: left,
            bearing_top: top,
        },
    }
}

/// Thresholds an alpha mask into rows of `ceil(width / 8)` bytes, most
/// significant bit first.
fn pack_mono(alpha: &[u8], width: u32, height: u32) -> (Vec<u8>, usize) {
    let width = width as usize;
    let stride = width.div_ceil(8);
    let mut packed = vec![0_u8; stride * height as usize];
    if width == 0 {
        return (packed, stride);
    }
    for (row, coverage) in alpha.chunks_exact(width).take(height as usize).enumerate() {
        for (col, &value) in coverage.iter().enumerate() {
            if value >= MONO_THRESHOLD {
                packed[row * stride + col / 8] |= 0x80 >> (col % 8);
            }
        }
    }
    (packed, stride)
}

/// Pads a mask rendered at triple vertical scale so that every group of three
/// rows covers exactly one output pixel row.
///
/// `top` is in sub-pixel rows above the baseline. Empty rows are added above
/// until it is a multiple of three and below until the row count is. Returns
/// the padded mask, its row count and the top bearing in whole pixels.
fn align_stripes(mask: &[u8], width: u32, height: u32, top: i32) -> (Vec<u8>, u32, i32) {
    let width = width as usize;
    let lead = (-top).rem_euclid(3) as usize;
    let rows = (lead + height as usize).next_multiple_of(3);
    let mut padded = vec![0_u8; rows * width];
    let body = (height as usize * width).min(mask.len());
    padded[lead * width..lead * width + body].copy_from_slice(&mask[..body]);
    (padded, rows as u32, (top + lead as i32) / 3)
}

/// Drops the unused fourth channel of a sub-pixel mask.
fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect()
}
