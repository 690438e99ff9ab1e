// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod engines;
mod font;

pub(crate) use engines::{ScriptedLocator, ScriptedRasterizer, ScriptedShaper};
pub(crate) use font::{minimal_font, test_face};

use image::Rgb;

use crate::{Color, PixelEncoding, RasterOutput};

pub(crate) const WHITE: Color = Rgb([255, 255, 255]);
pub(crate) const BLACK: Color = Rgb([0, 0, 0]);

/// A grayscale glyph of uniform `coverage`.
pub(crate) fn gray_output(
    width: u32,
    height: u32,
    coverage: u8,
    left: i32,
    top: i32,
) -> RasterOutput {
    RasterOutput {
        encoding: Some(PixelEncoding::Gray),
        buffer: vec![coverage; (width * height) as usize],
        stride: width as i32,
        raw_width: width,
        raw_height: height,
        bearing_left: left,
        bearing_top: top,
    }
}

/// A monochrome glyph with every pixel set.
pub(crate) fn mono_output(width: u32, height: u32, left: i32, top: i32) -> RasterOutput {
    let stride = width.div_ceil(8);
    let mut buffer = vec![0_u8; (stride * height) as usize];
    for row in 0..height {
        for col in 0..width {
            buffer[(row * stride + col / 8) as usize] |= 0x80 >> (col % 8);
        }
    }
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
