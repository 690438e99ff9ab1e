// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The RGB surface glyphs are composited onto.

use image::{Rgb, RgbImage};

/// An 8-bit RGB color.
pub type Color = Rgb<u8>;

/// A mutable RGB pixel buffer.
///
/// Reads and writes outside the buffer are ignored, so glyph boxes that hang
/// over the edge are clipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.index(x, y)?;
        Some(*self.image.get_pixel(x, y))
    }

    /// Overwrites the color at `(x, y)` if it lies on the canvas.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = self.index(x, y) {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Applies `f` to the current color at `(x, y)` if it lies on the canvas.
    pub(crate) fn update_pixel(&mut self, x: i32, y: i32, f: impl FnOnce(Color) -> Color) {
        if let Some((x, y)) = self.index(x, y) {
            let pixel = self.image.get_pixel_mut(x, y);
            *pixel = f(*pixel);
        }
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &Color> + '_ {
        self.image.pixels()
    }

    /// Consumes the canvas, returning the underlying image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.image.width() && y < self.image.height()).then_some((x, y))
    }
}

impl From<Canvas> for RgbImage {
    fn from(canvas: Canvas) -> Self {
        canvas.image
    }
}
