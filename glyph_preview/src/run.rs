// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaping text into a run of rasterized, positioned glyphs.

use kurbo::Rect;

use crate::bitmap::{GlyphBitmap, RasterOutput};
use crate::directive::RasterDirective;
use crate::error::Error;
use crate::font::FontFace;
use crate::options::RenderOptions;

/// Subdivisions of a pixel in 26.6 fixed point.
const FIXED_POINT_SCALE: f32 = 64.0;

/// One glyph as positioned by a shaping engine, in 26.6 fixed point pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapedGlyph {
    /// The font-specific glyph index. This is not a Unicode code point.
    pub glyph_id: u32,
    /// Horizontal displacement from the pen position.
    pub x_offset: i32,
    /// Vertical displacement from the pen position.
    pub y_offset: i32,
    /// Horizontal pen movement after the glyph.
    pub x_advance: i32,
    /// Vertical pen movement after the glyph.
    pub y_advance: i32,
}

/// Converts text into positioned glyph ids.
pub trait ShapingEngine {
    /// Shapes all of `text` in one pass, performing its own script and
    /// direction segmentation.
    ///
    /// Fails with [`ErrorKind::ShapingFailure`](crate::ErrorKind::ShapingFailure).
    fn shape(&mut self, text: &str, face: &FontFace) -> Result<Vec<ShapedGlyph>, Error>;
}

/// Converts glyph ids into bitmaps.
pub trait RasterEngine {
    /// Loads and rasterizes a single glyph as instructed by `directive`.
    ///
    /// The returned buffer is owned by the caller. An error only affects the
    /// glyph it was returned for.
    fn load_and_render(
        &mut self,
        face: &FontFace,
        glyph_id: u32,
        directive: &RasterDirective,
    ) -> Result<RasterOutput, Error>;
}

impl<T: ShapingEngine + ?Sized> ShapingEngine for &mut T {
    fn shape(&mut self, text: &str, face: &FontFace) -> Result<Vec<ShapedGlyph>, Error> {
        (**self).shape(text, face)
    }
}

impl<T: RasterEngine + ?Sized> RasterEngine for &mut T {
    fn load_and_render(
        &mut self,
        face: &FontFace,
        glyph_id: u32,
        directive: &RasterDirective,
    ) -> Result<RasterOutput, Error> {
        (**self).load_and_render(face, glyph_id, directive)
    }
}

/// A rasterized glyph together with its placement, in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedGlyph {
    /// Horizontal displacement from the pen position.
    pub offset_x: f32,
    /// Vertical displacement from the pen position.
    pub offset_y: f32,
    /// Horizontal pen movement after the glyph.
    pub advance_x: f32,
    /// Vertical pen movement after the glyph.
    pub advance_y: f32,
    /// Distance from the pen position to the left edge of the bitmap.
    pub bearing_left: f32,
    /// Distance from the baseline up to the top edge of the bitmap.
    pub bearing_top: f32,
    /// The pixels.
    pub bitmap: GlyphBitmap,
}

impl PositionedGlyph {
    /// Combines shaping metrics with a decoded bitmap and its bearings.
    pub fn new(
        shaped: &ShapedGlyph,
        bearing_left: i32,
        bearing_top: i32,
        bitmap: GlyphBitmap,
    ) -> Self {
        Self {
            offset_x: from_fixed(shaped.x_offset),
            offset_y: from_fixed(shaped.y_offset),
            advance_x: from_fixed(shaped.x_advance),
            advance_y: from_fixed(shaped.y_advance),
            bearing_left: bearing_left as f32,
            bearing_top: bearing_top as f32,
            bitmap,
        }
    }

    /// Width of the bitmap in pixels.
    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Height of the bitmap in pixels.
    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }
}

fn from_fixed(value: i32) -> f32 {
    value as f32 / FIXED_POINT_SCALE
}

/// A line of shaped, rasterized glyphs and the metrics needed to draw it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphRun {
    glyphs: Vec<PositionedGlyph>,
    baseline_offset: f32,
    bounding_box: Rect,
}

impl GlyphRun {
    /// Shapes `text` and rasterizes every resulting glyph under `options`.
    ///
    /// Glyphs keep the order the shaping engine produced them in. A glyph that
    /// fails to rasterize or whose pixel encoding cannot be painted is kept as
    /// an empty bitmap so that its advance still counts. Only shaping errors
    /// are returned.
    pub fn shape_and_rasterize<S, R>(
        shaper: &mut S,
        rasterizer: &mut R,
        face: &FontFace,
        text: &str,
        options: &RenderOptions,
    ) -> Result<Self, Error>
    where
        S: ShapingEngine + ?Sized,
        R: RasterEngine + ?Sized,
    {
        let directive = RasterDirective::from_options(options);
        let reversed = options.subpixel_order.is_reversed();
        let shaped = shaper.shape(text, face)?;

        let mut glyphs = Vec::with_capacity(shaped.len());
        for glyph in &shaped {
            let output = match rasterizer.load_and_render(face, glyph.glyph_id, &directive) {
                Ok(output) => output,
                Err(err) => {
                    log::warn!("glyph {} rendered empty: {err}", glyph.glyph_id);
                    glyphs.push(PositionedGlyph::new(glyph, 0, 0, GlyphBitmap::empty()));
                    continue;
                }
            };
            let (bearing_left, bearing_top) = (output.bearing_left, output.bearing_top);
            log::trace!(
                "glyph {}: {:?} {}x{} at ({bearing_left}, {bearing_top})",
                glyph.glyph_id,
                output.encoding,
                output.raw_width,
                output.raw_height,
            );
            let bitmap = GlyphBitmap::decode(output, reversed).unwrap_or_else(|err| {
                log::warn!("glyph {} rendered empty: {err}", glyph.glyph_id);
                GlyphBitmap::empty()
            });
            glyphs.push(PositionedGlyph::new(glyph, bearing_left, bearing_top, bitmap));
        }
        Ok(Self::from_glyphs(glyphs))
    }

    /// Builds a run from already positioned glyphs, computing its metrics.
    pub fn from_glyphs(glyphs: Vec<PositionedGlyph>) -> Self {
        // Horizontal text only: glyphs sitting below the pen origin never raise the baseline.
        let mut baseline_offset = 0.0_f32;
        let mut bottom_extent = 0.0_f32;
        let mut width = 0.0_f32;
        for glyph in &glyphs {
            if glyph.bearing_top >= 0.0 {
                baseline_offset = baseline_offset.max(glyph.bearing_top);
            }
            bottom_extent = bottom_extent.max(glyph.height() as f32 - glyph.bearing_top.abs());
            width += glyph.advance_x;
        }
        // Approximation: only the last glyph's ink width is added to the advances.
        if let Some(last) = glyphs.last() {
            width += last.width() as f32;
        }
        let height = if glyphs.is_empty() {
            0.0
        } else {
            baseline_offset + bottom_extent
        };
        Self {
            glyphs,
            baseline_offset,
            bounding_box: Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
        }
    }

    /// The glyphs in shaping order.
    pub fn glyphs(&self) -> &[PositionedGlyph] {
        &self.glyphs
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the run has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Distance from the top of the bounding box down to the baseline.
    pub fn baseline_offset(&self) -> f32 {
        self.baseline_offset
    }

    /// The estimated extent of the run, anchored at the origin.
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }
}
