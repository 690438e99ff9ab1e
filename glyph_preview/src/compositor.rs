// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering a string onto a freshly allocated canvas.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Canvas dimensions and glyph origins are rounded pixel values well within range."
)]

use crate::canvas::{Canvas, Color};
use crate::error::Error;
use crate::font::{FontFace, FontLocator};
use crate::options::RenderOptions;
use crate::run::{GlyphRun, RasterEngine, ShapingEngine};

/// Renders text previews using a font locator, a shaping engine and a rasterizer.
///
/// Each engine is a per-compositor session; compositors on different threads
/// must not share them.
#[derive(Debug)]
pub struct TextCompositor<L, S, R> {
    locator: L,
    shaper: S,
    rasterizer: R,
}

impl<L, S, R> TextCompositor<L, S, R>
where
    L: FontLocator,
    S: ShapingEngine,
    R: RasterEngine,
{
    /// Creates a compositor from its collaborators.
    pub fn new(locator: L, shaper: S, rasterizer: R) -> Self {
        Self {
            locator,
            shaper,
            rasterizer,
        }
    }

    /// Renders `text` in the font matching `font_specifier`.
    ///
    /// The canvas is sized to the run's bounding box and filled with
    /// `background` before glyphs are painted with `pen`. Any failure occurs
    /// before the canvas is allocated.
    pub fn render(
        &mut self,
        text: &str,
        font_specifier: &str,
        point_size: f32,
        options: &RenderOptions,
        background: Color,
        pen: Color,
    ) -> Result<Canvas, Error> {
        let source = self.locator.resolve(font_specifier)?;
        log::debug!("resolved {font_specifier:?} to {source:?}");
        let face = FontFace::load(&source, point_size, options.dpi)?;
        let run = GlyphRun::shape_and_rasterize(
            &mut self.shaper,
            &mut self.rasterizer,
            &face,
            text,
            options,
        )?;
        Ok(composite(&run, background, pen))
    }
}

/// Paints every glyph of `run` onto a new canvas filled with `background`.
pub fn composite(run: &GlyphRun, background: Color, pen: Color) -> Canvas {
    let bounds = run.bounding_box();
    let width = bounds.width().max(0.0).ceil() as u32;
    let height = bounds.height().max(0.0).ceil() as u32;
    log::debug!("compositing {} glyphs onto {width}x{height}", run.len());

    let mut canvas = Canvas::new(width, height, background);
    let baseline = run.baseline_offset();
    let mut x = 0.0_f32;
    for glyph in run.glyphs() {
        // Placement snaps to whole pixels; sub-pixel detail lives in the coverage samples.
        let origin_y = (baseline - glyph.bearing_top + glyph.offset_y).round_ties_even() as i32;
        let origin_x = (x + glyph.bearing_left).round_ties_even() as i32;
        glyph.bitmap.paint(&mut canvas, origin_x, origin_y, pen);
        x += glyph.advance_x;
    }
    canvas
}
