// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory collaborators whose results are scripted by the test.

use std::collections::HashMap;

use fontique::Blob;

use super::minimal_font;
use crate::{
    Error, FontFace, FontLocator, FontSource, PixelEncoding, RasterDirective, RasterEngine,
    RasterOutput, ShapedGlyph, ShapingEngine,
};

/// Resolves a fixed set of family names to in-memory font data.
#[derive(Default)]
pub(crate) struct ScriptedLocator {
    fonts: HashMap<String, Vec<u8>>,
    pub(crate) requests: Vec<String>,
}

impl ScriptedLocator {
    /// A locator knowing a single family backed by [`minimal_font`].
    pub(crate) fn with_family(name: &str) -> Self {
        Self::default().family(name, minimal_font(1000))
    }

    pub(crate) fn family(mut self, name: &str, data: Vec<u8>) -> Self {
        self.fonts.insert(name.into(), data);
        self
    }
}

impl FontLocator for ScriptedLocator {
    fn resolve(&mut self, specifier: &str) -> Result<FontSource, Error> {
        self.requests.push(specifier.into());
        let data = self
            .fonts
            .get(specifier)
            .ok_or_else(|| Error::font_not_found(specifier))?;
        Ok(FontSource::Memory {
            data: Blob::from(data.clone()),
            index: 0,
        })
    }
}

/// Maps each character to the glyph with the same id, advancing the pen by a
/// fixed amount.
pub(crate) struct ScriptedShaper {
    /// Horizontal advance of every glyph in 26.6 fixed point.
    pub(crate) advance: i32,
    /// Vertical offset of every glyph in 26.6 fixed point.
    pub(crate) y_offset: i32,
    /// Fail every call with a shaping error.
    pub(crate) fail: bool,
    pub(crate) calls: usize,
}

impl ScriptedShaper {
    pub(crate) fn with_advance(advance: i32) -> Self {
        Self {
            advance,
            y_offset: 0,
            fail: false,
            calls: 0,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_advance(0)
        }
    }
}

impl ShapingEngine for ScriptedShaper {
    fn shape(&mut self, text: &str, _face: &FontFace) -> Result<Vec<ShapedGlyph>, Error> {
        self.calls += 1;
        if self.fail {
            return Err(Error::shaping_failure(text));
        }
        Ok(text
            .chars()
            .map(|ch| ShapedGlyph {
                glyph_id: ch as u32,
                x_offset: 0,
                y_offset: self.y_offset,
                x_advance: self.advance,
                y_advance: 0,
            })
            .collect())
    }
}

/// Hands out prepared bitmaps per glyph id and records every request.
///
/// Unknown glyphs render as an empty grayscale bitmap. Failing glyphs return
/// their scripted error.
#[derive(Default)]
pub(crate) struct ScriptedRasterizer {
    glyphs: HashMap<u32, Result<RasterOutput, Error>>,
    pub(crate) requests: Vec<(u32, RasterDirective)>,
}

impl ScriptedRasterizer {
    pub(crate) fn glyph(mut self, ch: char, output: RasterOutput) -> Self {
        self.glyphs.insert(ch as u32, Ok(output));
        self
    }

    pub(crate) fn failing_glyph(mut self, ch: char, err: Error) -> Self {
        self.glyphs.insert(ch as u32, Err(err));
        self
    }
}

impl RasterEngine for ScriptedRasterizer {
    fn load_and_render(
        &mut self,
        _face: &FontFace,
        glyph_id: u32,
        directive: &RasterDirective,
    ) -> Result<RasterOutput, Error> {
        self.requests.push((glyph_id, *directive));
        self.glyphs.get(&glyph_id).cloned().unwrap_or_else(|| {
            Ok(RasterOutput {
                encoding: Some(PixelEncoding::Gray),
                ..Default::default()
            })
        })
    }
}
