// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text shaping with `harfrust`.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Scaled glyph positions are a few thousand 26.6 units at most."
)]

use core::mem;

use crate::error::Error;
use crate::font::FontFace;
use crate::run::{ShapedGlyph, ShapingEngine};

/// Shapes text with `harfrust`, reporting positions in 26.6 fixed point pixels.
pub struct HarfrustShaper {
    unicode_buffer: Option<harfrust::UnicodeBuffer>,
}

impl HarfrustShaper {
    /// Creates a shaper.
    pub fn new() -> Self {
        Self {
            unicode_buffer: Some(harfrust::UnicodeBuffer::new()),
        }
    }
}

impl Default for HarfrustShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for HarfrustShaper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HarfrustShaper").finish_non_exhaustive()
    }
}

impl ShapingEngine for HarfrustShaper {
    fn shape(&mut self, text: &str, face: &FontFace) -> Result<Vec<ShapedGlyph>, Error> {
        let font_ref = harfrust::FontRef::from_index(face.data(), face.index())
            .map_err(|err| Error::shaping_failure(format!("face {}: {err}", face.index())))?;
        let shaper_data = harfrust::ShaperData::new(&font_ref);
        let shaper = shaper_data
            .shaper(&font_ref)
            .point_size(Some(face.point_size()))
            .build();

        // Reuse the allocation from the previous call.
        let mut buffer = mem::take(&mut self.unicode_buffer)
            .unwrap_or_else(harfrust::UnicodeBuffer::new);
        buffer.clear();
        buffer.push_str(text);
        // Script, direction and language are left to the shaper.
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let (scale_x, scale_y) = fixed_scale(face);
        let glyphs = glyph_buffer
            .glyph_infos()
            .iter()
            .zip(glyph_buffer.glyph_positions())
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id,
                x_offset: to_fixed(pos.x_offset, scale_x),
                y_offset: to_fixed(pos.y_offset, scale_y),
                x_advance: to_fixed(pos.x_advance, scale_x),
                y_advance: to_fixed(pos.y_advance, scale_y),
            })
            .collect();

        self.unicode_buffer = Some(glyph_buffer.clear());
        Ok(glyphs)
    }
}

/// Factors converting font units to 26.6 pixels on each axis.
fn fixed_scale(face: &FontFace) -> (f32, f32) {
    let (ppem_x, ppem_y) = face.ppem();
    let units_per_em = f32::from(face.units_per_em());
    (
        ppem_x * 64.0 / units_per_em,
        ppem_y * 64.0 / units_per_em,
    )
}

fn to_fixed(font_units: i32, scale: f32) -> i32 {
    (font_units as f32 * scale).round() as i32
}
