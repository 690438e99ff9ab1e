// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Preview renders a string into an RGB image under a text rendering
//! quality profile, so that antialiasing, hinting and sub-pixel settings can be
//! inspected before they are applied system wide.
//!
//! The pipeline is:
//!
//! 1. [`RasterDirective::from_options`] turns [`RenderOptions`] into load flags
//!    and a [`RenderMode`] for the rasterizer.
//! 2. [`GlyphRun::shape_and_rasterize`] shapes the text with a
//!    [`ShapingEngine`], rasterizes each glyph with a [`RasterEngine`] and
//!    decodes the result into a [`GlyphBitmap`].
//! 3. [`TextCompositor::render`] sizes a [`Canvas`] from the run's bounding box
//!    and paints each glyph at its rounded pen position.
//!
//! Default collaborators built on `fontique`, `harfrust` and `swash` live in
//! [`backends`].
//!
//! ## Features
//!
//! - `system` (enabled by default): Discover system fonts with `fontique`.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bitmap;
mod canvas;
mod compositor;
mod directive;
mod error;
mod font;
mod options;
mod run;

pub mod backends;

#[cfg(test)]
mod tests;

pub use bitmap::{Bitmap, GlyphBitmap, PixelEncoding, RasterOutput};
pub use canvas::{Canvas, Color};
pub use compositor::{TextCompositor, composite};
pub use directive::{LoadFlags, RasterDirective, RenderMode};
pub use error::{Error, ErrorKind};
pub use font::{FontFace, FontLocator, FontSource};
pub use options::{
    AntiAliasing, Dpi, HintStyle, Hinting, ParseOptionsError, ParseOptionsErrorKind,
    PreviewParameters, RenderOptions, SubpixelOrder,
};
pub use run::{GlyphRun, PositionedGlyph, RasterEngine, ShapedGlyph, ShapingEngine};

pub use fontique;
pub use image;
