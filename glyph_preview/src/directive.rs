// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of a rendering profile into rasterizer directives.

use bitflags::bitflags;

use crate::options::{AntiAliasing, HintStyle, Hinting, RenderOptions, SubpixelOrder};

bitflags! {
    /// How a glyph is loaded before it is rasterized.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LoadFlags: u16 {
        /// Use the outline as designed, without grid fitting.
        const NO_HINTING = 1 << 0;
        /// Ignore embedded bitmap strikes.
        const NO_BITMAP = 1 << 1;
        /// Produce one bit per pixel.
        const MONOCHROME = 1 << 2;
        /// Hint for grayscale rendering in both directions.
        const TARGET_NORMAL = 1 << 3;
        /// Hint vertically only.
        const TARGET_LIGHT = 1 << 4;
        /// Hint for bilevel output.
        const TARGET_MONO = 1 << 5;
        /// Hint for horizontal sub-pixel output.
        const TARGET_LCD = 1 << 6;
        /// Hint for vertical sub-pixel output.
        const TARGET_LCD_V = 1 << 7;
    }
}

/// The pixel format a glyph is rasterized into.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// One bit per pixel.
    Mono,
    /// One coverage byte per pixel.
    #[default]
    Gray,
    /// Three coverage bytes per pixel, side by side.
    LcdH,
    /// Three coverage bytes per pixel, stacked in consecutive rows.
    LcdV,
}

/// Instructions for the rasterizer derived from [`RenderOptions`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RasterDirective {
    /// Glyph loading behavior.
    pub load_flags: LoadFlags,
    /// Output pixel format.
    pub render_mode: RenderMode,
}

impl RasterDirective {
    /// Derives the directive for a rendering profile.
    ///
    /// ```
    /// use glyph_preview::{AntiAliasing, LoadFlags, RasterDirective, RenderMode, RenderOptions};
    ///
    /// let options = RenderOptions {
    ///     antialiasing: AntiAliasing::Disabled,
    ///     ..Default::default()
    /// };
    /// let directive = RasterDirective::from_options(&options);
    /// assert_eq!(directive.render_mode, RenderMode::Mono);
    /// assert!(directive.load_flags.contains(LoadFlags::MONOCHROME));
    /// ```
    pub fn from_options(options: &RenderOptions) -> Self {
        let mut load_flags = LoadFlags::empty();

        if options.antialiasing == AntiAliasing::Disabled {
            load_flags |= LoadFlags::MONOCHROME;
            if options.hinting == Hinting::Disabled || options.hint_style == HintStyle::None {
                load_flags |= LoadFlags::NO_HINTING;
            } else {
                load_flags |= LoadFlags::TARGET_MONO;
            }
            return Self {
                load_flags,
                render_mode: RenderMode::Mono,
            };
        }

        // Embedded bitmap strikes are never used for antialiased text.
        load_flags |= LoadFlags::NO_BITMAP;
        load_flags |= match options.hint_style {
            HintStyle::NotSet | HintStyle::None => LoadFlags::NO_HINTING,
            HintStyle::Slight | HintStyle::Medium => LoadFlags::TARGET_LIGHT,
            HintStyle::Full => match options.subpixel_order {
                SubpixelOrder::NotSet | SubpixelOrder::None => LoadFlags::TARGET_NORMAL,
                SubpixelOrder::Rgb | SubpixelOrder::Bgr => LoadFlags::TARGET_LCD,
                SubpixelOrder::Vrgb | SubpixelOrder::Vbgr => LoadFlags::TARGET_LCD_V,
            },
        };
        let render_mode = match options.subpixel_order {
            SubpixelOrder::Rgb | SubpixelOrder::Bgr => RenderMode::LcdH,
            SubpixelOrder::Vrgb | SubpixelOrder::Vbgr => RenderMode::LcdV,
            SubpixelOrder::NotSet | SubpixelOrder::None => RenderMode::Gray,
        };
        Self {
            load_flags,
            render_mode,
        }
    }

    /// Whether the rasterizer should apply any grid fitting.
    pub fn hinted(&self) -> bool {
        !self.load_flags.contains(LoadFlags::NO_HINTING)
    }
}
