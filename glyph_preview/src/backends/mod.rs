// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator implementations built on `fontique`, `harfrust` and `swash`.

mod fontique_locator;
mod harfrust_shaper;
mod swash_rasterizer;

pub use fontique_locator::FontiqueLocator;
pub use harfrust_shaper::HarfrustShaper;
pub use swash_rasterizer::SwashRasterizer;

use crate::compositor::TextCompositor;

/// A compositor wired to the default backends.
pub type SystemCompositor = TextCompositor<FontiqueLocator, HarfrustShaper, SwashRasterizer>;

#[cfg(feature = "system")]
impl SystemCompositor {
    /// Creates a compositor that resolves fonts from the system font collection.
    pub fn system() -> Self {
        Self::new(
            FontiqueLocator::new(),
            HarfrustShaper::new(),
            SwashRasterizer::new(),
        )
    }
}
