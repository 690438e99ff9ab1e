// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font resolution backed by a `fontique` collection.

use fontique::{Collection, CollectionOptions, FamilyInfo, GenericFamily, SourceKind};

use crate::error::Error;
use crate::font::{FontLocator, FontSource};

/// Resolves family names and generic families (`sans-serif`, `monospace`, …)
/// against a font collection.
pub struct FontiqueLocator {
    collection: Collection,
}

impl FontiqueLocator {
    /// Creates a locator over the system fonts when the `system` feature is enabled.
    pub fn new() -> Self {
        Self::from_collection(Collection::new(CollectionOptions {
            shared: false,
            system_fonts: cfg!(feature = "system"),
        }))
    }

    /// Creates a locator over a prepared collection, such as one with registered fonts.
    pub fn from_collection(collection: Collection) -> Self {
        Self { collection }
    }

    fn family(&mut self, name: &str) -> Option<FamilyInfo> {
        if let Some(family) = self.collection.family_by_name(name) {
            return Some(family);
        }
        let generic = GenericFamily::parse(name)?;
        let id = self.collection.generic_families(generic).next()?;
        self.collection.family(id)
    }
}

impl Default for FontiqueLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FontiqueLocator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontiqueLocator").finish_non_exhaustive()
    }
}

impl FontLocator for FontiqueLocator {
    fn resolve(&mut self, specifier: &str) -> Result<FontSource, Error> {
        let name = specifier.trim();
        let family = self
            .family(name)
            .ok_or_else(|| Error::font_not_found(specifier))?;
        let font = family
            .default_font()
            .ok_or_else(|| Error::font_not_found(specifier))?;
        let index = font.index();
        Ok(match &font.source().kind {
            SourceKind::Path(path) => FontSource::Path {
                path: path.clone(),
                index,
            },
            SourceKind::Memory(data) => FontSource::Memory {
                data: data.clone(),
                index,
            },
        })
    }
}
