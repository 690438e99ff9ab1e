// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating and loading fonts.

use std::path::Path;
use std::sync::Arc;

use fontique::Blob;
use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, MetadataProvider};

use crate::error::Error;
use crate::options::Dpi;

/// Where the data of a resolved font lives.
#[derive(Clone)]
pub enum FontSource {
    /// A font file on disk.
    Path {
        /// Location of the file.
        path: Arc<Path>,
        /// Index of the face within a collection file.
        index: u32,
    },
    /// Font data already in memory.
    Memory {
        /// The complete font file.
        data: Blob<u8>,
        /// Index of the face within a collection file.
        index: u32,
    },
}

impl core::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Path { path, index } => write!(f, "Path({}, {index})", path.display()),
            Self::Memory { data, index } => write!(f, "Memory([{} bytes], {index})", data.len()),
        }
    }
}

/// Resolves a font specifier such as a family name to a font.
pub trait FontLocator {
    /// Finds the font best matching `specifier`.
    ///
    /// Fails with [`ErrorKind::FontNotFound`](crate::ErrorKind::FontNotFound).
    fn resolve(&mut self, specifier: &str) -> Result<FontSource, Error>;
}

impl<T: FontLocator + ?Sized> FontLocator for &mut T {
    fn resolve(&mut self, specifier: &str) -> Result<FontSource, Error> {
        (**self).resolve(specifier)
    }
}

/// A validated font at a specific size.
#[derive(Clone)]
pub struct FontFace {
    data: Blob<u8>,
    index: u32,
    point_size: f32,
    ppem: (f32, f32),
    units_per_em: u16,
}

impl FontFace {
    /// Reads and validates the font from `source`, sized to `point_size` at `dpi`.
    ///
    /// Fails with [`ErrorKind::FontLoadFailure`](crate::ErrorKind::FontLoadFailure)
    /// if the file cannot be read or is not a font.
    pub fn load(source: &FontSource, point_size: f32, dpi: Dpi) -> Result<Self, Error> {
        let (data, index) = match source {
            FontSource::Path { path, index } => {
                let bytes = std::fs::read(path).map_err(|err| {
                    Error::font_load_failure(format!("{}: {err}", path.display()))
                })?;
                (Blob::from(bytes), *index)
            }
            FontSource::Memory { data, index } => (data.clone(), *index),
        };
        Self::from_data(data, index, point_size, dpi)
    }

    /// Validates in-memory font data, sized to `point_size` at `dpi`.
    pub fn from_data(data: Blob<u8>, index: u32, point_size: f32, dpi: Dpi) -> Result<Self, Error> {
        let font = FontRef::from_index(data.as_ref(), index)
            .map_err(|err| Error::font_load_failure(format!("face {index}: {err}")))?;
        let units_per_em = font
            .metrics(Size::unscaled(), LocationRef::default())
            .units_per_em;
        if units_per_em == 0 {
            return Err(Error::font_load_failure(format!(
                "face {index}: zero units per em"
            )));
        }
        let ppem = dpi.ppem(point_size);
        log::debug!("loaded face {index} at {point_size}pt, {ppem:?} ppem");
        Ok(Self {
            data,
            index,
            point_size,
            ppem,
            units_per_em,
        })
    }

    /// The complete font file.
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Index of the face within a collection file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Size in typographic points.
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Horizontal and vertical pixels per em.
    pub fn ppem(&self) -> (f32, f32) {
        self.ppem
    }

    /// Design units per em from the font header.
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }
}

impl core::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontFace")
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .field("index", &self.index)
            .field("point_size", &self.point_size)
            .field("ppem", &self.ppem)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}
