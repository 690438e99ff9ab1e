// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for rendering a text preview.
///
/// Carries a non-exhaustive [`ErrorKind`] plus a short description of the
/// input that caused it, such as the font specifier or the glyph id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// What the failing operation was working on.
    context: String,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable description of the offending input.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub(crate) fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }

    /// No font could be found for the given specifier.
    pub fn font_not_found(specifier: &str) -> Self {
        Self::new(ErrorKind::FontNotFound, specifier)
    }

    /// A font was found but could not be loaded.
    pub fn font_load_failure(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::FontLoadFailure, context)
    }

    /// The shaping engine was unable to process the text.
    pub fn shaping_failure(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::ShapingFailure, context)
    }

    pub(crate) fn unsupported_pixel_encoding(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedPixelEncoding, context)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let what = match self.kind {
            ErrorKind::FontNotFound => "no font found for",
            ErrorKind::FontLoadFailure => "failed to load font",
            ErrorKind::ShapingFailure => "failed to shape text with",
            ErrorKind::UnsupportedPixelEncoding => "unsupported pixel encoding for",
        };
        write!(f, "{what} {}", self.context)
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font specifier did not resolve to any font.
    FontNotFound,

    /// The resolved font could not be read or parsed.
    FontLoadFailure,

    /// The shaping engine failed to produce glyphs for the text.
    ShapingFailure,

    /// A rasterized glyph arrived in a pixel encoding that cannot be painted.
    ///
    /// This never aborts a render: the glyph is drawn empty instead.
    UnsupportedPixelEncoding,
}
