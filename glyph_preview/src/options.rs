// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text rendering quality profiles.
//!
//! These mirror the settings a desktop exposes for font rendering: whether
//! glyphs are antialiased, how strongly outlines are hinted and in which order
//! the sub-pixels of the display are laid out.

use core::fmt;
use core::str::FromStr;

/// Whether glyph edges are smoothed with partial coverage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AntiAliasing {
    /// No explicit preference. Treated like [`AntiAliasing::Enabled`].
    #[default]
    NotSet,
    /// Glyphs are rendered with one bit per pixel.
    Disabled,
    /// Glyphs are rendered with coverage values.
    Enabled,
}

impl AntiAliasing {
    /// Parses a state name (`enabled`, `disabled`) or a numeric code
    /// (`0` not set, `1` disabled, `2` enabled).
    ///
    /// ```
    /// use glyph_preview::AntiAliasing;
    ///
    /// assert_eq!(AntiAliasing::parse("enabled"), Some(AntiAliasing::Enabled));
    /// assert_eq!(AntiAliasing::parse("1"), Some(AntiAliasing::Disabled));
    /// assert_eq!(AntiAliasing::parse("sometimes"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "0" => Self::NotSet,
            "disabled" | "1" => Self::Disabled,
            "enabled" | "2" => Self::Enabled,
            _ => return None,
        })
    }
}

impl fmt::Display for AntiAliasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enabled => "enabled",
            Self::NotSet | Self::Disabled => "disabled",
        })
    }
}

/// Whether outlines are adjusted to the pixel grid at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Hinting {
    /// Outlines are used as designed.
    Disabled,
    /// Outlines are fitted to the pixel grid according to [`HintStyle`].
    #[default]
    Enabled,
}

impl Hinting {
    /// Parses `enabled` or `disabled`.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "disabled" => Self::Disabled,
            "enabled" => Self::Enabled,
            _ => return None,
        })
    }
}

impl fmt::Display for Hinting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
        })
    }
}

/// How aggressively outlines are fitted to the pixel grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HintStyle {
    /// No explicit preference. Treated like [`HintStyle::None`].
    #[default]
    NotSet,
    /// No grid fitting.
    None,
    /// Vertical-only fitting.
    Slight,
    /// Same as [`HintStyle::Slight`] for the rasterizer.
    Medium,
    /// Full grid fitting in both directions.
    Full,
}

impl HintStyle {
    /// Parses a style name (`none`, `slight`, `medium`, `full`) or a numeric code
    /// (`0` not set, `1` none, `2` slight, `3` medium, `4` full).
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "0" => Self::NotSet,
            "none" | "1" => Self::None,
            "slight" | "2" => Self::Slight,
            "medium" | "3" => Self::Medium,
            "full" | "4" => Self::Full,
            _ => return None,
        })
    }
}

impl fmt::Display for HintStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotSet | Self::None => "none",
            Self::Slight => "slight",
            Self::Medium => "medium",
            Self::Full => "full",
        })
    }
}

/// Physical layout of the colored sub-elements of a display pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubpixelOrder {
    /// No explicit preference. Treated like [`SubpixelOrder::None`].
    #[default]
    NotSet,
    /// No sub-pixel rendering.
    None,
    /// Horizontal stripes, red on the left.
    Rgb,
    /// Horizontal stripes, blue on the left.
    Bgr,
    /// Vertical stripes, red on top.
    Vrgb,
    /// Vertical stripes, blue on top.
    Vbgr,
}

impl SubpixelOrder {
    /// Parses an order name (`none`, `rgb`, `bgr`, `vrgb`, `vbgr`) or a numeric code
    /// (`0` not set, `1` none, `2` rgb, `3` bgr, `4` vrgb, `5` vbgr).
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "0" => Self::NotSet,
            "none" | "1" => Self::None,
            "rgb" | "2" => Self::Rgb,
            "bgr" | "3" => Self::Bgr,
            "vrgb" | "4" => Self::Vrgb,
            "vbgr" | "5" => Self::Vbgr,
            _ => return None,
        })
    }

    /// Whether blue comes first, so red and blue samples trade places.
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::Bgr | Self::Vbgr)
    }
}

impl fmt::Display for SubpixelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotSet | Self::None => "none",
            Self::Rgb => "rgb",
            Self::Bgr => "bgr",
            Self::Vrgb => "vrgb",
            Self::Vbgr => "vbgr",
        })
    }
}

/// Resolution of the target display in dots per inch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dpi {
    /// Horizontal resolution.
    pub horizontal: u32,
    /// Vertical resolution.
    pub vertical: u32,
}

impl Dpi {
    /// Typographic points per inch.
    pub const POINTS_PER_INCH: f32 = 72.0;

    /// The same resolution on both axes.
    pub const fn uniform(dpi: u32) -> Self {
        Self {
            horizontal: dpi,
            vertical: dpi,
        }
    }

    /// Converts a size in typographic points to pixels per em on each axis.
    pub fn ppem(self, point_size: f32) -> (f32, f32) {
        (
            point_size * self.horizontal as f32 / Self::POINTS_PER_INCH,
            point_size * self.vertical as f32 / Self::POINTS_PER_INCH,
        )
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Self::uniform(96)
    }
}

/// A complete text rendering quality profile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Antialiasing on or off.
    pub antialiasing: AntiAliasing,
    /// Hinting on or off.
    pub hinting: Hinting,
    /// Strength of hinting when it is enabled.
    pub hint_style: HintStyle,
    /// Sub-pixel layout of the display.
    pub subpixel_order: SubpixelOrder,
    /// Display resolution.
    pub dpi: Dpi,
}

impl RenderOptions {
    /// Hint style name when hinting is enabled, `disabled` otherwise.
    pub fn unified_hinting_state(&self) -> String {
        match self.hinting {
            Hinting::Enabled => self.hint_style.to_string(),
            Hinting::Disabled => self.hinting.to_string(),
        }
    }
}

/// Kinds of errors that can occur when parsing [`PreviewParameters`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseOptionsErrorKind {
    /// The id does not have exactly five `/`-separated fields.
    InvalidFieldCount,
    /// The point size is not a positive finite number.
    InvalidPointSize,
    /// One of the option fields is not a known name or code.
    InvalidValue,
}

/// Error returned when parsing [`PreviewParameters`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptionsError {
    kind: ParseOptionsErrorKind,
    field: usize,
}

impl ParseOptionsError {
    const fn new(kind: ParseOptionsErrorKind, field: usize) -> Self {
        Self { kind, field }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseOptionsErrorKind {
        self.kind
    }

    /// Returns the index of the offending `/`-separated field.
    pub const fn field(self) -> usize {
        self.field
    }
}

impl fmt::Display for ParseOptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseOptionsErrorKind::InvalidFieldCount => "expected 5 fields, found",
            ParseOptionsErrorKind::InvalidPointSize => "invalid point size in field",
            ParseOptionsErrorKind::InvalidValue => "invalid option value in field",
        };
        write!(f, "{msg} {}", self.field)
    }
}

impl core::error::Error for ParseOptionsError {}

/// A font together with the rendering profile to preview it under.
///
/// Parsed from ids of the form `family/pointSize/antialiasing/hintStyle/subpixelOrder`,
/// for example `Noto Sans/10/2/3/2`.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewParameters {
    /// Font family to resolve.
    pub font_family: String,
    /// Size in typographic points.
    pub point_size: f32,
    /// Rendering profile.
    pub options: RenderOptions,
}

impl PreviewParameters {
    /// Uses the given display resolution instead of the default.
    pub fn with_dpi(mut self, dpi: Dpi) -> Self {
        self.options.dpi = dpi;
        self
    }
}

impl FromStr for PreviewParameters {
    type Err = ParseOptionsError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let fragments: Vec<&str> = id.split('/').collect();
        let [family, size, aa, hint_style, subpixel] = fragments[..] else {
            return Err(ParseOptionsError::new(
                ParseOptionsErrorKind::InvalidFieldCount,
                fragments.len(),
            ));
        };
        let point_size = size
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|size| size.is_finite() && *size > 0.0)
            .ok_or(ParseOptionsError::new(
                ParseOptionsErrorKind::InvalidPointSize,
                1,
            ))?;
        let invalid = |field| ParseOptionsError::new(ParseOptionsErrorKind::InvalidValue, field);
        let antialiasing = AntiAliasing::parse(aa).ok_or(invalid(2))?;
        let hint_style = HintStyle::parse(hint_style).ok_or(invalid(3))?;
        let subpixel_order = SubpixelOrder::parse(subpixel).ok_or(invalid(4))?;
        let hinting = if hint_style == HintStyle::None {
            Hinting::Disabled
        } else {
            Hinting::Enabled
        };
        Ok(Self {
            font_family: family.into(),
            point_size,
            options: RenderOptions {
                antialiasing,
                hinting,
                hint_style,
                subpixel_order,
                dpi: Dpi::default(),
            },
        })
    }
}

impl fmt::Display for PreviewParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Typeface:\t{} {}\nAnti-Aliasing:\t{}\nHinting Style:\t{}\nSub-Pixel Order:\t{}",
            self.font_family,
            self.point_size,
            self.options.antialiasing,
            self.options.hint_style,
            self.options.subpixel_order,
        )
    }
}
