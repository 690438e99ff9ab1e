// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    AntiAliasing, HintStyle, Hinting, LoadFlags, RasterDirective, RenderMode, RenderOptions,
    SubpixelOrder,
};

fn options(
    antialiasing: AntiAliasing,
    hinting: Hinting,
    hint_style: HintStyle,
    subpixel_order: SubpixelOrder,
) -> RenderOptions {
    RenderOptions {
        antialiasing,
        hinting,
        hint_style,
        subpixel_order,
        ..Default::default()
    }
}

const HINT_STYLES: [HintStyle; 5] = [
    HintStyle::NotSet,
    HintStyle::None,
    HintStyle::Slight,
    HintStyle::Medium,
    HintStyle::Full,
];

const SUBPIXEL_ORDERS: [SubpixelOrder; 6] = [
    SubpixelOrder::NotSet,
    SubpixelOrder::None,
    SubpixelOrder::Rgb,
    SubpixelOrder::Bgr,
    SubpixelOrder::Vrgb,
    SubpixelOrder::Vbgr,
];

#[test]
fn aliased_text_is_monochrome() {
    for hint_style in HINT_STYLES {
        for subpixel_order in SUBPIXEL_ORDERS {
            let directive = RasterDirective::from_options(&options(
                AntiAliasing::Disabled,
                Hinting::Enabled,
                hint_style,
                subpixel_order,
            ));
            assert_eq!(
                directive.render_mode,
                RenderMode::Mono,
                "{hint_style:?} {subpixel_order:?}"
            );
            assert!(directive.load_flags.contains(LoadFlags::MONOCHROME), "monochrome load");
            assert!(
                !directive.load_flags.contains(LoadFlags::NO_BITMAP),
                "bitmap strikes are allowed for aliased text"
            );
        }
    }
}

#[test]
fn aliased_text_hints_for_mono_unless_hinting_is_off() {
    let hinted = RasterDirective::from_options(&options(
        AntiAliasing::Disabled,
        Hinting::Enabled,
        HintStyle::Full,
        SubpixelOrder::Rgb,
    ));
    assert_eq!(hinted.load_flags, LoadFlags::MONOCHROME | LoadFlags::TARGET_MONO, "mono target");
    assert!(hinted.hinted(), "mono target is hinted");

    let hinting_off = RasterDirective::from_options(&options(
        AntiAliasing::Disabled,
        Hinting::Disabled,
        HintStyle::Full,
        SubpixelOrder::Rgb,
    ));
    assert_eq!(
        hinting_off.load_flags,
        LoadFlags::MONOCHROME | LoadFlags::NO_HINTING,
        "hinting disabled"
    );
    assert!(!hinting_off.hinted(), "no hinting");

    let style_none = RasterDirective::from_options(&options(
        AntiAliasing::Disabled,
        Hinting::Enabled,
        HintStyle::None,
        SubpixelOrder::None,
    ));
    assert_eq!(
        style_none.load_flags,
        LoadFlags::MONOCHROME | LoadFlags::NO_HINTING,
        "hint style none"
    );
}

#[test]
fn antialiased_text_ignores_bitmap_strikes() {
    for antialiasing in [AntiAliasing::Enabled, AntiAliasing::NotSet] {
        for hint_style in HINT_STYLES {
            for subpixel_order in SUBPIXEL_ORDERS {
                let directive = RasterDirective::from_options(&options(
                    antialiasing,
                    Hinting::Enabled,
                    hint_style,
                    subpixel_order,
                ));
                assert!(
                    directive.load_flags.contains(LoadFlags::NO_BITMAP),
                    "bitmap strikes ignored"
                );
                assert!(!directive.load_flags.contains(LoadFlags::MONOCHROME), "coverage output");
                assert_ne!(directive.render_mode, RenderMode::Mono, "coverage output");
            }
        }
    }
}

#[test]
fn hint_style_selects_target() {
    let cases = [
        (HintStyle::NotSet, SubpixelOrder::Rgb, LoadFlags::NO_HINTING),
        (HintStyle::None, SubpixelOrder::Rgb, LoadFlags::NO_HINTING),
        (HintStyle::Slight, SubpixelOrder::Rgb, LoadFlags::TARGET_LIGHT),
        (HintStyle::Medium, SubpixelOrder::Vbgr, LoadFlags::TARGET_LIGHT),
        (HintStyle::Full, SubpixelOrder::NotSet, LoadFlags::TARGET_NORMAL),
        (HintStyle::Full, SubpixelOrder::None, LoadFlags::TARGET_NORMAL),
        (HintStyle::Full, SubpixelOrder::Rgb, LoadFlags::TARGET_LCD),
        (HintStyle::Full, SubpixelOrder::Bgr, LoadFlags::TARGET_LCD),
        (HintStyle::Full, SubpixelOrder::Vrgb, LoadFlags::TARGET_LCD_V),
        (HintStyle::Full, SubpixelOrder::Vbgr, LoadFlags::TARGET_LCD_V),
    ];
    for (hint_style, subpixel_order, target) in cases {
        let directive = RasterDirective::from_options(&options(
            AntiAliasing::Enabled,
            Hinting::Enabled,
            hint_style,
            subpixel_order,
        ));
        assert_eq!(
            directive.load_flags,
            LoadFlags::NO_BITMAP | target,
            "{hint_style:?} {subpixel_order:?}"
        );
    }
}

#[test]
fn subpixel_order_selects_render_mode() {
    let cases = [
        (SubpixelOrder::NotSet, RenderMode::Gray),
        (SubpixelOrder::None, RenderMode::Gray),
        (SubpixelOrder::Rgb, RenderMode::LcdH),
        (SubpixelOrder::Bgr, RenderMode::LcdH),
        (SubpixelOrder::Vrgb, RenderMode::LcdV),
        (SubpixelOrder::Vbgr, RenderMode::LcdV),
    ];
    for hint_style in HINT_STYLES {
        for (subpixel_order, mode) in cases {
            let directive = RasterDirective::from_options(&options(
                AntiAliasing::Enabled,
                Hinting::Enabled,
                hint_style,
                subpixel_order,
            ));
            assert_eq!(directive.render_mode, mode, "{hint_style:?} {subpixel_order:?}");
        }
    }
}

#[test]
fn translation_is_pure() {
    let profile = options(
        AntiAliasing::Enabled,
        Hinting::Enabled,
        HintStyle::Slight,
        SubpixelOrder::Vrgb,
    );
    let first = RasterDirective::from_options(&profile);
    let second = RasterDirective::from_options(&profile);
    assert_eq!(first, second, "same profile, same directive");
}

#[test]
fn default_profile_is_unhinted_grayscale() {
    let directive = RasterDirective::from_options(&RenderOptions::default());
    assert_eq!(directive.render_mode, RenderMode::Gray, "grayscale by default");
    assert_eq!(
        directive.load_flags,
        LoadFlags::NO_BITMAP | LoadFlags::NO_HINTING,
        "unhinted by default"
    );
}
