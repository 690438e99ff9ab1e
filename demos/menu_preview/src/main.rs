// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a mock menu under a text rendering profile and writes it to a PNG.
//!
//! Usage: `menu_preview [family/pointSize/antialiasing/hintStyle/subpixelOrder] [output.png]`

use std::error::Error;
use std::path::PathBuf;

use glyph_preview::backends::SystemCompositor;
use glyph_preview::PreviewParameters;
use image::codecs::png::PngEncoder;
use image::imageops;
use image::{Rgb, RgbImage};

const DEFAULT_ID: &str = "sans-serif/10/2/3/2";
const LABELS: [&str; 4] = ["Open Recent…", "Save As…", "Preferences", "Quit"];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let id = args.next().unwrap_or_else(|| DEFAULT_ID.into());
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("menu_preview.png"));
    let params: PreviewParameters = id.parse()?;
    println!("{params}");

    let background = Rgb([246, 245, 244]);
    let foreground = Rgb([46, 52, 54]);
    let padding = 8_u32;
    let spacing = 4_u32;

    let mut compositor = SystemCompositor::system();
    let mut rows = Vec::with_capacity(LABELS.len());
    for label in LABELS {
        let canvas = compositor.render(
            label,
            &params.font_family,
            params.point_size,
            &params.options,
            background,
            foreground,
        )?;
        log::info!("{label:?}: {}x{}", canvas.width(), canvas.height());
        rows.push(canvas.into_image());
    }

    let width = rows.iter().map(RgbImage::width).max().unwrap_or(0) + 2 * padding;
    let height = rows.iter().map(|row| row.height() + spacing).sum::<u32>() + 2 * padding;
    let mut menu = RgbImage::from_pixel(width, height, background);
    let mut y = padding;
    for row in &rows {
        imageops::overlay(&mut menu, row, i64::from(padding), i64::from(y));
        y += row.height() + spacing;
    }

    let output_file = std::fs::File::create(&output_path)?;
    menu.write_with_encoder(PngEncoder::new(output_file))?;
    log::info!("wrote {}", output_path.display());
    Ok(())
}
