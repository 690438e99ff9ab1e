// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fontique::Blob;

use crate::{Dpi, FontFace};

const HEAD_OFFSET: usize = 12 + 16;
const HEAD_LEN: usize = 54;

/// The smallest font file the loader accepts: a table directory with a
/// single `head` table declaring `units_per_em`.
pub(crate) fn minimal_font(units_per_em: u16) -> Vec<u8> {
    let mut data = Vec::with_capacity(HEAD_OFFSET + HEAD_LEN);
    // Table directory.
    data.extend_from_slice(&0x0001_0000_u32.to_be_bytes());
    data.extend_from_slice(&1_u16.to_be_bytes()); // numTables
    data.extend_from_slice(&16_u16.to_be_bytes()); // searchRange
    data.extend_from_slice(&0_u16.to_be_bytes()); // entrySelector
    data.extend_from_slice(&0_u16.to_be_bytes()); // rangeShift
    // Table record.
    data.extend_from_slice(b"head");
    data.extend_from_slice(&0_u32.to_be_bytes()); // checksum
    data.extend_from_slice(&(HEAD_OFFSET as u32).to_be_bytes());
    data.extend_from_slice(&(HEAD_LEN as u32).to_be_bytes());
    // head
    let mut head = [0_u8; HEAD_LEN];
    head[0..2].copy_from_slice(&1_u16.to_be_bytes());
    head[12..16].copy_from_slice(&0x5F0F_3CF5_u32.to_be_bytes());
    head[18..20].copy_from_slice(&units_per_em.to_be_bytes());
    data.extend_from_slice(&head);
    data
}

/// A face over [`minimal_font`] at 12pt and 96 dpi, so 16 pixels per em.
pub(crate) fn test_face() -> FontFace {
    FontFace::from_data(Blob::from(minimal_font(1000)), 0, 12.0, Dpi::default())
        .expect("minimal font should load")
}
