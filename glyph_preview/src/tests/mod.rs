// Copyright 2026 the Glyph Preview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_directive;
mod utils;
