// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme-sourced colors.

use alloc::string::{String, ToString};

/// The animation's theme palette.
///
/// Hosts sample these from whatever styling system they embed the animation
/// in (CSS custom properties, a theme object, hardcoded constants) and
/// re-supply the whole struct via
/// [`Animation::set_palette`][crate::Animation::set_palette] whenever the
/// theme changes. The simulation itself never watches for style mutations;
/// that signal belongs to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Default particle fill (solid color or gradient description).
    pub particle: String,
    /// Fill for particles currently under pointer interaction.
    pub interaction: String,
    /// Base color for connection lines (alpha is applied per line).
    pub line: String,
    /// Soft shadow/glow color applied to particle fills.
    pub glow: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            particle: "#8b8b9e".to_string(),
            interaction: "#c4b5fd".to_string(),
            line: "#8b8b9e".to_string(),
            glow: "#8b5cf6".to_string(),
        }
    }
}
