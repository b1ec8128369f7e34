// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulation configuration and partial settings updates.

use alloc::string::String;

/// Full simulation configuration.
///
/// Color fields are opaque style strings (solid colors or CSS-like gradient
/// descriptions); when `None`, the corresponding [`Palette`][crate::Palette]
/// color is used instead, so a theme change keeps showing through until a
/// caller explicitly overrides it.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of particles. Changing this discards and respawns the whole
    /// particle set; particle identity is not preserved across count changes.
    pub particle_count: usize,
    /// Maximum connection-line distance, also reused as the half-extent of
    /// the per-particle neighbor query range.
    pub max_distance: f64,
    /// Pointer interaction radius.
    pub mouse_radius: f64,
    /// Particle fill override. `None` means use the theme palette.
    pub main_color: Option<String>,
    /// Interaction highlight fill override. `None` means use the theme palette.
    pub interaction_color: Option<String>,
    /// Seed for the particle spawn RNG. Hosts that want varied runs can seed
    /// from any entropy they have; tests keep the default for determinism.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 150,
            max_distance: 80.0,
            mouse_radius: 80.0,
            main_color: None,
            interaction_color: None,
            seed: 0,
        }
    }
}

/// A partial settings update; every field is independently optional.
///
/// Unrecognized or out-of-range values never reach the simulation: zero or
/// negative counts, distances, and radii are ignored during
/// [`merge_into`][Self::merge_into]. An empty update is a strict no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsUpdate {
    /// New particle count (must be > 0 to take effect).
    pub particle_count: Option<usize>,
    /// New max connection distance (must be > 0).
    pub max_distance: Option<f64>,
    /// New pointer interaction radius (must be > 0).
    pub mouse_radius: Option<f64>,
    /// New particle fill style string.
    pub main_color: Option<String>,
    /// New interaction highlight style string.
    pub interaction_color: Option<String>,
}

impl SettingsUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this update carries no recognized keys at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `config`, returning `true` if the particle count changed
    /// (the caller must then re-initialize the particle set).
    pub(crate) fn merge_into(self, config: &mut Config) -> bool {
        let mut count_changed = false;
        if let Some(n) = self.particle_count
            && n > 0
            && n != config.particle_count
        {
            config.particle_count = n;
            count_changed = true;
        }
        if let Some(d) = self.max_distance
            && d > 0.0
        {
            config.max_distance = d;
        }
        if let Some(r) = self.mouse_radius
            && r > 0.0
        {
            config.mouse_radius = r;
        }
        if let Some(c) = self.main_color {
            config.main_color = Some(c);
        }
        if let Some(c) = self.interaction_color {
            config.interaction_color = Some(c);
        }
        count_changed
    }
}
