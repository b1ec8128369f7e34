// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The one hard failure this crate can report.

use core::fmt;

/// Errors surfaced to the host.
///
/// Everything else in this crate degrades gracefully: out-of-bounds index
/// inserts are dropped, unparseable gradient strings fall back to a default,
/// absent pointer coordinates skip force application. Only failing to get a
/// drawing surface at construction is fatal, because nothing can be rendered
/// without one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The environment could not provide a drawing surface.
    ///
    /// Callers must not go on to call [`Animation::start`][crate::Animation::start].
    SurfaceUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable => write!(f, "drawing surface unavailable"),
        }
    }
}

impl core::error::Error for Error {}
