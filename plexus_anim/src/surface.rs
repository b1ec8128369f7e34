// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration seams: the drawing surface and the frame scheduler.
//!
//! The simulation is sans-IO. It never touches a real canvas, window, or
//! event loop; hosts implement [`Surface`] over whatever 2D drawing API they
//! have (an HTML canvas context, a `tiny-skia` pixmap, a test recorder) and
//! [`Environment`] over their frame-scheduling primitive ("call me before
//! the next repaint"). Everything the simulation draws goes through the
//! handful of primitives below.

use kurbo::Point;

use crate::color::GradientStops;
use crate::error::Error;

/// Fill style for a particle.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint<'a> {
    /// A solid style string.
    Solid(&'a str),
    /// A small radial gradient centered on the particle, with the given
    /// stops (2 or 3).
    Radial(&'a GradientStops),
}

/// Handle for one requested animation frame.
///
/// Returned by [`Environment::request_frame`] and passed back to
/// [`Environment::cancel_frame`] when the animation stops with a frame still
/// pending. The meaning of the inner id is entirely the host's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    /// Wrap a host-chosen request id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-chosen request id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A 2D drawing surface.
///
/// One frame is: one [`clear`][Self::clear], any number of
/// [`fill_circle`][Self::fill_circle] and [`stroke_line`][Self::stroke_line]
/// calls. The glow set via [`set_glow`][Self::set_glow] applies to circle
/// fills until changed.
pub trait Surface {
    /// Clear the whole surface region.
    fn clear(&mut self, width: f64, height: f64);

    /// Set the soft shadow/glow applied to subsequent circle fills.
    fn set_glow(&mut self, color: &str, blur: f64);

    /// Fill a circle at `center` with the given paint and opacity.
    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint<'_>, alpha: f64);

    /// Stroke a line from `from` to `to` in `color` at the given opacity.
    fn stroke_line(&mut self, from: Point, to: Point, color: &str, alpha: f64, width: f64);
}

/// The host environment an [`Animation`][crate::Animation] runs inside.
///
/// Implementations own surface acquisition and display-refresh-paced frame
/// scheduling. When a requested frame fires, the host calls
/// [`Animation::on_frame`][crate::Animation::on_frame] with the current
/// timestamp; the animation re-requests at the end of each frame, so cadence
/// follows the host's refresh rate and pauses whenever the host stops
/// dispatching.
pub trait Environment {
    /// The surface type this environment draws to.
    type Surface: Surface;

    /// Acquire the drawing surface. Called once, at animation construction;
    /// failure is the component's only fatal error.
    fn acquire_surface(&mut self) -> Result<Self::Surface, Error>;

    /// Ask the host to invoke the animation before the next repaint.
    fn request_frame(&mut self) -> FrameRequest;

    /// Cancel a previously requested frame that has not fired yet.
    fn cancel_frame(&mut self, request: FrameRequest);
}
