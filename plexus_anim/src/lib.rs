// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plexus Anim: an interactive particle-network background animation.
//!
//! A set of drifting particles is rendered over a 2D surface, with
//! connection lines between nearby pairs and pointer-driven forces: hovering
//! repels particles, pressing attracts them, and touched particles light up
//! in a highlight color for a short while. Neighbor lookups go through a
//! point quadtree ([`plexus_quadtree`]) rebuilt on a fixed frame cadence.
//!
//! The crate is sans-IO. [`Animation`] never touches a real canvas, clock,
//! or event loop; hosts implement [`Surface`] over their drawing API and
//! [`Environment`] over their frame scheduler, feed input events to the
//! `pointer_*` methods, and pass timestamps (milliseconds) into
//! [`Animation::on_frame`]. That keeps the whole simulation deterministic
//! and testable without a display.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use plexus_anim::{
//!     Animation, Config, Environment, Error, FrameRequest, Paint, Palette, Surface,
//! };
//!
//! // A host that counts draw calls instead of drawing.
//! #[derive(Default)]
//! struct CountingSurface {
//!     circles: usize,
//! }
//!
//! impl Surface for CountingSurface {
//!     fn clear(&mut self, _width: f64, _height: f64) {}
//!     fn set_glow(&mut self, _color: &str, _blur: f64) {}
//!     fn fill_circle(&mut self, _center: Point, _radius: f64, _paint: &Paint<'_>, _alpha: f64) {
//!         self.circles += 1;
//!     }
//!     fn stroke_line(&mut self, _from: Point, _to: Point, _color: &str, _alpha: f64, _width: f64) {}
//! }
//!
//! #[derive(Default)]
//! struct Host {
//!     next_frame: u64,
//! }
//!
//! impl Environment for Host {
//!     type Surface = CountingSurface;
//!
//!     fn acquire_surface(&mut self) -> Result<Self::Surface, Error> {
//!         Ok(CountingSurface::default())
//!     }
//!
//!     fn request_frame(&mut self) -> FrameRequest {
//!         self.next_frame += 1;
//!         FrameRequest::new(self.next_frame)
//!     }
//!
//!     fn cancel_frame(&mut self, _request: FrameRequest) {}
//! }
//!
//! let config = Config {
//!     particle_count: 40,
//!     ..Config::default()
//! };
//! let mut anim = Animation::new(Host::default(), config, Palette::default(), 640.0, 480.0)?;
//! anim.start();
//!
//! // The host calls this whenever its requested frame fires.
//! anim.on_frame(16);
//! assert_eq!(anim.surface().circles, 40);
//! anim.stop();
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: standard-library float math.
//! - `libm`: float math via `libm`, for `no_std` targets. Enable exactly one
//!   of `std` or `libm`.

#![no_std]

extern crate alloc;

mod anim;
mod color;
mod config;
mod error;
mod palette;
mod particle;
mod pointer;
mod registry;
mod surface;
mod timer;

pub use anim::Animation;
pub use color::{ColorStop, GradientStops, gradient_stops, is_gradient};
pub use config::{Config, SettingsUpdate};
pub use error::Error;
pub use palette::Palette;
pub use particle::Particle;
pub use pointer::PointerState;
pub use registry::{AnimationId, Registry};
pub use surface::{Environment, FrameRequest, Paint, Surface};
pub use timer::Deadline;
