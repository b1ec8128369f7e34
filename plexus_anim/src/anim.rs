// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animation controller: lifecycle, per-frame stepping, rendering.

use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use plexus_quadtree::{Entry, Quadtree, Region};

use crate::color::{GradientStops, gradient_stops, is_gradient};
use crate::config::{Config, SettingsUpdate};
use crate::error::Error;
use crate::palette::Palette;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::{Environment, FrameRequest, Paint, Surface};
use crate::timer::Deadline;

/// Frames between full spatial-index rebuilds. Particles move little enough
/// per frame that queries against a slightly stale index are acceptable.
const REBUILD_INTERVAL: u64 = 10;
/// How long the interaction highlight lingers after the last pointer contact.
const INTERACTION_EXPIRY_MS: u64 = 250;
/// Quiet period after the last resize event before re-initializing.
const RESIZE_DEBOUNCE_MS: u64 = 100;

/// Force coefficient and per-frame damping while the pointer attracts.
/// The heavier damping keeps an actively pulled particle from accelerating
/// without bound.
const ATTRACT_STRENGTH: f64 = 4.0;
const ATTRACT_DAMPING: f64 = 0.95;
/// Force coefficient and damping for the resting (repelling) mode.
const REPEL_STRENGTH: f64 = 1.5;
const REPEL_DAMPING: f64 = 0.98;
/// Fraction of the way velocity relaxes toward base drift per undisturbed frame.
const RELAX_FACTOR: f64 = 0.05;

const LINE_WIDTH: f64 = 1.0;
const LINE_ALPHA_SCALE: f64 = 0.5;
const GLOW_BLUR: f64 = 8.0;

bitflags! {
    /// Work deferred to the start of the next frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Dirty: u8 {
        /// The spatial index no longer matches the particle set.
        const REBUILD = 1 << 0;
        /// The cached particle paint no longer matches config/palette.
        const PAINT = 1 << 1;
    }
}

/// The particle-network animation.
///
/// Owns the particle set, the spatial index snapshot, pointer state, and the
/// drawing surface acquired from the environment at construction. The host
/// drives it: wire input events to the `pointer_*` methods, resize events to
/// [`resized`][Self::resized], theme changes to
/// [`set_palette`][Self::set_palette], and invoke
/// [`on_frame`][Self::on_frame] whenever a frame requested through the
/// [`Environment`] fires. All timestamps are milliseconds on whatever
/// monotonic-enough clock the host already has.
///
/// `start` and `stop` are idempotent; at most one frame request is ever
/// outstanding. After `stop` returns, the animation holds no pending frame,
/// no armed deadline, and no particles, so repeated start/stop cycles (for
/// example navigating in and out of a view) leak nothing. Detaching the
/// input listeners feeding the `pointer_*` methods is the host's half of the
/// teardown contract.
pub struct Animation<E: Environment> {
    env: E,
    surface: E::Surface,
    config: Config,
    palette: Palette,
    width: f64,
    height: f64,
    rng: SmallRng,
    particles: Vec<Particle>,
    index: Quadtree<usize>,
    pointer: PointerState,
    frame: u64,
    /// The single outstanding frame request; `Some` means running.
    pending: Option<FrameRequest>,
    resize_debounce: Deadline,
    pending_size: Option<(f64, f64)>,
    /// Cached gradient stops when the effective particle color is a gradient.
    main_stops: Option<GradientStops>,
    dirty: Dirty,
    // Scratch buffers reused across queries within and across frames.
    neighbors: Vec<Entry<usize>>,
    influenced: Vec<bool>,
}

impl<E: Environment> Animation<E> {
    /// Create an animation over a `width` x `height` surface region.
    ///
    /// Acquires the drawing surface from `env`; this is the only fallible
    /// step in the component's life. Particles are not spawned until
    /// [`start`][Self::start].
    pub fn new(
        mut env: E,
        config: Config,
        palette: Palette,
        width: f64,
        height: f64,
    ) -> Result<Self, Error> {
        let surface = env.acquire_surface()?;
        let rng = SmallRng::seed_from_u64(config.seed);
        let mut anim = Self {
            env,
            surface,
            config,
            palette,
            width,
            height,
            rng,
            particles: Vec::new(),
            index: Quadtree::new(canvas_region(width, height)),
            pointer: PointerState::new(),
            frame: 0,
            pending: None,
            resize_debounce: Deadline::new(),
            pending_size: None,
            main_stops: None,
            dirty: Dirty::empty(),
            neighbors: Vec::new(),
            influenced: Vec::new(),
        };
        anim.refresh_paint();
        Ok(anim)
    }

    /// Begin animating. Spawns the particle set if empty and requests the
    /// first frame. A no-op while already running: a second `start` never
    /// double-schedules.
    pub fn start(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if let Some((w, h)) = self.pending_size.take() {
            self.resize_debounce.cancel();
            self.width = w;
            self.height = h;
            self.particles.clear();
        }
        if self.particles.is_empty() {
            self.reinit();
        }
        self.pending = Some(self.env.request_frame());
    }

    /// Stop animating and release everything this component owns: the
    /// pending frame request is canceled, the resize deadline cleared, and
    /// the particle list (with every interaction expiry in it) dropped.
    /// Idempotent.
    pub fn stop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.env.cancel_frame(request);
        }
        self.resize_debounce.cancel();
        self.pending_size = None;
        self.pointer = PointerState::new();
        self.particles.clear();
        self.index = Quadtree::new(canvas_region(self.width, self.height));
        self.frame = 0;
    }

    /// Whether a frame is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance and render one frame.
    ///
    /// Hosts call this when the frame requested via [`Environment`] fires.
    /// Ignored (not an error) if the animation was stopped after the request
    /// went out and the host delivered the callback anyway.
    pub fn on_frame(&mut self, now_ms: u64) {
        if self.pending.take().is_none() {
            return;
        }

        if self.resize_debounce.fire(now_ms)
            && let Some((w, h)) = self.pending_size.take()
        {
            self.width = w;
            self.height = h;
            self.reinit();
        }

        self.surface.clear(self.width, self.height);

        if self.frame % REBUILD_INTERVAL == 0 || self.dirty.contains(Dirty::REBUILD) {
            self.rebuild_index();
            self.dirty.remove(Dirty::REBUILD);
        }
        if self.dirty.contains(Dirty::PAINT) {
            self.refresh_paint();
            self.dirty.remove(Dirty::PAINT);
        }

        self.mark_influenced();
        self.surface.set_glow(&self.palette.glow, GLOW_BLUR);
        for i in 0..self.particles.len() {
            self.step_particle(i, now_ms);
        }
        self.draw_connections();

        self.frame += 1;
        self.pending = Some(self.env.request_frame());
    }

    /// Apply a partial settings update.
    ///
    /// An empty update changes nothing. A particle-count change respawns the
    /// particle set immediately; every other key takes effect on the next
    /// frame without re-initialization.
    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if update.is_empty() {
            return;
        }
        let count_changed = update.merge_into(&mut self.config);
        self.dirty.insert(Dirty::PAINT);
        if count_changed {
            self.reinit();
        }
    }

    /// Re-sample theme colors. Hosts call this from their style-change
    /// signal (for example a root-element attribute observer).
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.dirty.insert(Dirty::PAINT);
    }

    /// Record a surface resize. Re-initialization is debounced: it happens
    /// on the first frame at least [`RESIZE_DEBOUNCE_MS`] after the last
    /// resize event, and a burst of events re-arms the single deadline
    /// rather than stacking timers.
    pub fn resized(&mut self, width: f64, height: f64, now_ms: u64) {
        self.pending_size = Some((width, height));
        self.resize_debounce.arm(now_ms + RESIZE_DEBOUNCE_MS);
    }

    /// Interaction start (press or touch) at a surface-relative position.
    pub fn pointer_down(&mut self, position: Point) {
        self.pointer.on_down(position);
    }

    /// Pointer moved to a surface-relative position.
    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer.on_move(position);
    }

    /// Interaction end; the pointer keeps hovering (repelling mode).
    pub fn pointer_up(&mut self) {
        self.pointer.on_up();
    }

    /// Pointer left the surface.
    pub fn pointer_left(&mut self) {
        self.pointer.on_leave();
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current theme palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current pointer state.
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// The live particle set (empty while stopped).
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The current spatial-index snapshot.
    pub fn index(&self) -> &Quadtree<usize> {
        &self.index
    }

    /// Current surface region size.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Frames advanced since the last (re-)initialization.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// The environment, e.g. for host bookkeeping.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The drawing surface.
    pub fn surface(&self) -> &E::Surface {
        &self.surface
    }

    /// Discard and respawn the particle set at the current size.
    fn reinit(&mut self) {
        let count = self.config.particle_count;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(&mut self.rng, self.width, self.height));
        }
        self.frame = 0;
        self.dirty.insert(Dirty::REBUILD);
    }

    /// Rebuild the spatial index from current particle positions. The old
    /// tree is discarded wholesale; particles wrapped to within one radius
    /// outside the canvas fall outside the boundary and are silently absent
    /// until they drift back in.
    fn rebuild_index(&mut self) {
        let mut tree = Quadtree::new(canvas_region(self.width, self.height));
        for (i, p) in self.particles.iter().enumerate() {
            let _ = tree.insert(p.pos.x, p.pos.y, i);
        }
        self.index = tree;
    }

    fn refresh_paint(&mut self) {
        let main = self
            .config
            .main_color
            .as_deref()
            .unwrap_or(&self.palette.particle);
        self.main_stops = if is_gradient(main) {
            Some(gradient_stops(main))
        } else {
            None
        };
    }

    /// Flag the particles inside the pointer's query range. This is a coarse
    /// pre-filter; exact circular distance is re-checked per particle.
    fn mark_influenced(&mut self) {
        self.influenced.clear();
        self.influenced.resize(self.particles.len(), false);
        let Some(center) = self.pointer.position else {
            return;
        };
        let r = self.config.mouse_radius;
        self.neighbors.clear();
        self.index
            .query_into(&Region::new(center.x, center.y, r, r), &mut self.neighbors);
        for e in &self.neighbors {
            if let Some(slot) = self.influenced.get_mut(e.payload) {
                *slot = true;
            }
        }
    }

    /// Velocity update, render, integrate, wrap for one particle.
    fn step_particle(&mut self, i: usize, now_ms: u64) {
        let mut p = self.particles[i];
        p.expire_interaction(now_ms);

        let radius = self.config.mouse_radius;
        let mut under_influence = false;
        if self.influenced[i]
            && let Some(center) = self.pointer.position
        {
            let delta = p.pos - center;
            let dist = delta.hypot();
            if dist > 0.0 && dist < radius {
                let away = delta / dist;
                let force = (radius - dist) / radius;
                if self.pointer.attracting {
                    p.vel -= away * (force * ATTRACT_STRENGTH);
                    p.vel *= ATTRACT_DAMPING;
                } else {
                    p.vel += away * (force * REPEL_STRENGTH);
                    p.vel *= REPEL_DAMPING;
                }
                p.touch(now_ms + INTERACTION_EXPIRY_MS);
                under_influence = true;
            }
        }
        if !under_influence {
            p.relax(RELAX_FACTOR);
        }

        self.render_particle(&p);
        p.integrate();
        p.wrap(self.width, self.height);
        self.particles[i] = p;
    }

    fn render_particle(&mut self, p: &Particle) {
        let paint = if p.interacting {
            Paint::Solid(
                self.config
                    .interaction_color
                    .as_deref()
                    .unwrap_or(&self.palette.interaction),
            )
        } else if let Some(stops) = &self.main_stops {
            Paint::Radial(stops)
        } else {
            Paint::Solid(
                self.config
                    .main_color
                    .as_deref()
                    .unwrap_or(&self.palette.particle),
            )
        };
        self.surface.fill_circle(p.pos, p.size, &paint, p.alpha);
    }

    /// Draw a line between every pair of particles closer than the max
    /// connection distance, each unordered pair once.
    fn draw_connections(&mut self) {
        let max_d = self.config.max_distance;
        for i in 0..self.particles.len() {
            let p = self.particles[i];
            self.neighbors.clear();
            self.index.query_into(
                &Region::new(p.pos.x, p.pos.y, max_d, max_d),
                &mut self.neighbors,
            );
            for e in &self.neighbors {
                let j = e.payload;
                if j == i {
                    continue;
                }
                let Some(q) = self.particles.get(j) else {
                    continue;
                };
                // Mirror-pair suppression: of the two orderings of a pair,
                // only the one with the left-most first particle draws.
                if p.pos.x > q.pos.x {
                    continue;
                }
                let dist = p.pos.distance(q.pos);
                if dist < max_d {
                    let alpha = (1.0 - dist / max_d) * LINE_ALPHA_SCALE;
                    self.surface
                        .stroke_line(p.pos, q.pos, &self.palette.line, alpha, LINE_WIDTH);
                }
            }
        }
    }
}

impl<E: Environment + core::fmt::Debug> core::fmt::Debug for Animation<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Animation")
            .field("size", &(self.width, self.height))
            .field("particles", &self.particles.len())
            .field("frame", &self.frame)
            .field("running", &self.is_running())
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

/// The index boundary: the canvas rect as a center/half-extent region.
fn canvas_region(width: f64, height: f64) -> Region {
    Region::new(0.5 * width, 0.5 * height, 0.5 * width, 0.5 * height)
}
