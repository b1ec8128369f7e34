// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Particle state and per-frame integration.

use kurbo::{Point, Vec2};
use rand::Rng;
use rand::rngs::SmallRng;

/// Largest per-axis magnitude of a freshly spawned particle's velocity.
const MAX_SPAWN_SPEED: f64 = 0.2;

/// One particle of the animation.
///
/// Mutated every frame (velocity update, position integration, boundary
/// wrap, interaction expiry) and destroyed en masse on re-initialization;
/// nothing outside [`Animation`][crate::Animation] holds onto one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Current position.
    pub pos: Point,
    /// Current velocity, in surface units per frame.
    pub vel: Vec2,
    /// Velocity the particle relaxes back toward when undisturbed.
    pub base_vel: Vec2,
    /// Render radius.
    pub size: f64,
    /// Render opacity.
    pub alpha: f64,
    /// Whether the particle is currently highlighted by pointer contact.
    pub interacting: bool,
    /// When the highlight expires, if armed. Re-armed wholesale on repeated
    /// contact, so there is never more than one live expiry per particle.
    pub interaction_expires_at: Option<u64>,
}

impl Particle {
    /// Spawn a particle at a random position within `width` x `height`, with
    /// a small random drift velocity and a size in `[1, 3)`.
    pub(crate) fn spawn(rng: &mut SmallRng, width: f64, height: f64) -> Self {
        let vel = Vec2::new(
            rng.gen_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED),
            rng.gen_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED),
        );
        Self {
            pos: Point::new(
                rng.gen_range(0.0..width.max(f64::MIN_POSITIVE)),
                rng.gen_range(0.0..height.max(f64::MIN_POSITIVE)),
            ),
            vel,
            base_vel: vel,
            size: rng.gen_range(1.0..3.0),
            alpha: 1.0,
            interacting: false,
            interaction_expires_at: None,
        }
    }

    /// Advance position by one frame's velocity.
    #[inline]
    pub(crate) fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Toroidal boundary wrap: a particle leaving one edge (by more than its
    /// own radius) reappears just outside the opposite edge.
    ///
    /// The left/top checks are inclusive and the right/bottom checks strict,
    /// so a particle resting exactly on a wrap target never oscillates: a
    /// right-edge exit lands at `-size`, wraps once more to `width + size`,
    /// and stays.
    pub(crate) fn wrap(&mut self, width: f64, height: f64) {
        if self.pos.x + self.size <= 0.0 {
            self.pos.x = width + self.size;
        } else if self.pos.x - self.size > width {
            self.pos.x = -self.size;
        }
        if self.pos.y + self.size <= 0.0 {
            self.pos.y = height + self.size;
        } else if self.pos.y - self.size > height {
            self.pos.y = -self.size;
        }
    }

    /// Relax velocity a fraction of the way back toward the base drift.
    /// Exponential decay toward resting motion rather than an instant snap.
    #[inline]
    pub(crate) fn relax(&mut self, factor: f64) {
        self.vel += (self.base_vel - self.vel) * factor;
    }

    /// Clear the interaction highlight if its expiry has passed.
    pub(crate) fn expire_interaction(&mut self, now_ms: u64) {
        if let Some(at) = self.interaction_expires_at
            && now_ms >= at
        {
            self.interacting = false;
            self.interaction_expires_at = None;
        }
    }

    /// Mark the particle interacting and (re)arm the highlight expiry.
    #[inline]
    pub(crate) fn touch(&mut self, expires_at_ms: u64) {
        self.interacting = true;
        self.interaction_expires_at = Some(expires_at_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn still(x: f64, y: f64, size: f64) -> Particle {
        Particle {
            pos: Point::new(x, y),
            vel: Vec2::ZERO,
            base_vel: Vec2::ZERO,
            size,
            alpha: 1.0,
            interacting: false,
            interaction_expires_at: None,
        }
    }

    #[test]
    fn spawn_is_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let p = Particle::spawn(&mut rng, 640.0, 480.0);
            assert!((0.0..640.0).contains(&p.pos.x));
            assert!((0.0..480.0).contains(&p.pos.y));
            assert!((1.0..3.0).contains(&p.size));
            assert!(p.vel.x.abs() <= 0.2 && p.vel.y.abs() <= 0.2);
            assert_eq!(p.vel, p.base_vel);
        }
    }

    #[test]
    fn wrap_at_exactly_minus_size() {
        let mut p = still(-2.0, 50.0, 2.0);
        p.wrap(100.0, 100.0);
        assert_eq!(p.pos.x, 102.0);
    }

    #[test]
    fn repeated_wrap_at_rest_is_a_noop() {
        let mut p = still(-2.0, 50.0, 2.0);
        p.wrap(100.0, 100.0);
        let settled = p.pos;
        for _ in 0..10 {
            p.wrap(100.0, 100.0);
        }
        assert_eq!(p.pos, settled);
    }

    #[test]
    fn right_edge_exit_settles_after_two_wraps() {
        let mut p = still(103.0, 50.0, 2.0);
        p.wrap(100.0, 100.0);
        assert_eq!(p.pos.x, -2.0);
        p.wrap(100.0, 100.0);
        assert_eq!(p.pos.x, 102.0);
        p.wrap(100.0, 100.0);
        assert_eq!(p.pos.x, 102.0);
    }

    #[test]
    fn interior_particle_never_wraps() {
        let mut p = still(50.0, 50.0, 3.0);
        p.wrap(100.0, 100.0);
        assert_eq!(p.pos, Point::new(50.0, 50.0));
    }

    #[test]
    fn relax_converges_to_base_velocity() {
        let mut p = still(0.0, 0.0, 1.0);
        p.base_vel = Vec2::new(0.1, -0.05);
        p.vel = Vec2::new(4.0, -3.0);
        // 0.95^m shrinks the initial offset below 1e-6 within 400 frames.
        for _ in 0..400 {
            p.relax(0.05);
        }
        assert!((p.vel - p.base_vel).hypot() < 1e-6);
    }

    #[test]
    fn expiry_rearm_replaces_rather_than_stacks() {
        let mut p = still(0.0, 0.0, 1.0);
        p.touch(1250);
        p.touch(1400); // re-touch before expiry
        p.expire_interaction(1300);
        assert!(p.interacting, "earlier expiry must have been replaced");
        p.expire_interaction(1400);
        assert!(!p.interacting);
        assert_eq!(p.interaction_expires_at, None);
    }
}
