// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancelable timestamp deadlines.
//!
//! This crate never reads a clock: hosts pass the current time (milliseconds,
//! `u64`) into every entry point that needs one, and delayed actions are
//! modeled as [`Deadline`] values checked against that time. Re-arming a
//! deadline replaces the previous one, which is exactly the
//! cancel-before-reschedule discipline a callback timer would need, without
//! any possibility of two live timers targeting the same state.

/// A single cancelable scheduled action.
///
/// ```
/// use plexus_anim::Deadline;
///
/// let mut d = Deadline::new();
/// d.arm(1100);
/// assert!(!d.fire(1050)); // not yet
/// d.arm(1300); // re-arm replaces, never stacks
/// assert!(!d.fire(1100));
/// assert!(d.fire(1300)); // due, and now disarmed
/// assert!(!d.fire(2000));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<u64>,
}

impl Deadline {
    /// A disarmed deadline.
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Arm (or re-arm) the deadline to fire at `at_ms`.
    pub fn arm(&mut self, at_ms: u64) {
        self.at = Some(at_ms);
    }

    /// Cancel without firing.
    pub fn cancel(&mut self) {
        self.at = None;
    }

    /// Whether the deadline is armed.
    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Fire if due: returns `true` and disarms when `now_ms` has reached the
    /// armed time, `false` otherwise (including when disarmed).
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.at {
            Some(at) if now_ms >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}
