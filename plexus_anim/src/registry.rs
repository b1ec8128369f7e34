// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation-enable registry.
//!
//! Applications that embed several animations usually want one switch to
//! pause them all (reduced-motion settings, background tabs, battery saver).
//! Rather than a module-level mutable singleton, this is an explicit object:
//! hosts create one (or several, e.g. in tests), register each animation at
//! construction, consult [`Registry::is_enabled`] before dispatching a
//! frame, and unregister on teardown.

use hashbrown::HashSet;

/// Identifier handed out at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// Tracks registered animations and a shared enabled switch.
#[derive(Clone, Debug)]
pub struct Registry {
    next: u64,
    registered: HashSet<AnimationId>,
    enabled: bool,
}

impl Registry {
    /// New registry with animations enabled.
    pub fn new() -> Self {
        Self {
            next: 0,
            registered: HashSet::new(),
            enabled: true,
        }
    }

    /// Register an animation, returning its id.
    pub fn register(&mut self) -> AnimationId {
        let id = AnimationId(self.next);
        self.next += 1;
        self.registered.insert(id);
        id
    }

    /// Unregister an animation. Returns `false` if it was not registered
    /// (already unregistered ids are tolerated, matching idempotent
    /// lifecycle teardown).
    pub fn unregister(&mut self, id: AnimationId) -> bool {
        self.registered.remove(&id)
    }

    /// Whether `id` is currently registered.
    pub fn is_registered(&self, id: AnimationId) -> bool {
        self.registered.contains(&id)
    }

    /// Whether frames should be dispatched to `id` right now.
    pub fn is_enabled(&self, id: AnimationId) -> bool {
        self.enabled && self.registered.contains(&id)
    }

    /// Flip the global switch.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Number of registered animations.
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether no animations are registered.
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
