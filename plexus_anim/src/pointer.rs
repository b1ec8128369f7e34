// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input state.

use kurbo::Point;

/// Current pointer state, written by input-event entry points and read by
/// the frame loop.
///
/// Events replace fields wholesale, so the frame loop never observes a
/// half-updated position. `position == None` means no active pointer; the
/// interaction pass simply skips force application that frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Surface-relative pointer position, if a pointer is over the surface.
    pub position: Option<Point>,
    /// Whether an active press/touch is pulling particles inward. The
    /// resting mode (hover without press) repels instead.
    pub attracting: bool,
}

impl PointerState {
    /// No pointer, not attracting.
    pub const fn new() -> Self {
        Self {
            position: None,
            attracting: false,
        }
    }

    /// Interaction start (press or touch) at `position`.
    pub(crate) fn on_down(&mut self, position: Point) {
        *self = Self {
            position: Some(position),
            attracting: true,
        };
    }

    /// Pointer moved while over the surface.
    pub(crate) fn on_move(&mut self, position: Point) {
        self.position = Some(position);
    }

    /// Interaction end: back to the repelling hover mode, position kept.
    pub(crate) fn on_up(&mut self) {
        self.attracting = false;
    }

    /// Pointer left the surface entirely.
    pub(crate) fn on_leave(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_move_release_leave() {
        let mut pointer = PointerState::new();
        assert_eq!(pointer.position, None);

        pointer.on_down(Point::new(10.0, 20.0));
        assert!(pointer.attracting);

        pointer.on_move(Point::new(15.0, 25.0));
        assert_eq!(pointer.position, Some(Point::new(15.0, 25.0)));
        assert!(pointer.attracting, "moving must not end the press");

        pointer.on_up();
        assert!(!pointer.attracting);
        assert!(pointer.position.is_some(), "hover survives release");

        pointer.on_leave();
        assert_eq!(pointer, PointerState::new());
    }
}
