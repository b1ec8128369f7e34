// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless run of the particle animation with a recording surface.
//!
//! This example shows how to embed `plexus_anim` in a host:
//! - implement `Surface` over your drawing API (here: a draw-call recorder),
//! - implement `Environment` over your frame scheduler (here: a counter),
//! - drive the loop yourself, feeding pointer events and timestamps.
//!
//! Run:
//! - `cargo run -p plexus_demos --example headless_run`

use kurbo::Point;
use plexus_anim::{
    Animation, Config, Environment, Error, FrameRequest, Paint, Palette, Registry,
    SettingsUpdate, Surface,
};

/// Records what each frame would have drawn.
#[derive(Debug, Default)]
struct RecordingSurface {
    circles: usize,
    lines: usize,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.circles = 0;
        self.lines = 0;
    }

    fn set_glow(&mut self, _color: &str, _blur: f64) {}

    fn fill_circle(&mut self, _center: Point, _radius: f64, _paint: &Paint<'_>, _alpha: f64) {
        self.circles += 1;
    }

    fn stroke_line(&mut self, _from: Point, _to: Point, _color: &str, _alpha: f64, _width: f64) {
        self.lines += 1;
    }
}

/// A frame scheduler that just hands out sequential ids; the demo loop plays
/// the role of the display, firing each request immediately.
#[derive(Debug, Default)]
struct HeadlessHost {
    next: u64,
}

impl Environment for HeadlessHost {
    type Surface = RecordingSurface;

    fn acquire_surface(&mut self) -> Result<Self::Surface, Error> {
        Ok(RecordingSurface::default())
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next += 1;
        FrameRequest::new(self.next)
    }

    fn cancel_frame(&mut self, _request: FrameRequest) {}
}

fn main() -> Result<(), Error> {
    // A host-wide registry: applications with several animations consult it
    // before dispatching frames (reduced motion, background tabs).
    let mut registry = Registry::new();
    let id = registry.register();

    let config = Config {
        particle_count: 60,
        seed: 7,
        ..Config::default()
    };
    let mut anim = Animation::new(HeadlessHost::default(), config, Palette::default(), 640.0, 480.0)?;
    anim.start();

    // Simulate 120 frames at ~60fps, with the pointer arriving mid-run.
    let mut now: u64 = 0;
    for frame in 0..120u64 {
        match frame {
            30 => anim.pointer_moved(Point::new(320.0, 240.0)),
            60 => anim.pointer_down(Point::new(320.0, 240.0)),
            90 => {
                anim.pointer_up();
                anim.pointer_left();
            }
            _ => {}
        }
        if registry.is_enabled(id) {
            anim.on_frame(now);
        }
        if frame % 30 == 29 {
            let interacting = anim.particles().iter().filter(|p| p.interacting).count();
            println!(
                "frame {:3}: {} circles, {} lines, {} highlighted",
                frame + 1,
                anim.surface().circles,
                anim.surface().lines,
                interacting,
            );
        }
        now += 16;
    }

    // Settings can change mid-run; a count change respawns the set.
    anim.update_settings(SettingsUpdate {
        particle_count: Some(90),
        main_color: Some("linear-gradient(135deg, #667eea, #764ba2)".to_string()),
        ..SettingsUpdate::default()
    });
    anim.on_frame(now);
    println!(
        "after settings update: {} circles, {} lines",
        anim.surface().circles,
        anim.surface().lines,
    );

    anim.stop();
    registry.unregister(id);
    Ok(())
}
