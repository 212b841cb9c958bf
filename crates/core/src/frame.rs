//! Explicit start/stop lifecycle around an engine and the surface it draws on.
//!
//! [`FrameLoop`] is what a host owns between mount and teardown. The host's
//! scheduler (a `requestAnimationFrame` callback, an offline render loop)
//! calls [`FrameLoop::frame`] once per display frame. [`FrameLoop::stop`]
//! consumes the loop and hands the surface back, so no tick can follow it.

use crate::engine::Engine;
use crate::surface::Surface;

/// An engine bound to a surface, ticking once per [`frame`](FrameLoop::frame).
pub struct FrameLoop<E, S> {
    engine: E,
    surface: S,
    frames: u64,
}

impl<E: Engine, S: Surface> FrameLoop<E, S> {
    /// Binds `engine` to `surface` and syncs the engine bounds to the surface size.
    pub fn start(mut engine: E, surface: S) -> Self {
        let (width, height) = surface.size();
        engine.resize(width as f64, height as f64);
        log::info!("frame loop started on {width}x{height} surface");
        Self {
            engine,
            surface,
            frames: 0,
        }
    }

    /// Runs one tick.
    pub fn frame(&mut self) {
        self.engine.tick(&mut self.surface);
        self.frames += 1;
    }

    /// Runs `count` ticks back to back.
    pub fn run(&mut self, count: u64) {
        for _ in 0..count {
            self.frame();
        }
    }

    /// Resizes the surface and the engine bounds together.
    pub fn resize(&mut self, width: usize, height: usize) {
        log::debug!("resize to {width}x{height}");
        self.surface.resize(width, height);
        self.engine.resize(width as f64, height as f64);
    }

    pub fn add_burst(&mut self, units: u32) {
        self.engine.add_burst(units);
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Ends the loop and releases the surface.
    pub fn stop(self) -> S {
        log::info!("frame loop stopped after {} frames", self.frames);
        self.surface
    }
}
