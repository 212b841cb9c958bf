#![deny(unsafe_code)]
//! Underwater particle field.
//!
//! Two populations share one surface:
//! - **plankton**: a fixed set of specks drifting with a slow wobble and
//!   wrapping around the edges;
//! - **creatures**: short-lived swimmers that cross the surface horizontally,
//!   spawned one at a time while burst demand is pending.
//!
//! Burst demand is a plain counter. Each tick, if it is positive, one unit is
//! turned into a creature with probability `spawn_chance`.

pub mod creature;
pub mod params;
pub mod plankton;

use abyss_core::color::Rgba;
use abyss_core::error::EngineError;
use abyss_core::prng::{RandomSource, Xorshift64};
use abyss_core::surface::{Glow, Surface};
use abyss_core::Engine;
use glam::DVec2;
use serde_json::{json, Value};

pub use creature::Creature;
pub use params::FieldParams;
pub use plankton::Plankton;

/// Registry name of this engine.
pub const NAME: &str = "plankton";

/// Top and bottom of the background wash.
fn wash() -> (Rgba, Rgba) {
    (
        Rgba::from_rgb8(0, 30, 60, 0.25),
        Rgba::from_rgb8(0, 10, 25, 0.35),
    )
}

/// Surface dimensions clamped to at least one pixel.
fn clamp_bounds(width: f64, height: f64) -> DVec2 {
    DVec2::new(width.max(1.0), height.max(1.0))
}

/// The particle field engine.
///
/// Generic over its randomness so hosts and tests can inject a seeded or
/// scripted source.
pub struct ParticleField<R = Xorshift64> {
    params: FieldParams,
    rng: R,
    bounds: DVec2,
    plankton: Vec<Plankton>,
    creatures: Vec<Creature>,
    burst: u32,
    ticks: u64,
    spawned: u64,
}

impl ParticleField<Xorshift64> {
    /// Builds a seeded field from a JSON params object.
    ///
    /// Returns `EngineError::ParamTypeMismatch` if a known key has a
    /// non-numeric value.
    pub fn from_json(width: f64, height: f64, seed: u64, params: &Value) -> Result<Self, EngineError> {
        FieldParams::validate_json(params)?;
        Ok(Self::start(
            width,
            height,
            FieldParams::from_json(params),
            Xorshift64::new(seed),
        ))
    }
}

impl<R: RandomSource> ParticleField<R> {
    /// Creates the ambient population inside a `width` x `height` surface.
    pub fn start(width: f64, height: f64, params: FieldParams, mut rng: R) -> Self {
        let bounds = clamp_bounds(width, height);
        let plankton = (0..params.plankton_count)
            .map(|_| Plankton::spawn(&mut rng, bounds))
            .collect();
        log::info!(
            "particle field started: {} plankton on {}x{}",
            params.plankton_count,
            bounds.x,
            bounds.y
        );
        Self {
            params,
            rng,
            bounds,
            plankton,
            creatures: Vec::new(),
            burst: 0,
            ticks: 0,
            spawned: 0,
        }
    }

    /// Adds `units` to the pending burst demand.
    pub fn set_burst(&mut self, units: u32) {
        self.burst = self.burst.saturating_add(units);
    }

    /// Pending burst units.
    pub fn burst(&self) -> u32 {
        self.burst
    }

    pub fn field_params(&self) -> &FieldParams {
        &self.params
    }

    /// Wrap and spawn bounds in pixels, each at least 1.
    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    pub fn plankton(&self) -> &[Plankton] {
        &self.plankton
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Ticks run since start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Creatures spawned since start.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    fn drain_burst(&mut self) {
        if self.burst == 0 || !self.rng.chance(self.params.spawn_chance) {
            return;
        }
        let creature = Creature::spawn(
            &mut self.rng,
            self.spawned,
            self.bounds,
            self.params.creature_life,
        );
        self.burst -= 1;
        self.spawned += 1;
        log::debug!(
            "creature {} spawned heading {}, {} burst units left",
            creature.id,
            if creature.vx > 0.0 { "right" } else { "left" },
            self.burst
        );
        self.creatures.push(creature);
    }
}

impl<R: RandomSource> Engine for ParticleField<R> {
    fn tick(&mut self, surface: &mut dyn Surface) {
        let (top, bottom) = wash();
        surface.clear();
        surface.fill_vertical_gradient(top, bottom);

        let margin = self.params.wrap_margin;
        for p in &mut self.plankton {
            p.advance(self.bounds, margin);
            surface.fill_circle(p.pos, p.radius, p.color().to_rgba());
        }

        self.creatures.retain(Creature::is_alive);
        for c in &mut self.creatures {
            c.advance();
            let glow = Glow {
                blur: self.params.glow_blur,
                color: c.glow_color().to_rgba(),
            };
            surface.stroke_path(
                &c.trail(self.params.trail_segments),
                c.size,
                c.stroke_color().to_rgba(),
                Some(glow),
            );
        }

        self.drain_burst();
        self.ticks += 1;
        log::trace!(
            "tick {}: {} creatures, {} burst pending",
            self.ticks,
            self.creatures.len(),
            self.burst
        );
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.bounds = clamp_bounds(width, height);
    }

    fn add_burst(&mut self, units: u32) {
        self.set_burst(units);
    }

    fn params(&self) -> Value {
        self.params.to_json()
    }

    fn param_schema(&self) -> Value {
        let mut schema = FieldParams::schema();
        schema["_engine"] = json!(NAME);
        schema
    }
}
