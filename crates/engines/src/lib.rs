#![deny(unsafe_code)]
//! Engine registry, recipe runner and CPU-side rendering.
//!
//! Sits between `abyss-core` (the `Engine` and `Surface` traits) and the
//! engine crates (`abyss-plankton`). The CLI depends on this crate so name
//! lookup and recipe playback live in one place.

pub mod pixel;
pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use abyss_core::error::EngineError;
use abyss_core::surface::Surface;
use abyss_core::{Engine, FrameLoop, Recipe};
use abyss_plankton::ParticleField;
use serde_json::Value;

pub use raster::Raster;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &[abyss_plankton::NAME];

/// Every engine the registry can build.
///
/// Use [`EngineKind::from_name`] for string-based construction.
pub enum EngineKind {
    /// Drifting plankton with burst-spawned creatures.
    Plankton(ParticleField),
}

impl EngineKind {
    /// Constructs an engine by name for a `width` x `height` surface.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            abyss_plankton::NAME => Ok(EngineKind::Plankton(ParticleField::from_json(
                width as f64,
                height as f64,
                seed,
                params,
            )?)),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl Engine for EngineKind {
    fn tick(&mut self, surface: &mut dyn Surface) {
        match self {
            EngineKind::Plankton(e) => e.tick(surface),
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        match self {
            EngineKind::Plankton(e) => e.resize(width, height),
        }
    }

    fn add_burst(&mut self, units: u32) {
        match self {
            EngineKind::Plankton(e) => e.add_burst(units),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Plankton(e) => Engine::params(e),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Plankton(e) => e.param_schema(),
        }
    }
}

/// Plays a recipe onto `surface`: builds the engine, then for each frame
/// injects that frame's bursts and ticks once.
///
/// The surface is resized to the recipe dimensions first. The returned loop
/// has run `recipe.frames` frames and can be stopped to take the surface back.
pub fn play<S: Surface>(
    recipe: &Recipe,
    mut surface: S,
) -> Result<FrameLoop<EngineKind, S>, EngineError> {
    recipe.validate()?;
    let engine = EngineKind::from_name(
        &recipe.engine,
        recipe.width,
        recipe.height,
        recipe.seed,
        &recipe.params,
    )?;
    surface.resize(recipe.width, recipe.height);
    let mut frames = FrameLoop::start(engine, surface);
    for frame in 0..recipe.frames {
        let units = recipe.bursts_at(frame);
        if units > 0 {
            log::debug!("frame {frame}: burst of {units}");
            frames.add_burst(units);
        }
        frames.frame();
    }
    Ok(frames)
}
