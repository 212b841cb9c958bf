//! Reproducible description of an animation run.
//!
//! A [`Recipe`] names the engine, surface size, parameters, PRNG seed, the
//! number of frames to run and the burst events to inject along the way. The
//! same recipe fed to the same binary produces the same final frame.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Burst units injected just before a given frame is ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurstEvent {
    pub frame: u64,
    pub units: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "empty_object")]
    pub params: serde_json::Value,
    pub seed: u64,
    pub frames: u64,
    #[serde(default)]
    pub bursts: Vec<BurstEvent>,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Recipe {
    /// A recipe with empty params, zero frames and no bursts.
    pub fn new(engine: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: empty_object(),
            seed,
            frames: 0,
            bursts: Vec::new(),
        }
    }

    /// Checks dimensions, params shape and that every burst lands inside the run.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(EngineError::InvalidDimensions)?;
        if !self.params.is_object() {
            return Err(EngineError::InvalidRecipe(
                "params must be a JSON object".into(),
            ));
        }
        if let Some(late) = self.bursts.iter().find(|b| b.frame >= self.frames) {
            return Err(EngineError::InvalidRecipe(format!(
                "burst at frame {} is outside a {}-frame run",
                late.frame, self.frames
            )));
        }
        Ok(())
    }

    /// Total burst units injected at `frame`.
    pub fn bursts_at(&self, frame: u64) -> u32 {
        self.bursts
            .iter()
            .filter(|b| b.frame == frame)
            .fold(0u32, |acc, b| acc.saturating_add(b.units))
    }
}
