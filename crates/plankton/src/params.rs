//! Tunable constants of the particle field.

use abyss_core::error::EngineError;
use abyss_core::params::{expect_number, param_f64_clamped, param_u32_clamped, param_usize_clamped};
use serde_json::{json, Value};

/// Ambient population created at start.
pub const DEFAULT_PLANKTON_COUNT: usize = 120;
/// Per-tick probability of turning one burst unit into a creature.
pub const DEFAULT_SPAWN_CHANCE: f64 = 0.1;
/// Creature lifetime in ticks.
pub const DEFAULT_CREATURE_LIFE: u32 = 600;
/// Distance past an edge before a plankton wraps to the opposite side.
pub const DEFAULT_WRAP_MARGIN: f64 = 10.0;
/// Points in a creature's trail, not counting the head.
pub const DEFAULT_TRAIL_SEGMENTS: usize = 6;
/// Glow radius around a creature trail.
pub const DEFAULT_GLOW_BLUR: f64 = 12.0;

const MAX_PLANKTON_COUNT: usize = 10_000;
const MIN_CREATURE_LIFE: u32 = 1;
const MAX_CREATURE_LIFE: u32 = 100_000;
const MAX_WRAP_MARGIN: f64 = 100.0;
const MAX_TRAIL_SEGMENTS: usize = 64;
const MAX_GLOW_BLUR: f64 = 64.0;

const KEYS: [&str; 6] = [
    "plankton_count",
    "spawn_chance",
    "creature_life",
    "wrap_margin",
    "trail_segments",
    "glow_blur",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub plankton_count: usize,
    pub spawn_chance: f64,
    pub creature_life: u32,
    pub wrap_margin: f64,
    pub trail_segments: usize,
    pub glow_blur: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            plankton_count: DEFAULT_PLANKTON_COUNT,
            spawn_chance: DEFAULT_SPAWN_CHANCE,
            creature_life: DEFAULT_CREATURE_LIFE,
            wrap_margin: DEFAULT_WRAP_MARGIN,
            trail_segments: DEFAULT_TRAIL_SEGMENTS,
            glow_blur: DEFAULT_GLOW_BLUR,
        }
    }
}

impl FieldParams {
    /// Reads parameters from a JSON object, falling back to defaults.
    ///
    /// Every value is clamped to the range [`schema`](Self::schema) advertises.
    pub fn from_json(params: &Value) -> Self {
        Self {
            plankton_count: param_usize_clamped(
                params,
                "plankton_count",
                DEFAULT_PLANKTON_COUNT,
                0,
                MAX_PLANKTON_COUNT,
            ),
            spawn_chance: param_f64_clamped(params, "spawn_chance", DEFAULT_SPAWN_CHANCE, 0.0, 1.0),
            creature_life: param_u32_clamped(
                params,
                "creature_life",
                DEFAULT_CREATURE_LIFE,
                MIN_CREATURE_LIFE,
                MAX_CREATURE_LIFE,
            ),
            wrap_margin: param_f64_clamped(
                params,
                "wrap_margin",
                DEFAULT_WRAP_MARGIN,
                0.0,
                MAX_WRAP_MARGIN,
            ),
            trail_segments: param_usize_clamped(
                params,
                "trail_segments",
                DEFAULT_TRAIL_SEGMENTS,
                0,
                MAX_TRAIL_SEGMENTS,
            ),
            glow_blur: param_f64_clamped(params, "glow_blur", DEFAULT_GLOW_BLUR, 0.0, MAX_GLOW_BLUR),
        }
    }

    /// Rejects known keys that carry a non-numeric value.
    ///
    /// Unknown keys are ignored.
    pub fn validate_json(params: &Value) -> Result<(), EngineError> {
        KEYS.iter().try_for_each(|key| expect_number(params, key))
    }

    pub fn to_json(&self) -> Value {
        json!({
            "plankton_count": self.plankton_count,
            "spawn_chance": self.spawn_chance,
            "creature_life": self.creature_life,
            "wrap_margin": self.wrap_margin,
            "trail_segments": self.trail_segments,
            "glow_blur": self.glow_blur,
        })
    }

    pub fn schema() -> Value {
        json!({
            "plankton_count": {
                "type": "integer",
                "default": DEFAULT_PLANKTON_COUNT,
                "min": 0,
                "max": MAX_PLANKTON_COUNT,
                "description": "Number of drifting plankton created at start"
            },
            "spawn_chance": {
                "type": "number",
                "default": DEFAULT_SPAWN_CHANCE,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-frame probability of spawning one creature while burst demand is pending"
            },
            "creature_life": {
                "type": "integer",
                "default": DEFAULT_CREATURE_LIFE,
                "min": MIN_CREATURE_LIFE,
                "max": MAX_CREATURE_LIFE,
                "description": "Frames a creature lives before it is removed"
            },
            "wrap_margin": {
                "type": "number",
                "default": DEFAULT_WRAP_MARGIN,
                "min": 0.0,
                "max": MAX_WRAP_MARGIN,
                "description": "Pixels past an edge before plankton re-enter on the opposite side"
            },
            "trail_segments": {
                "type": "integer",
                "default": DEFAULT_TRAIL_SEGMENTS,
                "min": 0,
                "max": MAX_TRAIL_SEGMENTS,
                "description": "Points in each creature trail behind the head"
            },
            "glow_blur": {
                "type": "number",
                "default": DEFAULT_GLOW_BLUR,
                "min": 0.0,
                "max": MAX_GLOW_BLUR,
                "description": "Glow radius around creature trails"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(FieldParams::from_json(&json!({})), FieldParams::default());
    }

    #[test]
    fn overrides_are_read() {
        let p = FieldParams::from_json(&json!({
            "plankton_count": 10,
            "spawn_chance": 1.0,
            "creature_life": 30,
        }));
        assert_eq!(p.plankton_count, 10);
        assert_eq!(p.spawn_chance, 1.0);
        assert_eq!(p.creature_life, 30);
        assert_eq!(p.wrap_margin, DEFAULT_WRAP_MARGIN);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let p = FieldParams::from_json(&json!({
            "spawn_chance": 3.0,
            "wrap_margin": -4.0,
            "glow_blur": -1.0,
            "creature_life": 0,
            "plankton_count": 50_000_000_u64,
            "trail_segments": 1_000_000,
        }));
        assert_eq!(p.spawn_chance, 1.0);
        assert_eq!(p.wrap_margin, 0.0);
        assert_eq!(p.glow_blur, 0.0);
        assert_eq!(p.creature_life, MIN_CREATURE_LIFE);
        assert_eq!(p.plankton_count, MAX_PLANKTON_COUNT);
        assert_eq!(p.trail_segments, MAX_TRAIL_SEGMENTS);

        let high = FieldParams::from_json(&json!({"wrap_margin": 1e6, "glow_blur": 1e6, "creature_life": u64::MAX}));
        assert_eq!(high.wrap_margin, MAX_WRAP_MARGIN);
        assert_eq!(high.glow_blur, MAX_GLOW_BLUR);
        assert_eq!(high.creature_life, MAX_CREATURE_LIFE);
    }

    #[test]
    fn schema_ranges_match_the_clamps() {
        let schema = FieldParams::schema();
        assert_eq!(schema["plankton_count"]["max"], MAX_PLANKTON_COUNT);
        assert_eq!(schema["creature_life"]["min"], MIN_CREATURE_LIFE);
        assert_eq!(schema["trail_segments"]["max"], MAX_TRAIL_SEGMENTS);
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let p = FieldParams {
            plankton_count: 7,
            spawn_chance: 0.5,
            creature_life: 42,
            wrap_margin: 3.0,
            trail_segments: 2,
            glow_blur: 4.0,
        };
        assert_eq!(FieldParams::from_json(&p.to_json()), p);
    }

    #[test]
    fn schema_covers_every_key() {
        let schema = FieldParams::schema();
        for key in KEYS {
            assert!(schema.get(key).is_some(), "schema missing {key}");
        }
    }

    #[test]
    fn validate_json_flags_strings() {
        assert!(FieldParams::validate_json(&json!({"spawn_chance": 0.2, "other": "x"})).is_ok());
        let err = FieldParams::validate_json(&json!({"creature_life": "long"})).unwrap_err();
        assert!(err.to_string().contains("creature_life"));
    }
}
