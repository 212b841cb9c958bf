//! Seedable randomness for entity construction.
//!
//! Engines draw every per-entity constant through [`RandomSource`] so a host
//! can inject its own stream (a seeded generator in tests, a fixed script in
//! scenario checks). [`Xorshift64`] is the default implementation: pure
//! integer arithmetic, so a given seed yields the same sequence on every
//! platform.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A stream of uniform samples in `[0, 1)`.
///
/// Only `next_f64` is required; the provided methods derive the shapes the
/// engines actually ask for.
pub trait RandomSource {
    /// Returns the next uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in `[min, max)`.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform angle in `[0, 2π)`.
    fn next_angle(&mut self) -> f64 {
        self.next_f64() * TAU
    }

    /// Uniform sample in `[-half_width, half_width)`.
    fn next_centered(&mut self, half_width: f64) -> f64 {
        (self.next_f64() - 0.5) * 2.0 * half_width
    }

    /// Bernoulli trial: `true` with probability `p`.
    ///
    /// `p >= 1` always succeeds and `p <= 0` never does, regardless of the
    /// sample drawn. One sample is consumed either way.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Xorshift64 deterministic PRNG (shifts 13, 7, 17).
///
/// A zero seed is replaced by a fixed non-zero fallback, since zero is the
/// generator's fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of the next state over 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of samples, cycling when exhausted.
    struct Script {
        samples: Vec<f64>,
        at: usize,
    }

    impl RandomSource for Script {
        fn next_f64(&mut self) -> f64 {
            let v = self.samples[self.at % self.samples.len()];
            self.at += 1;
            v
        }
    }

    #[test]
    fn golden_value_for_seed_42() {
        // Changing this breaks every recipe recorded with a seed.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn zero_seed_uses_fallback() {
        let mut zero = Xorshift64::new(0);
        let mut fallback = Xorshift64::new(Xorshift64::FALLBACK_SEED);
        assert_ne!(zero.next_u64(), 0);
        zero = Xorshift64::new(0);
        assert_eq!(zero.next_u64(), fallback.next_u64());
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = Xorshift64::new(2024);
        let mut b = Xorshift64::new(2024);
        for _ in 0..500 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn next_angle_stays_below_tau() {
        let mut rng = Xorshift64::new(5);
        for _ in 0..5_000 {
            let a = rng.next_angle();
            assert!((0.0..TAU).contains(&a), "angle {a}");
        }
    }

    #[test]
    fn next_centered_is_symmetric_range() {
        let mut rng = Xorshift64::new(17);
        for _ in 0..5_000 {
            let v = rng.next_centered(0.15);
            assert!((-0.15..0.15).contains(&v), "sample {v}");
        }
    }

    #[test]
    fn chance_extremes_ignore_the_sample() {
        let mut script = Script {
            samples: vec![0.0, 0.999_999],
            at: 0,
        };
        assert!(script.chance(1.0));
        assert!(script.chance(1.0));
        assert!(!script.chance(0.0));
        assert!(!script.chance(0.0));
    }

    #[test]
    fn scripted_source_drives_derived_helpers() {
        let mut script = Script {
            samples: vec![0.5],
            at: 0,
        };
        assert!((script.next_range(2.0, 4.0) - 3.0).abs() < 1e-12);
        assert!(script.next_centered(1.0).abs() < 1e-12);
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn draw(mut src: impl RandomSource) -> f64 {
            src.next_f64()
        }
        let mut rng = Xorshift64::new(9);
        let mut twin = rng.clone();
        let first = draw(&mut rng);
        assert_eq!(first.to_bits(), twin.next_f64().to_bits());
        // The borrowed generator advanced.
        assert_eq!(rng.next_f64().to_bits(), twin.next_f64().to_bits());
    }

    #[test]
    fn state_survives_serialization_mid_stream() {
        let mut rng = Xorshift64::new(77);
        for _ in 0..20 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for _ in 0..50 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v));
                }
            }

            #[test]
            fn next_range_within_bounds(seed: u64, min in -1e3_f64..1e3, span in 1e-3_f64..1e3) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, min + span);
                    prop_assert!(v >= min && v <= min + span);
                }
            }

            #[test]
            fn chance_rate_roughly_matches(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let hits = (0..10_000).filter(|_| rng.chance(0.1)).count();
                // Loose bound to keep the test stable.
                prop_assert!((700..1_300).contains(&hits), "hits = {}", hits);
            }
        }
    }
}
