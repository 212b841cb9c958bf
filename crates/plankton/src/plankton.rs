//! Ambient plankton: persistent drifting specks.

use abyss_core::color::Hsla;
use abyss_core::prng::RandomSource;
use glam::DVec2;

/// One drifting speck.
///
/// Everything except `pos` and `phase` is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Plankton {
    pub pos: DVec2,
    pub radius: f64,
    /// Oscillation angle; drives wobble and brightness.
    pub phase: f64,
    pub phase_speed: f64,
    pub drift: DVec2,
    /// Extra alpha in `[0, 0.2)`.
    pub base_alpha: f64,
    /// In `[0, 1)`; offsets both hue and the horizontal wobble.
    pub hue_seed: f64,
}

impl Plankton {
    /// Places a new speck uniformly inside `bounds`.
    pub fn spawn(rng: &mut impl RandomSource, bounds: DVec2) -> Self {
        let pos = DVec2::new(rng.next_f64() * bounds.x, rng.next_f64() * bounds.y);
        let radius = rng.next_range(0.4, 2.2);
        let phase = rng.next_angle();
        let phase_speed = rng.next_range(0.005, 0.025);
        let drift = DVec2::new(rng.next_centered(0.15), rng.next_centered(0.1));
        let base_alpha = rng.next_f64() * 0.2;
        let hue_seed = rng.next_f64();
        Self {
            pos,
            radius,
            phase,
            phase_speed,
            drift,
            base_alpha,
            hue_seed,
        }
    }

    /// One tick of drift, wobble and wrap-around.
    pub fn advance(&mut self, bounds: DVec2, margin: f64) {
        self.pos.x += (self.phase + self.hue_seed).cos() * 0.2 + self.drift.x;
        self.pos.y += (self.phase * 0.9).sin() * 0.15 + self.drift.y;
        self.phase += self.phase_speed;
        self.pos.x = wrap(self.pos.x, bounds.x, margin);
        self.pos.y = wrap(self.pos.y, bounds.y, margin);
    }

    pub fn color(&self) -> Hsla {
        Hsla::new(
            200.0 + self.hue_seed * 60.0,
            70.0,
            60.0 + self.phase.sin() * 20.0,
            0.25 + self.base_alpha,
        )
    }
}

/// Sends a coordinate that left `[-margin, extent + margin]` to the opposite edge.
fn wrap(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abyss_core::prng::Xorshift64;

    fn still(pos: DVec2) -> Plankton {
        Plankton {
            pos,
            radius: 1.0,
            phase: 0.0,
            phase_speed: 0.01,
            drift: DVec2::ZERO,
            base_alpha: 0.1,
            hue_seed: 0.5,
        }
    }

    #[test]
    fn spawn_draws_constants_in_documented_ranges() {
        let mut rng = Xorshift64::new(3);
        let bounds = DVec2::new(800.0, 600.0);
        for _ in 0..1_000 {
            let p = Plankton::spawn(&mut rng, bounds);
            assert!((0.0..800.0).contains(&p.pos.x) && (0.0..600.0).contains(&p.pos.y));
            assert!((0.4..2.2).contains(&p.radius));
            assert!((0.005..0.025).contains(&p.phase_speed));
            assert!(p.drift.x.abs() <= 0.15 && p.drift.y.abs() <= 0.1);
            assert!((0.0..0.2).contains(&p.base_alpha));
            assert!((0.0..1.0).contains(&p.hue_seed));
        }
    }

    #[test]
    fn advance_follows_motion_law() {
        let mut p = still(DVec2::new(100.0, 100.0));
        p.drift = DVec2::new(0.1, -0.05);
        p.advance(DVec2::new(800.0, 600.0), 10.0);
        let dx = 0.5_f64.cos() * 0.2 + 0.1;
        let dy = 0.0_f64.sin() * 0.15 - 0.05;
        assert!((p.pos.x - (100.0 + dx)).abs() < 1e-12);
        assert!((p.pos.y - (100.0 + dy)).abs() < 1e-12);
        assert!((p.phase - 0.01).abs() < 1e-12);
    }

    #[test]
    fn leaving_an_edge_wraps_to_the_opposite_margin() {
        assert_eq!(wrap(-10.5, 800.0, 10.0), 810.0);
        assert_eq!(wrap(810.5, 800.0, 10.0), -10.0);
        assert_eq!(wrap(-10.0, 800.0, 10.0), -10.0);
        assert_eq!(wrap(400.0, 800.0, 10.0), 400.0);
    }

    #[test]
    fn positions_beyond_shrunk_bounds_wrap_next_tick() {
        let mut p = still(DVec2::new(700.0, 500.0));
        p.advance(DVec2::new(1.0, 1.0), 10.0);
        assert_eq!(p.pos, DVec2::new(-10.0, -10.0));
    }

    #[test]
    fn color_tracks_seed_and_phase() {
        let mut p = still(DVec2::ZERO);
        p.phase = std::f64::consts::FRAC_PI_2;
        let c = p.color();
        assert_eq!(c.h, 230.0);
        assert_eq!(c.s, 70.0);
        assert!((c.l - 80.0).abs() < 1e-12);
        assert!((c.a - 0.35).abs() < 1e-12);
    }
}
