//! Burst-spawned creatures that swim across the field and expire.

use abyss_core::color::Hsla;
use abyss_core::prng::RandomSource;
use glam::DVec2;

/// Horizontal distance outside the surface where creatures appear.
const ENTRY_OFFSET: f64 = 30.0;
/// Phase advance per tick.
const PHASE_STEP: f64 = 0.12;
/// Vertical bob amplitude per tick.
const BOB: f64 = 0.8;
/// Horizontal spacing between trail points.
const TRAIL_SPACING: f64 = 6.0;
/// Vertical wave amplitude along the trail.
const TRAIL_WAVE: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    /// Spawn sequence number, unique within one field.
    pub id: u64,
    pub pos: DVec2,
    /// Signed horizontal speed; positive when entering from the left.
    pub vx: f64,
    pub phase: f64,
    /// Ticks left; the creature is dropped once this reaches zero.
    pub life: u32,
    pub hue: f64,
    pub size: f64,
}

impl Creature {
    /// A creature just outside the left or right edge, heading inwards.
    pub fn spawn(rng: &mut impl RandomSource, id: u64, bounds: DVec2, life: u32) -> Self {
        let from_left = rng.chance(0.5);
        let x = if from_left {
            -ENTRY_OFFSET
        } else {
            bounds.x + ENTRY_OFFSET
        };
        let y = rng.next_f64() * bounds.y * 0.8 + bounds.y * 0.1;
        let speed = rng.next_range(0.6, 1.8);
        let vx = if from_left { speed } else { -speed };
        let phase = rng.next_angle();
        let hue = rng.next_range(180.0, 260.0);
        let size = rng.next_range(1.0, 4.0);
        Self {
            id,
            pos: DVec2::new(x, y),
            vx,
            phase,
            life,
            hue,
            size,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn advance(&mut self) {
        self.pos.x += self.vx;
        self.pos.y += self.phase.sin() * BOB;
        self.phase += PHASE_STEP;
        self.life = self.life.saturating_sub(1);
    }

    /// Head followed by `segments` points stepping back against the heading.
    pub fn trail(&self, segments: usize) -> Vec<DVec2> {
        let back = -self.vx.signum() * TRAIL_SPACING;
        std::iter::once(self.pos)
            .chain((0..segments).map(|i| {
                let i = i as f64;
                DVec2::new(
                    self.pos.x + back * i,
                    self.pos.y + (self.phase + i).sin() * TRAIL_WAVE,
                )
            }))
            .collect()
    }

    pub fn stroke_color(&self) -> Hsla {
        Hsla::new(self.hue, 90.0, 70.0, 0.9)
    }

    pub fn glow_color(&self) -> Hsla {
        Hsla::new(self.hue, 90.0, 70.0, 0.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abyss_core::prng::Xorshift64;

    fn swimmer(vx: f64) -> Creature {
        Creature {
            id: 0,
            pos: DVec2::new(50.0, 100.0),
            vx,
            phase: 0.0,
            life: 3,
            hue: 200.0,
            size: 2.0,
        }
    }

    #[test]
    fn spawn_enters_from_an_edge_heading_inwards() {
        let mut rng = Xorshift64::new(11);
        let bounds = DVec2::new(800.0, 600.0);
        let (mut lefts, mut rights) = (0, 0);
        for id in 0..500 {
            let c = Creature::spawn(&mut rng, id, bounds, 600);
            if c.pos.x < 0.0 {
                lefts += 1;
                assert_eq!(c.pos.x, -30.0);
                assert!((0.6..1.8).contains(&c.vx));
            } else {
                rights += 1;
                assert_eq!(c.pos.x, 830.0);
                assert!((-1.8..=-0.6).contains(&c.vx));
            }
            assert!((60.0..540.0).contains(&c.pos.y));
            assert!((180.0..260.0).contains(&c.hue));
            assert!((1.0..4.0).contains(&c.size));
            assert_eq!(c.life, 600);
        }
        assert!(lefts > 100 && rights > 100, "{lefts} / {rights}");
    }

    #[test]
    fn advance_moves_bobs_and_ages() {
        let mut c = swimmer(1.5);
        c.phase = std::f64::consts::FRAC_PI_2;
        c.advance();
        assert_eq!(c.pos.x, 51.5);
        assert!((c.pos.y - 100.8).abs() < 1e-12);
        assert!((c.phase - (std::f64::consts::FRAC_PI_2 + 0.12)).abs() < 1e-12);
        assert_eq!(c.life, 2);
    }

    #[test]
    fn life_saturates_at_zero() {
        let mut c = swimmer(1.0);
        for _ in 0..5 {
            c.advance();
        }
        assert_eq!(c.life, 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn trail_points_back_against_heading() {
        let right = swimmer(1.0).trail(6);
        assert_eq!(right.len(), 7);
        assert_eq!(right[0], DVec2::new(50.0, 100.0));
        assert_eq!(right[6].x, 50.0 - 30.0);

        let left = swimmer(-1.0).trail(6);
        assert_eq!(left[6].x, 50.0 + 30.0);
    }

    #[test]
    fn trail_waves_with_phase() {
        let c = swimmer(1.0);
        let t = c.trail(3);
        // Segment 0 sits on the head column, offset by sin(phase).
        assert_eq!(t[1].x, 50.0);
        assert!((t[1].y - 100.0).abs() < 1e-12);
        assert!((t[2].y - (100.0 + 1.0_f64.sin() * 3.0)).abs() < 1e-12);
    }

    #[test]
    fn colors_share_hue() {
        let c = swimmer(1.0);
        assert_eq!(c.stroke_color().h, c.glow_color().h);
        assert!(c.stroke_color().a > c.glow_color().a);
    }
}
