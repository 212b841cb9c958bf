//! Color types used by drawing surfaces.
//!
//! Engines speak CSS-style colors: [`Hsla`] for per-entity tints (hue in
//! degrees, saturation and lightness in percent) and [`Rgba`] for fixed
//! washes. Both render to CSS strings for the canvas host and convert to
//! straight-alpha RGB in `[0, 1]` for the software rasterizer.

use serde::{Deserialize, Serialize};

/// Straight-alpha RGB color, all components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// HSL color with alpha, in CSS units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees; any value, wrapped into `[0, 360)` on conversion.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Builds a color from 8-bit channels and a fractional alpha, like CSS `rgba()`.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Component-wise linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Same color with alpha multiplied by `factor`.
    pub fn fade(self, factor: f64) -> Rgba {
        Rgba {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(r,g,b,a)` string with 8-bit channels.
    pub fn to_css(self) -> String {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({},{},{},{})", q(self.r), q(self.g), q(self.b), self.a)
    }
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// CSS `hsla(h,s%,l%,a)` string.
    pub fn to_css(self) -> String {
        format!("hsla({},{}%,{}%,{})", self.h, self.s, self.l, self.a)
    }

    /// Converts to RGB using the CSS Color 3 HSL algorithm.
    ///
    /// Saturation and lightness are clamped to `[0, 100]` first, as browsers do.
    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgba {
            r: hue_to_channel(p, q, h + 1.0 / 3.0),
            g: hue_to_channel(p, q, h),
            b: hue_to_channel(p, q, h - 1.0 / 3.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

impl From<Hsla> for Rgba {
    fn from(c: Hsla) -> Self {
        c.to_rgba()
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
