//! Software [`Surface`]: an RGBA buffer with source-over blending.
//!
//! Pixels are stored premultiplied in `[0, 1]`. Shapes get a one-pixel
//! coverage ramp at their edge, and stroke glows fall off as a Gaussian of the
//! distance from the stroke edge with `sigma = blur / 2`, which is how canvas
//! `shadowBlur` is specified.

use abyss_core::color::Rgba;
use abyss_core::surface::{Glow, Surface};
use glam::DVec2;

/// Premultiplied RGBA.
pub type Pixel = [f64; 4];

#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// A fully transparent raster. Zero sizes are allowed and hold no pixels.
    ///
    /// A size whose pixel count overflows `usize` yields an empty raster.
    pub fn new(width: usize, height: usize) -> Self {
        let mut raster = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        raster.resize(width, height);
        raster
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Source-over blend of `color` at `coverage` onto pixel `idx`.
    fn blend(&mut self, idx: usize, color: Rgba, coverage: f64) {
        let a = (color.a * coverage).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let dst = &mut self.pixels[idx];
        let keep = 1.0 - a;
        dst[0] = color.r * a + dst[0] * keep;
        dst[1] = color.g * a + dst[1] * keep;
        dst[2] = color.b * a + dst[2] * keep;
        dst[3] = a + dst[3] * keep;
    }

    /// Pixel index range covering `[min, max]`, clipped to the raster.
    fn span(min: f64, max: f64, limit: usize) -> std::ops::Range<usize> {
        let lo = min.floor().max(0.0) as usize;
        let hi = (max.ceil().max(0.0) as usize).min(limit);
        lo.min(hi)..hi
    }
}

impl Surface for Raster {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: usize, height: usize) {
        let Some(len) = width.checked_mul(height) else {
            log::warn!("raster size {width}x{height} overflows, keeping an empty raster");
            self.width = 0;
            self.height = 0;
            self.pixels = Vec::new();
            return;
        };
        self.width = width;
        self.height = height;
        self.pixels = vec![[0.0; 4]; len];
    }

    fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
    }

    fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        let h = self.height as f64;
        for y in 0..self.height {
            let color = top.lerp(bottom, (y as f64 + 0.5) / h);
            for x in 0..self.width {
                self.blend(y * self.width + x, color, 1.0);
            }
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let reach = radius + 1.0;
        for y in Self::span(center.y - reach, center.y + reach, self.height) {
            for x in Self::span(center.x - reach, center.x + reach, self.width) {
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5).distance(center);
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                self.blend(y * self.width + x, color, coverage);
            }
        }
    }

    fn stroke_path(&mut self, points: &[DVec2], width: f64, color: Rgba, glow: Option<Glow>) {
        if points.is_empty() || points.iter().any(|p| !p.is_finite()) || !width.is_finite() {
            return;
        }
        let half = width.max(0.0) / 2.0;
        let sigma = glow.map_or(0.0, |g| g.blur.max(0.0) / 2.0);
        let reach = half + 1.0 + sigma * 3.0;
        let (lo, hi) = points.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        );
        for y in Self::span(lo.y - reach, hi.y + reach, self.height) {
            for x in Self::span(lo.x - reach, hi.x + reach, self.width) {
                let pixel = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                let d = distance_to_polyline(pixel, points);
                let idx = y * self.width + x;
                if let Some(g) = glow.filter(|_| sigma > 0.0) {
                    let edge = (d - half).max(0.0);
                    self.blend(idx, g.color, (-0.5 * (edge / sigma).powi(2)).exp());
                }
                self.blend(idx, color, (half + 0.5 - d).clamp(0.0, 1.0));
            }
        }
    }
}

/// Shortest distance from `p` to any segment of `points` (or the point itself
/// when there is only one).
fn distance_to_polyline(p: DVec2, points: &[DVec2]) -> f64 {
    match points {
        [only] => p.distance(*only),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(p, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
