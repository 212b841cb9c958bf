//! Flattening a [`Raster`] into RGBA8 bytes.
//!
//! Always available (no feature gate) so the PNG path and any other byte
//! consumer share one conversion.

use abyss_core::color::Rgba;

use crate::raster::Raster;

/// Deep-water page color the transparent surface is composited over.
pub fn abyss_background() -> Rgba {
    Rgba::from_rgb8(2, 6, 23, 1.0)
}

/// Composites the raster over an opaque `background` and quantizes to RGBA8.
///
/// The background's own alpha is ignored; every output pixel is opaque. The
/// buffer length is `width * height * 4`.
pub fn raster_to_rgba(raster: &Raster, background: Rgba) -> Vec<u8> {
    let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    raster
        .pixels()
        .iter()
        .flat_map(|&[r, g, b, a]| {
            let keep = 1.0 - a;
            [
                q(r + background.r * keep),
                q(g + background.g * keep),
                q(b + background.b * keep),
                255u8,
            ]
        })
        .collect()
}
