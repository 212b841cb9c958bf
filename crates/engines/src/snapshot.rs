//! PNG output of a [`Raster`].
//!
//! Feature-gated behind `png` (default on) so wasm builds can use the
//! registry without pulling in the `image` crate. The byte conversion lives in
//! [`crate::pixel`].

use abyss_core::color::Rgba;
use abyss_core::error::EngineError;
use std::path::Path;

use crate::pixel::raster_to_rgba;
use crate::raster::Raster;

/// Writes the raster composited over `background` as a PNG.
///
/// Returns `EngineError::InvalidDimensions` for an empty raster or one whose
/// size overflows `u32`, and `EngineError::Io` on write failure.
pub fn write_png(raster: &Raster, background: Rgba, path: &Path) -> Result<(), EngineError> {
    if raster.width() == 0 || raster.height() == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    let w = u32::try_from(raster.width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, raster_to_rgba(raster, background))
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
