//! The core `Engine` trait every animated background implements.
//!
//! The trait is object-safe so hosts can drive engines as `dyn Engine`.

use crate::surface::Surface;
use serde_json::Value;

/// A frame-driven animation.
///
/// A host calls [`tick`](Engine::tick) once per display frame and never
/// overlaps two ticks. [`resize`](Engine::resize) and
/// [`add_burst`](Engine::add_burst) may be called any number of times between
/// ticks; their effect is visible from the next tick on.
pub trait Engine {
    /// Advance the animation by one frame and draw it onto `surface`.
    fn tick(&mut self, surface: &mut dyn Surface);

    /// Update the bounds used for wrap-around and spawn placement.
    ///
    /// Existing entities are not moved. Non-positive sizes are tolerated.
    fn resize(&mut self, width: f64, height: f64);

    /// Add `units` to the pending burst demand.
    fn add_burst(&mut self, units: u32);

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing every parameter: type, range, default.
    fn param_schema(&self) -> Value;
}
