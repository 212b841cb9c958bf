#![deny(unsafe_code)]
//! Core types and traits for abyss, an animated underwater background.
//!
//! Provides the `Engine` trait, the `Surface` drawing abstraction and its
//! `RecordingSurface`, `FrameLoop` (start/stop lifecycle), CSS-style colors
//! (`Hsla`, `Rgba`), the `RandomSource` trait with the `Xorshift64` PRNG,
//! JSON parameter helpers and `Recipe`.

pub mod color;
pub mod engine;
pub mod error;
pub mod frame;
pub mod params;
pub mod prng;
pub mod recipe;
pub mod surface;

pub use color::{Hsla, Rgba};
pub use engine::Engine;
pub use error::EngineError;
pub use frame::FrameLoop;
pub use prng::{RandomSource, Xorshift64};
pub use recipe::{BurstEvent, Recipe};
pub use surface::{DrawCommand, Glow, RecordingSurface, Surface};
