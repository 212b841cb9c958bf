//! The drawing surface engines paint onto.
//!
//! A [`Surface`] is the minimal 2D canvas an engine needs: clear, a vertical
//! gradient wash, filled circles and stroked polylines with an optional glow.
//! Hosts provide their own implementation (a browser 2D context, a software
//! raster). [`RecordingSurface`] keeps the calls as [`DrawCommand`]s so they
//! can be inspected or dumped as JSON.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Soft halo drawn around a stroke, like canvas `shadowBlur`/`shadowColor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub blur: f64,
    pub color: Rgba,
}

/// A 2D drawing target with pixel dimensions.
///
/// Dimensions are whole pixels. All drawing calls take floating-point
/// coordinates and accept positions outside the surface.
pub trait Surface {
    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> (usize, usize);

    /// Changes the pixel size. Contents after a resize are unspecified.
    fn resize(&mut self, width: usize, height: usize);

    /// Resets every pixel to fully transparent.
    fn clear(&mut self);

    /// Blends a top-to-bottom gradient over the whole surface.
    fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba);

    /// Blends a filled circle.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);

    /// Strokes an open polyline through `points`.
    fn stroke_path(&mut self, points: &[DVec2], width: f64, color: Rgba, glow: Option<Glow>);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    VerticalGradient {
        top: Rgba,
        bottom: Rgba,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgba,
    },
    Path {
        points: Vec<DVec2>,
        width: f64,
        color: Rgba,
        glow: Option<Glow>,
    },
}

/// Surface that draws nothing and remembers every call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSurface {
    width: usize,
    height: usize,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands recorded since the last `Clear`, i.e. the current frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Drops all recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        self.commands
            .push(DrawCommand::VerticalGradient { top, bottom });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_path(&mut self, points: &[DVec2], width: f64, color: Rgba, glow: Option<Glow>) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            width,
            color,
            glow,
        });
    }
}
