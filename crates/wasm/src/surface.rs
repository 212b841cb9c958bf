//! [`Surface`] over a `<canvas>` 2D context.
//!
//! Drawing calls that can fail on the JS side (`arc`, gradient stops) are
//! logged and skipped; a frame never aborts halfway.

use abyss_core::color::Rgba;
use abyss_core::surface::{Glow, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("{what} failed: {e:?}");
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (usize, usize) {
        (self.canvas.width() as usize, self.canvas.height() as usize)
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.canvas.set_width(u32::try_from(width).unwrap_or(u32::MAX));
        self.canvas.set_height(u32::try_from(height).unwrap_or(u32::MAX));
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        let (w, h) = self.size();
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h as f64);
        report("gradient stop", gradient.add_color_stop(0.0, &top.to_css()));
        report("gradient stop", gradient.add_color_stop(1.0, &bottom.to_css()));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        report("arc", self.ctx.arc(center.x, center.y, radius, 0.0, TAU));
        self.ctx.fill();
    }

    fn stroke_path(&mut self, points: &[DVec2], width: f64, color: Rgba, glow: Option<Glow>) {
        let Some((head, rest)) = points.split_first() else {
            return;
        };
        self.ctx.save();
        if let Some(glow) = glow {
            self.ctx.set_shadow_blur(glow.blur);
            self.ctx.set_shadow_color(&glow.color.to_css());
        }
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(head.x, head.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
        self.ctx.restore();
    }
}
