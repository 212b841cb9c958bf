#![cfg(target_arch = "wasm32")]
//! Browser host for the particle field.
//!
//! [`Background`] binds a `<canvas>` to a [`ParticleField`], drives it from
//! `requestAnimationFrame`, follows window resizes and exposes the burst
//! trigger to JS. Call [`Background::stop`] when the owning view is torn
//! down; freeing the handle from JS stops it as well.

mod surface;

use abyss_core::{FrameLoop, Surface};
use abyss_plankton::ParticleField;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use surface::CanvasSurface;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type Running = Rc<RefCell<Option<FrameLoop<ParticleField, CanvasSurface>>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

fn js_err(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

fn window_size(window: &web::Window) -> (usize, usize) {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map_or(1, |v| v.max(1.0) as usize)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

fn request_frame(window: &web::Window, callback: &FrameCallback) -> Option<i32> {
    let callback = callback.borrow();
    let closure = callback.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {e:?}");
            None
        }
    }
}

#[wasm_bindgen]
pub struct Background {
    window: web::Window,
    running: Running,
    pending: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Background {
    /// Starts the animation on the canvas with id `canvas_id`.
    ///
    /// `params` is an optional JSON object of field parameters.
    #[wasm_bindgen(constructor)]
    pub fn start(canvas_id: &str, params: Option<String>) -> Result<Background, JsValue> {
        let window = web::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| js_err(&format!("missing #{canvas_id}")))?
            .dyn_into()
            .map_err(|_| js_err("element is not a canvas"))?;
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| js_err("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| js_err("unexpected context type"))?;

        let params: serde_json::Value = match params {
            Some(text) => serde_json::from_str(&text).map_err(|e| js_err(&e.to_string()))?,
            None => serde_json::json!({}),
        };
        let (width, height) = window_size(&window);
        let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
        let field = ParticleField::from_json(width as f64, height as f64, seed, &params)
            .map_err(|e| js_err(&e.to_string()))?;
        let mut surface = CanvasSurface::new(canvas, ctx);
        surface.resize(width, height);

        let running: Running = Rc::new(RefCell::new(Some(FrameLoop::start(field, surface))));
        let pending = Rc::new(Cell::new(None));
        let tick: FrameCallback = Rc::new(RefCell::new(None));

        {
            let running = running.clone();
            let pending = pending.clone();
            let tick_self = tick.clone();
            let window = window.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                pending.set(None);
                let mut guard = running.borrow_mut();
                let Some(frames) = guard.as_mut() else {
                    return;
                };
                frames.frame();
                drop(guard);
                pending.set(request_frame(&window, &tick_self));
            }) as Box<dyn FnMut()>));
        }

        let on_resize = {
            let running = running.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let (w, h) = window_size(&window);
                if let Some(frames) = running.borrow_mut().as_mut() {
                    frames.resize(w, h);
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        pending.set(request_frame(&window, &tick));
        log::info!("background started on #{canvas_id} ({width}x{height})");
        Ok(Background {
            window,
            running,
            pending,
            tick,
            on_resize: Some(on_resize),
        })
    }

    /// Adds burst demand; creatures appear over the following frames.
    pub fn set_burst(&self, units: u32) {
        if let Some(frames) = self.running.borrow_mut().as_mut() {
            frames.add_burst(units);
        }
    }

    /// Creatures currently swimming.
    pub fn creatures(&self) -> usize {
        self.running
            .borrow()
            .as_ref()
            .map_or(0, |frames| frames.engine().creatures().len())
    }

    /// Cancels the pending frame, detaches the resize listener and releases
    /// the canvas. Further calls are no-ops.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::error!("cancelAnimationFrame failed: {e:?}");
            }
        }
        if let Some(on_resize) = self.on_resize.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                log::error!("removing resize listener failed: {e:?}");
            }
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
        if let Some(frames) = self.running.borrow_mut().take() {
            let mut surface = frames.stop();
            surface.clear();
        }
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.stop();
    }
}
