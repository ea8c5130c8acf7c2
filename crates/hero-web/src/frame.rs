//! The per-frame loop: tick the engine, apply styles, composite.

use std::cell::RefCell;
use std::rc::Rc;

use hero_core::HeroEngine;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::render::Surface;

pub struct FrameContext {
    pub engine: Rc<RefCell<HeroEngine>>,
    pub anchors: dom::Anchors,
    pub surface: Rc<RefCell<Surface>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // A backgrounded tab delivers one huge delta on return; compress it
        // to a single ordinary step.
        let dt = (now - self.last_instant).as_secs_f32().min(0.1);
        self.last_instant = now;

        let styles = self.engine.borrow_mut().frame(dt);
        dom::apply_styles(&self.anchors, &styles);
        self.surface
            .borrow()
            .render(&self.engine.borrow(), styles.network_alpha);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
