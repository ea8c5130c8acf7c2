//! Event wiring: passive scroll tracking, debounced relayout, and the
//! nav-logo reset gesture.

use std::cell::RefCell;
use std::rc::Rc;

use hero_core::HeroEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;

fn feed_scroll(engine: &Rc<RefCell<HeroEngine>>, drive: &web::HtmlElement) {
    if let Some(window) = web::window() {
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        engine
            .borrow_mut()
            .on_scroll(scroll_top, drive.offset_height() as f64, viewport_height);
    }
}

/// Passive scroll listener feeding the progress tracker, primed once so the
/// first frame reflects a mid-page reload.
pub fn attach_scroll(
    engine: Rc<RefCell<HeroEngine>>,
    drive: web::HtmlElement,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    feed_scroll(&engine, &drive);

    let closure = Closure::wrap(Box::new(move || {
        feed_scroll(&engine, &drive);
    }) as Box<dyn FnMut()>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow::anyhow!("scroll listener: {:?}", e))?;
    closure.forget();
    Ok(())
}

/// Debounced resize: each tick clears the pending timer and re-arms it, so
/// the expensive relayout (and pixel rescan) runs only after the quiet
/// period.
pub fn attach_resize(relayout: impl FnMut() + 'static) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let relayout_cb = Rc::new(Closure::wrap(Box::new(relayout) as Box<dyn FnMut()>));
    let pending: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = pending.borrow_mut().take() {
            window.clear_timeout_with_handle(handle);
        }
        let callback: &js_sys::Function = relayout_cb.as_ref().as_ref().unchecked_ref();
        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, RESIZE_DEBOUNCE_MS)
        {
            Ok(handle) => *pending.borrow_mut() = Some(handle),
            Err(e) => log::warn!("[events] resize debounce timer: {:?}", e),
        }
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("resize listener: {:?}", e))?;
    closure.forget();
    Ok(())
}

/// The reset gesture: a nav-logo click unlatches the scene and smooth-scrolls
/// back to the top.
pub fn attach_reset(document: &web::Document, engine: Rc<RefCell<HeroEngine>>) {
    dom::add_click_listener(document, ".nav__logo", move |ev| {
        ev.prevent_default();
        engine.borrow_mut().reset();
        log::info!("[events] reset gesture, scrolling home");
        if let Some(window) = web::window() {
            let options = web::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });
}
