//! Network image loading and pixel sampling.
//!
//! The engine never waits on the asset: it starts procedural and upgrades to
//! the image-driven look when (and only when) a scan succeeds. Pixel reads can
//! be refused outright (file:// pages hit canvas tainting), in which case the
//! base image still renders and the feature overlay simply stays off.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use glam::Vec2;
use hero_core::HeroEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;
use crate::render::Surface;

pub fn load_network_image(
    url: &str,
    engine: Rc<RefCell<HeroEngine>>,
    surface: Rc<RefCell<Surface>>,
) -> anyhow::Result<()> {
    let image = web::HtmlImageElement::new().map_err(|e| anyhow!("image element: {:?}", e))?;
    image.set_cross_origin(Some("anonymous"));

    let handle = image.clone();
    let onload = Closure::wrap(Box::new(move || {
        log::info!(
            "[assets] network image ready ({}x{})",
            handle.natural_width(),
            handle.natural_height()
        );
        surface.borrow_mut().set_image(handle.clone());
        rescan(&surface, &engine);
    }) as Box<dyn FnMut()>);
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    image.set_src(url);
    Ok(())
}

/// Re-sample features at the current layout. Runs on image load and after
/// every settled resize; never from the frame loop.
pub fn rescan(surface: &Rc<RefCell<Surface>>, engine: &Rc<RefCell<HeroEngine>>) {
    let surface_ref = surface.borrow();
    if !surface_ref.has_image() {
        return;
    }
    let viewport = engine.borrow().viewport();
    if viewport.is_degenerate() {
        log::debug!("[assets] layout has no size yet, scan deferred");
        return;
    }
    match read_pixels(&surface_ref, viewport.css) {
        Ok((data, width, height)) => {
            let mut engine = engine.borrow_mut();
            if let Err(e) = engine.scan_image(&data, width, height) {
                log::warn!("[assets] feature scan failed: {e}");
                engine.clear_features();
            }
        }
        Err(e) => {
            log::warn!(
                "[assets] pixel read refused, running without the feature overlay: {:?}",
                e
            );
            engine.borrow_mut().clear_features();
        }
    }
}

fn read_pixels(surface: &Surface, css: Vec2) -> Result<(Vec<u8>, u32, u32), JsValue> {
    let document =
        dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let image = surface
        .image()
        .ok_or_else(|| JsValue::from_str("no image"))?;
    let width = (css.x as u32).max(1);
    let height = (css.y as u32).max(1);

    let scratch: web::HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    scratch.set_width(width);
    scratch.set_height(height);
    let ctx: web::CanvasRenderingContext2d = scratch
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let rect = surface.image_rect();
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        rect.origin.x as f64,
        rect.origin.y as f64,
        rect.size.x as f64,
        rect.size.y as f64,
    )?;
    let image_data = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;
    Ok((image_data.data().0, width, height))
}
