#![cfg(target_arch = "wasm32")]

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

use std::cell::RefCell;
use std::rc::Rc;

use hero_core::{EngineConfig, HeroEngine};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The animation is cosmetic; a page without the hero markup just skips it.
    let Some(anchors) = dom::Anchors::lookup(&document) else {
        log::warn!("[init] hero anchors missing; scroll animation disabled");
        return Ok(());
    };

    let engine = Rc::new(RefCell::new(HeroEngine::new(EngineConfig::default())));
    let surface = Rc::new(RefCell::new(render::Surface::new(
        &document,
        anchors.canvas.clone(),
    )?));

    let relayout = {
        let engine = engine.clone();
        let surface = surface.clone();
        let canvas = anchors.canvas.clone();
        move || {
            let viewport = dom::viewport_of(&canvas);
            surface.borrow_mut().resize(&viewport);
            engine.borrow_mut().set_viewport(viewport);
            assets::rescan(&surface, &engine);
        }
    };
    relayout();
    events::attach_resize(relayout)?;
    events::attach_scroll(engine.clone(), anchors.drive.clone())?;
    events::attach_reset(&document, engine.clone());

    assets::load_network_image(constants::NETWORK_IMAGE_URL, engine.clone(), surface.clone())?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        anchors,
        surface,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] hero animation running");
    Ok(())
}
