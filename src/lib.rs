#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use waves_core::{AnimationDriver, DriverParams, Event, FrameRenderer, RenderOptions, WaveField};
use web_sys as web;

mod dom;
mod events;
mod frame;
mod surface;

use frame::{FrameLoop, Host};
use surface::CanvasSurface;

thread_local! {
    static ACTIVE: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("waves-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, dom::CANVAS_ID)?;
    dom::fit_canvas(&canvas, &window);
    let surface = CanvasSurface::new(canvas)?;

    let field = WaveField::default();
    let driver = AnimationDriver::new(DriverParams::default(), dom::page_metrics(&window));
    let renderer = FrameRenderer::new(RenderOptions::default());
    let frame_loop = FrameLoop::new(Host::new(driver, field, renderer, surface));

    events::wire_page_events(&window, &frame_loop);
    frame_loop.dispatch(Event::Start);
    ACTIVE.with(|active| *active.borrow_mut() = Some(frame_loop));
    Ok(())
}

/// Sphere centres from the most recent frame, flattened as `[x0, y0, x1, y1, ...]`.
#[wasm_bindgen]
pub fn sphere_positions() -> Vec<f64> {
    ACTIVE.with(|active| {
        active
            .borrow()
            .as_ref()
            .map(FrameLoop::sphere_positions)
            .unwrap_or_default()
    })
}
