use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use waves_core::Event;
use web_sys as web;

use crate::dom;
use crate::frame::FrameLoop;

fn add_passive_listener(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("failed to listen for {}: {:?}", kind, e);
    }
    closure.forget();
}

/// Translate window resize/scroll/wheel/page lifecycle events into driver inputs.
pub fn wire_page_events(window: &web::Window, frame_loop: &FrameLoop) {
    let resize_loop = frame_loop.clone();
    add_passive_listener(window, "resize", move |_| {
        if let Some(w) = web::window() {
            resize_loop.resize(&w);
        }
    });

    let scroll_loop = frame_loop.clone();
    add_passive_listener(window, "scroll", move |_| {
        if let Some(w) = web::window() {
            scroll_loop.dispatch(Event::Scroll(dom::page_metrics(&w)));
        }
    });

    let wheel_loop = frame_loop.clone();
    add_passive_listener(window, "wheel", move |ev| {
        if let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() {
            wheel_loop.dispatch(Event::Wheel {
                delta_x: wheel.delta_x(),
                delta_y: wheel.delta_y(),
            });
        }
    });

    let hide_loop = frame_loop.clone();
    add_passive_listener(window, "pagehide", move |_| {
        log::debug!("[events] pagehide, stopping");
        hide_loop.dispatch(Event::Teardown);
    });

    // restored from the back/forward cache
    let show_loop = frame_loop.clone();
    add_passive_listener(window, "pageshow", move |_| {
        show_loop.dispatch(Event::Start);
    });
}
