use wasm_bindgen::JsCast;
use waves_core::constants::CANVAS_WIDTH;
use waves_core::PageMetrics;
use web_sys as web;

pub const CANVAS_ID: &str = "waveCanvas";

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Largest of the body and root element size measurements.
pub fn document_height(document: &web::Document) -> f64 {
    let mut heights = [0_i32; 5];
    if let Some(body) = document.body() {
        heights[0] = body.scroll_height();
        heights[1] = body.offset_height();
    }
    if let Some(root) = document.document_element() {
        heights[2] = root.client_height();
        heights[3] = root.scroll_height();
        heights[4] = root
            .dyn_ref::<web::HtmlElement>()
            .map(|el| el.offset_height())
            .unwrap_or(0);
    }
    heights.into_iter().max().unwrap_or(0) as f64
}

pub fn page_metrics(window: &web::Window) -> PageMetrics {
    let document_height = window
        .document()
        .map(|d| document_height(&d))
        .unwrap_or(0.0);
    PageMetrics::new(
        scroll_offset(window),
        viewport_height(window),
        document_height,
    )
}

/// Keep the canvas a narrow rail as tall as the viewport.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement, window: &web::Window) {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(viewport_height(window).max(0.0) as u32);
}
