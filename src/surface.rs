use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use waves_core::{GlowFilter, GradientStop, Rgba, Surface};
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
#[derive(Debug)]
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::TRUE)
            .map_err(|e| anyhow::anyhow!("context options: {:?}", e))?;
        let ctx = canvas
            .get_context_with_context_options("2d", &options)
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn set_filter(&mut self, filter: GlowFilter) {
        self.ctx.set_filter(&filter.to_string());
    }

    fn set_shadow(&mut self, blur: f64, color: Rgba) {
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(&color.to_string());
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn set_fill_radial_gradient(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("createRadialGradient failed: {:?}", e);
                return;
            }
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_string());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, point: DVec2) {
        self.ctx.move_to(point.x, point.y);
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        _ = self
            .ctx
            .arc(center.x, center.y, radius.max(0.0), start_angle, end_angle);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
