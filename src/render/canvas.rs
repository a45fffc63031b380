//! Browser-backed surface over a `CanvasRenderingContext2d`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::Surface;

/// A 2D canvas context with its pixel dimensions captured at construction.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wrap an existing canvas element, querying its current size.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Create a screen-sized canvas pinned behind the page content and
    /// attach it to the document body.
    pub fn create_background() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let screen = window.screen()?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(screen.width()? as u32);
        canvas.set_height(screen.height()? as u32);

        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("z-index", "-1")?;

        let body = document.body().ok_or("No document body")?;
        body.append_child(&canvas)?;

        Self::from_canvas(&canvas)
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn begin_path(&self) {
        self.ctx.begin_path();
    }

    fn arc(&self, x: f64, y: f64, radius: f64) {
        // a failed arc (negative radius) leaves the path unchanged
        let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
    }

    fn fill(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }
}
