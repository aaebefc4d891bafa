//! Canvas 2D backend (WASM only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::DrawCommand;

/// Replays draw commands onto a `<canvas>`
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Size the canvas and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { ctx })
    }

    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        for command in commands {
            match command {
                DrawCommand::Clear {
                    color,
                    width,
                    height,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::FillRect { pos, size, color } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx
                        .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::FillText {
                    text,
                    pos,
                    font,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.set_font(font);
                    self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        Ok(())
    }
}
