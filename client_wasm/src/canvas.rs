//! Canvas 2D drawing surface

use game_core::{Params, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::StartError;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, StartError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| StartError::Context(format!("{e:?}")))?
            .ok_or_else(|| StartError::Context("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StartError::Context("not a 2d context".to_string()))?;

        Ok(Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
        })
    }

    /// Backing store size, read once at startup
    pub fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed: {e:?}");
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(Params::FOREGROUND);
        self.ctx.set_font(Params::SCORE_FONT);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {e:?}");
        }
    }
}
