use crate::core::{Color, Glyph, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a `CanvasRenderingContext2d`.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// The canvas' 2D context, or `None` when the browser can't provide one.
    pub fn for_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_diagonal_gradient(&mut self, width: f64, height: f64, start: Color, end: Color) {
        let grad = self.ctx.create_linear_gradient(0.0, 0.0, width, height);
        _ = grad.add_color_stop(0.0, &start.to_css());
        _ = grad.add_color_stop(1.0, &end.to_css());
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, color: Color, fade_stop: f64) {
        let grad = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(_) => return,
        };
        _ = grad.add_color_stop(0.0, &color.to_css());
        _ = grad.add_color_stop(fade_stop as f32, &Color::TRANSPARENT.to_css());
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn draw_glyph(&mut self, glyph: &Glyph) {
        let ctx = &self.ctx;
        let css = glyph.color.to_css();
        ctx.save();
        _ = ctx.translate(glyph.pos.x, glyph.pos.y);
        _ = ctx.rotate(glyph.angle);
        ctx.set_font(&glyph.font);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&css);
        ctx.set_shadow_color(&css);
        ctx.set_shadow_blur(glyph.shadow_blur);
        let mut buf = [0u8; 4];
        _ = ctx.fill_text(glyph.label.encode_utf8(&mut buf), 0.0, 0.0);
        ctx.restore();
    }
}
