use super::color::Color;
use super::constants::{GLOW_FADE_STOP, GLYPH_FONT_FAMILY};
use super::field::ParticleField;
use super::theme::{particle_color, Theme};
use glam::DVec2;

/// A single rotated, glowing glyph to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub label: char,
    pub pos: DVec2,
    /// Rotation in radians about `pos`.
    pub angle: f64,
    /// CSS font shorthand, e.g. `"14px Orbitron, monospace"`.
    pub font: String,
    pub color: Color,
    pub shadow_blur: f64,
}

/// The 2D drawing operations the particle field needs from its host.
///
/// Implementations are expected to swallow host-side drawing errors; a
/// failed draw only affects the current frame.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    /// Fill `(0, 0, width, height)` with a linear gradient running from the
    /// top-left to the bottom-right corner.
    fn fill_diagonal_gradient(&mut self, width: f64, height: f64, start: Color, end: Color);

    /// Fill a circle with a radial gradient from `color` at the centre to
    /// transparent at `fade_stop * radius`.
    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, color: Color, fade_stop: f64);

    /// Draw a glyph centred on its position, rotated, with fill and shadow
    /// both set to `glyph.color`.
    fn draw_glyph(&mut self, glyph: &Glyph);
}

impl ParticleField {
    /// Paint the current state: clear, vignette, then glow + glyph for each
    /// particle in collection order.
    pub fn render<S: Surface + ?Sized>(&self, theme: Theme, surface: &mut S) {
        let (w, h) = (self.width(), self.height());
        surface.clear(w, h);

        let style = theme.style();
        surface.fill_diagonal_gradient(w, h, style.gradient[0], style.gradient[1]);

        let phase = self.phase();
        for p in self.particles() {
            let color = particle_color(theme, p.hue, p.alpha);
            surface.fill_radial_glow(p.pos, p.glow_radius(), color, GLOW_FADE_STOP);
            surface.draw_glyph(&Glyph {
                label: p.label,
                pos: p.pos,
                angle: p.tilt(phase),
                font: format!("{}px {}", p.font_px(), GLYPH_FONT_FAMILY),
                color,
                shadow_blur: p.shadow_blur(),
            });
        }
    }

    /// One display frame: advance, then paint.
    pub fn tick<S: Surface + ?Sized>(&mut self, theme: Theme, surface: &mut S) {
        self.update();
        self.render(theme, surface);
    }
}
