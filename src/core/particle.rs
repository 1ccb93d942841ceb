use super::constants::*;
use glam::DVec2;
use rand::Rng;

/// A drifting glyph in canvas pixel space.
///
/// Fields:
/// - `pos`, `vel`: position and per-frame drift
/// - `size`: glyph size in px (fixed)
/// - `alpha`: base opacity (fixed)
/// - `label`: glyph drawn at `pos`; refreshed by [`Particle::reroll_label`]
/// - `hue`: palette seed in `0..360`; refreshed together with `label`
/// - `wobble`: frequency multiplier for the shared phase (fixed)
/// - `rot`: angular offset for wobble and tilt (fixed)
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub alpha: f64,
    pub label: char,
    pub hue: u32,
    pub wobble: f64,
    pub rot: f64,
}

impl Particle {
    /// Random particle somewhere in the viewport plus the spawn margin.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let pos = DVec2::new(
            rng.gen_range(-SPAWN_MARGIN..width + SPAWN_MARGIN),
            rng.gen_range(-SPAWN_MARGIN..height + SPAWN_MARGIN),
        );
        let vel = DVec2::new(
            rng.gen_range(VELOCITY_X_RANGE.0..VELOCITY_X_RANGE.1),
            rng.gen_range(VELOCITY_Y_RANGE.0..VELOCITY_Y_RANGE.1),
        );
        Self {
            pos,
            vel,
            size: rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1),
            alpha: rng.gen_range(ALPHA_RANGE.0..ALPHA_RANGE.1),
            label: random_glyph(rng),
            hue: random_hue(rng),
            wobble: rng.gen_range(WOBBLE_RANGE.0..WOBBLE_RANGE.1),
            rot: rng.gen_range(0.0..std::f64::consts::TAU),
        }
    }

    /// Draw a fresh label and hue; nothing else changes.
    pub fn reroll_label<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.label = random_glyph(rng);
        self.hue = random_hue(rng);
    }

    /// Advance one frame at `phase`, then wrap into the margin box.
    pub fn step(&mut self, phase: f64, width: f64, height: f64) {
        let angle = phase * self.wobble + self.rot;
        self.pos.x += self.vel.x + angle.sin() * WOBBLE_AMPLITUDE_X;
        self.pos.y += self.vel.y + angle.cos() * WOBBLE_AMPLITUDE_Y;
        self.pos.x = wrap_coord(self.pos.x, width);
        self.pos.y = wrap_coord(self.pos.y, height);
    }

    #[inline]
    pub fn tilt(&self, phase: f64) -> f64 {
        (phase + self.rot).sin() * GLYPH_TILT_MAX
    }

    #[inline]
    pub fn glow_radius(&self) -> f64 {
        self.size * GLOW_RADIUS_SCALE
    }

    #[inline]
    pub fn font_px(&self) -> f64 {
        self.size.round().max(GLYPH_MIN_FONT_PX)
    }

    #[inline]
    pub fn shadow_blur(&self) -> f64 {
        (self.size * SHADOW_BLUR_SCALE).max(SHADOW_BLUR_MIN)
    }
}

/// Teleport a coordinate that left `[-WRAP_MARGIN, extent + WRAP_MARGIN]`
/// to the opposite edge of that band.
#[inline]
pub fn wrap_coord(v: f64, extent: f64) -> f64 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if v > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}

#[inline]
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    GLYPHS[rng.gen_range(0..GLYPHS.len())] as char
}

#[inline]
pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..HUE_MAX)
}
