// Shared tuning constants for the glyph particle field.

// Population
pub const MIN_PARTICLES: usize = 40; // floor regardless of viewport area
pub const AREA_PER_PARTICLE: f64 = 120_000.0; // px² of viewport per particle

// Spawn bounds
pub const SPAWN_MARGIN: f64 = 50.0; // px outside the viewport particles may start in
pub const VELOCITY_X_RANGE: (f64, f64) = (-0.3, 0.6); // px per frame
pub const VELOCITY_Y_RANGE: (f64, f64) = (-0.25, 0.5); // px per frame
pub const SIZE_RANGE: (f64, f64) = (8.0, 28.0); // glyph px
pub const ALPHA_RANGE: (f64, f64) = (0.06, 0.55);
pub const WOBBLE_RANGE: (f64, f64) = (0.5, 2.5);
pub const HUE_MAX: u32 = 360; // exclusive

/// Alphabet particle labels are drawn from.
pub const GLYPHS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Motion
pub const PHASE_STEP: f64 = 0.01; // phase advance per frame
pub const WOBBLE_AMPLITUDE_X: f64 = 0.4;
pub const WOBBLE_AMPLITUDE_Y: f64 = 0.35;
pub const WRAP_MARGIN: f64 = 80.0; // px beyond the viewport before teleporting

// Rendering
pub const GLOW_RADIUS_SCALE: f64 = 2.4; // glow radius = size * scale
pub const GLOW_FADE_STOP: f64 = 0.6; // gradient offset where glow reaches transparent
pub const GLYPH_TILT_MAX: f64 = 0.15; // radians
pub const GLYPH_MIN_FONT_PX: f64 = 8.0;
pub const GLYPH_FONT_FAMILY: &str = "Orbitron, monospace";
pub const SHADOW_BLUR_MIN: f64 = 6.0;
pub const SHADOW_BLUR_SCALE: f64 = 0.8;
