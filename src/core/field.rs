use super::constants::*;
use super::particle::Particle;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Population and timing knobs for a [`ParticleField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub min_particles: usize,
    pub area_per_particle: f64,
    pub phase_step: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min_particles: MIN_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,
            phase_step: PHASE_STEP,
        }
    }
}

impl FieldConfig {
    /// `max(min_particles, round(width * height / area_per_particle))`
    pub fn particle_count(&self, width: u32, height: u32) -> usize {
        let area = width as f64 * height as f64;
        let scaled = (area / self.area_per_particle).round() as usize;
        scaled.max(self.min_particles)
    }
}

/// Particle count for a viewport under the default config.
pub fn particle_count(width: u32, height: u32) -> usize {
    FieldConfig::default().particle_count(width, height)
}

/// The animated background: a fixed-size set of glyph particles plus the
/// shared phase that drives their wobble and tilt.
///
/// Typical usage:
/// - Construct with `ParticleField::new(w, h, seed)` (or `from_entropy`)
/// - Call `update()` then `render(theme, surface)` once per display frame
/// - Call `resize(w, h)` when the viewport changes and `randomize_labels()`
///   when the theme is switched
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    phase: f64,
    config: FieldConfig,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        Self::with_config(
            width,
            height,
            FieldConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Field seeded from the platform RNG (`crypto.getRandomValues` on the web).
    pub fn from_entropy(width: u32, height: u32) -> Self {
        Self::with_config(
            width,
            height,
            FieldConfig::default(),
            StdRng::from_entropy(),
        )
    }

    pub fn with_config(width: u32, height: u32, config: FieldConfig, rng: StdRng) -> Self {
        let mut field = Self {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            phase: 0.0,
            config,
            rng,
        };
        field.resize(width, height);
        field
    }

    /// Adopt a new viewport and rebuild every particle from scratch.
    /// The phase keeps running.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
        let count = self.config.particle_count(width, height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(&mut self.rng, self.width, self.height));
        }
        self.particles = particles;
    }

    /// Advance the phase and move every particle one frame.
    pub fn update(&mut self) {
        self.phase += self.config.phase_step;
        for p in &mut self.particles {
            p.step(self.phase, self.width, self.height);
        }
    }

    /// Redraw every label and hue seed. Motion, size and alpha are kept.
    pub fn randomize_labels(&mut self) {
        for p in &mut self.particles {
            p.reroll_label(&mut self.rng);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
