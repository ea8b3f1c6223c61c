use rand::{rngs::StdRng, SeedableRng};

use crate::particle::Particle;
use crate::surface::{Bounds, Surface};

/// A fixed-size population of falling particles sized to a surface.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    count: usize,
    rng: StdRng,
}

impl ParticleField {
    pub const DEFAULT_COUNT: usize = 100;

    pub fn new(bounds: Bounds, count: usize) -> Self {
        Self::with_rng(bounds, count, StdRng::from_entropy())
    }

    /// Field whose every frame is reproducible from `seed`.
    pub fn seeded(bounds: Bounds, count: usize, seed: u64) -> Self {
        Self::with_rng(bounds, count, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(bounds: Bounds, count: usize, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds,
            count,
            rng,
        };
        field.initialize(bounds, count);
        field
    }

    /// Throws away the current population and scatters `count` new particles.
    pub fn initialize(&mut self, bounds: Bounds, count: usize) {
        self.bounds = bounds;
        self.count = count;
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::scatter(bounds, rng)).collect();
        log::debug!("Scattered {} particles over {}x{}", count, bounds.width, bounds.height);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.initialize(Bounds::new(width, height), self.count);
    }

    /// Clears the whole surface, then updates and draws every particle.
    /// Returns how many particles were recycled this frame.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let Bounds { width, height } = surface.bounds();
        surface.clear_rect(0.0, 0.0, width, height);
        let mut recycled = 0;
        for particle in &mut self.particles {
            if particle.update(self.bounds, &mut self.rng) {
                recycled += 1;
            }
            particle.draw(surface);
        }
        if recycled > 0 {
            log::trace!("Recycled {} particles", recycled);
        }
        recycled
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

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
