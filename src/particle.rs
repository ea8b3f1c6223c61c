use std::f32::consts::TAU;

use rand::Rng;

use crate::surface::{
    Bounds,
    Surface,
    BEAN_BODY,
    BEAN_CREASE,
    STAR,
};

/// Chance that a freshly (re)spawned particle is a coffee bean.
pub const BEAN_PROBABILITY: f64 = 0.3;
/// How far above the top edge a recycled particle re-enters.
pub const RESPAWN_OFFSET: f32 = 20.0;

pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 4.0;
pub const MIN_SPEED: f32 = 0.2;
pub const MAX_SPEED: f32 = 1.2;
pub const MAX_SPIN: f32 = 0.025;
pub const MIN_OPACITY: f32 = 0.2;
pub const MAX_OPACITY: f32 = 0.7;

const CREASE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Bean,
    Star,
}

pub fn choose_variant<R: Rng + ?Sized>(rng: &mut R) -> Variant {
    if rng.gen_bool(BEAN_PROBABILITY) {
        Variant::Bean
    } else {
        Variant::Star
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub angle: f32,
    pub spin: f32,
    pub variant: Variant,
    pub opacity: f32,
}

impl Particle {
    /// Particle placed anywhere on the surface, used when the field is (re)built.
    pub fn scatter<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let mut particle = Self::respawn(bounds, rng);
        particle.y = rng.gen::<f32>()*bounds.height;
        particle
    }

    /// Particle waiting just above the top edge.
    pub fn respawn<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f32>()*bounds.width,
            y: -RESPAWN_OFFSET,
            size: rng.gen::<f32>()*(MAX_SIZE - MIN_SIZE) + MIN_SIZE,
            speed: rng.gen::<f32>()*(MAX_SPEED - MIN_SPEED) + MIN_SPEED,
            angle: rng.gen::<f32>()*TAU,
            spin: (rng.gen::<f32>() - 0.5)*MAX_SPIN*2.0,
            variant: choose_variant(rng),
            opacity: rng.gen::<f32>()*(MAX_OPACITY - MIN_OPACITY) + MIN_OPACITY,
        }
    }

    /// Advances one frame. Returns true if the particle fell off the bottom
    /// and was recycled.
    pub fn update<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) -> bool {
        self.y += self.speed;
        self.angle += self.spin;
        if self.y > bounds.height {
            *self = Self::respawn(bounds, rng);
            true
        } else {
            false
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.angle);
        surface.set_global_alpha(self.opacity);

        match self.variant {
            Variant::Bean => {
                surface.fill_ellipse(0.0, 0.0, self.size*2.0, self.size*1.2, BEAN_BODY);
                surface.stroke_quadratic(
                    [-self.size, 0.0],
                    [0.0, -self.size*0.5],
                    [self.size, 0.0],
                    CREASE_WIDTH,
                    BEAN_CREASE,
                );
            },
            Variant::Star => {
                surface.fill_circle(0.0, 0.0, self.size/2.0, STAR);
            },
        }

        surface.restore();
    }
}
