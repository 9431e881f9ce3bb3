pub mod aquarium;

use glam::Vec2;

use crate::sizing::Dimensions;

pub const MIN_BUBBLE_RADIUS: f32 = 6.0;
pub const MAX_BUBBLE_RADIUS: f32 = 12.0;
pub const MIN_BUBBLE_VELOCITY: f32 = 1.0;
pub const MAX_BUBBLE_VELOCITY: f32 = 2.5;
/// Upper bound of the initial phase counter.
pub const MAX_BUBBLE_COUNT: f32 = 100.0;

pub const MIN_MOTIF_SIZE: f32 = 28.0;
pub const MAX_MOTIF_SIZE: f32 = 64.0;
pub const MIN_MOTIF_VELOCITY: f32 = 2.0;
pub const MAX_MOTIF_VELOCITY: f32 = 7.0;
/// Alpha byte range, max exclusive.
pub const MIN_MOTIF_TRANSPARENCY: u8 = 64;
pub const MAX_MOTIF_TRANSPARENCY: u8 = 208;

/// Uniform sample in [min, max).
pub fn random(rng: &mut fastrand::Rng, min: f32, max: f32) -> f32 {
    rng.f32() * (max - min) + min
}

/// A rising air bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    /// Center, in surface pixels.
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels risen per tick.
    pub velocity: f32,
    /// Phase input for the sideways wobble.
    pub count: f32,
}

impl Bubble {
    /// A fresh bubble just below the bottom edge.
    pub fn spawn(rng: &mut fastrand::Rng, dims: Dimensions) -> Self {
        Self {
            pos: Vec2::new(
                random(rng, 0.0, dims.width),
                dims.height + MAX_BUBBLE_RADIUS,
            ),
            radius: random(rng, MIN_BUBBLE_RADIUS, MAX_BUBBLE_RADIUS),
            velocity: random(rng, MIN_BUBBLE_VELOCITY, MAX_BUBBLE_VELOCITY),
            count: random(rng, 0.0, MAX_BUBBLE_COUNT),
        }
    }

    /// Initial population: anywhere over the full height so the first frame
    /// doesn't show one synchronized wave.
    pub fn scattered(rng: &mut fastrand::Rng, dims: Dimensions) -> Self {
        let mut bubble = Self::spawn(rng, dims);
        bubble.pos.y = random(rng, 0.0, dims.height + MAX_BUBBLE_RADIUS);
        bubble
    }
}

/// A swimming fish glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motif {
    /// Top-left of the glyph box.
    pub pos: Vec2,
    /// Glyph box edge in pixels.
    pub size: f32,
    /// Cruise speed in pixels per tick.
    pub speed: f32,
    /// Alpha byte applied to the fish color.
    pub transparency: u8,
    /// Heading in radians; 0 swims toward +x.
    pub heading: f32,
    /// Circling the bait with a held heading.
    pub eating: bool,
}

impl Motif {
    /// A fresh fish entering from the edge it swims away from.
    pub fn spawn(rng: &mut fastrand::Rng, dims: Dimensions) -> Self {
        let size = random(rng, MIN_MOTIF_SIZE, MAX_MOTIF_SIZE);
        let leftward = rng.bool();
        let x = if leftward { dims.width } else { -size };
        Self {
            pos: Vec2::new(x, random(rng, 0.0, (dims.height - MAX_MOTIF_SIZE).max(0.0))),
            size,
            speed: random(rng, MIN_MOTIF_VELOCITY, MAX_MOTIF_VELOCITY),
            transparency: rng.u8(MIN_MOTIF_TRANSPARENCY..MAX_MOTIF_TRANSPARENCY),
            heading: if leftward { std::f32::consts::PI } else { 0.0 },
            eating: false,
        }
    }

    /// Initial population, spread across the width.
    pub fn scattered(rng: &mut fastrand::Rng, dims: Dimensions) -> Self {
        let mut motif = Self::spawn(rng, dims);
        motif.pos.x = random(rng, -motif.size, dims.width);
        motif
    }

    pub fn facing_left(&self) -> bool {
        self.heading.cos() < 0.0
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    /// Fully outside the surface on the side it is swimming toward.
    pub fn has_exited(&self, dims: Dimensions) -> bool {
        if self.facing_left() {
            self.pos.x < -self.size
        } else {
            self.pos.x > dims.width
        }
    }
}
