//! Ambient particle field drawn behind the timer.
//!
//! Coordinates are in terminal cells; velocities in cells per second so the
//! motion does not depend on frame rate.

use std::time::Duration;

pub const PARTICLE_COUNT: usize = 50;

/// Horizontal speed limit. Vertical is half, since cells are about twice as tall as wide.
const MAX_SPEED_X: f32 = 1.5;
const MAX_SPEED_Y: f32 = MAX_SPEED_X / 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// 1.0..4.0; the renderer maps it to a glyph size.
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    /// 0.2..0.7
    pub opacity: f32,
}

impl Particle {
    fn random(width: f32, height: f32) -> Self {
        Self {
            x: rand::random::<f32>() * width,
            y: rand::random::<f32>() * height,
            radius: rand::random::<f32>() * 3.0 + 1.0,
            speed_x: (rand::random::<f32>() - 0.5) * 2.0 * MAX_SPEED_X,
            speed_y: (rand::random::<f32>() - 0.5) * 2.0 * MAX_SPEED_Y,
            opacity: rand::random::<f32>() * 0.5 + 0.2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (f32::from(width), f32::from(height));
        Self {
            particles: (0..PARTICLE_COUNT)
                .map(|_| Particle::random(width, height))
                .collect(),
            width,
            height,
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn bounds(&self) -> (u16, u16) {
        (self.width as u16, self.height as u16)
    }

    /// Adopt new bounds; particles left outside are pulled back in.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = f32::from(width);
        self.height = f32::from(height);
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    /// Move every particle, reversing direction at the edges.
    pub fn step(&mut self, delta: Duration) {
        let dt = delta.as_secs_f32();
        for p in &mut self.particles {
            p.x += p.speed_x * dt;
            p.y += p.speed_y * dt;
            if p.x < 0.0 || p.x > self.width {
                p.speed_x = -p.speed_x;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y < 0.0 || p.y > self.height {
                p.speed_y = -p.speed_y;
                p.y = p.y.clamp(0.0, self.height);
            }
        }
    }
}
