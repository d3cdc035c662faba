//! Confetti particles burst from a target when it is clicked

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::target::TargetColor;
use crate::consts::PARTICLE_SHRINK;

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: TargetColor,
    /// Frames left to live
    pub life: i32,
    pub size: f32,
}

impl Particle {
    /// Spawn a particle flying off in a random direction
    pub fn spawn<R: Rng>(pos: Vec2, color: TargetColor, rng: &mut R) -> Self {
        let speed = rng.random_range(2.0..=6.0f32);
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let life = rng.random_range(20..=40);
        let size = rng.random_range(3..=6u8) as f32;

        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            color,
            life,
            size,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= 1;
        self.size = (self.size - PARTICLE_SHRINK).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}
