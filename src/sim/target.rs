//! Clickable targets and the difficulty curve
//!
//! A target is spawned per level. Its size shrinks and its speed grows with
//! the level number; both come from fixed formulas so every run of a given
//! seed plays out the same way.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rgba;
use crate::consts::*;
use crate::palette;

/// Target fill colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetColor {
    Red,
    Teal,
    Yellow,
    Mint,
    Orange,
}

impl TargetColor {
    pub const ALL: [TargetColor; 5] = [
        TargetColor::Red,
        TargetColor::Teal,
        TargetColor::Yellow,
        TargetColor::Mint,
        TargetColor::Orange,
    ];

    pub const fn rgba(self) -> Rgba {
        match self {
            TargetColor::Red => palette::RED,
            TargetColor::Teal => palette::TEAL,
            TargetColor::Yellow => palette::YELLOW,
            TargetColor::Mint => palette::MINT,
            TargetColor::Orange => palette::ORANGE,
        }
    }
}

/// Target radius for a level: 120px shrinking by 1.6px per level, never below 40px
pub fn radius_for_level(level: u32) -> u32 {
    let radius = (TARGET_MAX_RADIUS - level as f32 * TARGET_RADIUS_STEP).round();
    radius.max(TARGET_MIN_RADIUS) as u32
}

/// Target speed for a level (pixels/frame): still until level 20, then +0.15 per level
pub fn speed_for_level(level: u32) -> f32 {
    if level <= SPEED_START_LEVEL {
        0.0
    } else {
        (level - SPEED_START_LEVEL) as f32 * SPEED_PER_LEVEL
    }
}

/// The circle the player has to click
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    /// Hit radius, fixed for the target's lifetime
    pub radius: u32,
    /// Drawn radius, grows from 0 to `radius` (pop-in effect)
    pub current_radius: f32,
    /// Movement per frame
    pub vel: Vec2,
    pub color: TargetColor,
    pub clicked: bool,
    /// Screen size the target bounces inside
    bounds: Vec2,
}

impl Target {
    /// Spawn the target for `level` somewhere fully on screen
    pub fn spawn<R: Rng>(level: u32, bounds: Vec2, rng: &mut R) -> Self {
        let radius = radius_for_level(level);
        let speed = speed_for_level(level);

        let padding = radius as f32 + SPAWN_PADDING;
        let x = random_coord(rng, padding, bounds.x);
        let y = random_coord(rng, padding, bounds.y);

        let dx = if rng.random_bool(0.5) { speed } else { -speed };
        let dy = if rng.random_bool(0.5) { speed } else { -speed };

        let color = TargetColor::ALL[rng.random_range(0..TargetColor::ALL.len())];

        log::debug!(
            "Level {} target: radius={} speed={:.2} at ({:.0}, {:.0})",
            level,
            radius,
            speed,
            x,
            y
        );

        Self {
            pos: Vec2::new(x, y),
            radius,
            current_radius: 0.0,
            vel: Vec2::new(dx, dy),
            color,
            clicked: false,
            bounds,
        }
    }

    /// Advance the pop-in animation and move, bouncing off the screen edges
    pub fn update(&mut self) {
        let radius = self.radius as f32;
        if self.current_radius < radius {
            self.current_radius = (self.current_radius + SPAWN_ANIM_SPEED).min(radius);
        }

        self.pos += self.vel;

        // Reflection only; the position is not pulled back inside
        if self.pos.x - radius < 0.0 || self.pos.x + radius > self.bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - radius < 0.0 || self.pos.y + radius > self.bounds.y {
            self.vel.y = -self.vel.y;
        }
    }

    /// True if `point` lies within the hit radius.
    ///
    /// Always tests against the full radius, so a click during the pop-in
    /// animation still counts.
    pub fn check_hit(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius as f32
    }

    /// True once the pop-in animation has finished
    pub fn is_fully_spawned(&self) -> bool {
        self.current_radius >= self.radius as f32
    }
}

/// Uniform coordinate in `[padding, extent - padding]`, or the center when the screen is too small
fn random_coord<R: Rng>(rng: &mut R, padding: f32, extent: f32) -> f32 {
    let lo = padding;
    let hi = extent - padding;
    if lo < hi {
        rng.random_range(lo..=hi)
    } else {
        extent / 2.0
    }
}
