//! Mouse Master - a reflex-training click game with a parental session lock
//!
//! Core modules:
//! - `sim`: Deterministic game state machine (targets, particles, session lock)
//! - `scene`: Per-frame draw description handed to the renderer
//! - `renderer`: Renderer contract plus mesh and logging implementations
//! - `game_loop`: Binds a state machine to a clock, input source and renderer
//! - `autopilot`: Scripted player for headless runs
//! - `settings`: Data-driven configuration

pub mod autopilot;
pub mod game_loop;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError, SettingsResult};

/// RGBA color with components in 0..=1
pub type Rgba = [f32; 4];

/// Game configuration constants
pub mod consts {
    /// Target frame rate (updates per second)
    pub const FPS: u32 = 60;
    /// Session length before the parental lock engages
    pub const TIME_LIMIT_SECONDS: u64 = 15 * 60;
    /// Number of levels in a full run
    pub const MAX_LEVELS: u32 = 50;

    /// Default screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Target radius at level 0, shrinking per level down to the minimum
    pub const TARGET_MAX_RADIUS: f32 = 120.0;
    pub const TARGET_MIN_RADIUS: f32 = 40.0;
    pub const TARGET_RADIUS_STEP: f32 = 1.6;
    /// Extra margin between a freshly spawned target and the screen edge
    pub const SPAWN_PADDING: f32 = 50.0;
    /// Targets stand still up to this level
    pub const SPEED_START_LEVEL: u32 = 20;
    /// Speed gained per level past `SPEED_START_LEVEL` (pixels/frame)
    pub const SPEED_PER_LEVEL: f32 = 0.15;
    /// Pop-in growth of the drawn radius (pixels/frame)
    pub const SPAWN_ANIM_SPEED: f32 = 10.0;

    /// Particles emitted per successful hit
    pub const PARTICLE_BURST: usize = 20;
    /// Size lost per frame
    pub const PARTICLE_SHRINK: f32 = 0.1;

    /// Maximum characters in the code entry buffer
    pub const INPUT_MAX_CHARS: usize = 20;
}

/// Color palette
pub mod palette {
    use crate::Rgba;

    const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: Rgba = rgb(40, 44, 52);
    pub const LOCKED_BACKGROUND: Rgba = rgb(20, 22, 26);
    pub const TEXT: Rgba = rgb(220, 223, 228);
    pub const HINT: Rgba = rgb(150, 150, 150);
    pub const INPUT_BACKGROUND: Rgba = rgb(60, 64, 72);
    pub const PROGRESS_TRACK: Rgba = rgb(30, 34, 40);
    pub const SHADOW: Rgba = rgb(30, 30, 30);
    pub const WHITE: Rgba = rgb(255, 255, 255);

    // Target colors
    pub const RED: Rgba = rgb(255, 107, 107);
    pub const TEAL: Rgba = rgb(78, 205, 196);
    pub const YELLOW: Rgba = rgb(255, 230, 109);
    pub const MINT: Rgba = rgb(168, 230, 207);
    pub const ORANGE: Rgba = rgb(255, 159, 67);
}
