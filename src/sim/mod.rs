//! Deterministic game simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped only
//! - Injected RNG and timestamps only
//! - No rendering or platform dependencies

pub mod clock;
pub mod input;
pub mod particle;
pub mod state;
pub mod target;
pub mod tick;

pub use clock::{Clock, ManualClock, SessionClock, SystemClock};
pub use input::{InputEvent, InputSource, ScriptedInput};
pub use particle::Particle;
pub use state::{GameEvent, GamePhase, GameState};
pub use target::{Target, TargetColor, radius_for_level, speed_for_level};
pub use tick::tick;
