//! Scripted player for headless runs and demos
//!
//! Looks at the game state each frame and produces the events a player (and
//! a parent) would: set the code, start, click each target once it has popped
//! in, unlock when the session runs out.

use glam::Vec2;
use rand::Rng;

use crate::sim::{GamePhase, GameState, InputEvent};

/// Plays the game by reading the state directly
#[derive(Debug, Clone)]
pub struct AutoPilot {
    code: String,
    /// Full runs to finish before quitting
    runs: u32,
}

impl AutoPilot {
    /// Autopilot that uses `code` as the secret and quits after one run
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            runs: 1,
        }
    }

    pub fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs.max(1);
        self
    }

    /// Events for the coming frame
    pub fn plan<R: Rng>(&mut self, state: &GameState<R>) -> Vec<InputEvent> {
        match state.phase {
            GamePhase::Setup | GamePhase::Locked => {
                let mut events = vec![InputEvent::TextDelete; state.input_buffer.chars().count()];
                events.extend(InputEvent::typed(&self.code));
                events
            }
            GamePhase::Start => {
                let center = state.screen() / 2.0;
                vec![InputEvent::PrimaryAction(center)]
            }
            GamePhase::Playing => match &state.target {
                Some(target) if target.is_fully_spawned() => {
                    vec![InputEvent::PrimaryAction(target.pos)]
                }
                Some(target) => vec![InputEvent::PointerMoved(target.pos)],
                None => Vec::new(),
            },
            GamePhase::Win => {
                self.runs = self.runs.saturating_sub(1);
                if self.runs == 0 {
                    vec![InputEvent::Quit]
                } else {
                    vec![InputEvent::PrimaryAction(Vec2::ZERO)]
                }
            }
        }
    }
}
