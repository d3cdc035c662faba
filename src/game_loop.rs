//! Frame loop glue
//!
//! Each frame: drain input, tick the state machine, hand the scene to the
//! renderer. Pacing between frames is left to the caller.

use std::ops::ControlFlow;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::renderer::Renderer;
use crate::scene::build_scene;
use crate::sim::{Clock, GameEvent, GameState, InputEvent, InputSource, tick};

/// A game state bound to a time source
pub struct GameLoop<C, R = Pcg32> {
    pub state: GameState<R>,
    clock: C,
    /// Reused per-frame event buffer
    events: Vec<InputEvent>,
}

impl<C: Clock, R: Rng> GameLoop<C, R> {
    pub fn new(state: GameState<R>, clock: C) -> Self {
        Self {
            state,
            clock,
            events: Vec::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run one frame with events from `input`
    pub fn run_frame(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> ControlFlow<()> {
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        input.poll(&mut events);
        let flow = self.step(&events, renderer);
        self.events = events;
        flow
    }

    /// Run one frame with an explicit event batch
    pub fn step(&mut self, events: &[InputEvent], renderer: &mut dyn Renderer) -> ControlFlow<()> {
        let now = self.clock.now();
        tick(&mut self.state, events, now)?;
        renderer.draw(&build_scene(&self.state));
        ControlFlow::Continue(())
    }

    /// Run frames until a quit or cancel event, returning the frames drawn.
    /// `pace` is called after every frame (sleep, vsync, advance a test clock).
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        mut pace: impl FnMut(&C),
    ) -> u64 {
        let mut frames = 0;
        while self.run_frame(input, renderer).is_continue() {
            frames += 1;
            pace(&self.clock);
        }
        frames
    }

    /// Take the game events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
