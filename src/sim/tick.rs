//! Per-frame simulation step
//!
//! Core game loop body that advances the state machine by one frame.

use std::ops::ControlFlow;
use std::time::Duration;

use rand::Rng;

use super::input::InputEvent;
use super::state::GameState;

/// Advance the game by one frame.
///
/// Order matters: the session lock is checked first, then every pending
/// event is applied in order, then the world moves. A quit or cancel event
/// stops the frame immediately and returns `Break`.
pub fn tick<R: Rng>(
    state: &mut GameState<R>,
    events: &[InputEvent],
    now: Duration,
) -> ControlFlow<()> {
    state.check_session(now);

    for event in events {
        state.handle_event(event, now)?;
    }

    state.update();
    ControlFlow::Continue(())
}
