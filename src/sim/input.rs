//! Discrete input events and the input source contract

use std::collections::VecDeque;

use glam::Vec2;

/// One input event, already decoded from the platform's raw events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Escape pressed
    Cancel,
    /// Mouse click / tap at a screen position
    PrimaryAction(Vec2),
    /// Pointer moved (drives the custom cursor)
    PointerMoved(Vec2),
    /// Typed character
    TextChar(char),
    /// Backspace
    TextDelete,
    /// Enter
    TextSubmit,
}

impl InputEvent {
    /// True for events that end the game loop
    pub fn is_exit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::Cancel)
    }

    /// Events that type `text` followed by Enter
    pub fn typed(text: &str) -> Vec<InputEvent> {
        text.chars()
            .map(InputEvent::TextChar)
            .chain(std::iter::once(InputEvent::TextSubmit))
            .collect()
    }
}

/// Producer of input events, polled once per frame
pub trait InputSource {
    /// Append every pending event to `out`, oldest first
    fn poll(&mut self, out: &mut Vec<InputEvent>);
}

/// Replays a fixed list of per-frame event batches
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events delivered on the next unscripted frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) -> &mut Self {
        self.frames.push_back(events);
        self
    }

    /// Queue a frame with no input
    pub fn idle(&mut self) -> &mut Self {
        self.push_frame(Vec::new())
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, out: &mut Vec<InputEvent>) {
        if let Some(frame) = self.frames.pop_front() {
            out.extend(frame);
        }
    }
}
