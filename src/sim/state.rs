//! Game state machine
//!
//! `GameState` owns everything that changes during a session: the phase, the
//! level counter, the active target, the particles, the parental secret and
//! the text entry buffer. It is created once in `Setup` and lives for the
//! whole process; nothing here is persisted.

use std::ops::ControlFlow;
use std::time::Duration;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::SessionClock;
use super::input::InputEvent;
use super::particle::Particle;
use super::target::{Target, TargetColor};
use crate::Settings;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Parent picks the secret code
    Setup,
    /// Title screen, waiting for a click
    Start,
    /// Active gameplay
    Playing,
    /// All levels cleared
    Win,
    /// Session time used up, waiting for the secret code
    Locked,
}

impl GamePhase {
    /// Phases the session timer can interrupt
    pub fn is_lockable(self) -> bool {
        matches!(self, GamePhase::Start | GamePhase::Playing | GamePhase::Win)
    }

    /// Phases that accept typed text
    pub fn accepts_text(self) -> bool {
        matches!(self, GamePhase::Setup | GamePhase::Locked)
    }
}

/// Things that happened during a frame, drained by the shell for logging or sound
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Secret code stored, session timer started
    SecretSet,
    /// Left the title screen
    Started,
    /// Target for `level` was clicked
    TargetHit {
        level: u32,
        pos: Vec2,
        color: TargetColor,
    },
    /// Final level cleared
    Won,
    /// Back to the title screen after a win
    Restarted,
    /// Session timer ran out
    Locked { resume: GamePhase },
    /// Correct code entered
    Unlocked { resume: GamePhase },
    /// Wrong code entered
    UnlockRejected,
    /// Quit or cancel received
    Quit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub settings: Settings,
    /// Current phase
    pub phase: GamePhase,
    /// Phase to resume once unlocked
    pub previous_phase: GamePhase,
    /// Current level, 1-based; `max_levels + 1` after a win
    pub level: u32,
    /// Target for the current level (only while playing or locked mid-game)
    pub target: Option<Target>,
    /// Visual particles
    pub particles: Vec<Particle>,
    /// Text typed on the setup/lock screens
    pub input_buffer: String,
    /// Time since the secret was set or the last unlock
    pub session: SessionClock,
    /// Last known pointer position, screen center until the pointer moves
    pub cursor: Vec2,
    /// Frames simulated so far
    pub time_ticks: u64,
    /// Cleared by quit/cancel
    pub running: bool,
    secret: String,
    events: Vec<GameEvent>,
    rng: R,
}

impl GameState<Pcg32> {
    /// Create a new game state with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game state drawing randomness from `rng`
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        let center = Vec2::new(settings.screen_width, settings.screen_height) / 2.0;
        Self {
            settings,
            phase: GamePhase::Setup,
            previous_phase: GamePhase::Start,
            level: 1,
            target: None,
            particles: Vec::new(),
            input_buffer: String::with_capacity(INPUT_MAX_CHARS),
            session: SessionClock::new(),
            cursor: center,
            time_ticks: 0,
            running: true,
            secret: String::new(),
            events: Vec::new(),
            rng,
        }
    }

    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.settings.screen_width, self.settings.screen_height)
    }

    pub fn max_levels(&self) -> u32 {
        self.settings.max_levels
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.settings.time_limit_secs)
    }

    /// The stored secret code (empty until set up)
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Fraction of levels cleared, 0..=1
    pub fn progress(&self) -> f32 {
        ((self.level - 1) as f32 / self.max_levels() as f32).min(1.0)
    }

    /// Session time left before the lock engages
    pub fn time_remaining(&self, now: Duration) -> Duration {
        self.session.remaining(now, self.time_limit())
    }

    /// Take the events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn the target for the current level and clear old particles
    pub fn start_level(&mut self) {
        self.spawn_target();
        self.particles.clear();
    }

    fn spawn_target(&mut self) {
        let screen = self.screen();
        self.target = Some(Target::spawn(self.level, screen, &mut self.rng));
    }

    /// Emit a confetti burst at `pos`
    pub fn spawn_particles(&mut self, pos: Vec2, color: TargetColor) {
        self.particles.reserve(PARTICLE_BURST);
        for _ in 0..PARTICLE_BURST {
            let particle = Particle::spawn(pos, color, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Lock the game if the session time limit has been reached
    pub fn check_session(&mut self, now: Duration) {
        if self.phase.is_lockable() && self.session.has_expired(now, self.time_limit()) {
            self.lock();
        }
    }

    fn lock(&mut self) {
        log::info!(
            "Session time limit reached, locking (interrupted {:?} at level {})",
            self.phase,
            self.level
        );
        self.previous_phase = self.phase;
        self.phase = GamePhase::Locked;
        self.input_buffer.clear();
        self.events.push(GameEvent::Locked {
            resume: self.previous_phase,
        });
    }

    /// Apply one input event. Returns `Break` when the game should exit.
    pub fn handle_event(&mut self, event: &InputEvent, now: Duration) -> ControlFlow<()> {
        match *event {
            InputEvent::Quit | InputEvent::Cancel => {
                log::info!("Quit requested");
                self.running = false;
                self.events.push(GameEvent::Quit);
                return ControlFlow::Break(());
            }
            InputEvent::PrimaryAction(pos) => {
                self.cursor = pos;
                self.click(pos);
            }
            InputEvent::PointerMoved(pos) => self.cursor = pos,
            InputEvent::TextChar(c) => self.type_char(c),
            InputEvent::TextDelete => self.delete_char(),
            InputEvent::TextSubmit => self.submit(now),
        }
        ControlFlow::Continue(())
    }

    /// Primary action at `pos`
    pub fn click(&mut self, pos: Vec2) {
        match self.phase {
            GamePhase::Start => {
                log::info!("Starting at level {}", self.level);
                self.phase = GamePhase::Playing;
                self.start_level();
                self.events.push(GameEvent::Started);
            }
            GamePhase::Playing => self.try_hit(pos),
            GamePhase::Win => {
                self.level = 1;
                self.phase = GamePhase::Start;
                self.events.push(GameEvent::Restarted);
            }
            GamePhase::Setup | GamePhase::Locked => {}
        }
    }

    fn try_hit(&mut self, pos: Vec2) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        if !target.check_hit(pos) {
            return;
        }
        target.clicked = true;
        let (hit_pos, color) = (target.pos, target.color);

        self.spawn_particles(hit_pos, color);
        self.events.push(GameEvent::TargetHit {
            level: self.level,
            pos: hit_pos,
            color,
        });
        self.level += 1;

        if self.level > self.max_levels() {
            log::info!("All {} levels cleared", self.max_levels());
            self.target = None;
            self.phase = GamePhase::Win;
            self.events.push(GameEvent::Won);
        } else {
            log::debug!("Level {} cleared", self.level - 1);
            // Particles from the hit keep flying while the next target pops in
            self.spawn_target();
        }
    }

    /// Append a typed character on the setup/lock screens
    pub fn type_char(&mut self, c: char) {
        if !self.phase.accepts_text() || c.is_control() {
            return;
        }
        if self.input_buffer.chars().count() < INPUT_MAX_CHARS {
            self.input_buffer.push(c);
        }
    }

    /// Remove the last typed character on the setup/lock screens
    pub fn delete_char(&mut self) {
        if self.phase.accepts_text() {
            self.input_buffer.pop();
        }
    }

    /// Submit the text buffer: sets the secret in `Setup`, checks it in `Locked`
    pub fn submit(&mut self, now: Duration) {
        match self.phase {
            GamePhase::Setup => {
                let code = self.input_buffer.trim();
                if code.is_empty() {
                    return;
                }
                self.secret = code.to_string();
                self.input_buffer.clear();
                self.session.reset(now);
                self.phase = GamePhase::Start;
                log::info!(
                    "Secret code set, session limit {}s",
                    self.settings.time_limit_secs
                );
                self.events.push(GameEvent::SecretSet);
            }
            GamePhase::Locked => {
                if self.input_buffer.trim() == self.secret {
                    self.phase = self.previous_phase;
                    self.session.reset(now);
                    self.input_buffer.clear();
                    log::info!("Unlocked, resuming {:?}", self.phase);
                    self.events.push(GameEvent::Unlocked { resume: self.phase });
                } else {
                    // Buffer is kept so the parent can correct a typo
                    log::warn!("Incorrect unlock code");
                    self.events.push(GameEvent::UnlockRejected);
                }
            }
            _ => {}
        }
    }

    /// Advance the target (while playing) and the particles by one frame
    pub fn update(&mut self) {
        if self.phase == GamePhase::Playing {
            if let Some(target) = self.target.as_mut() {
                target.update();
            }
        }

        for particle in self.particles.iter_mut() {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);

        self.time_ticks += 1;
    }
}
