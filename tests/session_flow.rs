//! End-to-end session scenarios through the public API

use std::time::Duration;

use glam::Vec2;
use mouse_master::Settings;
use mouse_master::consts::{MAX_LEVELS, PARTICLE_BURST};
use mouse_master::game_loop::GameLoop;
use mouse_master::renderer::{MeshRenderer, Renderer};
use mouse_master::scene::Scene;
use mouse_master::settings::QualityPreset;
use mouse_master::sim::{Clock, GamePhase, GameState, InputEvent, ManualClock};

/// Keeps the last scene it was given
#[derive(Default)]
struct Capture {
    last: Option<Scene>,
}

impl Renderer for Capture {
    fn draw(&mut self, scene: &Scene) {
        self.last = Some(scene.clone());
    }
}

fn new_game() -> GameLoop<ManualClock> {
    GameLoop::new(
        GameState::new(Settings::default(), 0xC0FFEE),
        ManualClock::default(),
    )
}

fn target_pos(game: &GameLoop<ManualClock>) -> Vec2 {
    game.state.target.as_ref().expect("active target").pos
}

fn click(pos: Vec2) -> Vec<InputEvent> {
    vec![InputEvent::PrimaryAction(pos)]
}

#[test]
fn full_run_from_setup_to_win() {
    let mut game = new_game();
    let mut out = Capture::default();

    assert_eq!(game.state.phase, GamePhase::Setup);
    let _ = game.step(&InputEvent::typed("1234"), &mut out);
    assert_eq!(game.state.phase, GamePhase::Start);

    let _ = game.step(&click(Vec2::new(960.0, 540.0)), &mut out);
    assert_eq!(game.state.phase, GamePhase::Playing);
    assert_eq!(game.state.level, 1);
    assert!(game.state.target.is_some());

    let first = game.state.target.clone().expect("target");
    let _ = game.step(&click(first.pos), &mut out);
    assert_eq!(game.state.level, 2);
    assert_eq!(game.state.particles.len(), PARTICLE_BURST);
    assert!(game.state.target.is_some());

    for _ in 0..49 {
        game.clock().advance(Duration::from_millis(500));
        let pos = target_pos(&game);
        let _ = game.step(&click(pos), &mut out);
    }
    assert_eq!(game.state.phase, GamePhase::Win);
    assert_eq!(game.state.level, MAX_LEVELS + 1);

    let scene = out.last.as_ref().expect("scene drawn");
    assert_eq!(scene.phase, GamePhase::Win);
    assert!(scene.has_text("YOU DID IT!"));

    // Play again
    let _ = game.step(&click(Vec2::ZERO), &mut out);
    assert_eq!(game.state.phase, GamePhase::Start);
    assert_eq!(game.state.level, 1);
}

#[test]
fn lock_mid_game_and_resume_with_code() {
    let mut game = new_game();
    let mut mesh = MeshRenderer::new(QualityPreset::Low);

    let _ = game.step(&InputEvent::typed("1234"), &mut mesh);
    let _ = game.step(&click(Vec2::ZERO), &mut mesh);
    for _ in 0..3 {
        let pos = target_pos(&game);
        let _ = game.step(&click(pos), &mut mesh);
    }
    assert_eq!(game.state.level, 4);
    let level_target = target_pos(&game);

    game.clock().advance(game.state.time_limit());
    let _ = game.step(&[], &mut mesh);
    assert_eq!(game.state.phase, GamePhase::Locked);
    assert_eq!(game.state.previous_phase, GamePhase::Playing);
    assert!(mesh.labels.iter().any(|l| l.text == "TIME'S UP!"));

    // Clicks do nothing while locked
    let _ = game.step(&click(level_target), &mut mesh);
    assert_eq!(game.state.level, 4);

    let _ = game.step(&InputEvent::typed("0000"), &mut mesh);
    assert_eq!(game.state.phase, GamePhase::Locked);
    assert_eq!(game.state.input_buffer, "0000");

    let mut retry = vec![InputEvent::TextDelete; 4];
    retry.extend(InputEvent::typed("1234"));
    let _ = game.step(&retry, &mut mesh);
    assert_eq!(game.state.phase, GamePhase::Playing);
    assert_eq!(game.state.level, 4);
    assert_eq!(target_pos(&game), level_target);

    // A fresh session starts at the unlock
    let now = game.clock().now();
    assert_eq!(game.state.time_remaining(now), game.state.time_limit());
}

#[test]
fn quit_ends_session_from_lock_screen() {
    let mut game = new_game();
    let mut out = Capture::default();
    let _ = game.step(&InputEvent::typed("1234"), &mut out);
    game.clock().advance(game.state.time_limit());
    let _ = game.step(&[], &mut out);
    assert_eq!(game.state.phase, GamePhase::Locked);

    let flow = game.step(&[InputEvent::Cancel], &mut out);
    assert!(flow.is_break());
    assert!(!game.state.running);
}
