//! Mouse Master entry point
//!
//! The game core has no window of its own. Natively this runs a headless
//! autopilot session: simulated time at the configured frame rate, scenes
//! tessellated into a vertex buffer, game events logged. Set `RUST_LOG=info`
//! to follow along.

use std::time::{SystemTime, UNIX_EPOCH};

use mouse_master::Settings;
use mouse_master::autopilot::AutoPilot;
use mouse_master::game_loop::GameLoop;
use mouse_master::renderer::{LogRenderer, MeshRenderer, Renderer};
use mouse_master::scene::Scene;
use mouse_master::sim::{Clock, GameEvent, GameState, ManualClock};

/// Demo secret typed by the autopilot
const DEMO_CODE: &str = "1234";
/// Safety stop for the headless run (one hour of simulated frames)
const MAX_FRAMES: u64 = 60 * 60 * 60;

/// Fans a scene out to several renderers
struct Tee<'a>(Vec<&'a mut dyn Renderer>);

impl Renderer for Tee<'_> {
    fn draw(&mut self, scene: &Scene) {
        for renderer in self.0.iter_mut() {
            renderer.draw(scene);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Mouse Master (headless) starting...");

    let settings = Settings::from_env().unwrap_or_else(|err| {
        log::warn!("{}; falling back to default settings", err);
        Settings::default()
    });

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    log::info!("Game initialized with seed: {}", seed);

    let frame = settings.frame_duration();
    let mut mesh = MeshRenderer::new(settings.quality);
    let mut logger = LogRenderer::new();
    let mut game = GameLoop::new(GameState::new(settings, seed), ManualClock::default());
    let mut pilot = AutoPilot::new(DEMO_CODE);

    let mut frames = 0;
    let mut peak_vertices = 0;
    while frames < MAX_FRAMES {
        let events = pilot.plan(&game.state);
        let flow = {
            let mut out = Tee(vec![&mut mesh as &mut dyn Renderer, &mut logger]);
            game.step(&events, &mut out)
        };
        for event in game.drain_events() {
            log_event(&event);
        }
        if flow.is_break() {
            break;
        }
        peak_vertices = peak_vertices.max(mesh.vertices.len());
        game.clock().advance(frame);
        frames += 1;
    }

    println!(
        "Finished after {} frames ({:.1}s simulated), reached level {}, peak {} vertices",
        frames,
        game.clock().now().as_secs_f64(),
        game.state.level.min(game.state.max_levels()),
        peak_vertices
    );
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::TargetHit { level, pos, .. } => {
            log::info!("Level {} cleared at ({:.0}, {:.0})", level, pos.x, pos.y)
        }
        GameEvent::Won => log::info!("YOU DID IT!"),
        GameEvent::Locked { resume } => log::info!("Time's up, locked during {:?}", resume),
        other => log::debug!("{:?}", other),
    }
}
