//! Per-frame draw description
//!
//! The simulation never draws. Each frame it is turned into a `Scene`: an
//! ordered list of shapes and text in screen pixels (origin top-left, y down)
//! that a renderer paints back to front.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rgba;
use crate::palette;
use crate::sim::{GamePhase, GameState};

/// Text size classes (the renderer picks the font)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    /// 100px bold
    Huge,
    /// 60px bold
    Large,
    /// 30px
    Small,
}

/// Where a text position sits relative to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Center,
    TopLeft,
}

/// A single draw operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear { color: Rgba },
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: Rgba },
    /// Circle outline, `width` pixels thick, drawn inward from `radius`
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgba,
    },
    /// Filled rectangle
    Rect {
        min: Vec2,
        size: Vec2,
        corner_radius: f32,
        color: Rgba,
    },
    /// Rectangle outline
    RectOutline {
        min: Vec2,
        size: Vec2,
        corner_radius: f32,
        width: f32,
        color: Rgba,
    },
    /// Single line of text
    Text {
        text: String,
        pos: Vec2,
        anchor: Anchor,
        size: FontSize,
        color: Rgba,
    },
}

/// Everything to draw for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub phase: GamePhase,
    pub screen: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    fn new(phase: GamePhase, screen: Vec2) -> Self {
        Self {
            phase,
            screen,
            commands: Vec::with_capacity(64),
        }
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Text centered horizontally, `y_offset` from the vertical center
    fn centered_text(&mut self, text: &str, size: FontSize, y_offset: f32, color: Rgba) {
        let pos = Vec2::new(self.screen.x / 2.0, self.screen.y / 2.0 + y_offset);
        self.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            anchor: Anchor::Center,
            size,
            color,
        });
    }

    /// Iterate the text lines in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

/// Code entry box size
pub const INPUT_BOX_SIZE: Vec2 = Vec2::new(400.0, 60.0);
/// Progress bar size and vertical position
pub const PROGRESS_BAR_SIZE: Vec2 = Vec2::new(800.0, 20.0);
pub const PROGRESS_BAR_Y: f32 = 50.0;
/// Custom cursor ring radius
pub const CURSOR_RADIUS: f32 = 10.0;

/// Build the draw list for the current frame
pub fn build_scene<R: Rng>(state: &GameState<R>) -> Scene {
    let mut scene = Scene::new(state.phase, state.screen());

    match state.phase {
        GamePhase::Setup => {
            scene.push(DrawCommand::Clear {
                color: palette::BACKGROUND,
            });
            scene.centered_text("PARENT SETUP", FontSize::Large, -100.0, palette::TEXT);
            scene.centered_text(
                "Set a Secret Answer/PIN to unlock:",
                FontSize::Small,
                -30.0,
                palette::TEXT,
            );
            input_box(&mut scene, &state.input_buffer);
            scene.centered_text("Press ENTER to Save", FontSize::Small, 150.0, palette::HINT);
        }
        GamePhase::Locked => {
            scene.push(DrawCommand::Clear {
                color: palette::LOCKED_BACKGROUND,
            });
            scene.centered_text("TIME'S UP!", FontSize::Large, -100.0, palette::RED);
            scene.centered_text(
                "Ask a parent to type the Secret Answer:",
                FontSize::Small,
                -30.0,
                palette::TEXT,
            );
            input_box(&mut scene, &state.input_buffer);
            scene.centered_text("Press ENTER to Unlock", FontSize::Small, 150.0, palette::HINT);
        }
        GamePhase::Start => {
            scene.push(DrawCommand::Clear {
                color: palette::BACKGROUND,
            });
            scene.centered_text("MOUSE MASTER", FontSize::Large, -50.0, palette::TEXT);
            scene.centered_text("Click to Start", FontSize::Small, 50.0, palette::HINT);
        }
        GamePhase::Playing => {
            scene.push(DrawCommand::Clear {
                color: palette::BACKGROUND,
            });
            progress_bar(&mut scene, state.progress());
            scene.push(DrawCommand::Text {
                text: state.level.to_string(),
                pos: Vec2::new(50.0, 30.0),
                anchor: Anchor::TopLeft,
                size: FontSize::Large,
                color: palette::WHITE,
            });
            if let Some(target) = &state.target {
                let radius = target.current_radius;
                scene.push(DrawCommand::Circle {
                    center: target.pos + Vec2::new(5.0, 5.0),
                    radius,
                    color: palette::SHADOW,
                });
                scene.push(DrawCommand::Circle {
                    center: target.pos,
                    radius,
                    color: target.color.rgba(),
                });
                scene.push(DrawCommand::Ring {
                    center: target.pos,
                    radius: radius * 0.7,
                    width: 3.0,
                    color: palette::WHITE,
                });
            }
        }
        GamePhase::Win => {
            scene.push(DrawCommand::Clear {
                color: palette::BACKGROUND,
            });
            scene.centered_text("YOU DID IT!", FontSize::Huge, -50.0, palette::YELLOW);
            scene.centered_text("Great Mouse Control!", FontSize::Small, 50.0, palette::TEXT);
            scene.centered_text("Click to Play Again", FontSize::Small, 100.0, palette::HINT);
        }
    }

    for particle in state.particles.iter().filter(|p| p.is_alive()) {
        scene.push(DrawCommand::Circle {
            center: particle.pos,
            radius: particle.size,
            color: particle.color.rgba(),
        });
    }

    if state.settings.show_cursor && !state.phase.accepts_text() {
        scene.push(DrawCommand::Ring {
            center: state.cursor,
            radius: CURSOR_RADIUS,
            width: 2.0,
            color: palette::WHITE,
        });
    }

    scene
}

fn input_box(scene: &mut Scene, text: &str) {
    let min = Vec2::new(
        (scene.screen.x - INPUT_BOX_SIZE.x) / 2.0,
        scene.screen.y / 2.0 + 50.0,
    );
    scene.push(DrawCommand::Rect {
        min,
        size: INPUT_BOX_SIZE,
        corner_radius: 10.0,
        color: palette::INPUT_BACKGROUND,
    });
    scene.push(DrawCommand::RectOutline {
        min,
        size: INPUT_BOX_SIZE,
        corner_radius: 10.0,
        width: 2.0,
        color: palette::TEAL,
    });
    scene.push(DrawCommand::Text {
        text: text.to_string(),
        pos: min + Vec2::new(20.0, 15.0),
        anchor: Anchor::TopLeft,
        size: FontSize::Small,
        color: palette::WHITE,
    });
}

fn progress_bar(scene: &mut Scene, progress: f32) {
    let min = Vec2::new((scene.screen.x - PROGRESS_BAR_SIZE.x) / 2.0, PROGRESS_BAR_Y);
    scene.push(DrawCommand::Rect {
        min,
        size: PROGRESS_BAR_SIZE,
        corner_radius: 10.0,
        color: palette::PROGRESS_TRACK,
    });
    if progress > 0.0 {
        scene.push(DrawCommand::Rect {
            min,
            size: Vec2::new(PROGRESS_BAR_SIZE.x * progress, PROGRESS_BAR_SIZE.y),
            corner_radius: 10.0,
            color: palette::TEAL,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::{InputEvent, tick};
    use std::time::Duration;

    fn state_in_setup() -> GameState {
        GameState::new(Settings::default(), 9)
    }

    fn count_circles(scene: &Scene) -> usize {
        scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    #[test]
    fn test_setup_scene_shows_buffer() {
        let mut state = state_in_setup();
        state.type_char('4');
        state.type_char('2');
        let scene = build_scene(&state);

        assert_eq!(scene.phase, GamePhase::Setup);
        assert_eq!(
            scene.commands[0],
            DrawCommand::Clear {
                color: palette::BACKGROUND
            }
        );
        assert!(scene.has_text("PARENT SETUP"));
        assert!(scene.has_text("42"));
        assert!(scene.has_text("Press ENTER to Save"));
    }

    #[test]
    fn test_no_cursor_on_text_screens() {
        let mut state = state_in_setup();
        let _ = tick(
            &mut state,
            &[InputEvent::PointerMoved(Vec2::new(10.0, 10.0))],
            Duration::ZERO,
        );
        let scene = build_scene(&state);
        assert!(
            !scene
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Ring { .. }))
        );
    }

    #[test]
    fn test_playing_scene_draws_target_and_progress() {
        let mut state = state_in_setup();
        let _ = tick(&mut state, &InputEvent::typed("1234"), Duration::ZERO);
        let _ = tick(
            &mut state,
            &[InputEvent::PrimaryAction(Vec2::new(1.0, 1.0))],
            Duration::ZERO,
        );
        let scene = build_scene(&state);
        let target = state.target.as_ref().expect("target");

        assert!(scene.has_text("1"));
        // Shadow and body
        assert_eq!(count_circles(&scene), 2);
        assert!(scene.commands.contains(&DrawCommand::Circle {
            center: target.pos,
            radius: 10.0,
            color: target.color.rgba(),
        }));
        assert!(scene.commands.contains(&DrawCommand::Ring {
            center: target.pos,
            radius: 10.0 * 0.7,
            width: 3.0,
            color: palette::WHITE,
        }));
        // Progress fill is omitted at level 1
        let rects = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 1);
        // Cursor ring
        assert!(scene.commands.contains(&DrawCommand::Ring {
            center: Vec2::new(1.0, 1.0),
            radius: CURSOR_RADIUS,
            width: 2.0,
            color: palette::WHITE,
        }));
    }

    #[test]
    fn test_particles_drawn_after_hit() {
        let mut state = state_in_setup();
        let _ = tick(&mut state, &InputEvent::typed("1234"), Duration::ZERO);
        let _ = tick(&mut state, &[InputEvent::PrimaryAction(Vec2::ZERO)], Duration::ZERO);
        let pos = state.target.as_ref().expect("target").pos;
        let _ = tick(&mut state, &[InputEvent::PrimaryAction(pos)], Duration::ZERO);

        let scene = build_scene(&state);
        // 20 particles plus the new target's shadow and body
        assert_eq!(count_circles(&scene), 22);
        assert!(scene.has_text("2"));
        let rects = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 2);
    }

    #[test]
    fn test_locked_scene() {
        let mut state = state_in_setup();
        let _ = tick(&mut state, &InputEvent::typed("1234"), Duration::ZERO);
        let limit = state.time_limit();
        let _ = tick(&mut state, &[InputEvent::TextChar('9')], limit);

        let scene = build_scene(&state);
        assert_eq!(scene.phase, GamePhase::Locked);
        assert_eq!(
            scene.commands[0],
            DrawCommand::Clear {
                color: palette::LOCKED_BACKGROUND
            }
        );
        assert!(scene.has_text("TIME'S UP!"));
        assert!(scene.has_text("9"));
    }

    #[test]
    fn test_win_scene() {
        let mut state = state_in_setup();
        let _ = tick(&mut state, &InputEvent::typed("1234"), Duration::ZERO);
        let _ = tick(&mut state, &[InputEvent::PrimaryAction(Vec2::ZERO)], Duration::ZERO);
        state.level = state.max_levels();
        state.start_level();
        let pos = state.target.as_ref().expect("target").pos;
        let _ = tick(&mut state, &[InputEvent::PrimaryAction(pos)], Duration::ZERO);

        let scene = build_scene(&state);
        assert!(scene.has_text("YOU DID IT!"));
        assert!(scene.has_text("Click to Play Again"));
    }

    #[test]
    fn test_cursor_starts_at_screen_center() {
        let mut state = state_in_setup();
        let _ = tick(&mut state, &InputEvent::typed("1234"), Duration::ZERO);
        assert_eq!(state.phase, GamePhase::Start);

        let scene = build_scene(&state);
        assert!(scene.commands.contains(&DrawCommand::Ring {
            center: state.screen() / 2.0,
            radius: CURSOR_RADIUS,
            width: 2.0,
            color: palette::WHITE,
        }));
    }

    #[test]
    fn test_scene_serializes_to_json() {
        let state = state_in_setup();
        let json = serde_json::to_string(&build_scene(&state)).expect("serialize");
        assert!(json.contains("PARENT SETUP"));
    }
}
