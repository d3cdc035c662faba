//! Rendering contract
//!
//! The game hands a [`Scene`] to a [`Renderer`] once per frame. Drawing is
//! owned by the host; this module ships a mesh builder for GPU backends and a
//! logging renderer for headless runs.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;

use crate::Rgba;
use crate::scene::{Anchor, DrawCommand, FontSize, Scene};
use crate::settings::QualityPreset;
use crate::sim::GamePhase;

/// Something that can paint a scene
pub trait Renderer {
    fn draw(&mut self, scene: &Scene);
}

/// Text left for the host's font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub size: FontSize,
    pub color: Rgba,
}

/// Tessellates each scene into a triangle list ready for upload
#[derive(Debug, Default)]
pub struct MeshRenderer {
    segments: u32,
    /// Clear color of the last scene
    pub clear_color: Rgba,
    /// Triangles of the last scene, back to front
    pub vertices: Vec<Vertex>,
    /// Text of the last scene
    pub labels: Vec<TextLabel>,
}

impl MeshRenderer {
    pub fn new(quality: QualityPreset) -> Self {
        Self {
            segments: quality.circle_segments(),
            ..Default::default()
        }
    }

    /// Vertex buffer contents as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for MeshRenderer {
    fn draw(&mut self, scene: &Scene) {
        self.vertices.clear();
        self.labels.clear();

        for command in &scene.commands {
            match command {
                DrawCommand::Clear { color } => self.clear_color = *color,
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => shapes::circle(&mut self.vertices, *center, *radius, *color, self.segments),
                DrawCommand::Ring {
                    center,
                    radius,
                    width,
                    color,
                } => shapes::ring(
                    &mut self.vertices,
                    *center,
                    *radius,
                    *width,
                    *color,
                    self.segments,
                ),
                DrawCommand::Rect {
                    min, size, color, ..
                } => shapes::rect(&mut self.vertices, *min, *size, *color),
                DrawCommand::RectOutline {
                    min,
                    size,
                    width,
                    color,
                    ..
                } => shapes::rect_outline(&mut self.vertices, *min, *size, *width, *color),
                DrawCommand::Text {
                    text,
                    pos,
                    anchor,
                    size,
                    color,
                } => self.labels.push(TextLabel {
                    text: text.clone(),
                    pos: *pos,
                    anchor: *anchor,
                    size: *size,
                    color: *color,
                }),
            }
        }
    }
}

/// Logs phase changes and counts frames, drawing nothing
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<GamePhase>,
    pub frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, scene: &Scene) {
        self.frames += 1;
        if self.last_phase != Some(scene.phase) {
            let title = scene.texts().next().unwrap_or_default();
            log::info!("Frame {}: {:?} screen \"{}\"", self.frames, scene.phase, title);
            self.last_phase = Some(scene.phase);
        }
        log::trace!("Frame {}: {} draw commands", self.frames, scene.commands.len());
    }
}
