//! Triangle tessellation for 2D primitives
//!
//! Every function appends triangle-list vertices to `out` so a whole scene
//! can be built into one buffer.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::Rgba;

fn push_triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Rgba) {
    push_triangle(out, a, b, c, color);
    push_triangle(out, c, b, d, color);
}

/// Point on a circle at segment `i` of `segments`
fn rim(center: Vec2, radius: f32, i: u32, segments: u32) -> Vec2 {
    center + Vec2::from_angle(i as f32 / segments as f32 * TAU) * radius
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: Rgba, segments: u32) {
    if radius <= 0.0 || segments < 3 {
        return;
    }
    out.reserve((segments * 3) as usize);
    for i in 0..segments {
        let a = rim(center, radius, i, segments);
        let b = rim(center, radius, i + 1, segments);
        push_triangle(out, center, a, b, color);
    }
}

/// Ring between `radius - width` and `radius`
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    width: f32,
    color: Rgba,
    segments: u32,
) {
    if radius <= 0.0 || width <= 0.0 || segments < 3 {
        return;
    }
    let inner_radius = (radius - width).max(0.0);
    out.reserve((segments * 6) as usize);
    for i in 0..segments {
        let inner1 = rim(center, inner_radius, i, segments);
        let outer1 = rim(center, radius, i, segments);
        let inner2 = rim(center, inner_radius, i + 1, segments);
        let outer2 = rim(center, radius, i + 1, segments);
        push_quad(out, inner1, outer1, inner2, outer2, color);
    }
}

/// Axis-aligned filled rectangle (corners are left square)
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: Rgba) {
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let max = min + size;
    push_quad(
        out,
        min,
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        max,
        color,
    );
}

/// Rectangle border `width` pixels thick, inside the given bounds
pub fn rect_outline(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, width: f32, color: Rgba) {
    let w = width.min(size.x / 2.0).min(size.y / 2.0);
    if w <= 0.0 {
        return;
    }
    // Top, bottom, left, right
    rect(out, min, Vec2::new(size.x, w), color);
    rect(out, Vec2::new(min.x, min.y + size.y - w), Vec2::new(size.x, w), color);
    rect(out, Vec2::new(min.x, min.y + w), Vec2::new(w, size.y - 2.0 * w), color);
    rect(
        out,
        Vec2::new(min.x + size.x - w, min.y + w),
        Vec2::new(w, size.y - 2.0 * w),
        color,
    );
}
