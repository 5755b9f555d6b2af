//! Placement of the chaos game inside a display area.

use crate::chaos::Vertex;
use crate::colors;
use crate::math::vec2::Vec2;

/// Triangle anchors for a `width` x `height` screen.
///
/// The apex sits centered horizontally `margin` pixels below the top edge;
/// the base corners sit at a quarter and three quarters of the width,
/// `margin` pixels above the bottom edge. Colors are red, green, blue in
/// that order.
pub fn triangle_anchors(width: u32, height: u32, margin: f32) -> Vec<Vertex> {
    let w = width as f32;
    let h = height as f32;
    vec![
        Vertex::new(Vec2::new(w / 2.0, margin), colors::RED),
        Vertex::new(Vec2::new(w / 4.0, h - margin), colors::GREEN),
        Vertex::new(Vec2::new(w * 3.0 / 4.0, h - margin), colors::BLUE),
    ]
}

/// Center of the screen.
pub fn start_point(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}
