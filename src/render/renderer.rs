//! Software rendering of chaos game snapshots.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and draws
//! anchors and plotted points as filled squares.

use std::path::Path;

use crate::chaos::Snapshot;
use crate::colors;
use crate::math::vec2::Vec2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        // Clamp to the buffer up front so huge or off-screen rects cost nothing.
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(self.width as i32);
        let y1 = y.saturating_add(height).min(self.height as i32);

        for py in y0..y1 {
            let row = (py as u32 * self.width) as usize;
            for px in x0..x1 {
                self.color_buffer[row + px as usize] = color;
            }
        }
    }

    /// Fill a `size` x `size` square whose center is `center`.
    #[inline]
    pub fn fill_square(&mut self, center: Vec2, size: i32, color: u32) {
        let half = size as f32 / 2.0;
        let x = (center.x - half).floor() as i32;
        let y = (center.y - half).floor() as i32;
        self.draw_rect(x, y, size, size, color);
    }

    /// Draw anchors first, then plotted points oldest to newest, so the most
    /// recent point wins where squares overlap.
    pub fn draw_snapshot(&mut self, snapshot: &Snapshot<'_>, anchor_size: i32, point_size: i32) {
        for vertex in snapshot.vertices {
            self.fill_square(vertex.position, anchor_size, vertex.color);
        }
        for point in snapshot.points() {
            self.fill_square(point.position, point_size, point.color);
        }
    }

    /// Returns the color buffer as bytes (ARGB8888, native endian).
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1, so any u32 slice
        // can be viewed as four times as many bytes for the same lifetime.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Write the current color buffer to an image file. The format is taken
    /// from the file extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let image = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color = self.color_buffer[(y * self.width + x) as usize];
            image::Rgba(colors::to_rgba(color))
        });
        image.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chaos::{ChaosGame, ScriptedIndex, Vertex};

    #[test]
    fn test_set_pixel_clips_out_of_bounds() {
        let mut r = Renderer::new(4, 4);
        r.set_pixel(-1, 0, colors::RED);
        r.set_pixel(4, 0, colors::RED);
        r.set_pixel(0, 4, colors::RED);
        r.set_pixel(3, 3, colors::RED);
        assert_eq!(r.get_pixel(3, 3), Some(colors::RED));
        assert_eq!(r.get_pixel(4, 4), None);
        assert_eq!(
            r.as_bytes().len(),
            16 * 4,
            "byte view covers every pixel"
        );
    }

    #[test]
    fn test_fill_square_centered() {
        let mut r = Renderer::new(20, 20);
        r.fill_square(Vec2::new(10.0, 10.0), 2, colors::GREEN);

        let filled: Vec<(i32, i32)> = (0..20)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .filter(|&(x, y)| r.get_pixel(x, y) == Some(colors::GREEN))
            .collect();
        assert_eq!(filled, vec![(9, 9), (10, 9), (9, 10), (10, 10)]);
    }

    #[test]
    fn test_fill_square_clipped_at_corner() {
        let mut r = Renderer::new(10, 10);
        r.fill_square(Vec2::new(0.0, 0.0), 5, colors::BLUE);
        // Covers -3..2 in both axes; only the on-screen part is written.
        assert_eq!(r.get_pixel(0, 0), Some(colors::BLUE));
        assert_eq!(r.get_pixel(1, 1), Some(colors::BLUE));
        assert_eq!(r.get_pixel(2, 2), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_draw_snapshot_paints_anchors_and_points() {
        let anchors = vec![
            Vertex::new(Vec2::new(2.0, 2.0), colors::RED),
            Vertex::new(Vec2::new(18.0, 2.0), colors::GREEN),
            Vertex::new(Vec2::new(10.0, 18.0), colors::BLUE),
        ];
        let mut game =
            ChaosGame::with_source(anchors, Vec2::new(10.0, 10.0), ScriptedIndex::new(vec![2]))
                .unwrap();
        game.advance(1);

        let mut r = Renderer::new(20, 20);
        r.clear(colors::BACKGROUND);
        r.draw_snapshot(&game.snapshot(), 5, 2);

        assert_eq!(r.get_pixel(2, 2), Some(colors::RED));
        assert_eq!(r.get_pixel(18, 2), Some(colors::GREEN));
        // The single point lands at (10, 14), drawn in the blue anchor's color.
        assert_eq!(r.get_pixel(10, 14), Some(colors::BLUE));
        assert_eq!(r.get_pixel(10, 10), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_resize_reallocates_buffer() {
        let mut r = Renderer::new(4, 4);
        r.resize(8, 2);
        assert_eq!((r.width(), r.height()), (8, 2));
        assert_eq!(r.as_bytes().len(), 8 * 2 * 4);
    }

    #[test]
    fn test_save_png_round_trips_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let mut r = Renderer::new(3, 2);
        r.set_pixel(1, 0, colors::RED);
        r.set_pixel(2, 1, colors::BLUE);
        r.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_eq!(loaded.get_pixel(2, 1).0, [0, 0, 255, 255]);
        assert_eq!(loaded.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
