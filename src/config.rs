//! Demo settings.
//!
//! Everything is fixed at build time; the program takes no flags. `RUST_LOG`
//! is the only environment variable read, and only by the logger.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::colors;

pub const WINDOW_TITLE: &str = "Sierpinski Triangle - Chaos Theory";
pub const STEPS_PER_FRAME: usize = 100;
pub const ANCHOR_SIZE: i32 = 5;
pub const POINT_SIZE: i32 = 2;
pub const FPS: u64 = 60;
pub const ANCHOR_MARGIN: f32 = 100.0;
pub const SCREENSHOT_PATH: &str = "sierpinski.png";

#[derive(Debug, Clone)]
pub struct Settings {
    pub title: String,
    /// Chaos game iterations run per rendered frame.
    pub steps_per_frame: usize,
    /// Side length in pixels of the squares drawn for anchors.
    pub anchor_size: i32,
    /// Side length in pixels of the squares drawn for plotted points.
    pub point_size: i32,
    pub fps: u64,
    /// Distance of the anchors from the top and bottom screen edges.
    pub anchor_margin: f32,
    /// Caps the plotted-point history. `None` keeps every point.
    pub point_limit: Option<NonZeroUsize>,
    pub background: u32,
    pub screenshot_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            steps_per_frame: STEPS_PER_FRAME,
            anchor_size: ANCHOR_SIZE,
            point_size: POINT_SIZE,
            fps: FPS,
            anchor_margin: ANCHOR_MARGIN,
            point_limit: None,
            background: colors::BACKGROUND,
            screenshot_path: PathBuf::from(SCREENSHOT_PATH),
        }
    }
}

impl Settings {
    /// Milliseconds budgeted per frame at the target rate.
    pub fn frame_target_time(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }
}
