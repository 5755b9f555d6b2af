//! A Sierpinski triangle drawn by the chaos game.
//!
//! Starting from any point, repeatedly pick one of the triangle's corners at
//! random and jump halfway toward it. The visited points settle onto the
//! Sierpinski triangle. The crate renders them on the CPU and uses SDL2 only
//! for window management and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use sierpinski::prelude::*;
//!
//! let anchors = triangle_anchors(800, 600, 100.0);
//! let mut game = ChaosGame::new(anchors, start_point(800, 600))?;
//! let mut renderer = Renderer::new(800, 600);
//!
//! game.advance(100);
//! renderer.draw_snapshot(&game.snapshot(), 5, 2);
//! ```

// Public API - exposed to library consumers
pub mod chaos;
pub mod colors;
pub mod config;
pub mod math;
pub mod render;
pub mod scene;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use chaos::{ChaosError, ChaosGame, PlottedPoint, Snapshot, Vertex};
pub use config::Settings;
pub use render::Renderer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use sierpinski::prelude::*;
/// ```
pub mod prelude {
    // Chaos game
    pub use crate::chaos::{
        ChaosError, ChaosGame, IndexSource, PlottedPoint, ScriptedIndex, Snapshot, UniformIndex,
        Vertex,
    };

    // Layout
    pub use crate::scene::{start_point, triangle_anchors};

    // Settings
    pub use crate::config::Settings;

    // Math
    pub use crate::math::vec2::Vec2;

    // Rendering
    pub use crate::render::Renderer;

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
