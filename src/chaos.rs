//! Chaos game point generation.
//!
//! The [`ChaosGame`] keeps a current point and a fixed set of anchor
//! [`Vertex`]es. Each step picks an anchor uniformly at random, moves the
//! current point halfway toward it, and records the result as a
//! [`PlottedPoint`] tagged with the anchor's color. With three
//! non-collinear anchors the plotted points fill in a Sierpinski triangle.
//!
//! Randomness comes from an [`IndexSource`], so a deterministic sequence can
//! be substituted for the real random stream.

use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::math::vec2::Vec2;

/// A fixed anchor point with the color given to every point it produces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: u32,
}

impl Vertex {
    pub const fn new(position: Vec2, color: u32) -> Self {
        Self { position, color }
    }
}

/// One output sample of the chaos game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlottedPoint {
    pub position: Vec2,
    /// Color of the anchor that was chosen to produce this point.
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChaosError {
    /// The game needs at least two anchors to contract toward.
    TooFewVertices { found: usize },
}

impl fmt::Display for ChaosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChaosError::TooFewVertices { found } => {
                write!(f, "chaos game needs at least 2 vertices, got {}", found)
            }
        }
    }
}

impl std::error::Error for ChaosError {}

/// Produces anchor indices for the chaos game.
pub trait IndexSource {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniformly distributed indices drawn from a `rand` generator.
pub struct UniformIndex<R> {
    rng: R,
}

impl<R: Rng> UniformIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformIndex<StdRng> {
    /// Seed once from operating system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible stream for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexSource for UniformIndex<R> {
    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around when exhausted.
///
/// Each index is reduced modulo the anchor count so a script can never
/// address a vertex that doesn't exist.
#[derive(Debug, Clone)]
pub struct ScriptedIndex {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndex {
    /// # Panics
    /// Panics if `indices` is empty.
    pub fn new(indices: Vec<usize>) -> Self {
        assert!(!indices.is_empty(), "ScriptedIndex needs at least one index");
        Self { indices, cursor: 0 }
    }
}

impl IndexSource for ScriptedIndex {
    fn next_index(&mut self, len: usize) -> usize {
        let index = self.indices[self.cursor] % len;
        self.cursor = (self.cursor + 1) % self.indices.len();
        index
    }
}

/// Read-only view of the anchors and every plotted point, oldest first.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub vertices: &'a [Vertex],
    points: &'a VecDeque<PlottedPoint>,
}

impl<'a> Snapshot<'a> {
    pub fn points(&self) -> impl Iterator<Item = &'a PlottedPoint> + 'a {
        self.points.iter()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// Chaos game state: anchors, current point, and the accumulated output.
pub struct ChaosGame<S = UniformIndex<StdRng>> {
    vertices: Vec<Vertex>,
    current: Vec2,
    points: VecDeque<PlottedPoint>,
    point_limit: Option<NonZeroUsize>,
    steps_taken: u64,
    source: S,
}

impl ChaosGame {
    /// Create a game driven by a random stream seeded from OS entropy.
    pub fn new(vertices: Vec<Vertex>, start: Vec2) -> Result<Self, ChaosError> {
        Self::with_source(vertices, start, UniformIndex::from_os_rng())
    }
}

impl<S: IndexSource> ChaosGame<S> {
    pub fn with_source(vertices: Vec<Vertex>, start: Vec2, source: S) -> Result<Self, ChaosError> {
        if vertices.len() < 2 {
            return Err(ChaosError::TooFewVertices {
                found: vertices.len(),
            });
        }

        Ok(Self {
            vertices,
            current: start,
            points: VecDeque::new(),
            point_limit: None,
            steps_taken: 0,
            source,
        })
    }

    /// Keep only the `limit` most recent points, dropping the oldest first.
    pub fn with_point_limit(mut self, limit: NonZeroUsize) -> Self {
        self.point_limit = Some(limit);
        self.evict_to_limit();
        self
    }

    /// Run `steps` iterations of the chaos game.
    ///
    /// Each iteration picks an anchor, moves the current point to the
    /// midpoint between itself and that anchor, and appends the new point.
    pub fn advance(&mut self, steps: usize) {
        if let Some(limit) = self.point_limit {
            self.points.reserve(steps.min(limit.get()));
        } else {
            self.points.reserve(steps);
        }

        for _ in 0..steps {
            let vertex = self.vertices[self.source.next_index(self.vertices.len())];
            self.current = self.current.midpoint(vertex.position);

            if self.point_limit.is_some_and(|limit| self.points.len() >= limit.get()) {
                self.points.pop_front();
            }
            self.points.push_back(PlottedPoint {
                position: self.current,
                color: vertex.color,
            });
        }

        self.steps_taken += steps as u64;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            vertices: &self.vertices,
            points: &self.points,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn point_limit(&self) -> Option<NonZeroUsize> {
        self.point_limit
    }

    /// Total iterations run, including points evicted by the limit.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    fn evict_to_limit(&mut self) {
        if let Some(limit) = self.point_limit {
            while self.points.len() > limit.get() {
                self.points.pop_front();
            }
        }
    }
}
