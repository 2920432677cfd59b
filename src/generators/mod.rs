//! Page generators
//!
//! Each generator turns a [`Canvas`] and a random source into shapes in draw
//! order. The random source is injected so tests can seed it.

pub mod always_right;
pub mod boxes;
pub mod chords;
pub mod concentric;
pub mod curves;
pub mod grid;
pub mod honeycomb;
pub mod maze;
pub mod random_circles;

use enum_dispatch::enum_dispatch;
use rand::RngCore;

use crate::errors::Error;
use crate::render::{Canvas, StyledShape};

pub use always_right::AlwaysRight;
pub use boxes::Boxes;
pub use chords::Chords;
pub use concentric::ConcentricCircles;
pub use curves::Curves;
pub use grid::Grid;
pub use honeycomb::Honeycomb;
pub use maze::Maze;
pub use random_circles::RandomCircles;

/// Common behavior for all generators
#[enum_dispatch]
pub trait Generate {
    /// Identity used for the output filename
    fn name(&self) -> &'static str;

    /// Produce the page's shapes, first drawn first
    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error>;
}

/// Any generator
#[enum_dispatch(Generate)]
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    AlwaysRight(AlwaysRight),
    Boxes(Boxes),
    Chords(Chords),
    Curves(Curves),
    ConcentricCircles(ConcentricCircles),
    Honeycomb(Honeycomb),
    Grid(Grid),
    Maze(Maze),
    RandomCircles(RandomCircles),
}

impl Generator {
    /// Every generator with its default parameters
    pub fn all() -> Vec<Generator> {
        vec![
            AlwaysRight::default().into(),
            Boxes::default().into(),
            Chords::default().into(),
            Curves::default().into(),
            ConcentricCircles::default().into(),
            Honeycomb::default().into(),
            Grid::default().into(),
            Maze::default().into(),
            RandomCircles::default().into(),
        ]
    }

    /// Look a generator up by its identity
    pub fn from_name(name: &str) -> Option<Generator> {
        Self::all().into_iter().find(|g| g.name() == name)
    }
}
