//! Random wall fragments on a square cell grid

use rand::{Rng, RngCore};

use crate::errors::{Error, GeometryError};
use crate::log::{info, warn};
use crate::render::{Canvas, Line, StyledShape};
use crate::types::{DrawableArea, Point};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Maze {
    /// Cells across the smaller dimension
    pub wall_count: u32,
    /// Probability that a cell has no wall
    pub emptiness: f64,
}

impl Default for Maze {
    fn default() -> Self {
        Self {
            wall_count: 100,
            emptiness: 0.1,
        }
    }
}

/// What a single cell draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Empty,
    Horizontal,
    Vertical,
}

impl Wall {
    /// Empty with probability `emptiness`, otherwise horizontal or vertical
    /// with equal odds
    pub fn pick<R: Rng + ?Sized>(emptiness: f64, rng: &mut R) -> Wall {
        let roll: f64 = rng.random();
        if roll < emptiness {
            Wall::Empty
        } else if roll < emptiness + (1.0 - emptiness) / 2.0 {
            Wall::Horizontal
        } else {
            Wall::Vertical
        }
    }

    /// The wall segment for a cell at `origin`
    pub fn segment(self, origin: Point, length: f64) -> Option<Line> {
        match self {
            Wall::Empty => None,
            Wall::Horizontal => Some(Line::new(origin, origin + Point::new(length, 0.0))),
            Wall::Vertical => Some(Line::new(origin, origin + Point::new(0.0, length))),
        }
    }
}

/// Side of one cell: the smaller dimension split into `wall_count` parts, truncated
pub fn wall_length(area: &DrawableArea, wall_count: u32) -> i64 {
    area.width().min(area.height()) / i64::from(wall_count.max(1))
}

impl Generate for Maze {
    fn name(&self) -> &'static str {
        "maze"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        if self.wall_count == 0 {
            return Err(GeometryError::ZeroStep.into());
        }
        let area = &canvas.area;
        let length = wall_length(area, self.wall_count);
        if length == 0 {
            warn!(%area, wall_count = self.wall_count, "cells would be smaller than a pixel");
            return Ok(Vec::new());
        }
        let (columns, rows) = (area.width() / length, area.height() / length);
        info!(length, columns, rows, emptiness = self.emptiness, "maze");

        let mut shapes = Vec::new();
        for i in 0..columns {
            for j in 0..rows {
                let origin = Point::new(
                    (area.min_x + i * length) as f64,
                    (area.min_y + j * length) as f64,
                );
                if let Some(wall) = Wall::pick(self.emptiness, rng).segment(origin, length as f64) {
                    shapes.push(canvas.styled(wall));
                }
            }
        }
        Ok(shapes)
    }
}
