//! Jittered lattice with some of its neighbours joined up

use std::fmt;

use rand::{Rng, RngCore};

use crate::errors::{Error, GeometryError};
use crate::geometry::weighted_random;
use crate::log::{debug, info};
use crate::render::{Canvas, Line, StyledShape};
use crate::types::{DrawableArea, Point};

use super::Generate;

/// Heading from one lattice point to another.
///
/// Screen coordinates: `y` grows downward, so `DiagonalDown` runs from
/// top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Classify the segment `from -> to`; `None` when the points coincide.
    ///
    /// Mostly-flat segments (one axis under a third of the other) are
    /// horizontal or vertical, everything else is a diagonal.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let d = to - from;
        let (ax, ay) = (d.x.abs(), d.y.abs());
        if ax == 0.0 && ay == 0.0 {
            return None;
        }
        Some(if ay < ax / 3.0 {
            Direction::Horizontal
        } else if ax < ay / 3.0 {
            Direction::Vertical
        } else if d.x * d.y > 0.0 {
            Direction::DiagonalDown
        } else {
            Direction::DiagonalUp
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDown => "diagonal_down",
            Direction::DiagonalUp => "diagonal_up",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Lattice spacing in pixels
    pub spacing: i64,
    /// Jitter as a fraction of `spacing`
    pub noise: f64,
    /// Half-width of the square window searched for neighbours
    pub radius: f64,
    /// Probability that a candidate edge is dropped
    pub sparseness: f64,
    pub directions: Vec<Direction>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            spacing: 100,
            noise: 0.5,
            radius: 400.0,
            sparseness: 0.95,
            directions: Direction::ALL.to_vec(),
        }
    }
}

/// Lattice points one `spacing` in from every edge, each jittered by up to
/// `noise × spacing` per axis. Column-major order.
pub fn square_grid<R: Rng + ?Sized>(
    area: &DrawableArea,
    spacing: i64,
    noise: f64,
    rng: &mut R,
) -> Result<Vec<Point>, GeometryError> {
    if spacing <= 0 {
        return Err(GeometryError::ZeroStep);
    }
    let jitter = spacing as f64 * noise;
    let mut points = Vec::new();
    let mut x = area.min_x + spacing;
    while x < area.max_x - spacing {
        let mut y = area.min_y + spacing;
        while y < area.max_y - spacing {
            points.push(Point::new(
                x as f64 + weighted_random(jitter, rng),
                y as f64 + weighted_random(jitter, rng),
            ));
            y += spacing;
        }
        x += spacing;
    }
    Ok(points)
}

/// Other points of `grid` inside the square window of half-width `radius`
/// around `point`
pub fn neighbours(point: Point, grid: &[Point], radius: f64) -> Vec<Point> {
    grid.iter()
        .copied()
        .filter(|&p| p != point)
        .filter(|p| {
            let d = (*p - point).abs();
            d.x <= radius && d.y <= radius
        })
        .collect()
}

impl Generate for Grid {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        let points = square_grid(&canvas.area, self.spacing, self.noise, rng)?;
        info!(
            points = points.len(),
            spacing = self.spacing,
            sparseness = self.sparseness,
            "grid"
        );

        let mut shapes = Vec::new();
        for &point in &points {
            for other in neighbours(point, &points, self.radius) {
                let Some(direction) = Direction::between(point, other) else {
                    continue;
                };
                if !self.directions.contains(&direction) {
                    continue;
                }
                if rng.random::<f64>() > self.sparseness {
                    debug!(%direction, ?point, ?other, "edge");
                    shapes.push(canvas.styled(Line::new(point, other)));
                }
            }
        }
        Ok(shapes)
    }
}
