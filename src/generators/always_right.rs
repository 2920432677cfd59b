//! A line that keeps turning right: east, south, west, north, repeat.
//!
//! Each segment ends at a random point between the current position and the
//! edge it is heading for, and every endpoint is snapped down to a grid.

use rand::{Rng, RngCore};

use crate::errors::{Error, GeometryError};
use crate::log::{debug, info, warn};
use crate::quantize::{Strategy, quantize};
use crate::render::{Canvas, Line, StyledShape};
use crate::types::{DrawableArea, Point};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlwaysRight {
    /// Number of segments
    pub iterations: usize,
    /// Grid step in millimetres
    pub step_mm: f64,
    /// Paint the background colour under the line
    pub background: bool,
}

impl Default for AlwaysRight {
    fn default() -> Self {
        Self {
            iterations: 80,
            step_mm: 10.0,
            background: true,
        }
    }
}

/// `(x1, y1, x2, y2)`
type Segment = (i64, i64, i64, i64);

/// Raw walk inside `area`, one segment per iteration
fn walk<R: Rng + ?Sized>(area: &DrawableArea, iterations: usize, rng: &mut R) -> Vec<Segment> {
    let mut x = rng.random_range(area.min_x..=area.max_x);
    let mut y = rng.random_range(area.min_y..=area.max_y);
    let mut segments = Vec::with_capacity(iterations);

    for i in 1..=iterations {
        match i % 4 {
            // east
            1 => {
                let x2 = rng.random_range(x..=area.max_x);
                segments.push((x, y, x2, y));
                x = x2;
            }
            // south
            2 => {
                let y2 = rng.random_range(y..=area.max_y);
                segments.push((x, y, x, y2));
                y = y2;
            }
            // west
            3 => {
                let x2 = rng.random_range(area.min_x..=x);
                segments.push((x, y, x2, y));
                x = x2;
            }
            // north
            _ => {
                let y2 = rng.random_range(area.min_y..=y);
                segments.push((x, y, x, y2));
                y = y2;
            }
        }
    }
    segments
}

impl Generate for AlwaysRight {
    fn name(&self) -> &'static str {
        "always_right"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        let step = canvas.pixels_per_mm * self.step_mm;
        if step == 0.0 {
            return Err(GeometryError::ZeroStep.into());
        }
        info!(iterations = self.iterations, step, "always_right");

        let mut shapes = Vec::with_capacity(self.iterations + 1);
        if self.background {
            shapes.push(canvas.background());
        }

        // Keep two steps clear of the edge so snapped lines still fit
        let Some(area) = canvas.area.inset((step * 2.0) as i64) else {
            warn!(area = %canvas.area, step, "drawable area too small for the grid step");
            return Ok(shapes);
        };

        let snap = |v: i64| quantize(v as f64, step, Strategy::Floor).map(|q| q as f64);
        for (x1, y1, x2, y2) in walk(&area, self.iterations, rng) {
            let line = Line::new(
                Point::new(snap(x1)?, snap(y1)?),
                Point::new(snap(x2)?, snap(y2)?),
            );
            debug!(?line, "segment");
            shapes.push(canvas.styled(line));
        }
        Ok(shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::{canvas, rng};
    use crate::render::Shape;

    fn lines(shapes: &[StyledShape]) -> Vec<Line> {
        shapes
            .iter()
            .filter_map(|s| match s.shape {
                Shape::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn walk_turns_right_every_segment() {
        let area = DrawableArea::new(0, 0, 500, 300);
        let segments = walk(&area, 40, &mut rng(1));
        assert_eq!(segments.len(), 40);
        for (i, &(x1, y1, x2, y2)) in segments.iter().enumerate() {
            match (i + 1) % 4 {
                1 => assert!(y1 == y2 && x2 >= x1),
                2 => assert!(x1 == x2 && y2 >= y1),
                3 => assert!(y1 == y2 && x2 <= x1),
                _ => assert!(x1 == x2 && y2 <= y1),
            }
        }
        for pair in segments.windows(2) {
            assert_eq!((pair[0].2, pair[0].3), (pair[1].0, pair[1].1));
        }
    }

    #[test]
    fn endpoints_sit_on_the_grid_inside_the_page() {
        let canvas = canvas();
        let generator = AlwaysRight::default();
        let shapes = generator.generate(&canvas, &mut rng(7)).unwrap();
        assert_eq!(shapes.len(), 81);
        assert_eq!(shapes[0], canvas.background());

        let lines = lines(&shapes[1..]);
        assert_eq!(lines.len(), 80);
        for line in &lines {
            for p in [line.start, line.end] {
                assert_eq!(p.x % 50.0, 0.0, "{p}");
                assert_eq!(p.y % 50.0, 0.0, "{p}");
                assert!(canvas.area.contains(p), "{p}");
            }
            assert!(line.start.x == line.end.x || line.start.y == line.end.y);
        }
        for pair in lines.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn background_is_optional() {
        let generator = AlwaysRight {
            background: false,
            ..AlwaysRight::default()
        };
        let shapes = generator.generate(&canvas(), &mut rng(7)).unwrap();
        assert_eq!(shapes.len(), 80);
    }

    #[test]
    fn zero_step_is_rejected() {
        let generator = AlwaysRight {
            step_mm: 0.0,
            ..AlwaysRight::default()
        };
        assert!(generator.generate(&canvas(), &mut rng(7)).is_err());
    }
}
