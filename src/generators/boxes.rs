//! Fill the page with non-overlapping squares of Fibonacci sizes

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::errors::Error;
use crate::geometry::fibonacci;
use crate::log::{debug, info};
use crate::render::{Canvas, Rect, StyledShape};
use crate::types::{DrawableArea, Point};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boxes {
    pub iterations: usize,
    pub boxes_per_iteration: usize,
    /// How many Fibonacci numbers make up the size list
    pub fibonacci_length: usize,
}

impl Default for Boxes {
    fn default() -> Self {
        Self {
            iterations: 100,
            boxes_per_iteration: 100,
            fibonacci_length: 10,
        }
    }
}

/// The first `count` Fibonacci numbers scaled by `pixels_per_mm`, each
/// rounded to whole pixels
pub fn box_sizes(pixels_per_mm: f64, count: usize) -> Vec<i64> {
    fibonacci(count)
        .into_iter()
        .map(|n| (n as f64 * pixels_per_mm).round() as i64)
        .collect()
}

/// Try `attempts` random squares and keep those that overlap nothing kept so far.
///
/// `sizes[0]` is the gap: every kept square shrinks by it, leaving space
/// between neighbours. The others are candidate side lengths; sizes that
/// would vanish after shrinking, or do not fit the area, are never drawn.
/// Result is sorted by `(x, y, side)`.
pub fn place_boxes<R: Rng + ?Sized>(
    area: &DrawableArea,
    sizes: &[i64],
    attempts: usize,
    rng: &mut R,
) -> Vec<Rect> {
    let Some((&gap, rest)) = sizes.split_first() else {
        return Vec::new();
    };
    let candidates: Vec<i64> = rest
        .iter()
        .copied()
        .filter(|&s| s > gap && s <= area.width() && s <= area.height())
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut placed: Vec<(i64, i64, i64)> = Vec::new();
    let mut last_pct = 0;
    for attempt in 1..=attempts {
        let pct = attempt * 100 / attempts;
        if pct >= last_pct + 10 {
            debug!(pct, placed = placed.len(), "placing boxes");
            last_pct = pct;
        }

        let Some(&side) = candidates.choose(rng) else {
            continue;
        };
        let x = rng.random_range(area.min_x..=area.max_x - side);
        let y = rng.random_range(area.min_y..=area.max_y - side);
        let overlaps = placed
            .iter()
            .any(|&(px, py, ps)| x < px + ps && x + side > px && y < py + ps && y + side > py);
        if !overlaps {
            placed.push((x, y, side));
        }
    }

    placed.sort();
    placed
        .into_iter()
        .map(|(x, y, side)| Rect::square(Point::new(x as f64, y as f64), (side - gap) as f64))
        .collect()
}

impl Generate for Boxes {
    fn name(&self) -> &'static str {
        "boxes"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        let sizes = box_sizes(canvas.pixels_per_mm, self.fibonacci_length);
        let attempts = self.iterations * self.boxes_per_iteration;
        info!(?sizes, attempts, "boxes");

        let boxes = place_boxes(&canvas.area, &sizes, attempts, rng);
        info!(count = boxes.len(), "boxes placed");
        Ok(boxes.into_iter().map(|b| canvas.styled(b)).collect())
    }
}
