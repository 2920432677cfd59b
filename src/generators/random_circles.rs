//! Scattered circles of random size

use rand::{Rng, RngCore};

use crate::errors::Error;
use crate::log::info;
use crate::render::{Canvas, Circle, StyledShape};
use crate::types::{DrawableArea, Point};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomCircles {
    pub min_circles: usize,
    pub max_circles: usize,
    /// Radius bounds in pixels
    pub min_radius: i64,
    pub max_radius: i64,
    pub remove_intersecting: bool,
}

impl Default for RandomCircles {
    fn default() -> Self {
        Self {
            min_circles: 10,
            max_circles: 100,
            min_radius: 10,
            max_radius: 100,
            remove_intersecting: true,
        }
    }
}

/// `count` circles with whole-pixel centres in `area`; any that cross the
/// edge are dropped
pub fn scatter<R: Rng + ?Sized>(
    area: &DrawableArea,
    count: usize,
    radii: (i64, i64),
    rng: &mut R,
) -> Vec<Circle> {
    let (lo, hi) = (radii.0.min(radii.1), radii.0.max(radii.1));
    (0..count)
        .map(|_| {
            let x = rng.random_range(area.min_x..=area.max_x);
            let y = rng.random_range(area.min_y..=area.max_y);
            let r = rng.random_range(lo..=hi);
            Circle::new(Point::new(x as f64, y as f64), r as f64)
        })
        .filter(|c| c.within(area))
        .collect()
}

/// Drop circles that intersect a larger one, visiting largest first.
/// Survivors keep their input order.
pub fn remove_intersecting(circles: &[Circle]) -> Vec<Circle> {
    let mut by_size: Vec<usize> = (0..circles.len()).collect();
    by_size.sort_by(|&a, &b| circles[b].radius.total_cmp(&circles[a].radius));

    let mut keep = vec![false; circles.len()];
    let mut kept: Vec<Circle> = Vec::new();
    for i in by_size {
        if kept.iter().all(|k| !k.intersects(&circles[i])) {
            kept.push(circles[i]);
            keep[i] = true;
        }
    }
    circles
        .iter()
        .zip(keep)
        .filter_map(|(c, k)| k.then_some(*c))
        .collect()
}

impl Generate for RandomCircles {
    fn name(&self) -> &'static str {
        "random_circles"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        let lo = self.min_circles.min(self.max_circles);
        let count = rng.random_range(lo..=self.max_circles.max(lo));
        let mut circles = scatter(&canvas.area, count, (self.min_radius, self.max_radius), rng);
        if self.remove_intersecting {
            circles = remove_intersecting(&circles);
        }
        info!(drawn = count, kept = circles.len(), "random_circles");
        Ok(circles.into_iter().map(|c| canvas.styled(c)).collect())
    }
}
