//! Straight chords between random points on a circle

use rand::{Rng, RngCore};

use crate::errors::Error;
use crate::geometry::random_point_on_circle;
use crate::log::info;
use crate::render::{Canvas, Line, StyledShape};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chords {
    /// Upper bound on the number of chords; at least half are drawn
    pub line_count: usize,
}

impl Default for Chords {
    fn default() -> Self {
        Self { line_count: 250 }
    }
}

impl Generate for Chords {
    fn name(&self) -> &'static str {
        "chords"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        let (center, radius) = canvas.circle();
        let count = rng.random_range(self.line_count / 2..=self.line_count);
        info!(%center, radius, count, "chords");

        Ok((0..count)
            .map(|_| {
                let start = random_point_on_circle(center, radius, rng);
                let end = random_point_on_circle(center, radius, rng);
                canvas.styled(Line::new(start, end))
            })
            .collect())
    }
}
