//! Nearly concentric circles: each one centred on its own slightly skewed
//! centre, radii growing with a little noise

use rand::{Rng, RngCore};

use crate::errors::Error;
use crate::geometry::{max_radius, skew_centre, weighted_random};
use crate::log::info;
use crate::render::defaults::CIRCLE_FRACTION;
use crate::render::{Canvas, Circle, StyledShape};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentricCircles {
    pub circle_count: usize,
    /// Relative jitter applied to radii and centres
    pub noise: f64,
}

impl Default for ConcentricCircles {
    fn default() -> Self {
        Self {
            circle_count: 80,
            noise: 0.05,
        }
    }
}

/// Radius `i` is `max * (i + i * noise) / count`, truncated and capped at `max`
/// (rounded down to a whole pixel)
pub fn radii<R: Rng + ?Sized>(max: f64, count: usize, noise: f64, rng: &mut R) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let i = i as f64;
            let r = (max * ((i + i * weighted_random(noise, rng)) / count as f64)).trunc();
            r.min(max.floor())
        })
        .collect()
}

impl Generate for ConcentricCircles {
    fn name(&self) -> &'static str {
        "concentric_circles"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        let max = max_radius(&canvas.area) * CIRCLE_FRACTION;
        info!(
            count = self.circle_count,
            noise = self.noise,
            max_radius = max,
            "concentric circles"
        );

        let radii = radii(max, self.circle_count, self.noise, rng);
        Ok(radii
            .into_iter()
            // The innermost radius is zero
            .filter(|&r| r > 0.0)
            .map(|r| {
                let center = skew_centre(&canvas.area, self.noise, rng);
                canvas.styled(Circle::new(center, r))
            })
            .collect())
    }
}
