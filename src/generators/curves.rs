//! Quadratic curves whose start, control and end points lie on a circle

use rand::RngCore;

use crate::errors::Error;
use crate::geometry::random_point_on_circle;
use crate::log::{debug, info};
use crate::render::{Canvas, QuadraticCurve, StyledShape};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curves {
    pub line_count: usize,
}

impl Default for Curves {
    fn default() -> Self {
        Self { line_count: 250 }
    }
}

impl Generate for Curves {
    fn name(&self) -> &'static str {
        "curves"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        let (center, radius) = canvas.circle();
        info!(%center, radius, count = self.line_count, "curves");

        let mut shapes = Vec::with_capacity(self.line_count);
        for i in 0..self.line_count {
            if i % 50 == 0 {
                debug!(done = i, total = self.line_count, "curves");
            }
            let start = random_point_on_circle(center, radius, rng);
            let end = random_point_on_circle(center, radius, rng);
            let control = random_point_on_circle(center, radius, rng);
            shapes.push(canvas.styled(QuadraticCurve::new(start, control, end)));
        }
        Ok(shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::{canvas, rng};
    use crate::render::Shape;

    #[test]
    fn all_three_points_are_on_the_circle() {
        let canvas = canvas();
        let (center, radius) = canvas.circle();
        let shapes = Curves { line_count: 30 }.generate(&canvas, &mut rng(12)).unwrap();
        assert_eq!(shapes.len(), 30);
        for s in &shapes {
            let Shape::QuadraticCurve(curve) = s.shape else {
                panic!("expected a curve, got {:?}", s.shape);
            };
            for p in [curve.start, curve.control, curve.end] {
                assert!((p.distance(center) - radius).abs() < 1e-6);
            }
            assert!(s.fragment().contains(r#"fill="none""#));
        }
    }
}
