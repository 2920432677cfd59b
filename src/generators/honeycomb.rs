//! Hexagon tiling with a few cells left out

use rand::{Rng, RngCore};

use crate::errors::{Error, GeometryError};
use crate::geometry::regular_polygon;
use crate::log::info;
use crate::render::{Canvas, Polygon, StyledShape};
use crate::types::{DrawableArea, Point};

use super::Generate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Honeycomb {
    /// Percentage of cells drawn
    pub density: u32,
    /// Hexagons across the smaller dimension
    pub hex_count: u32,
    pub sides: usize,
}

impl Default for Honeycomb {
    fn default() -> Self {
        Self {
            density: 90,
            hex_count: 20,
            sides: 6,
        }
    }
}

/// Circumradius giving `hex_count` cells across the smaller dimension
pub fn polygon_radius(area: &DrawableArea, hex_count: u32) -> f64 {
    area.width().min(area.height()) as f64 / hex_count.max(1) as f64 / 2.0
}

/// Centres of a flat-topped hexagon lattice whose cells fit entirely in `area`
pub fn lattice(area: &DrawableArea, radius: f64) -> Vec<Point> {
    let mut centres = Vec::new();
    if radius <= 0.0 {
        return centres;
    }
    let half_height = radius * 3f64.sqrt() / 2.0;
    let (min, max) = (area.min(), area.max());

    let mut row = 0;
    loop {
        let y = min.y + half_height * (row + 1) as f64;
        if y + half_height > max.y {
            break;
        }
        let offset = if row % 2 == 1 { 1.5 * radius } else { 0.0 };
        let mut x = min.x + radius + offset;
        while x + radius <= max.x {
            centres.push(Point::new(x, y));
            x += 3.0 * radius;
        }
        row += 1;
    }
    centres
}

impl Generate for Honeycomb {
    fn name(&self) -> &'static str {
        "honeycomb"
    }

    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Result<Vec<StyledShape>, Error> {
        if self.sides < 3 {
            return Err(GeometryError::TooFewSides { sides: self.sides }.into());
        }
        let radius = polygon_radius(&canvas.area, self.hex_count);
        info!(
            radius,
            density = self.density,
            sides = self.sides,
            "honeycomb"
        );

        let mut shapes = Vec::new();
        for centre in lattice(&canvas.area, radius) {
            if rng.random_range(0..100) >= self.density {
                continue;
            }
            let points = regular_polygon(centre, radius, self.sides);
            // Rounding can put a vertex a hair outside the edge
            if points.iter().all(|&p| canvas.area.contains(p.round())) {
                shapes.push(canvas.styled(Polygon::new(points)));
            }
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
    fn radius_from_smaller_dimension() {
        let area = DrawableArea::new(0, 0, 2000, 1400);
        assert_eq!(polygon_radius(&area, 20), 35.0);
    }

    #[test]
    fn neighbouring_cells_share_edges() {
        let area = DrawableArea::new(0, 0, 200, 200);
        let radius = 10.0;
        let centres = lattice(&area, radius);
        let side_to_side = radius * 3f64.sqrt();
        // The first cell of row 0 and of row 1 are diagonal neighbours
        let row_one = centres
            .iter()
            .find(|c| c.y > centres[0].y)
            .copied()
            .unwrap();
        assert!((centres[0].distance(row_one) - side_to_side).abs() < 1e-9);
        for c in &centres {
            for v in regular_polygon(*c, radius, 6) {
                assert!(area.contains(v.round()));
            }
        }
    }

    #[test]
    fn full_density_draws_the_whole_lattice() {
        let canvas = canvas();
        let generator = Honeycomb {
            density: 100,
            ..Honeycomb::default()
        };
        let shapes = generator.generate(&canvas, &mut rng(2)).unwrap();
        let radius = polygon_radius(&canvas.area, 20);
        assert_eq!(shapes.len(), lattice(&canvas.area, radius).len());
        for s in &shapes {
            let Shape::Polygon(poly) = &s.shape else {
                panic!("expected a polygon, got {:?}", s.shape);
            };
            assert_eq!(poly.points.len(), 6);
        }
    }

    #[test]
    fn zero_density_draws_nothing() {
        let generator = Honeycomb {
            density: 0,
            ..Honeycomb::default()
        };
        let shapes = generator.generate(&canvas(), &mut rng(2)).unwrap();
        assert!(shapes.is_empty());
    }

    #[test]
    fn degenerate_polygons_are_rejected() {
        for sides in [0, 1, 2] {
            let generator = Honeycomb {
                sides,
                ..Honeycomb::default()
            };
            let err = generator.generate(&canvas(), &mut rng(2)).unwrap_err();
            assert!(
                matches!(err, Error::Geometry(GeometryError::TooFewSides { .. })),
                "{err:?}"
            );
        }
    }

    #[test]
    fn default_density_leaves_gaps() {
        let canvas = canvas();
        let radius = polygon_radius(&canvas.area, 20);
        let total = lattice(&canvas.area, radius).len();
        let generator = Honeycomb::default();
        let shapes = generator.generate(&canvas, &mut rng(9)).unwrap();
        let drawn = shapes.len();
        assert!(drawn < total && drawn > total / 2, "{drawn} of {total}");
    }
}
