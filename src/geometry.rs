//! Page geometry: pixel size, drawable area, circles and derived points

use std::f64::consts::TAU;

use glam::dvec2;
use rand::Rng;

use crate::errors::GeometryError;
use crate::types::{DrawableArea, PaperSize, PixelSize, Point, check_positive};

/// Page size in pixels for a paper size at `pixels_per_unit`.
///
/// Each dimension is truncated to a whole pixel; `landscape` swaps width and height.
pub fn pixel_size(
    paper: PaperSize,
    pixels_per_unit: f64,
    landscape: bool,
) -> Result<PixelSize, GeometryError> {
    let ppu = check_positive(pixels_per_unit).map_err(|cause| GeometryError::InvalidResolution {
        value: pixels_per_unit,
        cause,
    })?;
    let paper = PaperSize::try_new(paper.width, paper.height)?;

    let size = PixelSize::new(
        (paper.width * ppu).trunc() as i64,
        (paper.height * ppu).trunc() as i64,
    );
    if size.width == 0 || size.height == 0 {
        return Err(GeometryError::EmptyPage);
    }

    Ok(if landscape { size.swapped() } else { size })
}

/// Inset a page by a bleed percentage per axis.
///
/// Half of the bleed comes off each side, floored to a whole pixel, so the
/// area is symmetric within the page. Bleed must be in `[0, 100)`.
pub fn drawable_area(page: PixelSize, bleed: [f64; 2]) -> Result<DrawableArea, GeometryError> {
    for (axis, value) in [('x', bleed[0]), ('y', bleed[1])] {
        if !(0.0..100.0).contains(&value) {
            return Err(GeometryError::InvalidBleed { axis, value });
        }
    }
    let min_x = (page.width as f64 * bleed[0] / 100.0 / 2.0).floor() as i64;
    let min_y = (page.height as f64 * bleed[1] / 100.0 / 2.0).floor() as i64;
    Ok(DrawableArea::new(
        min_x,
        min_y,
        page.width - min_x,
        page.height - min_y,
    ))
}

/// True iff both points lie inside `area` (closed bounds)
pub fn contains_both_points(p1: Point, p2: Point, area: &DrawableArea) -> bool {
    area.contains(p1) && area.contains(p2)
}

/// Half the smaller dimension of `area`
pub fn max_radius(area: &DrawableArea) -> f64 {
    area.width().min(area.height()) as f64 * 0.5
}

/// Centre and radius of the circle occupying `size_fraction` of the largest
/// circle that fits in `area`
pub fn circle_fitting(area: &DrawableArea, size_fraction: f64) -> (Point, f64) {
    (area.center(), max_radius(area) * size_fraction)
}

/// A uniformly random point on a circle's circumference
pub fn random_point_on_circle<R: Rng + ?Sized>(center: Point, radius: f64, rng: &mut R) -> Point {
    let angle = rng.random_range(0.0..TAU);
    center + dvec2(angle.cos(), angle.sin()) * radius
}

/// Uniform noise in `[-amount, amount]`
pub fn weighted_random<R: Rng + ?Sized>(amount: f64, rng: &mut R) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }
    rng.random_range(-amount..=amount)
}

/// The centre of `area` displaced by up to `noise` of half its extent on each axis,
/// truncated to whole pixels
pub fn skew_centre<R: Rng + ?Sized>(area: &DrawableArea, noise: f64, rng: &mut R) -> Point {
    let x = area.min_x as f64 + area.width() as f64 * (1.0 + weighted_random(noise, rng)) / 2.0;
    let y = area.min_y as f64 + area.height() as f64 * (1.0 + weighted_random(noise, rng)) / 2.0;
    dvec2(x.trunc(), y.trunc())
}

/// Vertices of a regular polygon with a vertex at angle zero (east)
pub fn regular_polygon(center: Point, radius: f64, sides: usize) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            center + dvec2(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// The first `n` Fibonacci numbers, starting `1, 1, 2, ...`
pub fn fibonacci(n: usize) -> Vec<i64> {
    let mut seq = Vec::with_capacity(n);
    let (mut a, mut b) = (1_i64, 1_i64);
    for _ in 0..n {
        seq.push(a);
        (a, b) = (b, a + b);
    }
    seq
}
