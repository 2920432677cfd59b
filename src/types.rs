//! Plain geometric value types for a page.
//!
//! Everything here is immutable once built. Pixel-grid quantities are `i64`
//! (the page and drawable area sit on whole pixels), free coordinates are
//! [`Point`] (`glam::DVec2`).

use std::fmt;

use glam::DVec2;

use crate::errors::GeometryError;

/// A coordinate on the page, in pixels (SVG Y-down)
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Accept only finite values strictly greater than zero
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Physical paper dimensions, in abstract units (millimetres for the presets)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaperSize {
    pub width: f64,
    pub height: f64,
}

impl PaperSize {
    pub const A3: PaperSize = PaperSize {
        width: 297.0,
        height: 420.0,
    };
    pub const A4: PaperSize = PaperSize {
        width: 210.0,
        height: 297.0,
    };

    /// Create a paper size, rejecting zero, negative and non-finite dimensions
    pub fn try_new(width: f64, height: f64) -> Result<Self, GeometryError> {
        match (check_positive(width), check_positive(height)) {
            (Ok(width), Ok(height)) => Ok(Self { width, height }),
            _ => Err(GeometryError::InvalidPaperSize { width, height }),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Page size in whole pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSize {
    pub width: i64,
    pub height: i64,
}

impl PixelSize {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Same page turned through a right angle
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Axis-aligned rectangle where shapes may be placed.
///
/// Bounds are closed: a point on `max_x` is inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawableArea {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl DrawableArea {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> Point {
        Point::new(self.min_x as f64, self.min_y as f64)
    }

    pub fn max(&self) -> Point {
        Point::new(self.max_x as f64, self.max_y as f64)
    }

    /// Midpoint of the rectangle
    pub fn center(&self) -> Point {
        (self.min() + self.max()) * 0.5
    }

    /// The four corners, clockwise from the top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x as f64, self.min_y as f64),
            Point::new(self.max_x as f64, self.min_y as f64),
            Point::new(self.max_x as f64, self.max_y as f64),
            Point::new(self.min_x as f64, self.max_y as f64),
        ]
    }

    /// Closed-bounds containment test
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x as f64
            && p.x <= self.max_x as f64
            && p.y >= self.min_y as f64
            && p.y <= self.max_y as f64
    }

    /// Shrink every edge by `by` pixels.
    ///
    /// Returns `None` when the result would have no interior.
    pub fn inset(&self, by: i64) -> Option<DrawableArea> {
        let inner = DrawableArea::new(
            self.min_x + by,
            self.min_y + by,
            self.max_x - by,
            self.max_y - by,
        );
        (inner.min_x < inner.max_x && inner.min_y < inner.max_y).then_some(inner)
    }
}

impl fmt::Display for DrawableArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Stroke colour, stroke width, fill colour.
///
/// Colours are tokens such as `black` or `none`; they are escaped on output.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

impl Style {
    pub fn new(stroke: impl Into<String>, stroke_width: f64, fill: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            fill: fill.into(),
        }
    }

    /// A borderless solid fill
    pub fn solid(colour: impl Into<String>) -> Self {
        let colour = colour.into();
        Self {
            stroke: colour.clone(),
            stroke_width: 0.0,
            fill: colour,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new("black", 1.0, "none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_positive_rejects_degenerate_values() {
        assert_eq!(check_positive(0.0), Err(NumericError::Zero));
        assert_eq!(check_positive(-1.0), Err(NumericError::Negative));
        assert_eq!(check_positive(f64::NAN), Err(NumericError::NaN));
        assert_eq!(check_positive(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(check_positive(2.5), Ok(2.5));
    }

    #[test]
    fn paper_size_rejects_non_positive() {
        assert!(PaperSize::try_new(297.0, 420.0).is_ok());
        assert_eq!(
            PaperSize::try_new(0.0, 420.0),
            Err(GeometryError::InvalidPaperSize {
                width: 0.0,
                height: 420.0,
            })
        );
    }

    #[test]
    fn area_contains_its_corners_and_not_beyond() {
        let area = DrawableArea::new(10, 20, 110, 220);
        for corner in area.corners() {
            assert!(area.contains(corner), "{corner} should be inside");
        }
        assert!(!area.contains(Point::new(9.5, 50.0)));
        assert!(!area.contains(Point::new(50.0, 220.5)));
        assert_eq!(area.center(), Point::new(60.0, 120.0));
    }

    #[test]
    fn inset_collapses_to_none() {
        let area = DrawableArea::new(0, 0, 100, 50);
        assert_eq!(area.inset(10), Some(DrawableArea::new(10, 10, 90, 40)));
        assert_eq!(area.inset(25), None);
    }

    #[test]
    fn solid_style_has_no_stroke_width() {
        let style = Style::solid("white");
        assert_eq!(style, Style::new("white", 0.0, "white"));
    }
}
