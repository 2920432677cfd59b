//! Shape types and their markup fragments
//!
//! Each shape is its own type that knows how to turn itself into an `svg`
//! element given a [`Style`]. [`Shape`] dispatches over all of them.

use enum_dispatch::enum_dispatch;
use svg::node::Node;
use svg::node::element::{
    Circle as SvgCircle, Line as SvgLine, Path, Polygon as SvgPolygon, Rectangle,
};

use crate::types::{DrawableArea, Point, Style};

use super::number::fmt_num;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Emit {
    /// Build the markup element for this shape
    fn element(&self, style: &Style) -> Box<dyn Node>;

    /// Serialized, self-contained markup fragment
    fn fragment(&self, style: &Style) -> String {
        self.element(style).to_string()
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A straight segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl Emit for Line {
    fn element(&self, style: &Style) -> Box<dyn Node> {
        Box::new(
            SvgLine::new()
                .set("x1", fmt_num(self.start.x))
                .set("y1", fmt_num(self.start.y))
                .set("x2", fmt_num(self.end.x))
                .set("y2", fmt_num(self.end.y))
                .set("stroke", style.stroke.as_str())
                .set("stroke-width", fmt_num(style.stroke_width)),
        )
    }
}

/// An axis-aligned rectangle (a "box")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Point,
}

impl Rect {
    pub fn new(origin: Point, size: Point) -> Self {
        Self { origin, size }
    }

    pub fn square(origin: Point, side: f64) -> Self {
        Self::new(origin, Point::splat(side))
    }

    pub fn max(&self) -> Point {
        self.origin + self.size
    }

    /// True when the interiors intersect; touching edges do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.origin.x < other.max().x
            && self.max().x > other.origin.x
            && self.origin.y < other.max().y
            && self.max().y > other.origin.y
    }

    pub fn within(&self, area: &DrawableArea) -> bool {
        area.contains(self.origin) && area.contains(self.max())
    }
}

impl Emit for Rect {
    fn element(&self, style: &Style) -> Box<dyn Node> {
        Box::new(
            Rectangle::new()
                .set("x", fmt_num(self.origin.x))
                .set("y", fmt_num(self.origin.y))
                .set("width", fmt_num(self.size.x))
                .set("height", fmt_num(self.size.y))
                .set("stroke", style.stroke.as_str())
                .set("stroke-width", fmt_num(style.stroke_width))
                .set("fill", style.fill.as_str()),
        )
    }
}

/// A circle shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// True when the discs intersect by more than a touching point
    pub fn intersects(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    pub fn within(&self, area: &DrawableArea) -> bool {
        let r = Point::splat(self.radius);
        area.contains(self.center - r) && area.contains(self.center + r)
    }
}

impl Emit for Circle {
    fn element(&self, style: &Style) -> Box<dyn Node> {
        Box::new(
            SvgCircle::new()
                .set("cx", fmt_num(self.center.x))
                .set("cy", fmt_num(self.center.y))
                .set("r", fmt_num(self.radius))
                .set("stroke", style.stroke.as_str())
                .set("stroke-width", fmt_num(style.stroke_width))
                .set("fill", style.fill.as_str()),
        )
    }
}

/// A quadratic Bézier curve, always unfilled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCurve {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadraticCurve {
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    fn path_data(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            fmt_num(self.control.x),
            fmt_num(self.control.y),
            fmt_num(self.end.x),
            fmt_num(self.end.y),
        )
    }
}

impl Emit for QuadraticCurve {
    fn element(&self, style: &Style) -> Box<dyn Node> {
        Box::new(
            Path::new()
                .set("d", self.path_data())
                .set("stroke", style.stroke.as_str())
                .set("stroke-width", fmt_num(style.stroke_width))
                .set("fill", "none"),
        )
    }
}

/// A closed polygon through `points` in order
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Emit for Polygon {
    fn element(&self, style: &Style) -> Box<dyn Node> {
        Box::new(
            SvgPolygon::new()
                .set("points", self.points_attr())
                .set("stroke", style.stroke.as_str())
                .set("stroke-width", fmt_num(style.stroke_width))
                .set("fill", style.fill.as_str()),
        )
    }
}

/// Any drawable primitive
#[enum_dispatch(Emit)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
    QuadraticCurve(QuadraticCurve),
    Polygon(Polygon),
}

/// A shape paired with the style it is drawn in
#[derive(Debug, Clone, PartialEq)]
pub struct StyledShape {
    pub shape: Shape,
    pub style: Style,
}

impl StyledShape {
    pub fn new(shape: impl Into<Shape>, style: Style) -> Self {
        Self {
            shape: shape.into(),
            style,
        }
    }

    pub fn element(&self) -> Box<dyn Node> {
        self.shape.element(&self.style)
    }

    pub fn fragment(&self) -> String {
        self.shape.fragment(&self.style)
    }
}

/// A borderless rectangle of `colour` covering `area`
pub fn background(area: &DrawableArea, colour: &str) -> StyledShape {
    let rect = Rect::new(
        area.min(),
        Point::new(area.width() as f64, area.height() as f64),
    );
    StyledShape::new(rect, Style::solid(colour))
}
