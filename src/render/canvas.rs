//! Canvas - the page every generator draws on
//!
//! Built once per run from [`Config`] and passed by reference; there is no
//! process-wide page state.

use crate::config::Config;
use crate::errors::{Error, GeometryError};
use crate::geometry::{circle_fitting, drawable_area, pixel_size};
use crate::types::{DrawableArea, PaperSize, PixelSize, Point, Style};

use super::defaults;
use super::document::Document;
use super::shapes::{Shape, StyledShape, background};

/// Page geometry and default style
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub paper: PaperSize,
    pub pixels_per_mm: f64,
    pub page: PixelSize,
    pub area: DrawableArea,
    /// Style applied to generated shapes
    pub style: Style,
    pub background: String,
}

impl Canvas {
    pub fn new(
        paper: PaperSize,
        pixels_per_mm: f64,
        landscape: bool,
        bleed: [f64; 2],
        style: Style,
        background: impl Into<String>,
    ) -> Result<Self, GeometryError> {
        let page = pixel_size(paper, pixels_per_mm, landscape)?;
        let area = drawable_area(page, bleed)?;
        Ok(Self {
            paper,
            pixels_per_mm,
            page,
            area,
            style,
            background: background.into(),
        })
    }

    /// Canvas for a named paper preset. The stroke width is one millimetre.
    pub fn from_config(config: &Config, paper: &str, landscape: bool) -> Result<Self, Error> {
        let paper = config.paper_size(paper)?;
        let ppmm = config.page.pixels_per_mm;
        let style = Style::new(
            config.colours.stroke.as_str(),
            ppmm,
            config.colours.fill.as_str(),
        );
        Ok(Self::new(
            paper,
            ppmm,
            landscape,
            config.page.bleed,
            style,
            config.colours.background.as_str(),
        )?)
    }

    /// Canvas with the default paper preset and orientation
    pub fn from_config_defaults(config: &Config) -> Result<Self, Error> {
        Self::from_config(config, defaults::PAPER, defaults::LANDSCAPE)
    }

    /// Centre and radius of the circle the circle generators draw within
    pub fn circle(&self) -> (Point, f64) {
        circle_fitting(&self.area, defaults::CIRCLE_FRACTION)
    }

    /// Pair a shape with the canvas style
    pub fn styled(&self, shape: impl Into<Shape>) -> StyledShape {
        StyledShape::new(shape, self.style.clone())
    }

    /// Background rectangle over the drawable area
    pub fn background(&self) -> StyledShape {
        background(&self.area, &self.background)
    }

    pub fn document(&self, shapes: &[StyledShape]) -> Document {
        Document::new(self.page, &self.area, shapes)
    }
}
