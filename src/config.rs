//! Configuration (`config.toml`) loading.
//!
//! Every key below is required; a missing one fails the run at startup.
//!
//! ```toml
//! [paper_sizes]
//! A3 = [297, 420]
//! A4 = [210, 297]
//!
//! [page]
//! pixels_per_mm = 5
//! bleed = [5, 5]
//!
//! [colours]
//! stroke = "black"
//! fill = "none"
//! background = "white"
//!
//! [directories]
//! output = "output/"
//! ```

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use miette::NamedSource;
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::types::{PaperSize, check_positive};

/// A parsed configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Named paper presets, `[width, height]` in millimetres
    pub paper_sizes: BTreeMap<String, [f64; 2]>,
    pub page: PageSection,
    pub colours: ColourSection,
    pub directories: DirectorySection,
}

/// The `[page]` section
#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
    /// Resolution; also the default stroke width
    pub pixels_per_mm: f64,
    /// Bleed percentage per axis
    pub bleed: [f64; 2],
}

/// The `[colours]` section
#[derive(Debug, Clone, Deserialize)]
pub struct ColourSection {
    pub stroke: String,
    pub fill: String,
    pub background: String,
}

/// The `[directories]` section
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySection {
    pub output: Utf8PathBuf,
}

impl Config {
    /// Load and validate a configuration file
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&content, path.as_str())
    }

    /// Parse and validate configuration text; `name` labels diagnostics
    pub fn parse(content: &str, name: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.message().to_string(),
            src: NamedSource::new(name, content.to_string()),
            span: e.span().map(Into::into),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the geometry layer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive(self.page.pixels_per_mm).map_err(|cause| ConfigError::Invalid {
            key: "page.pixels_per_mm",
            reason: cause.to_string(),
        })?;

        for value in self.page.bleed {
            if !(0.0..100.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    key: "page.bleed",
                    reason: format!("{value} is outside [0, 100)"),
                });
            }
        }

        for (name, [width, height]) in &self.paper_sizes {
            PaperSize::try_new(*width, *height).map_err(|e| ConfigError::Invalid {
                key: "paper_sizes",
                reason: format!("{name}: {e}"),
            })?;
        }

        Ok(())
    }

    /// Resolve a named paper preset
    pub fn paper_size(&self, name: &str) -> Result<PaperSize, ConfigError> {
        match self.paper_sizes.get(name) {
            Some(&[width, height]) => Ok(PaperSize { width, height }),
            None => Err(ConfigError::UnknownPaperSize {
                name: name.to_string(),
                known: self
                    .paper_sizes
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
