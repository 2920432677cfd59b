//! Procedurally randomized SVG pages.
//!
//! A generator draws shapes onto a [`Canvas`] (a paper-sized page with a
//! drawable area inset by a bleed margin); the shapes are serialized into a
//! document and written to a timestamped file. Each generator also ships as
//! a binary under `src/bin/`.
//!
//! ```no_run
//! use pagegen::generators::Maze;
//!
//! fn main() -> miette::Result<()> {
//!     let path = pagegen::run(Maze::default())?;
//!     println!("{path}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod generators;
pub mod geometry;
pub mod log;
pub mod quantize;
pub mod render;
pub mod run;
pub mod types;

pub use config::Config;
pub use errors::{ConfigError, Error, GeometryError, OutputError};
pub use generators::{Generate, Generator};
pub use quantize::{Strategy, quantize};
pub use render::{Canvas, Document, StyledShape};
pub use run::{generate_file, run};
pub use types::{DrawableArea, PaperSize, PixelSize, Point, Style};
