//! Error types with rich diagnostics using miette
//!
//! Every failure aborts the invocation; nothing here is retried or recovered.

use camino::Utf8PathBuf;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while loading `config.toml`
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration at {path}")]
    #[diagnostic(
        code(pagegen::config::read),
        help("generators read `config.toml` from the current directory")
    )]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(pagegen::config::parse))]
    Parse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("unknown paper size: {name}")]
    #[diagnostic(
        code(pagegen::config::unknown_paper_size),
        help("configured sizes: {known}")
    )]
    UnknownPaperSize { name: String, known: String },

    #[error("invalid value for `{key}`: {reason}")]
    #[diagnostic(code(pagegen::config::invalid))]
    Invalid { key: &'static str, reason: String },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Degenerate geometric input
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid resolution {value} pixels per unit: {cause}")]
    #[diagnostic(code(pagegen::geometry::invalid_resolution))]
    InvalidResolution { value: f64, cause: NumericError },

    #[error("invalid paper size {width} x {height}")]
    #[diagnostic(
        code(pagegen::geometry::invalid_paper_size),
        help("both paper dimensions must be positive and finite")
    )]
    InvalidPaperSize { width: f64, height: f64 },

    #[error("page is empty at this resolution")]
    #[diagnostic(code(pagegen::geometry::empty_page))]
    EmptyPage,

    #[error("invalid {axis} bleed {value}%")]
    #[diagnostic(
        code(pagegen::geometry::invalid_bleed),
        help("bleed is a percentage in [0, 100)")
    )]
    InvalidBleed { axis: char, value: f64 },

    #[error("a polygon needs at least 3 sides, got {sides}")]
    #[diagnostic(code(pagegen::geometry::too_few_sides))]
    TooFewSides { sides: usize },

    #[error("quantization step is zero")]
    #[diagnostic(code(pagegen::geometry::zero_step))]
    ZeroStep,

    #[error("non-finite value in {what}")]
    #[diagnostic(code(pagegen::geometry::non_finite))]
    NonFinite { what: &'static str },
}

// ============================================================================
// Output Errors
// ============================================================================

/// Errors writing the finished document
#[derive(Error, Diagnostic, Debug)]
pub enum OutputError {
    #[error("failed to create output directory {path}")]
    #[diagnostic(code(pagegen::output::create_dir))]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    #[diagnostic(code(pagegen::output::write))]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Umbrella
// ============================================================================

/// Any failure of a generator invocation
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Output(#[from] OutputError),
}
