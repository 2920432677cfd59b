//! Default page settings shared by every generator

/// Paper preset looked up in `[paper_sizes]`
pub const PAPER: &str = "A3";
pub const LANDSCAPE: bool = true;
/// Fraction of the largest fitting circle used by the circle generators
pub const CIRCLE_FRACTION: f64 = 0.95;
/// Output file extension
pub const EXTENSION: &str = "svg";
/// Configuration file, relative to the working directory
pub const CONFIG_FILE: &str = "config.toml";
