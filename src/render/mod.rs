//! Markup rendering for generated pages
//!
//! This module is organized into submodules:
//! - `defaults`: Default page settings
//! - `number`: Decimal policy for markup values
//! - `shapes`: Shape types and their fragments
//! - `document`: Header, footer, assembly and file output
//! - `canvas`: Page geometry and style handed to generators

pub mod canvas;
pub mod defaults;
pub mod document;
pub mod number;
pub mod shapes;

// Re-export commonly used items
pub use canvas::Canvas;
pub use document::{Document, build_document, output_filename, write_document};
pub use number::fmt_num;
pub use shapes::{Circle, Emit, Line, Polygon, QuadraticCurve, Rect, Shape, StyledShape};
