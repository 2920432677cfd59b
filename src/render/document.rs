//! Document assembly and output
//!
//! A document is the header fragment, the shape fragments in draw order, and
//! the footer fragment. Writing it puts each fragment on its own line.

use std::fs;
use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDateTime;

use crate::errors::OutputError;
use crate::types::{DrawableArea, PixelSize};

use super::defaults;
use super::number::fmt_num;
use super::shapes::StyledShape;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

fn root_element(page: PixelSize, area: &DrawableArea) -> svg::Document {
    let view_box = format!(
        "{} {} {} {}",
        area.min_x,
        area.min_y,
        area.width(),
        area.height()
    );
    svg::Document::new()
        .set("width", fmt_num(page.width as f64))
        .set("height", fmt_num(page.height as f64))
        .set("viewBox", view_box)
        .set("xmlns", SVG_NS)
        .set("version", "1.1")
}

/// XML declaration and opening `<svg>` tag
pub fn header(page: PixelSize, area: &DrawableArea) -> String {
    // A childless root serializes self-closed; shapes follow on their own lines
    let root = root_element(page, area).to_string();
    let open = root.strip_suffix("/>").unwrap_or(&root);
    format!("{XML_DECLARATION}\n{open}>")
}

pub fn footer() -> String {
    "</svg>".to_string()
}

/// Wrap shape fragments with the header and footer
pub fn build_document(
    page: PixelSize,
    area: &DrawableArea,
    fragments: impl IntoIterator<Item = String>,
) -> Vec<String> {
    let mut doc = vec![header(page, area)];
    doc.extend(fragments);
    doc.push(footer());
    doc
}

/// A finished page, ready to write
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fragments: Vec<String>,
}

impl Document {
    pub fn new(page: PixelSize, area: &DrawableArea, shapes: &[StyledShape]) -> Self {
        Self {
            fragments: build_document(page, area, shapes.iter().map(StyledShape::fragment)),
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of shape fragments between header and footer
    pub fn shape_count(&self) -> usize {
        self.fragments.len().saturating_sub(2)
    }

    pub fn write(&self, path: &Utf8Path) -> Result<(), OutputError> {
        write_document(path, &self.fragments)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fragment in &self.fragments {
            writeln!(f, "{fragment}")?;
        }
        Ok(())
    }
}

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Utf8Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_owned(),
        source,
    })
}

/// Write each fragment followed by a newline, creating parent directories first.
///
/// The file handle is released when this returns, on success or error.
pub fn write_document(path: &Utf8Path, fragments: &[String]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let write_err = |source: std::io::Error| OutputError::Write {
        path: path.to_owned(),
        source,
    };
    let file = fs::File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    for fragment in fragments {
        writeln!(out, "{fragment}").map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

/// `<identity>_<YYYYmmdd_HHMMSS>.svg`.
///
/// One-second resolution: two runs of the same generator within a second
/// produce the same name and the later one overwrites the earlier.
pub fn output_filename(identity: &str, at: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        identity,
        at.format("%Y%m%d_%H%M%S"),
        defaults::EXTENSION
    )
}

/// Full output path inside `dir`
pub fn output_path(dir: &Utf8Path, identity: &str, at: NaiveDateTime) -> Utf8PathBuf {
    dir.join(output_filename(identity, at))
}

/// Human-readable page summary for logs
pub fn describe(page: PixelSize, area: &DrawableArea) -> String {
    format!(
        "{} px, drawable {} ({} x {})",
        page,
        area,
        area.width(),
        area.height()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shapes::{Circle, Line};
    use crate::types::Style;
    use chrono::NaiveDate;
    use glam::dvec2;

    fn page() -> (PixelSize, DrawableArea) {
        let page = PixelSize::new(2100, 1485);
        (page, DrawableArea::new(52, 37, 2048, 1448))
    }

    #[test]
    fn header_declares_size_and_view_box() {
        let (page, area) = page();
        insta::assert_snapshot!(header(page, &area), @r#"
        <?xml version="1.0" encoding="UTF-8" standalone="no"?>
        <svg height="1485" version="1.1" viewBox="52 37 1996 1411" width="2100" xmlns="http://www.w3.org/2000/svg">
        "#);
        assert_eq!(footer(), "</svg>");
    }

    #[test]
    fn build_wraps_fragments_in_order() {
        let (page, area) = page();
        let doc = build_document(page, &area, vec!["<a />".to_string(), "<b />".to_string()]);
        assert_eq!(doc.len(), 4);
        assert!(doc[0].starts_with("<?xml"));
        assert_eq!(doc[1], "<a />");
        assert_eq!(doc[2], "<b />");
        assert_eq!(doc[3], "</svg>");
    }

    #[test]
    fn building_twice_is_identical() {
        let (page, area) = page();
        let shapes = vec![
            StyledShape::new(Circle::new(dvec2(5.0, 5.0), 2.0), Style::default()),
            StyledShape::new(
                Line::new(dvec2(0.0, 0.0), dvec2(9.0, 9.0)),
                Style::default(),
            ),
        ];
        let first = Document::new(page, &area, &shapes);
        let second = Document::new(page, &area, &shapes);
        assert_eq!(first, second);
        assert_eq!(first.shape_count(), 2);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn filename_has_second_resolution() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 30)
            .unwrap();
        assert_eq!(output_filename("maze", at), "maze_20240309_070530.svg");
        assert_eq!(
            output_path(Utf8Path::new("out"), "maze", at),
            Utf8PathBuf::from("out/maze_20240309_070530.svg")
        );
    }

    #[test]
    fn write_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(tmp.path()).unwrap().to_owned();
        let path = root.join("nested/deeper/page.svg");
        let fragments = vec!["one".to_string(), "two".to_string()];

        write_document(&path, &fragments).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");

        // Same path again overwrites
        write_document(&path, &["three".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "three\n");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(tmp.path()).unwrap().to_owned();
        // A directory cannot be opened as a file
        let err = write_document(&root, &["x".to_string()]).unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
    }
}
