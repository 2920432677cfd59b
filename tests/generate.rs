//! End-to-end: generate pages into a scratch directory and inspect the markup.

use camino::Utf8Path;
use chrono::NaiveDate;
use pagegen::generators::{Boxes, Chords, Honeycomb};
use pagegen::{Config, Generator, generate_file};
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex_lite::Regex;

const CONFIG: &str = include_str!("../config.toml");

fn scratch() -> (tempfile::TempDir, Config) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8Path::from_path(tmp.path()).unwrap().to_owned();
    let mut config = Config::parse(CONFIG, "config.toml").unwrap();
    config.directories.output = root.join("out");
    (tmp, config)
}

fn write(generator: impl Into<Generator>, seed: u64) -> String {
    let (_tmp, config) = scratch();
    let at = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let generator: Generator = generator.into();
    let path = generate_file(&generator, &config, &mut rng, at).unwrap();
    std::fs::read_to_string(path).unwrap()
}

fn attr(element: &str, name: &str) -> f64 {
    let re = Regex::new(&format!(r#"\s{name}="([^"]+)""#)).unwrap();
    re.captures(element)
        .unwrap_or_else(|| panic!("no {name} in {element}"))[1]
        .parse()
        .unwrap()
}

#[test]
fn document_is_framed_by_header_and_footer() {
    let text = write(Chords::default(), 1);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    );
    assert_eq!(
        lines[1],
        r#"<svg height="1485" version="1.1" viewBox="52 37 1996 1411" width="2100" xmlns="http://www.w3.org/2000/svg">"#
    );
    assert_eq!(*lines.last().unwrap(), "</svg>");
    let chords = &lines[2..lines.len() - 1];
    assert!((125..=250).contains(&chords.len()), "{}", chords.len());
    for chord in chords {
        assert!(chord.starts_with("<line ") && chord.ends_with("/>"), "{chord}");
    }
}

#[test]
fn written_boxes_do_not_overlap() {
    let text = write(
        Boxes {
            iterations: 20,
            ..Boxes::default()
        },
        7,
    );
    let rects: Vec<(f64, f64, f64)> = text
        .lines()
        .filter(|l| l.starts_with("<rect "))
        .map(|l| (attr(l, "x"), attr(l, "y"), attr(l, "width")))
        .collect();
    assert!(!rects.is_empty());

    for (i, &(x, y, side)) in rects.iter().enumerate() {
        assert!(x >= 52.0 && y >= 37.0);
        assert!(x + side <= 2048.0 && y + side <= 1448.0);
        for &(ox, oy, os) in &rects[i + 1..] {
            let overlap = x < ox + os && x + side > ox && y < oy + os && y + side > oy;
            assert!(!overlap, "({x}, {y}, {side}) overlaps ({ox}, {oy}, {os})");
        }
    }
}

#[test]
fn honeycomb_cells_are_hexagons() {
    let text = write(Honeycomb::default(), 3);
    let polygons: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("<polygon "))
        .collect();
    assert!(!polygons.is_empty());
    let points = Regex::new(r#"points="([^"]+)""#).unwrap();
    for p in polygons {
        let list = &points.captures(p).unwrap()[1];
        assert_eq!(list.split(' ').count(), 6, "{list}");
        for style in [r#"stroke="black""#, r#"stroke-width="5""#, r#"fill="none""#] {
            assert!(p.contains(style), "{p}");
        }
    }
}

#[test]
fn every_generator_writes_a_file() {
    for generator in Generator::all() {
        let text = write(generator, 11);
        assert!(text.ends_with("</svg>\n"));
        assert!(text.lines().count() > 3);
    }
}
