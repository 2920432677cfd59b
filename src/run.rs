//! The pipeline every generator binary runs: load config, build the canvas,
//! generate, write the document.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDateTime};
use rand::RngCore;

use crate::config::Config;
use crate::errors::Error;
use crate::generators::{Generate, Generator};
use crate::log::{debug, info};
use crate::render::Canvas;
use crate::render::defaults;
use crate::render::document::{describe, ensure_dir, output_path};

/// Run `generator` once with `config.toml` from the working directory and the
/// thread-local random source. Returns the path written.
pub fn run(generator: impl Into<Generator>) -> Result<Utf8PathBuf, Error> {
    crate::log::init();
    let config = Config::from_file(Utf8Path::new(defaults::CONFIG_FILE))?;
    generate_file(
        &generator.into(),
        &config,
        &mut rand::rng(),
        Local::now().naive_local(),
    )
}

/// Generate one page and write it under the configured output directory,
/// named after the generator and `at`.
pub fn generate_file(
    generator: &Generator,
    config: &Config,
    rng: &mut dyn RngCore,
    at: NaiveDateTime,
) -> Result<Utf8PathBuf, Error> {
    let canvas = Canvas::from_config_defaults(config)?;
    let dir = &config.directories.output;
    ensure_dir(dir)?;
    let path = output_path(dir, generator.name(), at);
    info!(
        generator = generator.name(),
        paper = %canvas.paper,
        page = %describe(canvas.page, &canvas.area),
        %path,
        "generating"
    );
    debug!(?generator, "parameters");

    let shapes = generator.generate(&canvas, rng)?;
    let document = canvas.document(&shapes);
    document.write(&path)?;
    info!(shapes = document.shape_count(), %path, "written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::SAMPLE;
    use crate::generators::Maze;
    use crate::generators::tests::rng;
    use chrono::NaiveDate;

    fn config_in(dir: &Utf8Path) -> Config {
        let mut config = Config::parse(SAMPLE, "config.toml").unwrap();
        config.directories.output = dir.join("output");
        config
    }

    #[test]
    fn writes_named_file_in_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(tmp.path()).unwrap().to_owned();
        let config = config_in(&root);
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();

        let generator = Maze::default().into();
        let path = generate_file(&generator, &config, &mut rng(1), at).unwrap();
        assert_eq!(path, root.join("output/maze_20250102_030405.svg"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<?xml"));
        assert!(text.ends_with("</svg>\n"));
        assert!(text.contains("<line "));
    }

    #[test]
    fn unknown_default_paper_fails_before_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(tmp.path()).unwrap().to_owned();
        let mut config = config_in(&root);
        config.paper_sizes.remove("A3");
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();

        let generator = Maze::default().into();
        let result = generate_file(&generator, &config, &mut rng(1), at);
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{err:?}");
        assert!(!root.join("output").exists());
    }
}
