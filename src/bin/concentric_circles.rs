use pagegen::generators::ConcentricCircles;

fn main() -> miette::Result<()> {
    pagegen::run(ConcentricCircles::default())?;
    Ok(())
}
