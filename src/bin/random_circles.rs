use pagegen::generators::RandomCircles;

fn main() -> miette::Result<()> {
    pagegen::run(RandomCircles::default())?;
    Ok(())
}
