use pagegen::generators::Honeycomb;

fn main() -> miette::Result<()> {
    pagegen::run(Honeycomb::default())?;
    Ok(())
}
