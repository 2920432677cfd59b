use pagegen::generators::Chords;

fn main() -> miette::Result<()> {
    pagegen::run(Chords::default())?;
    Ok(())
}
