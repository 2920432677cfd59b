use pagegen::generators::Curves;

fn main() -> miette::Result<()> {
    pagegen::run(Curves::default())?;
    Ok(())
}
