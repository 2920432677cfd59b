use pagegen::generators::Boxes;

fn main() -> miette::Result<()> {
    pagegen::run(Boxes::default())?;
    Ok(())
}
