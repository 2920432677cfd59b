use pagegen::generators::Grid;

fn main() -> miette::Result<()> {
    pagegen::run(Grid::default())?;
    Ok(())
}
