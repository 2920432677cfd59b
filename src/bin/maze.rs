use pagegen::generators::Maze;

fn main() -> miette::Result<()> {
    pagegen::run(Maze::default())?;
    Ok(())
}
