use pagegen::generators::AlwaysRight;

fn main() -> miette::Result<()> {
    pagegen::run(AlwaysRight::default())?;
    Ok(())
}
