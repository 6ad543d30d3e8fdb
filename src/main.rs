use anyhow::Error;

fn main() -> Result<(), Error> {
    labyrinth::solver()
}
