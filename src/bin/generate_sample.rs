//! Writes `./wikiPlt.csv`: `y' = sin(t)^2 * y` solved with explicit Euler,
//! Heun and classic RK4.

use anyhow::{Context, Result};
use wikiplt::config::CSV_PATH;
use wikiplt::solver::sample;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let df = sample::write_csv(CSV_PATH).context("Generating sample data")?;
    println!("{df}");
    Ok(())
}
