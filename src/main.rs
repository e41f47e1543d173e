//! wikiPlt - Runge-Kutta comparison chart viewer
//!
//! Shows `./wikiPlt.csv` as a line chart and exits when the window closes.

use anyhow::{anyhow, Result};
use wikiplt::config::ChartSettings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ChartSettings::default();
    let spec = wikiplt::build_chart(&settings)?;

    wikiplt::gui::run(spec, settings.window_size())
        .map_err(|e| anyhow!("Chart window failed: {e}"))
}
