//! GUI module - Chart window

mod app;
mod chart_viewer;

pub use app::{run, WikiPltApp, APP_NAME};
pub use chart_viewer::ChartViewer;
