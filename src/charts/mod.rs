//! Charts module - Chart construction and rendering

mod plotter;

pub use plotter::{Bounds, ChartPlotter, ChartSpec, SeriesColor, Trace, SERIES_COLORS};
