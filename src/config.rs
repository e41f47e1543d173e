//! Chart Settings Module
//! Hard-coded input path and chart appearance.

use serde::Serialize;
use std::path::PathBuf;

/// Input file read by the viewer and written by `generate_sample`.
pub const CSV_PATH: &str = "./wikiPlt.csv";

/// Window pixels per figure unit (a 10x6 figure opens at 1000x600).
pub const PIXELS_PER_UNIT: f32 = 100.0;

/// Corner of the plot area the legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegendAnchor {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Everything about a run that is fixed at compile time.
#[derive(Debug, Clone)]
pub struct ChartSettings {
    pub csv_path: PathBuf,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Figure size in units, width then height.
    pub figure_size: [f32; 2],
    pub legend: LegendAnchor,
    pub grid: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(CSV_PATH),
            title: "y' = sin(t)² · y".to_string(),
            x_label: "t".to_string(),
            y_label: "y".to_string(),
            figure_size: [10.0, 6.0],
            legend: LegendAnchor::UpperLeft,
            grid: true,
        }
    }
}

impl ChartSettings {
    /// Same appearance, different input file.
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    /// Window size in pixels derived from the figure size.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.figure_size[0] * PIXELS_PER_UNIT,
            self.figure_size[1] * PIXELS_PER_UNIT,
        ]
    }
}
