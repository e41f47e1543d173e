//! Chart Plotter Module
//! Builds the time-series comparison chart and draws it with egui_plot.

use crate::config::{ChartSettings, LegendAnchor};
use crate::data::{SeriesSet, SERIES_COUNT};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points};
use log::{debug, info};
use serde::Serialize;

/// Trace color, assigned by column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesColor {
    Red,
    Green,
    Blue,
}

impl SeriesColor {
    pub fn to_color32(self) -> Color32 {
        match self {
            SeriesColor::Red => Color32::from_rgb(255, 0, 0),
            SeriesColor::Green => Color32::from_rgb(0, 128, 0),
            SeriesColor::Blue => Color32::from_rgb(0, 0, 255),
        }
    }
}

/// Columns 1, 2, 3 in that order.
pub const SERIES_COLORS: [SeriesColor; SERIES_COUNT] =
    [SeriesColor::Red, SeriesColor::Green, SeriesColor::Blue];

const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 2.5;

/// One series drawn as a line with a marker at every point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub label: String,
    pub color: SeriesColor,
    /// `[t, y]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Data extent over all traces, NaN excluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Complete description of what ends up on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub figure_size: [f32; 2],
    pub legend: LegendAnchor,
    pub grid: bool,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn from_series(set: &SeriesSet, settings: &ChartSettings) -> Self {
        let traces: Vec<Trace> = set
            .series
            .iter()
            .zip(SERIES_COLORS)
            .map(|(column, color)| Trace {
                label: column.name.clone(),
                color,
                points: set
                    .time
                    .values
                    .iter()
                    .zip(&column.values)
                    .map(|(&t, &y)| [t, y])
                    .collect(),
            })
            .collect();

        for trace in &traces {
            debug!(
                "Trace '{}' ({:?}): {} points",
                trace.label,
                trace.color,
                trace.points.len()
            );
        }

        let spec = Self {
            title: settings.title.clone(),
            x_label: settings.x_label.clone(),
            y_label: settings.y_label.clone(),
            figure_size: settings.figure_size,
            legend: settings.legend,
            grid: settings.grid,
            traces,
        };
        info!("Built chart '{}' with {} traces", spec.title, spec.traces.len());
        debug!("Chart bounds: {:?}", spec.bounds());
        spec
    }

    pub fn point_counts(&self) -> Vec<usize> {
        self.traces.iter().map(|t| t.points.len()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.label.as_str()).collect()
    }

    /// `None` when there is no finite point to plot.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut finite = self
            .traces
            .iter()
            .flat_map(|t| t.points.iter())
            .filter(|[x, y]| x.is_finite() && y.is_finite());

        let &[x, y] = finite.next()?;
        let init = Bounds {
            x_min: x,
            x_max: x,
            y_min: y,
            y_max: y,
        };

        Some(finite.fold(init, |b, &[x, y]| Bounds {
            x_min: b.x_min.min(x),
            x_max: b.x_max.max(x),
            y_min: b.y_min.min(y),
            y_max: b.y_max.max(y),
        }))
    }
}

fn legend_corner(anchor: LegendAnchor) -> Corner {
    match anchor {
        LegendAnchor::UpperLeft => Corner::LeftTop,
        LegendAnchor::UpperRight => Corner::RightTop,
        LegendAnchor::LowerLeft => Corner::LeftBottom,
        LegendAnchor::LowerRight => Corner::RightBottom,
    }
}

/// Draws a [`ChartSpec`] with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn draw_line_chart(ui: &mut egui::Ui, spec: &ChartSpec) {
        Plot::new("series_comparison")
            .legend(Legend::default().position(legend_corner(spec.legend)))
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone())
            .show_grid(spec.grid)
            .show(ui, |plot_ui| {
                for trace in &spec.traces {
                    let color = trace.color.to_color32();

                    // Same name on line and markers gives one legend entry
                    plot_ui.line(
                        Line::new(PlotPoints::from(trace.points.clone()))
                            .color(color)
                            .width(LINE_WIDTH)
                            .name(&trace.label),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(trace.points.clone()))
                            .color(color)
                            .radius(MARKER_RADIUS)
                            .name(&trace.label),
                    );
                }
            });
    }
}
