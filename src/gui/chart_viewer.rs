//! Chart Viewer Widget
//! Central panel holding the title and the comparison plot.

use crate::charts::{ChartPlotter, ChartSpec};
use egui::RichText;

const TITLE_SIZE: f32 = 18.0;

/// Displays a single chart filling the available area.
pub struct ChartViewer {
    pub spec: ChartSpec,
}

impl ChartViewer {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.spec.title).size(TITLE_SIZE).strong());
        });
        ui.add_space(6.0);

        ChartPlotter::draw_line_chart(ui, &self.spec);
    }
}
