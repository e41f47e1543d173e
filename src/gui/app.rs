//! Main Application
//! Window hosting the chart viewer until the user closes it.

use crate::charts::ChartSpec;
use crate::gui::ChartViewer;

pub const APP_NAME: &str = "wikiPlt";

/// Main application window.
pub struct WikiPltApp {
    chart_viewer: ChartViewer,
}

impl WikiPltApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, spec: ChartSpec) -> Self {
        Self {
            chart_viewer: ChartViewer::new(spec),
        }
    }
}

impl eframe::App for WikiPltApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Open the chart window and block until it is closed.
pub fn run(spec: ChartSpec, window_size: [f32; 2]) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title(spec.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(WikiPltApp::new(cc, spec)))),
    )
}
