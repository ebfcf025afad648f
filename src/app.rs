use eframe::egui;

use crate::chart::ChartSpec;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EnergyChartApp {
    pub chart: ChartSpec,
}

impl EnergyChartApp {
    pub fn new(chart: ChartSpec) -> Self {
        Self { chart }
    }
}

impl eframe::App for EnergyChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::title_bar(ui, &self.chart);
        });

        // ---- Central panel: plot fills the rest ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::energy_plot(ui, &self.chart);
        });
    }
}
