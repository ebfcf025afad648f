use eframe::egui::{Ui, RichText};

use crate::chart::ChartSpec;

// ---------------------------------------------------------------------------
// Top bar – chart title
// ---------------------------------------------------------------------------

/// Render the chart title above the plot.
pub fn title_bar(ui: &mut Ui, chart: &ChartSpec) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(4.0);
        ui.label(RichText::new(&chart.title).heading().strong());
        ui.add_space(2.0);
    });
}
