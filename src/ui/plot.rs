use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::ChartSpec;

// ---------------------------------------------------------------------------
// Energy plot (central panel)
// ---------------------------------------------------------------------------

/// Render every curve of the chart on a single set of axes.
pub fn energy_plot(ui: &mut Ui, chart: &ChartSpec) {
    let mut plot = Plot::new("energy_plot")
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(chart.grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if chart.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for curve in &chart.curves {
            let points: PlotPoints = curve.points.iter().copied().collect();

            let line = Line::new(points)
                .name(&curve.label)
                .color(curve.color)
                .width(1.5);

            plot_ui.line(line);
        }
    });
}
