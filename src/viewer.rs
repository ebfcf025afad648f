use anyhow::{anyhow, Result};
use eframe::egui;

use crate::app::EnergyChartApp;
use crate::chart::ChartSpec;

/// Something that can put a chart in front of the user.
pub trait ChartViewer {
    /// Display the chart. Implementations may block until it is dismissed.
    fn show(&mut self, chart: ChartSpec) -> Result<()>;
}

/// Native window settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            inner_size: [800.0, 500.0],
            min_inner_size: [400.0, 250.0],
        }
    }
}

/// Opens an eframe window and blocks until it is closed.
#[derive(Debug, Clone, Default)]
pub struct NativeViewer {
    pub options: ViewerOptions,
}

impl ChartViewer for NativeViewer {
    fn show(&mut self, chart: ChartSpec) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(chart.title.clone())
                .with_inner_size(self.options.inner_size)
                .with_min_inner_size(self.options.min_inner_size),
            ..Default::default()
        };

        log::info!("Opening chart window \"{}\"", chart.title);
        let app_name = chart.title.clone();
        eframe::run_native(
            &app_name,
            options,
            Box::new(move |_cc| Ok(Box::new(EnergyChartApp::new(chart)))),
        )
        .map_err(|e| anyhow!("chart window failed: {e}"))
    }
}
