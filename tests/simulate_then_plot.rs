use std::ffi::OsString;
use std::fs::File;
use std::io::Write;

use bethe_plot::chart::ChartSpec;
use bethe_plot::runner::{self, RunError};
use bethe_plot::sim::bethe::{simulate, Material, Projectile, SimParams};
use bethe_plot::sim::writer::write_samples;
use bethe_plot::viewer::ChartViewer;

#[derive(Default)]
struct CapturingViewer {
    charts: Vec<ChartSpec>,
}

impl ChartViewer for CapturingViewer {
    fn show(&mut self, chart: ChartSpec) -> anyhow::Result<()> {
        self.charts.push(chart);
        Ok(())
    }
}

fn peak(points: &[[f64; 2]]) -> f64 {
    points.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn simulated_table_plots_with_both_curves_peaking_at_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proton_al.txt");

    let params = SimParams {
        initial_energy: 50.0,
        thickness: 2.0,
        steps: 400,
    };
    let samples = simulate(
        &params,
        &Material::Aluminum.props(),
        &Projectile::Proton.props(),
    )
    .unwrap();
    write_samples(File::create(&path).unwrap(), samples).unwrap();

    let args = vec![OsString::from("bethe-plot"), path.into_os_string()];
    let mut viewer = CapturingViewer::default();
    runner::run(&args, &mut viewer).unwrap();

    assert_eq!(viewer.charts.len(), 1);
    let chart = &viewer.charts[0];
    assert_eq!(chart.curves.len(), 2);
    for curve in &chart.curves {
        assert_eq!(curve.points.len(), 400);
        assert!((peak(&curve.points) - 1.0).abs() < 1e-12, "{}", curve.label);
    }
    // Energy starts at its maximum.
    assert_eq!(chart.curves[0].points[0], [0.0, 1.0]);
}

#[test]
fn malformed_file_never_reaches_the_viewer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "0.0 1.0 2.0").unwrap();
    writeln!(file, "0.1 x 2.0").unwrap();
    drop(file);

    let mut viewer = CapturingViewer::default();
    let err = runner::plot_file(&path, &mut viewer).unwrap_err();

    assert!(matches!(err, RunError::MalformedData(_)), "{err:?}");
    assert!(viewer.charts.is_empty());
}
