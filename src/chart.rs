use crate::color::CurveColor;
use crate::data::{EnergyTable, NormalizedEnergies};

// ---------------------------------------------------------------------------
// Chart description, independent of rendering
// ---------------------------------------------------------------------------

pub const TITLE: &str = "Energia in funzione della distanza";
pub const X_LABEL: &str = "Distanza";
pub const Y_LABEL: &str = "Energia in %";

/// One labelled line on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub color: CurveColor,
    /// `[x, y]` pairs, in file order.
    pub points: Vec<[f64; 2]>,
}

impl Curve {
    fn new(label: &str, color: CurveColor, x: &[f64], y: &[f64]) -> Self {
        Curve {
            label: label.to_string(),
            color,
            points: x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect(),
        }
    }
}

/// Everything the viewer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curves: Vec<Curve>,
    pub legend: bool,
    pub grid: bool,
}

impl ChartSpec {
    /// Both normalized energies plotted against distance on shared axes.
    pub fn energy_vs_distance(table: &EnergyTable, normalized: &NormalizedEnergies) -> Self {
        let distance = table.distance();
        ChartSpec {
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            curves: vec![
                Curve::new("Energia 1", CurveColor::Blue, distance, &normalized.energy1),
                Curve::new("Energia 2", CurveColor::Red, distance, &normalized.energy2),
            ],
            legend: true,
            grid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_chart_layout() {
        let table =
            EnergyTable::from_rows([[1.0, 10.0, 5.0], [2.0, 20.0, 15.0], [3.0, 5.0, 20.0]])
                .unwrap();
        let chart = ChartSpec::energy_vs_distance(&table, &table.normalized().unwrap());

        assert_eq!(chart.title, "Energia in funzione della distanza");
        assert_eq!(chart.x_label, "Distanza");
        assert_eq!(chart.y_label, "Energia in %");
        assert!(chart.legend);
        assert!(chart.grid);

        assert_eq!(chart.curves.len(), 2);
        let (e1, e2) = (&chart.curves[0], &chart.curves[1]);
        assert_eq!((e1.label.as_str(), e1.color), ("Energia 1", CurveColor::Blue));
        assert_eq!((e2.label.as_str(), e2.color), ("Energia 2", CurveColor::Red));
        assert_eq!(e1.points, vec![[1.0, 0.5], [2.0, 1.0], [3.0, 0.25]]);
        assert_eq!(e2.points, vec![[1.0, 0.25], [2.0, 0.75], [3.0, 1.0]]);
    }
}
