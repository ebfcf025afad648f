use std::io::Write;

use anyhow::{Context, Result};

use super::bethe::Sample;

// ---------------------------------------------------------------------------
// Space-separated table writer
// ---------------------------------------------------------------------------

/// Write samples as `distance energy stopping_power` rows, eight decimals
/// each, one row per line and no header. The output loads back through
/// [`crate::data::loader::load_table`].
///
/// Rows are written as they arrive; returns how many were written.
pub fn write_samples<W, I>(out: W, samples: I) -> Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(out);

    let mut rows = 0u64;
    for s in samples {
        writer
            .write_record([
                format!("{:.8}", s.distance),
                format!("{:.8}", s.kinetic_energy),
                format!("{:.8}", s.stopping_power),
            ])
            .with_context(|| format!("writing row {rows}"))?;
        rows += 1;
    }

    writer.flush().context("flushing output")?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::data::loader::parse_table;
    use crate::sim::bethe::{simulate, Material, Projectile, SimParams};

    fn sample(distance: f64, kinetic_energy: f64, stopping_power: f64) -> Sample {
        Sample {
            distance,
            kinetic_energy,
            stopping_power,
        }
    }

    #[test]
    fn rows_use_eight_decimals_and_single_spaces() {
        let mut buf = Vec::new();
        let rows =
            write_samples(&mut buf, [sample(0.0, 100.0, 15.3), sample(0.005, 99.9235, 15.31)])
                .unwrap();
        assert_eq!(rows, 2);

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0.00000000 100.00000000 15.30000000\n\
             0.00500000 99.92350000 15.31000000\n"
        );
    }

    #[test]
    fn output_loads_back_as_an_energy_table() {
        let samples = [sample(0.0, 4.0, 1.0), sample(0.5, 2.0, 3.0), sample(1.0, 0.0, 0.0)];
        let mut buf = Vec::new();
        write_samples(&mut buf, samples).unwrap();

        let table = parse_table(Cursor::new(buf)).unwrap();
        assert_eq!(table.distance(), &[0.0, 0.5, 1.0]);
        assert_eq!(table.energy1(), &[4.0, 2.0, 0.0]);
        assert_eq!(table.energy2(), &[1.0, 3.0, 0.0]);
    }

    #[test]
    fn long_simulation_streams_without_collecting() {
        let params = SimParams {
            initial_energy: 200.0,
            thickness: 5.0,
            steps: 250_000,
        };
        let run = simulate(
            &params,
            &Material::Aluminum.props(),
            &Projectile::Proton.props(),
        )
        .unwrap();

        let rows = write_samples(io::sink(), run).unwrap();
        assert_eq!(rows, 250_000);
    }
}
