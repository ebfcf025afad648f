use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use bethe_plot::runner;
use bethe_plot::sim::bethe::{self, Material, Projectile, SimParams};
use bethe_plot::sim::{prompt, writer, SimError};
use bethe_plot::viewer::NativeViewer;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bethe-Bloch energy loss of a charged particle in a slab", allow_negative_numbers = true)]
struct Args {
    /// Initial kinetic energy of the projectile (MeV)
    #[arg(value_name = "INITIAL_ENERGY")]
    initial_energy: f64,

    /// Target thickness (cm)
    #[arg(value_name = "THICKNESS")]
    thickness: f64,

    /// Number of integration steps
    #[arg(value_name = "STEPS")]
    steps: i64,

    /// Where to write the `distance energy stopping_power` table
    #[arg(value_name = "OUTPUT_FILE")]
    output: PathBuf,

    /// Target material (asked interactively when omitted)
    #[arg(long, value_enum)]
    material: Option<Material>,

    /// Projectile (asked interactively when omitted)
    #[arg(long, value_enum)]
    projectile: Option<Projectile>,

    /// Open the plot without asking
    #[arg(long, conflicts_with = "no_plot")]
    plot: bool,

    /// Never open the plot
    #[arg(long)]
    no_plot: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("! Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let params = SimParams {
        initial_energy: args.initial_energy,
        thickness: args.thickness,
        steps: args.steps,
    };
    params.validate()?;

    let file = File::create(&args.output).map_err(|source| SimError::OutputFile {
        path: args.output.clone(),
        source,
    })?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let material = match args.material {
        Some(m) => m,
        None => prompt::choose(&mut input, &mut output, &prompt::MATERIAL_MENU)?,
    };
    let projectile = match args.projectile {
        Some(p) => p,
        None => prompt::choose(&mut input, &mut output, &prompt::PROJECTILE_MENU)?,
    };
    log::info!("Simulating {projectile:?} in {material:?}: {params:?}");

    let samples = bethe::simulate(&params, &material.props(), &projectile.props())?;
    let rows = writer::write_samples(BufWriter::new(file), samples)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("Wrote {rows} rows");
    println!("Data saved at '{}'", args.output.display());

    let show = if args.plot {
        true
    } else if args.no_plot {
        false
    } else {
        prompt::yes_or_no(&mut input, &mut output, "Do you wish to see a plot?")?
    };

    if show {
        runner::plot_file(&args.output, &mut NativeViewer::default())?;
    }
    Ok(())
}
