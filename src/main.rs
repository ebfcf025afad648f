use std::process::ExitCode;

use bethe_plot::runner;
use bethe_plot::viewer::NativeViewer;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<_> = std::env::args_os().collect();

    match runner::run(&args, &mut NativeViewer::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{e}");
            log::error!("{:#}", anyhow::Error::from(e));
            code
        }
    }
}
