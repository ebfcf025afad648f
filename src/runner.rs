use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;

use crate::chart::ChartSpec;
use crate::data::{loader, DataError};
use crate::viewer::ChartViewer;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Every way a plotting run can end early.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("insufficient arguments\nusage: {program} <file>")]
    Usage { program: String },

    #[error("file {} does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("could not read file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file does not contain valid or correctly formatted data")]
    MalformedData(#[source] DataError),

    #[error("could not display the chart")]
    Viewer(#[source] anyhow::Error),
}

impl RunError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Validate `argv` (program name first), then load, normalize, and show the file.
///
/// Arguments stay `OsString` so paths that are not valid UTF-8 still resolve.
pub fn run<V>(args: &[OsString], viewer: &mut V) -> Result<(), RunError>
where
    V: ChartViewer + ?Sized,
{
    let [_, path] = args else {
        return Err(RunError::Usage {
            program: args
                .first()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
        });
    };

    plot_file(&PathBuf::from(path), viewer)
}

/// Load, normalize, and show one energy file.
pub fn plot_file<V>(path: &Path, viewer: &mut V) -> Result<(), RunError>
where
    V: ChartViewer + ?Sized,
{
    if !path.is_file() {
        return Err(RunError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let table = loader::load_table(path).map_err(|e| classify_load_error(path, e))?;
    let normalized = table.normalized().map_err(RunError::MalformedData)?;
    let chart = ChartSpec::energy_vs_distance(&table, &normalized);

    viewer.show(chart).map_err(RunError::Viewer)
}

/// I/O failures opening or reading the file are not a data problem, except
/// for bytes that are not text.
fn classify_load_error(path: &Path, err: DataError) -> RunError {
    match err {
        DataError::Io(source) if source.kind() != io::ErrorKind::InvalidData => {
            RunError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
        other => RunError::MalformedData(other),
    }
}
