//! Bethe-Bloch energy-loss simulation: produces the tables the viewer plots.
//!
//! ```text
//!   SimParams + Material + Projectile
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  bethe    │  step through the target → lazy Sample iterator
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  writer   │  "%.8f %.8f %.8f" rows
//!   └──────────┘
//! ```

pub mod bethe;
pub mod prompt;
pub mod writer;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Kinetic energy must be positive.")]
    NonPositiveEnergy,

    #[error("Number of steps must be positive.")]
    NonPositiveSteps,

    #[error("Thickness must be positive.")]
    NonPositiveThickness,

    #[error("Could not open output file at '{}'.", path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Too many attempts at input {what}.")]
    TooManyAttempts { what: &'static str },

    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}
