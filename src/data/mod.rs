//! Data layer: core types, loading, and normalization.
//!
//! Architecture:
//! ```text
//!  distance energy1 energy2   (whitespace table)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse rows → EnergyTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ EnergyTable  │  three equal-length columns
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ normalized  │  energy / max(energy) per series
//!   └────────────┘
//! ```
//!
//! ```
//! use std::io::Cursor;
//! use bethe_plot::data::loader::parse_table;
//!
//! let table = parse_table(Cursor::new("1 10 5\n2 20 15\n3 5 20\n")).unwrap();
//! let normalized = table.normalized().unwrap();
//! assert_eq!(normalized.energy1, vec![0.5, 1.0, 0.25]);
//! assert_eq!(normalized.energy2, vec![0.25, 0.75, 1.0]);
//! ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::DataError;
pub use model::{EnergyTable, NormalizedEnergies};
