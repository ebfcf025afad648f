//! Energy-loss viewer: loads `distance energy1 energy2` tables, normalizes both
//! energy columns, and plots them against distance. The `bethe_sim` binary
//! produces such tables from a Bethe-Bloch stopping-power simulation.

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod runner;
pub mod sim;
pub mod ui;
pub mod viewer;
