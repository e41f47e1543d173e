//! Solver module - Runge-Kutta integration behind the sample data

mod runge_kutta;
pub mod sample;
mod tableau;

pub use runge_kutta::RungeKutta;
pub use tableau::Tableau;

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Tableau '{name}' is inconsistent: weights sum to {sum}")]
    Inconsistent { name: &'static str, sum: f64 },
    #[error("'{name}': expected dimension {expected}, found {found}")]
    Dimension {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Cannot write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Polars error")]
    PolarsError(#[from] PolarsError),
}
