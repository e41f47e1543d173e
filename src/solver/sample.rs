//! Reference problem `y' = sin(t)^2 * y`, `y(0) = 2`, solved with every
//! built-in tableau and collected into the viewer's input table.

use crate::solver::{RungeKutta, SolverError, Tableau};
use log::{debug, info};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub const T0: f64 = 0.0;
pub const X0: f64 = 2.0;
pub const DT: f64 = 0.5;
pub const END: f64 = 5.0;

pub fn rhs(t: f64, x: &[f64], dxdt: &mut [f64]) {
    dxdt[0] = t.sin() * t.sin() * x[0];
}

/// Closed form of the reference problem.
pub fn exact(t: f64) -> f64 {
    X0 * (t / 2.0 - (2.0 * t).sin() / 4.0).exp()
}

/// Number of recorded samples, start value included.
pub fn sample_count() -> usize {
    (END / DT) as usize + 1
}

/// Integrate with one tableau, recording the state before every step.
pub fn integrate(tableau: Tableau) -> Result<(Vec<f64>, Vec<f64>), SolverError> {
    let runs = sample_count();
    let mut rk = RungeKutta::new(tableau, 1, rhs)?;
    rk.set_state(&[X0], T0)?;

    let mut times = Vec::with_capacity(runs);
    let mut values = Vec::with_capacity(runs);
    for _ in 0..runs {
        times.push(rk.time());
        values.push(rk.state()[0]);
        rk.step(DT);
    }

    debug!(
        "{}: y({}) = {}",
        rk.tableau().name,
        times.last().copied().unwrap_or(T0),
        values.last().copied().unwrap_or(X0)
    );
    Ok((times, values))
}

/// Table with header `t` followed by one column per method.
pub fn reference_frame() -> Result<DataFrame, SolverError> {
    let mut columns = Vec::new();

    for tableau in Tableau::all() {
        let name = tableau.name;
        let (times, values) = integrate(tableau)?;
        if columns.is_empty() {
            columns.push(Column::new("t".into(), times));
        }
        columns.push(Column::new(name.into(), values));
    }

    Ok(DataFrame::new(columns)?)
}

/// Write the reference table as comma separated text with a header row.
pub fn write_csv(path: impl AsRef<Path>) -> Result<DataFrame, SolverError> {
    let path = path.as_ref();
    let mut df = reference_frame()?;

    let mut file = File::create(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)?;

    info!(
        "Wrote {}: {} rows, {} columns",
        path.display(),
        df.height(),
        df.width()
    );
    Ok(df)
}
