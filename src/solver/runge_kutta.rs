//! Explicit Runge-Kutta stepper for `dx/dt = f(t, x)`.

use crate::solver::{SolverError, Tableau};

/// Integrates a system of dimension `dim` with a fixed tableau.
///
/// `f(t, x, dxdt)` writes the derivative into `dxdt`. Stage buffers are
/// allocated once in [`RungeKutta::new`].
pub struct RungeKutta<F> {
    tableau: Tableau,
    f: F,
    t: f64,
    x: Vec<f64>,
    k: Vec<Vec<f64>>,
    stage_x: Vec<f64>,
}

impl<F> RungeKutta<F>
where
    F: Fn(f64, &[f64], &mut [f64]),
{
    pub fn new(tableau: Tableau, dim: usize, f: F) -> Result<Self, SolverError> {
        tableau.validate()?;
        let stages = tableau.stages();
        Ok(Self {
            tableau,
            f,
            t: 0.0,
            x: vec![0.0; dim],
            k: vec![vec![0.0; dim]; stages],
            stage_x: vec![0.0; dim],
        })
    }

    pub fn set_state(&mut self, x: &[f64], t: f64) -> Result<(), SolverError> {
        if x.len() != self.x.len() {
            return Err(SolverError::Dimension {
                name: self.tableau.name,
                expected: self.x.len(),
                found: x.len(),
            });
        }
        self.x.copy_from_slice(x);
        self.t = t;
        Ok(())
    }

    pub fn state(&self) -> &[f64] {
        &self.x
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Advance by one step of size `h`.
    pub fn step(&mut self, h: f64) {
        let stages = self.tableau.stages();

        for i in 0..stages {
            self.stage_x.copy_from_slice(&self.x);
            for j in 0..i {
                let a_ij = self.tableau.a(i, j);
                if a_ij == 0.0 {
                    continue;
                }
                for (xs, kj) in self.stage_x.iter_mut().zip(&self.k[j]) {
                    *xs += h * a_ij * kj;
                }
            }

            let t_eval = self.t + self.tableau.c[i] * h;
            (self.f)(t_eval, &self.stage_x, &mut self.k[i]);
        }

        for (n, x) in self.x.iter_mut().enumerate() {
            let incr: f64 = (0..stages).map(|i| self.tableau.b[i] * self.k[i][n]).sum();
            *x += h * incr;
        }
        self.t += h;
    }
}
