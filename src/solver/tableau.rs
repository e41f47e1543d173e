//! Butcher tableaus for explicit Runge-Kutta methods.

use crate::solver::SolverError;

const SUM_EPS: f64 = 1e-8;

/// Coefficients `(A, b, c)` of an explicit method with `s` stages.
///
/// `a` is stored row major as `s * s` values; only the strictly lower
/// triangle is used.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub name: &'static str,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
}

impl Tableau {
    pub fn euler() -> Self {
        Self {
            name: "Explicit Euler",
            a: vec![0.0],
            b: vec![1.0],
            c: vec![0.0],
        }
    }

    /// Heun's method.
    pub fn heun() -> Self {
        Self {
            name: "2nd order Runge-Kutta",
            a: vec![
                0.0, 0.0, //
                1.0, 0.0,
            ],
            b: vec![0.5, 0.5],
            c: vec![0.0, 1.0],
        }
    }

    /// Classic fourth order method.
    pub fn rk4() -> Self {
        Self {
            name: "4th order Runge-Kutta",
            a: vec![
                0.0, 0.0, 0.0, 0.0, //
                0.5, 0.0, 0.0, 0.0, //
                0.0, 0.5, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0,
            ],
            b: vec![1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
            c: vec![0.0, 0.5, 0.5, 1.0],
        }
    }

    /// Euler, Heun and RK4, in output column order.
    pub fn all() -> [Self; 3] {
        [Self::euler(), Self::heun(), Self::rk4()]
    }

    pub fn stages(&self) -> usize {
        self.b.len()
    }

    pub fn a(&self, i: usize, j: usize) -> f64 {
        self.a[i * self.stages() + j]
    }

    /// Shape checks plus the consistency condition `sum(b) = 1`.
    pub fn validate(&self) -> Result<(), SolverError> {
        let s = self.stages();
        if s == 0 || self.c.len() != s || self.a.len() != s * s {
            return Err(SolverError::Dimension {
                name: self.name,
                expected: s * s,
                found: self.a.len(),
            });
        }

        let sum: f64 = self.b.iter().sum();
        if (sum - 1.0).abs() >= SUM_EPS {
            return Err(SolverError::Inconsistent {
                name: self.name,
                sum,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tableaus_are_consistent() {
        for tableau in Tableau::all() {
            tableau.validate().unwrap();
        }
    }

    #[test]
    fn stage_counts() {
        let stages: Vec<usize> = Tableau::all().iter().map(Tableau::stages).collect();
        assert_eq!(stages, vec![1, 2, 4]);
    }

    #[test]
    fn rk4_lower_triangle() {
        let rk4 = Tableau::rk4();
        assert_eq!(rk4.a(1, 0), 0.5);
        assert_eq!(rk4.a(2, 1), 0.5);
        assert_eq!(rk4.a(3, 2), 1.0);
        assert_eq!(rk4.a(3, 0), 0.0);
    }

    #[test]
    fn weights_must_sum_to_one() {
        let mut bad = Tableau::heun();
        bad.b = vec![0.5, 0.4];
        assert!(matches!(
            bad.validate(),
            Err(SolverError::Inconsistent { name: "2nd order Runge-Kutta", .. })
        ));
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let mut bad = Tableau::rk4();
        bad.a.pop();
        assert!(matches!(bad.validate(), Err(SolverError::Dimension { .. })));

        let mut bad = Tableau::heun();
        bad.c.push(1.0);
        assert!(matches!(bad.validate(), Err(SolverError::Dimension { .. })));
    }
}
