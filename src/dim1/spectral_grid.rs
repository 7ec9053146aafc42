use super::space::{Kspace1D, Xspace1D};
use crate::config::{C, F, I};
use crate::error::KsError;
use ndarray::prelude::*;

/// Сетки и фурье-множитель линейного оператора
///
/// Уравнение u_t + u u_x + u_xx + u_xxxx = 0 в фурье-пространстве имеет
/// линейную часть l(k) = k^2 - k^4. При заданных коэффициентах c[0..5]
/// используется обобщенный оператор
///
/// l(k) = -c0 - c1 ik + (1 + c2) k^2 + c3 ik^3 - (1 + c4) k^4,
///
/// при c = 0 совпадающий с каноническим.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralGrid1D {
    pub x: Xspace1D,
    pub k: Kspace1D,
    pub l: Array1<C>,
    pub coeffs: Option<[F; 5]>,
}

impl SpectralGrid1D {
    pub fn new(l: F, n: usize, coeffs: Option<[F; 5]>) -> Result<Self, KsError> {
        if let Some(c) = coeffs {
            if let Some(bad) = c.iter().find(|ci| !ci.is_finite()) {
                return Err(KsError::invalid("coeffs", bad));
            }
        }
        let x = Xspace1D::new(l, n)?;
        let k = Kspace1D::init(&x);
        let l = linear_multiplier(&k.grid[0], coeffs);
        Ok(Self { x, k, l, coeffs })
    }

    pub fn n(&self) -> usize {
        self.x.n[0]
    }
}

/// Фурье-множители линейного члена Lu
pub fn linear_multiplier(k: &Array1<F>, coeffs: Option<[F; 5]>) -> Array1<C> {
    match coeffs {
        // каноническое уравнение
        None => k.mapv(|k| C::from(k.powi(2) - k.powi(4))),
        // измененные коэффициенты
        Some(c) => k.mapv(|k| {
            -c[0] - c[1] * I * k + (1. + c[2]) * k.powi(2) + c[3] * I * k.powi(3)
                - (1. + c[4]) * k.powi(4)
        }),
    }
}
