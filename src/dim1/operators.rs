use super::etdrk4::Etdrk4Coefficients;
use super::spectral_grid::SpectralGrid1D;
use crate::config::F;
use crate::parameters::KsParameters;
use crate::print_and_log;
use crate::error::KsError;

/// Производные от конфигурации величины: сетки, множитель l и
/// коэффициенты ETDRK4. Строятся один раз и дальше только читаются.
#[derive(Debug, Clone, PartialEq)]
pub struct Operators1D {
    pub grid: SpectralGrid1D,
    pub etdrk4: Etdrk4Coefficients,
}

impl Operators1D {
    pub fn new(l: F, n: usize, dt: F, coeffs: Option<[F; 5]>) -> Result<Self, KsError> {
        let grid = SpectralGrid1D::new(l, n, coeffs)?;
        let etdrk4 = Etdrk4Coefficients::new(dt, &grid.l, &grid.k.grid[0]);
        Ok(Self { grid, etdrk4 })
    }

    pub fn from_parameters(params: &KsParameters) -> Result<Self, KsError> {
        let ops = Self::new(params.l, params.n, params.t.dt, params.coeffs)?;
        print_and_log!(
            "operators: L = {}, N = {}, dt = {}, coeffs = {:?}",
            params.l,
            params.n,
            params.t.dt,
            params.coeffs
        );
        Ok(ops)
    }

    pub fn n(&self) -> usize {
        self.grid.n()
    }

    pub fn dt(&self) -> F {
        self.etdrk4.dt
    }
}
