use crate::common::tspace::{Duration, Tspace};
use crate::config::F;
use crate::error::KsError;

/// Параметры расчета
///
/// Задача: u_t + u u_x + u_xx + u_xxxx = 0 на x in [0, 2 pi L) с
/// периодическими граничными условиями. Изменение `l`, `n`, `t.dt` или
/// `coeffs` требует пересчета операторов, изменение `t.nsteps` и
/// `t.iout` -- только размера буферов.
#[derive(Debug, Clone, PartialEq)]
pub struct KsParameters {
    /// масштаб области
    pub l: F,
    /// число точек сетки (лучше степень двойки)
    pub n: usize,
    pub t: Tspace,
    /// коэффициенты обобщенного линейного оператора
    pub coeffs: Option<[F; 5]>,
}

impl KsParameters {
    pub fn new(
        l: F,
        n: usize,
        dt: F,
        duration: Duration,
        iout: usize,
        coeffs: Option<[F; 5]>,
    ) -> Result<Self, KsError> {
        let t = Tspace::new(dt, duration, iout)?;
        let params = Self { l, n, t, coeffs };
        params.validate()?;
        Ok(params)
    }

    /// Проверяет все поля: поля публичные, и параметры можно собрать
    /// литералом, минуя [`KsParameters::new`]
    pub fn validate(&self) -> Result<(), KsError> {
        if !(self.l.is_finite() && self.l > 0.0) {
            return Err(KsError::invalid("L", self.l));
        }
        if self.n == 0 {
            return Err(KsError::invalid("N", self.n));
        }
        if let Some(bad) = self.coeffs.iter().flatten().find(|c| !c.is_finite()) {
            return Err(KsError::invalid("coeffs", bad));
        }
        self.t.validate()
    }

    pub fn dx(&self) -> F {
        2. * crate::config::PI * self.l / self.n as F
    }
}

/// Постановка из Kassam, Trefethen: L = 16, N = 128, dt = 1/4, t = 0..150
impl Default for KsParameters {
    fn default() -> Self {
        Self {
            l: 16.,
            n: 128,
            t: Tspace {
                dt: 0.25,
                nsteps: 600,
                iout: 1,
            },
            coeffs: None,
        }
    }
}
