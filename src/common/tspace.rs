use crate::config::F;
use crate::error::KsError;
use ndarray::prelude::*;

/// Длительность расчета: число шагов или конечное время
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Duration {
    Steps(usize),
    EndTime(F),
}

/// Структура для временной сетки
#[derive(Debug, Clone, PartialEq)]
pub struct Tspace {
    pub dt: F,
    pub nsteps: usize,
    /// шаг записи срезов (0 -- срезы не пишутся)
    pub iout: usize,
}

impl Tspace {
    pub fn new(dt: F, duration: Duration, iout: usize) -> Result<Self, KsError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(KsError::invalid("dt", dt));
        }
        let nsteps = match duration {
            Duration::Steps(n) => n,
            Duration::EndTime(tend) => {
                if !(tend.is_finite() && tend > 0.0) {
                    return Err(KsError::invalid("tend", tend));
                }
                (tend / dt).floor() as usize
            }
        };
        let tspace = Self { dt, nsteps, iout };
        tspace.validate()?;
        Ok(tspace)
    }

    /// Проверка для значений, собранных в обход [`Tspace::new`]
    pub fn validate(&self) -> Result<(), KsError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(KsError::invalid("dt", self.dt));
        }
        if self.nsteps == 0 {
            return Err(KsError::invalid("nsteps", self.nsteps));
        }
        Ok(())
    }

    /// число срезов без учета начального условия
    pub fn nout(&self) -> usize {
        nout(self.nsteps, self.iout)
    }

    /// конечное время расчета
    pub fn tend(&self) -> F {
        self.dt * self.nsteps as F
    }

    /// возвращает ожидаемую сетку времен срезов (включая t = 0)
    pub fn sample_grid(&self) -> Array1<F> {
        let nout = self.nout();
        Array::from_shape_fn(nout + 1, |i| (i * self.iout) as F * self.dt)
    }
}

/// nout = nsteps / iout; при iout = 0 срезы не пишутся
pub(crate) fn nout(nsteps: usize, iout: usize) -> usize {
    if iout == 0 {
        0
    } else {
        nsteps / iout
    }
}
