use crate::common::run_status::RunStatus;
use crate::config::{C, F};
use ndarray::Array1;

/// Аддитивная поправка, добавляемая к решению после каждого шага
///
/// Цикл по времени параметризован типом поправки, поэтому для
/// [`NoCorrection`] проверка и сложение в цикле не генерируются вовсе.
pub trait Correction {
    /// v += поправка в момент t (после шага)
    fn apply(&mut self, t: F, v: &mut Array1<C>);

    /// Длина вектора поправки, если она фиксирована
    fn expected_len(&self) -> Option<usize> {
        None
    }
}

/// Расчет без поправки
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrection;

impl Correction for NoCorrection {
    #[inline(always)]
    fn apply(&mut self, _t: F, _v: &mut Array1<C>) {}
}

/// Постоянный вектор поправки в фурье-пространстве
impl Correction for Array1<C> {
    fn apply(&mut self, _t: F, v: &mut Array1<C>) {
        *v += &*self;
    }

    fn expected_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Correction for &Array1<C> {
    fn apply(&mut self, _t: F, v: &mut Array1<C>) {
        *v += *self;
    }

    fn expected_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// Поправка, заданная замыканием (например, внешняя модель замыкания)
pub struct CorrectionFn<G>(pub G);

impl<G> Correction for CorrectionFn<G>
where
    G: FnMut(F, &mut Array1<C>),
{
    fn apply(&mut self, t: F, v: &mut Array1<C>) {
        (self.0)(t, v)
    }
}

/// Трейт для интегратора по времени
pub trait TimeStepper {
    type State;

    /// Эволюция на шаг по времени: out = v(t + dt)
    fn time_step_evol(&mut self, v: &Array1<C>, out: &mut Array1<C>);

    /// nsteps шагов с записью каждого iout-го среза
    fn simulate<Corr: Correction>(
        &mut self,
        state: &mut Self::State,
        nsteps: usize,
        iout: usize,
        correction: &mut Corr,
    ) -> RunStatus;
}
