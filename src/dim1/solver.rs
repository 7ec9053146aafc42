use super::fft_maker::FftMaker1D;
use super::operators::Operators1D;
use super::state::RunState;
use crate::config::C;
use crate::print_and_log;
use crate::traits::etdrk4::{Correction, TimeStepper};
use ndarray::prelude::*;
use ndarray::Zip;

pub use crate::common::run_status::RunStatus;

/// Рабочие массивы ETDRK4: преобразование Фурье и промежуточные стадии
///
/// Живут столько же, сколько решатель, и пересоздаются только при смене N.
pub struct Etdrk4Workspace {
    pub fft_maker: FftMaker1D,
    nv: Array1<C>,
    na: Array1<C>,
    nb: Array1<C>,
    nc: Array1<C>,
    a: Array1<C>,
    b: Array1<C>,
    c: Array1<C>,
    /// кандидат на следующий шаг
    next: Array1<C>,
}

impl Etdrk4Workspace {
    pub fn new(n: usize) -> Self {
        Self {
            fft_maker: FftMaker1D::new(n),
            nv: Array::zeros(n),
            na: Array::zeros(n),
            nb: Array::zeros(n),
            nc: Array::zeros(n),
            a: Array::zeros(n),
            b: Array::zeros(n),
            c: Array::zeros(n),
            next: Array::zeros(n),
        }
    }

    pub fn len(&self) -> usize {
        self.nv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nv.is_empty()
    }
}

/// Интегратор ETDRK4 для одномерного уравнения Курамото–Сивашинского
///
/// Операторы только читаются, стадии пишутся в заранее выделенные
/// массивы [`Etdrk4Workspace`].
pub struct Etdrk4Solver1D<'a> {
    ops: &'a Operators1D,
    work: &'a mut Etdrk4Workspace,
}

impl<'a> Etdrk4Solver1D<'a> {
    pub fn new(ops: &'a Operators1D, work: &'a mut Etdrk4Workspace) -> Self {
        assert_eq!(ops.n(), work.len(), "workspace does not match the grid");
        Self { ops, work }
    }

    /// Один шаг на месте: v <- v(t + dt), без проверки конечности
    pub fn advance(&mut self, v: &mut Array1<C>) {
        let mut next = std::mem::replace(&mut self.work.next, Array1::zeros(0));
        self.time_step_evol(v, &mut next);
        std::mem::swap(v, &mut next);
        self.work.next = next;
    }
}

/// Реализация эволюции на временной шаг методом ETDRK4
impl TimeStepper for Etdrk4Solver1D<'_> {
    type State = RunState;

    fn time_step_evol(&mut self, v: &Array1<C>, out: &mut Array1<C>) {
        let co = &self.ops.etdrk4;
        let w = &mut *self.work;

        w.fft_maker.square_nonlinearity(v, &co.g, &mut w.nv);
        // a = E2 v + Q Nv
        Zip::from(&mut w.a)
            .and(&co.e2)
            .and(v)
            .and(&co.q)
            .and(&w.nv)
            .for_each(|a, &e2, &v, &q, &nv| *a = e2 * v + q * nv);
        w.fft_maker.square_nonlinearity(&w.a, &co.g, &mut w.na);
        // b = E2 v + Q Na
        Zip::from(&mut w.b)
            .and(&co.e2)
            .and(v)
            .and(&co.q)
            .and(&w.na)
            .for_each(|b, &e2, &v, &q, &na| *b = e2 * v + q * na);
        w.fft_maker.square_nonlinearity(&w.b, &co.g, &mut w.nb);
        // c = E2 a + Q (2 Nb - Nv)
        Zip::from(&mut w.c)
            .and(&co.e2)
            .and(&w.a)
            .and(&co.q)
            .and(&w.nb)
            .and(&w.nv)
            .for_each(|c, &e2, &a, &q, &nb, &nv| *c = e2 * a + q * (2. * nb - nv));
        w.fft_maker.square_nonlinearity(&w.c, &co.g, &mut w.nc);

        // v' = E v + f1 Nv + 2 f2 (Na + Nb) + f3 Nc
        Zip::from(&mut *out)
            .and(&co.e)
            .and(v)
            .and(&co.f1)
            .and(&w.nv)
            .for_each(|out, &e, &v, &f1, &nv| *out = e * v + nv * f1);
        Zip::from(&mut *out)
            .and(&co.f2)
            .and(&w.na)
            .and(&w.nb)
            .and(&co.f3)
            .and(&w.nc)
            .for_each(|out, &f2, &na, &nb, &f3, &nc| {
                *out = *out + 2. * (na + nb) * f2 + nc * f3;
            });
    }

    fn simulate<Corr: Correction>(
        &mut self,
        state: &mut RunState,
        nsteps: usize,
        iout: usize,
        correction: &mut Corr,
    ) -> RunStatus {
        let dt = self.ops.dt();
        let mut next = std::mem::replace(&mut self.work.next, Array1::zeros(0));

        for n in 1..=nsteps {
            self.time_step_evol(&state.v, &mut next);
            correction.apply(state.t + dt, &mut next);

            // переполнение или 0/0: шаг не принимаем, ряд обрезаем
            // до последнего записанного среза
            if !is_finite_state(&next) {
                self.work.next = next;
                let recorded = state.buffer.ioutnum();
                state.buffer.truncate(recorded);
                print_and_log!(
                    "diverged at step {} (t = {}), keeping {} recorded samples",
                    state.stepnum + 1,
                    state.t + dt,
                    recorded
                );
                return RunStatus::Diverged {
                    step: state.stepnum + 1,
                    t: state.t,
                    recorded,
                };
            }

            std::mem::swap(&mut state.v, &mut next);
            state.stepnum += 1;
            state.t += dt;

            if iout > 0 && n % iout == 0 {
                if let Err(e) = state.buffer.record(&state.v, state.t) {
                    panic!("output accounting is out of sync with nsteps/iout: {e}");
                }
            }
        }

        self.work.next = next;
        state.buffer.finalize();
        RunStatus::Completed {
            steps: nsteps,
            t: state.t,
            recorded: state.buffer.ioutnum(),
        }
    }
}

/// Конечны ли все компоненты (переполнение дает inf, 0/0 и inf - inf -- NaN)
pub fn is_finite_state(v: &Array1<C>) -> bool {
    v.iter().all(|c| c.re.is_finite() && c.im.is_finite())
}
