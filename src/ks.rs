//! Решатель одномерного уравнения Курамото–Сивашинского
//!
//! u_t + u u_x + u_xx + u_xxxx = 0, x in [0, 2 pi L), u(x + 2 pi L, t) = u(x, t).
//!
//! Энергия поступает на длинных волнах через u_xx (неустойчивая диффузия),
//! нелинейность u u_x переносит ее в короткие волны, где она диссипирует
//! за счет u_xxxx.
//!
//! Пространство: фурье-спектральный метод, время: ETDRK4
//! (AK Kassam, LN Trefethen, SISC 2005).

use crate::common::tspace::nout;
use crate::config::{C, F};
use crate::dim1::{
    initial_condition::{InitialCondition, InitialState},
    operators::Operators1D,
    solver::{Etdrk4Solver1D, Etdrk4Workspace, RunStatus},
    space_time::SpaceTime,
    state::RunState,
};
use crate::error::KsError;
use crate::parameters::KsParameters;
use crate::traits::etdrk4::{Correction, TimeStepper};
use ndarray::prelude::*;

pub struct KuramotoSivashinsky {
    params: KsParameters,
    ops: Operators1D,
    work: Etdrk4Workspace,
    ic: InitialCondition,
    initial: InitialState,
    state: RunState,
}

impl KuramotoSivashinsky {
    /// Начальное условие -- малый случайный шум
    pub fn new(params: KsParameters) -> Result<Self, KsError> {
        Self::with_initial_condition(params, InitialCondition::noise())
    }

    pub fn with_initial_condition(
        params: KsParameters,
        ic: InitialCondition,
    ) -> Result<Self, KsError> {
        params.validate()?;
        let ops = Operators1D::from_parameters(&params)?;
        let mut work = Etdrk4Workspace::new(ops.n());
        let initial = InitialState::prepare(ic.clone(), &ops.grid.x, &mut work.fft_maker)?;
        let state = RunState::new(&initial.v0, params.t.nout());
        Ok(Self {
            params,
            ops,
            work,
            ic,
            initial,
            state,
        })
    }

    /// Задает начальное условие и сбрасывает расчет.
    /// При ошибке размера состояние не меняется.
    pub fn set_initial_condition(&mut self, ic: InitialCondition) -> Result<(), KsError> {
        self.initial = InitialState::prepare(ic.clone(), &self.ops.grid.x, &mut self.work.fft_maker)?;
        self.ic = ic;
        self.state.reset(&self.initial.v0, self.params.t.nout());
        Ok(())
    }

    /// Меняет коэффициенты линейного оператора (None -- каноническое уравнение)
    pub fn set_coefficients(&mut self, coeffs: Option<[F; 5]>) -> Result<(), KsError> {
        let params = KsParameters {
            coeffs,
            ..self.params.clone()
        };
        self.reconfigure(params)
    }

    /// Новая конфигурация: операторы пересчитываются, если изменились
    /// L, N, dt или коэффициенты; расчет сбрасывается к начальному условию.
    ///
    /// Шаблонные начальные условия строятся заново на новой сетке, заданный
    /// вектор должен подходить по длине к новому N.
    pub fn reconfigure(&mut self, params: KsParameters) -> Result<(), KsError> {
        params.validate()?;
        let grid_changed = params.l != self.params.l || params.n != self.params.n;
        let ops_changed =
            grid_changed || params.t.dt != self.params.t.dt || params.coeffs != self.params.coeffs;

        if ops_changed {
            let ops = Operators1D::from_parameters(&params)?;
            let initial = if grid_changed {
                let mut work = Etdrk4Workspace::new(ops.n());
                let initial = InitialState::prepare(self.ic.clone(), &ops.grid.x, &mut work.fft_maker)?;
                self.work = work;
                initial
            } else {
                self.initial.clone()
            };
            self.ops = ops;
            self.initial = initial;
        }
        self.params = params;
        self.state.reset(&self.initial.v0, self.params.t.nout());
        Ok(())
    }

    /// Расчет с текущими nsteps и iout, продолжая с текущего состояния
    pub fn run<Corr: Correction>(&mut self, correction: Corr) -> Result<RunStatus, KsError> {
        self.simulate(None, None, false, correction)
    }

    /// Расчет на nsteps шагов с записью каждого iout-го среза
    ///
    /// `nsteps` и `iout` действуют только на этот расчет, сохраненные
    /// параметры не меняются. `restart` сбрасывает решение к начальному
    /// условию и заново размечает буфер под nout = nsteps / iout; без него
    /// расчет продолжается с текущего момента и срезы дописываются в конец
    /// ряда.
    pub fn simulate<Corr: Correction>(
        &mut self,
        nsteps: Option<usize>,
        iout: Option<usize>,
        restart: bool,
        mut correction: Corr,
    ) -> Result<RunStatus, KsError> {
        let n = self.ops.n();
        if let Some(found) = correction.expected_len() {
            if found != n {
                return Err(KsError::InvalidSize {
                    what: "correction",
                    expected: n,
                    found,
                });
            }
        }
        let nsteps = nsteps.unwrap_or(self.params.t.nsteps);
        let iout = iout.unwrap_or(self.params.t.iout);

        let needed = nout(nsteps, iout);
        if restart {
            self.state.reset(&self.initial.v0, needed);
        } else {
            let buffer = &mut self.state.buffer;
            let free = buffer.nout() - buffer.ioutnum();
            if needed > free {
                buffer.extend(needed - free);
            }
        }

        let mut solver = Etdrk4Solver1D::new(&self.ops, &mut self.work);
        Ok(solver.simulate(&mut self.state, nsteps, iout, &mut correction))
    }

    /// Один шаг ETDRK4 без записи в ряд
    pub fn step(&mut self) {
        Etdrk4Solver1D::new(&self.ops, &mut self.work).advance(&mut self.state.v);
        self.state.stepnum += 1;
        self.state.t += self.ops.dt();
    }

    /// Записанный ряд в физическом пространстве
    pub fn physical_time_series(&self) -> SpaceTime {
        SpaceTime::from_buffer(&self.state.buffer, &self.ops.grid.x.grid[0])
    }

    /// Текущее решение в физическом пространстве
    pub fn u(&mut self) -> Array1<F> {
        self.work.fft_maker.to_physical(&self.state.v)
    }

    pub fn params(&self) -> &KsParameters {
        &self.params
    }

    pub fn operators(&self) -> &Operators1D {
        &self.ops
    }

    pub fn workspace(&self) -> &Etdrk4Workspace {
        &self.work
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn initial_state(&self) -> &InitialState {
        &self.initial
    }

    pub fn v(&self) -> &Array1<C> {
        &self.state.v
    }

    pub fn t(&self) -> F {
        self.state.t
    }

    pub fn stepnum(&self) -> usize {
        self.state.stepnum
    }

    pub fn nout(&self) -> usize {
        self.state.buffer.nout()
    }

    pub fn ioutnum(&self) -> usize {
        self.state.buffer.ioutnum()
    }

    pub fn tt(&self) -> &[F] {
        self.state.buffer.tt()
    }

    pub fn vv(&self) -> Array2<C> {
        self.state.buffer.vv()
    }

    pub fn x(&self) -> &Array1<F> {
        &self.ops.grid.x.grid[0]
    }

    pub fn k(&self) -> &Array1<F> {
        &self.ops.grid.k.grid[0]
    }

    pub fn l(&self) -> &Array1<C> {
        &self.ops.grid.l
    }
}
