use crate::config::{C, F};
use crate::error::KsError;
use ndarray::prelude::*;

/// Буфер временного ряда в фурье-пространстве
///
/// Срез 0 -- начальное условие, далее срезы дописываются по одному через
/// [`StateBuffer::record`], не более `nout` штук между сбросами. Буфер
/// растет по мере записи, по окончании расчета `nout` приводится к числу
/// записанных срезов ([`StateBuffer::finalize`]), так что всегда
/// `vv.len() == tt.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateBuffer {
    nout: usize,
    ioutnum: usize,
    vv: Vec<Array1<C>>,
    tt: Vec<F>,
}

impl StateBuffer {
    pub fn new(v0: &Array1<C>, nout: usize) -> Self {
        let mut buffer = Self {
            nout: 0,
            ioutnum: 0,
            vv: Vec::new(),
            tt: Vec::new(),
        };
        buffer.reset(v0, nout);
        buffer
    }

    /// Заново выделяет буфер на nout + 1 срезов, в срез 0 пишет v0 при t = 0
    pub fn reset(&mut self, v0: &Array1<C>, nout: usize) {
        self.nout = nout;
        self.ioutnum = 0;
        self.vv = Vec::with_capacity(nout + 1);
        self.tt = Vec::with_capacity(nout + 1);
        self.vv.push(v0.clone());
        self.tt.push(0.);
    }

    /// Дописывает срез, возвращает его номер
    pub fn record(&mut self, v: &Array1<C>, t: F) -> Result<usize, KsError> {
        if self.ioutnum >= self.nout {
            return Err(KsError::BufferBounds { nout: self.nout });
        }
        self.ioutnum += 1;
        self.vv.push(v.clone());
        self.tt.push(t);
        Ok(self.ioutnum)
    }

    /// Добавляет места под extra срезов (продолжение расчета без сброса)
    pub fn extend(&mut self, extra: usize) {
        self.nout += extra;
        self.vv.reserve(extra);
        self.tt.reserve(extra);
    }

    /// Обрезает ряд до срезов 0..=at; только уменьшает
    pub fn truncate(&mut self, at: usize) {
        let at = at.min(self.ioutnum);
        self.vv.truncate(at + 1);
        self.tt.truncate(at + 1);
        self.ioutnum = at;
        self.nout = at;
    }

    /// Приводит nout к числу записанных срезов
    pub fn finalize(&mut self) {
        self.nout = self.ioutnum;
    }

    pub fn nout(&self) -> usize {
        self.nout
    }

    pub fn ioutnum(&self) -> usize {
        self.ioutnum
    }

    /// число хранимых срезов вместе с начальным условием
    pub fn len(&self) -> usize {
        self.tt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tt.is_empty()
    }

    pub fn tt(&self) -> &[F] {
        &self.tt
    }

    pub fn rows(&self) -> &[Array1<C>] {
        &self.vv
    }

    /// Временной ряд в виде матрицы: строка -- срез
    pub fn vv(&self) -> Array2<C> {
        let n = self.vv.first().map_or(0, |v| v.len());
        Array2::from_shape_fn((self.vv.len(), n), |(i, j)| self.vv[i][j])
    }
}

/// Изменяемое состояние одного расчета
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    /// текущее решение в фурье-пространстве
    pub v: Array1<C>,
    pub t: F,
    pub stepnum: usize,
    pub buffer: StateBuffer,
}

impl RunState {
    pub fn new(v0: &Array1<C>, nout: usize) -> Self {
        Self {
            v: v0.clone(),
            t: 0.,
            stepnum: 0,
            buffer: StateBuffer::new(v0, nout),
        }
    }

    pub fn reset(&mut self, v0: &Array1<C>, nout: usize) {
        self.v = v0.clone();
        self.t = 0.;
        self.stepnum = 0;
        self.buffer.reset(v0, nout);
    }
}
