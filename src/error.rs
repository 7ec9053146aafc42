//! Ошибки решателя Курамото–Сивашинского.
//!
//! Расходимость численного решения ошибкой не считается: она возвращается
//! как [`RunStatus::Diverged`](crate::dim1::solver::RunStatus).

use ndarray_npy::WriteNpyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KsError {
    /// Недопустимый параметр конфигурации (L, N, dt, nsteps, ...)
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: String },

    /// Длина переданного вектора не совпадает с числом точек сетки
    #[error("wrong {what} size: expected {expected}, found {found}")]
    InvalidSize {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Попытка записать больше nout срезов между сбросами буфера
    #[error("time series buffer overflow: all {nout} output slots are already filled")]
    BufferBounds { nout: usize },

    #[error(transparent)]
    Npy(#[from] WriteNpyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KsError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}
