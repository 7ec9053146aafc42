use crate::config::C;
use ndarray::{Array, Dimension};

/// Трейт для дискретного преобразования Фурье
///
/// Прямое преобразование ненормированное, обратное нормировано на 1/N,
/// порядок гармоник [0, 1, ..., N/2 - 1, -N/2, ..., -1].
pub trait FftMaker<D: Dimension> {
    /// прямое преобразование фурье комплексного массива
    fn fft(&mut self, arr: &mut Array<C, D>);

    /// обратное преобразование фурье комплексного массива
    fn ifft(&mut self, arr: &mut Array<C, D>);
}
