mod simulate;

use crate::config::{C, F};
use ndarray::Array1;

/// max |a - b| по элементам
pub(crate) fn max_diff(a: &Array1<F>, b: &Array1<F>) -> F {
    a.iter()
        .zip(b.iter())
        .fold(0., |acc: F, (x, y)| acc.max((x - y).abs()))
}

pub(crate) fn max_diff_c(a: &Array1<C>, b: &Array1<C>) -> F {
    a.iter()
        .zip(b.iter())
        .fold(0., |acc: F, (x, y)| acc.max((x - y).norm()))
}
