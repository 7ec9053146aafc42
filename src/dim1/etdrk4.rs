use crate::config::{C, CONTOUR_POINTS, F, I, PI};
use itertools::multizip;
use ndarray::prelude::*;
use rayon::prelude::*;

/// Скалярные коэффициенты схемы ETDRK4 (Kassam, Trefethen, SISC 2005)
///
/// Для каждой моды j уравнение dv/dt = l v + N(v) продвигается на шаг dt
/// с точным учетом линейной части. Функции вида (e^z - 1)/z при z = dt l
/// вычисляются как средние по контуру z + r_m, r_m = exp(i pi (m - 1/2) / M),
/// m = 1..M, чтобы не терять точность при |z| -> 0.
///
/// Все массивы пересчитываются только вместе, через [`Etdrk4Coefficients::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Etdrk4Coefficients {
    pub dt: F,
    /// exp(dt l)
    pub e: Array1<C>,
    /// exp(dt l / 2)
    pub e2: Array1<C>,
    pub q: Array1<F>,
    pub f1: Array1<F>,
    pub f2: Array1<F>,
    pub f3: Array1<F>,
    /// -i k / 2: множитель для (u^2)_x / 2 в фурье-пространстве
    pub g: Array1<C>,
}

impl Etdrk4Coefficients {
    pub fn new(dt: F, l: &Array1<C>, k: &Array1<F>) -> Self {
        assert_eq!(l.len(), k.len(), "l and k must have the same length");
        let n = l.len();
        let e = l.mapv(|l| (dt * l).exp());
        let e2 = l.mapv(|l| (dt * l / 2.).exp());
        let g = k.mapv(|k| -0.5 * I * k);

        let r = contour_points();
        let mut q: Array1<F> = Array::zeros(n);
        let mut f1: Array1<F> = Array::zeros(n);
        let mut f2: Array1<F> = Array::zeros(n);
        let mut f3: Array1<F> = Array::zeros(n);

        // моды независимы, порядок обхода на результат не влияет
        multizip((q.iter_mut(), f1.iter_mut(), f2.iter_mut(), f3.iter_mut(), l.iter()))
            .par_bridge()
            .for_each(|(q_elem, f1_elem, f2_elem, f3_elem, l_elem)| {
                let [q_mean, f1_mean, f2_mean, f3_mean] = contour_means(dt * *l_elem, &r);
                *q_elem = dt * q_mean;
                *f1_elem = dt * f1_mean;
                *f2_elem = dt * f2_mean;
                *f3_elem = dt * f3_mean;
            });

        Self {
            dt,
            e,
            e2,
            q,
            f1,
            f2,
            f3,
            g,
        }
    }

    pub fn len(&self) -> usize {
        self.e.len()
    }

    pub fn is_empty(&self) -> bool {
        self.e.is_empty()
    }
}

/// Точки на верхней полуокружности единичного радиуса
pub fn contour_points() -> [C; CONTOUR_POINTS] {
    let m = CONTOUR_POINTS as F;
    std::array::from_fn(|i| (I * PI * (i as F + 0.5) / m).exp())
}

/// Действительные части контурных средних для Q, f1, f2, f3 (без множителя dt)
///
/// Q:  (e^{w/2} - 1) / w
/// f1: (-4 - w + e^w (4 - 3w + w^2)) / w^3
/// f2: (2 + w + e^w (-2 + w)) / w^3
/// f3: (-4 - 3w - w^2 + e^w (4 - w)) / w^3
///
/// где w = z + r_m.
pub fn contour_means(z: C, r: &[C]) -> [F; 4] {
    let mut sums = [C::new(0., 0.); 4];
    for r_m in r {
        let w = z + r_m;
        let ew = w.exp();
        let w2 = w * w;
        let w3 = w2 * w;
        sums[0] += ((w / 2.).exp() - 1.) / w;
        sums[1] += (-4. - w + ew * (4. - 3. * w + w2)) / w3;
        sums[2] += (2. + w + ew * (-2. + w)) / w3;
        sums[3] += (-4. - 3. * w - w2 + ew * (4. - w)) / w3;
    }
    let m = r.len() as F;
    sums.map(|s| (s / m).re)
}
