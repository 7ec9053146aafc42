use crate::config::{F, PI};
use crate::error::KsError;
use crate::macros::check_path;
use crate::traits::space::Space;
use ndarray::prelude::*;
use ndarray_npy::WriteNpyExt;
use std::fs::File;
use std::io::BufWriter;

/// Периодическая сетка в физическом пространстве: x_j = 2 pi L j / N
#[derive(Debug, Clone, PartialEq)]
pub struct Xspace1D {
    /// масштаб области: период равен 2 pi L
    pub l: F,
    pub dx: [F; 1],
    pub n: [usize; 1],
    pub grid: [Array1<F>; 1],
}

impl Xspace1D {
    pub const DIM: usize = 1;
    pub const PREFIX: &'static str = "x";

    pub fn new(l: F, n: usize) -> Result<Self, KsError> {
        if !(l.is_finite() && l > 0.0) {
            return Err(KsError::invalid("L", l));
        }
        if n == 0 {
            return Err(KsError::invalid("N", n));
        }
        let dx = 2. * PI * l / n as F;
        // linspace тут не годится: последняя точка 2 pi L не входит в сетку
        let grid = Array::from_shape_fn(n, |j| 2. * PI * l * j as F / n as F);
        Ok(Self {
            l,
            dx: [dx],
            n: [n],
            grid: [grid],
        })
    }

    /// длина периода 2 pi L
    pub fn period(&self) -> F {
        2. * PI * self.l
    }
}

impl Space<1> for Xspace1D {
    fn point(&self, index: [usize; 1]) -> [F; 1] {
        [self.grid[0][index[0]]]
    }

    fn shape(&self) -> [usize; 1] {
        self.n
    }

    fn save_as_npy(&self, dir_path: &str) -> Result<(), KsError> {
        let x_path = format!("{dir_path}/{}0.npy", Self::PREFIX);
        check_path!(&x_path);
        let writer = BufWriter::new(File::create(x_path)?);
        self.grid[0].write_npy(writer)?;
        Ok(())
    }
}

/// Волновые числа в порядке выхода FFT:
/// k = [0, 1, ..., N/2-1, 0, -N/2+1, ..., -1] / L
///
/// Для четного N найквистовская гармоника N/2 обнулена: у нечетных по k
/// множителей (производная в нелинейности) она не имеет знака.
#[derive(Debug, Clone, PartialEq)]
pub struct Kspace1D {
    pub n: [usize; 1],
    pub grid: [Array1<F>; 1],
}

impl Kspace1D {
    pub const DIM: usize = 1;
    pub const PREFIX: &'static str = "k";

    pub fn init(x: &Xspace1D) -> Self {
        let n = x.n[0];
        let grid = Array::from_shape_fn(n, |j| {
            let m: isize = if 2 * j < n {
                j as isize
            } else if 2 * j == n {
                0
            } else {
                j as isize - n as isize
            };
            m as F / x.l
        });
        Self {
            n: [n],
            grid: [grid],
        }
    }
}

impl Space<1> for Kspace1D {
    fn point(&self, index: [usize; 1]) -> [F; 1] {
        [self.grid[0][index[0]]]
    }

    fn shape(&self) -> [usize; 1] {
        self.n
    }

    fn save_as_npy(&self, dir_path: &str) -> Result<(), KsError> {
        let k_path = format!("{dir_path}/{}0.npy", Self::PREFIX);
        check_path!(&k_path);
        let writer = BufWriter::new(File::create(k_path)?);
        self.grid[0].write_npy(writer)?;
        Ok(())
    }
}
