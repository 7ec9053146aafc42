use super::state::StateBuffer;
use crate::config::{C, F};
use crate::error::KsError;
use crate::macros::check_path;
use ndarray::prelude::*;
use ndarray_npy::WriteNpyExt;
use ndrustfft::{ndifft_par, FftHandler};
use std::fs::File;
use std::io::BufWriter;

/// Пространственно-временная картина решения в физическом пространстве
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceTime {
    /// времена срезов
    pub t: Array1<F>,
    pub x: Array1<F>,
    /// u[[i, j]] = u(t_i, x_j)
    pub u: Array2<F>,
}

impl SpaceTime {
    pub fn from_buffer(buffer: &StateBuffer, x: &Array1<F>) -> Self {
        Self {
            t: Array::from_vec(buffer.tt().to_vec()),
            x: x.clone(),
            u: fou2real(&buffer.vv()),
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Пары (t_i, u(t_i, x))
    pub fn iter(&self) -> impl Iterator<Item = (F, ArrayView1<'_, F>)> + '_ {
        self.t.iter().copied().zip(self.u.rows())
    }

    /// max |u| по всем срезам
    pub fn max_abs(&self) -> F {
        self.u.iter().fold(0., |acc: F, u| acc.max(u.abs()))
    }

    /// Сохраняет t, x и u в директорию в формате npy
    pub fn save_as_npy(&self, dir_path: &str) -> Result<(), KsError> {
        let t_path = format!("{dir_path}/t.npy");
        check_path!(&t_path);
        self.t.write_npy(BufWriter::new(File::create(t_path)?))?;
        self.x
            .write_npy(BufWriter::new(File::create(format!("{dir_path}/x.npy"))?))?;
        self.u
            .write_npy(BufWriter::new(File::create(format!("{dir_path}/u.npy"))?))?;
        Ok(())
    }
}

/// Перевод временного ряда из фурье- в физическое пространство:
/// обратное преобразование по каждой строке, мнимый остаток отбрасывается
pub fn fou2real(vv: &Array2<C>) -> Array2<F> {
    let (rows, n) = vv.dim();
    if rows == 0 || n == 0 {
        return Array2::zeros((rows, n));
    }
    let mut uu_c: Array2<C> = Array::zeros((rows, n));
    let mut handler = FftHandler::<F>::new(n);
    ndifft_par(vv, &mut uu_c, &mut handler, 1);
    uu_c.mapv(|u| u.re)
}

/// Сохраняет спектральный ряд (действительную и мнимую части) в формате npy
pub fn save_spectral_as_npy(vv: &Array2<C>, dir_path: &str) -> Result<(), KsError> {
    let re_path = format!("{dir_path}/v_re.npy");
    check_path!(&re_path);
    vv.mapv(|v| v.re)
        .write_npy(BufWriter::new(File::create(re_path)?))?;
    vv.mapv(|v| v.im)
        .write_npy(BufWriter::new(File::create(format!("{dir_path}/v_im.npy"))?))?;
    Ok(())
}
