use crate::config::{C, F};
use crate::traits::fft_maker::FftMaker;
use ndarray::prelude::*;
use ndarray::Zip;
use ndrustfft::{ndfft_par, ndifft_par, FftHandler};

pub struct FftMaker1D {
    pub handler: FftHandler<F>,
    pub temp: Array1<C>,
}

impl FftMaker1D {
    pub const DIM: usize = 1;

    pub fn new(n: usize) -> Self {
        let handler = FftHandler::new(n);
        let temp: Array1<C> = Array::zeros(n);
        Self { handler, temp }
    }

    pub fn len(&self) -> usize {
        self.temp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temp.is_empty()
    }

    /// Нелинейный член в фурье-пространстве: out = g * fft(Re(ifft(v))^2)
    ///
    /// Мнимая часть ifft(v) отбрасывается, чтобы шум в ней не накапливался.
    pub fn square_nonlinearity(&mut self, v: &Array1<C>, g: &Array1<C>, out: &mut Array1<C>) {
        ndifft_par(v, &mut self.temp, &mut self.handler, 0);
        self.temp.mapv_inplace(|u| C::new(u.re * u.re, 0.));
        ndfft_par(&self.temp, out, &mut self.handler, 0);
        Zip::from(out).and(g).for_each(|out_elem, g_elem| {
            *out_elem *= *g_elem;
        });
    }

    /// Вещественная часть обратного преобразования
    pub fn to_physical(&mut self, v: &Array1<C>) -> Array1<F> {
        ndifft_par(v, &mut self.temp, &mut self.handler, 0);
        self.temp.mapv(|u| u.re)
    }

    /// Прямое преобразование вещественного поля
    pub fn to_spectral(&mut self, u: &Array1<F>) -> Array1<C> {
        let mut v = u.mapv(C::from);
        self.fft(&mut v);
        v
    }
}

impl FftMaker<Ix1> for FftMaker1D {
    fn fft(&mut self, arr: &mut Array1<C>) {
        ndfft_par(arr, &mut self.temp, &mut self.handler, 0);
        arr.assign(&self.temp);
    }

    fn ifft(&mut self, arr: &mut Array1<C>) {
        ndifft_par(arr, &mut self.temp, &mut self.handler, 0);
        arr.assign(&self.temp);
    }
}
