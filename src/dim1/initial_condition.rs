use super::fft_maker::FftMaker1D;
use super::space::Xspace1D;
use crate::config::{C, F};
use crate::error::KsError;
use ndarray::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Начальное условие
#[derive(Debug, Clone, PartialEq)]
pub enum InitialCondition {
    /// u0 в физическом пространстве, длина N
    Physical(Array1<F>),
    /// v0 = fft(u0), длина N
    Spectral(Array1<C>),
    /// u0 = cos(x/L) (1 + sin(x/L)) из Kassam, Trefethen, SISC 2005
    KassamTrefethen,
    /// равномерный шум (rand - 0.5) * amplitude
    Noise { amplitude: F, seed: Option<u64> },
}

impl InitialCondition {
    pub const NOISE_AMPLITUDE: F = 0.01;

    pub fn noise() -> Self {
        Self::Noise {
            amplitude: Self::NOISE_AMPLITUDE,
            seed: None,
        }
    }
}

/// Начальное условие в обоих представлениях
#[derive(Debug, Clone, PartialEq)]
pub struct InitialState {
    pub u0: Array1<F>,
    pub v0: Array1<C>,
}

impl InitialState {
    /// Проверяет размер и переводит начальное условие в оба представления
    pub fn prepare(
        ic: InitialCondition,
        x: &Xspace1D,
        fft_maker: &mut FftMaker1D,
    ) -> Result<Self, KsError> {
        let n = x.n[0];
        let u0 = match ic {
            InitialCondition::Spectral(v0) => {
                check_size(v0.len(), n)?;
                let u0 = fft_maker.to_physical(&v0);
                return Ok(Self { u0, v0 });
            }
            InitialCondition::Physical(u0) => {
                check_size(u0.len(), n)?;
                u0
            }
            InitialCondition::KassamTrefethen => x.grid[0].mapv(|x_point| {
                let s = x_point / x.l;
                s.cos() * (1. + s.sin())
            }),
            InitialCondition::Noise { amplitude, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Array::from_shape_fn(n, |_| (rng.gen::<F>() - 0.5) * amplitude)
            }
        };
        let v0 = fft_maker.to_spectral(&u0);
        Ok(Self { u0, v0 })
    }
}

fn check_size(found: usize, expected: usize) -> Result<(), KsError> {
    if found != expected {
        return Err(KsError::InvalidSize {
            what: "initial condition",
            expected,
            found,
        });
    }
    Ok(())
}
