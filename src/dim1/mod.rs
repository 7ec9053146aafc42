pub mod etdrk4;
pub mod fft_maker;
pub mod initial_condition;
pub mod operators;
pub mod solver;
pub mod space;
pub mod space_time;
pub mod spectral_grid;
pub mod state;
