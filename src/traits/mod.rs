pub mod etdrk4;
pub mod fft_maker;
pub mod space;
