use num_complex::Complex;

// тип данных: f64 или f32
pub type F = f64;

// комплексный тип данных, согласованный с F
pub type C = Complex<F>;

// константы
pub const PI: F = std::f64::consts::PI;
pub const I: C = Complex::I;

/// Число точек на контуре для комплексных средних в коэффициентах ETDRK4
pub const CONTOUR_POINTS: usize = 16;

/// Файл, в который дублируется вывод `print_and_log!` и `measure_time!`
pub const LOG_FILE: &str = "ks.log";
