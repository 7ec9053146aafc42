//! Сканирование коэффициента c4 при k^4: l = k^2 - (1 + c4) k^4.
//! При c4 < -1 коротковолновые моды неустойчивы и расчет расходится.
use rks::print_and_log;
use rks::{Duration, InitialCondition, KsError, KsParameters, KuramotoSivashinsky, NoCorrection};
use std::io;

fn read_or(prompt: &str, default: f64) -> f64 {
    println!("{prompt} [{default}]:");
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return default;
    }
    line.trim().parse().unwrap_or(default)
}

fn main() -> Result<(), KsError> {
    let c4_min = read_or("c4 min", -1.2);
    let c4_max = read_or("c4 max", 0.5);
    let n_values = read_or("number of values", 18.).max(2.) as usize;

    let params = KsParameters::new(16., 128, 0.25, Duration::EndTime(100.), 4, None)?;
    let mut ks = KuramotoSivashinsky::with_initial_condition(params, InitialCondition::KassamTrefethen)?;

    for i in 0..n_values {
        let c4 = c4_min + (c4_max - c4_min) * i as f64 / (n_values - 1) as f64;
        ks.set_coefficients(Some([0., 0., 0., 0., c4]))?;
        let status = ks.run(NoCorrection)?;
        let uu = ks.physical_time_series();
        print_and_log!(
            "c4 = {:+.4}: {:<9} t = {:>7.2}, samples = {:>3}, max |u| = {:.4e}",
            c4,
            status.as_str(),
            ks.t(),
            uu.len(),
            uu.max_abs()
        );
    }
    Ok(())
}
