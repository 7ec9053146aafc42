use rks::dim1::space_time::save_spectral_as_npy;
use rks::traits::space::Space;
use rks::{measure_time, print_and_log};
use rks::{InitialCondition, KsError, KsParameters, KuramotoSivashinsky, NoCorrection, RunStatus};
use std::time::Instant;

fn main() -> Result<(), KsError> {
    // префикс для сохранения
    let out_prefix = "out/ks";

    // L = 16, N = 128, dt = 0.25, t = 0..150, каждый шаг пишется
    let params = KsParameters::default();
    print_and_log!(
        "L = {}, N = {}, dt = {}, nsteps = {}, iout = {}, tend = {}",
        params.l,
        params.n,
        params.t.dt,
        params.t.nsteps,
        params.t.iout,
        params.t.tend()
    );

    let total_time = Instant::now();
    // начальное условие из Kassam, Trefethen
    let mut ks =
        KuramotoSivashinsky::with_initial_condition(params, InitialCondition::KassamTrefethen)?;

    let status: RunStatus;
    measure_time!("simulate", {
        status = ks.run(NoCorrection)?;
    });
    print_and_log!(
        "status = {}, t = {}, steps = {}, samples = {}",
        status.as_str(),
        ks.t(),
        ks.stepnum(),
        ks.tt().len()
    );

    let uu = ks.physical_time_series();
    print_and_log!("max |u| = {:.5}", uu.max_abs());

    measure_time!("save", {
        uu.save_as_npy(out_prefix)?;
        save_spectral_as_npy(&ks.vv(), out_prefix)?;
        ks.operators().grid.k.save_as_npy(out_prefix)?;
    });

    print_and_log!("total_time = {:.3}", total_time.elapsed().as_secs_f32());
    Ok(())
}
