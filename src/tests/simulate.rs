use crate::common::tspace::{Duration, Tspace};
use crate::config::{C, F};
use crate::dim1::solver::is_finite_state;
use crate::error::KsError;
use crate::parameters::KsParameters;
use crate::{CorrectionFn, InitialCondition, KuramotoSivashinsky, NoCorrection, RunStatus};
use ndarray::prelude::*;

fn params(nsteps: usize, iout: usize) -> KsParameters {
    KsParameters::new(16., 128, 0.25, Duration::Steps(nsteps), iout, None).unwrap()
}

fn kt(nsteps: usize, iout: usize) -> KuramotoSivashinsky {
    KuramotoSivashinsky::with_initial_condition(params(nsteps, iout), InitialCondition::KassamTrefethen)
        .unwrap()
}

#[test]
fn configuration_is_validated() {
    let bad = [
        KsParameters::new(0., 128, 0.25, Duration::Steps(10), 1, None),
        KsParameters::new(-1., 128, 0.25, Duration::Steps(10), 1, None),
        KsParameters::new(16., 0, 0.25, Duration::Steps(10), 1, None),
        KsParameters::new(16., 128, 0., Duration::Steps(10), 1, None),
        KsParameters::new(16., 128, -0.1, Duration::Steps(10), 1, None),
        KsParameters::new(16., 128, 0.25, Duration::Steps(0), 1, None),
        KsParameters::new(16., 128, 0.25, Duration::EndTime(0.1), 1, None),
        KsParameters::new(16., 128, 0.25, Duration::EndTime(-5.), 1, None),
        KsParameters::new(16., 128, F::NAN, Duration::Steps(10), 1, None),
        KsParameters::new(16., 128, 0.25, Duration::Steps(10), 1, Some([F::INFINITY; 5])),
    ];
    for result in bad {
        assert!(matches!(result, Err(KsError::InvalidParameter { .. })), "{result:?}");
    }
}

#[test]
fn end_time_gives_step_count() {
    let p = KsParameters::new(16., 128, 0.25, Duration::EndTime(150.), 1, None).unwrap();
    assert_eq!(p.t.nsteps, 600);
    assert_eq!(p.t.nout(), 600);
    assert_eq!(p.t.tend(), 150.);
    assert_eq!(p, KsParameters::default());

    let p = KsParameters::new(16., 128, 0.25, Duration::Steps(10), 3, None).unwrap();
    assert_eq!(p.t.nout(), 3);
    assert_eq!(p.t.sample_grid().to_vec(), vec![0., 0.75, 1.5, 2.25]);
    let p = KsParameters::new(16., 128, 0.25, Duration::Steps(10), 0, None).unwrap();
    assert_eq!(p.t.nout(), 0);
}

#[test]
fn zero_steps_keep_initial_condition() {
    let mut ks = kt(10, 1);
    let v0 = ks.initial_state().v0.clone();
    let status = ks.simulate(Some(0), None, true, NoCorrection).unwrap();
    assert!(status.is_completed());
    assert_eq!(status.recorded(), 0);
    assert_eq!(ks.v(), &v0);
    assert_eq!(ks.t(), 0.);
    assert_eq!(ks.tt(), &[0.]);
    assert_eq!(ks.vv().nrows(), 1);
    assert_eq!(ks.vv().row(0), v0);
    assert_eq!(ks.physical_time_series().len(), 1);
}

#[test]
fn zero_field_stays_zero() {
    let mut ks = KuramotoSivashinsky::with_initial_condition(
        params(200, 10),
        InitialCondition::Physical(Array::zeros(128)),
    )
    .unwrap();
    let status = ks.run(NoCorrection).unwrap();
    assert!(status.is_completed());
    assert!(ks.v().iter().all(|c| *c == C::new(0., 0.)));
    assert_eq!(ks.tt().len(), 21);
}

#[test]
fn low_mode_stays_bounded() {
    let mut ks = KuramotoSivashinsky::with_initial_condition(params(800, 4), InitialCondition::KassamTrefethen)
        .unwrap();
    let x = ks.x().clone();
    ks.set_initial_condition(InitialCondition::Physical(x.mapv(|x| 0.5 * (x / 16.).cos())))
        .unwrap();
    let status = ks.run(NoCorrection).unwrap();
    assert!(status.is_completed());
    let uu = ks.physical_time_series();
    assert_eq!(uu.len(), 201);
    assert!(uu.u.iter().all(|u| u.is_finite()));
    assert!(uu.max_abs() < 20., "max |u| = {}", uu.max_abs());
}

#[test]
fn mean_mode_is_conserved() {
    let mut ks = kt(300, 10);
    ks.run(NoCorrection).unwrap();
    let vv = ks.vv();
    let v0_mean = vv[[0, 0]];
    for row in vv.rows() {
        assert!((row[0] - v0_mean).norm() < 1e-9);
    }
}

#[test]
fn unstable_operator_diverges_gracefully() {
    // l = k^2 + k^4: dt l ~ 64 на краю спектра, переполнение за десяток шагов
    let p = KsParameters::new(16., 128, 0.25, Duration::Steps(600), 1, Some([0., 0., 0., 0., -2.]))
        .unwrap();
    let x = crate::dim1::space::Xspace1D::new(16., 128).unwrap();
    let u0 = x.grid[0].mapv(|x| 50. * (x / 16.).cos() * (1. + (3. * x / 16.).sin()));
    let mut ks = KuramotoSivashinsky::with_initial_condition(p, InitialCondition::Physical(u0)).unwrap();

    let status = ks.run(NoCorrection).unwrap();
    let RunStatus::Diverged { step, recorded, t } = status else {
        panic!("expected divergence, got {status:?}");
    };
    assert!(recorded < 601);
    assert_eq!(ks.tt().len(), recorded + 1);
    assert_eq!(ks.vv().nrows(), ks.tt().len());
    assert_eq!(ks.nout(), ks.ioutnum());
    // состояние -- последний конечный шаг
    assert_eq!(ks.stepnum(), step - 1);
    assert_eq!(ks.t(), t);
    assert!(is_finite_state(ks.v()));
    assert!(ks.vv().iter().all(|c| c.is_finite()));
    assert_eq!(ks.physical_time_series().len(), recorded + 1);
}

#[test]
fn finite_check_accepts_large_values() {
    let mut v: Array1<C> = Array::from_elem(8, C::new(1e300, -1e300));
    v[3] = C::new(F::MAX, F::MIN);
    assert!(is_finite_state(&v));
    v[5] = C::new(F::INFINITY, 0.);
    assert!(!is_finite_state(&v));
    v[5] = C::new(0., F::NAN);
    assert!(!is_finite_state(&v));
}

#[test]
fn zero_correction_is_bit_identical() {
    let mut plain = kt(200, 5);
    plain.run(NoCorrection).unwrap();

    let mut corrected = kt(200, 5);
    corrected.run(Array1::<C>::zeros(128)).unwrap();
    assert_eq!(plain.vv(), corrected.vv());
    assert_eq!(plain.tt(), corrected.tt());

    let zeros = Array1::<C>::zeros(128);
    let mut by_ref = kt(200, 5);
    by_ref.run(&zeros).unwrap();
    assert_eq!(plain.vv(), by_ref.vv());

    let mut by_fn = kt(200, 5);
    by_fn.run(CorrectionFn(|_t: F, _v: &mut Array1<C>| {})).unwrap();
    assert_eq!(plain.vv(), by_fn.vv());
}

#[test]
fn correction_is_added_after_every_step() {
    // мода k = 0: E = 1, g = 0, поэтому v[0] растет ровно на поправку за шаг
    let mut ks = kt(10, 1);
    let v0_mean = ks.v()[0];
    let mut correction = Array1::<C>::zeros(128);
    correction[0] = C::new(0.5, 0.);
    ks.run(correction).unwrap();
    assert!((ks.v()[0] - v0_mean - C::new(5., 0.)).norm() < 1e-10);

    let mut times = Vec::new();
    let mut ks = kt(4, 1);
    ks.run(CorrectionFn(|t: F, _v: &mut Array1<C>| times.push(t)))
        .unwrap();
    assert_eq!(times, vec![0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn wrong_correction_length_is_rejected() {
    let mut ks = kt(10, 1);
    let err = ks.run(Array1::<C>::zeros(64)).unwrap_err();
    assert!(matches!(
        err,
        KsError::InvalidSize {
            what: "correction",
            expected: 128,
            found: 64
        }
    ));
    assert_eq!(ks.stepnum(), 0);
    assert_eq!(ks.tt().len(), 1);
}

#[test]
fn wrong_initial_condition_length_is_rejected() {
    let mut ks = kt(10, 1);
    let v0 = ks.initial_state().v0.clone();
    let err = ks
        .set_initial_condition(InitialCondition::Physical(Array::zeros(127)))
        .unwrap_err();
    assert!(matches!(err, KsError::InvalidSize { expected: 128, found: 127, .. }));
    let err = ks
        .set_initial_condition(InitialCondition::Spectral(Array::zeros(256)))
        .unwrap_err();
    assert!(matches!(err, KsError::InvalidSize { expected: 128, found: 256, .. }));
    assert_eq!(ks.initial_state().v0, v0);
}

#[test]
fn spectral_and_physical_initial_conditions_agree() {
    let ks = kt(10, 1);
    let u0 = ks.initial_state().u0.clone();
    let v0 = ks.initial_state().v0.clone();

    let mut from_v = kt(10, 1);
    from_v.set_initial_condition(InitialCondition::Spectral(v0.clone())).unwrap();
    assert_eq!(from_v.initial_state().v0, v0);
    assert!(super::max_diff(&from_v.initial_state().u0, &u0) < 1e-14);

    let x = ks.x();
    let expected = x.mapv(|x| (x / 16.).cos() * (1. + (x / 16.).sin()));
    assert!(super::max_diff(&u0, &expected) < 1e-15);
}

#[test]
fn seeded_noise_is_reproducible() {
    let ic = InitialCondition::Noise {
        amplitude: 0.01,
        seed: Some(7),
    };
    let a = KuramotoSivashinsky::with_initial_condition(params(1, 1), ic.clone()).unwrap();
    let b = KuramotoSivashinsky::with_initial_condition(params(1, 1), ic).unwrap();
    assert_eq!(a.initial_state(), b.initial_state());
    assert!(a.initial_state().u0.iter().all(|u| u.abs() <= 0.005));

    let random = KuramotoSivashinsky::new(params(1, 1)).unwrap();
    assert!(random.initial_state().u0.iter().all(|u| u.abs() <= 0.005));
}

#[test]
fn sampling_stride() {
    let mut ks = kt(10, 3);
    let status = ks.run(NoCorrection).unwrap();
    assert_eq!(status.recorded(), 3);
    assert_eq!(ks.tt(), &[0., 0.75, 1.5, 2.25]);
    assert_eq!(ks.stepnum(), 10);
    assert_eq!(ks.t(), 2.5);

    // iout = 0: только начальное условие
    let status = ks.simulate(Some(10), Some(0), true, NoCorrection).unwrap();
    assert!(status.is_completed());
    assert_eq!(ks.tt(), &[0.]);
    assert_eq!(ks.stepnum(), 10);
}

#[test]
fn continuation_matches_single_run() {
    let mut single = kt(200, 2);
    single.run(NoCorrection).unwrap();

    let mut split = kt(100, 2);
    split.run(NoCorrection).unwrap();
    assert_eq!(split.tt().len(), 51);
    split.run(NoCorrection).unwrap();
    assert_eq!(split.tt().len(), 101);
    assert_eq!(split.nout(), 100);
    assert_eq!(split.tt().last(), Some(&50.));
    assert_eq!(single.vv(), split.vv());
    assert_eq!(single.v(), split.v());

    // restart возвращает к начальному условию
    split.simulate(None, None, true, NoCorrection).unwrap();
    assert_eq!(split.tt().len(), 51);
    assert_eq!(split.t(), 25.);
}

#[test]
fn step_advances_without_recording() {
    let mut ks = kt(10, 1);
    let mut reference = kt(1, 1);
    reference.run(NoCorrection).unwrap();
    ks.step();
    assert_eq!(ks.v(), reference.v());
    assert_eq!(ks.t(), 0.25);
    assert_eq!(ks.tt().len(), 1);
}

#[test]
fn reconfiguration() {
    let mut ks = kt(20, 1);
    ks.run(NoCorrection).unwrap();
    let ops = ks.operators().clone();

    // смена nsteps не трогает операторы
    let p = KsParameters::new(16., 128, 0.25, Duration::Steps(40), 2, None).unwrap();
    ks.reconfigure(p).unwrap();
    assert_eq!(ks.operators(), &ops);
    assert_eq!(ks.nout(), 20);
    assert_eq!(ks.t(), 0.);

    ks.set_coefficients(Some([0., 0., 0.5, 0., 0.])).unwrap();
    assert_ne!(ks.operators(), &ops);
    let k = ks.k()[3];
    assert!((ks.l()[3] - C::new(1.5 * k.powi(2) - k.powi(4), 0.)).norm() < 1e-15);

    // новая сетка: шаблонное начальное условие строится заново
    let p = KsParameters::new(8., 64, 0.1, Duration::Steps(5), 1, None).unwrap();
    ks.reconfigure(p).unwrap();
    assert_eq!(ks.v().len(), 64);
    assert_eq!(ks.operators().dt(), 0.1);
    assert!(ks.run(NoCorrection).unwrap().is_completed());

    // заданный вектор к новому N не подходит
    ks.set_initial_condition(InitialCondition::Physical(Array::zeros(64)))
        .unwrap();
    let p = KsParameters::new(8., 32, 0.1, Duration::Steps(5), 1, None).unwrap();
    assert!(matches!(ks.reconfigure(p), Err(KsError::InvalidSize { .. })));
    assert_eq!(ks.v().len(), 64);
}

#[test]
fn literal_parameters_are_validated() {
    let bad = KsParameters {
        t: Tspace {
            dt: -0.25,
            nsteps: 0,
            iout: 1,
        },
        ..KsParameters::default()
    };
    assert!(bad.validate().is_err());
    let result = KuramotoSivashinsky::with_initial_condition(bad, InitialCondition::KassamTrefethen);
    assert!(matches!(result, Err(KsError::InvalidParameter { name: "dt", .. })));

    let zero_steps = KsParameters {
        t: Tspace {
            dt: 0.25,
            nsteps: 0,
            iout: 1,
        },
        ..KsParameters::default()
    };
    let result = KuramotoSivashinsky::with_initial_condition(zero_steps, InitialCondition::KassamTrefethen);
    assert!(matches!(result, Err(KsError::InvalidParameter { name: "nsteps", .. })));

    let bad_grid = KsParameters {
        l: F::NAN,
        ..KsParameters::default()
    };
    assert!(KuramotoSivashinsky::new(bad_grid).is_err());

    // reconfigure с NaN в dt отклоняется, решатель не меняется
    let mut ks = kt(10, 1);
    let before = ks.params().clone();
    let nan_dt = KsParameters {
        t: Tspace {
            dt: F::NAN,
            ..before.t.clone()
        },
        ..before.clone()
    };
    assert!(matches!(
        ks.reconfigure(nan_dt),
        Err(KsError::InvalidParameter { name: "dt", .. })
    ));
    assert_eq!(ks.params(), &before);
    assert_eq!(ks.operators().dt(), 0.25);
    assert!(ks.run(NoCorrection).unwrap().is_completed());
}

#[test]
fn run_overrides_leave_parameters_untouched() {
    let mut ks = kt(10, 2);
    let before = ks.params().clone();

    ks.simulate(Some(0), Some(3), true, NoCorrection).unwrap();
    assert_eq!(ks.params(), &before);
    assert!(ks.params().validate().is_ok());
    assert_eq!(ks.tt(), &[0.]);

    // без переопределений -- сохраненные nsteps и iout
    ks.simulate(None, None, true, NoCorrection).unwrap();
    assert_eq!(ks.stepnum(), 10);
    assert_eq!(ks.tt().len(), 6);
}

#[test]
fn workspace_is_reused_across_calls() {
    let mut ks = kt(50, 5);
    ks.run(NoCorrection).unwrap();
    let first = ks.vv();
    ks.simulate(None, None, true, NoCorrection).unwrap();
    assert_eq!(ks.vv(), first);

    // шаги по одному совпадают с расчетом
    let mut stepped = kt(50, 5);
    for _ in 0..50 {
        stepped.step();
    }
    assert_eq!(stepped.v(), ks.v());
    assert_eq!(stepped.workspace().len(), 128);

    // смена N пересоздает рабочие массивы
    let p = KsParameters::new(16., 64, 0.25, Duration::Steps(20), 1, None).unwrap();
    ks.reconfigure(p.clone()).unwrap();
    assert_eq!(ks.workspace().len(), 64);
    ks.run(NoCorrection).unwrap();
    let mut fresh =
        KuramotoSivashinsky::with_initial_condition(p, InitialCondition::KassamTrefethen).unwrap();
    fresh.run(NoCorrection).unwrap();
    assert_eq!(ks.vv(), fresh.vv());
}
