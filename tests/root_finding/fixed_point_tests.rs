use numora::root_finding::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use numora::root_finding::function::with_params;
use numora::root_finding::errors::{RootFindingError, ToleranceError};
use numora::root_finding::report::ToleranceSatisfied;

type TestResult = Result<(), FixedPointError>;

#[test]
fn converges_to_exact_fixed_point_of_parabola() -> TestResult {
    let g = |x: f64| -4.0 + 4.0 * x - 0.5 * x * x;

    let cfg = FixedPointCfg::new()
        .set_decimals(10)?
        .set_max_iter(50)?;

    let res = fixed_point(g, 3.8, cfg)?;

    assert_eq!(res.root, 4.0);
    assert_eq!(res.iterations, 5);
    assert_eq!(res.abs_err, 0.0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsErrReached);
    assert_eq!(res.f_root, 4.0);
    Ok(())
}

#[test]
fn linear_contraction_converges_via_relative_error() -> TestResult {
    let g = |x: f64| 0.5 * x + 1.5;

    let cfg = FixedPointCfg::new()
        .set_decimals(10)?
        .set_max_iter(50)?;

    let res = fixed_point(g, 4.0, cfg)?;

    assert!((res.root - 3.0).abs() < 1e-9);
    assert_eq!(res.iterations, 32);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::RelErrReached);
    let rel = res.rel_err.unwrap();
    assert!(rel < 1e-10);
    Ok(())
}

#[test]
fn sequence_holds_every_iterate_in_order() -> TestResult {
    let g = |x: f64| 0.5 * x + 1.5;

    let cfg = FixedPointCfg::new()
        .set_decimals(10)?
        .set_max_iter(50)?;

    let res = fixed_point(g, 4.0, cfg)?;
    let seq = res.stencil.stencil();

    assert_eq!(seq.len(), res.iterations + 1);
    assert_eq!(seq[0], 4.0);
    for i in 1..seq.len() {
        assert_eq!(seq[i], g(seq[i - 1]));
    }
    assert_eq!(*seq.last().unwrap(), res.root);
    Ok(())
}

#[test]
fn parametrized_iteration_matches_direct_closure() -> TestResult {
    let g = with_params(|x, p: &[f64]| p[0] * x + p[1], vec![0.5, 1.5]);

    let cfg = FixedPointCfg::new()
        .set_decimals(10)?
        .set_max_iter(50)?;

    let res = fixed_point(g, 4.0, cfg)?;
    assert!((res.root - 3.0).abs() < 1e-9);
    assert_eq!(res.iterations, 32);
    Ok(())
}

#[test]
fn divergent_iteration_is_a_hard_failure() {
    let g = |x: f64| x * x;

    let cfg = FixedPointCfg::new()
        .set_decimals(10)
        .unwrap()
        .set_max_iter(10)
        .unwrap();

    let err = fixed_point(g, 2.0, cfg).unwrap_err();
    assert!(matches!(
        err,
        FixedPointError::RootFinding(RootFindingError::IterationLimit { max_iter: 10 })
    ));
}

#[test]
fn restart_from_fixed_point_converges_in_one_iteration() -> TestResult {
    let g = |x: f64| -4.0 + 4.0 * x - 0.5 * x * x;

    let cfg = FixedPointCfg::new().set_decimals(10)?;
    let res = fixed_point(g, 4.0, cfg)?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.abs_err, 0.0);
    assert_eq!(res.root, 4.0);
    Ok(())
}

#[test]
fn non_finite_iterate_is_reported() {
    let g = |x: f64| 1.0 / x;

    let cfg = FixedPointCfg::new().set_decimals(6).unwrap();
    let err = fixed_point(g, 0.0, cfg).unwrap_err();
    assert!(matches!(
        err,
        FixedPointError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()
    ));
}

#[test]
fn invalid_guess_nan_rejected() {
    let g = |x: f64| x;
    let err = fixed_point(g, f64::NAN, FixedPointCfg::new()).unwrap_err();
    assert!(matches!(err, FixedPointError::InvalidGuess { p0 } if p0.is_nan()));
}

#[test]
fn zero_decimals_rejected_by_setter() {
    let err = FixedPointCfg::new().set_decimals(0).unwrap_err();
    assert!(matches!(err, ToleranceError::InvalidDecimals { got: 0 }));
}

#[test]
fn zero_max_iter_rejected_by_setter() {
    let err = FixedPointCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn algorithm_field_is_fixed_point() -> TestResult {
    let g = |x: f64| 0.5 * x + 1.5;
    let res = fixed_point(g, 4.0, FixedPointCfg::new().set_decimals(8)?)?;
    assert_eq!(res.algorithm_name, "fixed_point");
    Ok(())
}
