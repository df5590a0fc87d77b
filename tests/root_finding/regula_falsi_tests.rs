use numora::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError};
use numora::root_finding::errors::RootFindingError;
use numora::root_finding::report::ToleranceSatisfied;

type TestResult = Result<(), RegulaFalsiError>;

fn x_sin_x(x: f64) -> f64 {
    x * x.sin() - 1.0
}

#[test]
fn finds_root_of_x_sin_x_via_residual() -> TestResult {
    let cfg = RegulaFalsiCfg::new()
        .set_tol(0.001)?
        .set_epsilon(0.001)?
        .set_max_iter(50)?;

    let res = regula_falsi(x_sin_x, 0.0, 2.0, cfg)?;

    assert!((res.root - 1.1141611949626338).abs() < 1e-9);
    assert_eq!(res.iterations, 3);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ResidualReached);
    assert!(res.f_root.abs() < 0.001);
    Ok(())
}

#[test]
fn converges_far_faster_than_its_bisection_budget() -> TestResult {
    // bisection needs 8 halvings at this width tolerance
    let cfg = RegulaFalsiCfg::new()
        .set_tol(0.01)?
        .set_epsilon(1e-9)?
        .set_max_iter(50)?;

    let res = regula_falsi(x_sin_x, 0.0, 2.0, cfg)?;
    assert!(res.iterations < 8);
    assert!((res.root - 1.114157140871930).abs() < 1e-2);
    Ok(())
}

#[test]
fn final_bracket_retains_sign_change() -> TestResult {
    let cfg = RegulaFalsiCfg::new()
        .set_tol(1e-8)?
        .set_epsilon(1e-8)?
        .set_max_iter(100)?;

    let res = regula_falsi(x_sin_x, 0.0, 2.0, cfg)?;
    let s = res.stencil.stencil();
    assert_eq!(s.len(), 2);
    assert!(x_sin_x(s[0]) * x_sin_x(s[1]) <= 0.0);
    Ok(())
}

#[test]
fn same_sign_bracket_fails_without_iterating() {
    let f = |x: f64| 1.0 / (x - 2.0);

    let mut evals = 0;
    let counted = |x: f64| {
        evals += 1;
        f(x)
    };

    let err = regula_falsi(counted, 3.0, 7.0, RegulaFalsiCfg::new()).unwrap_err();
    assert!(matches!(err, RegulaFalsiError::NoSignChange { a, b } if a == 3.0 && b == 7.0));
    assert_eq!(evals, 2);
}

#[test]
fn exact_zero_at_crossing_exits_immediately() -> TestResult {
    // the first secant crossing of f(x) = x on [-1, 2] is exactly 0
    let res = regula_falsi(|x: f64| x, -1.0, 2.0, RegulaFalsiCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.f_root, 0.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactZero);
    Ok(())
}

#[test]
fn exact_root_at_endpoint_exits_immediately() -> TestResult {
    let res = regula_falsi(|x: f64| x - 1.0, 1.0, 3.0, RegulaFalsiCfg::new())?;

    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactZero);
    Ok(())
}

#[test]
fn budget_exhaustion_is_a_hard_failure() {
    let cfg = RegulaFalsiCfg::new().set_max_iter(1).unwrap();

    let err = regula_falsi(x_sin_x, 0.0, 2.0, cfg).unwrap_err();
    assert!(matches!(
        err,
        RegulaFalsiError::RootFinding(RootFindingError::IterationLimit { max_iter: 1 })
    ));
}

#[test]
fn invalid_bounds_rejected() {
    let f = |x: f64| x;
    assert!(matches!(
        regula_falsi(f, 1.0, 1.0, RegulaFalsiCfg::new()).unwrap_err(),
        RegulaFalsiError::InvalidBounds { .. }
    ));
    assert!(matches!(
        regula_falsi(f, f64::NEG_INFINITY, 1.0, RegulaFalsiCfg::new()).unwrap_err(),
        RegulaFalsiError::InvalidBounds { .. }
    ));
}

#[test]
fn algorithm_field_is_regula_falsi() -> TestResult {
    let cfg = RegulaFalsiCfg::new().set_tol(0.01)?.set_epsilon(0.01)?;
    let res = regula_falsi(x_sin_x, 0.0, 2.0, cfg)?;
    assert_eq!(res.algorithm_name, "regula_falsi");
    Ok(())
}
