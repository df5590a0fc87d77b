use numora::root_finding::secant::{secant, SecantCfg, SecantError};
use numora::root_finding::function::with_params;
use numora::root_finding::errors::RootFindingError;
use numora::root_finding::report::ToleranceSatisfied;

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let cfg = SecantCfg::new()
        .set_tol(1e-12)?
        .set_epsilon(1e-12)?
        .set_max_iter(50)?;

    let res = secant(f, 1.0, 2.0, cfg)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-12);
    assert_eq!(res.iterations, 6);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ResidualReached);
    assert_eq!(res.evaluations, 8);
    Ok(())
}

#[test]
fn finds_root_of_x_sin_x() -> TestResult {
    let f = |x: f64| x * x.sin() - 1.0;

    let cfg = SecantCfg::new()
        .set_tol(1e-10)?
        .set_epsilon(1e-12)?
        .set_max_iter(50)?;

    let res = secant(f, 0.0, 2.0, cfg)?;

    assert!((res.root - 1.1141571408719304).abs() < 1e-9);
    assert_eq!(res.iterations, 5);
    Ok(())
}

#[test]
fn restart_from_converged_root_exits_with_zero_iterations() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new()
        .set_tol(1e-12)?
        .set_epsilon(1e-12)?;

    let root = secant(f, 1.0, 2.0, cfg)?.root;
    let res = secant(f, root, root + 0.5, cfg)?;

    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, root);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ResidualReached);
    Ok(())
}

#[test]
fn exact_zero_at_second_guess_exits_immediately() -> TestResult {
    let f = |x: f64| x * (x - 3.0);
    let res = secant(f, 1.0, 3.0, SecantCfg::new())?;

    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactZero);
    Ok(())
}

#[test]
fn horizontal_secant_is_degenerate() {
    // even function: f(-1) == f(1), the secant line never crosses
    let f = |x: f64| x * x;
    let err = secant(f, -1.0, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        SecantError::DegenerateSecantStep { fx0, fx1 } if fx0 == 1.0 && fx1 == 1.0
    ));
}

#[test]
fn budget_exhaustion_is_a_hard_failure() {
    let f = |x: f64| x * x.sin() - 1.0;
    let cfg = SecantCfg::new()
        .set_tol(1e-14)
        .unwrap()
        .set_epsilon(1e-14)
        .unwrap()
        .set_max_iter(1)
        .unwrap();

    let err = secant(f, 0.0, 2.0, cfg).unwrap_err();
    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::IterationLimit { max_iter: 1 })
    ));
}

#[test]
fn equal_guesses_rejected() {
    let f = |x: f64| x;
    let err = secant(f, 1.0, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { x0, x1 } if x0 == 1.0 && x1 == 1.0));
}

#[test]
fn non_finite_guess_rejected() {
    let f = |x: f64| x;
    let err = secant(f, f64::NAN, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { .. }));
}

#[test]
fn non_finite_eval_is_reported() {
    let f = |x: f64| 1.0 / x;
    // the secant through (1, 1) and (-1, -1) crosses at exactly x = 0
    let err = secant(f, 1.0, -1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()
    ));
}

#[test]
fn internal_rate_of_return_from_cash_flows() -> TestResult {
    let npv = |r: f64, cf: &[f64]| {
        cf.iter()
            .enumerate()
            .map(|(t, c)| c / (1.0 + r).powi(t as i32))
            .sum::<f64>()
    };
    let f = with_params(npv, vec![-1000.0, 500.0, 500.0, 500.0]);

    let cfg = SecantCfg::new()
        .set_tol(1e-10)?
        .set_epsilon(1e-10)?
        .set_max_iter(100)?;

    let res = secant(f, 0.05, 0.2, cfg)?;
    assert!((res.root - 0.23375192852825868).abs() < 1e-6);
    assert!(res.f_root.abs() < 1e-6);
    Ok(())
}

#[test]
fn stencil_reproduces_the_final_update() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new()
        .set_tol(1e-12)?
        .set_epsilon(1e-12)?;

    let res = secant(f, 1.0, 2.0, cfg)?;
    let s = res.stencil.stencil();
    assert_eq!(s.len(), 2);
    let (p0, p1) = (s[0], s[1]);
    let reproduced = p1 - f(p1) * (p1 - p0) / (f(p1) - f(p0));
    assert!((reproduced - res.root).abs() < 1e-12);
    Ok(())
}
