use numora::fast_math::{fast_inv_sqrt32, fast_inv_sqrt64, FastInvSqrtError};

type TestResult = Result<(), FastInvSqrtError>;

fn rel_err_64(got: f64, expected: f64) -> f64 {
    (got - expected).abs() / expected
}

#[test]
fn f64_single_step_is_rough() -> TestResult {
    let y = fast_inv_sqrt64(4.0, 1)?;
    let err = rel_err_64(y, 0.5);
    assert!(err < 2e-3);
    assert!(err > 1e-4);
    Ok(())
}

#[test]
fn f64_each_step_sharpens_the_estimate() -> TestResult {
    let e1 = rel_err_64(fast_inv_sqrt64(4.0, 1)?, 0.5);
    let e2 = rel_err_64(fast_inv_sqrt64(4.0, 2)?, 0.5);
    let e3 = rel_err_64(fast_inv_sqrt64(4.0, 3)?, 0.5);
    assert!(e2 < e1);
    assert!(e3 < e2);
    assert!(e2 < 5e-6);
    Ok(())
}

#[test]
fn f64_four_steps_reach_the_precision_floor() -> TestResult {
    let y = fast_inv_sqrt64(4.0, 4)?;
    assert!((y - 0.5).abs() < 1e-15);

    let y = fast_inv_sqrt64(0.25, 4)?;
    assert!((y - 2.0).abs() < 1e-12);

    let y = fast_inv_sqrt64(612.0, 4)?;
    assert!(rel_err_64(y, 1.0 / 612.0_f64.sqrt()) < 1e-12);
    Ok(())
}

#[test]
fn f32_single_step_is_rough() -> TestResult {
    let y = fast_inv_sqrt32(4.0, 1)?;
    assert!((y - 0.5).abs() / 0.5 < 2e-3);
    Ok(())
}

#[test]
fn f32_three_steps_reach_the_precision_floor() -> TestResult {
    let y = fast_inv_sqrt32(4.0, 3)?;
    assert!((y - 0.5).abs() / 0.5 < 1e-6);
    Ok(())
}

#[test]
fn negative_input_rejected() {
    assert_eq!(
        fast_inv_sqrt64(-1.0, 1).unwrap_err(),
        FastInvSqrtError::NegativeInput { got: -1.0 }
    );
    assert_eq!(
        fast_inv_sqrt32(-4.0, 2).unwrap_err(),
        FastInvSqrtError::NegativeInput { got: -4.0 }
    );
}

#[test]
fn zero_iterations_rejected() {
    assert_eq!(
        fast_inv_sqrt64(4.0, 0).unwrap_err(),
        FastInvSqrtError::InvalidIterations
    );
    assert_eq!(
        fast_inv_sqrt32(4.0, 0).unwrap_err(),
        FastInvSqrtError::InvalidIterations
    );
}
