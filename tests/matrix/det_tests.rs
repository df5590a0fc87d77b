use numora::matrix::det::determinant;
use numora::matrix::errors::MatrixError;
use num_complex::Complex64;

type TestResult = Result<(), MatrixError>;

#[test]
fn one_by_one() -> TestResult {
    assert_eq!(determinant(&[vec![5]])?, 5);
    Ok(())
}

#[test]
fn integer_determinant_is_exact() -> TestResult {
    let m = vec![vec![2, 0, 2], vec![0, 2, 0], vec![2, 0, 4]];
    assert_eq!(determinant(&m)?, 8);
    Ok(())
}

#[test]
fn float_three_by_three() -> TestResult {
    let m = vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 10.0],
    ];
    let d: f64 = determinant(&m)?;
    assert!((d + 3.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn float_four_by_four() -> TestResult {
    let m = vec![
        vec![4.0, 3.0, 2.0, 1.0],
        vec![3.0, 4.0, 3.0, 2.0],
        vec![2.0, 3.0, 4.0, 3.0],
        vec![1.0, 2.0, 3.0, 4.0],
    ];
    let d: f64 = determinant(&m)?;
    assert!((d - 20.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn row_swap_flips_the_sign() -> TestResult {
    // permutation matrix with one transposition
    let m = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let d: f64 = determinant(&m)?;
    assert_eq!(d, -1.0);
    Ok(())
}

#[test]
fn singular_matrix_is_an_error() {
    let m = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    assert_eq!(determinant(&m).unwrap_err(), MatrixError::Singular);

    let z = vec![vec![0]];
    assert_eq!(determinant(&z).unwrap_err(), MatrixError::Singular);
}

#[test]
fn non_square_rejected() {
    let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    assert_eq!(
        determinant(&m).unwrap_err(),
        MatrixError::NotSquare { rows: 2, cols: 3 }
    );
}

#[test]
fn complex_determinant() -> TestResult {
    // det [[1+i, i], [2, 1-i]] = (1+i)(1-i) - 2i = 2 - 2i
    let m = vec![
        vec![Complex64::new(1.0, 1.0), Complex64::new(0.0, 1.0)],
        vec![Complex64::new(2.0, 0.0), Complex64::new(1.0, -1.0)],
    ];
    let d = determinant(&m)?;
    assert!((d.re - 2.0).abs() < 1e-12);
    assert!((d.im + 2.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn input_matrix_is_left_untouched() -> TestResult {
    let m = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let copy = m.clone();
    determinant(&m)?;
    assert_eq!(m, copy);
    Ok(())
}
