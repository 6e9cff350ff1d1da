//! Tests for the Gaussian elimination solver against known solutions and faer's LU.
//!
//! Random well-conditioned systems are solved with both `gaussian_elimination` and
//! faer's full-pivoting LU and compared elementwise; fixed systems check exact
//! reference answers and the failure modes for singular and mis-shaped input.

use approx::assert_abs_diff_eq;
use denspline::solver::{gaussian_elimination, GaussSolver, LinearSolver};
use denspline::{LinalgError, Matrix};
use faer::Mat;
use faer::linalg::solvers::SolveCore;
use rand::Rng;

/// Random diagonally dominant system `A x = b`.
fn random_system(n: usize) -> (Matrix, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let mut a = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = rng.r#gen::<f64>();
        }
        a[(i, i)] += n as f64;
    }
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    (a, b)
}

/// Solve with faer's full-pivoting LU for comparison.
fn faer_solve(a: &Matrix, b: &[f64]) -> Vec<f64> {
    let n = a.rows();
    let fa = Mat::from_fn(n, n, |i, j| a[(i, j)]);
    let mut x = b.to_vec();
    let lu = faer::linalg::solvers::FullPivLu::new(fa.as_ref());
    let x_mat = faer::MatMut::from_column_major_slice_mut(&mut x, n, 1);
    lu.solve_in_place_with_conj(faer::Conj::No, x_mat);
    x
}

#[test]
fn matches_faer_lu_on_random_systems() {
    for n in [1, 2, 5, 10, 25] {
        let (a, b) = random_system(n);
        let x = gaussian_elimination(&a, &b).unwrap();
        let x_ref = faer_solve(&a, &b);
        for i in 0..n {
            assert_abs_diff_eq!(x[i], x_ref[i], epsilon = 1e-10);
        }
    }
}

#[test]
fn solves_10x10_reference() {
    let a = Matrix::from_rows(&[
        [2.0, 1.0, -1.0, 2.0, 0.0, 3.0, -2.0, 4.0, 1.0, 0.0],
        [4.0, 5.0, -3.0, 6.0, -1.0, 2.0, 0.0, 3.0, 2.0, -1.0],
        [0.0, -2.0, 7.0, 3.0, 1.0, 0.0, 5.0, -1.0, 2.0, 4.0],
        [3.0, 0.0, 1.0, -2.0, 4.0, 2.0, 3.0, 1.0, -3.0, 2.0],
        [1.0, -1.0, 0.0, 2.0, 5.0, 3.0, 2.0, 0.0, 4.0, 1.0],
        [2.0, 3.0, -2.0, 1.0, 0.0, 6.0, 1.0, -1.0, 2.0, 3.0],
        [0.0, 2.0, 3.0, -1.0, 2.0, 0.0, 7.0, 2.0, -2.0, 1.0],
        [1.0, 4.0, 0.0, 2.0, 3.0, -2.0, 2.0, 8.0, 0.0, 2.0],
        [2.0, 0.0, 4.0, -3.0, 1.0, 2.0, 1.0, 3.0, 9.0, -1.0],
        [0.0, -1.0, 2.0, 1.0, 4.0, 0.0, -1.0, 2.0, 1.0, 10.0],
    ])
    .unwrap();
    let b = [8.0, 19.0, 13.0, 7.0, 15.0, 21.0, 14.0, 30.0, 25.0, 18.0];
    let expected = [
        -9.502862098236018026,
        29.571101125024768459,
        24.313859649551971794,
        2.7175243584129787858,
        18.389280830546660945,
        6.2596571353087519744,
        -19.208693439924068992,
        -9.2043244591979765748,
        -4.0656264448092057481,
        -7.406568393139770783,
    ];
    let x = gaussian_elimination(&a, &b).unwrap();
    assert_eq!(x.len(), expected.len());
    for (xi, ei) in x.iter().zip(expected) {
        assert_abs_diff_eq!(*xi, ei, epsilon = 1e-10);
    }
}

#[test]
fn solution_agrees_with_inverse() {
    let (a, b) = random_system(4);
    let x = gaussian_elimination(&a, &b).unwrap();
    let inv = a.inverse().unwrap();
    let bm = Matrix::from_row_slice(4, 1, &b).unwrap();
    let x_inv = (&inv * &bm).unwrap();
    for i in 0..4 {
        assert_abs_diff_eq!(x[i], x_inv[(i, 0)], epsilon = 1e-10);
    }
}

#[test]
fn gauss_solver_residual_is_small() {
    let (a, b) = random_system(12);
    let mut x = vec![0.0; 12];
    let stats = GaussSolver::new().solve(&a, &b, &mut x).unwrap();
    assert!(stats.converged);
    assert!(stats.final_residual < 1e-10, "residual = {}", stats.final_residual);
}

#[test]
fn singular_and_near_singular_fail() {
    // third row is the sum of the first two
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]).unwrap();
    assert!(matches!(gaussian_elimination(&a, &[1.0, 2.0, 3.0]), Err(LinalgError::ZeroPivot(_))));

    let tiny = Matrix::from_rows(&[[1e-11, 0.0], [0.0, 1.0]]).unwrap();
    assert_eq!(gaussian_elimination(&tiny, &[1.0, 1.0]), Err(LinalgError::ZeroPivot(0)));
}

#[test]
fn mis_shaped_systems_fail() {
    let a = Matrix::zeros(2, 3);
    assert_eq!(
        gaussian_elimination(&a, &[1.0, 2.0, 3.0]),
        Err(LinalgError::SizeMismatch { rows: 2, len: 3 })
    );
    assert_eq!(
        gaussian_elimination(&a, &[1.0, 2.0]),
        Err(LinalgError::NotSquare { rows: 2, cols: 3 })
    );
    let mut x = vec![0.0; 2];
    assert!(GaussSolver::new().solve(&a, &vec![1.0, 2.0], &mut x).is_err());
    assert_eq!(x, vec![0.0, 0.0]);
}
