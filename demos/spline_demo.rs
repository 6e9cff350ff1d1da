use denspline::interpolation::{CubicSpline, Interpolator, Point};
use denspline::solver::{GaussSolver, LinearSolver};
use denspline::Matrix;

fn main() {
    let a = Matrix::from_rows(&[[1.0, -2.0, 1.0], [2.0, 1.0, -3.0], [4.0, -7.0, 1.0]]).unwrap();
    let b = vec![0.0, 5.0, -1.0];
    let mut x = vec![0.0; 3];

    println!("A =\n{a}");
    println!("det(A) = {:?}", a.determinant());
    match a.inverse() {
        Ok(inv) => println!("inv(A) =\n{inv}"),
        Err(e) => println!("inv(A): {e}"),
    }

    let stats = GaussSolver::new().solve(&a, &b, &mut x).unwrap();
    println!("x = {:?}, stats = {:?}", x, stats);

    let spline = CubicSpline::new(vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, 3.0),
        Point::new(2.5, 2.0),
        Point::new(4.0, 5.0),
    ]);
    println!("coefficients = {:?}", spline.coefficients());

    let xs: Vec<f64> = (0..=8).map(|i| i as f64 * 0.5).collect();
    match spline.eval_many(&xs) {
        Ok(ys) => {
            for (x, y) in xs.iter().zip(ys) {
                println!("s({x:.1}) = {y:.4}");
            }
        }
        Err(e) => println!("evaluation failed: {e}"),
    }
}
