use criterion::{black_box, Criterion, criterion_group, criterion_main};
use denspline::interpolation::{CubicSpline, Point};
use denspline::solver::gaussian_elimination;
use denspline::Matrix;
use faer::Mat;
use faer::linalg::solvers::SolveCore;

fn bench_gauss_vs_faer(c: &mut Criterion) {
    let n = 200;
    let data: Vec<f64> = (0..n * n)
        .map(|i| (i as f64).sin() + if i % (n + 1) == 0 { n as f64 } else { 0.0 })
        .collect();
    let a = Matrix::from_row_slice(n, n, &data).unwrap();
    let fa = Mat::from_fn(n, n, |i, j| data[i * n + j]);
    let b: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();

    c.bench_function("gaussian elimination", |ben| {
        ben.iter(|| {
            let _x = gaussian_elimination(black_box(&a), black_box(&b)).unwrap();
        })
    });

    c.bench_function("faer raw LU", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(fa.as_ref());
            let mut y = b.clone();
            let n = y.len();
            let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
            factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
        })
    });
}

fn bench_spline_fit(c: &mut Criterion) {
    let points: Vec<Point> = (0..25).map(|i| Point::new(i as f64 * 0.25, (i as f64 * 0.25).sin())).collect();
    c.bench_function("natural spline fit, 25 knots", |ben| {
        ben.iter(|| CubicSpline::new(black_box(points.clone())))
    });
}

criterion_group!(benches, bench_gauss_vs_faer, bench_spline_fit);
criterion_main!(benches);
