mod common;

use approx::assert_abs_diff_eq;
use openblas_ffi::{Order, SvdJob};

const M: usize = 6;
const N: usize = 5;

#[rustfmt::skip]
const A: [f64; M * N] = [
     8.79,  9.93,  9.83,  5.45,  3.16,
     6.11,  6.91,  5.04, -0.27,  7.98,
    -9.15, -7.93,  4.86,  4.85,  3.01,
     9.57,  1.64,  8.83,  0.74,  5.80,
    -3.49,  4.02,  9.80, 10.00,  4.27,
     9.84,  0.15, -8.99, -6.02, -5.31,
];

const S: [f64; N] = [27.47, 22.64, 8.56, 5.99, 2.01];

#[rustfmt::skip]
const U: [f64; M * M] = [
    -0.59,  0.26,  0.36,  0.31,  0.23,  0.55,
    -0.40,  0.24, -0.22, -0.75, -0.36,  0.18,
    -0.03, -0.60, -0.45,  0.23, -0.31,  0.54,
    -0.43,  0.24, -0.69,  0.33,  0.16, -0.39,
    -0.47, -0.35,  0.39,  0.16, -0.52, -0.46,
     0.29,  0.58, -0.02,  0.38, -0.65,  0.11,
];

#[rustfmt::skip]
const VT: [f64; N * N] = [
    -0.25, -0.40, -0.69, -0.37, -0.41,
     0.81,  0.36, -0.25, -0.37, -0.10,
    -0.26,  0.70, -0.22,  0.39, -0.49,
     0.40, -0.45,  0.25,  0.43, -0.62,
    -0.22,  0.14,  0.59, -0.63, -0.44,
];

/// Singular vectors are unique up to sign, so only magnitudes are compared.
fn assert_close_up_to_sign(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(a.abs(), e.abs(), epsilon = 0.01);
    }
}

#[test]
fn test_gesvd_full_row_major() {
    let Some(lapack) = common::lapack() else { return };

    let mut a = A;
    let mut s = [0.0; N];
    let mut u = [0.0; M * M];
    let mut vt = [0.0; N * N];
    let mut superb = [0.0; N - 1];
    lapack
        .gesvd(
            Order::RowMajor,
            SvdJob::All,
            SvdJob::All,
            M,
            N,
            &mut a,
            0,
            N,
            &mut s,
            0,
            &mut u,
            0,
            M,
            &mut vt,
            0,
            N,
            &mut superb,
            0,
        )
        .unwrap();

    for (actual, expected) in s.iter().zip(S) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 0.01);
    }
    assert_close_up_to_sign(&u, &U);
    assert_close_up_to_sign(&vt, &VT);

    // A = U[:, :N] * diag(S) * VT
    for i in 0..M {
        for j in 0..N {
            let value: f64 = (0..N).map(|p| u[i * M + p] * s[p] * vt[p * N + j]).sum();
            assert_abs_diff_eq!(value, A[i * N + j], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_gesvd_reduced_col_major() {
    let Some(lapack) = common::lapack() else { return };

    // Column-major copy with padded columns (lda = M + 1).
    let lda = M + 1;
    let mut a = vec![0.0; lda * N];
    for i in 0..M {
        for j in 0..N {
            a[j * lda + i] = A[i * N + j];
        }
    }
    let mut s = [0.0; N];
    let mut u = vec![0.0; M * N];
    let mut vt = [0.0; N * N];
    let mut superb = [0.0; N - 1];
    lapack
        .gesvd(
            Order::ColMajor,
            SvdJob::Reduced,
            SvdJob::Reduced,
            M,
            N,
            &mut a,
            0,
            lda,
            &mut s,
            0,
            &mut u,
            0,
            M,
            &mut vt,
            0,
            N,
            &mut superb,
            0,
        )
        .unwrap();

    for (actual, expected) in s.iter().zip(S) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 0.01);
    }
    for i in 0..M {
        for j in 0..N {
            assert_abs_diff_eq!(u[j * M + i].abs(), U[i * M + j].abs(), epsilon = 0.01);
        }
    }
}

#[test]
fn test_gesvd_values_only_f32() {
    let Some(lapack) = common::lapack() else { return };

    let mut a: Vec<f32> = A.iter().map(|&v| v as f32).collect();
    let mut s = [0.0f32; N];
    let mut superb = [0.0f32; N - 1];
    lapack
        .gesvd(
            Order::RowMajor,
            SvdJob::Skip,
            SvdJob::Skip,
            M,
            N,
            &mut a,
            0,
            N,
            &mut s,
            0,
            &mut [],
            0,
            1,
            &mut [],
            0,
            1,
            &mut superb,
            0,
        )
        .unwrap();

    for (actual, expected) in s.iter().zip(S) {
        assert_abs_diff_eq!(*actual, expected as f32, epsilon = 0.01);
    }
}
