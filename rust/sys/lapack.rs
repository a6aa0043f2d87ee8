//! LAPACK entry points.
//!
//! The Fortran routines take every argument by pointer, character options as a
//! single `char`, and report their status through `info`: `0` on success, `-i`
//! when argument `i` is illegal, positive for numerical failure. A call with
//! `lwork == -1` only writes the optimal workspace size to `work[0]`.

use crate::types::lapack_int;
use std::os::raw::{c_char, c_int};

foreign_api! {
    /// Resolved LAPACK routines of a loaded library.
    pub struct LapackApi {
        fn sgesvd_(
            jobu: *const c_char,
            jobvt: *const c_char,
            m: *const lapack_int,
            n: *const lapack_int,
            a: *mut f32,
            lda: *const lapack_int,
            s: *mut f32,
            u: *mut f32,
            ldu: *const lapack_int,
            vt: *mut f32,
            ldvt: *const lapack_int,
            work: *mut f32,
            lwork: *const lapack_int,
            info: *mut lapack_int,
        );
        fn dgesvd_(
            jobu: *const c_char,
            jobvt: *const c_char,
            m: *const lapack_int,
            n: *const lapack_int,
            a: *mut f64,
            lda: *const lapack_int,
            s: *mut f64,
            u: *mut f64,
            ldu: *const lapack_int,
            vt: *mut f64,
            ldvt: *const lapack_int,
            work: *mut f64,
            lwork: *const lapack_int,
            info: *mut lapack_int,
        );

        // LAPACKE C interface; `matrix_layout` takes the CBLAS order codes.
        fn LAPACKE_sgesvd(
            matrix_layout: c_int,
            jobu: c_char,
            jobvt: c_char,
            m: lapack_int,
            n: lapack_int,
            a: *mut f32,
            lda: lapack_int,
            s: *mut f32,
            u: *mut f32,
            ldu: lapack_int,
            vt: *mut f32,
            ldvt: lapack_int,
            superb: *mut f32,
        ) -> lapack_int;
        fn LAPACKE_dgesvd(
            matrix_layout: c_int,
            jobu: c_char,
            jobvt: c_char,
            m: lapack_int,
            n: lapack_int,
            a: *mut f64,
            lda: lapack_int,
            s: *mut f64,
            u: *mut f64,
            ldu: lapack_int,
            vt: *mut f64,
            ldvt: lapack_int,
            superb: *mut f64,
        ) -> lapack_int;
    }
}
