//! CBLAS entry points, including the Accelerate and OpenBLAS extensions.
//!
//! Complex routines take `alpha`/`beta` and arrays as pointers to interleaved
//! `(real, imag)` pairs (see [`Complex32`] and [`Complex64`]). Index routines return
//! a 0-based position; OpenBLAS declares them as `size_t`, of which only the low
//! 32 bits are read here.

use crate::types::{blasint, Complex32, Complex64, Diag, Order, Side, Transpose, Uplo};
use crate::xerbla::BLASParamErrorProc;
use std::os::raw::{c_char, c_int, c_void};

foreign_api! {
    /// Resolved CBLAS routines of a loaded library.
    pub struct CblasApi {
        // Level 1
        fn cblas_isamax(n: blasint, x: *const f32, incx: blasint) -> blasint;
        fn cblas_idamax(n: blasint, x: *const f64, incx: blasint) -> blasint;
        fn cblas_icamax(n: blasint, x: *const c_void, incx: blasint) -> blasint;
        fn cblas_izamax(n: blasint, x: *const c_void, incx: blasint) -> blasint;
        fn cblas_sasum(n: blasint, x: *const f32, incx: blasint) -> f32;
        fn cblas_dasum(n: blasint, x: *const f64, incx: blasint) -> f64;
        fn cblas_scasum(n: blasint, x: *const c_void, incx: blasint) -> f32;
        fn cblas_dzasum(n: blasint, x: *const c_void, incx: blasint) -> f64;
        fn cblas_saxpy(
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            y: *mut f32,
            incy: blasint,
        );
        fn cblas_daxpy(
            n: blasint,
            alpha: f64,
            x: *const f64,
            incx: blasint,
            y: *mut f64,
            incy: blasint,
        );
        fn cblas_caxpy(
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_zaxpy(
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *mut c_void,
            incy: blasint,
        );
        fn catlas_saxpby(
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            beta: f32,
            y: *mut f32,
            incy: blasint,
        );
        fn catlas_daxpby(
            n: blasint,
            alpha: f64,
            x: *const f64,
            incx: blasint,
            beta: f64,
            y: *mut f64,
            incy: blasint,
        );
        fn catlas_caxpby(
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn catlas_zaxpby(
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_scopy(n: blasint, x: *const f32, incx: blasint, y: *mut f32, incy: blasint);
        fn cblas_dcopy(n: blasint, x: *const f64, incx: blasint, y: *mut f64, incy: blasint);
        fn cblas_ccopy(n: blasint, x: *const c_void, incx: blasint, y: *mut c_void, incy: blasint);
        fn cblas_zcopy(n: blasint, x: *const c_void, incx: blasint, y: *mut c_void, incy: blasint);
        fn cblas_sdot(
            n: blasint,
            x: *const f32,
            incx: blasint,
            y: *const f32,
            incy: blasint,
        ) -> f32;
        fn cblas_ddot(
            n: blasint,
            x: *const f64,
            incx: blasint,
            y: *const f64,
            incy: blasint,
        ) -> f64;
        fn cblas_cdotu_sub(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            dotu: *mut c_void,
        );
        fn cblas_zdotu_sub(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            dotu: *mut c_void,
        );
        fn cblas_cdotc_sub(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            dotc: *mut c_void,
        );
        fn cblas_zdotc_sub(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            dotc: *mut c_void,
        );
        fn cblas_sdsdot(
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            y: *const f32,
            incy: blasint,
        ) -> f32;
        fn cblas_dsdot(
            n: blasint,
            x: *const f32,
            incx: blasint,
            y: *const f32,
            incy: blasint,
        ) -> f64;
        fn cblas_snrm2(n: blasint, x: *const f32, incx: blasint) -> f32;
        fn cblas_dnrm2(n: blasint, x: *const f64, incx: blasint) -> f64;
        fn cblas_scnrm2(n: blasint, x: *const c_void, incx: blasint) -> f32;
        fn cblas_dznrm2(n: blasint, x: *const c_void, incx: blasint) -> f64;
        fn cblas_srot(
            n: blasint,
            x: *mut f32,
            incx: blasint,
            y: *mut f32,
            incy: blasint,
            c: f32,
            s: f32,
        );
        fn cblas_drot(
            n: blasint,
            x: *mut f64,
            incx: blasint,
            y: *mut f64,
            incy: blasint,
            c: f64,
            s: f64,
        );
        fn cblas_csrot(
            n: blasint,
            x: *mut c_void,
            incx: blasint,
            y: *mut c_void,
            incy: blasint,
            c: f32,
            s: f32,
        );
        fn cblas_zdrot(
            n: blasint,
            x: *mut c_void,
            incx: blasint,
            y: *mut c_void,
            incy: blasint,
            c: f64,
            s: f64,
        );
        fn cblas_srotg(a: *mut f32, b: *mut f32, c: *mut f32, s: *mut f32);
        fn cblas_drotg(a: *mut f64, b: *mut f64, c: *mut f64, s: *mut f64);
        fn cblas_crotg(a: *mut c_void, b: *mut c_void, c: *mut f32, s: *mut c_void);
        fn cblas_zrotg(a: *mut c_void, b: *mut c_void, c: *mut f64, s: *mut c_void);
        fn cblas_srotm(
            n: blasint,
            x: *mut f32,
            incx: blasint,
            y: *mut f32,
            incy: blasint,
            p: *const f32,
        );
        fn cblas_drotm(
            n: blasint,
            x: *mut f64,
            incx: blasint,
            y: *mut f64,
            incy: blasint,
            p: *const f64,
        );
        fn cblas_srotmg(d1: *mut f32, d2: *mut f32, b1: *mut f32, b2: f32, p: *mut f32);
        fn cblas_drotmg(d1: *mut f64, d2: *mut f64, b1: *mut f64, b2: f64, p: *mut f64);
        fn cblas_sscal(n: blasint, alpha: f32, x: *mut f32, incx: blasint);
        fn cblas_dscal(n: blasint, alpha: f64, x: *mut f64, incx: blasint);
        fn cblas_cscal(n: blasint, alpha: *const c_void, x: *mut c_void, incx: blasint);
        fn cblas_zscal(n: blasint, alpha: *const c_void, x: *mut c_void, incx: blasint);
        fn cblas_csscal(n: blasint, alpha: f32, x: *mut c_void, incx: blasint);
        fn cblas_zdscal(n: blasint, alpha: f64, x: *mut c_void, incx: blasint);
        fn catlas_sset(n: blasint, alpha: f32, x: *mut f32, incx: blasint);
        fn catlas_dset(n: blasint, alpha: f64, x: *mut f64, incx: blasint);
        fn catlas_cset(n: blasint, alpha: *const c_void, x: *mut c_void, incx: blasint);
        fn catlas_zset(n: blasint, alpha: *const c_void, x: *mut c_void, incx: blasint);
        fn cblas_sswap(n: blasint, x: *mut f32, incx: blasint, y: *mut f32, incy: blasint);
        fn cblas_dswap(n: blasint, x: *mut f64, incx: blasint, y: *mut f64, incy: blasint);
        fn cblas_cswap(n: blasint, x: *mut c_void, incx: blasint, y: *mut c_void, incy: blasint);
        fn cblas_zswap(n: blasint, x: *mut c_void, incx: blasint, y: *mut c_void, incy: blasint);

        // Level 2
        fn cblas_sgemv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            x: *const f32,
            incx: blasint,
            beta: f32,
            y: *mut f32,
            incy: blasint,
        );
        fn cblas_dgemv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            x: *const f64,
            incx: blasint,
            beta: f64,
            y: *mut f64,
            incy: blasint,
        );
        fn cblas_cgemv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_zgemv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_sgbmv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            kl: blasint,
            ku: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            x: *const f32,
            incx: blasint,
            beta: f32,
            y: *mut f32,
            incy: blasint,
        );
        fn cblas_dgbmv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            kl: blasint,
            ku: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            x: *const f64,
            incx: blasint,
            beta: f64,
            y: *mut f64,
            incy: blasint,
        );
        fn cblas_cgbmv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            kl: blasint,
            ku: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_zgbmv(
            order: Order,
            trans_a: Transpose,
            m: blasint,
            n: blasint,
            kl: blasint,
            ku: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_sger(
            order: Order,
            m: blasint,
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            y: *const f32,
            incy: blasint,
            a: *mut f32,
            lda: blasint,
        );
        fn cblas_dger(
            order: Order,
            m: blasint,
            n: blasint,
            alpha: f64,
            x: *const f64,
            incx: blasint,
            y: *const f64,
            incy: blasint,
            a: *mut f64,
            lda: blasint,
        );
        fn cblas_cgerc(
            order: Order,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_zgerc(
            order: Order,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_cgeru(
            order: Order,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_zgeru(
            order: Order,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_chbmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_zhbmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_chemv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_zhemv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_cher(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            x: *const c_void,
            incx: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_zher(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            x: *const c_void,
            incx: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_cher2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_zher2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            a: *mut c_void,
            lda: blasint,
        );
        fn cblas_chpmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            ap: *const c_void,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_zhpmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            ap: *const c_void,
            x: *const c_void,
            incx: blasint,
            beta: *const c_void,
            y: *mut c_void,
            incy: blasint,
        );
        fn cblas_chpr(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            x: *const c_void,
            incx: blasint,
            ap: *mut c_void,
        );
        fn cblas_zhpr(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            x: *const c_void,
            incx: blasint,
            ap: *mut c_void,
        );
        fn cblas_chpr2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            ap: *mut c_void,
        );
        fn cblas_zhpr2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: *const c_void,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
            ap: *mut c_void,
        );
        fn cblas_ssbmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            k: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            x: *const f32,
            incx: blasint,
            beta: f32,
            y: *mut f32,
            incy: blasint,
        );
        fn cblas_dsbmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            k: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            x: *const f64,
            incx: blasint,
            beta: f64,
            y: *mut f64,
            incy: blasint,
        );
        fn cblas_sspmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            ap: *const f32,
            x: *const f32,
            incx: blasint,
            beta: f32,
            y: *mut f32,
            incy: blasint,
        );
        fn cblas_dspmv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            ap: *const f64,
            x: *const f64,
            incx: blasint,
            beta: f64,
            y: *mut f64,
            incy: blasint,
        );
        fn cblas_sspr(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            ap: *mut f32,
        );
        fn cblas_dspr(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            x: *const f64,
            incx: blasint,
            ap: *mut f64,
        );
        fn cblas_sspr2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            y: *const f32,
            incy: blasint,
            ap: *mut f32,
        );
        fn cblas_dspr2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            x: *const f64,
            incx: blasint,
            y: *const f64,
            incy: blasint,
            ap: *mut f64,
        );
        fn cblas_ssymv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            x: *const f32,
            incx: blasint,
            beta: f32,
            y: *mut f32,
            incy: blasint,
        );
        fn cblas_dsymv(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            x: *const f64,
            incx: blasint,
            beta: f64,
            y: *mut f64,
            incy: blasint,
        );
        fn cblas_ssyr(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            a: *mut f32,
            lda: blasint,
        );
        fn cblas_dsyr(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            x: *const f64,
            incx: blasint,
            a: *mut f64,
            lda: blasint,
        );
        fn cblas_ssyr2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f32,
            x: *const f32,
            incx: blasint,
            y: *const f32,
            incy: blasint,
            a: *mut f32,
            lda: blasint,
        );
        fn cblas_dsyr2(
            order: Order,
            uplo: Uplo,
            n: blasint,
            alpha: f64,
            x: *const f64,
            incx: blasint,
            y: *const f64,
            incy: blasint,
            a: *mut f64,
            lda: blasint,
        );
        fn cblas_stbmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const f32,
            lda: blasint,
            x: *mut f32,
            incx: blasint,
        );
        fn cblas_dtbmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const f64,
            lda: blasint,
            x: *mut f64,
            incx: blasint,
        );
        fn cblas_ctbmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_ztbmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_stbsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const f32,
            lda: blasint,
            x: *mut f32,
            incx: blasint,
        );
        fn cblas_dtbsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const f64,
            lda: blasint,
            x: *mut f64,
            incx: blasint,
        );
        fn cblas_ctbsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_ztbsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            k: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_stpmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const f32,
            x: *mut f32,
            incx: blasint,
        );
        fn cblas_dtpmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const f64,
            x: *mut f64,
            incx: blasint,
        );
        fn cblas_ctpmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const c_void,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_ztpmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const c_void,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_stpsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const f32,
            x: *mut f32,
            incx: blasint,
        );
        fn cblas_dtpsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const f64,
            x: *mut f64,
            incx: blasint,
        );
        fn cblas_ctpsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const c_void,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_ztpsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            ap: *const c_void,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_strmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const f32,
            lda: blasint,
            x: *mut f32,
            incx: blasint,
        );
        fn cblas_dtrmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const f64,
            lda: blasint,
            x: *mut f64,
            incx: blasint,
        );
        fn cblas_ctrmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_ztrmv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_strsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const f32,
            lda: blasint,
            x: *mut f32,
            incx: blasint,
        );
        fn cblas_dtrsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const f64,
            lda: blasint,
            x: *mut f64,
            incx: blasint,
        );
        fn cblas_ctrsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );
        fn cblas_ztrsv(
            order: Order,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            n: blasint,
            a: *const c_void,
            lda: blasint,
            x: *mut c_void,
            incx: blasint,
        );

        // Level 3
        fn cblas_sgemm(
            order: Order,
            trans_a: Transpose,
            trans_b: Transpose,
            m: blasint,
            n: blasint,
            k: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            b: *const f32,
            ldb: blasint,
            beta: f32,
            c: *mut f32,
            ldc: blasint,
        );
        fn cblas_dgemm(
            order: Order,
            trans_a: Transpose,
            trans_b: Transpose,
            m: blasint,
            n: blasint,
            k: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            b: *const f64,
            ldb: blasint,
            beta: f64,
            c: *mut f64,
            ldc: blasint,
        );
        fn cblas_cgemm(
            order: Order,
            trans_a: Transpose,
            trans_b: Transpose,
            m: blasint,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_zgemm(
            order: Order,
            trans_a: Transpose,
            trans_b: Transpose,
            m: blasint,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_chemm(
            order: Order,
            side: Side,
            uplo: Uplo,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_zhemm(
            order: Order,
            side: Side,
            uplo: Uplo,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_cherk(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: f32,
            a: *const c_void,
            lda: blasint,
            beta: f32,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_zherk(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: f64,
            a: *const c_void,
            lda: blasint,
            beta: f64,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_cher2k(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: f32,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_zher2k(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: f64,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_ssymm(
            order: Order,
            side: Side,
            uplo: Uplo,
            m: blasint,
            n: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            b: *const f32,
            ldb: blasint,
            beta: f32,
            c: *mut f32,
            ldc: blasint,
        );
        fn cblas_dsymm(
            order: Order,
            side: Side,
            uplo: Uplo,
            m: blasint,
            n: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            b: *const f64,
            ldb: blasint,
            beta: f64,
            c: *mut f64,
            ldc: blasint,
        );
        fn cblas_csymm(
            order: Order,
            side: Side,
            uplo: Uplo,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_zsymm(
            order: Order,
            side: Side,
            uplo: Uplo,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_ssyrk(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            beta: f32,
            c: *mut f32,
            ldc: blasint,
        );
        fn cblas_dsyrk(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            beta: f64,
            c: *mut f64,
            ldc: blasint,
        );
        fn cblas_csyrk(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_zsyrk(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_ssyr2k(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            b: *const f32,
            ldb: blasint,
            beta: f32,
            c: *mut f32,
            ldc: blasint,
        );
        fn cblas_dsyr2k(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            b: *const f64,
            ldb: blasint,
            beta: f64,
            c: *mut f64,
            ldc: blasint,
        );
        fn cblas_csyr2k(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_zsyr2k(
            order: Order,
            uplo: Uplo,
            trans: Transpose,
            n: blasint,
            k: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *const c_void,
            ldb: blasint,
            beta: *const c_void,
            c: *mut c_void,
            ldc: blasint,
        );
        fn cblas_strmm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            b: *mut f32,
            ldb: blasint,
        );
        fn cblas_dtrmm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            b: *mut f64,
            ldb: blasint,
        );
        fn cblas_ctrmm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *mut c_void,
            ldb: blasint,
        );
        fn cblas_ztrmm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *mut c_void,
            ldb: blasint,
        );
        fn cblas_strsm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            b: *mut f32,
            ldb: blasint,
        );
        fn cblas_dtrsm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            b: *mut f64,
            ldb: blasint,
        );
        fn cblas_ctrsm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *mut c_void,
            ldb: blasint,
        );
        fn cblas_ztrsm(
            order: Order,
            side: Side,
            uplo: Uplo,
            trans_a: Transpose,
            diag: Diag,
            m: blasint,
            n: blasint,
            alpha: *const c_void,
            a: *const c_void,
            lda: blasint,
            b: *mut c_void,
            ldb: blasint,
        );

        // Accelerate extensions
        fn appleblas_sgeadd(
            order: Order,
            trans_a: Transpose,
            trans_b: Transpose,
            m: blasint,
            n: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            beta: f32,
            b: *const f32,
            ldb: blasint,
            c: *mut f32,
            ldc: blasint,
        );
        fn appleblas_dgeadd(
            order: Order,
            trans_a: Transpose,
            trans_b: Transpose,
            m: blasint,
            n: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            beta: f64,
            b: *const f64,
            ldb: blasint,
            c: *mut f64,
            ldc: blasint,
        );
        fn SetBLASParamErrorProc(error_proc: Option<BLASParamErrorProc>);

        // OpenBLAS extensions
        fn openblas_set_num_threads(num_threads: c_int);
        fn openblas_get_num_threads() -> c_int;
        fn openblas_get_num_procs() -> c_int;
        fn openblas_get_config() -> *mut c_char;
        fn openblas_get_corename() -> *mut c_char;
        fn openblas_get_parallel() -> c_int;
        fn cblas_isamin(n: blasint, x: *const f32, incx: blasint) -> blasint;
        fn cblas_idamin(n: blasint, x: *const f64, incx: blasint) -> blasint;
        fn cblas_icamin(n: blasint, x: *const c_void, incx: blasint) -> blasint;
        fn cblas_izamin(n: blasint, x: *const c_void, incx: blasint) -> blasint;
        fn cblas_cdotu(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
        ) -> Complex32;
        fn cblas_zdotu(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
        ) -> Complex64;
        fn cblas_cdotc(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
        ) -> Complex32;
        fn cblas_zdotc(
            n: blasint,
            x: *const c_void,
            incx: blasint,
            y: *const c_void,
            incy: blasint,
        ) -> Complex64;
        fn cblas_somatcopy(
            order: Order,
            trans: Transpose,
            rows: blasint,
            cols: blasint,
            alpha: f32,
            a: *const f32,
            lda: blasint,
            b: *mut f32,
            ldb: blasint,
        );
        fn cblas_domatcopy(
            order: Order,
            trans: Transpose,
            rows: blasint,
            cols: blasint,
            alpha: f64,
            a: *const f64,
            lda: blasint,
            b: *mut f64,
            ldb: blasint,
        );
        fn cblas_comatcopy(
            order: Order,
            trans: Transpose,
            rows: blasint,
            cols: blasint,
            alpha: *const f32,
            a: *const f32,
            lda: blasint,
            b: *mut f32,
            ldb: blasint,
        );
        fn cblas_zomatcopy(
            order: Order,
            trans: Transpose,
            rows: blasint,
            cols: blasint,
            alpha: *const f64,
            a: *const f64,
            lda: blasint,
            b: *mut f64,
            ldb: blasint,
        );

    }
}
