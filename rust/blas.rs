//! Checked calls into CBLAS.
//!
//! [`Blas`] takes slices together with the usual BLAS `offset` / `increment` /
//! `leading dimension` arguments, validates them against the slice lengths, and
//! forwards to the resolved native routine for the element type:
//!
//! - [`BlasElement`]: `f32`, `f64`, [`Complex32`], [`Complex64`]
//! - [`RealElement`]: `f32`, `f64` (dot, rotations)
//! - [`ComplexElement`]: [`Complex32`], [`Complex64`] (unconjugated and conjugated dot)
//!
//! Index results are 0-based.
//!
//! # Example
//!
//! ```no_run
//! use openblas_ffi::{OpenBlasFactory, Order, Transpose};
//!
//! let factory = OpenBlasFactory::new();
//! let blas = factory.blas()?;
//!
//! // C := A * B for 2x2 row-major matrices.
//! let a = [1.0f64, 2.0, 3.0, 4.0];
//! let b = [5.0f64, 6.0, 7.0, 8.0];
//! let mut c = [0.0f64; 4];
//! blas.gemm(
//!     Order::RowMajor, Transpose::NoTrans, Transpose::NoTrans,
//!     2, 2, 2,
//!     1.0, &a, 0, 2,
//!     &b, 0, 2,
//!     0.0, &mut c, 0, 2,
//! )?;
//! assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
//! # Ok::<(), openblas_ffi::Error>(())
//! ```

#![allow(clippy::too_many_arguments)]

use crate::check::{stored_dims, Check};
use crate::error::{Error, Result};
use crate::sys::CblasApi;
use crate::types::{blasint, Complex32, Complex64, Diag, Order, Parallel, Side, Transpose, Uplo};
use std::ffi::CStr;
use std::os::raw::c_char;

/// Resolved entry point or [`Error::MissingSymbol`].
macro_rules! symbol {
    ($api:expr, $name:ident) => {
        $api.$name.ok_or(Error::MissingSymbol(stringify!($name)))?
    };
}

// region: Element traits

// Sealed trait pattern to prevent external implementations
mod private {
    use std::os::raw::c_void;

    pub trait Sealed: Sized {
        /// How `alpha`/`beta` cross the C boundary.
        type Scalar;
        /// How the `omatcopy` scale crosses the C boundary.
        type MatScalar;
        fn scalar(value: &Self) -> Self::Scalar;
        fn mat_scalar(value: &Self) -> Self::MatScalar;
    }

    macro_rules! by_value {
        ($($t:ty),*) => {$(
            impl Sealed for $t {
                type Scalar = $t;
                type MatScalar = $t;
                fn scalar(value: &Self) -> $t {
                    *value
                }
                fn mat_scalar(value: &Self) -> $t {
                    *value
                }
            }
        )*};
    }

    macro_rules! by_pointer {
        ($($t:ty => $real:ty),*) => {$(
            impl Sealed for $t {
                type Scalar = *const c_void;
                type MatScalar = *const $real;
                fn scalar(value: &Self) -> *const c_void {
                    (value as *const Self).cast()
                }
                fn mat_scalar(value: &Self) -> *const $real {
                    (value as *const Self).cast()
                }
            }
        )*};
    }

    by_value!(f32, f64);
    by_pointer!(super::Complex32 => f32, super::Complex64 => f64);
}

/// Element types with a CBLAS routine family.
///
/// This trait is sealed - users cannot implement it for their own types. The raw
/// methods take pointers already validated by [`Blas`].
pub trait BlasElement: private::Sealed + Copy + Default + Send + Sync + 'static {
    /// Type of norms and absolute sums.
    type Real: Copy + Default;

    /// BLAS type prefix: `s`, `d`, `c` or `z`.
    const PREFIX: &'static str;

    #[doc(hidden)]
    unsafe fn scal(api: &CblasApi, n: blasint, alpha: Self, x: *mut Self, incx: blasint)
        -> Result<()>;
    #[doc(hidden)]
    unsafe fn axpy(
        api: &CblasApi,
        n: blasint,
        alpha: Self,
        x: *const Self,
        incx: blasint,
        y: *mut Self,
        incy: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn asum(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<Self::Real>;
    #[doc(hidden)]
    unsafe fn nrm2(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<Self::Real>;
    #[doc(hidden)]
    unsafe fn iamax(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<blasint>;
    #[doc(hidden)]
    unsafe fn iamin(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<blasint>;
    #[doc(hidden)]
    unsafe fn copy(
        api: &CblasApi,
        n: blasint,
        x: *const Self,
        incx: blasint,
        y: *mut Self,
        incy: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn swap(
        api: &CblasApi,
        n: blasint,
        x: *mut Self,
        incx: blasint,
        y: *mut Self,
        incy: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn gemv(
        api: &CblasApi,
        order: Order,
        trans: Transpose,
        m: blasint,
        n: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        x: *const Self,
        incx: blasint,
        beta: Self,
        y: *mut Self,
        incy: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn gemm(
        api: &CblasApi,
        order: Order,
        trans_a: Transpose,
        trans_b: Transpose,
        m: blasint,
        n: blasint,
        k: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        b: *const Self,
        ldb: blasint,
        beta: Self,
        c: *mut Self,
        ldc: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn symm(
        api: &CblasApi,
        order: Order,
        side: Side,
        uplo: Uplo,
        m: blasint,
        n: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        b: *const Self,
        ldb: blasint,
        beta: Self,
        c: *mut Self,
        ldc: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn syrk(
        api: &CblasApi,
        order: Order,
        uplo: Uplo,
        trans: Transpose,
        n: blasint,
        k: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        beta: Self,
        c: *mut Self,
        ldc: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn syr2k(
        api: &CblasApi,
        order: Order,
        uplo: Uplo,
        trans: Transpose,
        n: blasint,
        k: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        b: *const Self,
        ldb: blasint,
        beta: Self,
        c: *mut Self,
        ldc: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn trmm(
        api: &CblasApi,
        order: Order,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: blasint,
        n: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        b: *mut Self,
        ldb: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn trsm(
        api: &CblasApi,
        order: Order,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: blasint,
        n: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        b: *mut Self,
        ldb: blasint,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn omatcopy(
        api: &CblasApi,
        order: Order,
        trans: Transpose,
        rows: blasint,
        cols: blasint,
        alpha: Self,
        a: *const Self,
        lda: blasint,
        b: *mut Self,
        ldb: blasint,
    ) -> Result<()>;
}

/// Real element types: dot product and plane rotations.
pub trait RealElement: BlasElement<Real = Self> {
    #[doc(hidden)]
    unsafe fn dot(
        api: &CblasApi,
        n: blasint,
        x: *const Self,
        incx: blasint,
        y: *const Self,
        incy: blasint,
    ) -> Result<Self>;
    #[doc(hidden)]
    unsafe fn rotg(api: &CblasApi, a: *mut Self, b: *mut Self, c: *mut Self, s: *mut Self)
        -> Result<()>;
    #[doc(hidden)]
    unsafe fn rot(
        api: &CblasApi,
        n: blasint,
        x: *mut Self,
        incx: blasint,
        y: *mut Self,
        incy: blasint,
        c: Self,
        s: Self,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn rotm(
        api: &CblasApi,
        n: blasint,
        x: *mut Self,
        incx: blasint,
        y: *mut Self,
        incy: blasint,
        p: *const Self,
    ) -> Result<()>;
    #[doc(hidden)]
    unsafe fn rotmg(
        api: &CblasApi,
        d1: *mut Self,
        d2: *mut Self,
        b1: *mut Self,
        b2: Self,
        p: *mut Self,
    ) -> Result<()>;
}

/// Complex element types: unconjugated and conjugated dot products.
pub trait ComplexElement: BlasElement {
    #[doc(hidden)]
    unsafe fn dotu(
        api: &CblasApi,
        n: blasint,
        x: *const Self,
        incx: blasint,
        y: *const Self,
        incy: blasint,
    ) -> Result<Self>;
    #[doc(hidden)]
    unsafe fn dotc(
        api: &CblasApi,
        n: blasint,
        x: *const Self,
        incx: blasint,
        y: *const Self,
        incy: blasint,
    ) -> Result<Self>;
}

macro_rules! blas_element {
    (
        $t:ty, $real:ty, $prefix:literal {
            scal: $scal:ident, axpy: $axpy:ident, asum: $asum:ident, nrm2: $nrm2:ident,
            iamax: $iamax:ident, iamin: $iamin:ident, copy: $copy:ident, swap: $swap:ident,
            gemv: $gemv:ident, gemm: $gemm:ident, symm: $symm:ident, syrk: $syrk:ident,
            syr2k: $syr2k:ident, trmm: $trmm:ident, trsm: $trsm:ident, omatcopy: $omatcopy:ident $(,)?
        }
    ) => {
        impl BlasElement for $t {
            type Real = $real;
            const PREFIX: &'static str = $prefix;

            unsafe fn scal(
                api: &CblasApi,
                n: blasint,
                alpha: Self,
                x: *mut Self,
                incx: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $scal);
                f(n, Self::scalar(&alpha), x.cast(), incx);
                Ok(())
            }

            unsafe fn axpy(
                api: &CblasApi,
                n: blasint,
                alpha: Self,
                x: *const Self,
                incx: blasint,
                y: *mut Self,
                incy: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $axpy);
                f(n, Self::scalar(&alpha), x.cast(), incx, y.cast(), incy);
                Ok(())
            }

            unsafe fn asum(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<$real> {
                let f = symbol!(api, $asum);
                Ok(f(n, x.cast(), incx))
            }

            unsafe fn nrm2(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<$real> {
                let f = symbol!(api, $nrm2);
                Ok(f(n, x.cast(), incx))
            }

            unsafe fn iamax(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<blasint> {
                let f = symbol!(api, $iamax);
                Ok(f(n, x.cast(), incx))
            }

            unsafe fn iamin(api: &CblasApi, n: blasint, x: *const Self, incx: blasint) -> Result<blasint> {
                let f = symbol!(api, $iamin);
                Ok(f(n, x.cast(), incx))
            }

            unsafe fn copy(
                api: &CblasApi,
                n: blasint,
                x: *const Self,
                incx: blasint,
                y: *mut Self,
                incy: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $copy);
                f(n, x.cast(), incx, y.cast(), incy);
                Ok(())
            }

            unsafe fn swap(
                api: &CblasApi,
                n: blasint,
                x: *mut Self,
                incx: blasint,
                y: *mut Self,
                incy: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $swap);
                f(n, x.cast(), incx, y.cast(), incy);
                Ok(())
            }

            unsafe fn gemv(
                api: &CblasApi,
                order: Order,
                trans: Transpose,
                m: blasint,
                n: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                x: *const Self,
                incx: blasint,
                beta: Self,
                y: *mut Self,
                incy: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $gemv);
                f(
                    order,
                    trans,
                    m,
                    n,
                    Self::scalar(&alpha),
                    a.cast(),
                    lda,
                    x.cast(),
                    incx,
                    Self::scalar(&beta),
                    y.cast(),
                    incy,
                );
                Ok(())
            }

            unsafe fn gemm(
                api: &CblasApi,
                order: Order,
                trans_a: Transpose,
                trans_b: Transpose,
                m: blasint,
                n: blasint,
                k: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                b: *const Self,
                ldb: blasint,
                beta: Self,
                c: *mut Self,
                ldc: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $gemm);
                f(
                    order,
                    trans_a,
                    trans_b,
                    m,
                    n,
                    k,
                    Self::scalar(&alpha),
                    a.cast(),
                    lda,
                    b.cast(),
                    ldb,
                    Self::scalar(&beta),
                    c.cast(),
                    ldc,
                );
                Ok(())
            }

            unsafe fn symm(
                api: &CblasApi,
                order: Order,
                side: Side,
                uplo: Uplo,
                m: blasint,
                n: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                b: *const Self,
                ldb: blasint,
                beta: Self,
                c: *mut Self,
                ldc: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $symm);
                f(
                    order,
                    side,
                    uplo,
                    m,
                    n,
                    Self::scalar(&alpha),
                    a.cast(),
                    lda,
                    b.cast(),
                    ldb,
                    Self::scalar(&beta),
                    c.cast(),
                    ldc,
                );
                Ok(())
            }

            unsafe fn syrk(
                api: &CblasApi,
                order: Order,
                uplo: Uplo,
                trans: Transpose,
                n: blasint,
                k: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                beta: Self,
                c: *mut Self,
                ldc: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $syrk);
                f(
                    order,
                    uplo,
                    trans,
                    n,
                    k,
                    Self::scalar(&alpha),
                    a.cast(),
                    lda,
                    Self::scalar(&beta),
                    c.cast(),
                    ldc,
                );
                Ok(())
            }

            unsafe fn syr2k(
                api: &CblasApi,
                order: Order,
                uplo: Uplo,
                trans: Transpose,
                n: blasint,
                k: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                b: *const Self,
                ldb: blasint,
                beta: Self,
                c: *mut Self,
                ldc: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $syr2k);
                f(
                    order,
                    uplo,
                    trans,
                    n,
                    k,
                    Self::scalar(&alpha),
                    a.cast(),
                    lda,
                    b.cast(),
                    ldb,
                    Self::scalar(&beta),
                    c.cast(),
                    ldc,
                );
                Ok(())
            }

            unsafe fn trmm(
                api: &CblasApi,
                order: Order,
                side: Side,
                uplo: Uplo,
                trans: Transpose,
                diag: Diag,
                m: blasint,
                n: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                b: *mut Self,
                ldb: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $trmm);
                f(order, side, uplo, trans, diag, m, n, Self::scalar(&alpha), a.cast(), lda, b.cast(), ldb);
                Ok(())
            }

            unsafe fn trsm(
                api: &CblasApi,
                order: Order,
                side: Side,
                uplo: Uplo,
                trans: Transpose,
                diag: Diag,
                m: blasint,
                n: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                b: *mut Self,
                ldb: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $trsm);
                f(order, side, uplo, trans, diag, m, n, Self::scalar(&alpha), a.cast(), lda, b.cast(), ldb);
                Ok(())
            }

            unsafe fn omatcopy(
                api: &CblasApi,
                order: Order,
                trans: Transpose,
                rows: blasint,
                cols: blasint,
                alpha: Self,
                a: *const Self,
                lda: blasint,
                b: *mut Self,
                ldb: blasint,
            ) -> Result<()> {
                let f = symbol!(api, $omatcopy);
                f(order, trans, rows, cols, Self::mat_scalar(&alpha), a.cast(), lda, b.cast(), ldb);
                Ok(())
            }
        }
    };
}

blas_element!(f32, f32, "s" {
    scal: cblas_sscal, axpy: cblas_saxpy, asum: cblas_sasum, nrm2: cblas_snrm2,
    iamax: cblas_isamax, iamin: cblas_isamin, copy: cblas_scopy, swap: cblas_sswap,
    gemv: cblas_sgemv, gemm: cblas_sgemm, symm: cblas_ssymm, syrk: cblas_ssyrk,
    syr2k: cblas_ssyr2k, trmm: cblas_strmm, trsm: cblas_strsm, omatcopy: cblas_somatcopy,
});
blas_element!(f64, f64, "d" {
    scal: cblas_dscal, axpy: cblas_daxpy, asum: cblas_dasum, nrm2: cblas_dnrm2,
    iamax: cblas_idamax, iamin: cblas_idamin, copy: cblas_dcopy, swap: cblas_dswap,
    gemv: cblas_dgemv, gemm: cblas_dgemm, symm: cblas_dsymm, syrk: cblas_dsyrk,
    syr2k: cblas_dsyr2k, trmm: cblas_dtrmm, trsm: cblas_dtrsm, omatcopy: cblas_domatcopy,
});
blas_element!(Complex32, f32, "c" {
    scal: cblas_cscal, axpy: cblas_caxpy, asum: cblas_scasum, nrm2: cblas_scnrm2,
    iamax: cblas_icamax, iamin: cblas_icamin, copy: cblas_ccopy, swap: cblas_cswap,
    gemv: cblas_cgemv, gemm: cblas_cgemm, symm: cblas_csymm, syrk: cblas_csyrk,
    syr2k: cblas_csyr2k, trmm: cblas_ctrmm, trsm: cblas_ctrsm, omatcopy: cblas_comatcopy,
});
blas_element!(Complex64, f64, "z" {
    scal: cblas_zscal, axpy: cblas_zaxpy, asum: cblas_dzasum, nrm2: cblas_dznrm2,
    iamax: cblas_izamax, iamin: cblas_izamin, copy: cblas_zcopy, swap: cblas_zswap,
    gemv: cblas_zgemv, gemm: cblas_zgemm, symm: cblas_zsymm, syrk: cblas_zsyrk,
    syr2k: cblas_zsyr2k, trmm: cblas_ztrmm, trsm: cblas_ztrsm, omatcopy: cblas_zomatcopy,
});

macro_rules! real_element {
    ($t:ty { dot: $dot:ident, rotg: $rotg:ident, rot: $rot:ident, rotm: $rotm:ident, rotmg: $rotmg:ident }) => {
        impl RealElement for $t {
            unsafe fn dot(
                api: &CblasApi,
                n: blasint,
                x: *const Self,
                incx: blasint,
                y: *const Self,
                incy: blasint,
            ) -> Result<Self> {
                let f = symbol!(api, $dot);
                Ok(f(n, x, incx, y, incy))
            }

            unsafe fn rotg(
                api: &CblasApi,
                a: *mut Self,
                b: *mut Self,
                c: *mut Self,
                s: *mut Self,
            ) -> Result<()> {
                let f = symbol!(api, $rotg);
                f(a, b, c, s);
                Ok(())
            }

            unsafe fn rot(
                api: &CblasApi,
                n: blasint,
                x: *mut Self,
                incx: blasint,
                y: *mut Self,
                incy: blasint,
                c: Self,
                s: Self,
            ) -> Result<()> {
                let f = symbol!(api, $rot);
                f(n, x, incx, y, incy, c, s);
                Ok(())
            }

            unsafe fn rotm(
                api: &CblasApi,
                n: blasint,
                x: *mut Self,
                incx: blasint,
                y: *mut Self,
                incy: blasint,
                p: *const Self,
            ) -> Result<()> {
                let f = symbol!(api, $rotm);
                f(n, x, incx, y, incy, p);
                Ok(())
            }

            unsafe fn rotmg(
                api: &CblasApi,
                d1: *mut Self,
                d2: *mut Self,
                b1: *mut Self,
                b2: Self,
                p: *mut Self,
            ) -> Result<()> {
                let f = symbol!(api, $rotmg);
                f(d1, d2, b1, b2, p);
                Ok(())
            }
        }
    };
}

real_element!(f32 { dot: cblas_sdot, rotg: cblas_srotg, rot: cblas_srot, rotm: cblas_srotm, rotmg: cblas_srotmg });
real_element!(f64 { dot: cblas_ddot, rotg: cblas_drotg, rot: cblas_drot, rotm: cblas_drotm, rotmg: cblas_drotmg });

macro_rules! complex_element {
    ($t:ty { dotu: ($dotu_sub:ident, $dotu:ident), dotc: ($dotc_sub:ident, $dotc:ident) }) => {
        impl ComplexElement for $t {
            unsafe fn dotu(
                api: &CblasApi,
                n: blasint,
                x: *const Self,
                incx: blasint,
                y: *const Self,
                incy: blasint,
            ) -> Result<Self> {
                // The `_sub` form avoids returning a struct by value across the ABI.
                if let Some(f) = api.$dotu_sub {
                    let mut result = Self::default();
                    f(n, x.cast(), incx, y.cast(), incy, (&mut result as *mut Self).cast());
                    return Ok(result);
                }
                let f = symbol!(api, $dotu);
                Ok(f(n, x.cast(), incx, y.cast(), incy))
            }

            unsafe fn dotc(
                api: &CblasApi,
                n: blasint,
                x: *const Self,
                incx: blasint,
                y: *const Self,
                incy: blasint,
            ) -> Result<Self> {
                if let Some(f) = api.$dotc_sub {
                    let mut result = Self::default();
                    f(n, x.cast(), incx, y.cast(), incy, (&mut result as *mut Self).cast());
                    return Ok(result);
                }
                let f = symbol!(api, $dotc);
                Ok(f(n, x.cast(), incx, y.cast(), incy))
            }
        }
    };
}

complex_element!(Complex32 {
    dotu: (cblas_cdotu_sub, cblas_cdotu),
    dotc: (cblas_cdotc_sub, cblas_cdotc)
});
complex_element!(Complex64 {
    dotu: (cblas_zdotu_sub, cblas_zdotu),
    dotc: (cblas_zdotc_sub, cblas_zdotc)
});

use private::Sealed;

// endregion: Element traits

// region: Blas

/// Checked access to a resolved [`CblasApi`].
#[derive(Debug, Clone, Copy)]
pub struct Blas<'a> {
    api: &'a CblasApi,
}

fn c_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

impl<'a> Blas<'a> {
    pub fn new(api: &'a CblasApi) -> Self {
        Self { api }
    }

    /// The underlying function table.
    pub fn api(&self) -> &'a CblasApi {
        self.api
    }

    /// Number of threads OpenBLAS currently uses.
    pub fn num_threads(&self) -> Result<i32> {
        let f = symbol!(self.api, openblas_get_num_threads);
        Ok(unsafe { f() })
    }

    pub fn set_num_threads(&self, num_threads: usize) -> Result<()> {
        let num_threads = Check::new("openblas_", "set_num_threads").shape(
            "num_threads",
            1,
            num_threads,
        )?;
        let f = symbol!(self.api, openblas_set_num_threads);
        unsafe { f(num_threads) };
        Ok(())
    }

    /// Number of processors OpenBLAS detected.
    pub fn num_procs(&self) -> Result<i32> {
        let f = symbol!(self.api, openblas_get_num_procs);
        Ok(unsafe { f() })
    }

    /// Build configuration string, e.g. `OpenBLAS 0.3.26 DYNAMIC_ARCH NO_AFFINITY`.
    pub fn config(&self) -> Result<String> {
        let f = symbol!(self.api, openblas_get_config);
        Ok(c_string(unsafe { f() }))
    }

    /// Name of the kernel set selected for this CPU, e.g. `Haswell`.
    pub fn corename(&self) -> Result<String> {
        let f = symbol!(self.api, openblas_get_corename);
        Ok(c_string(unsafe { f() }))
    }

    pub fn parallel(&self) -> Result<Parallel> {
        let f = symbol!(self.api, openblas_get_parallel);
        Parallel::try_from(unsafe { f() })
    }

    /// `X := alpha * X`
    pub fn scal<T: BlasElement>(
        &self,
        n: usize,
        alpha: T,
        x: &mut [T],
        offset_x: usize,
        inc_x: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "scal");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 3, x.len(), n, offset_x, inc_x)?;

        unsafe { T::scal(self.api, n_raw, alpha, x[offset_x..].as_mut_ptr(), inc_x) }
    }

    /// `Y := alpha * X + Y`
    pub fn axpy<T: BlasElement>(
        &self,
        n: usize,
        alpha: T,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
        y: &mut [T],
        offset_y: usize,
        inc_y: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "axpy");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 3, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 5, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::axpy(
                self.api,
                n_raw,
                alpha,
                x[offset_x..].as_ptr(),
                inc_x,
                y[offset_y..].as_mut_ptr(),
                inc_y,
            )
        }
    }

    /// `X^T * Y` for real vectors.
    pub fn dot<T: RealElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
        y: &[T],
        offset_y: usize,
        inc_y: usize,
    ) -> Result<T> {
        let check = Check::new(T::PREFIX, "dot");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::dot(
                self.api,
                n_raw,
                x[offset_x..].as_ptr(),
                inc_x,
                y[offset_y..].as_ptr(),
                inc_y,
            )
        }
    }

    /// `X^T * Y` for complex vectors, without conjugation.
    pub fn dotu<T: ComplexElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
        y: &[T],
        offset_y: usize,
        inc_y: usize,
    ) -> Result<T> {
        let check = Check::new(T::PREFIX, "dotu");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::dotu(
                self.api,
                n_raw,
                x[offset_x..].as_ptr(),
                inc_x,
                y[offset_y..].as_ptr(),
                inc_y,
            )
        }
    }

    /// `X^H * Y` for complex vectors.
    pub fn dotc<T: ComplexElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
        y: &[T],
        offset_y: usize,
        inc_y: usize,
    ) -> Result<T> {
        let check = Check::new(T::PREFIX, "dotc");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::dotc(
                self.api,
                n_raw,
                x[offset_x..].as_ptr(),
                inc_x,
                y[offset_y..].as_ptr(),
                inc_y,
            )
        }
    }

    /// Sum of `|re| + |im|` over the vector.
    pub fn asum<T: BlasElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
    ) -> Result<T::Real> {
        let check = Check::new(T::PREFIX, "asum");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;

        unsafe { T::asum(self.api, n_raw, x[offset_x..].as_ptr(), inc_x) }
    }

    /// Index (0-based, relative to `offset_x`) of the element with the largest `|re| + |im|`.
    pub fn iamax<T: BlasElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
    ) -> Result<usize> {
        let check = Check::index(T::PREFIX, "amax");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;

        let index = unsafe { T::iamax(self.api, n_raw, x[offset_x..].as_ptr(), inc_x)? };
        checked_index(&check, index, n)
    }

    /// Index (0-based, relative to `offset_x`) of the element with the smallest `|re| + |im|`.
    pub fn iamin<T: BlasElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
    ) -> Result<usize> {
        let check = Check::index(T::PREFIX, "amin");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;

        let index = unsafe { T::iamin(self.api, n_raw, x[offset_x..].as_ptr(), inc_x)? };
        checked_index(&check, index, n)
    }

    /// `Y := X`
    pub fn copy<T: BlasElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
        y: &mut [T],
        offset_y: usize,
        inc_y: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "copy");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::copy(
                self.api,
                n_raw,
                x[offset_x..].as_ptr(),
                inc_x,
                y[offset_y..].as_mut_ptr(),
                inc_y,
            )
        }
    }

    /// Euclidean norm.
    pub fn nrm2<T: BlasElement>(
        &self,
        n: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
    ) -> Result<T::Real> {
        let check = Check::new(T::PREFIX, "nrm2");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;

        unsafe { T::nrm2(self.api, n_raw, x[offset_x..].as_ptr(), inc_x) }
    }

    /// Constructs a Givens rotation: on return `a` holds `r`, `b` holds `z`.
    pub fn rotg<T: RealElement>(&self, a: &mut T, b: &mut T, c: &mut T, s: &mut T) -> Result<()> {
        unsafe { T::rotg(self.api, a, b, c, s) }
    }

    /// Applies the plane rotation `(c, s)` to the pairs `(x_i, y_i)`.
    pub fn rot<T: RealElement>(
        &self,
        n: usize,
        x: &mut [T],
        offset_x: usize,
        inc_x: usize,
        y: &mut [T],
        offset_y: usize,
        inc_y: usize,
        c: T,
        s: T,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "rot");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::rot(
                self.api,
                n_raw,
                x[offset_x..].as_mut_ptr(),
                inc_x,
                y[offset_y..].as_mut_ptr(),
                inc_y,
                c,
                s,
            )
        }
    }

    /// Applies the modified Givens transformation described by `p` (flag then `H` entries).
    pub fn rotm<T: RealElement>(
        &self,
        n: usize,
        x: &mut [T],
        offset_x: usize,
        inc_x: usize,
        y: &mut [T],
        offset_y: usize,
        inc_y: usize,
        p: &[T; 5],
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "rotm");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::rotm(
                self.api,
                n_raw,
                x[offset_x..].as_mut_ptr(),
                inc_x,
                y[offset_y..].as_mut_ptr(),
                inc_y,
                p.as_ptr(),
            )
        }
    }

    /// Constructs a modified Givens transformation into `p`.
    pub fn rotmg<T: RealElement>(
        &self,
        d1: &mut T,
        d2: &mut T,
        b1: &mut T,
        b2: T,
        p: &mut [T; 5],
    ) -> Result<()> {
        unsafe { T::rotmg(self.api, d1, d2, b1, b2, p.as_mut_ptr()) }
    }

    /// `X <-> Y`
    pub fn swap<T: BlasElement>(
        &self,
        n: usize,
        x: &mut [T],
        offset_x: usize,
        inc_x: usize,
        y: &mut [T],
        offset_y: usize,
        inc_y: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "swap");
        let n_raw = check.shape("N", 1, n)?;
        let inc_x = check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

        unsafe {
            T::swap(
                self.api,
                n_raw,
                x[offset_x..].as_mut_ptr(),
                inc_x,
                y[offset_y..].as_mut_ptr(),
                inc_y,
            )
        }
    }

    /// `Y := alpha * op(A) * X + beta * Y` with `A` stored as `m` x `n`.
    pub fn gemv<T: BlasElement>(
        &self,
        order: Order,
        trans: Transpose,
        m: usize,
        n: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        x: &[T],
        offset_x: usize,
        inc_x: usize,
        beta: T,
        y: &mut [T],
        offset_y: usize,
        inc_y: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "gemv");
        let m_raw = check.shape("M", 3, m)?;
        let n_raw = check.shape("N", 4, n)?;
        let lda = check.matrix("A", 6, a.len(), order, m, n, offset_a, lda)?;
        let (len_x, len_y) = if trans.is_transposed() { (m, n) } else { (n, m) };
        let inc_x = check.vector("X", 8, x.len(), len_x, offset_x, inc_x)?;
        let inc_y = check.vector("Y", 11, y.len(), len_y, offset_y, inc_y)?;

        unsafe {
            T::gemv(
                self.api,
                order,
                trans,
                m_raw,
                n_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                x[offset_x..].as_ptr(),
                inc_x,
                beta,
                y[offset_y..].as_mut_ptr(),
                inc_y,
            )
        }
    }

    /// `C := alpha * op(A) * op(B) + beta * C` with `C` of size `m` x `n` and inner dimension `k`.
    pub fn gemm<T: BlasElement>(
        &self,
        order: Order,
        trans_a: Transpose,
        trans_b: Transpose,
        m: usize,
        n: usize,
        k: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        b: &[T],
        offset_b: usize,
        ldb: usize,
        beta: T,
        c: &mut [T],
        offset_c: usize,
        ldc: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "gemm");
        let m_raw = check.shape("M", 4, m)?;
        let n_raw = check.shape("N", 5, n)?;
        let k_raw = check.shape("K", 6, k)?;
        let (rows_a, cols_a) = stored_dims(trans_a, m, k);
        let lda = check.matrix("A", 8, a.len(), order, rows_a, cols_a, offset_a, lda)?;
        let (rows_b, cols_b) = stored_dims(trans_b, k, n);
        let ldb = check.matrix("B", 10, b.len(), order, rows_b, cols_b, offset_b, ldb)?;
        let ldc = check.matrix("C", 13, c.len(), order, m, n, offset_c, ldc)?;

        unsafe {
            T::gemm(
                self.api,
                order,
                trans_a,
                trans_b,
                m_raw,
                n_raw,
                k_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                b[offset_b..].as_ptr(),
                ldb,
                beta,
                c[offset_c..].as_mut_ptr(),
                ldc,
            )
        }
    }

    /// `C := alpha * A * B + beta * C` (`Left`) or `alpha * B * A + beta * C` (`Right`)
    /// with `A` symmetric.
    pub fn symm<T: BlasElement>(
        &self,
        order: Order,
        side: Side,
        uplo: Uplo,
        m: usize,
        n: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        b: &[T],
        offset_b: usize,
        ldb: usize,
        beta: T,
        c: &mut [T],
        offset_c: usize,
        ldc: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "symm");
        let m_raw = check.shape("M", 4, m)?;
        let n_raw = check.shape("N", 5, n)?;
        let size_a = match side {
            Side::Left => m,
            Side::Right => n,
        };
        let lda = check.matrix("A", 7, a.len(), order, size_a, size_a, offset_a, lda)?;
        let ldb = check.matrix("B", 9, b.len(), order, m, n, offset_b, ldb)?;
        let ldc = check.matrix("C", 12, c.len(), order, m, n, offset_c, ldc)?;

        unsafe {
            T::symm(
                self.api,
                order,
                side,
                uplo,
                m_raw,
                n_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                b[offset_b..].as_ptr(),
                ldb,
                beta,
                c[offset_c..].as_mut_ptr(),
                ldc,
            )
        }
    }

    /// `C := alpha * op(A) * op(A)^T + beta * C` with `C` symmetric `n` x `n`.
    pub fn syrk<T: BlasElement>(
        &self,
        order: Order,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        beta: T,
        c: &mut [T],
        offset_c: usize,
        ldc: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "syrk");
        let n_raw = check.shape("N", 4, n)?;
        let k_raw = check.shape("K", 5, k)?;
        let (rows_a, cols_a) = stored_dims(trans, n, k);
        let lda = check.matrix("A", 7, a.len(), order, rows_a, cols_a, offset_a, lda)?;
        let ldc = check.matrix("C", 10, c.len(), order, n, n, offset_c, ldc)?;

        unsafe {
            T::syrk(
                self.api,
                order,
                uplo,
                trans,
                n_raw,
                k_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                beta,
                c[offset_c..].as_mut_ptr(),
                ldc,
            )
        }
    }

    /// `C := alpha * (op(A) * op(B)^T + op(B) * op(A)^T) + beta * C`.
    pub fn syr2k<T: BlasElement>(
        &self,
        order: Order,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        b: &[T],
        offset_b: usize,
        ldb: usize,
        beta: T,
        c: &mut [T],
        offset_c: usize,
        ldc: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "syr2k");
        let n_raw = check.shape("N", 4, n)?;
        let k_raw = check.shape("K", 5, k)?;
        let (rows, cols) = stored_dims(trans, n, k);
        let lda = check.matrix("A", 7, a.len(), order, rows, cols, offset_a, lda)?;
        let ldb = check.matrix("B", 9, b.len(), order, rows, cols, offset_b, ldb)?;
        let ldc = check.matrix("C", 12, c.len(), order, n, n, offset_c, ldc)?;

        unsafe {
            T::syr2k(
                self.api,
                order,
                uplo,
                trans,
                n_raw,
                k_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                b[offset_b..].as_ptr(),
                ldb,
                beta,
                c[offset_c..].as_mut_ptr(),
                ldc,
            )
        }
    }

    /// `B := alpha * op(A) * B` (`Left`) or `alpha * B * op(A)` (`Right`) with `A` triangular.
    pub fn trmm<T: BlasElement>(
        &self,
        order: Order,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: usize,
        n: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        b: &mut [T],
        offset_b: usize,
        ldb: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "trmm");
        let (m_raw, n_raw, lda, ldb) =
            check_triangular(&check, order, side, m, n, a.len(), offset_a, lda, b.len(), offset_b, ldb)?;

        unsafe {
            T::trmm(
                self.api,
                order,
                side,
                uplo,
                trans,
                diag,
                m_raw,
                n_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                b[offset_b..].as_mut_ptr(),
                ldb,
            )
        }
    }

    /// Solves `op(A) * X = alpha * B` (`Left`) or `X * op(A) = alpha * B` (`Right`),
    /// overwriting `B` with `X`.
    pub fn trsm<T: BlasElement>(
        &self,
        order: Order,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: usize,
        n: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        b: &mut [T],
        offset_b: usize,
        ldb: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "trsm");
        let (m_raw, n_raw, lda, ldb) =
            check_triangular(&check, order, side, m, n, a.len(), offset_a, lda, b.len(), offset_b, ldb)?;

        unsafe {
            T::trsm(
                self.api,
                order,
                side,
                uplo,
                trans,
                diag,
                m_raw,
                n_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                b[offset_b..].as_mut_ptr(),
                ldb,
            )
        }
    }

    /// `B := alpha * op(A)` with `A` of size `m` x `n`; `B` is `n` x `m` when transposed.
    pub fn omatcopy<T: BlasElement>(
        &self,
        order: Order,
        trans: Transpose,
        m: usize,
        n: usize,
        alpha: T,
        a: &[T],
        offset_a: usize,
        lda: usize,
        b: &mut [T],
        offset_b: usize,
        ldb: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "omatcopy");
        let m_raw = check.shape("rows", 3, m)?;
        let n_raw = check.shape("cols", 4, n)?;
        let lda = check.matrix("A", 6, a.len(), order, m, n, offset_a, lda)?;
        let (rows_b, cols_b) = stored_dims(trans, m, n);
        let ldb = check.matrix("B", 8, b.len(), order, rows_b, cols_b, offset_b, ldb)?;

        unsafe {
            T::omatcopy(
                self.api,
                order,
                trans,
                m_raw,
                n_raw,
                alpha,
                a[offset_a..].as_ptr(),
                lda,
                b[offset_b..].as_mut_ptr(),
                ldb,
            )
        }
    }
}

/// Validates an index returned by an `i?amax`-style routine for a vector of `n` elements.
fn checked_index(check: &Check, index: blasint, n: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(index) if index < n => Ok(index),
        _ => Err(Error::IndexOutOfRange {
            routine: check.routine(),
            index,
            n,
        }),
    }
}

fn check_triangular(
    check: &Check,
    order: Order,
    side: Side,
    m: usize,
    n: usize,
    len_a: usize,
    offset_a: usize,
    lda: usize,
    len_b: usize,
    offset_b: usize,
    ldb: usize,
) -> Result<(blasint, blasint, blasint, blasint)> {
    let m_raw = check.shape("M", 6, m)?;
    let n_raw = check.shape("N", 7, n)?;
    let size_a = match side {
        Side::Left => m,
        Side::Right => n,
    };
    let lda = check.matrix("A", 9, len_a, order, size_a, size_a, offset_a, lda)?;
    let ldb = check.matrix("B", 11, len_b, order, m, n, offset_b, ldb)?;
    Ok((m_raw, n_raw, lda, ldb))
}

// endregion: Blas

/// Strided element copy for any `Copy` type, without calling into BLAS.
///
/// Validates like [`Blas::copy`].
pub fn copy_strided<T: Copy>(
    n: usize,
    x: &[T],
    offset_x: usize,
    inc_x: usize,
    y: &mut [T],
    offset_y: usize,
    inc_y: usize,
) -> Result<()> {
    let check = Check::new("", "copy");
    check.shape("N", 1, n)?;
    check.vector("X", 2, x.len(), n, offset_x, inc_x)?;
    check.vector("Y", 4, y.len(), n, offset_y, inc_y)?;

    if inc_x == 1 && inc_y == 1 {
        y[offset_y..offset_y + n].copy_from_slice(&x[offset_x..offset_x + n]);
        return Ok(());
    }
    let targets = y[offset_y..].iter_mut().step_by(inc_y);
    let sources = x[offset_x..].iter().step_by(inc_x);
    for (target, source) in targets.zip(sources).take(n) {
        *target = *source;
    }
    Ok(())
}
