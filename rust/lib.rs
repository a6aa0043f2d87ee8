//! # openblas-ffi - Checked Rust bindings for OpenBLAS, vecLib and LAPACK
//!
//! * Loads the native library at run time: nothing to link, nothing to compile.
//! * Typed function-pointer tables for the full CBLAS surface and `?gesvd`.
//! * Slice-based calls validated against offsets, increments and leading dimensions.
//! * A process-wide parameter-error handler shared by Rust-side checks and vecLib.
//! * `f32`, `f64`, [`Complex32`] and [`Complex64`] elements.
//!
//! ## Layers
//!
//! * [`sys`]: raw `extern "C"` prototypes, one `Option<fn>` per routine.
//! * [`Blas`] and [`Lapack`]: the checked calling layer.
//! * [`OpenBlasFactory`]: locates and loads the library once per process.
//!
//! Numerical work is always done by the native library. The crate itself only
//! validates arguments and, for LAPACK, converts row-major operands to the
//! column-major layout Fortran expects.
//!
//! # Example
//!
//! ```no_run
//! use openblas_ffi::OpenBlasFactory;
//!
//! let factory = OpenBlasFactory::new();
//! let blas = factory.blas()?;
//!
//! let x = [1.0f32, 2.0, 3.0];
//! let mut y = [1.0f32, 1.0, 1.0];
//!
//! // y := 2 * x + y
//! blas.axpy(3, 2.0, &x, 0, 1, &mut y, 0, 1)?;
//! assert_eq!(y, [3.0, 5.0, 7.0]);
//!
//! // Sum of magnitudes
//! assert_eq!(blas.asum(3, &y, 0, 1)?, 15.0);
//! # Ok::<(), openblas_ffi::Error>(())
//! ```
//!
//! # Errors
//!
//! A rejected argument is reported to the handler installed with
//! [`set_param_error_handler`] (or logged when none is installed), and the call
//! returns [`Error::IllegalParameter`] without touching any buffer.
//!
//! # Logging
//!
//! Library discovery and numerical warnings go through the [`log`] facade under
//! the `openblas_ffi` target.
#![allow(non_camel_case_types)]

pub mod blas;
mod check;
pub mod error;
pub mod factory;
pub mod lapack;
pub mod loader;
pub mod sys;
pub mod types;
pub mod xerbla;

pub use blas::{copy_strided, Blas, BlasElement, ComplexElement, RealElement};
pub use error::{Error, Result};
pub use factory::OpenBlasFactory;
pub use lapack::{Lapack, LapackElement, SvdJob};
pub use loader::{Backend, LoaderConfig};
pub use types::{
    blasint, lapack_int, Complex32, Complex64, Diag, Order, Parallel, Side, Transpose, Uplo,
};
pub use xerbla::{param_error_handler, set_param_error_handler, ParamError, ParamErrorHandler};
