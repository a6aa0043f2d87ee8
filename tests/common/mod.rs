#![allow(dead_code)]

use openblas_ffi::{Blas, Lapack, OpenBlasFactory};

/// Checked BLAS from the process-wide backend, or `None` when no library is installed.
pub fn blas() -> Option<Blas<'static>> {
    match OpenBlasFactory::new().blas() {
        Ok(blas) => Some(blas),
        Err(error) => {
            eprintln!("skipping: {}", error);
            None
        }
    }
}

/// Checked LAPACK from the process-wide backend, or `None` when unavailable.
pub fn lapack() -> Option<Lapack<'static>> {
    match OpenBlasFactory::new().lapack() {
        Ok(lapack) => Some(lapack),
        Err(error) => {
            eprintln!("skipping: {}", error);
            None
        }
    }
}
