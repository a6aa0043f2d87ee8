//! Process-wide parameter-error callback.
//!
//! Every routine reports an illegal argument through a single handler slot before
//! returning. The report carries the routine name, the parameter name, its 1-based
//! position in the native signature and the offending value. Once the handler
//! returns, the routine returns immediately without touching its buffers or calling
//! into the native library.
//!
//! With no handler installed, reports are logged at `error` level.
//!
//! # Example
//!
//! ```rust
//! use openblas_ffi::{set_param_error_handler, ParamError};
//!
//! fn quiet(_: &ParamError) {}
//!
//! let previous = set_param_error_handler(Some(quiet));
//! // ... calls whose argument errors should not be logged ...
//! set_param_error_handler(previous);
//! ```

use std::ffi::CStr;
use std::fmt;
use std::os::raw::{c_char, c_int};
use std::sync::{PoisonError, RwLock};

/// Description of a rejected routine argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamError {
    /// Routine name, e.g. `dgemm`.
    pub routine: String,
    /// Parameter name as it appears in the native signature, e.g. `lda`.
    pub param: String,
    /// 1-based position of the parameter in the native signature.
    pub position: i32,
    /// Offending value (or, for buffers, the number of elements required).
    pub value: i64,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parameter {} ({}) of {} had an illegal value {}",
            self.position, self.param, self.routine, self.value
        )
    }
}

/// Signature of an installable parameter-error handler.
pub type ParamErrorHandler = fn(&ParamError);

/// C signature of vecLib's `BLASParamErrorProc`.
pub type BLASParamErrorProc = unsafe extern "C" fn(
    func_name: *const c_char,
    param_name: *const c_char,
    param_pos: *const c_int,
    param_value: *const c_int,
);

static HANDLER: RwLock<Option<ParamErrorHandler>> = RwLock::new(None);

/// Installs `handler` (or restores the logging default with `None`) and returns the
/// previously installed handler.
pub fn set_param_error_handler(handler: Option<ParamErrorHandler>) -> Option<ParamErrorHandler> {
    let mut slot = HANDLER.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, handler)
}

/// Returns the currently installed handler.
pub fn param_error_handler() -> Option<ParamErrorHandler> {
    *HANDLER.read().unwrap_or_else(PoisonError::into_inner)
}

/// Delivers `error` to the installed handler.
pub(crate) fn report(error: &ParamError) {
    match param_error_handler() {
        Some(handler) => handler(error),
        None => log::error!(target: "openblas_ffi", "{}", error),
    }
}

fn lossy(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Trampoline handed to native libraries that accept a `BLASParamErrorProc`.
///
/// # Safety
///
/// String arguments must be null or NUL-terminated; integer arguments must be null
/// or point to a readable `int`.
pub unsafe extern "C" fn blas_param_error_proc(
    func_name: *const c_char,
    param_name: *const c_char,
    param_pos: *const c_int,
    param_value: *const c_int,
) {
    let error = ParamError {
        routine: lossy(func_name),
        param: lossy(param_name),
        position: param_pos.as_ref().copied().unwrap_or(0),
        value: param_value.as_ref().copied().map(i64::from).unwrap_or(0),
    };
    // A panicking handler must not unwind into native frames.
    if std::panic::catch_unwind(|| report(&error)).is_err() {
        log::error!(target: "openblas_ffi", "parameter-error handler panicked: {}", error);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Capture;
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_report_reaches_handler() {
        let capture = Capture::install();
        let error = ParamError {
            routine: "dgemm".into(),
            param: "lda".into(),
            position: 9,
            value: 0,
        };
        report(&error);
        assert_eq!(capture.only(), error);
    }

    #[test]
    fn test_set_returns_previous() {
        let _capture = Capture::install();
        fn other(_: &ParamError) {}

        let previous = set_param_error_handler(Some(other));
        assert!(previous.is_some());
        assert!(param_error_handler().is_some());
        let restored = set_param_error_handler(previous);
        assert!(restored.is_some());
    }

    #[test]
    fn test_native_trampoline() {
        let capture = Capture::install();
        let routine = CString::new("cblas_sgemv").unwrap();
        let param = CString::new("incX").unwrap();
        let position: c_int = 9;
        let value: c_int = 0;

        unsafe { blas_param_error_proc(routine.as_ptr(), param.as_ptr(), &position, &value) };

        let error = capture.only();
        assert_eq!(error.routine, "cblas_sgemv");
        assert_eq!(error.param, "incX");
        assert_eq!(error.position, 9);
        assert_eq!(error.value, 0);
    }

    #[test]
    fn test_native_trampoline_null_arguments() {
        let capture = Capture::install();
        unsafe {
            blas_param_error_proc(
                std::ptr::null(),
                std::ptr::null(),
                std::ptr::null(),
                std::ptr::null(),
            )
        };
        let error = capture.only();
        assert!(error.routine.is_empty());
        assert_eq!(error.position, 0);
    }

    #[test]
    fn test_display() {
        let error = ParamError {
            routine: "sscal".into(),
            param: "incX".into(),
            position: 4,
            value: -1,
        };
        assert_eq!(
            error.to_string(),
            "parameter 4 (incX) of sscal had an illegal value -1"
        );
    }
}
