//! Error types for the bindings and the checked calling layer.

use crate::xerbla::ParamError;
use thiserror::Error;

/// Result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading the native library or validating a call.
#[derive(Debug, Error)]
pub enum Error {
    /// A routine argument was rejected before reaching the native kernel.
    ///
    /// The installed parameter-error handler has already been notified.
    #[error("{reason}: {param}")]
    IllegalParameter { reason: String, param: ParamError },

    /// An integer or character does not name a variant of a CBLAS/LAPACK enum.
    #[error("unknown {kind} code {value}")]
    UnknownCode { kind: &'static str, value: i32 },

    /// None of the candidate shared libraries could be opened.
    #[error("no usable {kind} library found (tried: {tried})")]
    LibraryNotFound { kind: &'static str, tried: String },

    /// The factory was asked for an API whose library was never loaded.
    #[error("{0} library not loaded")]
    NotLoaded(&'static str),

    /// The loaded library does not export the requested routine.
    #[error("symbol {0} is not exported by the loaded library")]
    MissingSymbol(&'static str),

    /// The native library returned an index outside the vector it was given.
    #[error("{routine} returned index {index} outside 0..{n}")]
    IndexOutOfRange { routine: String, index: i32, n: usize },

    /// The LAPACK workspace-size query failed, or LAPACKE could not allocate its
    /// work buffers.
    #[error("{routine}: workspace query failed with info = {info}")]
    WorkspaceQuery { routine: String, info: i32 },
}

impl Error {
    /// Returns the parameter report for [`Error::IllegalParameter`].
    pub fn param_error(&self) -> Option<&ParamError> {
        match self {
            Error::IllegalParameter { param, .. } => Some(param),
            _ => None,
        }
    }
}
