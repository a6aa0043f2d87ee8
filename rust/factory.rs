//! Entry point handing out checked [`Blas`] and [`Lapack`] instances.

use crate::blas::Blas;
use crate::error::{Error, Result};
use crate::lapack::Lapack;
use crate::loader::{self, Backend, LoaderConfig};

/// Loads the process-wide backend on construction and hands out the checked APIs.
///
/// A failed load is not an error by itself: [`OpenBlasFactory::is_available`]
/// returns `false` and the accessors return [`Error::NotLoaded`].
#[derive(Debug, Clone, Copy)]
pub struct OpenBlasFactory {
    backend: Option<&'static Backend>,
}

impl OpenBlasFactory {
    /// Loads with the platform defaults and environment overrides.
    pub fn new() -> Self {
        Self::with_config(&LoaderConfig::from_env())
    }

    /// Loads with explicit candidates. Ignored if a backend is already loaded.
    pub fn with_config(config: &LoaderConfig) -> Self {
        let backend = match loader::init(config) {
            Ok(backend) => Some(backend),
            Err(error) => {
                log::warn!(target: "openblas_ffi", "BLAS backend unavailable: {}", error);
                None
            }
        };
        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&'static Backend> {
        self.backend
    }

    pub fn blas(&self) -> Result<Blas<'static>> {
        self.backend
            .map(Backend::blas)
            .ok_or(Error::NotLoaded("openblas"))
    }

    /// Fails with [`Error::NotLoaded`] when no library exports LAPACK.
    pub fn lapack(&self) -> Result<Lapack<'static>> {
        self.backend
            .and_then(Backend::lapack)
            .ok_or(Error::NotLoaded("lapack"))
    }
}

impl Default for OpenBlasFactory {
    fn default() -> Self {
        Self::new()
    }
}
