//! Runtime loading of the native BLAS/LAPACK library.
//!
//! Nothing is linked at build time. The library is opened with `dlopen` (via
//! [`libloading`]) on first use, every declared symbol is resolved into the
//! [`CblasApi`] / [`LapackApi`] tables, and the result is kept for the lifetime
//! of the process.
//!
//! Candidate libraries come from [`LoaderConfig`]. Entries listed in the
//! `OPENBLAS_FFI_BLAS` and `OPENBLAS_FFI_LAPACK` environment variables (platform
//! path-list syntax) are tried before the platform defaults.

use crate::blas::Blas;
use crate::error::{Error, Result};
use crate::lapack::Lapack;
use crate::sys::{CblasApi, LapackApi};
use crate::xerbla::blas_param_error_proc;
use libloading::Library;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Environment variable with extra BLAS library candidates.
pub const BLAS_ENV: &str = "OPENBLAS_FFI_BLAS";
/// Environment variable with extra LAPACK library candidates.
pub const LAPACK_ENV: &str = "OPENBLAS_FFI_LAPACK";

#[cfg(target_os = "macos")]
const ACCELERATE: &str = "/System/Library/Frameworks/Accelerate.framework/Accelerate";

#[cfg(target_os = "macos")]
const DEFAULT_BLAS: &[&str] = &[ACCELERATE, "libopenblas.dylib"];
#[cfg(target_os = "macos")]
const DEFAULT_LAPACK: &[&str] = &[ACCELERATE];

#[cfg(windows)]
const DEFAULT_BLAS: &[&str] = &["libopenblas.dll"];
#[cfg(windows)]
const DEFAULT_LAPACK: &[&str] = &["libopenblas.dll"];

#[cfg(not(any(target_os = "macos", windows)))]
const DEFAULT_BLAS: &[&str] = &["libopenblas.so.0", "libopenblas.so"];
#[cfg(not(any(target_os = "macos", windows)))]
const DEFAULT_LAPACK: &[&str] = &["liblapack.so.3", "liblapacke.so.3"];

/// Candidate shared libraries, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Libraries that may provide CBLAS. The first one exporting `cblas_dgemm` wins.
    pub blas_libraries: Vec<PathBuf>,
    /// Libraries searched for LAPACK when the BLAS library does not export it.
    pub lapack_libraries: Vec<PathBuf>,
}

impl Default for LoaderConfig {
    /// Platform defaults, without environment overrides.
    fn default() -> Self {
        Self {
            blas_libraries: DEFAULT_BLAS.iter().map(PathBuf::from).collect(),
            lapack_libraries: DEFAULT_LAPACK.iter().map(PathBuf::from).collect(),
        }
    }
}

impl LoaderConfig {
    /// Platform defaults preceded by the entries of [`BLAS_ENV`] and [`LAPACK_ENV`].
    pub fn from_env() -> Self {
        Self::default().with_overrides(env::var_os(BLAS_ENV), env::var_os(LAPACK_ENV))
    }

    /// Prepends the entries of two path lists, as read from the environment.
    pub fn with_overrides(mut self, blas: Option<OsString>, lapack: Option<OsString>) -> Self {
        if let Some(list) = blas {
            prepend(&mut self.blas_libraries, env::split_paths(&list));
        }
        if let Some(list) = lapack {
            prepend(&mut self.lapack_libraries, env::split_paths(&list));
        }
        self
    }

    /// Tries `path` before the current BLAS candidates.
    pub fn prefer_blas(mut self, path: impl Into<PathBuf>) -> Self {
        self.blas_libraries.insert(0, path.into());
        self
    }

    /// Tries `path` before the current LAPACK candidates.
    pub fn prefer_lapack(mut self, path: impl Into<PathBuf>) -> Self {
        self.lapack_libraries.insert(0, path.into());
        self
    }

    /// Loads exactly one library, looking up LAPACK in it as well.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            blas_libraries: vec![path.into()],
            lapack_libraries: Vec::new(),
        }
    }
}

fn prepend(list: &mut Vec<PathBuf>, entries: impl Iterator<Item = PathBuf>) {
    let mut entries: Vec<PathBuf> = entries.filter(|p| !p.as_os_str().is_empty()).collect();
    entries.append(list);
    *list = entries;
}

/// A loaded native library with its resolved function tables.
#[derive(Debug)]
pub struct Backend {
    cblas: CblasApi,
    lapack: Option<LapackApi>,
    blas_path: PathBuf,
    lapack_path: Option<PathBuf>,
    // Kept last so the tables are dropped before the code they point into.
    _lapack_library: Option<Library>,
    _blas_library: Library,
}

impl Backend {
    /// Opens the first usable BLAS candidate and resolves every declared symbol.
    ///
    /// LAPACK is looked up in the BLAS library first, then in the LAPACK
    /// candidates; a backend without LAPACK is still returned. When the library
    /// accepts a `BLASParamErrorProc`, native argument errors are routed to the
    /// handler installed with [`crate::set_param_error_handler`].
    pub fn load(config: &LoaderConfig) -> Result<Self> {
        let mut tried = Vec::new();
        for path in &config.blas_libraries {
            let library = match open(path) {
                Some(library) => library,
                None => {
                    tried.push(path.display().to_string());
                    continue;
                }
            };
            // SAFETY: declared signatures follow the reference headers.
            let cblas = unsafe { CblasApi::load(&library) };
            if cblas.cblas_dgemm.is_none() {
                log::debug!(
                    target: "openblas_ffi",
                    "{} does not export cblas_dgemm, skipping",
                    path.display()
                );
                tried.push(path.display().to_string());
                continue;
            }
            log::info!(
                target: "openblas_ffi",
                "loaded BLAS from {} ({} of {} symbols)",
                path.display(),
                cblas.resolved(),
                CblasApi::SYMBOLS.len()
            );

            if let Some(set_proc) = cblas.SetBLASParamErrorProc {
                unsafe { set_proc(Some(blas_param_error_proc)) };
                log::debug!(target: "openblas_ffi", "installed BLAS parameter-error handler");
            }

            let bundled = unsafe { LapackApi::load(&library) };
            let (lapack, lapack_path, lapack_library) = if bundled.resolved() > 0 {
                (Some(bundled), Some(path.clone()), None)
            } else {
                match load_lapack(&config.lapack_libraries) {
                    Some((api, path, library)) => (Some(api), Some(path), Some(library)),
                    None => (None, None, None),
                }
            };
            match &lapack_path {
                Some(found) => log::info!(
                    target: "openblas_ffi",
                    "LAPACK routines resolved from {}",
                    found.display()
                ),
                None => log::info!(target: "openblas_ffi", "no LAPACK library available"),
            }

            return Ok(Self {
                cblas,
                lapack,
                blas_path: path.clone(),
                lapack_path,
                _lapack_library: lapack_library,
                _blas_library: library,
            });
        }
        Err(Error::LibraryNotFound {
            kind: "BLAS",
            tried: tried.join(", "),
        })
    }

    /// Checked BLAS calls.
    pub fn blas(&self) -> Blas<'_> {
        Blas::new(&self.cblas)
    }

    /// Checked LAPACK calls, if a LAPACK library was found.
    pub fn lapack(&self) -> Option<Lapack<'_>> {
        self.lapack.as_ref().map(Lapack::new)
    }

    pub fn cblas_api(&self) -> &CblasApi {
        &self.cblas
    }

    pub fn lapack_api(&self) -> Option<&LapackApi> {
        self.lapack.as_ref()
    }

    /// Path of the library providing BLAS.
    pub fn blas_path(&self) -> &Path {
        &self.blas_path
    }

    /// Path of the library providing LAPACK.
    pub fn lapack_path(&self) -> Option<&Path> {
        self.lapack_path.as_deref()
    }
}

fn open(path: &Path) -> Option<Library> {
    log::debug!(target: "openblas_ffi", "trying {}", path.display());
    // SAFETY: loading runs the library's initializers; BLAS/LAPACK builds have no
    // initialization preconditions.
    match unsafe { Library::new(path) } {
        Ok(library) => Some(library),
        Err(error) => {
            log::debug!(target: "openblas_ffi", "cannot open {}: {}", path.display(), error);
            None
        }
    }
}

fn load_lapack(candidates: &[PathBuf]) -> Option<(LapackApi, PathBuf, Library)> {
    candidates.iter().find_map(|path| {
        let library = open(path)?;
        let api = unsafe { LapackApi::load(&library) };
        if api.resolved() == 0 {
            log::debug!(
                target: "openblas_ffi",
                "{} exports no LAPACK routine, skipping",
                path.display()
            );
            return None;
        }
        Some((api, path.clone(), library))
    })
}

static BACKEND: OnceLock<Backend> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Loads the process-wide backend once; later calls return it regardless of `config`.
pub fn init(config: &LoaderConfig) -> Result<&'static Backend> {
    // Fast path: already loaded
    if let Some(backend) = BACKEND.get() {
        return Ok(backend);
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    // Double-check after acquiring lock
    if let Some(backend) = BACKEND.get() {
        return Ok(backend);
    }

    let backend = Backend::load(config)?;
    Ok(BACKEND.get_or_init(|| backend))
}

/// The process-wide backend, if [`init`] succeeded.
pub fn backend() -> Option<&'static Backend> {
    BACKEND.get()
}

/// Whether the process-wide backend has been loaded.
pub fn is_initialized() -> bool {
    BACKEND.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates() {
        let config = LoaderConfig::default();
        assert!(!config.blas_libraries.is_empty());
        assert!(!config.lapack_libraries.is_empty());
        #[cfg(target_os = "linux")]
        assert_eq!(config.blas_libraries[0], PathBuf::from("libopenblas.so.0"));
    }

    #[test]
    fn test_overrides_come_first() {
        let blas = env::join_paths(["/opt/a/libblas.so", "/opt/b/libblas.so"]).unwrap();
        let config = LoaderConfig::default().with_overrides(Some(blas), None);
        assert_eq!(config.blas_libraries[0], PathBuf::from("/opt/a/libblas.so"));
        assert_eq!(config.blas_libraries[1], PathBuf::from("/opt/b/libblas.so"));
        assert_eq!(
            config.blas_libraries.len(),
            LoaderConfig::default().blas_libraries.len() + 2
        );
        assert_eq!(config.lapack_libraries, LoaderConfig::default().lapack_libraries);
    }

    #[test]
    fn test_empty_override_entries_are_ignored() {
        let config = LoaderConfig::default().with_overrides(Some(OsString::new()), None);
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = LoaderConfig::single("/opt/libopenblas.so").prefer_lapack("/opt/liblapack.so");
        assert_eq!(config.blas_libraries, vec![PathBuf::from("/opt/libopenblas.so")]);
        assert_eq!(config.lapack_libraries, vec![PathBuf::from("/opt/liblapack.so")]);

        let config = LoaderConfig::default().prefer_blas("custom");
        assert_eq!(config.blas_libraries[0], PathBuf::from("custom"));
    }

    #[test]
    fn test_missing_library() {
        let config = LoaderConfig {
            blas_libraries: vec![PathBuf::from("/nonexistent/libnothing.so")],
            lapack_libraries: Vec::new(),
        };
        match Backend::load(&config) {
            Err(Error::LibraryNotFound { kind, tried }) => {
                assert_eq!(kind, "BLAS");
                assert!(tried.contains("libnothing"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
