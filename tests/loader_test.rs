use openblas_ffi::loader::{self, LoaderConfig};
use openblas_ffi::sys::CblasApi;
use openblas_ffi::{Error, OpenBlasFactory};

#[test]
fn test_factory_matches_backend() {
    let factory = OpenBlasFactory::new();
    assert_eq!(factory.is_available(), loader::is_initialized());

    let Some(backend) = factory.backend() else {
        assert!(matches!(factory.blas(), Err(Error::NotLoaded("openblas"))));
        assert!(matches!(factory.lapack(), Err(Error::NotLoaded("lapack"))));
        return;
    };

    assert!(std::ptr::eq(backend, loader::backend().unwrap()));
    assert!(!backend.blas_path().as_os_str().is_empty());
    assert!(backend.cblas_api().cblas_dgemm.is_some());
    assert!(backend.cblas_api().resolved() <= CblasApi::SYMBOLS.len());
    assert_eq!(backend.lapack().is_some(), factory.lapack().is_ok());
    assert_eq!(backend.lapack_api().is_some(), backend.lapack_path().is_some());
}

#[test]
fn test_init_is_idempotent() {
    let first = loader::init(&LoaderConfig::from_env());
    if first.is_err() {
        return;
    }
    // A loaded backend is returned whatever the candidates.
    let unusable = LoaderConfig::single("/nonexistent/libblas.so");
    let second = loader::init(&unusable).unwrap();
    assert!(std::ptr::eq(first.unwrap(), second));
}
