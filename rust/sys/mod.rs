//! Raw binding surface: one table of typed function pointers per native API.
//!
//! The tables are filled at run time by [`crate::loader`]; every entry is `None`
//! until the corresponding symbol has been resolved. Signatures follow the
//! reference `cblas.h` and the Fortran LAPACK convention: 32-bit integers for
//! dimensions and strides, enums by integer code, complex scalars and arrays as
//! untyped pointers to interleaved `(real, imag)` pairs.

#![allow(non_snake_case)]

/// Declares a table of optional native entry points.
///
/// Generates the struct, a loader resolving every entry from a
/// [`libloading::Library`], and the `SYMBOLS` name/arity table.
macro_rules! foreign_api {
    (
        $(#[$meta:meta])*
        pub struct $api:ident {
            $(
                $(#[$fmeta:meta])*
                fn $name:ident ( $( $arg:ident : $ty:ty ),* $(,)? ) $( -> $ret:ty )? ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default)]
        pub struct $api {
            $(
                $(#[$fmeta])*
                pub $name: Option<unsafe extern "C" fn( $( $arg : $ty ),* ) $( -> $ret )?>,
            )*
        }

        impl $api {
            /// Every declared symbol with its parameter count, in declaration order.
            pub const SYMBOLS: &'static [(&'static str, usize)] = &[
                $( (stringify!($name), foreign_api!(@count $( $arg )*)), )*
            ];

            /// Resolves every declared symbol that `library` exports.
            ///
            /// # Safety
            ///
            /// The exported symbols must have the declared signatures, and the
            /// returned table must not outlive `library`.
            pub unsafe fn load(library: &libloading::Library) -> Self {
                Self {
                    $(
                        $name: library
                            .get::<unsafe extern "C" fn( $( $ty ),* ) $( -> $ret )?>(
                                stringify!($name).as_bytes(),
                            )
                            .ok()
                            .map(|symbol| *symbol),
                    )*
                }
            }

            /// Names of declared symbols the table could not resolve.
            pub fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$name.is_none() {
                        missing.push(stringify!($name));
                    }
                )*
                missing
            }

            /// Number of resolved symbols.
            pub fn resolved(&self) -> usize {
                Self::SYMBOLS.len() - self.missing().len()
            }
        }

        impl std::fmt::Debug for $api {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($api))
                    .field("resolved", &self.resolved())
                    .field("declared", &Self::SYMBOLS.len())
                    .finish()
            }
        }
    };
    (@count) => { 0usize };
    (@count $head:ident $( $tail:ident )*) => { 1usize + foreign_api!(@count $( $tail )*) };
}

pub mod cblas;
pub mod lapack;

pub use cblas::CblasApi;
pub use lapack::LapackApi;

/// Parameter count of `name` according to the declaration tables.
pub fn arity(name: &str) -> Option<usize> {
    CblasApi::SYMBOLS
        .iter()
        .chain(LapackApi::SYMBOLS)
        .find(|(symbol, _)| *symbol == name)
        .map(|&(_, count)| count)
}
