//! Scalar, enumeration and complex-record types shared by CBLAS and LAPACK.
//!
//! - [`Order`], [`Transpose`], [`Uplo`], [`Diag`], [`Side`]: CBLAS discriminants with
//!   their fixed integer codes, passed to the native routines unchanged.
//! - [`Complex32`], [`Complex64`]: two-field `(real, imag)` records with C layout.
//! - [`Parallel`]: OpenBLAS threading model reported by `openblas_get_parallel`.

#![allow(non_camel_case_types)]

use crate::error::{Error, Result};
use std::os::raw::c_int;

/// Integer type of every CBLAS dimension, stride and index.
pub type blasint = c_int;

/// Integer type of LAPACK dimensions and `info` status codes.
pub type lapack_int = i32;

macro_rules! cblas_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            /// Integer code passed across the C boundary.
            #[inline]
            pub const fn code(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = Error;

            fn try_from(value: i32) -> Result<Self> {
                match value {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(Error::UnknownCode { kind: $kind, value }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }
    };
}

// region: Enumerations

cblas_enum! {
    /// Storage order of a matrix in its flat buffer.
    pub enum Order ("order") {
        RowMajor = 101,
        ColMajor = 102,
    }
}

cblas_enum! {
    /// Operation applied to a matrix operand before use.
    pub enum Transpose ("transpose") {
        NoTrans = 111,
        Trans = 112,
        ConjTrans = 113,
        /// Conjugate without transposing; an ATLAS extension OpenBLAS also accepts.
        ConjNoTrans = 114,
    }
}

cblas_enum! {
    /// Which triangle of a symmetric or triangular matrix is referenced.
    pub enum Uplo ("uplo") {
        Upper = 121,
        Lower = 122,
    }
}

cblas_enum! {
    /// Whether a triangular matrix has an implicit unit diagonal.
    pub enum Diag ("diag") {
        NonUnit = 131,
        Unit = 132,
    }
}

cblas_enum! {
    /// Side on which a symmetric or triangular matrix multiplies.
    pub enum Side ("side") {
        Left = 141,
        Right = 142,
    }
}

cblas_enum! {
    /// Threading model OpenBLAS was built with.
    pub enum Parallel ("parallel") {
        Sequential = 0,
        Thread = 1,
        OpenMp = 2,
    }
}

impl Transpose {
    /// True when the operand is used with rows and columns swapped.
    #[inline]
    pub const fn is_transposed(self) -> bool {
        matches!(self, Transpose::Trans | Transpose::ConjTrans)
    }
}

// endregion: Enumerations

// region: Complex records

macro_rules! complex_record {
    ($(#[$meta:meta])* $name:ident, $real:ty) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            pub real: $real,
            pub imag: $real,
        }

        impl $name {
            pub const ZERO: Self = Self::new(0.0, 0.0);
            pub const ONE: Self = Self::new(1.0, 0.0);

            #[inline]
            pub const fn new(real: $real, imag: $real) -> Self {
                Self { real, imag }
            }

            /// Complex conjugate.
            #[inline]
            pub fn conj(self) -> Self {
                Self::new(self.real, -self.imag)
            }
        }

        impl From<$real> for $name {
            fn from(real: $real) -> Self {
                Self::new(real, 0.0)
            }
        }

        impl From<num_complex::Complex<$real>> for $name {
            fn from(value: num_complex::Complex<$real>) -> Self {
                Self::new(value.re, value.im)
            }
        }

        impl From<$name> for num_complex::Complex<$real> {
            fn from(value: $name) -> Self {
                num_complex::Complex::new(value.real, value.imag)
            }
        }
    };
}

complex_record!(
    /// Single-precision complex number, layout-compatible with C `float _Complex`.
    Complex32,
    f32
);
complex_record!(
    /// Double-precision complex number, layout-compatible with C `double _Complex`.
    Complex64,
    f64
);

// endregion: Complex records
