//! Argument validation shared by the checked BLAS and LAPACK layers.
//!
//! A failed check reports through [`crate::xerbla`] and yields
//! [`Error::IllegalParameter`]; callers return it before any native call, so a
//! rejected routine has no side effects.

use crate::error::{Error, Result};
use crate::types::{blasint, Order, Transpose};
use crate::xerbla::{self, ParamError};

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Validation context of one routine call, e.g. prefix `d` and operation `gemm`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Check {
    lead: &'static str,
    prefix: &'static str,
    op: &'static str,
}

impl Check {
    pub(crate) const fn new(prefix: &'static str, op: &'static str) -> Self {
        Self {
            lead: "",
            prefix,
            op,
        }
    }

    /// Index routines put an `i` before the type prefix, as in `isamax`.
    pub(crate) const fn index(prefix: &'static str, op: &'static str) -> Self {
        Self {
            lead: "i",
            prefix,
            op,
        }
    }

    /// C interface routines of LAPACK, as in `LAPACKE_dgesvd`.
    pub(crate) const fn lapacke(prefix: &'static str, op: &'static str) -> Self {
        Self {
            lead: "LAPACKE_",
            prefix,
            op,
        }
    }

    pub(crate) fn routine(&self) -> String {
        format!("{}{}{}", self.lead, self.prefix, self.op)
    }

    /// Reports the rejected parameter and builds the error to return.
    pub(crate) fn reject(
        &self,
        param: impl Into<String>,
        position: i32,
        value: i64,
        reason: impl Into<String>,
    ) -> Error {
        let param = ParamError {
            routine: self.routine(),
            param: param.into(),
            position,
            value,
        };
        xerbla::report(&param);
        Error::IllegalParameter {
            reason: reason.into(),
            param,
        }
    }

    /// Converts a count or stride to `blasint`.
    pub(crate) fn int(&self, param: &str, position: i32, value: usize) -> Result<blasint> {
        blasint::try_from(value).map_err(|_| {
            self.reject(
                param,
                position,
                saturating_i64(value),
                format!("{} does not fit in a 32-bit integer", param),
            )
        })
    }

    /// A dimension: at least 1 and representable as `blasint`.
    pub(crate) fn shape(&self, param: &str, position: i32, value: usize) -> Result<blasint> {
        if value < 1 {
            return Err(self.reject(
                param,
                position,
                0,
                format!("{} must be greater than 0", param),
            ));
        }
        self.int(param, position, value)
    }

    /// A strided vector of `n` elements in buffer `name` at `position`, with its
    /// increment at `position + 1`. Returns the increment.
    pub(crate) fn vector(
        &self,
        name: &str,
        position: i32,
        len: usize,
        n: usize,
        offset: usize,
        inc: usize,
    ) -> Result<blasint> {
        let inc_name = format!("inc{}", name);
        if inc < 1 {
            return Err(self.reject(
                inc_name.as_str(),
                position + 1,
                0,
                format!("{} must be greater than 0", inc_name),
            ));
        }
        let inc_raw = self.int(&inc_name, position + 1, inc)?;

        let required = n
            .saturating_sub(1)
            .checked_mul(inc)
            .and_then(|span| span.checked_add(offset))
            .and_then(|last| last.checked_add(1));
        match required {
            Some(required) if required <= len => Ok(inc_raw),
            required => Err(self.reject(
                name,
                position,
                required.map_or(i64::MAX, saturating_i64),
                format!("vector specification too large for buffer {}", name),
            )),
        }
    }

    /// A `rows` x `cols` matrix in buffer `name` at `position`, with its leading
    /// dimension at `position + 1`. Returns the leading dimension.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn matrix(
        &self,
        name: &str,
        position: i32,
        len: usize,
        order: Order,
        rows: usize,
        cols: usize,
        offset: usize,
        ld: usize,
    ) -> Result<blasint> {
        let ld_name = format!("ld{}", name.to_lowercase());
        let (outer, inner) = match order {
            Order::RowMajor => (rows, cols),
            Order::ColMajor => (cols, rows),
        };
        if ld < inner.max(1) {
            return Err(self.reject(
                ld_name.as_str(),
                position + 1,
                saturating_i64(ld),
                format!("{} must be at least {}", ld_name, inner.max(1)),
            ));
        }
        let ld_raw = self.int(&ld_name, position + 1, ld)?;

        let required = outer
            .saturating_sub(1)
            .checked_mul(ld)
            .and_then(|span| span.checked_add(offset))
            .and_then(|last| last.checked_add(inner));
        match required {
            Some(required) if required <= len => Ok(ld_raw),
            required => Err(self.reject(
                name,
                position,
                required.map_or(i64::MAX, saturating_i64),
                format!("matrix specification too large for buffer {}", name),
            )),
        }
    }

    /// A contiguous run of `size` elements starting at `offset`.
    pub(crate) fn buffer(
        &self,
        name: &str,
        position: i32,
        len: usize,
        offset: usize,
        size: usize,
    ) -> Result<()> {
        match offset.checked_add(size) {
            Some(required) if size >= 1 && required <= len => Ok(()),
            required => Err(self.reject(
                name,
                position,
                required.map_or(i64::MAX, saturating_i64),
                format!("buffer {} is too small", name),
            )),
        }
    }
}

/// Dimensions of `op(X)` for a stored `rows` x `cols` operand.
pub(crate) fn stored_dims(trans: Transpose, rows: usize, cols: usize) -> (usize, usize) {
    if trans.is_transposed() {
        (cols, rows)
    } else {
        (rows, cols)
    }
}
