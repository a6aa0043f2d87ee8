//! Checked calls into LAPACK.
//!
//! The Fortran routines only understand column-major storage. For row-major
//! input, [`Lapack::gesvd`] transposes the operands into column-major scratch
//! buffers, runs the routine there and transposes the results back, so callers
//! see the same contract for both layouts (as with LAPACKE). Libraries that only
//! export the LAPACKE interface are called through it directly.

#![allow(clippy::too_many_arguments)]

use crate::blas::RealElement;
use crate::check::Check;
use crate::error::{Error, Result};
use crate::sys::LapackApi;
use crate::types::{lapack_int, Order};
use std::os::raw::{c_char, c_int};

/// Job option for the left (`jobu`) or right (`jobvt`) singular vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SvdJob {
    /// `'A'`: all columns of `U` (rows of `VT`).
    All,
    /// `'S'`: the first `min(m, n)` columns of `U` (rows of `VT`).
    Reduced,
    /// `'O'`: the first `min(m, n)` vectors overwrite `A`.
    Overwrite,
    /// `'N'`: no vectors are computed.
    Skip,
}

impl SvdJob {
    /// Character code passed to LAPACK.
    pub const fn code(self) -> u8 {
        match self {
            SvdJob::All => b'A',
            SvdJob::Reduced => b'S',
            SvdJob::Overwrite => b'O',
            SvdJob::Skip => b'N',
        }
    }
}

impl TryFrom<u8> for SvdJob {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value.to_ascii_uppercase() {
            b'A' => Ok(SvdJob::All),
            b'S' => Ok(SvdJob::Reduced),
            b'O' => Ok(SvdJob::Overwrite),
            b'N' => Ok(SvdJob::Skip),
            _ => Err(Error::UnknownCode {
                kind: "svd job",
                value: i32::from(value),
            }),
        }
    }
}

/// Fortran `?gesvd_` prototype for element type `T`.
pub type Gesvd<T> = unsafe extern "C" fn(
    jobu: *const c_char,
    jobvt: *const c_char,
    m: *const lapack_int,
    n: *const lapack_int,
    a: *mut T,
    lda: *const lapack_int,
    s: *mut T,
    u: *mut T,
    ldu: *const lapack_int,
    vt: *mut T,
    ldvt: *const lapack_int,
    work: *mut T,
    lwork: *const lapack_int,
    info: *mut lapack_int,
);

/// `LAPACKE_?gesvd` prototype for element type `T`.
pub type LapackeGesvd<T> = unsafe extern "C" fn(
    matrix_layout: c_int,
    jobu: c_char,
    jobvt: c_char,
    m: lapack_int,
    n: lapack_int,
    a: *mut T,
    lda: lapack_int,
    s: *mut T,
    u: *mut T,
    ldu: lapack_int,
    vt: *mut T,
    ldvt: lapack_int,
    superb: *mut T,
) -> lapack_int;

/// Argument names of `?gesvd_`, indexed by `-info - 1`.
const GESVD_ARGS: [&str; 14] = [
    "jobu", "jobvt", "m", "n", "a", "lda", "s", "u", "ldu", "vt", "ldvt", "work", "lwork", "info",
];

/// Argument names of `LAPACKE_?gesvd`, indexed by `-info - 1`.
const LAPACKE_GESVD_ARGS: [&str; 13] = [
    "matrix_layout", "jobu", "jobvt", "m", "n", "a", "lda", "s", "u", "ldu", "vt", "ldvt", "superb",
];

/// LAPACKE could not allocate its work or transposition buffers.
const LAPACKE_MEMORY_ERRORS: [lapack_int; 2] = [-1010, -1011];

/// Element types with LAPACK routines.
pub trait LapackElement: RealElement {
    /// Symbol reported when neither `gesvd` entry point is available.
    #[doc(hidden)]
    const GESVD_SYMBOL: &'static str;

    #[doc(hidden)]
    fn gesvd_routine(api: &LapackApi) -> Option<Gesvd<Self>>;

    #[doc(hidden)]
    fn lapacke_gesvd_routine(api: &LapackApi) -> Option<LapackeGesvd<Self>>;

    /// Reads a workspace size reported in `work[0]`.
    #[doc(hidden)]
    fn workspace_len(self) -> usize;
}

impl LapackElement for f32 {
    const GESVD_SYMBOL: &'static str = "sgesvd_";

    fn gesvd_routine(api: &LapackApi) -> Option<Gesvd<Self>> {
        api.sgesvd_
    }

    fn lapacke_gesvd_routine(api: &LapackApi) -> Option<LapackeGesvd<Self>> {
        api.LAPACKE_sgesvd
    }

    fn workspace_len(self) -> usize {
        self as usize
    }
}

impl LapackElement for f64 {
    const GESVD_SYMBOL: &'static str = "dgesvd_";

    fn gesvd_routine(api: &LapackApi) -> Option<Gesvd<Self>> {
        api.dgesvd_
    }

    fn lapacke_gesvd_routine(api: &LapackApi) -> Option<LapackeGesvd<Self>> {
        api.LAPACKE_dgesvd
    }

    fn workspace_len(self) -> usize {
        self as usize
    }
}

/// Copies a row-major `rows` x `cols` matrix into a dense column-major buffer.
fn to_col_major<T: Copy + Default>(src: &[T], rows: usize, cols: usize, ld: usize) -> Vec<T> {
    let mut dst = vec![T::default(); rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * ld + j];
        }
    }
    dst
}

/// Copies a dense column-major `rows` x `cols` matrix into row-major storage.
fn from_col_major<T: Copy>(src: &[T], rows: usize, cols: usize, dst: &mut [T], ld: usize) {
    for i in 0..rows {
        for j in 0..cols {
            dst[i * ld + j] = src[j * rows + i];
        }
    }
}

/// Checked access to a resolved [`LapackApi`].
#[derive(Debug, Clone, Copy)]
pub struct Lapack<'a> {
    api: &'a LapackApi,
}

impl<'a> Lapack<'a> {
    pub fn new(api: &'a LapackApi) -> Self {
        Self { api }
    }

    /// The underlying function table.
    pub fn api(&self) -> &'a LapackApi {
        self.api
    }

    /// Singular value decomposition `A = U * diag(S) * VT` of an `m` x `n` matrix.
    ///
    /// Argument positions reported on validation failure follow `LAPACKE_?gesvd`.
    /// `A` is destroyed (or holds the vectors requested with [`SvdJob::Overwrite`]).
    /// `superb` receives the `min(m, n) - 1` unconverged superdiagonal elements.
    ///
    /// When the QR iteration does not converge, a warning is logged and the partial
    /// result is returned as `Ok`.
    ///
    /// The Fortran `?gesvd_` is used when the library exports it, otherwise
    /// `LAPACKE_?gesvd`, which handles both layouts itself.
    pub fn gesvd<T: LapackElement>(
        &self,
        order: Order,
        jobu: SvdJob,
        jobvt: SvdJob,
        m: usize,
        n: usize,
        a: &mut [T],
        offset_a: usize,
        lda: usize,
        s: &mut [T],
        offset_s: usize,
        u: &mut [T],
        offset_u: usize,
        ldu: usize,
        vt: &mut [T],
        offset_vt: usize,
        ldvt: usize,
        superb: &mut [T],
        offset_superb: usize,
    ) -> Result<()> {
        let check = Check::new(T::PREFIX, "gesvd");
        if jobu == SvdJob::Overwrite && jobvt == SvdJob::Overwrite {
            return Err(check.reject(
                "jobvt",
                3,
                i64::from(jobvt.code()),
                "jobu and jobvt cannot both be O",
            ));
        }
        check.shape("m", 4, m)?;
        check.shape("n", 5, n)?;
        let k = m.min(n);
        check.matrix("a", 6, a.len(), order, m, n, offset_a, lda)?;
        check.buffer("s", 8, s.len(), offset_s, k)?;
        let cols_u = match jobu {
            SvdJob::All => m,
            SvdJob::Reduced => k,
            SvdJob::Overwrite | SvdJob::Skip => 0,
        };
        if cols_u > 0 {
            check.matrix("u", 9, u.len(), order, m, cols_u, offset_u, ldu)?;
        }
        let rows_vt = match jobvt {
            SvdJob::All => n,
            SvdJob::Reduced => k,
            SvdJob::Overwrite | SvdJob::Skip => 0,
        };
        if rows_vt > 0 {
            check.matrix("vt", 11, vt.len(), order, rows_vt, n, offset_vt, ldvt)?;
        }
        if k > 1 {
            check.buffer("superb", 13, superb.len(), offset_superb, k - 1)?;
        }
        let start = offset_superb.min(superb.len());
        let superb = &mut superb[start..];

        let Some(gesvd) = T::gesvd_routine(self.api) else {
            let lapacke = T::lapacke_gesvd_routine(self.api)
                .ok_or(Error::MissingSymbol(T::GESVD_SYMBOL))?;
            let u_ptr = if cols_u > 0 {
                u[offset_u..].as_mut_ptr()
            } else {
                u.as_mut_ptr()
            };
            let vt_ptr = if rows_vt > 0 {
                vt[offset_vt..].as_mut_ptr()
            } else {
                vt.as_mut_ptr()
            };
            // Row-major LAPACKE checks ldvt >= n even when VT is not referenced.
            let ldvt = match (rows_vt, order) {
                (0, Order::RowMajor) => n,
                (0, Order::ColMajor) => 1,
                _ => ldvt,
            };
            let call = LapackeCall {
                check: Check::lapacke(T::PREFIX, "gesvd"),
                lapacke,
                order,
                jobu,
                jobvt,
                m,
                n,
            };
            return unsafe {
                call.run(
                    a[offset_a..].as_mut_ptr(),
                    lda,
                    s[offset_s..].as_mut_ptr(),
                    u_ptr,
                    if cols_u > 0 { ldu } else { 1 },
                    vt_ptr,
                    ldvt,
                    superb.as_mut_ptr(),
                )
            };
        };
        let call = GesvdCall {
            check: Check::new(T::PREFIX, "gesvd_"),
            gesvd,
            jobu,
            jobvt,
            m,
            n,
        };
        match order {
            Order::ColMajor => {
                let u_ptr = if cols_u > 0 {
                    u[offset_u..].as_mut_ptr()
                } else {
                    u.as_mut_ptr()
                };
                let vt_ptr = if rows_vt > 0 {
                    vt[offset_vt..].as_mut_ptr()
                } else {
                    vt.as_mut_ptr()
                };
                unsafe {
                    call.run(
                        a[offset_a..].as_mut_ptr(),
                        lda,
                        s[offset_s..].as_mut_ptr(),
                        u_ptr,
                        if cols_u > 0 { ldu } else { 1 },
                        vt_ptr,
                        if rows_vt > 0 { ldvt } else { 1 },
                        superb,
                    )
                }
            }
            Order::RowMajor => {
                let mut a_col = to_col_major(&a[offset_a..], m, n, lda);
                let mut u_col = vec![T::default(); m * cols_u];
                let mut vt_col = vec![T::default(); rows_vt * n];
                unsafe {
                    call.run(
                        a_col.as_mut_ptr(),
                        m,
                        s[offset_s..].as_mut_ptr(),
                        u_col.as_mut_ptr(),
                        m,
                        vt_col.as_mut_ptr(),
                        rows_vt.max(1),
                        superb,
                    )?;
                }
                from_col_major(&a_col, m, n, &mut a[offset_a..], lda);
                if cols_u > 0 {
                    from_col_major(&u_col, m, cols_u, &mut u[offset_u..], ldu);
                }
                if rows_vt > 0 {
                    from_col_major(&vt_col, rows_vt, n, &mut vt[offset_vt..], ldvt);
                }
                Ok(())
            }
        }
    }
}

/// Validated arguments of one `?gesvd_` invocation.
struct GesvdCall<T> {
    check: Check,
    gesvd: Gesvd<T>,
    jobu: SvdJob,
    jobvt: SvdJob,
    m: usize,
    n: usize,
}

impl<T: LapackElement> GesvdCall<T> {
    /// Workspace query followed by the decomposition, on column-major operands.
    ///
    /// # Safety
    ///
    /// Every pointer must address a column-major operand of the validated size.
    unsafe fn run(
        &self,
        a: *mut T,
        lda: usize,
        s: *mut T,
        u: *mut T,
        ldu: usize,
        vt: *mut T,
        ldvt: usize,
        superb: &mut [T],
    ) -> Result<()> {
        let check = self.check;
        let jobu = self.jobu.code() as c_char;
        let jobvt = self.jobvt.code() as c_char;
        let m = check.int("m", 3, self.m)?;
        let n = check.int("n", 4, self.n)?;
        let lda = check.int("lda", 6, lda)?;
        let ldu = check.int("ldu", 9, ldu)?;
        let ldvt = check.int("ldvt", 11, ldvt)?;
        let mut info: lapack_int = 0;

        let query: lapack_int = -1;
        let mut optimal = T::default();
        (self.gesvd)(
            &jobu, &jobvt, &m, &n, a, &lda, s, u, &ldu, vt, &ldvt, &mut optimal, &query, &mut info,
        );
        if info != 0 {
            return Err(Error::WorkspaceQuery {
                routine: check.routine(),
                info,
            });
        }

        let lwork = optimal.workspace_len().max(1);
        let lwork_raw = check.int("lwork", 13, lwork)?;
        let mut work = vec![T::default(); lwork];
        (self.gesvd)(
            &jobu,
            &jobvt,
            &m,
            &n,
            a,
            &lda,
            s,
            u,
            &ldu,
            vt,
            &ldvt,
            work.as_mut_ptr(),
            &lwork_raw,
            &mut info,
        );

        check_info(&check, &GESVD_ARGS, info)?;

        let k = self.m.min(self.n);
        if k > 1 && work.len() >= k {
            superb[..k - 1].copy_from_slice(&work[1..k]);
        }
        Ok(())
    }
}

/// Validated arguments of one `LAPACKE_?gesvd` invocation.
struct LapackeCall<T> {
    check: Check,
    lapacke: LapackeGesvd<T>,
    order: Order,
    jobu: SvdJob,
    jobvt: SvdJob,
    m: usize,
    n: usize,
}

impl<T: LapackElement> LapackeCall<T> {
    /// # Safety
    ///
    /// Every pointer must address an operand of the validated size in `self.order`.
    unsafe fn run(
        &self,
        a: *mut T,
        lda: usize,
        s: *mut T,
        u: *mut T,
        ldu: usize,
        vt: *mut T,
        ldvt: usize,
        superb: *mut T,
    ) -> Result<()> {
        let check = self.check;
        let m = check.int("m", 4, self.m)?;
        let n = check.int("n", 5, self.n)?;
        let lda = check.int("lda", 7, lda)?;
        let ldu = check.int("ldu", 10, ldu)?;
        let ldvt = check.int("ldvt", 12, ldvt)?;

        let info = (self.lapacke)(
            self.order.code(),
            self.jobu.code() as c_char,
            self.jobvt.code() as c_char,
            m,
            n,
            a,
            lda,
            s,
            u,
            ldu,
            vt,
            ldvt,
            superb,
        );
        if LAPACKE_MEMORY_ERRORS.contains(&info) {
            return Err(Error::WorkspaceQuery {
                routine: check.routine(),
                info,
            });
        }
        check_info(&check, &LAPACKE_GESVD_ARGS, info)
    }
}

/// Maps a LAPACK `info` status: negative reports the argument, positive warns.
fn check_info(check: &Check, args: &[&str], info: lapack_int) -> Result<()> {
    if info < 0 {
        let position = -info;
        let name = args
            .get(position as usize - 1)
            .copied()
            .unwrap_or("?");
        return Err(check.reject(
            name,
            position,
            i64::from(info),
            format!("argument {} had an illegal value", position),
        ));
    }
    if info > 0 {
        log::warn!(
            target: "openblas_ffi",
            "{}: {} superdiagonals of the intermediate bidiagonal form did not converge",
            check.routine(),
            info
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xerbla::testing::Capture;
    use std::sync::Mutex;

    type Seen = (u8, u8, lapack_int, lapack_int, lapack_int, lapack_int);
    static SEEN: Mutex<Vec<Seen>> = Mutex::new(Vec::new());

    /// Writes recognizable values instead of a decomposition:
    /// `S[i] = A_col[i]`, `U(i, j) = 10i + j`, `VT(i, j) = 100 + 10i + j`, `A(0, 0) = -1`.
    unsafe extern "C" fn scripted_dgesvd(
        jobu: *const c_char,
        jobvt: *const c_char,
        m: *const lapack_int,
        n: *const lapack_int,
        a: *mut f64,
        lda: *const lapack_int,
        s: *mut f64,
        u: *mut f64,
        ldu: *const lapack_int,
        vt: *mut f64,
        ldvt: *const lapack_int,
        work: *mut f64,
        lwork: *const lapack_int,
        info: *mut lapack_int,
    ) {
        *info = 0;
        if *lwork == -1 {
            *work = 7.0;
            return;
        }
        SEEN.lock().unwrap().push((
            *jobu as u8,
            *jobvt as u8,
            *lda,
            *ldu,
            *ldvt,
            *lwork,
        ));
        let (m, n) = (*m as isize, *n as isize);
        let (ldu, ldvt) = (*ldu as isize, *ldvt as isize);
        for i in 0..m.min(n) {
            *s.offset(i) = *a.offset(i);
        }
        if *jobu as u8 == b'A' {
            for i in 0..m {
                for j in 0..m {
                    *u.offset(j * ldu + i) = (10 * i + j) as f64;
                }
            }
        }
        if *jobvt as u8 == b'A' {
            for i in 0..n {
                for j in 0..n {
                    *vt.offset(j * ldvt + i) = (100 + 10 * i + j) as f64;
                }
            }
        }
        *work.offset(1) = 0.5;
        *a = -1.0;
    }

    unsafe extern "C" fn unconverged_sgesvd(
        _: *const c_char,
        _: *const c_char,
        _: *const lapack_int,
        _: *const lapack_int,
        _: *mut f32,
        _: *const lapack_int,
        s: *mut f32,
        _: *mut f32,
        _: *const lapack_int,
        _: *mut f32,
        _: *const lapack_int,
        work: *mut f32,
        lwork: *const lapack_int,
        info: *mut lapack_int,
    ) {
        if *lwork == -1 {
            *work = 16.0;
            *info = 0;
            return;
        }
        *s = 9.0;
        *info = 1;
    }

    unsafe extern "C" fn rejecting_dgesvd(
        _: *const c_char,
        _: *const c_char,
        _: *const lapack_int,
        _: *const lapack_int,
        _: *mut f64,
        _: *const lapack_int,
        _: *mut f64,
        _: *mut f64,
        _: *const lapack_int,
        _: *mut f64,
        _: *const lapack_int,
        work: *mut f64,
        lwork: *const lapack_int,
        info: *mut lapack_int,
    ) {
        if *lwork == -1 {
            *work = 16.0;
            *info = 0;
            return;
        }
        *info = -6;
    }

    type LapackeSeen = (c_int, u8, u8, lapack_int, lapack_int, lapack_int, lapack_int, lapack_int);
    static LAPACKE_SEEN: Mutex<Vec<LapackeSeen>> = Mutex::new(Vec::new());

    /// Records its scalar arguments and writes `S[0] = 42`, `superb[0] = 0.25`, `A[0] = -1`.
    unsafe extern "C" fn recording_lapacke_dgesvd(
        layout: c_int,
        jobu: c_char,
        jobvt: c_char,
        m: lapack_int,
        n: lapack_int,
        a: *mut f64,
        lda: lapack_int,
        s: *mut f64,
        _: *mut f64,
        ldu: lapack_int,
        _: *mut f64,
        ldvt: lapack_int,
        superb: *mut f64,
    ) -> lapack_int {
        LAPACKE_SEEN
            .lock()
            .unwrap()
            .push((layout, jobu as u8, jobvt as u8, m, n, lda, ldu, ldvt));
        *s = 42.0;
        *superb = 0.25;
        *a = -1.0;
        0
    }

    unsafe extern "C" fn rejecting_lapacke_dgesvd(
        _: c_int,
        _: c_char,
        _: c_char,
        _: lapack_int,
        _: lapack_int,
        _: *mut f64,
        _: lapack_int,
        _: *mut f64,
        _: *mut f64,
        _: lapack_int,
        _: *mut f64,
        _: lapack_int,
        _: *mut f64,
    ) -> lapack_int {
        -7
    }

    unsafe extern "C" fn out_of_memory_lapacke_sgesvd(
        _: c_int,
        _: c_char,
        _: c_char,
        _: lapack_int,
        _: lapack_int,
        _: *mut f32,
        _: lapack_int,
        _: *mut f32,
        _: *mut f32,
        _: lapack_int,
        _: *mut f32,
        _: lapack_int,
        _: *mut f32,
    ) -> lapack_int {
        -1011
    }

    #[test]
    fn test_svd_job_codes() {
        assert_eq!(SvdJob::All.code(), b'A');
        assert_eq!(SvdJob::Reduced.code(), b'S');
        assert_eq!(SvdJob::Overwrite.code(), b'O');
        assert_eq!(SvdJob::Skip.code(), b'N');
        assert_eq!(SvdJob::try_from(b's').unwrap(), SvdJob::Reduced);
        assert!(SvdJob::try_from(b'X').is_err());
    }

    #[test]
    fn test_layout_round_trip() {
        // 2 x 3 row-major with ld 4.
        let row = [1, 2, 3, 0, 4, 5, 6, 0];
        let col = to_col_major(&row, 2, 3, 4);
        assert_eq!(col, vec![1, 4, 2, 5, 3, 6]);

        let mut back = [0; 8];
        from_col_major(&col, 2, 3, &mut back, 4);
        assert_eq!(back, row);
    }

    #[test]
    fn test_gesvd_layouts() {
        let api = LapackApi {
            dgesvd_: Some(scripted_dgesvd),
            ..Default::default()
        };
        let lapack = Lapack::new(&api);

        // Row-major: operands are handed over column-major with tight leading dimensions.
        let mut a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut s = [0.0; 2];
        let mut u = [0.0; 4];
        let mut vt = [0.0; 9];
        let mut superb = [0.0; 1];
        lapack
            .gesvd(
                Order::RowMajor,
                SvdJob::All,
                SvdJob::All,
                2,
                3,
                &mut a,
                0,
                3,
                &mut s,
                0,
                &mut u,
                0,
                2,
                &mut vt,
                0,
                3,
                &mut superb,
                0,
            )
            .unwrap();

        assert_eq!(s, [1.0, 4.0]);
        assert_eq!(u, [0.0, 1.0, 10.0, 11.0]);
        assert_eq!(vt, [100.0, 101.0, 102.0, 110.0, 111.0, 112.0, 120.0, 121.0, 122.0]);
        assert_eq!(a[0], -1.0);
        assert_eq!(a[1..], [2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(superb, [0.5]);

        // Column-major: caller buffers and leading dimensions are passed through.
        let mut a = [0.0, 1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 0.0, 0.0, 5.0, 6.0, 0.0];
        let mut s = [0.0; 3];
        lapack
            .gesvd(
                Order::ColMajor,
                SvdJob::Skip,
                SvdJob::Skip,
                2,
                3,
                &mut a,
                1,
                4,
                &mut s,
                1,
                &mut [],
                0,
                0,
                &mut [],
                0,
                0,
                &mut superb,
                0,
            )
            .unwrap();
        assert_eq!(s, [0.0, 1.0, 2.0]);
        assert_eq!(a[1], -1.0);

        let seen = SEEN.lock().unwrap().clone();
        assert_eq!(seen, vec![(b'A', b'A', 2, 2, 3, 7), (b'N', b'N', 4, 1, 1, 7)]);
    }

    #[test]
    fn test_gesvd_unconverged_is_not_an_error() {
        let api = LapackApi {
            sgesvd_: Some(unconverged_sgesvd),
            ..Default::default()
        };
        let mut a = [1.0f32; 4];
        let mut s = [0.0f32; 2];
        let mut superb = [0.0f32; 1];
        let result = Lapack::new(&api).gesvd(
            Order::ColMajor,
            SvdJob::Skip,
            SvdJob::Skip,
            2,
            2,
            &mut a,
            0,
            2,
            &mut s,
            0,
            &mut [],
            0,
            1,
            &mut [],
            0,
            1,
            &mut superb,
            0,
        );
        assert!(result.is_ok());
        assert_eq!(s[0], 9.0);
    }

    #[test]
    fn test_gesvd_native_rejection() {
        let capture = Capture::install();
        let api = LapackApi {
            dgesvd_: Some(rejecting_dgesvd),
            ..Default::default()
        };
        let mut a = [1.0; 4];
        let mut s = [0.0; 2];
        let mut superb = [0.0; 1];
        let result = Lapack::new(&api).gesvd(
            Order::ColMajor,
            SvdJob::Skip,
            SvdJob::Skip,
            2,
            2,
            &mut a,
            0,
            2,
            &mut s,
            0,
            &mut [],
            0,
            1,
            &mut [],
            0,
            1,
            &mut superb,
            0,
        );
        assert!(matches!(result, Err(Error::IllegalParameter { .. })));
        let report = capture.only();
        assert_eq!(report.routine, "dgesvd_");
        assert_eq!(report.param, "lda");
        assert_eq!(report.position, 6);
    }

    #[test]
    fn test_gesvd_validation() {
        let capture = Capture::install();
        let api = LapackApi::default();
        let lapack = Lapack::new(&api);
        let mut a = [0.0f64; 6];
        let mut s = [0.0f64; 2];
        let mut u = [0.0f64; 4];
        let mut vt = [0.0f64; 6];
        let mut superb = [0.0f64; 1];

        // Both overwrite A.
        let result = lapack.gesvd(
            Order::RowMajor,
            SvdJob::Overwrite,
            SvdJob::Overwrite,
            2,
            3,
            &mut a,
            0,
            3,
            &mut s,
            0,
            &mut u,
            0,
            2,
            &mut vt,
            0,
            3,
            &mut superb,
            0,
        );
        assert!(result.is_err());
        assert_eq!(capture.only().param, "jobvt");

        // VT must be 3 x 3 for `All`.
        let result = lapack.gesvd(
            Order::RowMajor,
            SvdJob::All,
            SvdJob::All,
            2,
            3,
            &mut a,
            0,
            3,
            &mut s,
            0,
            &mut u,
            0,
            2,
            &mut vt,
            0,
            3,
            &mut superb,
            0,
        );
        assert!(result.is_err());
        let reports = capture.reports();
        assert_eq!(reports.len(), 2);
        let report = &reports[1];
        assert_eq!(report.routine, "dgesvd");
        assert_eq!(report.param, "vt");
        assert_eq!(report.position, 11);
        assert_eq!(report.value, 9);

        // Valid arguments reach the symbol lookup.
        let result = lapack.gesvd(
            Order::RowMajor,
            SvdJob::Reduced,
            SvdJob::Reduced,
            2,
            3,
            &mut a,
            0,
            3,
            &mut s,
            0,
            &mut u,
            0,
            2,
            &mut vt,
            0,
            3,
            &mut superb,
            0,
        );
        assert!(matches!(result, Err(Error::MissingSymbol("dgesvd_"))));
        assert_eq!(capture.reports().len(), 2);
    }

    #[test]
    fn test_gesvd_lapacke_fallback() {
        let api = LapackApi {
            LAPACKE_dgesvd: Some(recording_lapacke_dgesvd),
            ..Default::default()
        };
        let lapack = Lapack::new(&api);

        // Row-major is handed to LAPACKE untransposed, with ldvt = n for the unused VT.
        let mut a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut s = [0.0; 2];
        let mut superb = [0.0; 1];
        lapack
            .gesvd(
                Order::RowMajor,
                SvdJob::Skip,
                SvdJob::Skip,
                2,
                3,
                &mut a,
                0,
                3,
                &mut s,
                0,
                &mut [],
                0,
                0,
                &mut [],
                0,
                0,
                &mut superb,
                0,
            )
            .unwrap();
        assert_eq!(s, [42.0, 0.0]);
        assert_eq!(superb, [0.25]);
        assert_eq!(a, [-1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        // Column-major with offsets into every buffer.
        let mut a = [0.0; 7];
        let mut s = [0.0; 3];
        let mut u = [0.0; 7];
        let mut vt = [0.0; 5];
        let mut superb = [0.0; 2];
        lapack
            .gesvd(
                Order::ColMajor,
                SvdJob::Reduced,
                SvdJob::Reduced,
                3,
                2,
                &mut a,
                1,
                3,
                &mut s,
                1,
                &mut u,
                1,
                3,
                &mut vt,
                1,
                2,
                &mut superb,
                1,
            )
            .unwrap();
        assert_eq!(a[..2], [0.0, -1.0]);
        assert_eq!(s, [0.0, 42.0, 0.0]);
        assert_eq!(superb, [0.0, 0.25]);

        let seen = LAPACKE_SEEN.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (Order::RowMajor.code(), b'N', b'N', 2, 3, 3, 1, 3),
                (Order::ColMajor.code(), b'S', b'S', 3, 2, 3, 3, 2),
            ]
        );
    }

    #[test]
    fn test_gesvd_lapacke_errors() {
        let capture = Capture::install();
        let api = LapackApi {
            LAPACKE_dgesvd: Some(rejecting_lapacke_dgesvd),
            LAPACKE_sgesvd: Some(out_of_memory_lapacke_sgesvd),
            ..Default::default()
        };
        let lapack = Lapack::new(&api);

        let mut a = [1.0f64; 4];
        let mut s = [0.0f64; 2];
        let mut superb = [0.0f64; 1];
        let result = lapack.gesvd(
            Order::ColMajor,
            SvdJob::Skip,
            SvdJob::Skip,
            2,
            2,
            &mut a,
            0,
            2,
            &mut s,
            0,
            &mut [],
            0,
            1,
            &mut [],
            0,
            1,
            &mut superb,
            0,
        );
        assert!(matches!(result, Err(Error::IllegalParameter { .. })));
        let report = capture.only();
        assert_eq!(report.routine, "LAPACKE_dgesvd");
        assert_eq!(report.param, "lda");
        assert_eq!(report.position, 7);

        let mut a = [1.0f32; 4];
        let mut s = [0.0f32; 2];
        let mut superb = [0.0f32; 1];
        let result = lapack.gesvd(
            Order::RowMajor,
            SvdJob::Skip,
            SvdJob::Skip,
            2,
            2,
            &mut a,
            0,
            2,
            &mut s,
            0,
            &mut [],
            0,
            1,
            &mut [],
            0,
            1,
            &mut superb,
            0,
        );
        match result {
            Err(Error::WorkspaceQuery { routine, info }) => {
                assert_eq!(routine, "LAPACKE_sgesvd");
                assert_eq!(info, -1011);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(capture.reports().len(), 1);
    }

    #[test]
    fn test_gesvd_prefers_fortran_routine() {
        let api = LapackApi {
            sgesvd_: Some(unconverged_sgesvd),
            LAPACKE_sgesvd: Some(out_of_memory_lapacke_sgesvd),
            ..Default::default()
        };
        let mut a = [1.0f32; 4];
        let mut s = [0.0f32; 2];
        let mut superb = [0.0f32; 1];
        let result = Lapack::new(&api).gesvd(
            Order::RowMajor,
            SvdJob::Skip,
            SvdJob::Skip,
            2,
            2,
            &mut a,
            0,
            2,
            &mut s,
            0,
            &mut [],
            0,
            1,
            &mut [],
            0,
            1,
            &mut superb,
            0,
        );
        assert!(result.is_ok());
        assert_eq!(s[0], 9.0);
    }
}
