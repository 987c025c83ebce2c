use std::ffi::c_int;

use num_complex::{
  Complex32,
  Complex64,
  ComplexFloat,
};

use crate::error::LapackResult;
use crate::flags::{Op, Uplo};
use crate::lapack_bind::{sgesv_, dgesv_, cgesv_, zgesv_};
use crate::lapack_bind::{sgetrf_, dgetrf_, cgetrf_, zgetrf_};
use crate::lapack_bind::{sgetrs_, dgetrs_, cgetrs_, zgetrs_};
use crate::lapack_bind::{sgeequ_, dgeequ_, cgeequ_, zgeequ_};
use crate::lapack_bind::{ssytrf_, dsytrf_, csytrf_, zsytrf_};
use crate::util::{check_info, scratch, to_lapack_int};

// TODO: add gesvx once a general expert driver is needed; posvx covers the
// positive definite case.

/// Scalar-kind capability set for the general and symmetric-indefinite
/// system routines.
pub trait Solve: ComplexFloat {
  unsafe fn gesv(
    n: i64,
    nrhs: i64,
    a: *mut Self,
    lda: i64,
    ipiv: *mut i64,
    b: *mut Self,
    ldb: i64,
  ) -> LapackResult<i64>;

  unsafe fn getrf(m: i64, n: i64, a: *mut Self, lda: i64, ipiv: *mut i64) -> LapackResult<i64>;

  unsafe fn getrs(
    trans: Op,
    n: i64,
    nrhs: i64,
    a: *const Self,
    lda: i64,
    ipiv: *const i64,
    b: *mut Self,
    ldb: i64,
  ) -> LapackResult<i64>;

  unsafe fn geequ(
    m: i64,
    n: i64,
    a: *const Self,
    lda: i64,
    r: *mut Self::Real,
    c: *mut Self::Real,
    rowcnd: &mut Self::Real,
    colcnd: &mut Self::Real,
    amax: &mut Self::Real,
  ) -> LapackResult<i64>;

  unsafe fn sytrf(uplo: Uplo, n: i64, a: *mut Self, lda: i64, ipiv: *mut i64) -> LapackResult<i64>;
}

macro_rules! impl_solve {
  ($type_name:ident, $gesv:ident, $getrf:ident, $getrs:ident, $geequ:ident, $sytrf:ident, $qry_zero:expr, $to_real:expr) => {
    impl Solve for $type_name {
      unsafe fn gesv(
        n: i64,
        nrhs: i64,
        a: *mut Self,
        lda: i64,
        ipiv: *mut i64,
        b: *mut Self,
        ldb: i64,
      ) -> LapackResult<i64> {
        let n_ = to_lapack_int(n, "n")?;
        let nrhs_ = to_lapack_int(nrhs, "nrhs")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldb_ = to_lapack_int(ldb, "ldb")?;
        let mut ipiv_: Vec<c_int> = scratch(n as usize);
        let mut info: c_int = 0;
        $gesv(&n_, &nrhs_, a, &lda_, ipiv_.as_mut_ptr(), b, &ldb_, &mut info);
        if info >= 0 {
          for (i, p) in ipiv_.iter().take(n as usize).enumerate() {
            *ipiv.add(i) = *p as i64;
          }
        }
        check_info(info)
      }

      unsafe fn getrf(m: i64, n: i64, a: *mut Self, lda: i64, ipiv: *mut i64) -> LapackResult<i64> {
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let k = std::cmp::min(m, n) as usize;
        let mut ipiv_: Vec<c_int> = scratch(k);
        let mut info: c_int = 0;
        $getrf(&m_, &n_, a, &lda_, ipiv_.as_mut_ptr(), &mut info);
        if info >= 0 {
          for (i, p) in ipiv_.iter().take(k).enumerate() {
            *ipiv.add(i) = *p as i64;
          }
        }
        check_info(info)
      }

      unsafe fn getrs(
        trans: Op,
        n: i64,
        nrhs: i64,
        a: *const Self,
        lda: i64,
        ipiv: *const i64,
        b: *mut Self,
        ldb: i64,
      ) -> LapackResult<i64> {
        let trans_ = trans.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let nrhs_ = to_lapack_int(nrhs, "nrhs")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldb_ = to_lapack_int(ldb, "ldb")?;
        let ipiv_: Vec<c_int> = (0..n as usize).map(|i| *ipiv.add(i) as c_int).collect();
        let mut info: c_int = 0;
        $getrs(&trans_, &n_, &nrhs_, a, &lda_, ipiv_.as_ptr(), b, &ldb_, &mut info);
        check_info(info)
      }

      unsafe fn geequ(
        m: i64,
        n: i64,
        a: *const Self,
        lda: i64,
        r: *mut Self::Real,
        c: *mut Self::Real,
        rowcnd: &mut Self::Real,
        colcnd: &mut Self::Real,
        amax: &mut Self::Real,
      ) -> LapackResult<i64> {
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut info: c_int = 0;
        $geequ(&m_, &n_, a, &lda_, r, c, rowcnd, colcnd, amax, &mut info);
        check_info(info)
      }

      unsafe fn sytrf(
        uplo: Uplo,
        n: i64,
        a: *mut Self,
        lda: i64,
        ipiv: *mut i64,
      ) -> LapackResult<i64> {
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut ipiv_: Vec<c_int> = scratch(n as usize);
        let ineg_one: c_int = -1;
        let mut info: c_int = 0;
        // workspace query
        let mut qry_work = $qry_zero;
        $sytrf(&uplo_, &n_, a, &lda_, ipiv_.as_mut_ptr(), &mut qry_work, &ineg_one, &mut info);
        check_info(info)?;
        let lwork_ = $to_real(qry_work) as c_int;
        let mut work: Vec<Self> = scratch(lwork_ as usize);
        $sytrf(&uplo_, &n_, a, &lda_, ipiv_.as_mut_ptr(), work.as_mut_ptr(), &lwork_, &mut info);
        if info >= 0 {
          for (i, p) in ipiv_.iter().take(n as usize).enumerate() {
            *ipiv.add(i) = *p as i64;
          }
        }
        check_info(info)
      }
    }
  };
}

impl_solve!(f32,       sgesv_, sgetrf_, sgetrs_, sgeequ_, ssytrf_, 0f32,                   |x| x              );
impl_solve!(f64,       dgesv_, dgetrf_, dgetrs_, dgeequ_, dsytrf_, 0f64,                   |x| x              );
impl_solve!(Complex32, cgesv_, cgetrf_, cgetrs_, cgeequ_, csytrf_, Complex32::new(0., 0.), |x: Complex32| x.re);
impl_solve!(Complex64, zgesv_, zgetrf_, zgetrs_, zgeequ_, zsytrf_, Complex64::new(0., 0.), |x: Complex64| x.re);

// ---------------------------------------------------------------------- //

/// Solves A X = B for a general n-by-n matrix by LU factorization with
/// partial pivoting. On exit `a` holds the factors and `ipiv` the 1-based
/// pivot indices; a positive return marks the first exactly zero pivot.
pub unsafe fn gesv<T: Solve>(
  n: i64,
  nrhs: i64,
  a: *mut T,
  lda: i64,
  ipiv: *mut i64,
  b: *mut T,
  ldb: i64,
) -> LapackResult<i64> {
  T::gesv(n, nrhs, a, lda, ipiv, b, ldb)
}

/// LU factorization of a general m-by-n matrix with partial pivoting.
/// `ipiv` receives min(m, n) 1-based pivot indices.
pub unsafe fn getrf<T: Solve>(
  m: i64,
  n: i64,
  a: *mut T,
  lda: i64,
  ipiv: *mut i64,
) -> LapackResult<i64> {
  T::getrf(m, n, a, lda, ipiv)
}

/// Solves op(A) X = B reusing an LU factorization produced by [`getrf`].
pub unsafe fn getrs<T: Solve>(
  trans: Op,
  n: i64,
  nrhs: i64,
  a: *const T,
  lda: i64,
  ipiv: *const i64,
  b: *mut T,
  ldb: i64,
) -> LapackResult<i64> {
  T::getrs(trans, n, nrhs, a, lda, ipiv, b, ldb)
}

/// Computes row and column scale factors intended to equilibrate a
/// general m-by-n matrix. A positive return names the first exactly zero
/// row (<= m) or column (> m).
pub unsafe fn geequ<T: Solve>(
  m: i64,
  n: i64,
  a: *const T,
  lda: i64,
  r: *mut T::Real,
  c: *mut T::Real,
  rowcnd: &mut T::Real,
  colcnd: &mut T::Real,
  amax: &mut T::Real,
) -> LapackResult<i64> {
  T::geequ(m, n, a, lda, r, c, rowcnd, colcnd, amax)
}

/// Bunch-Kaufman factorization of a symmetric indefinite matrix, with the
/// workspace sized by a preliminary query.
pub unsafe fn sytrf<T: Solve>(
  uplo: Uplo,
  n: i64,
  a: *mut T,
  lda: i64,
  ipiv: *mut i64,
) -> LapackResult<i64> {
  T::sytrf(uplo, n, a, lda, ipiv)
}

// ---------------------------------------------------------------------- //
