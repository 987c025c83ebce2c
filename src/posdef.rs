use std::ffi::c_int;

use num_complex::{
  Complex32,
  Complex64,
  ComplexFloat,
};

use crate::error::LapackResult;
use crate::flags::{Equed, Factored, Uplo};
use crate::lapack_bind::{spotrf_, dpotrf_, cpotrf_, zpotrf_};
use crate::lapack_bind::{spstrf_, dpstrf_, cpstrf_, zpstrf_};
use crate::lapack_bind::{spbcon_, dpbcon_, cpbcon_, zpbcon_};
use crate::lapack_bind::{sposvx_, dposvx_, cposvx_, zposvx_};
use crate::util::{check_info, scratch, to_lapack_int};

/// Scalar-kind capability set for the positive definite family. The real
/// and complex marshaling bodies differ in their fixed workspace shapes
/// (iwork vs rwork), hence the two impl macros below.
pub trait PosDef: ComplexFloat {
  unsafe fn potrf(uplo: Uplo, n: i64, a: *mut Self, lda: i64) -> LapackResult<i64>;

  unsafe fn pstrf(
    uplo: Uplo,
    n: i64,
    a: *mut Self,
    lda: i64,
    piv: *mut i64,
    rank: &mut i64,
    tol: Self::Real,
  ) -> LapackResult<i64>;

  unsafe fn pbcon(
    uplo: Uplo,
    n: i64,
    kd: i64,
    ab: *const Self,
    ldab: i64,
    anorm: Self::Real,
    rcond: &mut Self::Real,
  ) -> LapackResult<i64>;

  unsafe fn posvx(
    fact: Factored,
    uplo: Uplo,
    n: i64,
    nrhs: i64,
    a: *mut Self,
    lda: i64,
    af: *mut Self,
    ldaf: i64,
    equed: &mut Equed,
    s: *mut Self::Real,
    b: *mut Self,
    ldb: i64,
    x: *mut Self,
    ldx: i64,
    rcond: &mut Self::Real,
    ferr: *mut Self::Real,
    berr: *mut Self::Real,
  ) -> LapackResult<i64>;
}

macro_rules! impl_posdef_real {
  ($type_name:ident, $potrf:ident, $pstrf:ident, $pbcon:ident, $posvx:ident) => {
    impl PosDef for $type_name {
      unsafe fn potrf(uplo: Uplo, n: i64, a: *mut Self, lda: i64) -> LapackResult<i64> {
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut info: c_int = 0;
        $potrf(&uplo_, &n_, a, &lda_, &mut info);
        check_info(info)
      }

      unsafe fn pstrf(
        uplo: Uplo,
        n: i64,
        a: *mut Self,
        lda: i64,
        piv: *mut i64,
        rank: &mut i64,
        tol: Self::Real,
      ) -> LapackResult<i64> {
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut piv_: Vec<c_int> = scratch(n as usize);
        let mut rank_: c_int = 0;
        let mut work: Vec<Self::Real> = scratch(2 * n as usize);
        let mut info: c_int = 0;
        $pstrf(&uplo_, &n_, a, &lda_, piv_.as_mut_ptr(), &mut rank_, &tol, work.as_mut_ptr(), &mut info);
        if info >= 0 {
          for (i, p) in piv_.iter().take(n as usize).enumerate() {
            *piv.add(i) = *p as i64;
          }
          *rank = rank_ as i64;
        }
        check_info(info)
      }

      unsafe fn pbcon(
        uplo: Uplo,
        n: i64,
        kd: i64,
        ab: *const Self,
        ldab: i64,
        anorm: Self::Real,
        rcond: &mut Self::Real,
      ) -> LapackResult<i64> {
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let kd_ = to_lapack_int(kd, "kd")?;
        let ldab_ = to_lapack_int(ldab, "ldab")?;
        let mut work: Vec<Self> = scratch(3 * n as usize);
        let mut iwork: Vec<c_int> = scratch(n as usize);
        let mut info: c_int = 0;
        $pbcon(&uplo_, &n_, &kd_, ab, &ldab_, &anorm, rcond, work.as_mut_ptr(), iwork.as_mut_ptr(), &mut info);
        check_info(info)
      }

      unsafe fn posvx(
        fact: Factored,
        uplo: Uplo,
        n: i64,
        nrhs: i64,
        a: *mut Self,
        lda: i64,
        af: *mut Self,
        ldaf: i64,
        equed: &mut Equed,
        s: *mut Self::Real,
        b: *mut Self,
        ldb: i64,
        x: *mut Self,
        ldx: i64,
        rcond: &mut Self::Real,
        ferr: *mut Self::Real,
        berr: *mut Self::Real,
      ) -> LapackResult<i64> {
        let fact_ = fact.to_char();
        let uplo_ = uplo.to_char();
        let mut equed_ = equed.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let nrhs_ = to_lapack_int(nrhs, "nrhs")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldaf_ = to_lapack_int(ldaf, "ldaf")?;
        let ldb_ = to_lapack_int(ldb, "ldb")?;
        let ldx_ = to_lapack_int(ldx, "ldx")?;
        let mut work: Vec<Self> = scratch(3 * n as usize);
        let mut iwork: Vec<c_int> = scratch(n as usize);
        let mut info: c_int = 0;
        $posvx(
          &fact_, &uplo_, &n_, &nrhs_, a, &lda_, af, &ldaf_, &mut equed_, s, b, &ldb_, x, &ldx_,
          rcond, ferr, berr, work.as_mut_ptr(), iwork.as_mut_ptr(), &mut info,
        );
        let info = check_info(info)?;
        *equed = Equed::from_char(equed_)?;
        Ok(info)
      }
    }
  };
}

macro_rules! impl_posdef_complex {
  ($type_name:ident, $real_type:ident, $potrf:ident, $pstrf:ident, $pbcon:ident, $posvx:ident) => {
    impl PosDef for $type_name {
      unsafe fn potrf(uplo: Uplo, n: i64, a: *mut Self, lda: i64) -> LapackResult<i64> {
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut info: c_int = 0;
        $potrf(&uplo_, &n_, a, &lda_, &mut info);
        check_info(info)
      }

      unsafe fn pstrf(
        uplo: Uplo,
        n: i64,
        a: *mut Self,
        lda: i64,
        piv: *mut i64,
        rank: &mut i64,
        tol: Self::Real,
      ) -> LapackResult<i64> {
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut piv_: Vec<c_int> = scratch(n as usize);
        let mut rank_: c_int = 0;
        let mut work: Vec<Self::Real> = scratch(2 * n as usize);
        let mut info: c_int = 0;
        $pstrf(&uplo_, &n_, a, &lda_, piv_.as_mut_ptr(), &mut rank_, &tol, work.as_mut_ptr(), &mut info);
        if info >= 0 {
          for (i, p) in piv_.iter().take(n as usize).enumerate() {
            *piv.add(i) = *p as i64;
          }
          *rank = rank_ as i64;
        }
        check_info(info)
      }

      unsafe fn pbcon(
        uplo: Uplo,
        n: i64,
        kd: i64,
        ab: *const Self,
        ldab: i64,
        anorm: Self::Real,
        rcond: &mut Self::Real,
      ) -> LapackResult<i64> {
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let kd_ = to_lapack_int(kd, "kd")?;
        let ldab_ = to_lapack_int(ldab, "ldab")?;
        let mut work: Vec<Self> = scratch(2 * n as usize);
        let mut rwork: Vec<$real_type> = scratch(n as usize);
        let mut info: c_int = 0;
        $pbcon(&uplo_, &n_, &kd_, ab, &ldab_, &anorm, rcond, work.as_mut_ptr(), rwork.as_mut_ptr(), &mut info);
        check_info(info)
      }

      unsafe fn posvx(
        fact: Factored,
        uplo: Uplo,
        n: i64,
        nrhs: i64,
        a: *mut Self,
        lda: i64,
        af: *mut Self,
        ldaf: i64,
        equed: &mut Equed,
        s: *mut Self::Real,
        b: *mut Self,
        ldb: i64,
        x: *mut Self,
        ldx: i64,
        rcond: &mut Self::Real,
        ferr: *mut Self::Real,
        berr: *mut Self::Real,
      ) -> LapackResult<i64> {
        let fact_ = fact.to_char();
        let uplo_ = uplo.to_char();
        let mut equed_ = equed.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let nrhs_ = to_lapack_int(nrhs, "nrhs")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldaf_ = to_lapack_int(ldaf, "ldaf")?;
        let ldb_ = to_lapack_int(ldb, "ldb")?;
        let ldx_ = to_lapack_int(ldx, "ldx")?;
        let mut work: Vec<Self> = scratch(2 * n as usize);
        let mut rwork: Vec<$real_type> = scratch(n as usize);
        let mut info: c_int = 0;
        $posvx(
          &fact_, &uplo_, &n_, &nrhs_, a, &lda_, af, &ldaf_, &mut equed_, s, b, &ldb_, x, &ldx_,
          rcond, ferr, berr, work.as_mut_ptr(), rwork.as_mut_ptr(), &mut info,
        );
        let info = check_info(info)?;
        *equed = Equed::from_char(equed_)?;
        Ok(info)
      }
    }
  };
}

impl_posdef_real!(f32, spotrf_, spstrf_, spbcon_, sposvx_);
impl_posdef_real!(f64, dpotrf_, dpstrf_, dpbcon_, dposvx_);
impl_posdef_complex!(Complex32, f32, cpotrf_, cpstrf_, cpbcon_, cposvx_);
impl_posdef_complex!(Complex64, f64, zpotrf_, zpstrf_, zpbcon_, zposvx_);

// ---------------------------------------------------------------------- //

/// Cholesky factorization of a positive definite matrix. A positive
/// return i means the leading minor of order i is not positive definite.
pub unsafe fn potrf<T: PosDef>(uplo: Uplo, n: i64, a: *mut T, lda: i64) -> LapackResult<i64> {
  T::potrf(uplo, n, a, lda)
}

/// Cholesky factorization with complete pivoting, P^T A P = L L^H.
///
/// `piv` receives the 1-based permutation, `rank` the computed rank. A
/// negative `tol` selects the library's default threshold. A positive
/// return means the matrix is rank deficient or not positive
/// semidefinite; the factor and `rank` are still filled in.
pub unsafe fn pstrf<T: PosDef>(
  uplo: Uplo,
  n: i64,
  a: *mut T,
  lda: i64,
  piv: *mut i64,
  rank: &mut i64,
  tol: T::Real,
) -> LapackResult<i64> {
  T::pstrf(uplo, n, a, lda, piv, rank, tol)
}

/// Estimates the reciprocal condition number of a positive definite band
/// matrix from its Cholesky factor `ab` and the original 1-norm `anorm`.
pub unsafe fn pbcon<T: PosDef>(
  uplo: Uplo,
  n: i64,
  kd: i64,
  ab: *const T,
  ldab: i64,
  anorm: T::Real,
  rcond: &mut T::Real,
) -> LapackResult<i64> {
  T::pbcon(uplo, n, kd, ab, ldab, anorm, rcond)
}

/// Expert driver for positive definite systems: optional equilibration,
/// factorization reuse, iterative refinement, and error bounds. `equed`
/// is read on entry when `fact` is [`Factored::Factored`] and rewritten
/// with the equilibration actually applied.
pub unsafe fn posvx<T: PosDef>(
  fact: Factored,
  uplo: Uplo,
  n: i64,
  nrhs: i64,
  a: *mut T,
  lda: i64,
  af: *mut T,
  ldaf: i64,
  equed: &mut Equed,
  s: *mut T::Real,
  b: *mut T,
  ldb: i64,
  x: *mut T,
  ldx: i64,
  rcond: &mut T::Real,
  ferr: *mut T::Real,
  berr: *mut T::Real,
) -> LapackResult<i64> {
  T::posvx(fact, uplo, n, nrhs, a, lda, af, ldaf, equed, s, b, ldb, x, ldx, rcond, ferr, berr)
}

// ---------------------------------------------------------------------- //
