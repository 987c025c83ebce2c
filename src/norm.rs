use num_complex::{
  Complex32,
  Complex64,
  ComplexFloat,
};

use crate::error::LapackResult;
use crate::flags::{Norm, Uplo};
use crate::lapack_bind::{slange_, dlange_, clange_, zlange_};
use crate::lapack_bind::{slansy_, dlansy_, clansy_, zlansy_};
use crate::util::{scratch, to_lapack_int};

/// Scalar-kind capability set for the matrix norm routines. Both return
/// the norm value directly; the workspace is real-typed for every kind
/// and only referenced for the norms that need it.
pub trait MatNorm: ComplexFloat {
  unsafe fn lange(norm: Norm, m: i64, n: i64, a: *const Self, lda: i64)
    -> LapackResult<Self::Real>;

  unsafe fn lansy(norm: Norm, uplo: Uplo, n: i64, a: *const Self, lda: i64)
    -> LapackResult<Self::Real>;
}

macro_rules! impl_matnorm {
  ($type_name:ident, $real_type:ident, $lange:ident, $lansy:ident) => {
    impl MatNorm for $type_name {
      unsafe fn lange(
        norm: Norm,
        m: i64,
        n: i64,
        a: *const Self,
        lda: i64,
      ) -> LapackResult<Self::Real> {
        let norm_ = norm.to_char();
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut work: Vec<$real_type> = scratch(m as usize);
        Ok($lange(&norm_, &m_, &n_, a, &lda_, work.as_mut_ptr()))
      }

      unsafe fn lansy(
        norm: Norm,
        uplo: Uplo,
        n: i64,
        a: *const Self,
        lda: i64,
      ) -> LapackResult<Self::Real> {
        let norm_ = norm.to_char();
        let uplo_ = uplo.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let mut work: Vec<$real_type> = scratch(n as usize);
        Ok($lansy(&norm_, &uplo_, &n_, a, &lda_, work.as_mut_ptr()))
      }
    }
  };
}

impl_matnorm!(f32,       f32, slange_, slansy_);
impl_matnorm!(f64,       f64, dlange_, dlansy_);
impl_matnorm!(Complex32, f32, clange_, clansy_);
impl_matnorm!(Complex64, f64, zlange_, zlansy_);

// ---------------------------------------------------------------------- //

/// Norm of a general m-by-n matrix: largest absolute element, 1-norm,
/// infinity-norm or Frobenius norm.
pub unsafe fn lange<T: MatNorm>(
  norm: Norm,
  m: i64,
  n: i64,
  a: *const T,
  lda: i64,
) -> LapackResult<T::Real> {
  T::lange(norm, m, n, a, lda)
}

/// Norm of a symmetric matrix of which only the `uplo` triangle is
/// referenced.
pub unsafe fn lansy<T: MatNorm>(
  norm: Norm,
  uplo: Uplo,
  n: i64,
  a: *const T,
  lda: i64,
) -> LapackResult<T::Real> {
  T::lansy(norm, uplo, n, a, lda)
}

// ---------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use num_complex::Complex64;

  use super::*;

  #[test]
  fn test_lange() {
    // [[1, -2], [3, 4]] in column-major order
    let a = [1f64, 3., -2., 4.];
    unsafe {
      assert_eq!(lange(Norm::Max, 2, 2, a.as_ptr(), 2).unwrap(), 4.);
      assert_eq!(lange(Norm::One, 2, 2, a.as_ptr(), 2).unwrap(), 6.);
      assert_eq!(lange(Norm::Inf, 2, 2, a.as_ptr(), 2).unwrap(), 7.);
      assert!((lange(Norm::Fro, 2, 2, a.as_ptr(), 2).unwrap() - 30f64.sqrt()).abs() < 1e-14);
    }
  }

  #[test]
  fn test_lange_complex() {
    let a = [Complex64::new(3., 4.)];
    let norm = unsafe { lange(Norm::Fro, 1, 1, a.as_ptr(), 1) }.unwrap();
    assert!((norm - 5.).abs() < 1e-14);
  }

  #[test]
  fn test_lansy() {
    // symmetric [[2, 1], [1, 3]], lower triangle stored
    let a = [2f64, 1., -1e30, 3.];
    unsafe {
      assert_eq!(lansy(Norm::One, Uplo::Lower, 2, a.as_ptr(), 2).unwrap(), 4.);
      assert_eq!(lansy(Norm::Max, Uplo::Lower, 2, a.as_ptr(), 2).unwrap(), 3.);
      assert!(
        (lansy(Norm::Fro, Uplo::Lower, 2, a.as_ptr(), 2).unwrap() - 15f64.sqrt()).abs() < 1e-14
      );
    }
  }
}
