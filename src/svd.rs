use std::ffi::c_int;

use num_complex::{
  Complex32,
  Complex64,
  ComplexFloat,
};

use crate::error::LapackResult;
use crate::flags::Job;
use crate::lapack_bind::{sgesvd_, dgesvd_, cgesvd_, zgesvd_};
use crate::util::{check_info, scratch, to_lapack_int};

/// Scalar-kind capability set for the singular value decomposition. The
/// complex marshaling bodies carry the extra real workspace the Fortran
/// interface demands.
pub trait Svd: ComplexFloat {
  unsafe fn gesvd(
    jobu: Job,
    jobvt: Job,
    m: i64,
    n: i64,
    a: *mut Self,
    lda: i64,
    s: *mut Self::Real,
    u: *mut Self,
    ldu: i64,
    vt: *mut Self,
    ldvt: i64,
  ) -> LapackResult<i64>;
}

macro_rules! impl_svd_real {
  ($type_name:ident, $gesvd:ident) => {
    impl Svd for $type_name {
      unsafe fn gesvd(
        jobu: Job,
        jobvt: Job,
        m: i64,
        n: i64,
        a: *mut Self,
        lda: i64,
        s: *mut Self::Real,
        u: *mut Self,
        ldu: i64,
        vt: *mut Self,
        ldvt: i64,
      ) -> LapackResult<i64> {
        let jobu_ = jobu.to_char();
        let jobvt_ = jobvt.to_char();
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldu_ = to_lapack_int(ldu, "ldu")?;
        let ldvt_ = to_lapack_int(ldvt, "ldvt")?;
        let ineg_one: c_int = -1;
        let mut info: c_int = 0;
        // workspace query
        let mut qry_work = 0 as $type_name;
        $gesvd(
          &jobu_, &jobvt_, &m_, &n_, a, &lda_, s, u, &ldu_, vt, &ldvt_, &mut qry_work, &ineg_one,
          &mut info,
        );
        check_info(info)?;
        let lwork_ = qry_work as c_int;
        let mut work: Vec<Self> = scratch(lwork_ as usize);
        $gesvd(
          &jobu_, &jobvt_, &m_, &n_, a, &lda_, s, u, &ldu_, vt, &ldvt_, work.as_mut_ptr(), &lwork_,
          &mut info,
        );
        check_info(info)
      }
    }
  };
}

macro_rules! impl_svd_complex {
  ($type_name:ident, $real_type:ident, $gesvd:ident) => {
    impl Svd for $type_name {
      unsafe fn gesvd(
        jobu: Job,
        jobvt: Job,
        m: i64,
        n: i64,
        a: *mut Self,
        lda: i64,
        s: *mut Self::Real,
        u: *mut Self,
        ldu: i64,
        vt: *mut Self,
        ldvt: i64,
      ) -> LapackResult<i64> {
        let jobu_ = jobu.to_char();
        let jobvt_ = jobvt.to_char();
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldu_ = to_lapack_int(ldu, "ldu")?;
        let ldvt_ = to_lapack_int(ldvt, "ldvt")?;
        let min_dim = std::cmp::min(m, n) as usize;
        let mut rwork: Vec<$real_type> = scratch(5 * min_dim);
        let ineg_one: c_int = -1;
        let mut info: c_int = 0;
        // workspace query
        let mut qry_work = <$type_name>::new(0., 0.);
        $gesvd(
          &jobu_, &jobvt_, &m_, &n_, a, &lda_, s, u, &ldu_, vt, &ldvt_, &mut qry_work, &ineg_one,
          rwork.as_mut_ptr(), &mut info,
        );
        check_info(info)?;
        let lwork_ = qry_work.re as c_int;
        let mut work: Vec<Self> = scratch(lwork_ as usize);
        $gesvd(
          &jobu_, &jobvt_, &m_, &n_, a, &lda_, s, u, &ldu_, vt, &ldvt_, work.as_mut_ptr(), &lwork_,
          rwork.as_mut_ptr(), &mut info,
        );
        check_info(info)
      }
    }
  };
}

impl_svd_real!(f32, sgesvd_);
impl_svd_real!(f64, dgesvd_);
impl_svd_complex!(Complex32, f32, cgesvd_);
impl_svd_complex!(Complex64, f64, zgesvd_);

// ---------------------------------------------------------------------- //

/// Singular value decomposition A = U diag(s) V^H. Singular values land
/// in `s` in descending order; `jobu`/`jobvt` select how much of U and
/// V^H is formed. A positive return counts superdiagonals that failed to
/// converge, with the partial results documented by the backend.
pub unsafe fn gesvd<T: Svd>(
  jobu: Job,
  jobvt: Job,
  m: i64,
  n: i64,
  a: *mut T,
  lda: i64,
  s: *mut T::Real,
  u: *mut T,
  ldu: i64,
  vt: *mut T,
  ldvt: i64,
) -> LapackResult<i64> {
  T::gesvd(jobu, jobvt, m, n, a, lda, s, u, ldu, vt, ldvt)
}

// ---------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use std::ffi::{c_char, c_int};

  use num_complex::{Complex32, Complex64, ComplexFloat};
  use num_traits::{One, Zero};

  use super::*;
  use crate::blas_bind::{sgemm_, dgemm_, cgemm_, zgemm_};
  use crate::init_utils::BufferGenerator;

  #[test]
  fn test_gesvd_diagonal_singular_values() {
    let mut a = [3f64, 0., 0., 0., 2., 0., 0., 0., 1.];
    let mut s = [0f64; 3];
    let mut u = [0f64; 9];
    let mut vt = [0f64; 9];
    let info = unsafe {
      gesvd(
        Job::SomeVec, Job::SomeVec, 3, 3, a.as_mut_ptr(), 3, s.as_mut_ptr(), u.as_mut_ptr(), 3,
        vt.as_mut_ptr(), 3,
      )
    }
    .unwrap();
    assert_eq!(info, 0);
    for (got, want) in s.iter().zip([3., 2., 1.].iter()) {
      assert!((got - want).abs() < 1e-12);
    }
  }

  macro_rules! test_gesvd_reconstruction {
    ($type_name:ident, $gemm:ident, $tol:expr) => {
      let m = 6;
      let n = 4;
      let min_dim = 4;
      let mut a = <$type_name>::random_normal(m * n);
      let a_copy = a.clone();
      let mut s = vec![<<$type_name as ComplexFloat>::Real as Zero>::zero(); min_dim];
      let mut u = vec![<$type_name>::zero(); m * min_dim];
      let mut vt = vec![<$type_name>::zero(); min_dim * n];
      let info = unsafe {
        gesvd(
          Job::SomeVec,
          Job::SomeVec,
          m as i64,
          n as i64,
          a.as_mut_ptr(),
          m as i64,
          s.as_mut_ptr(),
          u.as_mut_ptr(),
          m as i64,
          vt.as_mut_ptr(),
          min_dim as i64,
        )
      }
      .unwrap();
      assert_eq!(info, 0);
      assert!(s.windows(2).all(|w| w[0] >= w[1]));
      // scale the columns of u by the singular values, then u vt = a
      for j in 0..min_dim {
        for i in 0..m {
          u[i + j * m] = u[i + j * m] * s[j];
        }
      }
      let one = <$type_name>::one();
      let zero = <$type_name>::zero();
      let transa = 'N' as c_char;
      let transb = 'N' as c_char;
      let (m_, n_, k_) = (m as c_int, n as c_int, min_dim as c_int);
      let (lda_, ldb_, ldc_) = (m as c_int, min_dim as c_int, m as c_int);
      let mut prod = vec![<$type_name>::zero(); m * n];
      unsafe {
        $gemm(
          &transa, &transb, &m_, &n_, &k_, &one, u.as_ptr(), &lda_, vt.as_ptr(), &ldb_, &zero,
          prod.as_mut_ptr(), &ldc_,
        )
      };
      for (got, want) in prod.iter().zip(a_copy.iter()) {
        assert!((*got - *want).abs() < $tol);
      }
    };
  }

  #[test]
  fn test_gesvd_reconstruction() {
    test_gesvd_reconstruction!(f32,       sgemm_, 1e-4 );
    test_gesvd_reconstruction!(f64,       dgemm_, 1e-12);
    test_gesvd_reconstruction!(Complex32, cgemm_, 1e-4 );
    test_gesvd_reconstruction!(Complex64, zgemm_, 1e-12);
  }

  #[test]
  fn test_gesvd_deterministic() {
    let m = 5;
    let n = 5;
    let a0 = Complex64::random_normal(m * n);
    let run = |mut a: Vec<Complex64>| {
      let mut s = vec![0f64; n];
      let mut u = vec![Complex64::zero(); m * n];
      let mut vt = vec![Complex64::zero(); n * n];
      unsafe {
        gesvd(
          Job::SomeVec,
          Job::SomeVec,
          m as i64,
          n as i64,
          a.as_mut_ptr(),
          m as i64,
          s.as_mut_ptr(),
          u.as_mut_ptr(),
          m as i64,
          vt.as_mut_ptr(),
          n as i64,
        )
      }
      .unwrap();
      (s, u, vt)
    };
    let first = run(a0.clone());
    let second = run(a0);
    assert_eq!(first, second);
  }
}
