use std::ffi::c_int;

use num_complex::{
  Complex32,
  Complex64,
  ComplexFloat,
};

use crate::error::LapackResult;
use crate::lapack_bind::{sgeqrf_, dgeqrf_, cgeqrf_, zgeqrf_};
use crate::lapack_bind::{sorgqr_, dorgqr_, cungqr_, zungqr_};
use crate::util::{check_info, scratch, to_lapack_int};

/// Scalar-kind capability set for the QR routines. Both operations size
/// their workspace with a preliminary query.
pub trait Qr: ComplexFloat {
  unsafe fn geqrf(m: i64, n: i64, a: *mut Self, lda: i64, tau: *mut Self) -> LapackResult<i64>;

  unsafe fn ungqr(
    m: i64,
    n: i64,
    k: i64,
    a: *mut Self,
    lda: i64,
    tau: *const Self,
  ) -> LapackResult<i64>;
}

macro_rules! impl_qr {
  ($type_name:ident, $geqrf:ident, $ungqr:ident, $qry_zero:expr, $to_real:expr) => {
    impl Qr for $type_name {
      unsafe fn geqrf(m: i64, n: i64, a: *mut Self, lda: i64, tau: *mut Self) -> LapackResult<i64> {
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ineg_one: c_int = -1;
        let mut info: c_int = 0;
        // workspace query
        let mut qry_work = $qry_zero;
        $geqrf(&m_, &n_, a, &lda_, tau, &mut qry_work, &ineg_one, &mut info);
        check_info(info)?;
        let lwork_ = $to_real(qry_work) as c_int;
        let mut work: Vec<Self> = scratch(lwork_ as usize);
        $geqrf(&m_, &n_, a, &lda_, tau, work.as_mut_ptr(), &lwork_, &mut info);
        check_info(info)
      }

      unsafe fn ungqr(
        m: i64,
        n: i64,
        k: i64,
        a: *mut Self,
        lda: i64,
        tau: *const Self,
      ) -> LapackResult<i64> {
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let k_ = to_lapack_int(k, "k")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ineg_one: c_int = -1;
        let mut info: c_int = 0;
        // workspace query
        let mut qry_work = $qry_zero;
        $ungqr(&m_, &n_, &k_, a, &lda_, tau, &mut qry_work, &ineg_one, &mut info);
        check_info(info)?;
        let lwork_ = $to_real(qry_work) as c_int;
        let mut work: Vec<Self> = scratch(lwork_ as usize);
        $ungqr(&m_, &n_, &k_, a, &lda_, tau, work.as_mut_ptr(), &lwork_, &mut info);
        check_info(info)
      }
    }
  };
}

impl_qr!(f32,       sgeqrf_, sorgqr_, 0f32,                   |x| x              );
impl_qr!(f64,       dgeqrf_, dorgqr_, 0f64,                   |x| x              );
impl_qr!(Complex32, cgeqrf_, cungqr_, Complex32::new(0., 0.), |x: Complex32| x.re);
impl_qr!(Complex64, zgeqrf_, zungqr_, Complex64::new(0., 0.), |x: Complex64| x.re);

// ---------------------------------------------------------------------- //

/// QR factorization of an m-by-n matrix. On exit the upper triangle of
/// `a` holds R and the lower part the reflector vectors, with their scale
/// factors in `tau` (length min(m, n)).
pub unsafe fn geqrf<T: Qr>(m: i64, n: i64, a: *mut T, lda: i64, tau: *mut T) -> LapackResult<i64> {
  T::geqrf(m, n, a, lda, tau)
}

/// Overwrites `a` with the first n columns of the unitary matrix Q
/// defined by the k reflectors a previous [`geqrf`] stored there.
pub unsafe fn ungqr<T: Qr>(
  m: i64,
  n: i64,
  k: i64,
  a: *mut T,
  lda: i64,
  tau: *const T,
) -> LapackResult<i64> {
  T::ungqr(m, n, k, a, lda, tau)
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
  use crate::lapack_bind::dgeqrf_;

  macro_rules! test_qr {
    ($type_name:ident, $gemm:ident, $transa:expr, $tol:expr) => {
      let m = 6;
      let n = 4;
      let mut a = <$type_name>::random_normal(m * n);
      let a_copy = a.clone();
      let mut tau = vec![<$type_name>::zero(); n];
      let info = unsafe {
        geqrf(m as i64, n as i64, a.as_mut_ptr(), m as i64, tau.as_mut_ptr())
      }
      .unwrap();
      assert_eq!(info, 0);
      // R is the upper triangle of the factored panel
      let mut r = vec![<$type_name>::zero(); n * n];
      for j in 0..n {
        for i in 0..=j {
          r[i + j * n] = a[i + j * m];
        }
      }
      let info = unsafe {
        ungqr(m as i64, n as i64, n as i64, a.as_mut_ptr(), m as i64, tau.as_ptr())
      }
      .unwrap();
      assert_eq!(info, 0);
      let one = <$type_name>::one();
      let zero = <$type_name>::zero();
      // isometry: Q^H Q = I
      let transa = $transa as c_char;
      let transb = 'N' as c_char;
      let (m_, n_, k_) = (n as c_int, n as c_int, m as c_int);
      let lda_ = m as c_int;
      let mut qhq = vec![<$type_name>::zero(); n * n];
      let ldc_ = n as c_int;
      unsafe {
        $gemm(
          &transa, &transb, &m_, &n_, &k_, &one, a.as_ptr(), &lda_, a.as_ptr(), &lda_, &zero,
          qhq.as_mut_ptr(), &ldc_,
        )
      };
      let eye = <$type_name>::eye(n);
      for (got, want) in qhq.iter().zip(eye.iter()) {
        assert!((*got - *want).abs() < $tol);
      }
      // reconstruction: Q R = A
      let transa = 'N' as c_char;
      let (m_, n_, k_) = (m as c_int, n as c_int, n as c_int);
      let ldb_ = n as c_int;
      let mut qr_prod = vec![<$type_name>::zero(); m * n];
      let ldc_ = m as c_int;
      unsafe {
        $gemm(
          &transa, &transb, &m_, &n_, &k_, &one, a.as_ptr(), &lda_, r.as_ptr(), &ldb_, &zero,
          qr_prod.as_mut_ptr(), &ldc_,
        )
      };
      for (got, want) in qr_prod.iter().zip(a_copy.iter()) {
        assert!((*got - *want).abs() < $tol);
      }
    };
  }

  #[test]
  fn test_qr() {
    test_qr!(f32,       sgemm_, 'T', 1e-4 );
    test_qr!(f64,       dgemm_, 'T', 1e-12);
    test_qr!(Complex32, cgemm_, 'C', 1e-4 );
    test_qr!(Complex64, zgemm_, 'C', 1e-12);
  }

  // Workspace length is a performance parameter: the queried size and a
  // generously over-sized buffer must produce identical factors.
  #[test]
  fn test_query_matches_oversized_workspace() {
    let m = 8;
    let n = 8;
    let a0 = f64::random_normal(m * n);
    let mut a_qry = a0.clone();
    let mut tau_qry = vec![0f64; n];
    unsafe { geqrf(m as i64, n as i64, a_qry.as_mut_ptr(), m as i64, tau_qry.as_mut_ptr()) }
      .unwrap();
    let mut a_big = a0;
    let mut tau_big = vec![0f64; n];
    let (m_, n_, lda_) = (m as c_int, n as c_int, m as c_int);
    let lwork_: c_int = 1024;
    let mut work = vec![0f64; 1024];
    let mut info: c_int = 0;
    unsafe {
      dgeqrf_(&m_, &n_, a_big.as_mut_ptr(), &lda_, tau_big.as_mut_ptr(), work.as_mut_ptr(), &lwork_, &mut info)
    };
    assert_eq!(info, 0);
    assert_eq!(a_qry, a_big);
    assert_eq!(tau_qry, tau_big);
  }
}
