use std::ffi::c_int;

use num_complex::{
  Complex,
  Complex32,
  Complex64,
  ComplexFloat,
};

use crate::error::LapackResult;
use crate::flags::{Job, Sense, Sort};
use crate::lapack_bind::{sggesx_, dggesx_, cggesx_, zggesx_};
use crate::util::{check_info, merge_split_complex, scratch, to_lapack_int};

/// Eigenvalue selector for the real generalized Schur routines; called by
/// the backend with pointers to alphar, alphai and beta of a candidate
/// eigenvalue.
pub type Select3<T> = Option<unsafe extern "C" fn(*const T, *const T, *const T) -> c_int>;

/// Eigenvalue selector for the complex generalized Schur routines; called
/// with pointers to alpha and beta.
pub type Select2<T> = Option<unsafe extern "C" fn(*const T, *const T) -> c_int>;

/// Scalar-kind capability set for the generalized Schur factorization.
/// Real kinds take a three-argument selector and report eigenvalues as
/// split real/imaginary arrays, merged into `alpha` before returning;
/// complex kinds take a two-argument selector and write `alpha` directly.
pub trait SchurGen: ComplexFloat {
  type Select: Copy;

  unsafe fn ggesx(
    jobvsl: Job,
    jobvsr: Job,
    sort: Sort,
    select: Self::Select,
    sense: Sense,
    n: i64,
    a: *mut Self,
    lda: i64,
    b: *mut Self,
    ldb: i64,
    sdim: &mut i64,
    alpha: *mut Complex<Self::Real>,
    beta: *mut Self,
    vsl: *mut Self,
    ldvsl: i64,
    vsr: *mut Self,
    ldvsr: i64,
    rconde: *mut Self::Real,
    rcondv: *mut Self::Real,
  ) -> LapackResult<i64>;
}

macro_rules! impl_schur_real {
  ($type_name:ident, $ggesx:ident) => {
    impl SchurGen for $type_name {
      type Select = Select3<$type_name>;

      unsafe fn ggesx(
        jobvsl: Job,
        jobvsr: Job,
        sort: Sort,
        select: Self::Select,
        sense: Sense,
        n: i64,
        a: *mut Self,
        lda: i64,
        b: *mut Self,
        ldb: i64,
        sdim: &mut i64,
        alpha: *mut Complex<Self::Real>,
        beta: *mut Self,
        vsl: *mut Self,
        ldvsl: i64,
        vsr: *mut Self,
        ldvsr: i64,
        rconde: *mut Self::Real,
        rcondv: *mut Self::Real,
      ) -> LapackResult<i64> {
        let jobvsl_ = jobvsl.to_char();
        let jobvsr_ = jobvsr.to_char();
        let sort_ = sort.to_char();
        let sense_ = sense.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldb_ = to_lapack_int(ldb, "ldb")?;
        let ldvsl_ = to_lapack_int(ldvsl, "ldvsl")?;
        let ldvsr_ = to_lapack_int(ldvsr, "ldvsr")?;
        let mut sdim_: c_int = *sdim as c_int;
        let mut info: c_int = 0;
        // split-complex representation
        let mut alphar: Vec<Self> = scratch(n as usize);
        let mut alphai: Vec<Self> = scratch(n as usize);
        // workspace query
        let mut qry_work = 0 as $type_name;
        let mut qry_iwork: c_int = 0;
        let mut qry_bwork: c_int = 0;
        let ineg_one: c_int = -1;
        $ggesx(
          &jobvsl_, &jobvsr_, &sort_, select, &sense_, &n_, a, &lda_, b, &ldb_, &mut sdim_,
          alphar.as_mut_ptr(), alphai.as_mut_ptr(), beta, vsl, &ldvsl_, vsr, &ldvsr_, rconde,
          rcondv, &mut qry_work, &ineg_one, &mut qry_iwork, &ineg_one, &mut qry_bwork, &mut info,
        );
        check_info(info)?;
        let lwork_ = qry_work as c_int;
        let liwork_ = qry_iwork;
        let mut work: Vec<Self> = scratch(lwork_ as usize);
        let mut iwork: Vec<c_int> = scratch(liwork_ as usize);
        let mut bwork: Vec<c_int> = scratch(n as usize);
        $ggesx(
          &jobvsl_, &jobvsr_, &sort_, select, &sense_, &n_, a, &lda_, b, &ldb_, &mut sdim_,
          alphar.as_mut_ptr(), alphai.as_mut_ptr(), beta, vsl, &ldvsl_, vsr, &ldvsr_, rconde,
          rcondv, work.as_mut_ptr(), &lwork_, iwork.as_mut_ptr(), &liwork_, bwork.as_mut_ptr(),
          &mut info,
        );
        let info = check_info(info)?;
        *sdim = sdim_ as i64;
        // merge split-complex representation
        merge_split_complex(&alphar[..n as usize], &alphai[..n as usize], alpha);
        Ok(info)
      }
    }
  };
}

macro_rules! impl_schur_complex {
  ($type_name:ident, $real_type:ident, $ggesx:ident) => {
    impl SchurGen for $type_name {
      type Select = Select2<$type_name>;

      unsafe fn ggesx(
        jobvsl: Job,
        jobvsr: Job,
        sort: Sort,
        select: Self::Select,
        sense: Sense,
        n: i64,
        a: *mut Self,
        lda: i64,
        b: *mut Self,
        ldb: i64,
        sdim: &mut i64,
        alpha: *mut Complex<Self::Real>,
        beta: *mut Self,
        vsl: *mut Self,
        ldvsl: i64,
        vsr: *mut Self,
        ldvsr: i64,
        rconde: *mut Self::Real,
        rcondv: *mut Self::Real,
      ) -> LapackResult<i64> {
        let jobvsl_ = jobvsl.to_char();
        let jobvsr_ = jobvsr.to_char();
        let sort_ = sort.to_char();
        let sense_ = sense.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let lda_ = to_lapack_int(lda, "lda")?;
        let ldb_ = to_lapack_int(ldb, "ldb")?;
        let ldvsl_ = to_lapack_int(ldvsl, "ldvsl")?;
        let ldvsr_ = to_lapack_int(ldvsr, "ldvsr")?;
        let mut sdim_: c_int = *sdim as c_int;
        let mut info: c_int = 0;
        // workspace query
        let mut qry_work = <$type_name>::new(0., 0.);
        let mut qry_rwork: $real_type = 0.;
        let mut qry_iwork: c_int = 0;
        let mut qry_bwork: c_int = 0;
        let ineg_one: c_int = -1;
        $ggesx(
          &jobvsl_, &jobvsr_, &sort_, select, &sense_, &n_, a, &lda_, b, &ldb_, &mut sdim_, alpha,
          beta, vsl, &ldvsl_, vsr, &ldvsr_, rconde, rcondv, &mut qry_work, &ineg_one,
          &mut qry_rwork, &mut qry_iwork, &ineg_one, &mut qry_bwork, &mut info,
        );
        check_info(info)?;
        let lwork_ = qry_work.re as c_int;
        let liwork_ = qry_iwork;
        let mut work: Vec<Self> = scratch(lwork_ as usize);
        let mut rwork: Vec<$real_type> = scratch(8 * n as usize);
        let mut iwork: Vec<c_int> = scratch(liwork_ as usize);
        let mut bwork: Vec<c_int> = scratch(n as usize);
        $ggesx(
          &jobvsl_, &jobvsr_, &sort_, select, &sense_, &n_, a, &lda_, b, &ldb_, &mut sdim_, alpha,
          beta, vsl, &ldvsl_, vsr, &ldvsr_, rconde, rcondv, work.as_mut_ptr(), &lwork_,
          rwork.as_mut_ptr(), iwork.as_mut_ptr(), &liwork_, bwork.as_mut_ptr(), &mut info,
        );
        let info = check_info(info)?;
        *sdim = sdim_ as i64;
        Ok(info)
      }
    }
  };
}

impl_schur_real!(f32, sggesx_);
impl_schur_real!(f64, dggesx_);
impl_schur_complex!(Complex32, f32, cggesx_);
impl_schur_complex!(Complex64, f64, zggesx_);

// ---------------------------------------------------------------------- //

/// Generalized Schur factorization of the pencil (A, B), with optional
/// eigenvalue ordering and reciprocal condition estimates.
///
/// Generalized eigenvalues are returned as `alpha[i] / beta[i]`; for real
/// scalar kinds the split representation reported by the backend is
/// merged entry by entry into the complex `alpha`. `sdim` receives the
/// number of eigenvalues the selector accepted (zero when `sort` is
/// [`Sort::NotSorted`]). `rconde` and `rcondv` must hold two entries
/// each; they are written only for the senses that request them.
pub unsafe fn ggesx<T: SchurGen>(
  jobvsl: Job,
  jobvsr: Job,
  sort: Sort,
  select: T::Select,
  sense: Sense,
  n: i64,
  a: *mut T,
  lda: i64,
  b: *mut T,
  ldb: i64,
  sdim: &mut i64,
  alpha: *mut Complex<T::Real>,
  beta: *mut T,
  vsl: *mut T,
  ldvsl: i64,
  vsr: *mut T,
  ldvsr: i64,
  rconde: *mut T::Real,
  rcondv: *mut T::Real,
) -> LapackResult<i64> {
  T::ggesx(
    jobvsl, jobvsr, sort, select, sense, n, a, lda, b, ldb, sdim, alpha, beta, vsl, ldvsl, vsr,
    ldvsr, rconde, rcondv,
  )
}

// ---------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use num_complex::{Complex64, ComplexFloat};
  use num_traits::Zero;

  use super::*;
  use crate::init_utils::BufferGenerator;

  #[test]
  fn test_ggesx_rotation_pencil() {
    // (A, I) with A a rotation by pi/2: eigenvalues are the conjugate
    // pair +/- i, reported split and merged back into complex form
    let n = 2;
    let mut a = [0f64, 1., -1., 0.];
    let mut b = f64::eye(n);
    let mut sdim = 0i64;
    let mut alpha = vec![Complex64::zero(); n];
    let mut beta = [0f64; 2];
    let mut vsl = [0f64; 1];
    let mut vsr = [0f64; 1];
    let mut rconde = [0f64; 2];
    let mut rcondv = [0f64; 2];
    let info = unsafe {
      ggesx(
        Job::NoVec,
        Job::NoVec,
        Sort::NotSorted,
        None,
        Sense::None,
        n as i64,
        a.as_mut_ptr(),
        n as i64,
        b.as_mut_ptr(),
        n as i64,
        &mut sdim,
        alpha.as_mut_ptr(),
        beta.as_mut_ptr(),
        vsl.as_mut_ptr(),
        1,
        vsr.as_mut_ptr(),
        1,
        rconde.as_mut_ptr(),
        rcondv.as_mut_ptr(),
      )
    }
    .unwrap();
    assert_eq!(info, 0);
    assert_eq!(sdim, 0);
    let mut eigs: Vec<Complex64> = alpha
      .iter()
      .zip(beta.iter())
      .map(|(al, be)| *al / *be)
      .collect();
    eigs.sort_by(|x, y| x.im.partial_cmp(&y.im).unwrap());
    assert!((eigs[0] - Complex64::new(0., -1.)).abs() < 1e-12);
    assert!((eigs[1] - Complex64::new(0., 1.)).abs() < 1e-12);
  }

  #[test]
  fn test_ggesx_complex_diagonal_pencil() {
    let n = 2;
    let mut a = [Complex64::new(1., 1.), Complex64::zero(), Complex64::zero(), Complex64::new(2., 0.)];
    let mut b = Complex64::eye(n);
    let mut sdim = 0i64;
    let mut alpha = vec![Complex64::zero(); n];
    let mut beta = vec![Complex64::zero(); n];
    let mut vsl = [Complex64::zero(); 1];
    let mut vsr = [Complex64::zero(); 1];
    let mut rconde = [0f64; 2];
    let mut rcondv = [0f64; 2];
    let info = unsafe {
      ggesx(
        Job::NoVec,
        Job::NoVec,
        Sort::NotSorted,
        None,
        Sense::None,
        n as i64,
        a.as_mut_ptr(),
        n as i64,
        b.as_mut_ptr(),
        n as i64,
        &mut sdim,
        alpha.as_mut_ptr(),
        beta.as_mut_ptr(),
        vsl.as_mut_ptr(),
        1,
        vsr.as_mut_ptr(),
        1,
        rconde.as_mut_ptr(),
        rcondv.as_mut_ptr(),
      )
    }
    .unwrap();
    assert_eq!(info, 0);
    let mut eigs: Vec<Complex64> = alpha
      .iter()
      .zip(beta.iter())
      .map(|(al, be)| *al / *be)
      .collect();
    eigs.sort_by(|x, y| x.re.partial_cmp(&y.re).unwrap());
    assert!((eigs[0] - Complex64::new(1., 1.)).abs() < 1e-12);
    assert!((eigs[1] - Complex64::new(2., 0.)).abs() < 1e-12);
  }
}
