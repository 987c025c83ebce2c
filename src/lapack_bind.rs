extern crate lapack_src;

use std::ffi::{
  c_char,
  c_int,
};

use num_complex::{Complex32, Complex64};

use crate::schur::{Select2, Select3};

macro_rules! gesv {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      n:    *const c_int,
      nrhs: *const c_int,
      a:    *mut   $type_name,
      lda:  *const c_int,
      ipiv: *mut   c_int,
      b:    *mut   $type_name,
      ldb:  *const c_int,
      info: *mut   c_int,
    );
  };
}

extern "C" {
  gesv!(sgesv_, f32      );
  gesv!(dgesv_, f64      );
  gesv!(cgesv_, Complex32);
  gesv!(zgesv_, Complex64);
}

macro_rules! getrf {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      m:    *const c_int,
      n:    *const c_int,
      a:    *mut   $type_name,
      lda:  *const c_int,
      ipiv: *mut   c_int,
      info: *mut   c_int,
    );
  };
}

extern "C" {
  getrf!(sgetrf_, f32      );
  getrf!(dgetrf_, f64      );
  getrf!(cgetrf_, Complex32);
  getrf!(zgetrf_, Complex64);
}

macro_rules! getrs {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      trans: *const c_char,
      n:     *const c_int,
      nrhs:  *const c_int,
      a:     *const $type_name,
      lda:   *const c_int,
      ipiv:  *const c_int,
      b:     *mut   $type_name,
      ldb:   *const c_int,
      info:  *mut   c_int,
    );
  };
}

extern "C" {
  getrs!(sgetrs_, f32      );
  getrs!(dgetrs_, f64      );
  getrs!(cgetrs_, Complex32);
  getrs!(zgetrs_, Complex64);
}

macro_rules! geequ {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      m:      *const c_int,
      n:      *const c_int,
      a:      *const $type_name,
      lda:    *const c_int,
      r:      *mut   $real_type,
      c:      *mut   $real_type,
      rowcnd: *mut   $real_type,
      colcnd: *mut   $real_type,
      amax:   *mut   $real_type,
      info:   *mut   c_int,
    );
  };
}

extern "C" {
  geequ!(sgeequ_, f32,       f32);
  geequ!(dgeequ_, f64,       f64);
  geequ!(cgeequ_, Complex32, f32);
  geequ!(zgeequ_, Complex64, f64);
}

macro_rules! sytrf {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      uplo:  *const c_char,
      n:     *const c_int,
      a:     *mut   $type_name,
      lda:   *const c_int,
      ipiv:  *mut   c_int,
      work:  *mut   $type_name,
      lwork: *const c_int,
      info:  *mut   c_int,
    );
  };
}

extern "C" {
  sytrf!(ssytrf_, f32      );
  sytrf!(dsytrf_, f64      );
  sytrf!(csytrf_, Complex32);
  sytrf!(zsytrf_, Complex64);
}

macro_rules! potrf {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      uplo: *const c_char,
      n:    *const c_int,
      a:    *mut   $type_name,
      lda:  *const c_int,
      info: *mut   c_int,
    );
  };
}

extern "C" {
  potrf!(spotrf_, f32      );
  potrf!(dpotrf_, f64      );
  potrf!(cpotrf_, Complex32);
  potrf!(zpotrf_, Complex64);
}

macro_rules! pstrf {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      uplo: *const c_char,
      n:    *const c_int,
      a:    *mut   $type_name,
      lda:  *const c_int,
      piv:  *mut   c_int,
      rank: *mut   c_int,
      tol:  *const $real_type,
      work: *mut   $real_type,
      info: *mut   c_int,
    );
  };
}

extern "C" {
  pstrf!(spstrf_, f32,       f32);
  pstrf!(dpstrf_, f64,       f64);
  pstrf!(cpstrf_, Complex32, f32);
  pstrf!(zpstrf_, Complex64, f64);
}

macro_rules! pbcon_real {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      uplo:  *const c_char,
      n:     *const c_int,
      kd:    *const c_int,
      ab:    *const $type_name,
      ldab:  *const c_int,
      anorm: *const $type_name,
      rcond: *mut   $type_name,
      work:  *mut   $type_name,
      iwork: *mut   c_int,
      info:  *mut   c_int,
    );
  };
}

macro_rules! pbcon_complex {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      uplo:  *const c_char,
      n:     *const c_int,
      kd:    *const c_int,
      ab:    *const $type_name,
      ldab:  *const c_int,
      anorm: *const $real_type,
      rcond: *mut   $real_type,
      work:  *mut   $type_name,
      rwork: *mut   $real_type,
      info:  *mut   c_int,
    );
  };
}

extern "C" {
  pbcon_real!(spbcon_, f32);
  pbcon_real!(dpbcon_, f64);
  pbcon_complex!(cpbcon_, Complex32, f32);
  pbcon_complex!(zpbcon_, Complex64, f64);
}

macro_rules! posvx_real {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      fact:  *const c_char,
      uplo:  *const c_char,
      n:     *const c_int,
      nrhs:  *const c_int,
      a:     *mut   $type_name,
      lda:   *const c_int,
      af:    *mut   $type_name,
      ldaf:  *const c_int,
      equed: *mut   c_char,
      s:     *mut   $type_name,
      b:     *mut   $type_name,
      ldb:   *const c_int,
      x:     *mut   $type_name,
      ldx:   *const c_int,
      rcond: *mut   $type_name,
      ferr:  *mut   $type_name,
      berr:  *mut   $type_name,
      work:  *mut   $type_name,
      iwork: *mut   c_int,
      info:  *mut   c_int,
    );
  };
}

macro_rules! posvx_complex {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      fact:  *const c_char,
      uplo:  *const c_char,
      n:     *const c_int,
      nrhs:  *const c_int,
      a:     *mut   $type_name,
      lda:   *const c_int,
      af:    *mut   $type_name,
      ldaf:  *const c_int,
      equed: *mut   c_char,
      s:     *mut   $real_type,
      b:     *mut   $type_name,
      ldb:   *const c_int,
      x:     *mut   $type_name,
      ldx:   *const c_int,
      rcond: *mut   $real_type,
      ferr:  *mut   $real_type,
      berr:  *mut   $real_type,
      work:  *mut   $type_name,
      rwork: *mut   $real_type,
      info:  *mut   c_int,
    );
  };
}

extern "C" {
  posvx_real!(sposvx_, f32);
  posvx_real!(dposvx_, f64);
  posvx_complex!(cposvx_, Complex32, f32);
  posvx_complex!(zposvx_, Complex64, f64);
}

macro_rules! geqrf {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      m:     *const c_int,
      n:     *const c_int,
      a:     *mut   $type_name,
      lda:   *const c_int,
      tau:   *mut   $type_name,
      work:  *mut   $type_name,
      lwork: *const c_int,
      info:  *mut   c_int,
    );
  };
}

extern "C" {
  geqrf!(sgeqrf_, f32      );
  geqrf!(dgeqrf_, f64      );
  geqrf!(cgeqrf_, Complex32);
  geqrf!(zgeqrf_, Complex64);
}

macro_rules! ungqr {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      m:     *const c_int,
      n:     *const c_int,
      k:     *const c_int,
      a:     *mut   $type_name,
      lda:   *const c_int,
      tau:   *const $type_name,
      work:  *mut   $type_name,
      lwork: *const c_int,
      info:  *mut   c_int,
    );
  };
}

extern "C" {
  ungqr!(sorgqr_, f32      );
  ungqr!(dorgqr_, f64      );
  ungqr!(cungqr_, Complex32);
  ungqr!(zungqr_, Complex64);
}

macro_rules! gesvd_real {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      jobu:  *const c_char,
      jobvt: *const c_char,
      m:     *const c_int,
      n:     *const c_int,
      a:     *mut   $type_name,
      lda:   *const c_int,
      s:     *mut   $type_name,
      u:     *mut   $type_name,
      ldu:   *const c_int,
      vt:    *mut   $type_name,
      ldvt:  *const c_int,
      work:  *mut   $type_name,
      lwork: *const c_int,
      info:  *mut   c_int,
    );
  };
}

macro_rules! gesvd_complex {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      jobu:  *const c_char,
      jobvt: *const c_char,
      m:     *const c_int,
      n:     *const c_int,
      a:     *mut   $type_name,
      lda:   *const c_int,
      s:     *mut   $real_type,
      u:     *mut   $type_name,
      ldu:   *const c_int,
      vt:    *mut   $type_name,
      ldvt:  *const c_int,
      work:  *mut   $type_name,
      lwork: *const c_int,
      rwork: *mut   $real_type,
      info:  *mut   c_int,
    );
  };
}

extern "C" {
  gesvd_real!(sgesvd_, f32);
  gesvd_real!(dgesvd_, f64);
  gesvd_complex!(cgesvd_, Complex32, f32);
  gesvd_complex!(zgesvd_, Complex64, f64);
}

macro_rules! ggesx_real {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      jobvsl: *const c_char,
      jobvsr: *const c_char,
      sort:   *const c_char,
      selctg: Select3<$type_name>,
      sense:  *const c_char,
      n:      *const c_int,
      a:      *mut   $type_name,
      lda:    *const c_int,
      b:      *mut   $type_name,
      ldb:    *const c_int,
      sdim:   *mut   c_int,
      alphar: *mut   $type_name,
      alphai: *mut   $type_name,
      beta:   *mut   $type_name,
      vsl:    *mut   $type_name,
      ldvsl:  *const c_int,
      vsr:    *mut   $type_name,
      ldvsr:  *const c_int,
      rconde: *mut   $type_name,
      rcondv: *mut   $type_name,
      work:   *mut   $type_name,
      lwork:  *const c_int,
      iwork:  *mut   c_int,
      liwork: *const c_int,
      bwork:  *mut   c_int,
      info:   *mut   c_int,
    );
  };
}

macro_rules! ggesx_complex {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      jobvsl: *const c_char,
      jobvsr: *const c_char,
      sort:   *const c_char,
      selctg: Select2<$type_name>,
      sense:  *const c_char,
      n:      *const c_int,
      a:      *mut   $type_name,
      lda:    *const c_int,
      b:      *mut   $type_name,
      ldb:    *const c_int,
      sdim:   *mut   c_int,
      alpha:  *mut   $type_name,
      beta:   *mut   $type_name,
      vsl:    *mut   $type_name,
      ldvsl:  *const c_int,
      vsr:    *mut   $type_name,
      ldvsr:  *const c_int,
      rconde: *mut   $real_type,
      rcondv: *mut   $real_type,
      work:   *mut   $type_name,
      lwork:  *const c_int,
      rwork:  *mut   $real_type,
      iwork:  *mut   c_int,
      liwork: *const c_int,
      bwork:  *mut   c_int,
      info:   *mut   c_int,
    );
  };
}

extern "C" {
  ggesx_real!(sggesx_, f32);
  ggesx_real!(dggesx_, f64);
  ggesx_complex!(cggesx_, Complex32, f32);
  ggesx_complex!(zggesx_, Complex64, f64);
}

macro_rules! larfg {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      n:     *const c_int,
      alpha: *mut   $type_name,
      x:     *mut   $type_name,
      incx:  *const c_int,
      tau:   *mut   $type_name,
    );
  };
}

extern "C" {
  larfg!(slarfg_, f32      );
  larfg!(dlarfg_, f64      );
  larfg!(clarfg_, Complex32);
  larfg!(zlarfg_, Complex64);
}

macro_rules! larft {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      direct: *const c_char,
      storev: *const c_char,
      n:      *const c_int,
      k:      *const c_int,
      v:      *const $type_name,
      ldv:    *const c_int,
      tau:    *const $type_name,
      t:      *mut   $type_name,
      ldt:    *const c_int,
    );
  };
}

extern "C" {
  larft!(slarft_, f32      );
  larft!(dlarft_, f64      );
  larft!(clarft_, Complex32);
  larft!(zlarft_, Complex64);
}

macro_rules! larfx {
  ($fn_name:ident, $type_name:ident) => {
    pub(super) fn $fn_name(
      side: *const c_char,
      m:    *const c_int,
      n:    *const c_int,
      v:    *const $type_name,
      tau:  *const $type_name,
      c:    *mut   $type_name,
      ldc:  *const c_int,
      work: *mut   $type_name,
    );
  };
}

extern "C" {
  larfx!(slarfx_, f32      );
  larfx!(dlarfx_, f64      );
  larfx!(clarfx_, Complex32);
  larfx!(zlarfx_, Complex64);
}

macro_rules! lange {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      norm: *const c_char,
      m:    *const c_int,
      n:    *const c_int,
      a:    *const $type_name,
      lda:  *const c_int,
      work: *mut   $real_type,
    ) -> $real_type;
  };
}

extern "C" {
  lange!(slange_, f32,       f32);
  lange!(dlange_, f64,       f64);
  lange!(clange_, Complex32, f32);
  lange!(zlange_, Complex64, f64);
}

macro_rules! lansy {
  ($fn_name:ident, $type_name:ident, $real_type:ident) => {
    pub(super) fn $fn_name(
      norm: *const c_char,
      uplo: *const c_char,
      n:    *const c_int,
      a:    *const $type_name,
      lda:  *const c_int,
      work: *mut   $real_type,
    ) -> $real_type;
  };
}

extern "C" {
  lansy!(slansy_, f32,       f32);
  lansy!(dlansy_, f64,       f64);
  lansy!(clansy_, Complex32, f32);
  lansy!(zlansy_, Complex64, f64);
}
