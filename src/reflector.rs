use num_complex::{
  Complex32,
  Complex64,
  ComplexFloat,
};

use crate::error::LapackResult;
use crate::flags::{Direct, Side, StoreV};
use crate::lapack_bind::{slarfg_, dlarfg_, clarfg_, zlarfg_};
use crate::lapack_bind::{slarft_, dlarft_, clarft_, zlarft_};
use crate::lapack_bind::{slarfx_, dlarfx_, clarfx_, zlarfx_};
use crate::util::{scratch, to_lapack_int};

/// Scalar-kind capability set for the elementary reflector routines.
/// None of them report an `info` code; only the argument adapter can
/// fail.
pub trait Reflector: ComplexFloat {
  unsafe fn larfg(n: i64, alpha: &mut Self, x: *mut Self, incx: i64, tau: &mut Self)
    -> LapackResult<()>;

  unsafe fn larft(
    direct: Direct,
    storev: StoreV,
    n: i64,
    k: i64,
    v: *const Self,
    ldv: i64,
    tau: *const Self,
    t: *mut Self,
    ldt: i64,
  ) -> LapackResult<()>;

  unsafe fn larfx(
    side: Side,
    m: i64,
    n: i64,
    v: *const Self,
    tau: Self,
    c: *mut Self,
    ldc: i64,
  ) -> LapackResult<()>;
}

macro_rules! impl_reflector {
  ($type_name:ident, $larfg:ident, $larft:ident, $larfx:ident) => {
    impl Reflector for $type_name {
      unsafe fn larfg(
        n: i64,
        alpha: &mut Self,
        x: *mut Self,
        incx: i64,
        tau: &mut Self,
      ) -> LapackResult<()> {
        let n_ = to_lapack_int(n, "n")?;
        let incx_ = to_lapack_int(incx, "incx")?;
        $larfg(&n_, alpha, x, &incx_, tau);
        Ok(())
      }

      unsafe fn larft(
        direct: Direct,
        storev: StoreV,
        n: i64,
        k: i64,
        v: *const Self,
        ldv: i64,
        tau: *const Self,
        t: *mut Self,
        ldt: i64,
      ) -> LapackResult<()> {
        let direct_ = direct.to_char();
        let storev_ = storev.to_char();
        let n_ = to_lapack_int(n, "n")?;
        let k_ = to_lapack_int(k, "k")?;
        let ldv_ = to_lapack_int(ldv, "ldv")?;
        let ldt_ = to_lapack_int(ldt, "ldt")?;
        $larft(&direct_, &storev_, &n_, &k_, v, &ldv_, tau, t, &ldt_);
        Ok(())
      }

      unsafe fn larfx(
        side: Side,
        m: i64,
        n: i64,
        v: *const Self,
        tau: Self,
        c: *mut Self,
        ldc: i64,
      ) -> LapackResult<()> {
        let side_ = side.to_char();
        let m_ = to_lapack_int(m, "m")?;
        let n_ = to_lapack_int(n, "n")?;
        let ldc_ = to_lapack_int(ldc, "ldc")?;
        // fixed-size workspace, from the interface docs
        let lwork = match side {
          Side::Left => n,
          Side::Right => m,
        };
        let mut work: Vec<Self> = scratch(lwork as usize);
        $larfx(&side_, &m_, &n_, v, &tau, c, &ldc_, work.as_mut_ptr());
        Ok(())
      }
    }
  };
}

impl_reflector!(f32,       slarfg_, slarft_, slarfx_);
impl_reflector!(f64,       dlarfg_, dlarft_, dlarfx_);
impl_reflector!(Complex32, clarfg_, clarft_, clarfx_);
impl_reflector!(Complex64, zlarfg_, zlarft_, zlarfx_);

// ---------------------------------------------------------------------- //

/// Generates an elementary reflector H of order n such that
///
/// H^H [alpha; x] = [beta; 0],  H^H H = I,
///
/// with beta real. H is represented as H = I - tau [1; v] [1; v]^H, where
/// v is an (n-1)-element vector.
///
/// If every element of x is zero and alpha is real, tau is zero and H is
/// the identity. On exit `alpha` is overwritten with beta and `x` with v.
/// `x` has length 1 + (n-2)*incx and `incx` must be positive.
pub unsafe fn larfg<T: Reflector>(
  n: i64,
  alpha: &mut T,
  x: *mut T,
  incx: i64,
  tau: &mut T,
) -> LapackResult<()> {
  T::larfg(n, alpha, x, incx, tau)
}

/// Forms the triangular factor T of a block reflector from k elementary
/// reflectors, H = I - V T V^H.
pub unsafe fn larft<T: Reflector>(
  direct: Direct,
  storev: StoreV,
  n: i64,
  k: i64,
  v: *const T,
  ldv: i64,
  tau: *const T,
  t: *mut T,
  ldt: i64,
) -> LapackResult<()> {
  T::larft(direct, storev, n, k, v, ldv, tau, t, ldt)
}

/// Applies an elementary reflector H = I - tau v v^H to an m-by-n matrix
/// from the given side, using unrolled kernels for small orders.
pub unsafe fn larfx<T: Reflector>(
  side: Side,
  m: i64,
  n: i64,
  v: *const T,
  tau: T,
  c: *mut T,
  ldc: i64,
) -> LapackResult<()> {
  T::larfx(side, m, n, v, tau, c, ldc)
}

// ---------------------------------------------------------------------- //
