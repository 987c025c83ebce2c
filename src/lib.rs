mod lapack_bind;
#[cfg(test)]
mod blas_bind;
mod error;
mod util;
pub mod flags;
pub mod init_utils;
mod solve;
mod posdef;
mod qr;
mod svd;
mod schur;
mod reflector;
mod norm;

pub use crate::error::{Error, LapackResult};
pub use crate::flags::{Direct, Equed, Factored, Job, Norm, Op, Sense, Side, Sort, StoreV, Uplo};
pub use crate::solve::{geequ, gesv, getrf, getrs, sytrf, Solve};
pub use crate::posdef::{pbcon, posvx, potrf, pstrf, PosDef};
pub use crate::qr::{geqrf, ungqr, Qr};
pub use crate::svd::{gesvd, Svd};
pub use crate::schur::{ggesx, SchurGen, Select2, Select3};
pub use crate::reflector::{larfg, larft, larfx, Reflector};
pub use crate::norm::{lange, lansy, MatNorm};

use std::fmt::Debug;

use num_complex::{Complex32, Complex64};

use crate::init_utils::BufferGenerator;

// This trait aggregates every capability the wrapper provides for a
// scalar kind, so generic callers can take a single bound.
pub trait Lapack:
  Solve + PosDef + Qr + Svd + SchurGen + Reflector + MatNorm + BufferGenerator + Send + Sync + Debug + 'static
{
}

impl Lapack for f32 {}
impl Lapack for f64 {}
impl Lapack for Complex32 {}
impl Lapack for Complex64 {}

// ---------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use super::*;

  // one bound suffices for a caller mixing several routine families
  fn norm_then_factor<T: Lapack>(n: usize, a: &mut [T]) -> (T::Real, i64) {
    let norm = unsafe { lange(Norm::Fro, n as i64, n as i64, a.as_ptr(), n as i64) }.unwrap();
    let mut tau = vec![T::zero(); n];
    let info =
      unsafe { geqrf(n as i64, n as i64, a.as_mut_ptr(), n as i64, tau.as_mut_ptr()) }.unwrap();
    (norm, info)
  }

  #[test]
  fn test_single_generic_bound() {
    let n = 4;
    let mut a = f64::random_normal(n * n);
    let (norm, info) = norm_then_factor(n, &mut a);
    assert_eq!(info, 0);
    assert!(norm > 0.);
    let mut a = Complex64::random_normal(n * n);
    let (norm, info) = norm_then_factor(n, &mut a);
    assert_eq!(info, 0);
    assert!(norm > 0.);
  }
}
