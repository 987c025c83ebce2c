use std::ffi::c_int;

use num_complex::Complex;

use crate::error::{Error, LapackResult};

// ---------------------------------------------------------------------- //

// Every logical dimension passes through here before the backend is
// called. Checked per argument, not per product.
pub(crate) fn to_lapack_int(value: i64, name: &'static str) -> LapackResult<c_int> {
  if value < 0 {
    return Err(Error::NegativeDimension(name));
  }
  if value > c_int::MAX as i64 {
    return Err(Error::DimensionTooLarge(name));
  }
  Ok(value as c_int)
}

// Negative info is an invalid-argument bug and becomes an error; zero and
// positive codes are routine-specific outcomes handed back to the caller.
pub(crate) fn check_info(info: c_int) -> LapackResult<i64> {
  if info < 0 {
    Err(Error::InvalidArgument(info))
  } else {
    Ok(info as i64)
  }
}

// Transient buffer written by the backend before it is read. The backend
// requires non-null array pointers, so zero lengths are clamped to one
// element.
pub(crate) unsafe fn scratch<T>(len: usize) -> Vec<T> {
  let len = std::cmp::max(len, 1);
  let mut buff = Vec::with_capacity(len);
  buff.set_len(len);
  buff
}

// Zips the split real/imaginary arrays some real-arithmetic routines
// report into one complex sequence, entry i with entry i. Conjugate-pair
// encodings pass through untouched.
pub(crate) unsafe fn merge_split_complex<T: Copy>(re: &[T], im: &[T], out: *mut Complex<T>) {
  for (i, (re, im)) in re.iter().zip(im.iter()).enumerate() {
    *out.add(i) = Complex::new(*re, *im);
  }
}

// ---------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use num_complex::Complex64;

  use super::*;

  #[test]
  fn test_to_lapack_int() {
    assert_eq!(to_lapack_int(0, "n"), Ok(0));
    assert_eq!(to_lapack_int(42, "n"), Ok(42));
    assert_eq!(to_lapack_int(c_int::MAX as i64, "n"), Ok(c_int::MAX));
    assert_eq!(to_lapack_int(-1, "n"), Err(Error::NegativeDimension("n")));
    assert_eq!(
      to_lapack_int(c_int::MAX as i64 + 1, "lda"),
      Err(Error::DimensionTooLarge("lda"))
    );
    assert_eq!(to_lapack_int(i64::MAX, "ldb"), Err(Error::DimensionTooLarge("ldb")));
  }

  #[test]
  fn test_check_info() {
    assert_eq!(check_info(0), Ok(0));
    assert_eq!(check_info(5), Ok(5));
    assert_eq!(check_info(-3), Err(Error::InvalidArgument(-3)));
  }

  #[test]
  fn test_merge_split_complex() {
    let re = [1., -2., 3., 0.];
    let im = [0.5, 0., -1.5, 4.];
    let mut out = vec![Complex64::new(0., 0.); 4];
    unsafe { merge_split_complex(&re, &im, out.as_mut_ptr()) };
    for i in 0..4 {
      assert_eq!(out[i], Complex64::new(re[i], im[i]));
    }
  }

  #[test]
  fn test_scratch_clamps_zero_length() {
    let buff: Vec<f64> = unsafe { scratch(0) };
    assert_eq!(buff.len(), 1);
  }
}
