use std::ffi::c_int;

// ---------------------------------------------------------------------- //

/// Invocation errors: every variant marks a bug at the call site, never a
/// numerical outcome. Routine-specific outcomes (positive `info` codes)
/// are returned as ordinary `Ok` values instead, so callers can branch on
/// them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
  /// A dimension argument was negative. Checked before any call is made.
  NegativeDimension(&'static str),
  /// A dimension argument does not fit the backend's integer width.
  /// Checked before any call is made.
  DimensionTooLarge(&'static str),
  /// The backend reported an invalid argument (negative `info`).
  InvalidArgument(c_int),
  /// The backend returned a flag character outside the known set.
  UnknownFlagCode(char),
}

pub type LapackResult<T> = Result<T, Error>;
