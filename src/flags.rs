use std::ffi::c_char;

use crate::error::{Error, LapackResult};

// ---------------------------------------------------------------------- //

// Each enumeration maps bijectively onto the single-character codes the
// Fortran interface consumes. `from_char` exists for the codes the
// backend writes back (posvx rewrites equed); unrecognized codes are an
// error, never a silent default.

macro_rules! flag_codec {
  ($enum_name:ident, $($variant:ident => $code:literal),+ $(,)?) => {
    impl $enum_name {
      pub fn to_char(self) -> c_char {
        match self {
          $( $enum_name::$variant => $code as c_char, )+
        }
      }

      pub fn from_char(code: c_char) -> LapackResult<Self> {
        match code as u8 as char {
          $( $code => Ok($enum_name::$variant), )+
          other => Err(Error::UnknownFlagCode(other)),
        }
      }
    }
  };
}

/// Which triangle of a symmetric, Hermitian or triangular matrix is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uplo {
  Upper,
  Lower,
}

flag_codec!(Uplo, Upper => 'U', Lower => 'L');

/// Transposition applied to a matrix operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  NoTrans,
  Trans,
  ConjTrans,
}

flag_codec!(Op, NoTrans => 'N', Trans => 'T', ConjTrans => 'C');

/// Side a transformation is applied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Left,
  Right,
}

flag_codec!(Side, Left => 'L', Right => 'R');

/// Which vectors an eigen/singular-value routine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
  NoVec,
  Vec,
  UpdateVec,
  AllVec,
  SomeVec,
  OverwriteVec,
}

flag_codec!(
  Job,
  NoVec => 'N',
  Vec => 'V',
  UpdateVec => 'U',
  AllVec => 'A',
  SomeVec => 'S',
  OverwriteVec => 'O',
);

/// Whether generalized Schur eigenvalues are ordered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
  NotSorted,
  Sorted,
}

flag_codec!(Sort, NotSorted => 'N', Sorted => 'S');

/// Which reciprocal condition numbers a Schur routine estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
  None,
  Eigenvalues,
  Subspaces,
  Both,
}

flag_codec!(Sense, None => 'N', Eigenvalues => 'E', Subspaces => 'V', Both => 'B');

/// Equilibration applied to a system before factoring; expert drivers
/// both consume and report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equed {
  None,
  Row,
  Col,
  Both,
}

flag_codec!(Equed, None => 'N', Row => 'R', Col => 'C', Both => 'B');

/// Whether an expert driver receives an already-factored matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factored {
  Factored,
  NotFactored,
  Equilibrated,
}

flag_codec!(Factored, Factored => 'F', NotFactored => 'N', Equilibrated => 'E');

/// Order in which elementary reflectors are multiplied into a block
/// reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direct {
  Forward,
  Backward,
}

flag_codec!(Direct, Forward => 'F', Backward => 'B');

/// How reflector vectors are laid out in their storage matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreV {
  Columnwise,
  Rowwise,
}

flag_codec!(StoreV, Columnwise => 'C', Rowwise => 'R');

/// Matrix norm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Norm {
  Max,
  One,
  Inf,
  Fro,
}

flag_codec!(Norm, Max => 'M', One => '1', Inf => 'I', Fro => 'F');

// ---------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
  use super::*;

  macro_rules! assert_roundtrip {
    ($enum_name:ident, $($variant:ident),+ $(,)?) => {
      $(
        assert_eq!(
          $enum_name::from_char($enum_name::$variant.to_char()),
          Ok($enum_name::$variant),
        );
      )+
    };
  }

  #[test]
  fn test_codec_roundtrip() {
    assert_roundtrip!(Uplo, Upper, Lower);
    assert_roundtrip!(Op, NoTrans, Trans, ConjTrans);
    assert_roundtrip!(Side, Left, Right);
    assert_roundtrip!(Job, NoVec, Vec, UpdateVec, AllVec, SomeVec, OverwriteVec);
    assert_roundtrip!(Sort, NotSorted, Sorted);
    assert_roundtrip!(Sense, None, Eigenvalues, Subspaces, Both);
    assert_roundtrip!(Equed, None, Row, Col, Both);
    assert_roundtrip!(Factored, Factored, NotFactored, Equilibrated);
    assert_roundtrip!(Direct, Forward, Backward);
    assert_roundtrip!(StoreV, Columnwise, Rowwise);
    assert_roundtrip!(Norm, Max, One, Inf, Fro);
  }

  #[test]
  fn test_unknown_code_rejected() {
    assert_eq!(Uplo::from_char('Q' as c_char), Err(Error::UnknownFlagCode('Q')));
    assert_eq!(Equed::from_char('x' as c_char), Err(Error::UnknownFlagCode('x')));
    assert_eq!(Norm::from_char('2' as c_char), Err(Error::UnknownFlagCode('2')));
  }
}
