use num_complex::{
  Complex32,
  Complex64,
  ComplexFloat,
};
use num_traits::{One, Zero};
use rand::{thread_rng, Rng};
use rand_distr::StandardNormal;

// Buffer generators backing the crate's tests and external harnesses:
// fresh standard-normal matrices, identity matrices and uninitialized
// output buffers in column-major order.

pub trait BufferGenerator: ComplexFloat {
  fn random_normal(size: usize) -> Vec<Self>;
  fn eye(m: usize) -> Vec<Self>;
  unsafe fn uninit_buff(size: usize) -> Vec<Self>;
}

macro_rules! real_buffer_generator_impl {
  ($type_name:ident) => {
    impl BufferGenerator for $type_name {
      fn random_normal(size: usize) -> Vec<Self> {
        let mut rng = thread_rng();
        (0..size).map(|_| rng.sample::<$type_name, _>(StandardNormal)).collect()
      }

      fn eye(m: usize) -> Vec<Self> {
        let mut buff = vec![Self::zero(); m * m];
        for i in 0..m {
          buff[i * (m + 1)] = Self::one();
        }
        buff
      }

      unsafe fn uninit_buff(size: usize) -> Vec<Self> {
        let mut buff = Vec::with_capacity(size);
        buff.set_len(size);
        buff
      }
    }
  };
}

real_buffer_generator_impl!(f32);
real_buffer_generator_impl!(f64);

macro_rules! complex_buffer_generator_impl {
  ($type_name:ident) => {
    impl BufferGenerator for $type_name {
      fn random_normal(size: usize) -> Vec<Self> {
        let mut rng = thread_rng();
        (0..size)
          .map(|_| {
            <$type_name>::new(
              rng.sample::<<$type_name as ComplexFloat>::Real, _>(StandardNormal),
              rng.sample::<<$type_name as ComplexFloat>::Real, _>(StandardNormal),
            )
          })
          .collect()
      }

      fn eye(m: usize) -> Vec<Self> {
        let mut buff = vec![Self::zero(); m * m];
        for i in 0..m {
          buff[i * (m + 1)] = Self::one();
        }
        buff
      }

      unsafe fn uninit_buff(size: usize) -> Vec<Self> {
        let mut buff = Vec::with_capacity(size);
        buff.set_len(size);
        buff
      }
    }
  };
}

complex_buffer_generator_impl!(Complex32);
complex_buffer_generator_impl!(Complex64);
