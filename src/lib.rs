//! A radix-2, in-place, decimation-in-time Fast Fourier Transform.
//!
//! The input is reordered by a bit reverse permutation, then combined by `log2(N)` butterfly
//! stages. Only power-of-two sizes are supported; any other size is rejected with
//! [`FftError::NonPowerOfTwo`] before the input is touched.
//!
//! The kernel is generic over [`ComplexScalar`], implemented for [`num_complex::Complex`] over
//! `f32` and `f64`.
//!
//! ```
//! use num_complex::Complex64;
//! use radix2fft::{fft, ifft, planner::Direction};
//!
//! let original: Vec<_> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let mut signal = original.clone();
//!
//! fft(&mut signal, Direction::Forward)?;
//! ifft(&mut signal)?;
//!
//! for (z, x) in signal.iter().zip(&original) {
//!     assert!((z - x).norm() < 1e-12);
//! }
//! # Ok::<(), radix2fft::FftError>(())
//! ```
#![forbid(unsafe_code)]

pub use crate::complex::ComplexScalar;
pub use crate::error::FftError;
pub use crate::fft::{
    fft, fft_re_im, fft_with_opts, fft_with_planner, ifft, inverse_transform, transform,
};

pub mod bits;
mod complex;
mod error;
mod fft;
pub mod kernels;
pub mod options;
pub mod planner;
pub mod twiddles;
mod utils;
