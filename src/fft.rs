//! Radix-2 Decimation-in-Time FFT driver
//!
//! 1. Validate that the input length is a power of two
//! 2. Apply the bit reverse permutation to the input
//! 3. Run the butterfly stages with block sizes `2, 4, ..., N`
//! 4. Normalize by `1/N` for the inverse transform
//!
//! All transforms run in place on the caller's buffer, except [`transform`] and
//! [`inverse_transform`], which work on a copy and leave their input untouched.
use num_traits::{Float, FloatConst, One};
use tracing::{debug, instrument, trace};

use crate::bits::{bit_reverse_permute, ilog2};
use crate::complex::{real_from_usize, ComplexScalar};
use crate::error::FftError;
use crate::kernels::fft_dit_stage;
use crate::options::{Options, TwiddleStrategy};
use crate::planner::{Direction, Planner};
use crate::twiddles::{Recurrence, TwiddleProvider};
use crate::utils::{combine_re_im, separate_re_im};

/// Returns `log2(len)`, or an error if `len` is not a power of two.
fn checked_log2(len: usize) -> Result<usize, FftError> {
    let log_n = ilog2(len);
    if len == 0 || 1 << log_n != len {
        debug!(len, "input length is not a power of two");
        return Err(FftError::NonPowerOfTwo { len });
    }
    Ok(log_n)
}

/// Runs the full transform on a buffer whose length is known to be `2^log_n`.
fn fft_with_twiddles<C, P>(buf: &mut [C], log_n: usize, twiddles: &P)
where
    C: ComplexScalar,
    P: TwiddleProvider<C>,
{
    let big_n = buf.len();
    if big_n == 1 {
        return;
    }

    bit_reverse_permute(buf, log_n);

    for stage in 1..=log_n {
        let chunk_size = 1 << stage;
        trace!(stage, chunk_size, "butterfly stage");
        fft_dit_stage(buf, chunk_size, twiddles.stage_twiddles(chunk_size));
    }

    // Scaling for inverse transform
    if let Direction::Reverse = twiddles.direction() {
        let scaling_factor = C::Real::one() / real_from_usize::<C::Real>(big_n);
        for z in buf.iter_mut() {
            *z = z.scale(scaling_factor);
        }
    }
}

/// FFT with the default [`Options`]
///
/// The transform runs in place. The forward transform is not normalized; the reverse transform
/// is normalized by `1/N`, so `ifft(fft(x)) == x` up to rounding.
///
/// # Errors
///
/// Returns [`FftError::NonPowerOfTwo`] if `buf.len()` is not a power of 2. `buf` is left
/// unmodified in that case.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use radix2fft::{fft, planner::Direction};
///
/// let mut signal = [1.0, 0.0, 1.0, 0.0].map(|re| Complex64::new(re, 0.0));
/// fft(&mut signal, Direction::Forward).unwrap();
/// assert_eq!(signal, [2.0, 0.0, 2.0, 0.0].map(|re| Complex64::new(re, 0.0)));
/// ```
pub fn fft<C: ComplexScalar>(buf: &mut [C], direction: Direction) -> Result<(), FftError> {
    fft_with_opts(buf, direction, &Options::default())
}

/// Inverse FFT, i.e. [`fft`] with [`Direction::Reverse`]
///
/// # Errors
///
/// See [`fft`].
pub fn ifft<C: ComplexScalar>(buf: &mut [C]) -> Result<(), FftError> {
    fft(buf, Direction::Reverse)
}

/// FFT with explicit [`Options`]
///
/// # Errors
///
/// See [`fft`].
#[instrument(level = "debug", skip_all, fields(len = buf.len(), direction = ?direction))]
pub fn fft_with_opts<C: ComplexScalar>(
    buf: &mut [C],
    direction: Direction,
    opts: &Options,
) -> Result<(), FftError> {
    let log_n = checked_log2(buf.len())?;

    match opts.twiddles {
        TwiddleStrategy::Recurrence => {
            fft_with_twiddles(buf, log_n, &Recurrence::new(direction));
        }
        TwiddleStrategy::Table => {
            let planner = Planner::<C>::new(buf.len(), direction)?;
            fft_with_twiddles(buf, log_n, &planner);
        }
    }
    Ok(())
}

/// FFT using the twiddle table of a pre-built [`Planner`]
///
/// The direction is the one the planner was built for.
///
/// # Errors
///
/// Returns [`FftError::NonPowerOfTwo`] if `buf.len()` is not a power of 2, or
/// [`FftError::PlanMismatch`] if the planner was built for a different size. `buf` is left
/// unmodified in both cases.
#[instrument(level = "debug", skip_all, fields(len = buf.len(), direction = ?planner.direction()))]
pub fn fft_with_planner<C: ComplexScalar>(
    buf: &mut [C],
    planner: &Planner<C>,
) -> Result<(), FftError> {
    let log_n = checked_log2(buf.len())?;
    if planner.len() != buf.len() {
        debug!(expected = planner.len(), "planner size mismatch");
        return Err(FftError::PlanMismatch {
            expected: planner.len(),
            actual: buf.len(),
        });
    }

    fft_with_twiddles(buf, log_n, planner);
    Ok(())
}

/// Transforms a copy of `input` and returns it, leaving `input` untouched.
///
/// # Errors
///
/// See [`fft`].
pub fn transform<C: ComplexScalar>(input: &[C], direction: Direction) -> Result<Vec<C>, FftError> {
    let mut output = input.to_vec();
    fft(&mut output, direction)?;
    Ok(output)
}

/// Inverse transform of a copy of `input`, i.e. [`transform`] with [`Direction::Reverse`]
///
/// # Errors
///
/// See [`fft`].
pub fn inverse_transform<C: ComplexScalar>(input: &[C]) -> Result<Vec<C>, FftError> {
    transform(input, Direction::Reverse)
}

/// FFT on a signal stored as separate real and imaginary components
///
/// Both slices are modified in place.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`, or
/// [`FftError::NonPowerOfTwo`] if the length is not a power of 2. Neither slice is modified on
/// error.
pub fn fft_re_im<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    direction: Direction,
) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::LengthMismatch {
            reals: reals.len(),
            imags: imags.len(),
        });
    }
    checked_log2(reals.len())?;

    let mut signal = combine_re_im(reals, imags);
    fft(&mut signal, direction)?;
    separate_re_im(&signal, reals, imags);
    Ok(())
}
