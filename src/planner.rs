//! The planner module provides a way to pre-compute the twiddle factors of a transform once and
//! reuse them across many transforms of the same size and direction.
//!
//! Every twiddle in the table is evaluated directly from its angle, so unlike the running
//! recurrence no twiddle depends on the previous one.
use std::iter::{Copied, StepBy};
use std::slice::Iter;

use num_traits::{Float, FloatConst, One};
use tracing::debug;

use crate::bits::ilog2;
use crate::complex::{real_from_usize, ComplexScalar};
use crate::error::FftError;
use crate::twiddles::TwiddleProvider;

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Use a negative exponent in the twiddle factor
    Forward = -1,
    /// Use a positive exponent in the twiddle factor, and normalize the output by `1/N`
    Reverse = 1,
}

impl Direction {
    /// The sign of the exponent in `exp(±2πi k / m)`
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => -T::one(),
            Direction::Reverse => T::one(),
        }
    }
}

/// The planner is responsible for pre-computing and storing the twiddle factors for all the
/// `log_2(N)` stages of the FFT.
///
/// Only the twiddles of the last stage are stored, `exp(s * 2πi k / N)` for `k = 0..N/2`. The
/// stage with block size `m` uses every `N / m`-th entry of that table.
#[derive(Debug, Clone)]
pub struct Planner<C> {
    twiddles: Vec<C>,
    len: usize,
    direction: Direction,
}

impl<C: ComplexScalar> Planner<C> {
    /// Create a `Planner` for an FFT of size `num_points`.
    /// The twiddle factors are pre-computed based on the provided [`Direction`].
    ///
    /// # Errors
    ///
    /// Returns [`FftError::NonPowerOfTwo`] if `num_points` is not a power of 2.
    pub fn new(num_points: usize, direction: Direction) -> Result<Self, FftError> {
        if !num_points.is_power_of_two() {
            debug!(num_points, "refusing to plan a transform that is not a power of two");
            return Err(FftError::NonPowerOfTwo { len: num_points });
        }

        let dist = num_points >> 1;
        let two = C::Real::one() + C::Real::one();
        let angle_mult = direction.sign::<C::Real>() * two * <C::Real as FloatConst>::PI()
            / real_from_usize::<C::Real>(num_points);

        let twiddles = (0..dist)
            .map(|k| C::cis(angle_mult * real_from_usize::<C::Real>(k)))
            .collect();

        debug!(num_points, log_n = ilog2(num_points), "planned twiddle table");

        Ok(Self {
            twiddles,
            len: num_points,
            direction,
        })
    }

    /// The transform size this planner was built for
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the planner covers zero points. [`Planner::new`] rejects zero, so this is `false`
    /// for every planner it returns.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<C: ComplexScalar> TwiddleProvider<C> for Planner<C> {
    type Stage<'a>
        = StepBy<Copied<Iter<'a, C>>>
    where
        Self: 'a;

    fn direction(&self) -> Direction {
        self.direction
    }

    fn stage_twiddles(&self, chunk_size: usize) -> Self::Stage<'_> {
        let stride = (self.len / chunk_size).max(1);
        self.twiddles.iter().copied().step_by(stride)
    }
}
