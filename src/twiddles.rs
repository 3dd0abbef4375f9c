//! Twiddle factors for the butterfly stages.
//!
//! A stage with block size `m` needs the `m / 2` roots of unity `w_m^j = exp(s * 2πi * j / m)`,
//! `j = 0..m/2`, where `s` is the sign selected by the [`Direction`]. They are handed to the
//! stage as an iterator by a [`TwiddleProvider`]. Two providers exist:
//!
//! - [`Recurrence`]: evaluates `sin`/`cos` once per stage and walks the unit circle by repeated
//!   complex multiplication. This is the default.
//! - [`Planner`](crate::planner::Planner): precomputes a table of twiddles for the whole transform
//!   with one direct evaluation per entry, so no twiddle depends on another.
use num_traits::{FloatConst, One};

use crate::complex::{real_from_usize, ComplexScalar};
use crate::planner::Direction;

/// Supplies the twiddle factors for each stage of the transform.
pub trait TwiddleProvider<C: ComplexScalar> {
    /// Iterator over the twiddles of a single stage
    type Stage<'a>: Iterator<Item = C>
    where
        Self: 'a;

    /// The direction the twiddles are generated for
    fn direction(&self) -> Direction;

    /// Twiddles `w_m^0, w_m^1, ...` for the stage with block size `chunk_size`.
    ///
    /// The iterator must yield at least `chunk_size / 2` items.
    fn stage_twiddles(&self, chunk_size: usize) -> Self::Stage<'_>;
}

/// Running twiddle for one stage, advanced by a single complex multiplication per step.
///
/// The magnitude of the running value drifts by a few ulps over a stage. A stage never takes more
/// than `N / 2` steps, so the drift stays bounded.
pub struct Twiddles<C> {
    phase: C,
    w: C,
}

impl<C: ComplexScalar> Twiddles<C> {
    /// Start the recurrence for a stage of block size `chunk_size`, at `w = 1`.
    pub fn new(chunk_size: usize, direction: Direction) -> Self {
        let two = C::Real::one() + C::Real::one();
        let theta = direction.sign::<C::Real>() * two * <C::Real as FloatConst>::PI()
            / real_from_usize::<C::Real>(chunk_size);
        Self {
            phase: C::cis(theta),
            w: C::one(),
        }
    }
}

impl<C: ComplexScalar> Iterator for Twiddles<C> {
    type Item = C;

    #[inline]
    fn next(&mut self) -> Option<C> {
        let w = self.w;
        self.w = w * self.phase;
        Some(w)
    }
}

/// Twiddle provider that recomputes each stage's twiddles with [`Twiddles`].
///
/// Holds no state besides the direction, so one value can serve transforms of any size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Recurrence {
    direction: Direction,
}

impl Recurrence {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl<C: ComplexScalar> TwiddleProvider<C> for Recurrence {
    type Stage<'a> = Twiddles<C>;

    fn direction(&self) -> Direction {
        self.direction
    }

    fn stage_twiddles(&self, chunk_size: usize) -> Twiddles<C> {
        Twiddles::new(chunk_size, self.direction)
    }
}
