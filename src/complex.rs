//! The complex scalar abstraction the kernel is generic over.
//!
//! Everything on the hot path is monomorphised over [`ComplexScalar`], so there is no dynamic
//! dispatch inside the butterfly loops. An implementation is provided for
//! [`num_complex::Complex`] over any `num_traits` float, which covers `f32` and `f64`.
use std::ops::{Add, Mul, Sub};

use num_complex::Complex;
use num_traits::{Float, FloatConst, One, Zero};

/// A complex number with the field operations needed by the FFT.
pub trait ComplexScalar:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The underlying real type
    type Real: Float + FloatConst;

    /// Builds `re + i * im`
    fn new(re: Self::Real, im: Self::Real) -> Self;

    /// The multiplicative identity, `1 + 0i`
    fn one() -> Self {
        Self::new(Self::Real::one(), Self::Real::zero())
    }

    /// Builds `cos(theta) + i * sin(theta)`
    fn cis(theta: Self::Real) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    /// Multiplies both components by a real factor
    fn scale(self, factor: Self::Real) -> Self;
}

/// Converts a size or index to the real type.
///
/// Every `usize` is in range for `f32` and `f64` (possibly rounded), so the fallback is never hit
/// for the float types this crate is used with.
#[inline]
pub(crate) fn real_from_usize<R: Float>(n: usize) -> R {
    R::from(n).unwrap_or_else(R::max_value)
}

impl<T: Float + FloatConst> ComplexScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn new(re: T, im: T) -> Self {
        Complex::new(re, im)
    }

    #[inline]
    fn scale(self, factor: T) -> Self {
        Complex::new(self.re * factor, self.im * factor)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn cis_on_the_unit_circle() {
        let z = <Complex<f64> as ComplexScalar>::cis(FRAC_PI_2);
        assert_float_closeness(z.re, 0.0, 1e-15);
        assert_float_closeness(z.im, 1.0, 1e-15);

        let z = <Complex<f64> as ComplexScalar>::cis(PI);
        assert_float_closeness(z.re, -1.0, 1e-15);
        assert_float_closeness(z.im, 0.0, 1e-15);
    }

    #[test]
    fn one_and_scale() {
        let one = <Complex<f32> as ComplexScalar>::one();
        assert_eq!(one, Complex::new(1.0, 0.0));
        assert_eq!(Complex::new(2.0f32, -4.0).scale(0.5), Complex::new(1.0, -2.0));
    }
}
