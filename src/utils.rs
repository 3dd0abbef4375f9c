//! Utility functions to move between split real/imaginary buffers and complex samples

use num_complex::Complex;
use num_traits::Float;

/// Utility function to combine separate slices of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub(crate) fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}

/// Writes the components of `signal` back into separate real and imaginary slices.
///
/// # Panics
///
/// Panics if the three slices do not all have the same length.
pub(crate) fn separate_re_im<T: Float>(signal: &[Complex<T>], reals: &mut [T], imags: &mut [T]) {
    assert_eq!(signal.len(), reals.len());
    assert_eq!(reals.len(), imags.len());

    for ((z, z_re), z_im) in signal.iter().zip(reals.iter_mut()).zip(imags.iter_mut()) {
        *z_re = z.re;
        *z_im = z.im;
    }
}
