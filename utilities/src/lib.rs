pub extern crate rustfft;

// export rustfft to radix2fft tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex sequences are element-wise approximately equal.
///
/// # Panics
///
/// Panics if the lengths differ or any pair of components is too far apart
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_float_closeness(a.re, e.re, epsilon);
        assert_float_closeness(a.im, e.im, epsilon);
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Generate a random signal of `len` complex samples with components in `[-1, 1)`
pub fn gen_random_complex<T>(len: usize) -> Vec<Complex<T>>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut reals = vec![T::zero(); len];
    let mut imags = vec![T::zero(); len];
    gen_random_signal(&mut reals, &mut imags);

    reals
        .into_iter()
        .zip(imags)
        .map(|(re, im)| Complex::new(re, im))
        .collect()
}
