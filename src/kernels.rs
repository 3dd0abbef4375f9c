//! Decimation-in-Time butterfly kernel
//!
//! One call performs one stage of the radix-2 DIT network over the whole buffer. The buffer is
//! expected to be in bit-reversed order before the first stage.
use crate::complex::ComplexScalar;

/// Runs the DIT stage with block size `chunk_size` over `buf`.
///
/// Every block of `chunk_size` elements is combined with its own two halves:
/// `buf[i]` and `buf[i + dist]`, with `dist = chunk_size / 2`, become
/// `buf[i] + w * buf[i + dist]` and `buf[i] - w * buf[i + dist]`.
///
/// The twiddle for offset `j` is the `j`-th item of `twiddles`; only the first `dist` items are
/// consumed. Each twiddle is applied to every block before the next one is drawn.
#[inline]
pub fn fft_dit_stage<C, I>(buf: &mut [C], chunk_size: usize, twiddles: I)
where
    C: ComplexScalar,
    I: Iterator<Item = C>,
{
    let big_n = buf.len();
    let dist = chunk_size >> 1;

    for (j, w) in twiddles.take(dist).enumerate() {
        for i in (j..big_n).step_by(chunk_size) {
            let t = w * buf[i + dist];
            buf[i + dist] = buf[i] - t;
            buf[i] = buf[i] + t;
        }
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::{assert_complex_closeness, gen_random_complex};

    use super::*;
    use crate::bits::bit_reverse_permute;
    use crate::planner::Direction;
    use crate::twiddles::Twiddles;

    fn naive_dft(input: &[Complex64]) -> Vec<Complex64> {
        let big_n = input.len();
        (0..big_n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(n, x)| {
                        let angle = -2.0 * std::f64::consts::PI * (k * n) as f64 / big_n as f64;
                        x * Complex64::from_polar(1.0, angle)
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn single_stage_of_two() {
        let mut buf = [Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];
        fft_dit_stage(&mut buf, 2, Twiddles::new(2, Direction::Forward));
        assert_eq!(buf, [Complex64::new(2.0, 0.0), Complex64::new(0.0, 0.0)]);
    }

    #[test]
    fn each_stage_leaves_block_dfts() {
        let log_n = 6;
        let big_n = 1 << log_n;
        let input = gen_random_complex::<f64>(big_n);

        let mut buf = input.clone();
        bit_reverse_permute(&mut buf, log_n);

        for stage in 1..=log_n {
            let chunk_size = 1 << stage;
            fft_dit_stage(&mut buf, chunk_size, Twiddles::new(chunk_size, Direction::Forward));

            // block `b` holds the DFT of the samples congruent to rev(b) mod N / chunk_size
            let num_blocks = big_n / chunk_size;
            for (block, chunk) in buf.chunks_exact(chunk_size).enumerate() {
                let residue = crate::bits::reverse_bits(block, log_n - stage);
                let sub: Vec<_> = input
                    .iter()
                    .skip(residue)
                    .step_by(num_blocks)
                    .copied()
                    .collect();
                assert_complex_closeness(chunk, &naive_dft(&sub), 1e-10);
            }
        }
    }

    #[test]
    fn consumes_only_half_a_block_of_twiddles() {
        let mut buf = vec![Complex64::new(1.0, 0.0); 8];
        let mut twiddles = Twiddles::new(8, Direction::Forward);
        fft_dit_stage(&mut buf, 8, twiddles.by_ref());
        // the fifth twiddle of an 8-point stage is w_8^4 = -1
        let next = twiddles.next().unwrap();
        assert!((next.re + 1.0).abs() < 1e-12 && next.im.abs() < 1e-12);
    }
}
