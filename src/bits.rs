//! Bit-level helpers for the decimation-in-time FFT: the base-2 logarithm of the transform size
//! and the bit reverse permutation that puts the input into the order the butterfly stages expect.
//!
//! After [`bit_reverse_permute`], stage `p` of the network always combines elements at stride
//! `2^p` with an intra-block offset of `2^(p-1)`, regardless of the original ordering.

/// Integer base-2 logarithm.
///
/// For a power of two `n`, returns the unique `k` with `2^k == n`. For any other non-zero `n` the
/// result is `floor(log2(n))`, and `0` is returned for `n == 0`. Rejecting sizes that are not a
/// power of two is left to the caller.
#[inline]
pub fn ilog2(n: usize) -> usize {
    n.checked_ilog2().unwrap_or(0) as usize
}

/// Reverses the lowest `lgn` bits of `x`.
///
/// Bits above `lgn` are discarded. `lgn == 0` always yields `0`.
#[inline]
pub fn reverse_bits(x: usize, lgn: usize) -> usize {
    if lgn == 0 {
        return 0;
    }
    let shift = usize::BITS as usize - lgn;
    x.reverse_bits() >> shift
}

/// In-place bit reverse permutation of `buf`, whose length must be `2^log_n`.
///
/// Each unordered pair `{i, rev(i)}` is swapped exactly once (only when `i < rev(i)`), so fixed
/// points stay where they are.
pub fn bit_reverse_permute<T>(buf: &mut [T], log_n: usize) {
    let big_n = buf.len();
    debug_assert_eq!(big_n, 1 << log_n);

    for i in 0..big_n {
        let j = reverse_bits(i, log_n);
        if i < j {
            buf.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slow but obviously correct bit reversal, to be used in tests
    fn reverse_bits_naive(mut x: usize, bits: usize) -> usize {
        let mut result = 0;
        for _ in 0..bits {
            result = (result << 1) | (x & 1);
            x >>= 1;
        }
        result
    }

    #[test]
    fn ilog2_of_powers_of_two() {
        for k in 0..usize::BITS as usize {
            assert_eq!(ilog2(1 << k), k);
        }
        assert_eq!(ilog2(0), 0);
        assert_eq!(ilog2(6), 2);
    }

    #[test]
    fn reverse_bits_matches_naive() {
        for lgn in 0..12 {
            for x in 0..(1 << lgn) {
                assert_eq!(reverse_bits(x, lgn), reverse_bits_naive(x, lgn));
            }
        }
        assert_eq!(reverse_bits(0b0011, 4), 0b1100);
        assert_eq!(reverse_bits(0b1, 3), 0b100);
    }

    #[test]
    fn permutation_of_eight() {
        let mut buf: Vec<usize> = (0..8).collect();
        bit_reverse_permute(&mut buf, 3);
        assert_eq!(buf, [0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn permutation_is_an_involution() {
        for log_n in 0..14 {
            let big_n = 1 << log_n;
            let original: Vec<usize> = (0..big_n).collect();
            let mut buf = original.clone();

            bit_reverse_permute(&mut buf, log_n);
            for (i, v) in buf.iter().enumerate() {
                assert_eq!(*v, reverse_bits_naive(i, log_n));
            }

            bit_reverse_permute(&mut buf, log_n);
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn palindromic_indices_stay_put() {
        let mut buf: Vec<usize> = (0..16).collect();
        bit_reverse_permute(&mut buf, 4);
        for i in [0, 6, 9, 15] {
            assert_eq!(buf[i], i);
        }
    }
}
