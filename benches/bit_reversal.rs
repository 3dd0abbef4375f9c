use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use radix2fft::bits::bit_reverse_permute;

pub fn bit_reversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_reverse_permute");

    for n in 10..20 {
        let big_n = 1 << n;
        let mut v: Vec<usize> = (0..big_n).collect();
        group.bench_with_input(criterion::BenchmarkId::new("swap", n), &n, |b, n| {
            b.iter(|| bit_reverse_permute(black_box(&mut v), black_box(*n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bit_reversal);
criterion_main!(benches);
