//! Benchmarks for Pauli-sum arithmetic
//!
//! Run with: cargo bench -p arvak-pauli

use arvak_pauli::{QubitHamiltonian, paulis};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use num_complex::Complex64;

/// Transverse-field Ising chain: Σ Z_i Z_{i+1} + 0.5 Σ X_i
fn ising(n: u32) -> QubitHamiltonian {
    let zz: QubitHamiltonian = (0..n - 1).map(|q| paulis::z(q) * paulis::z(q + 1)).sum();
    let x: QubitHamiltonian = (0..n).map(paulis::x).sum();
    zz + 0.5 * x
}

/// Benchmark operator multiplication (|A|·|B| term pairs)
fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for n in &[4_u32, 8, 16, 32] {
        let h = ising(*n);
        group.bench_with_input(BenchmarkId::new("ising_squared", n), &h, |b, h| {
            b.iter(|| black_box(h) * black_box(h));
        });
    }

    group.finish();
}

/// Benchmark addition and adjoint
fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    let h = ising(32);
    let g = Complex64::new(0.0, 1.0) * ising(32);

    group.bench_function("add", |b| b.iter(|| black_box(&h) + black_box(&g)));
    group.bench_function("dagger", |b| b.iter(|| black_box(&g).dagger()));

    group.finish();
}

/// Benchmark transfer-operator decomposition
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_operator");

    for n in &[2_u64, 4, 8] {
        let ket = (1_u64 << n) - 1;
        group.bench_with_input(BenchmarkId::new("all_ones_to_zero", n), &ket, |b, &ket| {
            b.iter(|| paulis::decompose_transfer_operator(black_box(ket), 0_u64, None).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_linear, bench_transfer);
criterion_main!(benches);
