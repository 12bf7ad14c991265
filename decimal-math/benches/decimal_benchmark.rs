use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decimal_math::{decimal_compute, multiply_money_by_factor, Op};

fn bench_compute(c: &mut Criterion) {
    c.bench_function("add_auto_scale", |b| {
        b.iter(|| decimal_compute(Op::Add, black_box(0.1), black_box(0.2), None))
    });

    c.bench_function("mul_out_scale_2", |b| {
        b.iter(|| decimal_compute(Op::Mul, black_box(19.99), black_box(3.0), Some(2)))
    });

    c.bench_function("div_out_scale_4", |b| {
        b.iter(|| decimal_compute(Op::Div, black_box(10.0), black_box(3.0), Some(4)))
    });

    c.bench_function("money_by_factor", |b| {
        b.iter(|| multiply_money_by_factor(black_box(100.00), black_box(0.0825)))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
