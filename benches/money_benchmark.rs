// ============================================================================
// Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Registry - Alphabetic and date-aware numeric lookup
// 2. Minting - Exact, text, and float inputs with and without quantization
// 3. Arithmetic - Operator front-ends versus the descriptor dispatcher
// 4. Rounding - Minor-unit rounding for decimal and non-decimal units
// ============================================================================

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use moneymint::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn benchmark_registry_lookup(c: &mut Criterion) {
    let set = iso::currencies().unwrap();
    let mut group = c.benchmark_group("registry_lookup");

    group.bench_function("alpha3", |b| {
        b.iter(|| black_box(set.get(black_box("EUR"), None)))
    });

    group.bench_function("numeric_single", |b| {
        b.iter(|| black_box(set.get(black_box(978u16), None)))
    });

    let date = NaiveDate::from_ymd_opt(1988, 6, 1).unwrap();
    group.bench_function("numeric_reused_by_date", |b| {
        b.iter(|| black_box(set.get(black_box(604u16), Some(date))))
    });

    group.finish();
}

fn benchmark_registry_build(c: &mut Criterion) {
    c.bench_function("registry_build_iso", |b| {
        b.iter(|| black_box(CurrencySet::from_source(&IsoDataset)))
    });
}

// ============================================================================
// Minting Benchmarks
// ============================================================================

fn benchmark_mint(c: &mut Criterion) {
    let eur = iso::get("EUR", None).unwrap();
    let quantized = MintOptions::default().quantized();
    let mut group = c.benchmark_group("mint");

    group.bench_function("decimal", |b| {
        let value = Decimal::new(1999, 2);
        b.iter(|| black_box(eur.mint(black_box(value))))
    });

    group.bench_function("text", |b| {
        b.iter(|| black_box(eur.mint(black_box("19.99"))))
    });

    group.bench_function("float_healed", |b| {
        b.iter(|| black_box(eur.mint(black_box(19.99f64))))
    });

    group.bench_function("float_quantized", |b| {
        b.iter(|| black_box(eur.mint_with(black_box(3.14159f64), &quantized)))
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let eur = iso::get("EUR", None).unwrap();
    let a = eur.mint("1234.56").unwrap();
    let b_money = eur.mint("78.90").unwrap();
    let ctx = Context::default();
    let mut group = c.benchmark_group("arithmetic");

    group.bench_function("add_operator", |b| {
        b.iter(|| black_box(&a + &b_money))
    });

    group.bench_function("add_dispatch", |b| {
        b.iter(|| black_box(a.apply(MathOp::Add, Operand::Money(&b_money), &ctx)))
    });

    group.bench_function("mul_scalar", |b| {
        b.iter(|| black_box(&a * black_box(3)))
    });

    group.bench_function("div_money_ratio", |b| {
        b.iter(|| black_box(&a / &b_money))
    });

    group.bench_function("mismatched_currency", |b| {
        let usd = iso::mint(1, "USD").unwrap();
        b.iter(|| black_box(&a + &usd))
    });

    group.finish();
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_round_to_minor(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_to_minor");

    for denominator in [5u32, 100, 1000].iter() {
        let currency = Arc::new(Currency::new("XTS", 963).with_denominator(*denominator));
        let money = currency.mint("1234.56789").unwrap();

        group.bench_with_input(BenchmarkId::new("half_up", denominator), &money, |b, money| {
            b.iter(|| black_box(money.round_to_minor(Rounding::HalfUp)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_registry_lookup,
    benchmark_registry_build,
    benchmark_mint,
    benchmark_arithmetic,
    benchmark_round_to_minor,
);
criterion_main!(benches);
