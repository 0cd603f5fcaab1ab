use alu_quote::config::RateDefaults;
use alu_quote::quote::{
    apply_custom_items, calculate, CustomLineItem, Dimensions, FinishType, QuoteRequest,
    SelectionMask,
};
use alu_quote::rates::{RateResolver, RawRates};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn seed_store() -> (RawRates, RateResolver) {
    let defaults = RateDefaults::default();
    let raw = RawRates::from_pairs(defaults.seed_rates());
    (raw, RateResolver::new(defaults))
}

fn bench_quote(c: &mut Criterion) {
    let (raw, resolver) = seed_store();
    let rates = resolver.resolve(&raw, FinishType::Color).unwrap();
    let dims = Dimensions::new(4.5, 6.0).unwrap();
    let selection = SelectionMask::all();

    c.bench_function("calculate", |b| {
        b.iter(|| {
            calculate(
                black_box(&dims),
                FinishType::Color,
                black_box(&rates),
                black_box(&selection),
            )
        })
    });

    let quote = calculate(&dims, FinishType::Color, &rates, &selection).unwrap();
    let items: Vec<CustomLineItem> = (0..10)
        .map(|i| CustomLineItem::new(format!("item {}", i), 25.0 * i as f64 - 100.0))
        .collect();
    c.bench_function("apply_custom_items", |b| {
        b.iter(|| apply_custom_items(black_box(&quote), black_box(&items)))
    });

    let request = QuoteRequest::new(4.5, 6.0, FinishType::Silver, SelectionMask::all());
    c.bench_function("resolve_and_quote", |b| {
        b.iter(|| request.evaluate(black_box(&raw), black_box(&resolver)))
    });
}

criterion_group!(benches, bench_quote);
criterion_main!(benches);
