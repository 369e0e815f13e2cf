use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use slot_engine::{process, Constraint};
use std::hint::black_box;

/// A month of half-hour candidates, 08:00-20:00, with every third slot
/// duplicated so the sweep has real merging to do.
fn candidates(days: u32) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for d in 1..=days {
        for slot in 0..24u32 {
            let start = 8 * 60 + slot * 30;
            let end = start + 30;
            let entry = vec![
                format!("2025-03-{:02}T{:02}:{:02}:00", d, start / 60, start % 60),
                format!("2025-03-{:02}T{:02}:{:02}:00", d, end / 60, end % 60),
            ];
            if slot % 3 == 0 {
                out.push(entry.clone());
            }
            out.push(entry);
        }
    }
    // Reverse so the per-day sort is not handed pre-sorted input.
    out.reverse();
    out
}

fn bench_process(c: &mut Criterion) {
    let constraint = Constraint::business_hours();
    let mut group = c.benchmark_group("process");
    for days in [1u32, 7, 31] {
        let input = candidates(days);
        group.bench_with_input(BenchmarkId::from_parameter(input.len()), &input, |b, input| {
            b.iter(|| process(black_box(input), black_box(&constraint)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
