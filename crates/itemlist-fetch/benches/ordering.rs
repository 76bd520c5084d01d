use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use itemlist_fetch::core::decode_records;
use itemlist_fetch::{OrderingPolicy, Record};

/// Roughly the shape of the real list: a few groups, some blank names.
fn sample_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let name = match i % 5 {
                0 => None,
                1 => Some(String::new()),
                _ => Some(format!("Item {}", (i * 7919) % 1000)),
            };
            Record {
                list_id: (i % 4) as i64 + 1,
                name,
                id: i as i64,
            }
        })
        .collect()
}

fn bench_ordering_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering_policies");

    for count in [100usize, 1_000, 10_000].iter() {
        let records = sample_records(*count);
        group.throughput(Throughput::Elements(*count as u64));

        for policy in [OrderingPolicy::FilterAndSort, OrderingPolicy::GroupOnly] {
            group.bench_with_input(
                BenchmarkId::new(policy.to_string(), count),
                &records,
                |b, records| {
                    b.iter(|| policy.apply(black_box(records.clone())));
                },
            );
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_records");

    for count in [1_000usize, 10_000].iter() {
        let body = serde_json::to_vec(&sample_records(*count)).unwrap();
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("json_array", count), &body, |b, body| {
            b.iter(|| decode_records(black_box(body)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ordering_policies, bench_decode);
criterion_main!(benches);
