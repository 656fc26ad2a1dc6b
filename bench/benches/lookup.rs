use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ion_ci::{CiStruct, OwnStruct, OwnValue, from_value, from_value_ci, wrap};
use serde::Deserialize;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn make_struct(len: usize) -> OwnStruct {
    (0..len)
        .map(|i| (format!("Field_{i}"), i as i64))
        .collect()
}

fn linear_scan<'a>(fields: &'a OwnStruct, name: &str) -> Option<&'a OwnValue> {
    fields
        .iter()
        .find(|(field, _)| field.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for len in [4, 16, 64, 256] {
        let fields = make_struct(len);
        let queries: Vec<String> = (0..len).map(|i| format!("FIELD_{i}")).collect();

        group.bench_with_input(BenchmarkId::new("exact", len), &fields, |b, fields| {
            let exact: Vec<String> = (0..len).map(|i| format!("Field_{i}")).collect();
            b.iter(|| {
                for query in &exact {
                    black_box(fields.get(query));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("linear_scan", len), &fields, |b, fields| {
            b.iter(|| {
                for query in &queries {
                    black_box(linear_scan(fields, query));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("indexed", len), &fields, |b, fields| {
            let view = CiStruct::new(fields);
            b.iter(|| {
                for query in &queries {
                    black_box(view.get(query));
                }
            })
        });

        // Includes building the index on the first lookup.
        group.bench_with_input(BenchmarkId::new("fresh_view", len), &fields, |b, fields| {
            b.iter(|| {
                let view = CiStruct::new(fields);
                for query in &queries {
                    black_box(view.get(query));
                }
            })
        });
    }
    group.finish();
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct Row<'a> {
    user_id: i64,
    user_name: &'a str,
    email: Option<&'a str>,
    score: f64,
}

fn deserialize(c: &mut Criterion) {
    let mut fields = OwnStruct::new();
    fields.add("user_id", 42);
    fields.add("user_name", "ada");
    fields.add("email", "ada@example.com");
    fields.add("score", 9.5);
    let exact = OwnValue::from(fields);

    let mut fields = OwnStruct::new();
    fields.add("USER_ID", 42);
    fields.add("UserName", "ada");
    fields.add("User_Name", "ada");
    fields.add("Email", "ada@example.com");
    fields.add("SCORE", 9.5);
    let mixed = OwnValue::from(fields);

    let mut group = c.benchmark_group("deserialize");
    group.bench_function("from_value", |b| {
        b.iter(|| black_box(from_value::<Row>(black_box(&exact))))
    });
    group.bench_function("from_value_ci", |b| {
        b.iter(|| black_box(from_value_ci::<Row>(black_box(&mixed))))
    });
    group.bench_function("serialize_view", |b| {
        b.iter(|| black_box(ion_ci::to_value(&wrap(black_box(&mixed)))))
    });
    group.finish();
}

criterion_group!(benches, lookup, deserialize);
criterion_main!(benches);
